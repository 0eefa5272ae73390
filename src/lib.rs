pub mod bench;
pub mod config;
pub mod generate;

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod select;
mod selection;

pub use bench::{run_benchmarks, TimingRecord};
pub use bubble::bubble_sort;
pub use config::BenchConfig;
pub use generate::generate_uniform;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::{hybrid_merge_sort, merge_sort};
pub use quick::quick_sort;
pub use select::quick_select;
pub use selection::selection_sort;
