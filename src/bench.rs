use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use crate::bubble::bubble_sort;
use crate::config::BenchConfig;
use crate::generate::generate_uniform;
use crate::heap::heap_sort;
use crate::insertion::insertion_sort;
use crate::merge::{hybrid_merge_sort, merge_sort};
use crate::quick::quick_sort;
use crate::selection::selection_sort;

/// One timed algorithm invocation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingRecord {
    pub algorithm: &'static str,
    pub size: usize,
    pub elapsed: Duration,
}

impl TimingRecord {
    pub fn micros(&self) -> u128 {
        self.elapsed.as_micros()
    }
}

/// Time `sort` on its own copy of the input. Taking the vector by value
/// keeps benchmark rounds from aliasing each other's data.
fn measure(
    algorithm: &'static str,
    mut data: Vec<i32>,
    sort: impl FnOnce(&mut [i32]),
) -> TimingRecord {
    let size = data.len();
    let start = Instant::now();
    sort(&mut data);
    let elapsed = start.elapsed();
    debug_assert!(data.windows(2).all(|w| w[0] <= w[1]));
    debug!("{algorithm} on {size} elements: {elapsed:?}");
    TimingRecord {
        algorithm,
        size,
        elapsed,
    }
}

/// Run every sorting algorithm over every configured input size.
///
/// Per size, one random sequence is generated and each algorithm gets a
/// fresh clone of it, so all algorithms of a round sort value-identical
/// inputs and one record is produced per (algorithm, size) pair.
pub fn run_benchmarks(config: &BenchConfig, rng: &mut impl Rng) -> Vec<TimingRecord> {
    assert!(config.hybrid_threshold >= 1, "hybrid threshold must be positive");
    assert!(
        config.sizes.iter().all(|&s| s > 0),
        "input sizes must be positive"
    );

    let threshold = config.hybrid_threshold;
    let mut records = Vec::with_capacity(config.sizes.len() * 7);
    for &size in &config.sizes {
        info!("generating input of size {size}");
        let input = generate_uniform(rng, size);

        records.push(measure("QuickSort", input.clone(), |arr| {
            quick_sort(arr, rng)
        }));
        records.push(measure("HeapSort", input.clone(), heap_sort));
        records.push(measure("HybridSort", input.clone(), |arr| {
            hybrid_merge_sort(arr, threshold)
        }));
        records.push(measure("MergeSort", input.clone(), merge_sort));
        records.push(measure("InsertionSort", input.clone(), insertion_sort));
        records.push(measure("SelectionSort", input.clone(), selection_sort));
        records.push(measure("BubbleSort", input, bubble_sort));
    }
    records
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn one_record_per_algorithm_and_size() {
        let mut rng = StdRng::seed_from_u64(12345);
        let config = BenchConfig {
            sizes: vec![10, 100],
            hybrid_threshold: 4,
        };
        let records = run_benchmarks(&config, &mut rng);
        assert_eq!(records.len(), 14);
        for size in [10, 100] {
            let names: Vec<&str> = records
                .iter()
                .filter(|r| r.size == size)
                .map(|r| r.algorithm)
                .collect();
            assert_eq!(
                names,
                [
                    "QuickSort",
                    "HeapSort",
                    "HybridSort",
                    "MergeSort",
                    "InsertionSort",
                    "SelectionSort",
                    "BubbleSort"
                ]
            );
        }
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn zero_size_is_rejected() {
        let mut rng = StdRng::seed_from_u64(12345);
        let config = BenchConfig {
            sizes: vec![0],
            hybrid_threshold: 32,
        };
        run_benchmarks(&config, &mut rng);
    }
}
