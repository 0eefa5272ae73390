/// Input sizes exercised by a default benchmark run.
pub const DEFAULT_SIZES: [usize; 5] = [1_000, 25_000, 50_000, 75_000, 100_000];

/// Sub-range length at or below which the hybrid merge sort falls back to
/// insertion sort.
pub const HYBRID_THRESHOLD: usize = 32;

pub const VALUE_MIN: i32 = -1_000_000;
pub const VALUE_MAX: i32 = 1_000_000;

const _: () = {
    assert!(HYBRID_THRESHOLD >= 1, "a threshold of 0 never bottoms out");
    assert!(VALUE_MIN < VALUE_MAX);
};

/// Parameters of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Input sizes to generate and sort, one round per size. Must be positive.
    pub sizes: Vec<usize>,
    /// Base-case cutoff handed to the hybrid merge sort. Must be >= 1.
    pub hybrid_threshold: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            hybrid_threshold: HYBRID_THRESHOLD,
        }
    }
}
