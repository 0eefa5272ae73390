use rand::Rng;

use crate::quick::partition;

/// Return the element that would sit at index `k` (0-indexed) if `arr` were
/// fully sorted, by randomized partitioning. Only one side of each partition
/// is recursed into, so the expected running time is O(n).
///
/// The slice is partially reordered as a side effect.
///
/// # Panics
/// Panics if `k` is not a valid index into `arr`.
pub fn quick_select(arr: &mut [i32], k: usize, rng: &mut impl Rng) -> i32 {
    assert!(
        k < arr.len(),
        "rank {} out of bounds for sequence of length {}",
        k,
        arr.len()
    );
    if arr.len() == 1 {
        return arr[0];
    }
    let p = partition(arr, rng);
    if p == k {
        arr[p]
    } else if p > k {
        quick_select(&mut arr[..p], k, rng)
    } else {
        quick_select(&mut arr[p + 1..], k - p - 1, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::SliceRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn agrees_with_full_sort_for_every_rank() {
        let mut rng = StdRng::seed_from_u64(12345);
        let mut vec: Vec<i32> = (0..200).map(|x| x % 37).collect();
        vec.shuffle(&mut rng);
        let mut sorted = vec.clone();
        sorted.sort_unstable();
        for k in 0..vec.len() {
            let mut scratch = vec.clone();
            assert_eq!(quick_select(&mut scratch, k, &mut rng), sorted[k]);
        }
    }

    #[test]
    fn singleton() {
        let mut rng = StdRng::seed_from_u64(12345);
        assert_eq!(quick_select(&mut [42], 0, &mut rng), 42);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn rank_out_of_bounds_panics() {
        let mut rng = StdRng::seed_from_u64(12345);
        quick_select(&mut [1, 2, 3], 3, &mut rng);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn empty_sequence_panics() {
        let mut rng = StdRng::seed_from_u64(12345);
        quick_select(&mut [], 0, &mut rng);
    }
}
