use rand::Rng;

/// Lomuto partition with a uniformly random pivot. The pivot is swapped to
/// the back, elements strictly smaller than it are compacted to the front,
/// and the pivot lands at its final sorted position, which is returned.
///
/// The slice must be non-empty.
pub(crate) fn partition(arr: &mut [i32], rng: &mut impl Rng) -> usize {
    let high = arr.len() - 1;
    let pivot = rng.gen_range(0..=high);
    arr.swap(pivot, high);
    let mut i = 0;
    for j in 0..high {
        if arr[j] < arr[high] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, high);
    i
}

/// Randomized quicksort. The random pivot bounds expected recursion depth to
/// O(log n) regardless of input order; expected time O(n log n).
pub fn quick_sort(arr: &mut [i32], rng: &mut impl Rng) {
    if arr.len() <= 1 {
        return;
    }
    let p = partition(arr, rng);
    let (left, right) = arr.split_at_mut(p);
    quick_sort(left, rng);
    quick_sort(&mut right[1..], rng);
}
