use crate::insertion::insertion_sort;

/// Merge the two adjacent sorted runs `arr[..mid]` and `arr[mid..]` back
/// into `arr`. Both runs are copied out in full; ties take the left element,
/// which keeps the merge family stable.
fn merge(arr: &mut [i32], mid: usize) {
    let left = arr[..mid].to_vec();
    let right = arr[mid..].to_vec();

    let mut i = 0;
    let mut j = 0;
    for slot in arr.iter_mut() {
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

/// Top-down merge sort. Stable, O(n log n), O(n) auxiliary space per merge.
pub fn merge_sort(arr: &mut [i32]) {
    if arr.len() <= 1 {
        return;
    }
    let mid = (arr.len() + 1) / 2;
    let (left, right) = arr.split_at_mut(mid);
    merge_sort(left);
    merge_sort(right);
    merge(arr, mid);
}

/// Merge sort that hands any sub-range of length <= `threshold` to insertion
/// sort instead of recursing further. Equivalent output to [`merge_sort`]
/// for every threshold >= 1; only the constant factor changes.
pub fn hybrid_merge_sort(arr: &mut [i32], threshold: usize) {
    if arr.len() <= 1 || arr.len() <= threshold {
        insertion_sort(arr);
        return;
    }
    let mid = (arr.len() + 1) / 2;
    let (left, right) = arr.split_at_mut(mid);
    hybrid_merge_sort(left, threshold);
    hybrid_merge_sort(right, threshold);
    merge(arr, mid);
}
