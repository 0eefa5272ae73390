/// Restore the max-heap property for the subtree rooted at `i`, assuming
/// both child subtrees already satisfy it. `heap_size` bounds the live part
/// of the array; children live at `2i + 1` and `2i + 2`.
fn max_heapify(arr: &mut [i32], heap_size: usize, i: usize) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < heap_size && arr[left] > arr[largest] {
        largest = left;
    }
    if right < heap_size && arr[right] > arr[largest] {
        largest = right;
    }
    if largest != i {
        arr.swap(i, largest);
        max_heapify(arr, heap_size, largest);
    }
}

/// Heapsort: builds a max-heap bottom-up, then repeatedly swaps the root
/// behind the shrinking heap. O(n log n) worst case, O(1) extra space.
pub fn heap_sort(arr: &mut [i32]) {
    let n = arr.len();
    // sift down from the last parent
    for i in (0..n / 2).rev() {
        max_heapify(arr, n, i);
    }
    for i in (1..n).rev() {
        arr.swap(0, i);
        max_heapify(arr, i, 0);
    }
}
