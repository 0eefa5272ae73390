/// Bubble sort: repeated adjacent-swap passes. Stops early after the first
/// pass that performs no swap, so an already sorted input costs one pass.
pub fn bubble_sort(arr: &mut [i32]) {
    let n = arr.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
