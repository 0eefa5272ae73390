/// Insertion sort: shifts each element leftward past all strictly greater
/// predecessors. Stable, O(n) on nearly sorted input. Also serves as the
/// base case of [`hybrid_merge_sort`](crate::hybrid_merge_sort); callers
/// restrict it to a sub-range by handing in the sub-slice.
pub fn insertion_sort(arr: &mut [i32]) {
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::SliceRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn sorts_shuffled_range() {
        let mut vec: Vec<i32> = (1..=256).collect();
        vec.shuffle(&mut StdRng::seed_from_u64(12345));
        insertion_sort(&mut vec);
        assert_eq!(vec, (1..=256).collect::<Vec<i32>>());
    }

    #[test]
    fn sorts_sub_slice_only() {
        let mut vec = vec![9, 5, 4, 3, 0];
        insertion_sort(&mut vec[1..4]);
        assert_eq!(vec, vec![9, 3, 4, 5, 0]);
    }

    #[test]
    fn descending_input() {
        let mut vec: Vec<i32> = (0..100).rev().collect();
        insertion_sort(&mut vec);
        assert_eq!(vec, (0..100).collect::<Vec<i32>>());
    }
}
