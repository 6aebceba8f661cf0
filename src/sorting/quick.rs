/// Recursive Hoare quicksort pivoting on the middle element.
///
/// Not stable. O(n log n) on average; the middle pivot avoids the quadratic
/// case on already sorted input.
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let split = partition(arr);
    let (left, right) = arr.split_at_mut(split);
    quick_sort(left);
    quick_sort(right);
}

/// Hoare partition around the value at the lower middle index.
///
/// # Returns
/// `split` in `1..arr.len()` such that every element of `arr[..split]` is `<=`
/// every element of `arr[split..]`
fn partition<T: Ord>(arr: &mut [T]) -> usize {
    // follows the pivot value as swaps move it
    let mut pivot = (arr.len() - 1) / 2;
    let mut i = 0;
    let mut j = arr.len() - 1;
    loop {
        while arr[i] < arr[pivot] {
            i += 1;
        }
        while arr[j] > arr[pivot] {
            j -= 1;
        }
        if i >= j {
            return j + 1;
        }
        arr.swap(i, j);
        if pivot == i {
            pivot = j;
        } else if pivot == j {
            pivot = i;
        }
        i += 1;
        j -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_sample() {
        let mut arr = [64, 34, 25, 12, 22, 11, 90];
        quick_sort(&mut arr);
        assert_eq!(arr, [11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn partition_splits_both_sides() {
        for len in 2..40 {
            let mut arr: Vec<u32> = (0..len).map(|x| (x * 7919) % 13).collect();
            let split = partition(&mut arr);
            assert!((1..arr.len()).contains(&split));
            let left_max = arr[..split].iter().max();
            let right_min = arr[split..].iter().min();
            assert!(left_max <= right_min, "len {len}: {arr:?} at {split}");
        }
    }

    #[test]
    fn all_equal_and_sorted_inputs() {
        let mut same = vec![7; 1000];
        quick_sort(&mut same);
        assert!(same.iter().all(|&x| x == 7));

        let mut sorted: Vec<i32> = (0..10_000).collect();
        quick_sort(&mut sorted);
        assert!(sorted.is_sorted());
    }
}
