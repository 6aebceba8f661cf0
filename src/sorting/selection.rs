/// Moves the minimum of the unsorted suffix to its front, one position at a time.
///
/// Not stable. Exactly n - 1 swaps at most.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    for i in 0..arr.len() {
        let min = (i..arr.len())
            .min_by(|&a, &b| arr[a].cmp(&arr[b]))
            .unwrap_or(i);
        if min != i {
            arr.swap(i, min);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_sample() {
        let mut arr = [64, 25, 12, 22, 11];
        selection_sort(&mut arr);
        assert_eq!(arr, [11, 12, 22, 25, 64]);
    }

    #[test]
    fn reversed_input() {
        let mut arr: Vec<i32> = (0..100).rev().collect();
        selection_sort(&mut arr);
        assert_eq!(arr, (0..100).collect::<Vec<_>>());
    }
}
