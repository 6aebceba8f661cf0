/// Grows a sorted prefix by shifting each new element left past larger ones.
///
/// Stable, in place, O(n) on nearly sorted input.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_sample() {
        let mut arr = [12, 11, 13, 5, 6];
        insertion_sort(&mut arr);
        assert_eq!(arr, [5, 6, 11, 12, 13]);
    }

    #[test]
    fn strings() {
        let mut arr = ["pear", "apple", "fig"];
        insertion_sort(&mut arr);
        assert_eq!(arr, ["apple", "fig", "pear"]);
    }
}
