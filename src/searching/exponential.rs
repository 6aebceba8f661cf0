use crate::searching::binary_search;

/// Doubles a bound until it passes `target`, then binary searches the last
/// doubling interval. O(log i) for a hit at index i.
pub fn exponential_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    if arr.first()? == target {
        return Some(0);
    }
    let mut bound = 1;
    while bound < arr.len() && arr[bound] <= *target {
        bound *= 2;
    }
    let lo = bound / 2;
    let hi = bound.min(arr.len() - 1);
    binary_search(&arr[lo..=hi], target).map(|i| lo + i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample() {
        let arr = [2, 3, 4, 10, 40, 50, 60, 70, 80, 90, 100];
        assert_eq!(exponential_search(&arr, &10), Some(3));
        assert_eq!(exponential_search(&arr, &2), Some(0));
        assert_eq!(exponential_search(&arr, &100), Some(10));
        assert_eq!(exponential_search(&arr, &55), None);
        assert_eq!(exponential_search(&arr, &1000), None);
    }

    #[test]
    fn every_position_of_power_of_two_lengths() {
        for len in [1usize, 2, 4, 8, 16, 33] {
            let arr: Vec<usize> = (0..len).map(|x| x * 3).collect();
            for (i, value) in arr.iter().enumerate() {
                assert_eq!(exponential_search(&arr, value), Some(i));
            }
            assert_eq!(exponential_search(&arr, &1), None);
        }
    }

    #[test]
    fn empty() {
        assert_eq!(exponential_search::<i32>(&[], &0), None);
    }
}
