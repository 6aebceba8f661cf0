use std::cmp::Ordering;

/// Probes where `target` would sit if the values of sorted `arr` were evenly
/// spread between its endpoints.
///
/// O(log log n) on uniformly distributed keys, O(n) in the worst case. Probe
/// arithmetic is carried out in `i128`, so no key range can overflow it.
pub fn interpolation_search(arr: &[i64], target: i64) -> Option<usize> {
    let (mut low, mut high) = (0, arr.len().checked_sub(1)?);
    while low <= high && arr[low] <= target && target <= arr[high] {
        if arr[low] == arr[high] {
            // the whole window holds one value, already known to bracket target
            return Some(low);
        }
        let span = i128::from(arr[high]) - i128::from(arr[low]);
        let rise = i128::from(target) - i128::from(arr[low]);
        let pos = low + (rise * (high - low) as i128 / span) as usize;

        match arr[pos].cmp(&target) {
            Ordering::Equal => return Some(pos),
            Ordering::Less => low = pos + 1,
            Ordering::Greater => high = pos.checked_sub(1)?,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_keys() {
        let arr = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];
        assert_eq!(interpolation_search(&arr, 50), Some(4));
        assert_eq!(interpolation_search(&arr, 10), Some(0));
        assert_eq!(interpolation_search(&arr, 100), Some(9));
        assert_eq!(interpolation_search(&arr, 55), None);
        assert_eq!(interpolation_search(&arr, 5), None);
        assert_eq!(interpolation_search(&arr, 105), None);
    }

    #[test]
    fn skewed_keys() {
        let arr = [1, 2, 3, 4, 5, 1_000, 1_000_000];
        for (i, &value) in arr.iter().enumerate() {
            assert_eq!(interpolation_search(&arr, value), Some(i));
        }
        assert_eq!(interpolation_search(&arr, 999), None);
    }

    #[test]
    fn equal_endpoints() {
        assert_eq!(interpolation_search(&[7, 7, 7], 7), Some(0));
        assert_eq!(interpolation_search(&[7, 7, 7], 8), None);
        assert_eq!(interpolation_search(&[7], 7), Some(0));
    }

    #[test]
    fn extreme_range_does_not_overflow() {
        let arr = [i64::MIN, -1, 0, 1, i64::MAX];
        for (i, &value) in arr.iter().enumerate() {
            assert_eq!(interpolation_search(&arr, value), Some(i));
        }
        assert_eq!(interpolation_search(&arr, 2), None);
    }

    #[test]
    fn empty() {
        assert_eq!(interpolation_search(&[], 0), None);
    }
}
