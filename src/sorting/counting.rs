use crate::errors::{ContainerError, MAX_COUNTING_SPAN, Result};

/// Counting sort over integer keys, offset by the minimum so negative values work.
///
/// # Errors
/// [`ContainerError::CountingRangeTooLarge`] when `max - min + 1` exceeds
/// [`MAX_COUNTING_SPAN`].
pub fn counting_sort(arr: &[i64]) -> Result<Vec<i64>> {
    counting_sort_by_key(arr, |&x| x)
}

/// Stable counting sort of `arr` by `key`, in O(n + span) time and space.
///
/// # Errors
/// [`ContainerError::CountingRangeTooLarge`] when the key span exceeds
/// [`MAX_COUNTING_SPAN`].
pub fn counting_sort_by_key<T: Clone>(arr: &[T], key: impl Fn(&T) -> i64) -> Result<Vec<T>> {
    let keys: Vec<i64> = arr.iter().map(&key).collect();
    let (Some(&min), Some(&max)) = (keys.iter().min(), keys.iter().max()) else {
        return Ok(Vec::new());
    };

    let span = (i128::from(max) - i128::from(min) + 1) as u128;
    if span > MAX_COUNTING_SPAN {
        return Err(ContainerError::CountingRangeTooLarge { span });
    }
    let slot = |k: i64| (i128::from(k) - i128::from(min)) as usize;

    let mut count = vec![0usize; span as usize];
    for &k in &keys {
        count[slot(k)] += 1;
    }
    // count[s] becomes one past the last output position of keys equal to s
    for s in 1..count.len() {
        count[s] += count[s - 1];
    }

    let mut output: Vec<Option<T>> = vec![None; arr.len()];
    for (item, &k) in arr.iter().zip(&keys).rev() {
        let s = slot(k);
        count[s] -= 1;
        output[count[s]] = Some(item.clone());
    }
    Ok(output.into_iter().flatten().collect())
}
