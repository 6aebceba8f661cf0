/// Least-significant-digit radix sort in base 10.
///
/// One stable counting pass per decimal digit of the maximum.
pub fn radix_sort(arr: &mut [u64]) {
    let Some(&max) = arr.iter().max() else {
        return;
    };
    let mut exp: u64 = 1;
    while max / exp > 0 {
        sort_by_digit(arr, exp);
        match exp.checked_mul(10) {
            Some(next) => exp = next,
            None => break,
        }
    }
}

/// Radix sort of signed values: flipping the sign bit maps `i64` order onto `u64` order.
pub fn radix_sort_signed(arr: &mut [i64]) {
    const SIGN: u64 = 1 << 63;
    let mut biased: Vec<u64> = arr.iter().map(|&x| (x as u64) ^ SIGN).collect();
    radix_sort(&mut biased);
    for (slot, b) in arr.iter_mut().zip(biased) {
        *slot = (b ^ SIGN) as i64;
    }
}

/// Stable counting sort on the decimal digit selected by `exp`.
fn sort_by_digit(arr: &mut [u64], exp: u64) {
    let digit = |x: u64| ((x / exp) % 10) as usize;
    let mut count = [0usize; 10];
    for &x in arr.iter() {
        count[digit(x)] += 1;
    }
    for d in 1..10 {
        count[d] += count[d - 1];
    }
    let mut output = vec![0; arr.len()];
    for &x in arr.iter().rev() {
        let d = digit(x);
        count[d] -= 1;
        output[count[d]] = x;
    }
    arr.copy_from_slice(&output);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_sample() {
        let mut arr = [170, 45, 75, 90, 802, 24, 2, 66];
        radix_sort(&mut arr);
        assert_eq!(arr, [2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn zeros_and_extremes() {
        let mut arr = [0, u64::MAX, 0, 10_000_000_000_000_000_000, 1];
        radix_sort(&mut arr);
        assert_eq!(arr, [0, 0, 1, 10_000_000_000_000_000_000, u64::MAX]);
    }

    #[test]
    fn single_digit_pass() {
        let mut arr = [31, 22, 13];
        sort_by_digit(&mut arr, 1);
        assert_eq!(arr, [31, 22, 13]);
        sort_by_digit(&mut arr, 10);
        assert_eq!(arr, [13, 22, 31]);
    }

    #[test]
    fn signed_values() {
        let mut arr = [5, -3, 0, i64::MIN, i64::MAX, -3, 12];
        radix_sort_signed(&mut arr);
        assert_eq!(arr, [i64::MIN, -3, -3, 0, 5, 12, i64::MAX]);
    }
}
