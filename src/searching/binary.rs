/// Halving search over sorted `arr`.
///
/// With duplicates, any index holding `target` may be returned.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = l + (r - l) / 2;
        match arr[m].cmp(target) {
            std::cmp::Ordering::Equal => return Some(m),
            std::cmp::Ordering::Less => l = m + 1,
            std::cmp::Ordering::Greater => r = m,
        }
    }
    None
}
