/// Top-down merge sort returning a sorted copy of `arr`.
///
/// Stable: on ties the element from the left half is taken first.
pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let (left, right) = arr.split_at(arr.len() / 2);
    merge(merge_sort(left), merge_sort(right))
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return out,
        };
        let next = if take_left { left.next() } else { right.next() };
        out.extend(next);
    }
}
