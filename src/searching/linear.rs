/// Index of the first element equal to `target`. Works on unsorted input.
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|value| value == target)
}
