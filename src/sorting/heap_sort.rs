/// Builds a max heap in place, then repeatedly swaps the root behind the shrinking heap.
///
/// Not stable. O(n log n) worst case, O(1) extra space.
pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    for i in (0..len / 2).rev() {
        sift_down(arr, len, i);
    }
    for end in (1..len).rev() {
        arr.swap(0, end);
        sift_down(arr, end, 0);
    }
}

/// Restores the max-heap property of `arr[..n]` below `i`.
fn sift_down<T: Ord>(arr: &mut [T], n: usize, mut i: usize) {
    loop {
        let mut largest = i;
        let l = 2 * i + 1;
        let r = 2 * i + 2;
        if l < n && arr[l] > arr[largest] {
            largest = l;
        }
        if r < n && arr[r] > arr[largest] {
            largest = r;
        }
        if largest == i {
            return;
        }
        arr.swap(i, largest);
        i = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_sample() {
        let mut arr = [12, 11, 13, 5, 6, 7];
        heap_sort(&mut arr);
        assert_eq!(arr, [5, 6, 7, 11, 12, 13]);
    }

    #[test]
    fn sift_down_restores_root() {
        let mut arr = [1, 9, 8, 4, 5];
        sift_down(&mut arr, 5, 0);
        assert_eq!(arr[0], 9);
    }
}
