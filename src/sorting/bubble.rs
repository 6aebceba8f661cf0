/// Repeatedly swaps adjacent out-of-order pairs; stops after a pass without swaps.
///
/// Stable. O(n^2) comparisons, O(n) on sorted input.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let mut unsorted = arr.len();
    while unsorted > 1 {
        let mut swapped = false;
        for j in 1..unsorted {
            if arr[j - 1] > arr[j] {
                arr.swap(j - 1, j);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        // the largest remaining element has bubbled to the end
        unsorted -= 1;
    }
}
