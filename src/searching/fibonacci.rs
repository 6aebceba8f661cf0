/// Narrows sorted `arr` by Fibonacci-sized steps instead of halves, so probes
/// need only addition and subtraction.
pub fn fibonacci_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    // consecutive Fibonacci numbers: fib = fib1 + fib2
    let (mut fib2, mut fib1) = (0usize, 1usize);
    let mut fib = fib1 + fib2;
    while fib < n {
        fib2 = fib1;
        fib1 = fib;
        fib = fib1 + fib2;
    }

    // every index below `eliminated` holds a value smaller than target
    let mut eliminated = 0;
    while fib > 1 {
        let i = (eliminated + fib2 - 1).min(n - 1);
        match arr[i].cmp(target) {
            std::cmp::Ordering::Less => {
                fib = fib1;
                fib1 = fib2;
                fib2 = fib - fib1;
                eliminated = i + 1;
            }
            std::cmp::Ordering::Greater => {
                fib = fib2;
                fib1 -= fib2;
                fib2 = fib - fib1;
            }
            std::cmp::Ordering::Equal => return Some(i),
        }
    }

    (fib1 == 1 && eliminated < n && arr[eliminated] == *target).then_some(eliminated)
}
