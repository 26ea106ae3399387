/// Returns the binomial coefficient `C(n, k)`, the number of `k`-element
/// combinations of an `n`-element set.
///
/// Returns `Some(0)` when `k > n`, and `None` if the result does not fit in `usize`.
///
/// # Examples
///
/// ```
/// use permute::binomial;
///
/// assert_eq!(binomial(5, 3), Some(10));
/// assert_eq!(binomial(3, 4), Some(0));
/// assert_eq!(binomial(200, 100), None);
/// ```
#[must_use]
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: usize = 1;
    for i in 0..k {
        // acc == C(n - k + i, i) here, so the product is always divisible by (i + 1).
        let numerator = n - k + i + 1;
        let divisor = gcd(acc, i + 1);
        acc = (acc / divisor).checked_mul(numerator / ((i + 1) / divisor))?;
    }
    Some(acc)
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
