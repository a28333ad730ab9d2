//! Integer helpers shared by the algebraic types.

use num_integer::{Integer, Roots};

/// Returns the greatest common divisor of `a` and `b`. The result is never negative, and is `0`
/// only if both inputs are `0`.
///
/// The helpers in this module work on [`i128`] so that products and sums of two [`i64`]s can be
/// reduced before they are narrowed back.
pub fn gcd(a: i128, b: i128) -> i128 {
    a.gcd(&b)
}

/// Returns the least common multiple of `a` and `b`. The result is never negative.
pub fn lcm(a: i128, b: i128) -> i128 {
    a.lcm(&b)
}

/// Returns true if `n` is a perfect square.
pub fn is_perfect_square(n: i128) -> bool {
    if n < 0 {
        return false;
    }

    let root = n.sqrt();
    root * root == n
}

/// Returns true if `n` is a perfect cube. Negative numbers can be perfect cubes.
pub fn is_perfect_cube(n: i128) -> bool {
    let root = n.cbrt();
    root * root * root == n
}

/// Finds every way to write `n` as the product of two positive integers.
///
/// Each pair `(a, b)` satisfies `a <= b` and `a * b == n`, and the pairs are ordered by ascending
/// `a`. Returns an empty list if `n` is not positive.
///
/// ```
/// use cas_algebra::primitive::factor_pairs;
///
/// assert_eq!(factor_pairs(10), vec![(1, 10), (2, 5)]);
/// ```
pub fn factor_pairs(n: i64) -> Vec<(i64, i64)> {
    if n <= 0 {
        return Vec::new();
    }

    (1..=n.sqrt())
        .filter(|a| n % a == 0)
        .map(|a| (a, n / a))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn gcd_lcm_signs() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(0, -7), 7);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(-4, 6), 12);
    }

    #[test]
    fn perfect_powers() {
        assert!(is_perfect_square(0));
        assert!(is_perfect_square(49));
        assert!(!is_perfect_square(50));
        assert!(!is_perfect_square(-4));
        assert!(is_perfect_cube(27));
        assert!(is_perfect_cube(-8));
        assert!(!is_perfect_cube(9));
        assert!(is_perfect_cube(1 << 63));
        assert!(!is_perfect_square(1 << 63));
    }

    #[test]
    fn pairs() {
        assert_eq!(factor_pairs(10), vec![(1, 10), (2, 5)]);
        assert_eq!(factor_pairs(36), vec![(1, 36), (2, 18), (3, 12), (4, 9), (6, 6)]);
        assert_eq!(factor_pairs(90)[4..], [(6, 15), (9, 10)]);
        assert_eq!(factor_pairs(1), vec![(1, 1)]);
        assert!(factor_pairs(0).is_empty());
        assert!(factor_pairs(-6).is_empty());
    }
}
