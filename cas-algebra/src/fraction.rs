//! Exact rational numbers.

use crate::error::Error;
use crate::primitive::{gcd, is_perfect_cube, is_perfect_square, lcm};
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rational number `numerator / denominator`.
///
/// A [`Fraction`] is not necessarily stored in lowest terms: the `*_with` methods can return the
/// raw, unreduced result of an operation when asked to, which lets callers batch several
/// operations before paying for a single reduction. All other methods return reduced values. A
/// reduced fraction has `gcd(|n|, |d|) = 1` and a positive denominator, so its sign lives on the
/// numerator.
///
/// Arithmetic is carried out on [`i128`] intermediates and reduced before being narrowed back to
/// [`i64`]. If the result still does not fit, the operation fails with [`Error::Overflow`].
///
/// Comparison ([`PartialEq`], [`Ord`]) and hashing are by **value**, so `1/2` and `2/4` are equal.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

/// Which root [`Fraction::is_rational`] should test for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Root {
    /// The square root.
    Sqrt,

    /// The cube root.
    Cbrt,
}

impl Root {
    /// Returns true if this root of `n` is an integer.
    fn is_exact(self, n: i128) -> bool {
        match self {
            Root::Sqrt => is_perfect_square(n),
            Root::Cbrt => is_perfect_cube(n),
        }
    }
}

/// Reduces `n / d` to lowest terms with a positive denominator. `d` must not be zero.
fn reduce_wide(n: i128, d: i128) -> (i128, i128) {
    let g = gcd(n, d);
    let (n, d) = (n / g, d / g);
    if d < 0 {
        (-n, -d)
    } else {
        (n, d)
    }
}

fn narrow(n: i128) -> Result<i64, Error> {
    i64::try_from(n).map_err(|_| Error::Overflow)
}

impl Fraction {
    /// Creates a new fraction with the given numerator and denominator, without reducing it.
    ///
    /// Returns [`Error::DivideByZero`] if the denominator is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, Error> {
        if denominator == 0 {
            return Err(Error::DivideByZero);
        }

        Ok(Self { numerator, denominator })
    }

    /// Creates the fraction `n/1`.
    pub const fn integer(n: i64) -> Self {
        Self { numerator: n, denominator: 1 }
    }

    /// The fraction `0/1`.
    pub const fn zero() -> Self {
        Self::integer(0)
    }

    /// The fraction `1/1`.
    pub const fn one() -> Self {
        Self::integer(1)
    }

    /// Returns the numerator as stored.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator as stored.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Builds a fraction from wide parts, reducing them first if `simplify` is true.
    fn from_wide(numerator: i128, denominator: i128, simplify: bool) -> Result<Self, Error> {
        let (numerator, denominator) = if simplify {
            reduce_wide(numerator, denominator)
        } else {
            (numerator, denominator)
        };

        Ok(Self {
            numerator: narrow(numerator)?,
            denominator: narrow(denominator)?,
        })
    }

    fn wide(&self) -> (i128, i128) {
        (self.numerator.into(), self.denominator.into())
    }

    /// Returns the parts of this fraction in lowest terms. Never overflows, even for a
    /// component of [`i64::MIN`].
    pub(crate) fn reduced_wide(&self) -> (i128, i128) {
        let (n, d) = self.wide();
        reduce_wide(n, d)
    }

    /// Returns this fraction in lowest terms, with the sign moved onto the numerator.
    ///
    /// Fails with [`Error::Overflow`] only when a component is [`i64::MIN`] and the reduced
    /// value has to negate it.
    pub fn reduce(&self) -> Result<Self, Error> {
        let (n, d) = self.wide();
        Self::from_wide(n, d, true)
    }

    /// Returns true if this fraction equals zero.
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Returns true if this fraction equals one.
    pub fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }

    /// Returns true if this fraction is a whole number.
    pub fn is_integer(&self) -> bool {
        self.reduced_wide().1 == 1
    }

    /// Returns this fraction as an [`i64`], if it is a whole number that fits.
    pub fn to_integer(&self) -> Option<i64> {
        match self.reduced_wide() {
            (n, 1) => i64::try_from(n).ok(),
            _ => None,
        }
    }

    /// Returns `-1`, `0`, or `1` depending on the sign of the fraction.
    pub fn signum(&self) -> i64 {
        self.numerator.signum() * self.denominator.signum()
    }

    /// Returns true if this fraction is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns the absolute value of this fraction, in lowest terms.
    pub fn abs(&self) -> Result<Self, Error> {
        let (n, d) = self.reduced_wide();
        Self::from_wide(n.abs(), d, false)
    }

    /// Returns the negation of this fraction, in lowest terms.
    pub fn neg(&self) -> Result<Self, Error> {
        let (n, d) = self.reduced_wide();
        Self::from_wide(-n, d, false)
    }

    /// Returns true if both fractions have the same value.
    pub fn equal_to(&self, other: &Fraction) -> bool {
        self.reduced_wide() == other.reduced_wide()
    }

    /// Adds `rhs` to this fraction, in lowest terms.
    pub fn add(&self, rhs: impl Into<Fraction>) -> Result<Self, Error> {
        self.add_with(rhs, true)
    }

    /// Adds `rhs` to this fraction, reducing the result if `simplify` is true.
    ///
    /// If both denominators are equal, the numerators are summed directly. Otherwise, both
    /// fractions are scaled to the least common multiple of the denominators first.
    pub fn add_with(&self, rhs: impl Into<Fraction>, simplify: bool) -> Result<Self, Error> {
        let (c, d) = rhs.into().wide();
        self.add_wide(c, d, simplify)
    }

    fn add_wide(&self, c: i128, d: i128, simplify: bool) -> Result<Self, Error> {
        let (a, b) = self.wide();
        if b == d {
            return Self::from_wide(a + c, b, simplify);
        }

        let m = lcm(b, d);
        let numerator = a
            .checked_mul(m / b)
            .zip(c.checked_mul(m / d))
            .and_then(|(lhs, rhs)| lhs.checked_add(rhs))
            .ok_or(Error::Overflow)?;
        Self::from_wide(numerator, m, simplify)
    }

    /// Subtracts `rhs` from this fraction, in lowest terms.
    pub fn subtract(&self, rhs: impl Into<Fraction>) -> Result<Self, Error> {
        self.subtract_with(rhs, true)
    }

    /// Subtracts `rhs` from this fraction, reducing the result if `simplify` is true.
    pub fn subtract_with(&self, rhs: impl Into<Fraction>, simplify: bool) -> Result<Self, Error> {
        let (c, d) = rhs.into().wide();
        self.add_wide(-c, d, simplify)
    }

    /// Multiplies this fraction by `rhs`, in lowest terms.
    pub fn multiply(&self, rhs: impl Into<Fraction>) -> Result<Self, Error> {
        self.multiply_with(rhs, true)
    }

    /// Multiplies this fraction by `rhs`, reducing the result if `simplify` is true.
    pub fn multiply_with(&self, rhs: impl Into<Fraction>, simplify: bool) -> Result<Self, Error> {
        let (a, b) = self.wide();
        let (c, d) = rhs.into().wide();
        Self::from_wide(a * c, b * d, simplify)
    }

    /// Divides this fraction by `rhs`.
    ///
    /// Returns [`Error::DivideByZero`] if `rhs` is zero.
    pub fn divide(&self, rhs: impl Into<Fraction>) -> Result<Self, Error> {
        self.divide_with(rhs, true)
    }

    /// Divides this fraction by `rhs`, reducing the result if `simplify` is true.
    ///
    /// Returns [`Error::DivideByZero`] if `rhs` is zero.
    pub fn divide_with(&self, rhs: impl Into<Fraction>, simplify: bool) -> Result<Self, Error> {
        let rhs = rhs.into();
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }

        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        Self::from_wide(a * d, b * c, simplify)
    }

    /// Raises this fraction to the given integer power.
    ///
    /// Returns [`Error::DivideByZero`] if a zero fraction is raised to a negative power.
    pub fn pow(&self, exponent: i64) -> Result<Self, Error> {
        self.pow_with(exponent, true)
    }

    /// Raises this fraction to the given integer power, reducing the result if `simplify` is
    /// true.
    ///
    /// A negative exponent raises the fraction to the absolute value of the exponent, then
    /// swaps the numerator and denominator.
    pub fn pow_with(&self, exponent: i64, simplify: bool) -> Result<Self, Error> {
        let magnitude = u32::try_from(exponent.unsigned_abs())
            .map_err(|_| Error::InvalidOperand {
                expected: "an exponent between -2^32 and 2^32",
                found: exponent.to_string(),
            })?;

        // powers of coprime parts stay coprime, so reducing first is the same as reducing after
        let (n, d) = if simplify { self.reduced_wide() } else { self.wide() };
        let n = n.checked_pow(magnitude).ok_or(Error::Overflow)?;
        let d = d.checked_pow(magnitude).ok_or(Error::Overflow)?;

        if exponent >= 0 {
            return Self::from_wide(n, d, simplify);
        }

        if n == 0 {
            return Err(Error::DivideByZero);
        }

        Self::from_wide(d, n, simplify)
    }

    /// Returns true if the given root of both the numerator and denominator (in lowest terms) is
    /// an integer, meaning the root of this fraction is itself rational. Zero is always rational.
    pub fn is_rational(&self, root: Root) -> bool {
        if self.is_zero() {
            return true;
        }

        let (n, d) = self.reduced_wide();
        root.is_exact(n) && root.is_exact(d)
    }

    /// Returns the LaTeX representation of this fraction, using `\frac{a}{b}` for non-integers.
    pub fn to_tex(&self) -> String {
        match self.reduced_wide() {
            (n, 1) => n.to_string(),
            (n, d) => format!("\\frac{{{}}}{{{}}}", n, d),
        }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::integer(n.into())
    }
}

/// Formats the fraction in lowest terms: `0`, `n`, or `n/d`.
impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.reduced_wide() {
            (n, 1) => write!(f, "{}", n),
            (n, d) => write!(f, "{}/{}", n, d),
        }
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.equal_to(other)
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reduced_wide().hash(state);
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let ((a, b), (c, d)) = (self.reduced_wide(), other.reduced_wide());

        // denominators are positive after reduction, so cross-multiplying keeps the order
        (a * d).cmp(&(c * b))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Shorthand for an unreduced fraction that is known to be valid.
    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    fn parts(f: Fraction) -> (i64, i64) {
        (f.numerator(), f.denominator())
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(Fraction::new(1, 0), Err(Error::DivideByZero));
    }

    #[test]
    fn reduce_sign_and_terms() {
        assert_eq!(parts(frac(6, -8).reduce().unwrap()), (-3, 4));
        assert_eq!(parts(frac(-6, -8).reduce().unwrap()), (3, 4));
        assert_eq!(parts(frac(0, -5).reduce().unwrap()), (0, 1));
    }

    #[test]
    fn reduce_idempotent() {
        for a in -12..=12 {
            for b in (-12..=12).filter(|&b| b != 0) {
                let once = frac(a, b).reduce().unwrap();
                let twice = once.reduce().unwrap();
                assert_eq!(parts(once), parts(twice));
                assert!(once.denominator() > 0);
            }
        }
    }

    #[test]
    fn add_same_and_different_denominators() {
        let sum = frac(1, 4).add_with(frac(1, 4), false).unwrap();
        assert_eq!(parts(sum), (2, 4));
        assert_eq!(frac(1, 4).add(frac(1, 4)), Ok(frac(1, 2)));

        let sum = frac(1, 4).add_with(frac(1, 6), false).unwrap();
        assert_eq!(parts(sum), (5, 12));
        assert_eq!(frac(1, 2).add(3), Ok(frac(7, 2)));
    }

    #[test]
    fn subtract_and_negate() {
        assert_eq!(frac(1, 2).subtract(frac(1, 3)), Ok(frac(1, 6)));
        assert_eq!(frac(1, 3).subtract(1), Ok(frac(-2, 3)));
        assert_eq!(parts(frac(2, 4).neg().unwrap()), (-1, 2));
    }

    #[test]
    fn multiply_unreduced() {
        let product = frac(2, 3).multiply_with(frac(3, 4), false).unwrap();
        assert_eq!(parts(product), (6, 12));
        assert_eq!(frac(2, 3).multiply(frac(3, 4)), Ok(frac(1, 2)));
        assert_eq!(frac(2, 3).multiply(0), Ok(Fraction::zero()));
    }

    #[test]
    fn divide() {
        assert_eq!(frac(1, 2).divide(frac(1, 4)), Ok(Fraction::integer(2)));
        assert_eq!(frac(1, 2).divide(0), Err(Error::DivideByZero));
        assert_eq!(frac(1, 2).divide(frac(0, 3)), Err(Error::DivideByZero));
    }

    #[test]
    fn divide_then_multiply_round_trip() {
        for (a, b) in [(1, 2), (-3, 7), (0, 5), (9, -4)] {
            for (c, d) in [(1, 3), (-5, 2), (8, 8), (4, -6)] {
                let p = frac(a, b);
                let q = frac(c, d);
                assert!(p.divide(q).unwrap().multiply(q).unwrap().equal_to(&p));
            }
        }
    }

    #[test]
    fn powers() {
        assert_eq!(frac(2, 3).pow(3), Ok(frac(8, 27)));
        assert_eq!(frac(2, 3).pow(0), Ok(Fraction::one()));
        assert_eq!(frac(2, 3).pow(-2), Ok(frac(9, 4)));
        assert_eq!(frac(-1, 2).pow(-3), Ok(Fraction::integer(-8)));
        assert_eq!(Fraction::zero().pow(-1), Err(Error::DivideByZero));

        let raw = frac(2, 4).pow_with(2, false).unwrap();
        assert_eq!(parts(raw), (4, 16));
    }

    #[test]
    fn overflow_is_an_error() {
        let max = Fraction::integer(i64::MAX);
        assert_eq!(max.add(1), Err(Error::Overflow));
        assert_eq!(max.multiply(2), Err(Error::Overflow));
        assert_eq!(frac(1, 1 << 40).pow(2), Err(Error::Overflow));
        assert_eq!(Fraction::integer(2).pow(64), Err(Error::Overflow));
        assert_eq!(Fraction::integer(i64::MIN).abs(), Err(Error::Overflow));
        assert_eq!(Fraction::integer(i64::MIN).neg(), Err(Error::Overflow));
        assert_eq!(frac(1, i64::MIN).reduce(), Err(Error::Overflow));
    }

    #[test]
    fn wide_intermediates_reduce_before_narrowing() {
        let half_max = frac(i64::MAX, 2);
        assert_eq!(half_max.multiply(frac(2, i64::MAX)), Ok(Fraction::one()));
        assert_eq!(
            frac(1, i64::MAX).add(frac(i64::MAX - 1, i64::MAX)),
            Ok(Fraction::one()),
        );
        assert_eq!(frac(i64::MAX, 3).subtract(frac(i64::MAX, 3)), Ok(Fraction::zero()));
        assert_eq!(frac(i64::MIN, 2).pow(1), Ok(Fraction::integer(i64::MIN / 2)));
    }

    #[test]
    fn extreme_values_compare_and_render() {
        let min = Fraction::integer(i64::MIN);
        assert!(min < Fraction::integer(i64::MAX));
        assert!(frac(i64::MIN, -1) > Fraction::integer(i64::MAX));
        assert_eq!(frac(i64::MIN, -1).to_string(), "9223372036854775808");
        assert_eq!(frac(i64::MIN, -1).to_integer(), None);
        assert!(min.is_integer());
    }

    #[test]
    fn rational_roots() {
        assert!(frac(4, 9).is_rational(Root::Sqrt));
        assert!(frac(8, 32).is_rational(Root::Sqrt));
        assert!(!frac(2, 9).is_rational(Root::Sqrt));
        assert!(!frac(-4, 9).is_rational(Root::Sqrt));
        assert!(frac(-8, 27).is_rational(Root::Cbrt));
        assert!(!frac(4, 27).is_rational(Root::Cbrt));
        assert!(Fraction::zero().is_rational(Root::Sqrt));
    }

    #[test]
    fn ordering_and_queries() {
        assert!(frac(1, 3) < frac(1, 2));
        assert!(frac(-1, 2) < frac(1, -3));
        assert_eq!(frac(6, 3).to_integer(), Some(2));
        assert_eq!(frac(1, 3).to_integer(), None);
        assert!(frac(3, -4).is_negative());
    }

    #[test]
    fn abs_is_reduced() {
        assert_eq!(parts(frac(-3, -4).abs().unwrap()), (3, 4));
        assert_eq!(parts(frac(2, -4).abs().unwrap()), (1, 2));
        assert_eq!(parts(frac(-6, 8).abs().unwrap()), (3, 4));
        assert_eq!(parts(Fraction::zero().abs().unwrap()), (0, 1));
    }

    #[test]
    fn render() {
        assert_eq!(frac(0, 7).to_string(), "0");
        assert_eq!(frac(6, 3).to_string(), "2");
        assert_eq!(frac(3, -6).to_string(), "-1/2");
        assert_eq!(frac(3, 6).to_tex(), "\\frac{1}{2}");
        assert_eq!(frac(-4, 2).to_tex(), "-2");
    }
}
