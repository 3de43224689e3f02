//! Arbitrary precision rational numbers.
//!
//! Always stored in lowest terms with a positive denominator (guaranteed by
//! `dashu`'s `RBig`).

use dashu::base::{Gcd, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An exact rational coefficient.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(RBig::from(IBig::from(value)))
    }

    #[must_use]
    pub fn from_integer(value: IBig) -> Self {
        Self(RBig::from(value))
    }

    /// Build `numerator / denominator`.
    ///
    /// Returns `None` when the denominator is zero.
    #[must_use]
    pub fn from_parts(numerator: IBig, denominator: IBig) -> Option<Self> {
        if denominator == IBig::ZERO {
            return None;
        }
        let numerator = if DashuSigned::is_negative(&denominator) {
            -numerator
        } else {
            numerator
        };
        let magnitude: UBig = denominator.unsigned_abs();
        Some(Self(RBig::from_parts(numerator, magnitude)))
    }

    /// Parse a decimal literal: `12`, `2.5`, `.5`, `3.`.
    ///
    /// Returns `None` for anything that is not digits with at most one dot.
    #[must_use]
    pub fn parse_decimal(text: &str) -> Option<Self> {
        let (whole, frac) = match text.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (text, ""),
        };
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return None;
        }
        let digits = format!("{whole}{frac}");
        let numerator = IBig::from_str_radix(&digits, 10).ok()?;
        let denominator = IBig::from(10u8).pow(frac.len());
        Self::from_parts(numerator, denominator)
    }

    /// The reduced numerator.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        self.0.numerator()
    }

    /// The reduced (positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> IBig {
        IBig::from(self.0.denominator().clone())
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        *self.0.denominator() == UBig::ONE
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the integer value if this is an integer that fits in `i64`.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            i64::try_from(self.numerator().clone()).ok()
        } else {
            None
        }
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Reciprocal; `None` for zero.
    #[must_use]
    pub fn recip(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }

    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }
}

/// Greatest common divisor of two integers, as a non-negative `IBig`.
pub(crate) fn integer_gcd(a: &IBig, b: &IBig) -> IBig {
    IBig::from(a.clone().gcd(b.clone()))
}

/// Least common multiple of two non-negative integers.
pub(crate) fn integer_lcm(a: &IBig, b: &IBig) -> IBig {
    if *a == IBig::ZERO || *b == IBig::ZERO {
        return IBig::ZERO;
    }
    let g = integer_gcd(a, b);
    a / &g * b
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

/// Panics on a zero divisor, like the reference impl below.
impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Rational {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        Rational(&self.0 * &rhs.0)
    }
}

/// Division by zero panics inside `dashu`; callers check with
/// [`Rational::recip`] or `is_zero` first.
impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Rational {
        Rational(&self.0 / &rhs.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}
