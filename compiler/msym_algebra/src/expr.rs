//! Exact rational functions: `num / den` over [`Poly`].
//!
//! Every constructor and operation returns a canonical value:
//! - zero is `0 / 1`;
//! - `den` has a positive leading coefficient;
//! - `num` and `den` have integer coefficients with no shared integer content;
//! - shared monomial factors are cancelled, as is `den` when it divides `num`
//!   exactly (and vice versa).
//!
//! [`Expr::simplify`] goes further and divides out the full polynomial GCD.

use num_traits::One;

use crate::errors::{division_by_zero, unsupported, AlgebraResult};
use crate::gcd::poly_gcd;
use crate::monomial::Symbol;
use crate::poly::Poly;
use crate::rational::Rational;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Expr {
    num: Poly,
    den: Poly,
}

impl Expr {
    #[must_use]
    pub fn zero() -> Self {
        Self {
            num: Poly::zero(),
            den: Poly::one(),
        }
    }

    #[must_use]
    pub fn one() -> Self {
        Self::from_rational(Rational::one())
    }

    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self::from_rational(Rational::from_i64(value))
    }

    #[must_use]
    pub fn from_rational(value: Rational) -> Self {
        Self::from_poly(Poly::constant(value))
    }

    #[must_use]
    pub fn symbol(name: &str) -> Self {
        Self::from_poly(Poly::var(Symbol::from(name)))
    }

    #[must_use]
    pub fn from_poly(p: Poly) -> Self {
        Self::canonical(p, Poly::one())
    }

    #[must_use]
    pub fn numerator(&self) -> &Poly {
        &self.num
    }

    #[must_use]
    pub fn denominator(&self) -> &Poly {
        &self.den
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }

    /// The value when this is a plain number.
    #[must_use]
    pub fn as_rational(&self) -> Option<Rational> {
        let n = self.num.constant_value()?;
        let d = self.den.constant_value()?;
        d.recip().map(|inv| &n * &inv)
    }

    #[must_use]
    pub fn add(&self, other: &Expr) -> Expr {
        if self.den == other.den {
            return Self::canonical(self.num.add(&other.num), self.den.clone());
        }
        let num = self.num.mul(&other.den).add(&other.num.mul(&self.den));
        Self::canonical(num, self.den.mul(&other.den))
    }

    #[must_use]
    pub fn sub(&self, other: &Expr) -> Expr {
        self.add(&other.neg())
    }

    #[must_use]
    pub fn neg(&self) -> Expr {
        Self {
            num: self.num.neg(),
            den: self.den.clone(),
        }
    }

    #[must_use]
    pub fn mul(&self, other: &Expr) -> Expr {
        Self::canonical(self.num.mul(&other.num), self.den.mul(&other.den))
    }

    pub fn div(&self, other: &Expr) -> AlgebraResult<Expr> {
        Ok(self.mul(&other.recip()?))
    }

    pub fn recip(&self) -> AlgebraResult<Expr> {
        if self.is_zero() {
            return Err(division_by_zero());
        }
        Ok(Self::canonical(self.den.clone(), self.num.clone()))
    }

    /// Integer power; negative exponents invert first.
    pub fn pow(&self, exp: i64) -> AlgebraResult<Expr> {
        let magnitude = u32::try_from(exp.unsigned_abs())
            .map_err(|_| unsupported(format!("exponent {exp} is too large")))?;
        let base = if exp < 0 { self.recip()? } else { self.clone() };
        Ok(Self::canonical(
            base.num.pow(magnitude),
            base.den.pow(magnitude),
        ))
    }

    /// Cancel the polynomial GCD of numerator and denominator.
    #[must_use]
    pub fn simplify(&self) -> Expr {
        if self.den.constant_value().is_some() {
            return self.clone();
        }
        let g = poly_gcd(&self.num, &self.den);
        if g.is_one() {
            return self.clone();
        }
        match (self.num.div_exact(&g), self.den.div_exact(&g)) {
            (Some(num), Some(den)) => Self::canonical(num, den),
            _ => self.clone(),
        }
    }

    fn canonical(num: Poly, den: Poly) -> Self {
        if num.is_zero() {
            return Self::zero();
        }

        let shared = num.monomial_content().gcd(&den.monomial_content());
        let (mut num, mut den) = if shared.is_one() {
            (num, den)
        } else {
            (
                num.div_monomial(&shared).unwrap_or(num),
                den.div_monomial(&shared).unwrap_or(den),
            )
        };

        if den.constant_value().is_none() {
            if let Some(q) = num.div_exact(&den) {
                num = q;
                den = Poly::one();
            } else if let Some(q) = den.div_exact(&num) {
                num = Poly::one();
                den = q;
            }
        }

        let (num_content, num) = num.primitive_parts();
        let (den_content, den) = den.primitive_parts();
        let ratio = match den_content.recip() {
            Some(inv) => &num_content * &inv,
            None => num_content,
        };
        let scale_num = Rational::from_integer(ratio.numerator().clone());
        let scale_den = Rational::from_integer(ratio.denominator());
        Self {
            num: num.scale(&scale_num),
            den: den.scale(&scale_den),
        }
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Rational> for Expr {
    fn from(value: Rational) -> Self {
        Self::from_rational(value)
    }
}

impl From<Poly> for Expr {
    fn from(value: Poly) -> Self {
        Self::from_poly(value)
    }
}
