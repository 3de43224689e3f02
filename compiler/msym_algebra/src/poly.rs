//! Sparse multivariate polynomials with rational coefficients.
//!
//! Terms live in a `BTreeMap` keyed by [`Monomial`], so iteration yields the
//! leading term first and zero coefficients are never stored.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use dashu::integer::IBig;
use num_traits::{One, Zero};

use crate::monomial::{Monomial, Symbol};
use crate::rational::{integer_gcd, integer_lcm, Rational};

#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Poly {
    terms: BTreeMap<Monomial, Rational>,
}

impl Poly {
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn one() -> Self {
        Self::constant(Rational::one())
    }

    #[must_use]
    pub fn constant(value: Rational) -> Self {
        Self::monomial(Monomial::one(), value)
    }

    #[must_use]
    pub fn var(symbol: Symbol) -> Self {
        Self::monomial(Monomial::var(symbol), Rational::one())
    }

    /// A single term `coeff * monomial`.
    #[must_use]
    pub fn monomial(monomial: Monomial, coeff: Rational) -> Self {
        let mut terms = BTreeMap::new();
        if !coeff.is_zero() {
            terms.insert(monomial, coeff);
        }
        Self { terms }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The value of a constant polynomial (including zero).
    #[must_use]
    pub fn constant_value(&self) -> Option<Rational> {
        match self.terms.len() {
            0 => Some(Rational::zero()),
            1 => self
                .terms
                .iter()
                .next()
                .filter(|(m, _)| m.is_one())
                .map(|(_, c)| c.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.constant_value().is_some_and(|c| c.is_one())
    }

    /// Number of nonzero terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms, leading term first.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Rational)> {
        self.terms.iter()
    }

    #[must_use]
    pub fn leading_term(&self) -> Option<(&Monomial, &Rational)> {
        self.terms.iter().next()
    }

    /// Every symbol that appears with a positive exponent.
    #[must_use]
    pub fn symbols(&self) -> BTreeSet<Symbol> {
        self.terms
            .keys()
            .flat_map(|m| m.factors().iter().map(|(s, _)| s.clone()))
            .collect()
    }

    #[must_use]
    pub fn degree_in(&self, symbol: &str) -> u32 {
        self.terms
            .keys()
            .map(|m| m.degree_in(symbol))
            .max()
            .unwrap_or(0)
    }

    /// Coefficient of `symbol^degree`, viewing `self` as a polynomial in
    /// `symbol` over the remaining symbols.
    #[must_use]
    pub fn coefficient_of(&self, symbol: &str, degree: u32) -> Poly {
        let mut out = Poly::zero();
        for (m, c) in &self.terms {
            let (rest, exp) = m.split_off(symbol);
            if exp == degree {
                out.add_term(rest, c.clone());
            }
        }
        out
    }

    fn add_term(&mut self, monomial: Monomial, coeff: Rational) {
        if coeff.is_zero() {
            return;
        }
        match self.terms.entry(monomial) {
            Entry::Vacant(slot) => {
                slot.insert(coeff);
            }
            Entry::Occupied(mut slot) => {
                let sum = &*slot.get() + &coeff;
                if sum.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }

    #[must_use]
    pub fn add(&self, other: &Poly) -> Poly {
        let mut out = self.clone();
        for (m, c) in &other.terms {
            out.add_term(m.clone(), c.clone());
        }
        out
    }

    #[must_use]
    pub fn sub(&self, other: &Poly) -> Poly {
        let mut out = self.clone();
        for (m, c) in &other.terms {
            out.add_term(m.clone(), -c);
        }
        out
    }

    #[must_use]
    pub fn neg(&self) -> Poly {
        let terms = self.terms.iter().map(|(m, c)| (m.clone(), -c)).collect();
        Poly { terms }
    }

    #[must_use]
    pub fn mul(&self, other: &Poly) -> Poly {
        let mut out = Poly::zero();
        for (lm, lc) in &self.terms {
            for (rm, rc) in &other.terms {
                out.add_term(lm.mul(rm), lc * rc);
            }
        }
        out
    }

    /// Multiply every coefficient by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &Rational) -> Poly {
        if factor.is_zero() {
            return Poly::zero();
        }
        let terms = self
            .terms
            .iter()
            .map(|(m, c)| (m.clone(), c * factor))
            .collect();
        Poly { terms }
    }

    #[must_use]
    pub fn mul_monomial(&self, monomial: &Monomial) -> Poly {
        let terms = self
            .terms
            .iter()
            .map(|(m, c)| (m.mul(monomial), c.clone()))
            .collect();
        Poly { terms }
    }

    /// Divide every term by `monomial`; `None` if some term is not divisible.
    #[must_use]
    pub fn div_monomial(&self, monomial: &Monomial) -> Option<Poly> {
        let mut terms = BTreeMap::new();
        for (m, c) in &self.terms {
            terms.insert(m.div(monomial)?, c.clone());
        }
        Some(Poly { terms })
    }

    #[must_use]
    pub fn pow(&self, exp: u32) -> Poly {
        let mut result = Poly::one();
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(&base);
            }
        }
        result
    }

    /// Exact quotient `self / divisor`, or `None` if the division leaves a
    /// remainder (or `divisor` is zero).
    ///
    /// Plain multivariate division by the leading term; because graded-lex
    /// is a monomial order, a zero remainder is reached exactly when the
    /// division is exact.
    #[must_use]
    pub fn div_exact(&self, divisor: &Poly) -> Option<Poly> {
        let (lead_m, lead_c) = divisor.leading_term()?;
        let mut remainder = self.clone();
        let mut quotient = Poly::zero();
        while let Some((rm, rc)) = remainder.leading_term() {
            let qm = rm.div(lead_m)?;
            let qc = rc / lead_c;
            let step = Poly::monomial(qm, qc);
            remainder = remainder.sub(&step.mul(divisor));
            quotient = quotient.add(&step);
        }
        Some(quotient)
    }

    /// GCD of all monomials (the largest monomial factor).
    #[must_use]
    pub fn monomial_content(&self) -> Monomial {
        let mut iter = self.terms.keys();
        let Some(first) = iter.next() else {
            return Monomial::one();
        };
        iter.fold(first.clone(), |acc, m| acc.gcd(m))
    }

    /// Split into `(content, primitive)` with `self = content * primitive`,
    /// where `primitive` has coprime integer coefficients and a positive
    /// leading coefficient. Zero maps to `(0, 0)`.
    #[must_use]
    pub fn primitive_parts(&self) -> (Rational, Poly) {
        let Some((_, lead)) = self.leading_term() else {
            return (Rational::zero(), Poly::zero());
        };
        let mut num_gcd = IBig::ZERO;
        let mut den_lcm = IBig::ONE;
        for c in self.terms.values() {
            num_gcd = integer_gcd(&num_gcd, c.numerator());
            den_lcm = integer_lcm(&den_lcm, &c.denominator());
        }
        let magnitude = Rational::from_parts(num_gcd, den_lcm).unwrap_or_else(Rational::one);
        let content = if lead.is_negative() { -magnitude } else { magnitude };
        let primitive = match content.recip() {
            Some(inv) => self.scale(&inv),
            None => self.clone(),
        };
        (content, primitive)
    }
}

impl From<Rational> for Poly {
    fn from(value: Rational) -> Self {
        Poly::constant(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
