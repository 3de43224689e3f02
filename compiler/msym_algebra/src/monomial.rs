//! Monomials: products of symbols raised to positive integer powers.
//!
//! A monomial is a list of `(symbol, exponent)` pairs sorted by symbol name,
//! with no zero exponents. The `Ord` impl puts the *largest* monomial first
//! under graded-lexicographic order (higher total degree first, ties broken by
//! the alphabetically earliest symbol with the larger exponent), so a
//! `BTreeMap<Monomial, _>` iterates leading term first. That is also the
//! order terms are printed in: `a*d - b*c`, `a**2 + 2*a*b + b**2 + 1`.

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::sync::Arc;

/// A symbol name, cheap to clone.
pub type Symbol = Arc<str>;

#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial {
    factors: SmallVec<[(Symbol, u32); 4]>,
}

impl Monomial {
    /// The empty product.
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// A single symbol to the first power.
    #[must_use]
    pub fn var(symbol: Symbol) -> Self {
        let mut factors = SmallVec::new();
        factors.push((symbol, 1));
        Self { factors }
    }

    /// Build from arbitrary `(symbol, exponent)` pairs, merging repeats.
    #[must_use]
    pub fn from_factors(pairs: impl IntoIterator<Item = (Symbol, u32)>) -> Self {
        let mut result = Self::one();
        for (symbol, exp) in pairs {
            if exp > 0 {
                let mut single = Self::var(symbol);
                single.factors[0].1 = exp;
                result = result.mul(&single);
            }
        }
        result
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.factors.is_empty()
    }

    /// The `(symbol, exponent)` pairs, sorted by symbol.
    #[must_use]
    pub fn factors(&self) -> &[(Symbol, u32)] {
        &self.factors
    }

    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.factors.iter().map(|(_, e)| *e).sum()
    }

    /// Exponent of `symbol` (zero when absent).
    #[must_use]
    pub fn degree_in(&self, symbol: &str) -> u32 {
        self.factors
            .iter()
            .find(|(s, _)| &**s == symbol)
            .map_or(0, |(_, e)| *e)
    }

    /// Product of two monomials (exponents add).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut factors = SmallVec::with_capacity(self.factors.len() + other.factors.len());
        let (mut i, mut j) = (0, 0);
        while i < self.factors.len() && j < other.factors.len() {
            let (ls, le) = &self.factors[i];
            let (rs, re) = &other.factors[j];
            match ls.cmp(rs) {
                Ordering::Less => {
                    factors.push((ls.clone(), *le));
                    i += 1;
                }
                Ordering::Greater => {
                    factors.push((rs.clone(), *re));
                    j += 1;
                }
                Ordering::Equal => {
                    factors.push((ls.clone(), le + re));
                    i += 1;
                    j += 1;
                }
            }
        }
        factors.extend(self.factors[i..].iter().cloned());
        factors.extend(other.factors[j..].iter().cloned());
        Self { factors }
    }

    /// Quotient `self / other`, or `None` if `other` does not divide `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        let mut factors = self.factors.clone();
        for (symbol, exp) in &other.factors {
            let slot = factors.iter_mut().find(|(s, _)| s == symbol)?;
            if slot.1 < *exp {
                return None;
            }
            slot.1 -= exp;
        }
        factors.retain(|(_, e)| *e > 0);
        Some(Self { factors })
    }

    /// Greatest common divisor (minimum exponents).
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let factors = self
            .factors
            .iter()
            .filter_map(|(symbol, exp)| {
                let shared = (*exp).min(other.degree_in(symbol));
                (shared > 0).then(|| (symbol.clone(), shared))
            })
            .collect();
        Self { factors }
    }

    /// Split off the power of `symbol`: `self = rest * symbol^exp`.
    #[must_use]
    pub fn split_off(&self, symbol: &str) -> (Self, u32) {
        let exp = self.degree_in(symbol);
        let factors = self
            .factors
            .iter()
            .filter(|(s, _)| &**s != symbol)
            .cloned()
            .collect();
        (Self { factors }, exp)
    }

    /// Graded-lex comparison: `Greater` means `self` is the larger monomial.
    fn grlex(&self, other: &Self) -> Ordering {
        let by_degree = self.total_degree().cmp(&other.total_degree());
        if by_degree != Ordering::Equal {
            return by_degree;
        }
        let (mut i, mut j) = (0, 0);
        loop {
            match (self.factors.get(i), other.factors.get(j)) {
                (None, None) => return Ordering::Equal,
                // The side that still has a symbol holds a positive exponent
                // where the other has zero.
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some((ls, le)), Some((rs, re))) => match ls.cmp(rs) {
                    Ordering::Less => return Ordering::Greater,
                    Ordering::Greater => return Ordering::Less,
                    Ordering::Equal => {
                        if le != re {
                            return le.cmp(re);
                        }
                        i += 1;
                        j += 1;
                    }
                },
            }
        }
    }
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        other.grlex(self)
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
