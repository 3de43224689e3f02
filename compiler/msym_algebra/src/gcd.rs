//! Multivariate polynomial GCD over the rationals.
//!
//! Recursive primitive PRS: pick a main symbol, view both inputs as
//! polynomials in it with coefficients in the remaining symbols, split off
//! contents (recursively, over one symbol fewer) and run a primitive
//! pseudo-remainder sequence on the primitive parts.
//!
//! Results are normalised (see [`normalize`]), so the GCD is unique.

use num_traits::One;
use tracing::trace;

use crate::monomial::{Monomial, Symbol};
use crate::poly::Poly;
use crate::rational::Rational;

/// Integer coprime coefficients with a positive leading coefficient.
/// Constants normalise to `1`, zero stays zero.
#[must_use]
pub fn normalize(p: &Poly) -> Poly {
    p.primitive_parts().1
}

/// Normalised greatest common divisor. `gcd(0, 0) = 0`.
#[must_use]
pub fn poly_gcd(a: &Poly, b: &Poly) -> Poly {
    if a.is_zero() {
        return normalize(b);
    }
    if b.is_zero() {
        return normalize(a);
    }
    if a.constant_value().is_some() || b.constant_value().is_some() {
        return Poly::one();
    }

    let shared = a.monomial_content().gcd(&b.monomial_content());
    let a = a.div_monomial(&shared).unwrap_or_else(|| a.clone());
    let b = b.div_monomial(&shared).unwrap_or_else(|| b.clone());

    let Some(main) = a.symbols().into_iter().chain(b.symbols()).min() else {
        return Poly::monomial(shared, Rational::one());
    };
    trace!(main = %main, lhs_terms = a.len(), rhs_terms = b.len(), "poly gcd");

    let (content_a, prim_a) = split_content(&a, &main);
    let (content_b, prim_b) = split_content(&b, &main);
    let content = poly_gcd(&content_a, &content_b);
    let primitive = prs_gcd(prim_a, prim_b, &main);

    normalize(&content.mul(&primitive).mul_monomial(&shared))
}

/// Content (GCD of coefficients in `symbol`) and primitive part.
fn split_content(p: &Poly, symbol: &Symbol) -> (Poly, Poly) {
    let content = coefficients_in(p, symbol)
        .iter()
        .fold(Poly::zero(), |acc, c| poly_gcd(&acc, c));
    let primitive = p.div_exact(&content).unwrap_or_else(|| p.clone());
    (content, primitive)
}

fn coefficients_in(p: &Poly, symbol: &str) -> Vec<Poly> {
    (0..=p.degree_in(symbol))
        .map(|d| p.coefficient_of(symbol, d))
        .filter(|c| !c.is_zero())
        .collect()
}

fn primitive_in(p: &Poly, symbol: &Symbol) -> Poly {
    split_content(p, symbol).1
}

fn prs_gcd(mut f: Poly, mut g: Poly, symbol: &Symbol) -> Poly {
    if f.degree_in(symbol) < g.degree_in(symbol) {
        std::mem::swap(&mut f, &mut g);
    }
    if g.degree_in(symbol) == 0 {
        return Poly::one();
    }
    loop {
        let r = pseudo_remainder(&f, &g, symbol);
        if r.is_zero() {
            return normalize(&primitive_in(&g, symbol));
        }
        if r.degree_in(symbol) == 0 {
            return Poly::one();
        }
        f = g;
        g = primitive_in(&r, symbol);
    }
}

/// `lc(g)^k * f - q * g` with `deg(result) < deg(g)` in `symbol`.
fn pseudo_remainder(f: &Poly, g: &Poly, symbol: &Symbol) -> Poly {
    let g_deg = g.degree_in(symbol);
    let g_lead = g.coefficient_of(symbol, g_deg);
    let mut r = f.clone();
    while !r.is_zero() {
        let r_deg = r.degree_in(symbol);
        if r_deg < g_deg {
            break;
        }
        let r_lead = r.coefficient_of(symbol, r_deg);
        let shift = Monomial::from_factors([(symbol.clone(), r_deg - g_deg)]);
        r = r.mul(&g_lead).sub(&r_lead.mul_monomial(&shift).mul(g));
    }
    r
}
