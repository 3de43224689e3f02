//! Plain-text and LaTeX rendering of [`Expr`].
//!
//! Plain text uses `*` and `**` (`a**2 + 2*a*b`, `d/(a*d - b*c)`) and parses
//! back to the same value. LaTeX uses juxtaposition, `^{}` and `\frac{}{}`.

use dashu::integer::IBig;
use num_traits::One;
use std::fmt;

use crate::expr::Expr;
use crate::monomial::Monomial;
use crate::parse::GREEK_LETTERS;
use crate::poly::Poly;
use crate::rational::Rational;

/// One printed term: `sign * numer/denom * monomial`, with `numer > 0`.
struct Term<'a> {
    negative: bool,
    numer: IBig,
    denom: IBig,
    monomial: &'a Monomial,
}

impl Term<'_> {
    fn has_unit_coefficient(&self) -> bool {
        self.numer == IBig::ONE && self.denom == IBig::ONE
    }
}

/// Terms of `poly / divisor`, leading term first.
fn terms_over<'a>(poly: &'a Poly, divisor: &Rational) -> Vec<Term<'a>> {
    let inv = divisor.recip().unwrap_or_else(Rational::one);
    poly.terms()
        .map(|(monomial, coeff)| {
            let c = coeff * &inv;
            Term {
                negative: c.is_negative(),
                numer: c.abs().numerator().clone(),
                denom: c.denominator(),
                monomial,
            }
        })
        .collect()
}

fn is_single_factor(terms: &[Term<'_>]) -> bool {
    matches!(terms, [t] if t.has_unit_coefficient() && t.monomial.factors().len() == 1)
}

/// Render as plain text.
#[must_use]
pub fn to_plain(expr: &Expr) -> String {
    let num = expr.numerator();
    let den = expr.denominator();
    if let Some(d) = den.constant_value() {
        return plain_poly(&terms_over(num, &d));
    }

    let num_terms = terms_over(num, &Rational::one());
    let den_terms = terms_over(den, &Rational::one());
    let (sign, numerator) = match num_terms.as_slice() {
        [t] => (if t.negative { "-" } else { "" }, plain_term(t)),
        _ => ("", format!("({})", plain_poly(&num_terms))),
    };
    let denominator = if is_single_factor(&den_terms) {
        plain_poly(&den_terms)
    } else {
        format!("({})", plain_poly(&den_terms))
    };
    format!("{sign}{numerator}/{denominator}")
}

fn plain_poly(terms: &[Term<'_>]) -> String {
    if terms.is_empty() {
        return "0".to_string();
    }
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        match (i, term.negative) {
            (0, true) => out.push('-'),
            (0, false) => {}
            (_, true) => out.push_str(" - "),
            (_, false) => out.push_str(" + "),
        }
        out.push_str(&plain_term(term));
    }
    out
}

fn plain_term(term: &Term<'_>) -> String {
    let mut out = String::new();
    if term.monomial.is_one() {
        out.push_str(&term.numer.to_string());
    } else {
        if term.numer != IBig::ONE {
            out.push_str(&format!("{}*", term.numer));
        }
        let factors: Vec<String> = term
            .monomial
            .factors()
            .iter()
            .map(|(symbol, exp)| {
                if *exp == 1 {
                    symbol.to_string()
                } else {
                    format!("{symbol}**{exp}")
                }
            })
            .collect();
        out.push_str(&factors.join("*"));
    }
    if term.denom != IBig::ONE {
        out.push_str(&format!("/{}", term.denom));
    }
    out
}

/// Render as LaTeX.
#[must_use]
pub fn to_latex(expr: &Expr) -> String {
    let num = expr.numerator();
    let den = expr.denominator();
    if let Some(d) = den.constant_value() {
        return latex_poly(&terms_over(num, &d));
    }

    let num_terms = terms_over(num, &Rational::one());
    let den_terms = terms_over(den, &Rational::one());
    let (sign, numerator) = match num_terms.as_slice() {
        [t] => (if t.negative { "- " } else { "" }, latex_term(t)),
        _ => ("", latex_poly(&num_terms)),
    };
    format!("{sign}\\frac{{{numerator}}}{{{}}}", latex_poly(&den_terms))
}

fn latex_poly(terms: &[Term<'_>]) -> String {
    if terms.is_empty() {
        return "0".to_string();
    }
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        match (i, term.negative) {
            (0, true) => out.push_str("- "),
            (0, false) => {}
            (_, true) => out.push_str(" - "),
            (_, false) => out.push_str(" + "),
        }
        out.push_str(&latex_term(term));
    }
    out
}

fn latex_term(term: &Term<'_>) -> String {
    let body = if term.monomial.is_one() {
        term.numer.to_string()
    } else {
        let factors: Vec<String> = term
            .monomial
            .factors()
            .iter()
            .map(|(symbol, exp)| {
                let name = latex_symbol(symbol);
                if *exp == 1 {
                    name
                } else {
                    format!("{name}^{{{exp}}}")
                }
            })
            .collect();
        let product = factors.join(" ");
        if term.numer == IBig::ONE {
            product
        } else {
            format!("{} {product}", term.numer)
        }
    };
    if term.denom == IBig::ONE {
        body
    } else {
        format!("\\frac{{{body}}}{{{}}}", term.denom)
    }
}

/// `alpha` → `\alpha`, `x1` → `x_{1}`, `k_2` → `k_{2}`.
fn latex_symbol(name: &str) -> String {
    let (base, subscript) = match name.split_once('_') {
        Some((base, sub)) => (base, Some(sub)),
        None => {
            let split = name
                .find(|c: char| c.is_ascii_digit())
                .unwrap_or(name.len());
            let (base, digits) = name.split_at(split);
            (base, (!digits.is_empty()).then_some(digits))
        }
    };
    let base = if GREEK_LETTERS.contains(&base) {
        format!("\\{base}")
    } else {
        base.to_string()
    };
    match subscript {
        Some(sub) => format!("{base}_{{{sub}}}"),
        None => base,
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_plain(self))
    }
}
