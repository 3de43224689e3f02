//! Text to [`Expr`]: the cell-level expression parser.
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! sum     = product (("+" | "-") product)*
//! product = signed (("*" | "/") signed | power)*      // adjacency multiplies
//! signed  = ("+" | "-") signed | power
//! power   = primary (("^" | "**") signed)?             // right associative
//! primary = number | identifier | "(" sum ")"
//! ```
//!
//! Identifiers made only of letters are split into one symbol per letter
//! (`ab` is `a*b`) unless they name a Greek letter; identifiers containing
//! digits or underscores (`x1`, `k_2`) are kept whole.

use logos::Logos;
use std::ops::Range;
use tracing::trace;

use crate::errors::{syntax, unsupported, AlgebraError, AlgebraResult};
use crate::expr::Expr;
use crate::rational::Rational;
use crate::stack::ensure_sufficient_stack;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum CellToken {
    #[regex(r"[0-9][0-9.]*|\.[0-9][0-9.]*")]
    Number,
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Ident,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("**")]
    DoubleStar,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl CellToken {
    fn starts_primary(self) -> bool {
        matches!(self, Self::Number | Self::Ident | Self::LParen)
    }
}

/// Names kept as a single symbol even though they are all letters.
pub const GREEK_LETTERS: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "omicron", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi",
    "psi", "omega",
];

/// Function names that are recognised only to be rejected.
const FUNCTION_NAMES: &[&str] = &["sin", "cos", "tan", "exp", "log", "ln", "sqrt", "abs"];

/// Parse free-form algebraic text such as `2a + b^2` or `(x1 - 1)/3`.
pub fn parse_expr(text: &str) -> AlgebraResult<Expr> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(syntax("empty expression"));
    }
    let mut parser = CellParser {
        text,
        tokens,
        pos: 0,
    };
    let expr = parser.sum()?;
    if let Some(&(_, ref range)) = parser.tokens.get(parser.pos) {
        return Err(syntax(format!("unexpected '{}'", &text[range.clone()])).at(range.start));
    }
    trace!(text, "parsed cell");
    Ok(expr)
}

fn tokenize(text: &str) -> AlgebraResult<Vec<(CellToken, Range<usize>)>> {
    let mut lexer = CellToken::lexer(text);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let range = lexer.span();
        match result {
            Ok(token) => tokens.push((token, range)),
            Err(()) => {
                let found = lexer.slice().chars().next().unwrap_or('?');
                return Err(syntax(format!("unexpected character '{found}'")).at(range.start));
            }
        }
    }
    Ok(tokens)
}

struct CellParser<'a> {
    text: &'a str,
    tokens: Vec<(CellToken, Range<usize>)>,
    pos: usize,
}

impl CellParser<'_> {
    fn peek(&self) -> Option<CellToken> {
        self.tokens.get(self.pos).map(|(t, _)| *t)
    }

    fn bump(&mut self) -> Option<(CellToken, Range<usize>)> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn end_offset(&self) -> usize {
        self.text.len()
    }

    fn unexpected_end(&self) -> AlgebraError {
        syntax("unexpected end of input").at(self.end_offset())
    }

    fn sum(&mut self) -> AlgebraResult<Expr> {
        let mut acc = self.product()?;
        while let Some(op @ (CellToken::Plus | CellToken::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.product()?;
            acc = if op == CellToken::Plus {
                acc.add(&rhs)
            } else {
                acc.sub(&rhs)
            };
        }
        Ok(acc)
    }

    fn product(&mut self) -> AlgebraResult<Expr> {
        let mut acc = self.signed()?;
        loop {
            match self.peek() {
                Some(CellToken::Star) => {
                    self.pos += 1;
                    acc = acc.mul(&self.signed()?);
                }
                Some(CellToken::Slash) => {
                    let offset = self.tokens[self.pos].1.start;
                    self.pos += 1;
                    let rhs = self.signed()?;
                    acc = acc.div(&rhs).map_err(|e| e.at(offset))?;
                }
                Some(token) if token.starts_primary() => {
                    acc = acc.mul(&self.power()?);
                }
                _ => return Ok(acc),
            }
        }
    }

    fn signed(&mut self) -> AlgebraResult<Expr> {
        ensure_sufficient_stack(|| match self.peek() {
            Some(CellToken::Plus) => {
                self.pos += 1;
                self.signed()
            }
            Some(CellToken::Minus) => {
                self.pos += 1;
                Ok(self.signed()?.neg())
            }
            _ => self.power(),
        })
    }

    fn power(&mut self) -> AlgebraResult<Expr> {
        let base = self.primary()?;
        let Some(CellToken::Caret | CellToken::DoubleStar) = self.peek() else {
            return Ok(base);
        };
        let offset = self.tokens[self.pos].1.start;
        self.pos += 1;
        let exponent = self.signed()?;
        let Some(exp) = exponent.as_rational().as_ref().and_then(Rational::to_i64) else {
            return Err(unsupported("non-integer exponent").at(offset));
        };
        base.pow(exp).map_err(|e| e.at(offset))
    }

    fn primary(&mut self) -> AlgebraResult<Expr> {
        let Some((token, range)) = self.bump() else {
            return Err(self.unexpected_end());
        };
        let text = self.text;
        let slice = &text[range.clone()];
        match token {
            CellToken::Number => Rational::parse_decimal(slice)
                .map(Expr::from_rational)
                .ok_or_else(|| syntax(format!("invalid number '{slice}'")).at(range.start)),
            CellToken::Ident => identifier(slice).map_err(|e| e.at(range.start)),
            CellToken::LParen => {
                let inner = ensure_sufficient_stack(|| self.sum())?;
                match self.bump() {
                    Some((CellToken::RParen, _)) => Ok(inner),
                    Some((_, r)) => {
                        Err(syntax(format!("expected ')', found '{}'", &text[r.clone()])).at(r.start))
                    }
                    None => Err(syntax("unclosed '('").at(range.start)),
                }
            }
            _ => Err(syntax(format!("unexpected '{slice}'")).at(range.start)),
        }
    }
}

/// Expand an identifier into a product of symbols.
fn identifier(name: &str) -> AlgebraResult<Expr> {
    if FUNCTION_NAMES.contains(&name) {
        return Err(unsupported(format!("function '{name}'")));
    }
    let splittable = name.len() > 1
        && name.bytes().all(|b| b.is_ascii_alphabetic())
        && !GREEK_LETTERS.contains(&name);
    if !splittable {
        return Ok(Expr::symbol(name));
    }
    let mut product = Expr::one();
    for (i, _) in name.char_indices() {
        product = product.mul(&Expr::symbol(&name[i..=i]));
    }
    Ok(product)
}
