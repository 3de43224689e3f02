//! Exact symbolic algebra for msym.
//!
//! Cell text is parsed into [`Expr`], a rational function with rational
//! coefficients, and matrices of those are [`SymbolicMatrix`]. Everything is
//! exact: there is no floating point anywhere in this crate.
//!
//! - [`parse_expr`]: free-form text with implicit multiplication
//! - [`Expr::simplify`]: cancel the polynomial GCD
//! - [`to_plain`] / [`to_latex`]: rendering
//! - [`SymbolicMatrix`]: transpose, inverse, determinant, trace, rank, rref

mod errors;
mod expr;
mod gcd;
mod matrix;
mod monomial;
mod parse;
mod poly;
mod rational;
mod render;
mod stack;

pub use errors::{AlgebraError, AlgebraErrorKind, AlgebraResult};
pub use expr::Expr;
pub use gcd::poly_gcd;
pub use matrix::SymbolicMatrix;
pub use monomial::{Monomial, Symbol};
pub use parse::parse_expr;
pub use poly::Poly;
pub use rational::Rational;
pub use render::{to_latex, to_plain};
