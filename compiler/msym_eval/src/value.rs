//! Values on the evaluator stack.

use msym_algebra::{parse_expr, to_plain, AlgebraResult, Expr, SymbolicMatrix};
use std::fmt;

/// A scalar kept as text until an operator consumes it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScalarText(String);

impl ScalarText {
    pub fn new(text: impl Into<String>) -> Self {
        ScalarText(text.into())
    }

    /// Plain-text rendering of `expr`, which parses back to the same value.
    pub fn from_expr(expr: &Expr) -> Self {
        ScalarText(to_plain(expr))
    }

    pub fn parse(&self) -> AlgebraResult<Expr> {
        parse_expr(&self.0)
    }
}

impl fmt::Display for ScalarText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stack entry, tagged with its type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypedValue {
    Matrix(SymbolicMatrix),
    Scalar(ScalarText),
}

impl TypedValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            TypedValue::Matrix(_) => "matrix",
            TypedValue::Scalar(_) => "scalar",
        }
    }
}

impl From<SymbolicMatrix> for TypedValue {
    fn from(matrix: SymbolicMatrix) -> Self {
        TypedValue::Matrix(matrix)
    }
}

impl From<ScalarText> for TypedValue {
    fn from(scalar: ScalarText) -> Self {
        TypedValue::Scalar(scalar)
    }
}
