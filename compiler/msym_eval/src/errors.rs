//! Evaluation errors.
//!
//! `EvalErrorKind` is the typed category; the factory functions are the
//! public way to build an [`EvalError`]. Spans are attached by the evaluator
//! loop with [`EvalError::with_span`] once the offending postfix item is known.

use msym_algebra::AlgebraError;
use msym_ir::{BinaryOp, MatrixFunction, Span};
use std::fmt;

/// Result of an evaluation step.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    UnknownMatrix {
        name: String,
        /// Names that were bound, sorted.
        bound: Vec<String>,
    },
    FunctionExpectsMatrix {
        function: MatrixFunction,
    },
    /// Operand types with no entry in the dispatch table (`A + 2`).
    UnsupportedOperands {
        left: &'static str,
        op: BinaryOp,
        right: &'static str,
    },
    MatrixDivision,
    /// The postfix sequence did not reduce to exactly one value.
    InvalidExpressionFormat,
    Algebra(AlgebraError),
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMatrix { name, .. } => write!(f, "Unknown matrix: {name}"),
            Self::FunctionExpectsMatrix { function } => write!(f, "{function} expects a matrix"),
            Self::UnsupportedOperands { .. } => {
                write!(f, "Only matrix-matrix +,-,* are supported")
            }
            Self::MatrixDivision => write!(f, "Matrix division is not supported"),
            Self::InvalidExpressionFormat => write!(
                f,
                "Invalid expression format. Use formats like: A + B, T(A), INV(A), DET(A)"
            ),
            Self::Algebra(err) => err.fmt(f),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Span of the postfix item that failed, when there is one.
    pub span: Option<Span>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    /// A short label for the offending token.
    pub fn label(&self) -> &'static str {
        match self.kind {
            EvalErrorKind::UnknownMatrix { .. } => "not bound to any matrix",
            EvalErrorKind::FunctionExpectsMatrix { .. } => "argument is a scalar",
            EvalErrorKind::UnsupportedOperands { .. } => "unsupported operand types",
            EvalErrorKind::MatrixDivision => "both operands are matrices",
            EvalErrorKind::InvalidExpressionFormat => "missing operand",
            EvalErrorKind::Algebra(_) => "failed here",
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            EvalErrorKind::Algebra(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AlgebraError> for EvalError {
    fn from(err: AlgebraError) -> Self {
        EvalError::new(EvalErrorKind::Algebra(err))
    }
}

#[cold]
pub fn unknown_matrix(name: &str, bound: &[&str]) -> EvalError {
    EvalError::new(EvalErrorKind::UnknownMatrix {
        name: name.to_string(),
        bound: bound.iter().map(ToString::to_string).collect(),
    })
}

#[cold]
pub fn function_expects_matrix(function: MatrixFunction) -> EvalError {
    EvalError::new(EvalErrorKind::FunctionExpectsMatrix { function })
}

#[cold]
pub fn unsupported_operands(
    left: &'static str,
    op: BinaryOp,
    right: &'static str,
) -> EvalError {
    EvalError::new(EvalErrorKind::UnsupportedOperands { left, op, right })
}

#[cold]
pub fn matrix_division() -> EvalError {
    EvalError::new(EvalErrorKind::MatrixDivision)
}

#[cold]
pub fn invalid_expression_format() -> EvalError {
    EvalError::new(EvalErrorKind::InvalidExpressionFormat)
}

#[cfg(test)]
mod tests;
