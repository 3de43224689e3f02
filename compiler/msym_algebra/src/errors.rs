//! Errors raised by the algebra engine.
//!
//! `AlgebraErrorKind` is the typed category; the factory functions below are
//! the public way to build an [`AlgebraError`].

use std::fmt;

/// Result of an algebra operation.
pub type AlgebraResult<T> = Result<T, AlgebraError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlgebraErrorKind {
    /// Text that is not a well-formed expression.
    Syntax { detail: String },
    /// Well-formed, but outside the exact rational-function fragment.
    Unsupported { what: String },
    DivisionByZero,
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    NonSquare {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },
    Singular,
}

impl fmt::Display for AlgebraErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { detail } => write!(f, "invalid expression: {detail}"),
            Self::Unsupported { what } => write!(f, "unsupported: {what}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ShapeMismatch { op, left, right } => write!(
                f,
                "Matrix size mismatch: ({}, {}) {op} ({}, {}).",
                left.0, left.1, right.0, right.1
            ),
            Self::NonSquare {
                operation,
                rows,
                cols,
            } => write!(f, "{operation} requires a square matrix, got ({rows}, {cols})"),
            Self::Singular => write!(f, "Matrix det == 0; not invertible."),
        }
    }
}

/// An algebra failure, optionally pinned to a byte offset in the parsed text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgebraError {
    pub kind: AlgebraErrorKind,
    pub offset: Option<usize>,
}

impl AlgebraError {
    #[must_use]
    pub fn new(kind: AlgebraErrorKind) -> Self {
        Self { kind, offset: None }
    }

    #[must_use]
    pub fn at(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for AlgebraError {}

#[cold]
pub fn syntax(detail: impl Into<String>) -> AlgebraError {
    AlgebraError::new(AlgebraErrorKind::Syntax {
        detail: detail.into(),
    })
}

#[cold]
pub fn unsupported(what: impl Into<String>) -> AlgebraError {
    AlgebraError::new(AlgebraErrorKind::Unsupported { what: what.into() })
}

#[cold]
pub fn division_by_zero() -> AlgebraError {
    AlgebraError::new(AlgebraErrorKind::DivisionByZero)
}

#[cold]
pub fn shape_mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> AlgebraError {
    AlgebraError::new(AlgebraErrorKind::ShapeMismatch { op, left, right })
}

#[cold]
pub fn non_square(operation: &'static str, rows: usize, cols: usize) -> AlgebraError {
    AlgebraError::new(AlgebraErrorKind::NonSquare {
        operation,
        rows,
        cols,
    })
}

#[cold]
pub fn singular() -> AlgebraError {
    AlgebraError::new(AlgebraErrorKind::Singular)
}

#[cfg(test)]
mod tests;
