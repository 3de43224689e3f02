//! The pipeline error and its rendering.
//!
//! `Problem` wraps the first failure of any phase. It owns the mapping to a
//! stable [`ErrorCode`] and to a [`Diagnostic`] that points into the
//! expression.

use msym_algebra::{AlgebraError, AlgebraErrorKind};
use msym_diagnostic::{Diagnostic, ErrorCode};
use msym_eval::{BuildError, BuildErrorKind, EvalError, EvalErrorKind};
use msym_ir::Span;
use msym_lexer::{LexError, LexErrorKind};
use msym_parse::{ParseError, ParseErrorKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Problem {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Problem {
    pub fn code(&self) -> ErrorCode {
        match self {
            Problem::Lex(err) => match err.kind {
                LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0001,
                LexErrorKind::InvalidNumber { .. } => ErrorCode::E0002,
            },
            Problem::Parse(err) => match err.kind {
                ParseErrorKind::UnmatchedClose => ErrorCode::E1001,
                ParseErrorKind::UnclosedOpen => ErrorCode::E1002,
            },
            Problem::Build(err) => match err.kind {
                BuildErrorKind::Ragged { .. } => ErrorCode::E2001,
                BuildErrorKind::ShapeMismatch { .. } => ErrorCode::E2002,
                BuildErrorKind::InvalidCell { .. } => ErrorCode::E2003,
            },
            Problem::Eval(err) => match &err.kind {
                EvalErrorKind::UnknownMatrix { .. } => ErrorCode::E6001,
                EvalErrorKind::FunctionExpectsMatrix { .. } => ErrorCode::E6002,
                EvalErrorKind::UnsupportedOperands { .. } => ErrorCode::E6003,
                EvalErrorKind::MatrixDivision => ErrorCode::E6004,
                EvalErrorKind::InvalidExpressionFormat => ErrorCode::E6005,
                EvalErrorKind::Algebra(inner) => algebra_code(inner),
            },
        }
    }

    /// Where in the expression the problem is, if it is in the expression.
    pub fn span(&self) -> Option<Span> {
        match self {
            Problem::Lex(err) => Some(err.span),
            Problem::Parse(err) => Some(err.span),
            Problem::Build(_) => None,
            Problem::Eval(err) => err.span,
        }
    }

    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());
        if let Some(span) = self.span() {
            diag = diag.with_label(span, self.label());
        }
        match self {
            Problem::Eval(err) => match &err.kind {
                EvalErrorKind::UnknownMatrix { bound, .. } if bound.is_empty() => {
                    diag.with_note("no matrices are bound")
                }
                EvalErrorKind::UnknownMatrix { bound, .. } => {
                    diag.with_note(format!("bound matrices: {}", bound.join(", ")))
                }
                EvalErrorKind::UnsupportedOperands { left, op, right } => diag.with_note(format!(
                    "`{left} {op} {right}`: scalars combine with matrices only through `*` and `/`"
                )),
                EvalErrorKind::MatrixDivision => {
                    diag.with_note("multiply by the inverse instead, e.g. `A * INV(B)`")
                }
                EvalErrorKind::InvalidExpressionFormat => diag.with_note(
                    "every operator needs two operands and every function one parenthesized argument",
                ),
                _ => diag,
            },
            Problem::Build(err) => match &err.kind {
                BuildErrorKind::InvalidCell { source, .. } => match source.offset {
                    Some(offset) => diag.with_note(format!("at byte {offset} of the cell")),
                    None => diag,
                },
                _ => diag,
            },
            Problem::Lex(_) | Problem::Parse(_) => diag,
        }
    }

    fn label(&self) -> String {
        match self {
            Problem::Lex(err) => match &err.kind {
                LexErrorKind::UnexpectedCharacter { .. } => {
                    "not part of the expression language".to_string()
                }
                LexErrorKind::InvalidNumber { text } => format!("`{text}` has more than one `.`"),
            },
            Problem::Parse(err) => err.label().to_string(),
            Problem::Build(_) => String::new(),
            Problem::Eval(err) => err.label().to_string(),
        }
    }
}

fn algebra_code(err: &AlgebraError) -> ErrorCode {
    match err.kind {
        AlgebraErrorKind::Syntax { .. } => ErrorCode::E3001,
        AlgebraErrorKind::Unsupported { .. } => ErrorCode::E3002,
        AlgebraErrorKind::DivisionByZero => ErrorCode::E3003,
        AlgebraErrorKind::ShapeMismatch { .. } => ErrorCode::E3004,
        AlgebraErrorKind::NonSquare { .. } => ErrorCode::E3005,
        AlgebraErrorKind::Singular => ErrorCode::E3006,
    }
}
