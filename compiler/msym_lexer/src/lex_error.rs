//! Lexer errors.

use msym_ir::Span;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character outside letters, digits, `.`, `+ - * /`, parentheses and
    /// whitespace.
    UnexpectedCharacter { found: char },
    /// A digit run with more than one decimal point.
    InvalidNumber { text: String },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnexpectedCharacter { found } => {
                write!(f, "Unexpected character: {found}")
            }
            LexErrorKind::InvalidNumber { .. } => write!(f, "Invalid number format"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for LexError {}

#[cold]
pub(crate) fn unexpected_character(found: char, span: Span) -> LexError {
    LexError {
        span,
        kind: LexErrorKind::UnexpectedCharacter { found },
    }
}

#[cold]
pub(crate) fn invalid_number(text: &str, span: Span) -> LexError {
    LexError {
        span,
        kind: LexErrorKind::InvalidNumber {
            text: text.to_string(),
        },
    }
}
