//! Parse errors.

use msym_ir::Span;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    /// The offending parenthesis.
    pub span: Span,
    pub kind: ParseErrorKind,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// `)` with no `(` on the operator stack.
    UnmatchedClose,
    /// `(` still on the operator stack at end of input.
    UnclosedOpen,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Both directions share the wire message.
        write!(f, "Mismatched parentheses")
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    /// Short label for the offending parenthesis.
    pub fn label(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnmatchedClose => "no matching `(`",
            ParseErrorKind::UnclosedOpen => "this `(` is never closed",
        }
    }
}

#[cold]
pub(crate) fn unmatched_close(span: Span) -> ParseError {
    ParseError {
        span,
        kind: ParseErrorKind::UnmatchedClose,
    }
}

#[cold]
pub(crate) fn unclosed_open(span: Span) -> ParseError {
    ParseError {
        span,
        kind: ParseErrorKind::UnclosedOpen,
    }
}

#[cfg(test)]
mod tests;
