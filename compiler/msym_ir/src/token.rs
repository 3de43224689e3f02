//! Token types produced by the expression lexer.

use super::Span;
use std::fmt;

/// A token with its span in the source.
///
/// `synthetic` marks the `*` tokens the lexer inserts for implicit
/// multiplication; those carry a zero-length span at the insertion point.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub synthetic: bool,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            span,
            synthetic: false,
        }
    }

    /// An implicit-multiplication `*` inserted at `offset`.
    #[inline]
    pub fn implicit_star(offset: u32) -> Self {
        Token {
            kind: TokenKind::Star,
            span: Span::point(offset),
            synthetic: true,
        }
    }

    /// Create a dummy token for tests.
    pub fn dummy(kind: TokenKind) -> Self {
        Token::new(kind, Span::DUMMY)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.synthetic {
            write!(f, "{:?} (implicit) @ {}", self.kind, self.span)
        } else {
            write!(f, "{:?} @ {}", self.kind, self.span)
        }
    }
}

/// Token kinds of the matrix expression language.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    Plus,
    Minus,
    Star,
    Slash,
    /// Digit run with at most one `.`, kept as source text.
    Number(String),
    /// Alphabetic run, uppercased.
    Word(String),
}

impl TokenKind {
    /// Human-readable name used in debug dumps and diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Number(_) => "number",
            TokenKind::Word(_) => "word",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "LParen"),
            TokenKind::RParen => write!(f, "RParen"),
            TokenKind::Plus => write!(f, "Plus"),
            TokenKind::Minus => write!(f, "Minus"),
            TokenKind::Star => write!(f, "Star"),
            TokenKind::Slash => write!(f, "Slash"),
            TokenKind::Number(text) => write!(f, "Number({text})"),
            TokenKind::Word(text) => write!(f, "Word({text})"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(text) | TokenKind::Word(text) => write!(f, "{text}"),
            other => write!(f, "{}", other.display_name()),
        }
    }
}

#[cfg(test)]
mod tests;
