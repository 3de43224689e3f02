//! Lexer for matrix expressions using logos.
//!
//! Two passes:
//! 1. [`lex_raw`]: logos scan into [`Token`]s (words uppercased, numbers
//!    validated), failing on the first bad character or malformed number.
//! 2. [`insert_implicit_multiplication`]: a pure pass adding synthetic `*`
//!    tokens (`2A` → `2 * A`, `(A)(B)` → `(A) * (B)`).
//!
//! [`tokenize`] runs both.

mod implicit_mul;
mod lex_error;

use logos::Logos;
use msym_ir::{Span, Token, TokenKind};
use tracing::debug;

pub use implicit_mul::{insert_implicit_multiplication, needs_implicit_star};
pub use lex_error::{LexError, LexErrorKind};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // A run of digits and dots starting with a digit, or with a dot that is
    // followed by a digit. Extra dots are diagnosed after the match.
    #[regex(r"[0-9][0-9.]*|\.[0-9][0-9.]*")]
    Number,

    #[regex(r"[A-Za-z]+")]
    Word,
}

/// Scan `source` into raw tokens, without implicit multiplication.
pub fn lex_raw(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let Ok(raw) = token_result else {
            let found = source
                .get(logos.span().start..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or('\u{FFFD}');
            return Err(lex_error::unexpected_character(found, span));
        };
        tokens.push(Token::new(convert_token(raw, slice, span)?, span));
    }

    Ok(tokens)
}

fn convert_token(raw: RawToken, slice: &str, span: Span) -> Result<TokenKind, LexError> {
    Ok(match raw {
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Number => {
            if slice.bytes().filter(|&b| b == b'.').count() > 1 {
                return Err(lex_error::invalid_number(slice, span));
            }
            TokenKind::Number(slice.to_string())
        }
        RawToken::Word => TokenKind::Word(slice.to_ascii_uppercase()),
    })
}

/// Lex `source` and insert implicit multiplication.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let raw = lex_raw(source)?;
    let tokens = insert_implicit_multiplication(&raw);
    debug!(
        raw = raw.len(),
        inserted = tokens.len() - raw.len(),
        "lexed expression"
    );
    Ok(tokens)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
