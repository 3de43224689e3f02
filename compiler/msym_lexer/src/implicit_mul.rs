//! Implicit multiplication.
//!
//! A synthetic `*` goes between two adjacent tokens when:
//! - the left is a number and the right is a word or `(` (`2A`, `2(A+B)`);
//! - the left is `)` and the right is a word, `(` or a number (`(A)B`,
//!   `(A)(B)`, `(A)2`).
//!
//! Nothing is inserted after a word, so `A(B)` and `AB` are left alone.

use msym_ir::{Token, TokenKind};

/// Whether a `*` belongs between `prev` and `curr`.
pub fn needs_implicit_star(prev: &TokenKind, curr: &TokenKind) -> bool {
    match prev {
        TokenKind::Number(_) => matches!(curr, TokenKind::Word(_) | TokenKind::LParen),
        TokenKind::RParen => matches!(
            curr,
            TokenKind::Word(_) | TokenKind::LParen | TokenKind::Number(_)
        ),
        _ => false,
    }
}

/// Copy `raw`, inserting a synthetic `*` wherever [`needs_implicit_star`]
/// holds. The inserted token has an empty span at the end of the left token.
pub fn insert_implicit_multiplication(raw: &[Token]) -> Vec<Token> {
    let mut out = Vec::with_capacity(raw.len() + raw.len() / 2);
    for (i, token) in raw.iter().enumerate() {
        if let Some(prev) = i.checked_sub(1).map(|j| &raw[j]) {
            if needs_implicit_star(&prev.kind, &token.kind) {
                out.push(Token::implicit_star(prev.span.end));
            }
        }
        out.push(token.clone());
    }
    out
}
