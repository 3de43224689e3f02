//! Shunting-yard conversion of the token stream to postfix.
//!
//! Words naming a matrix function (`T`, `INV`, `DET`, `TRACE`, `RANK`,
//! `RREF`) wait on the operator stack and are emitted right after the `)`
//! that closes their argument; every other word is a matrix variable.
//! Binary operators are left associative with `* /` binding tighter than
//! `+ -`.

mod error;

use msym_ir::{BinaryOp, MatrixFunction, PostfixItem, PostfixKind, Span, Token, TokenKind};
use tracing::debug;

pub use error::{ParseError, ParseErrorKind};

/// An entry on the operator stack.
#[derive(Copy, Clone, Debug)]
enum Pending {
    Open(Span),
    Func(MatrixFunction, Span),
    Op(BinaryOp, Span),
}

impl Pending {
    fn into_item(self) -> Option<PostfixItem> {
        match self {
            Pending::Open(_) => None,
            Pending::Func(function, span) => {
                Some(PostfixItem::new(PostfixKind::Func(function), span))
            }
            Pending::Op(op, span) => Some(PostfixItem::new(PostfixKind::Op(op), span)),
        }
    }
}

/// Convert tokens (implicit multiplication already inserted) to postfix.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<PostfixItem>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut pending: Vec<Pending> = Vec::new();

    for token in tokens {
        let span = token.span;
        match &token.kind {
            TokenKind::Word(word) => match MatrixFunction::from_keyword(word) {
                Some(function) => pending.push(Pending::Func(function, span)),
                None => output.push(PostfixItem::new(PostfixKind::Var(word.clone()), span)),
            },
            TokenKind::Number(text) => {
                output.push(PostfixItem::new(PostfixKind::Number(text.clone()), span));
            }
            TokenKind::LParen => pending.push(Pending::Open(span)),
            TokenKind::RParen => {
                loop {
                    match pending.pop() {
                        Some(Pending::Open(_)) => break,
                        Some(entry) => output.extend(entry.into_item()),
                        None => return Err(error::unmatched_close(span)),
                    }
                }
                if let Some(&Pending::Func(..)) = pending.last() {
                    output.extend(pending.pop().and_then(Pending::into_item));
                }
            }
            kind @ (TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash) => {
                let Some(op) = BinaryOp::from_token(kind) else {
                    continue;
                };
                while let Some(&Pending::Op(top, top_span)) = pending.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    pending.pop();
                    output.push(PostfixItem::new(PostfixKind::Op(top), top_span));
                }
                pending.push(Pending::Op(op, span));
            }
        }
    }

    while let Some(entry) = pending.pop() {
        if let Pending::Open(span) = entry {
            return Err(error::unclosed_open(span));
        }
        output.extend(entry.into_item());
    }

    debug!(items = output.len(), "built postfix");
    Ok(output)
}

/// Render postfix items space-separated, e.g. `A B C * +`.
pub fn format_postfix(items: &[PostfixItem]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
