//! Shared data types for the msym expression front end.
//!
//! Everything the lexer, parser and evaluator exchange lives here:
//! source [`Span`]s, lexical [`Token`]s, and the [`PostfixItem`]s the
//! shunting-yard parser hands to the evaluator. The keyword and precedence
//! tables are process-wide constants on [`MatrixFunction`] and [`BinaryOp`].

mod postfix;
mod span;
mod token;

pub use postfix::{BinaryOp, MatrixFunction, PostfixItem, PostfixKind};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
