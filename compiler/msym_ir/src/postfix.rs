//! Postfix (reverse-Polish) items and the operator/function tables.
//!
//! The parser emits [`PostfixItem`]s left to right; the evaluator consumes
//! them in the same order with an explicit value stack.

use super::{Span, TokenKind};
use std::fmt;

/// Binary arithmetic operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Map an operator token to its binary operator.
    pub fn from_token(kind: &TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// Binding strength; all operators are left-associative.
    #[inline]
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// The unary matrix functions recognized by keyword.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MatrixFunction {
    Transpose,
    Inverse,
    Determinant,
    Trace,
    Rank,
    Rref,
}

/// Keyword → function table. Keywords are matched case-insensitively.
const FUNCTION_KEYWORDS: [(&str, MatrixFunction); 6] = [
    ("T", MatrixFunction::Transpose),
    ("INV", MatrixFunction::Inverse),
    ("DET", MatrixFunction::Determinant),
    ("TRACE", MatrixFunction::Trace),
    ("RANK", MatrixFunction::Rank),
    ("RREF", MatrixFunction::Rref),
];

impl MatrixFunction {
    /// Every function, in keyword-table order.
    pub const ALL: [MatrixFunction; 6] = [
        MatrixFunction::Transpose,
        MatrixFunction::Inverse,
        MatrixFunction::Determinant,
        MatrixFunction::Trace,
        MatrixFunction::Rank,
        MatrixFunction::Rref,
    ];

    /// Look up a word in the keyword table.
    pub fn from_keyword(word: &str) -> Option<MatrixFunction> {
        FUNCTION_KEYWORDS
            .iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(word))
            .map(|&(_, function)| function)
    }

    /// The canonical (uppercase) keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            MatrixFunction::Transpose => "T",
            MatrixFunction::Inverse => "INV",
            MatrixFunction::Determinant => "DET",
            MatrixFunction::Trace => "TRACE",
            MatrixFunction::Rank => "RANK",
            MatrixFunction::Rref => "RREF",
        }
    }
}

impl fmt::Display for MatrixFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A postfix item with the span of the token that produced it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PostfixItem {
    pub kind: PostfixKind,
    pub span: Span,
}

impl PostfixItem {
    #[inline]
    pub fn new(kind: PostfixKind, span: Span) -> Self {
        PostfixItem { kind, span }
    }
}

/// What a postfix item asks the evaluator to do.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PostfixKind {
    /// Push the matrix bound to this (uppercased) name.
    Var(String),
    /// Push a scalar literal, kept as text.
    Number(String),
    /// Apply a matrix function to the top of the stack.
    Func(MatrixFunction),
    /// Apply a binary operator to the top two values.
    Op(BinaryOp),
}

impl fmt::Display for PostfixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixKind::Var(name) => write!(f, "{name}"),
            PostfixKind::Number(text) => write!(f, "{text}"),
            PostfixKind::Func(function) => write!(f, "{function}"),
            PostfixKind::Op(op) => write!(f, "{op}"),
        }
    }
}

impl fmt::Display for PostfixItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}
