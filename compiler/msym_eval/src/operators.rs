//! Binary operators over typed values.
//!
//! Dispatch is a single match on `(left, op, right)`, tried in order:
//! scalar-matrix products, divisions with one scalar side, scalar-scalar
//! arithmetic, then matrix-matrix `+ - *`. Anything left over is rejected.

use msym_algebra::{Expr, SymbolicMatrix};
use msym_ir::BinaryOp;

use crate::errors::{matrix_division, unsupported_operands, EvalResult};
use crate::output::EvalOptions;
use crate::value::{ScalarText, TypedValue};

/// Evaluate `left op right`.
pub fn evaluate_binary(
    left: TypedValue,
    op: BinaryOp,
    right: TypedValue,
    options: EvalOptions,
) -> EvalResult<TypedValue> {
    use TypedValue::{Matrix, Scalar};

    match (&left, op, &right) {
        (Scalar(s), BinaryOp::Mul, Matrix(m)) | (Matrix(m), BinaryOp::Mul, Scalar(s)) => {
            Ok(m.scalar_mul(&s.parse()?).into())
        }
        (Scalar(s), BinaryOp::Div, Matrix(m)) => {
            Ok(m.inverse()?.scalar_mul(&s.parse()?).into())
        }
        (Matrix(m), BinaryOp::Div, Scalar(s)) => Ok(m.scalar_div(&s.parse()?)?.into()),
        (Scalar(a), _, Scalar(b)) => scalar_binary(a, op, b, options),
        (Matrix(a), BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul, Matrix(b)) => {
            matrix_binary(a, op, b)
        }
        (Matrix(_), BinaryOp::Div, Matrix(_)) => Err(matrix_division()),
        _ => Err(unsupported_operands(left.type_name(), op, right.type_name())),
    }
}

fn scalar_binary(
    a: &ScalarText,
    op: BinaryOp,
    b: &ScalarText,
    options: EvalOptions,
) -> EvalResult<TypedValue> {
    let (a, b) = (a.parse()?, b.parse()?);
    let result: Expr = match op {
        BinaryOp::Add => a.add(&b),
        BinaryOp::Sub => a.sub(&b),
        BinaryOp::Mul => a.mul(&b),
        BinaryOp::Div => a.div(&b)?,
    };
    Ok(ScalarText::from_expr(&options.finish(result)).into())
}

fn matrix_binary(a: &SymbolicMatrix, op: BinaryOp, b: &SymbolicMatrix) -> EvalResult<TypedValue> {
    let result = match op {
        BinaryOp::Add => a.add(b)?,
        BinaryOp::Sub => a.sub(b)?,
        BinaryOp::Mul => a.mul(b)?,
        BinaryOp::Div => return Err(matrix_division()),
    };
    Ok(result.into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
