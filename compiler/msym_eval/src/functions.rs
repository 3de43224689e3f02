//! The unary matrix functions.

use msym_algebra::Expr;
use msym_ir::MatrixFunction;

use crate::errors::{function_expects_matrix, EvalResult};
use crate::value::{ScalarText, TypedValue};

/// Apply `function` to `arg`, which must be a matrix.
///
/// `DET` and `TRACE` come back simplified; `RANK` is an integer.
pub fn apply_function(function: MatrixFunction, arg: TypedValue) -> EvalResult<TypedValue> {
    let TypedValue::Matrix(matrix) = arg else {
        return Err(function_expects_matrix(function));
    };
    Ok(match function {
        MatrixFunction::Transpose => matrix.transpose().into(),
        MatrixFunction::Inverse => matrix.inverse()?.into(),
        MatrixFunction::Determinant => scalar(&matrix.determinant()?),
        MatrixFunction::Trace => scalar(&matrix.trace()?),
        MatrixFunction::Rank => ScalarText::new(matrix.rank().to_string()).into(),
        // Pivot columns are not part of the result.
        MatrixFunction::Rref => matrix.rref().0.into(),
    })
}

fn scalar(expr: &Expr) -> TypedValue {
    ScalarText::from_expr(&expr.simplify()).into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
