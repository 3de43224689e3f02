//! Matrix Builder and typed stack evaluator for msym.
//!
//! [`build_matrix`] turns request grids into [`SymbolicMatrix`] values that
//! are bound by name in [`MatrixBindings`]. [`evaluate`] then walks the
//! parser's postfix sequence with an explicit stack of [`TypedValue`]s:
//! every entry is either a matrix or a scalar, and operator meaning is
//! chosen by the operand types (see [`evaluate_binary`]).
//!
//! [`SymbolicMatrix`]: msym_algebra::SymbolicMatrix

mod bindings;
mod builder;
mod errors;
mod functions;
mod operators;
mod output;
mod value;

use msym_ir::{PostfixItem, PostfixKind};
use tracing::{debug, trace};

pub use bindings::MatrixBindings;
pub use builder::{build_matrix, BuildError, BuildErrorKind};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use functions::apply_function;
pub use operators::evaluate_binary;
pub use output::{render_value, EvalOptions, EvalOutput, OutputFormat};
pub use value::{ScalarText, TypedValue};

/// Reduce `postfix` to a single value.
#[tracing::instrument(level = "debug", skip_all, fields(items = postfix.len()))]
pub fn evaluate_postfix(
    postfix: &[PostfixItem],
    bindings: &MatrixBindings,
    options: EvalOptions,
) -> EvalResult<TypedValue> {
    let mut stack: Vec<TypedValue> = Vec::new();

    for item in postfix {
        let span = item.span;
        let value = match &item.kind {
            PostfixKind::Var(name) => match bindings.get(name) {
                Some(matrix) => TypedValue::Matrix(matrix.clone()),
                None => {
                    return Err(errors::unknown_matrix(name, &bindings.names()).with_span(span))
                }
            },
            PostfixKind::Number(text) => TypedValue::Scalar(ScalarText::new(text.as_str())),
            PostfixKind::Func(function) => {
                let arg = pop(&mut stack).map_err(|e| e.with_span(span))?;
                apply_function(*function, arg).map_err(|e| e.with_span(span))?
            }
            PostfixKind::Op(op) => {
                let right = pop(&mut stack).map_err(|e| e.with_span(span))?;
                let left = pop(&mut stack).map_err(|e| e.with_span(span))?;
                evaluate_binary(left, *op, right, options).map_err(|e| e.with_span(span))?
            }
        };
        trace!(item = %item, result = value.type_name(), depth = stack.len() + 1, "step");
        stack.push(value);
    }

    let Some(result) = stack.pop() else {
        return Err(errors::invalid_expression_format());
    };
    if !stack.is_empty() {
        // Leftover operands; point at the start of the expression.
        let span = postfix.first().map(|item| item.span);
        let err = errors::invalid_expression_format();
        return Err(match span {
            Some(span) => err.with_span(span),
            None => err,
        });
    }
    debug!(kind = result.type_name(), "evaluated");
    Ok(result)
}

/// Evaluate `postfix` and render the result.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(format = options.format.name(), simplify = options.simplify)
)]
pub fn evaluate(
    postfix: &[PostfixItem],
    bindings: &MatrixBindings,
    options: EvalOptions,
) -> EvalResult<EvalOutput> {
    let value = evaluate_postfix(postfix, bindings, options)?;
    let output = render_value(&value, options)?;
    debug!(kind = output.kind(), "rendered");
    Ok(output)
}

fn pop(stack: &mut Vec<TypedValue>) -> EvalResult<TypedValue> {
    stack.pop().ok_or_else(errors::invalid_expression_format)
}
