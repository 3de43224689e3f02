//! Rendering of the final stack value.

use msym_algebra::{to_latex, to_plain, AlgebraResult, Expr};

use crate::value::TypedValue;

/// How cells and scalars are written out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[default]
    Text,
    Latex,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Latex => "latex",
        }
    }

    fn render(self, expr: &Expr) -> String {
        match self {
            OutputFormat::Text => to_plain(expr),
            OutputFormat::Latex => to_latex(expr),
        }
    }
}

/// Per-request evaluation options.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Cancel common factors in every rendered value and scalar result.
    pub simplify: bool,
    pub format: OutputFormat,
}

impl EvalOptions {
    /// Apply [`Expr::simplify`] when requested.
    pub(crate) fn finish(self, expr: Expr) -> Expr {
        if self.simplify {
            expr.simplify()
        } else {
            expr
        }
    }
}

/// A rendered result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalOutput {
    Matrix(Vec<Vec<String>>),
    Scalar(String),
}

impl EvalOutput {
    /// `"matrix"` or `"scalar"`.
    pub fn kind(&self) -> &'static str {
        match self {
            EvalOutput::Matrix(_) => "matrix",
            EvalOutput::Scalar(_) => "scalar",
        }
    }
}

/// Render `value` as `options` ask.
pub fn render_value(value: &TypedValue, options: EvalOptions) -> AlgebraResult<EvalOutput> {
    Ok(match value {
        TypedValue::Matrix(matrix) => EvalOutput::Matrix(
            matrix
                .iter_rows()
                .map(|row| {
                    row.iter()
                        .map(|cell| options.format.render(&options.finish(cell.clone())))
                        .collect()
                })
                .collect(),
        ),
        TypedValue::Scalar(text) => {
            let expr = options.finish(text.parse()?);
            EvalOutput::Scalar(options.format.render(&expr))
        }
    })
}
