//! JSON wire types for `POST /evaluate`.

use msym_eval::{EvalOptions, EvalOutput, OutputFormat};
use serde::{Deserialize, Serialize};

/// One named matrix: cells are free-form algebraic text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<usize>,
    pub data: Vec<Vec<String>>,
}

impl MatrixPayload {
    /// `(rows, cols)` when both are given.
    pub fn declared_shape(&self) -> Option<(usize, usize)> {
        self.rows.zip(self.cols)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    #[default]
    Text,
    Latex,
}

impl From<WireFormat> for OutputFormat {
    fn from(format: WireFormat) -> Self {
        match format {
            WireFormat::Text => OutputFormat::Text,
            WireFormat::Latex => OutputFormat::Latex,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalRequest {
    #[serde(default)]
    pub matrices: Vec<MatrixPayload>,
    pub expression: String,
    #[serde(default)]
    pub simplify: bool,
    #[serde(default)]
    pub format: WireFormat,
}

impl EvalRequest {
    pub fn options(&self) -> EvalOptions {
        EvalOptions {
            simplify: self.simplify,
            format: self.format.into(),
        }
    }
}

/// `{"kind": "matrix", "value": [[..]]}` or `{"kind": "scalar", "value": ".."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum EvalResponse {
    Matrix(Vec<Vec<String>>),
    Scalar(String),
}

impl From<EvalOutput> for EvalResponse {
    fn from(output: EvalOutput) -> Self {
        match output {
            EvalOutput::Matrix(cells) => EvalResponse::Matrix(cells),
            EvalOutput::Scalar(text) => EvalResponse::Scalar(text),
        }
    }
}

/// Body of a 400 response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
