//! Diagnostics for msym.
//!
//! Every failure a request can hit maps to a stable [`ErrorCode`]; the CLI
//! turns failures into [`Diagnostic`]s and prints them with
//! [`TerminalEmitter`], which underlines the offending part of the expression.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
