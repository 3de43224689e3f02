//! msym: evaluate expressions over named symbolic matrices.
//!
//! # Pipeline
//!
//! ```text
//! request ──► build_matrix() per matrix ──► MatrixBindings
//! expression ──► tokenize() ──► to_postfix() ──► evaluate() ──► EvalOutput
//! ```
//!
//! Each phase lives in its own crate; this one wires them together and
//! hosts the JSON wire types, the HTTP service and the `msym` binary's
//! commands. A failure in any phase becomes a [`Problem`].

pub mod commands;
pub mod config;
pub mod problem;
pub mod request;
pub mod server;

use std::sync::Once;

use msym_eval::{build_matrix, evaluate, EvalOptions, EvalOutput, MatrixBindings};
use tracing::debug;

pub use problem::Problem;
pub use request::{ErrorBody, EvalRequest, EvalResponse, MatrixPayload, WireFormat};

/// Build the request's matrices, then evaluate its expression.
#[tracing::instrument(level = "debug", skip_all, fields(matrices = request.matrices.len()))]
pub fn evaluate_request(request: &EvalRequest) -> Result<EvalResponse, Problem> {
    let mut bindings = MatrixBindings::new();
    for payload in &request.matrices {
        let matrix = build_matrix(&payload.name, &payload.data, payload.declared_shape())?;
        bindings.insert(&payload.name, matrix);
    }
    debug!(bound = bindings.len(), "matrices built");
    let output = evaluate_expression(&request.expression, &bindings, request.options())?;
    Ok(output.into())
}

/// Lex, parse and evaluate `expression` against `bindings`.
pub fn evaluate_expression(
    expression: &str,
    bindings: &MatrixBindings,
    options: EvalOptions,
) -> Result<EvalOutput, Problem> {
    let tokens = msym_lexer::tokenize(expression)?;
    let postfix = msym_parse::to_postfix(&tokens)?;
    Ok(evaluate(&postfix, bindings, options)?)
}

static TRACING_INIT: Once = Once::new();

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g.
/// `msymc=info`) is used. Later calls do nothing.
pub fn init_tracing(default_directive: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}
