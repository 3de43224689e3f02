//! Command handlers for the `msym` binary.
//!
//! Each submodule implements one command. Handlers print their result and
//! exit with status 1 on failure; the shared reporting helper lives here.

use std::io::IsTerminal;

use msym_diagnostic::{ColorMode, DiagnosticEmitter, TerminalEmitter};

use crate::Problem;

mod debug;
mod eval;
mod explain;
mod serve;

pub use debug::{lex_expression, parse_expression};
pub use eval::{eval_command, parse_eval_args, parse_matrix_arg};
pub use explain::explain_error;
pub use serve::serve_command;

/// Print `problem` as a diagnostic against `expression` on stderr.
pub(crate) fn report_problem(problem: &Problem, expression: &str) {
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, std::io::stderr().is_terminal())
        .with_source(expression);
    emitter.emit(&problem.to_diagnostic());
    emitter.flush();
}
