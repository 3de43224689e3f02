//! The `eval` command: evaluate one expression from the command line.

use crate::config::ConfigError;
use crate::{evaluate_request, EvalRequest, EvalResponse, MatrixPayload, WireFormat};

use super::report_problem;

/// Parse `NAME=<rows>`, rows separated by `;` and cells by `,`
/// (`A=1,2;3,4`). An empty right-hand side is the empty matrix.
pub fn parse_matrix_arg(arg: &str) -> Result<MatrixPayload, ConfigError> {
    let invalid = || ConfigError::InvalidMatrix(arg.to_string());
    let (name, rows) = arg.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(invalid());
    }
    let data: Vec<Vec<String>> = if rows.trim().is_empty() {
        Vec::new()
    } else {
        rows.split(';')
            .map(|row| row.split(',').map(|cell| cell.trim().to_string()).collect())
            .collect()
    };
    Ok(MatrixPayload {
        name: name.to_string(),
        rows: None,
        cols: None,
        data,
    })
}

/// Turn `eval` arguments into a request.
pub fn parse_eval_args(args: &[String]) -> Result<EvalRequest, ConfigError> {
    let mut expression = None;
    let mut matrices = Vec::new();
    let mut simplify = false;
    let mut format = WireFormat::Text;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if let Some(definition) = arg.strip_prefix("--matrix=") {
            matrices.push(parse_matrix_arg(definition)?);
        } else if arg == "--matrix" || arg == "-m" {
            let definition = iter
                .next()
                .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
            matrices.push(parse_matrix_arg(definition)?);
        } else if arg == "--simplify" || arg == "-s" {
            simplify = true;
        } else if arg == "--latex" {
            format = WireFormat::Latex;
        } else if arg.starts_with("--") {
            return Err(ConfigError::UnknownOption(arg.clone()));
        } else if expression.is_none() {
            expression = Some(arg.clone());
        } else {
            return Err(ConfigError::UnexpectedArgument(arg.clone()));
        }
    }

    Ok(EvalRequest {
        matrices,
        expression: expression.ok_or(ConfigError::MissingExpression)?,
        simplify,
        format,
    })
}

/// Evaluate and print the result, one matrix row per line.
pub fn eval_command(args: &[String]) {
    let request = match parse_eval_args(args) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Usage: msym eval <expression> [--matrix NAME=<rows>]... [--simplify] [--latex]");
            eprintln!("Example: msym eval \"DET(A)\" --matrix A=1,2;3,4");
            std::process::exit(1);
        }
    };

    crate::init_tracing("warn");
    match evaluate_request(&request) {
        Ok(EvalResponse::Scalar(text)) => println!("{text}"),
        Ok(EvalResponse::Matrix(rows)) => {
            for row in rows {
                println!("[{}]", row.join(", "));
            }
        }
        Err(problem) => {
            report_problem(&problem, &request.expression);
            std::process::exit(1);
        }
    }
}
