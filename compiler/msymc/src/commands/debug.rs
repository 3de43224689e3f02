//! Debug commands: `lex` and `parse` for inspecting the front end.

use msym_parse::format_postfix;

use super::report_problem;
use crate::Problem;

/// Tokenize `expression` and print each token with its span.
pub fn lex_expression(expression: &str) {
    let tokens = match msym_lexer::tokenize(expression) {
        Ok(tokens) => tokens,
        Err(err) => {
            report_problem(&Problem::from(err), expression);
            std::process::exit(1);
        }
    };

    println!("Tokens for '{expression}' ({} tokens):", tokens.len());
    for token in &tokens {
        println!("  {token:?}");
    }
}

/// Parse `expression` and print its postfix form.
pub fn parse_expression(expression: &str) {
    let postfix = msym_lexer::tokenize(expression)
        .map_err(Problem::from)
        .and_then(|tokens| msym_parse::to_postfix(&tokens).map_err(Problem::from));
    match postfix {
        Ok(items) => {
            println!("Postfix for '{expression}' ({} items):", items.len());
            println!("  {}", format_postfix(&items));
        }
        Err(problem) => {
            report_problem(&problem, expression);
            std::process::exit(1);
        }
    }
}
