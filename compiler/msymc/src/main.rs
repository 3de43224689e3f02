//! msym command-line driver.

use msymc::commands::{
    eval_command, explain_error, lex_expression, parse_expression, serve_command,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "serve" => {
            serve_command(&args[2..]);
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: msym eval <expression> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --matrix, -m NAME=<rows>  Bind a matrix (rows split by ';', cells by ',')");
                eprintln!("  --simplify, -s            Cancel common factors in the result");
                eprintln!("  --latex                   Render the result as LaTeX");
                std::process::exit(1);
            }
            eval_command(&args[2..]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: msym lex <expression>");
                std::process::exit(1);
            }
            lex_expression(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: msym parse <expression>");
                std::process::exit(1);
            }
            parse_expression(&args[2]);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: msym explain <ERROR_CODE>");
                eprintln!("Example: msym explain E6004");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("msym {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("msym: evaluate expressions over symbolic matrices");
    println!();
    println!("Usage: msym <command> [options]");
    println!();
    println!("Commands:");
    println!("  serve                  Run the HTTP service");
    println!("  eval <expression>      Evaluate an expression");
    println!("  lex <expression>       Tokenize and display tokens");
    println!("  parse <expression>     Display the postfix form");
    println!("  explain <code>         Explain an error code (e.g., E6004)");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Serve options:");
    println!("  --host=<addr>          Listen address (env MSYM_HOST, default 0.0.0.0)");
    println!("  --port=<n>             Listen port (env MSYM_PORT, default 8000)");
    println!();
    println!("Eval options:");
    println!("  --matrix, -m NAME=<rows>  Bind a matrix, e.g. A=1,2;3,4");
    println!("  --simplify, -s            Cancel common factors in the result");
    println!("  --latex                   Render the result as LaTeX");
    println!();
    println!("Examples:");
    println!("  msym serve --port=9000");
    println!("  msym eval \"DET(A)\" -m \"A=a,b;c,d\"");
    println!("  msym eval \"2A + INV(B)\" -m \"A=1,2;3,4\" -m \"B=2,0;0,4\" --latex");
    println!("  msym parse \"T(A)(B + C)\"");
    println!("  msym explain E6004");
}
