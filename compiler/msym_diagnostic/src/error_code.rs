//! Stable error codes.
//!
//! Format: E#### where the first digit names the phase:
//! - E0xxx: lexer
//! - E1xxx: parser
//! - E2xxx: matrix building / request validation
//! - E3xxx: algebra engine
//! - E6xxx: evaluation

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Character outside the expression alphabet
    E0001,
    /// Number with more than one decimal point
    E0002,

    // Parser Errors (E1xxx)
    /// `)` without a matching `(`
    E1001,
    /// `(` never closed
    E1002,

    // Build Errors (E2xxx)
    /// Rows of different lengths
    E2001,
    /// Declared `rows`/`cols` disagree with the data
    E2002,
    /// Cell text the algebra engine cannot parse
    E2003,

    // Algebra Errors (E3xxx)
    /// Malformed algebraic text
    E3001,
    /// Construct outside exact rational arithmetic
    E3002,
    /// Division by zero
    E3003,
    /// Matrix shapes incompatible for the operation
    E3004,
    /// Square matrix required
    E3005,
    /// Singular matrix
    E3006,

    // Evaluation Errors (E6xxx)
    /// Unknown matrix name
    E6001,
    /// Matrix function applied to a scalar
    E6002,
    /// Operand types the operator does not support
    E6003,
    /// Matrix divided by matrix
    E6004,
    /// Expression does not reduce to a single value
    E6005,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E3004,
        ErrorCode::E3005,
        ErrorCode::E3006,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
        }
    }

    /// One-line explanation, shown by `msym explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "the expression contains a character that is not a letter, digit, '.', an operator or a parenthesis"
            }
            ErrorCode::E0002 => "a number literal contains more than one decimal point",
            ErrorCode::E1001 => "a closing parenthesis has no matching opening parenthesis",
            ErrorCode::E1002 => "an opening parenthesis is never closed",
            ErrorCode::E2001 => "a matrix has rows of different lengths",
            ErrorCode::E2002 => "a matrix's declared rows/cols do not match its data",
            ErrorCode::E2003 => "a matrix cell is not a valid algebraic expression",
            ErrorCode::E3001 => "a scalar is not a valid algebraic expression",
            ErrorCode::E3002 => {
                "the input uses a function or a non-integer power, which exact arithmetic does not support"
            }
            ErrorCode::E3003 => "a value was divided by zero",
            ErrorCode::E3004 => "the matrix shapes are incompatible for this operation",
            ErrorCode::E3005 => "the operation requires a square matrix",
            ErrorCode::E3006 => "the matrix is singular and has no inverse",
            ErrorCode::E6001 => "the expression names a matrix that was not supplied",
            ErrorCode::E6002 => "a matrix function (T, INV, DET, TRACE, RANK, RREF) was applied to a scalar",
            ErrorCode::E6003 => "the operator is not defined for these operand types",
            ErrorCode::E6004 => "one matrix cannot be divided by another; use INV instead",
            ErrorCode::E6005 => "the expression does not reduce to exactly one value",
        }
    }

    /// The pipeline phase that reports this code.
    pub fn phase(&self) -> &'static str {
        if self.is_lexer_error() {
            "lexer"
        } else if self.is_parser_error() {
            "parser"
        } else if self.is_build_error() {
            "matrix builder"
        } else if self.is_algebra_error() {
            "algebra"
        } else {
            "evaluator"
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002)
    }

    pub fn is_parser_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002)
    }

    pub fn is_build_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003)
    }

    pub fn is_algebra_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E3001
                | ErrorCode::E3002
                | ErrorCode::E3003
                | ErrorCode::E3004
                | ErrorCode::E3005
                | ErrorCode::E3006
        )
    }

    pub fn is_eval_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E6001
                | ErrorCode::E6002
                | ErrorCode::E6003
                | ErrorCode::E6004
                | ErrorCode::E6005
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
