//! Matrix Builder: a grid of cell text to a [`SymbolicMatrix`].
//!
//! Cells are trimmed and parsed with [`parse_expr`]; an empty cell is `0`.
//! The grid must be rectangular, and when the caller declares a shape the
//! grid has to agree with it.

use msym_algebra::{parse_expr, AlgebraError, SymbolicMatrix};
use std::fmt;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildError {
    /// Name of the matrix being built.
    pub matrix: String,
    pub kind: BuildErrorKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildErrorKind {
    /// Row `row` (1-based) has `found` cells; the first row has `expected`.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    ShapeMismatch {
        declared: (usize, usize),
        actual: (usize, usize),
    },
    /// Cell at (`row`, `col`), both 1-based, failed to parse.
    InvalidCell {
        row: usize,
        col: usize,
        source: AlgebraError,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.matrix;
        match &self.kind {
            BuildErrorKind::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Matrix {name}: row {row} has {found} cells, expected {expected}"
            ),
            BuildErrorKind::ShapeMismatch { declared, actual } => write!(
                f,
                "Matrix {name}: declared shape ({}, {}) does not match data shape ({}, {})",
                declared.0, declared.1, actual.0, actual.1
            ),
            BuildErrorKind::InvalidCell { row, col, source } => {
                write!(f, "Matrix {name}, cell ({row}, {col}): {source}")
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BuildErrorKind::InvalidCell { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Build the matrix `name` from `grid`.
///
/// `declared` is the `(rows, cols)` the caller claims; a declared matrix
/// with no rows matches any empty grid regardless of its column count.
pub fn build_matrix<S: AsRef<str>>(
    name: &str,
    grid: &[Vec<S>],
    declared: Option<(usize, usize)>,
) -> Result<SymbolicMatrix, BuildError> {
    let error = |kind| BuildError {
        matrix: name.to_string(),
        kind,
    };

    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    if let Some((index, row)) = grid.iter().enumerate().find(|(_, row)| row.len() != cols) {
        return Err(error(BuildErrorKind::Ragged {
            row: index + 1,
            expected: cols,
            found: row.len(),
        }));
    }

    if let Some(declared) = declared {
        let normalized = if declared.0 == 0 { (0, 0) } else { declared };
        let actual = if rows == 0 { (0, 0) } else { (rows, cols) };
        if normalized != actual {
            return Err(error(BuildErrorKind::ShapeMismatch { declared, actual }));
        }
    }

    let mut cells = Vec::with_capacity(rows * cols);
    for (r, row) in grid.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let text = match cell.as_ref().trim() {
                "" => "0",
                text => text,
            };
            let expr = parse_expr(text).map_err(|source| {
                error(BuildErrorKind::InvalidCell {
                    row: r + 1,
                    col: c + 1,
                    source,
                })
            })?;
            cells.push(expr);
        }
    }

    debug!(name, rows, cols, "built matrix");
    // The grid was checked to be rectangular above.
    SymbolicMatrix::from_vec(rows, cols, cells).ok_or_else(|| {
        error(BuildErrorKind::ShapeMismatch {
            declared: (rows, cols),
            actual: (rows, cols),
        })
    })
}
