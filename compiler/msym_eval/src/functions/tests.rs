use super::*;
use crate::errors::EvalErrorKind;
use msym_algebra::{parse_expr, AlgebraErrorKind, SymbolicMatrix};
use pretty_assertions::assert_eq;

fn matrix(rows: &[&[&str]]) -> TypedValue {
    SymbolicMatrix::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|cell| parse_expr(cell).unwrap()).collect())
            .collect(),
    )
    .unwrap()
    .into()
}

fn scalar_text(value: &TypedValue) -> String {
    match value {
        TypedValue::Scalar(text) => text.to_string(),
        TypedValue::Matrix(m) => panic!("expected a scalar, got {m:?}"),
    }
}

#[test]
fn scalar_results() {
    let a = matrix(&[&["1", "2"], &["3", "4"]]);
    let det = apply_function(MatrixFunction::Determinant, a.clone()).unwrap();
    assert_eq!(scalar_text(&det), "-2");
    let trace = apply_function(MatrixFunction::Trace, a.clone()).unwrap();
    assert_eq!(scalar_text(&trace), "5");
    let rank = apply_function(MatrixFunction::Rank, a).unwrap();
    assert_eq!(scalar_text(&rank), "2");
}

#[test]
fn rank_of_zero_matrix() {
    let zero = matrix(&[&["0", "0", "0"], &["0", "0", "0"]]);
    let rank = apply_function(MatrixFunction::Rank, zero).unwrap();
    assert_eq!(scalar_text(&rank), "0");
}

#[test]
fn matrix_results() {
    let a = matrix(&[&["a", "b"], &["c", "d"]]);
    assert_eq!(
        apply_function(MatrixFunction::Transpose, a).unwrap(),
        matrix(&[&["a", "c"], &["b", "d"]])
    );

    let b = matrix(&[&["1", "2"], &["2", "4"]]);
    assert_eq!(
        apply_function(MatrixFunction::Rref, b).unwrap(),
        matrix(&[&["1", "2"], &["0", "0"]])
    );

    let c = matrix(&[&["2", "0"], &["0", "4"]]);
    assert_eq!(
        apply_function(MatrixFunction::Inverse, c).unwrap(),
        matrix(&[&["1/2", "0"], &["0", "1/4"]])
    );
}

#[test]
fn scalar_argument_is_rejected() {
    let err = apply_function(MatrixFunction::Inverse, ScalarText::new("2").into()).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::FunctionExpectsMatrix {
            function: MatrixFunction::Inverse
        }
    );
}

#[test]
fn algebra_failures_surface() {
    let singular = matrix(&[&["1", "2"], &["2", "4"]]);
    let err = apply_function(MatrixFunction::Inverse, singular).unwrap_err();
    assert!(matches!(
        err.kind,
        EvalErrorKind::Algebra(ref e) if e.kind == AlgebraErrorKind::Singular
    ));

    let wide = matrix(&[&["1", "2", "3"]]);
    let err = apply_function(MatrixFunction::Determinant, wide).unwrap_err();
    assert_eq!(err.to_string(), "determinant requires a square matrix, got (1, 3)");
}
