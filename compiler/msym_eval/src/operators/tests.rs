use super::*;
use crate::errors::EvalErrorKind;
use msym_algebra::{parse_expr, AlgebraErrorKind};
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

fn scalar(text: &str) -> TypedValue {
    ScalarText::new(text).into()
}

fn eval(left: TypedValue, op: BinaryOp, right: TypedValue) -> EvalResult<TypedValue> {
    evaluate_binary(left, op, right, EvalOptions::default())
}

#[test]
fn scalar_times_matrix_either_side() {
    let a = matrix(&[&["1", "a"]]);
    let expected = matrix(&[&["2", "2a"]]);
    assert_eq!(eval(scalar("2"), BinaryOp::Mul, a.clone()).unwrap(), expected);
    assert_eq!(eval(a, BinaryOp::Mul, scalar("2")).unwrap(), expected);
}

#[test]
fn scalar_over_matrix_uses_inverse() {
    let a = matrix(&[&["1", "2"], &["3", "4"]]);
    assert_eq!(
        eval(scalar("2"), BinaryOp::Div, a).unwrap(),
        matrix(&[&["-4", "2"], &["3", "-1"]])
    );
}

#[test]
fn matrix_over_scalar_is_elementwise() {
    let a = matrix(&[&["1", "2"], &["3", "4"]]);
    assert_eq!(
        eval(a.clone(), BinaryOp::Div, scalar("2")).unwrap(),
        matrix(&[&["1/2", "1"], &["3/2", "2"]])
    );
    let err = eval(a, BinaryOp::Div, scalar("0")).unwrap_err();
    assert!(matches!(
        err.kind,
        EvalErrorKind::Algebra(ref e) if e.kind == AlgebraErrorKind::DivisionByZero
    ));
}

#[test]
fn scalar_arithmetic_stays_scalar() {
    assert_eq!(eval(scalar("2"), BinaryOp::Add, scalar("3")).unwrap(), scalar("5"));
    assert_eq!(eval(scalar("2"), BinaryOp::Sub, scalar("a")).unwrap(), scalar("-a + 2"));
    assert_eq!(eval(scalar("1"), BinaryOp::Div, scalar("4")).unwrap(), scalar("1/4"));
    assert_eq!(
        eval(scalar("a*d - b*c"), BinaryOp::Mul, scalar("2")).unwrap(),
        scalar("2*a*d - 2*b*c")
    );
    assert!(eval(scalar("1"), BinaryOp::Div, scalar("0")).is_err());
}

#[test]
fn simplify_applies_to_scalar_results() {
    let options = EvalOptions {
        simplify: true,
        ..EvalOptions::default()
    };
    let result = evaluate_binary(
        scalar("a**2 - 1"),
        BinaryOp::Div,
        scalar("a**2 + 2*a + 1"),
        options,
    )
    .unwrap();
    assert_eq!(result, scalar("(a - 1)/(a + 1)"));
}

#[test]
fn matrix_arithmetic() {
    let a = matrix(&[&["1", "2"], &["3", "4"]]);
    let i = matrix(&[&["1", "0"], &["0", "1"]]);
    assert_eq!(
        eval(a.clone(), BinaryOp::Add, i.clone()).unwrap(),
        matrix(&[&["2", "2"], &["3", "5"]])
    );
    assert_eq!(
        eval(a.clone(), BinaryOp::Sub, i.clone()).unwrap(),
        matrix(&[&["0", "2"], &["3", "3"]])
    );
    assert_eq!(eval(a.clone(), BinaryOp::Mul, i).unwrap(), a);

    let row = matrix(&[&["1", "2", "3"]]);
    let err = eval(a, BinaryOp::Add, row).unwrap_err();
    assert_eq!(err.to_string(), "Matrix size mismatch: (2, 2) + (1, 3).");
}

#[test]
fn matrix_division_is_rejected() {
    let a = matrix(&[&["1"]]);
    let err = eval(a.clone(), BinaryOp::Div, a).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::MatrixDivision);
}

#[test]
fn mixed_addition_is_rejected() {
    let a = matrix(&[&["1"]]);
    for (left, right) in [(a.clone(), scalar("1")), (scalar("1"), a)] {
        let err = eval(left, BinaryOp::Add, right).unwrap_err();
        assert_eq!(err.to_string(), "Only matrix-matrix +,-,* are supported");
    }
}
