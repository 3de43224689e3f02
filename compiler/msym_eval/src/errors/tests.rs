use super::*;
use msym_ir::BinaryOp;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    assert_eq!(unknown_matrix("X", &["A"]).to_string(), "Unknown matrix: X");
    assert_eq!(
        function_expects_matrix(MatrixFunction::Determinant).to_string(),
        "DET expects a matrix"
    );
    assert_eq!(
        unsupported_operands("matrix", BinaryOp::Add, "scalar").to_string(),
        "Only matrix-matrix +,-,* are supported"
    );
    assert_eq!(
        matrix_division().to_string(),
        "Matrix division is not supported"
    );
    assert_eq!(
        invalid_expression_format().to_string(),
        "Invalid expression format. Use formats like: A + B, T(A), INV(A), DET(A)"
    );
}

#[test]
fn first_span_wins() {
    let err = unknown_matrix("X", &[])
        .with_span(Span::new(1, 2))
        .with_span(Span::new(5, 9));
    assert_eq!(err.span, Some(Span::new(1, 2)));
}

#[test]
fn algebra_errors_pass_through() {
    let inner = msym_algebra::parse_expr("1/0").unwrap_err();
    let err = EvalError::from(inner.clone());
    assert_eq!(err.to_string(), inner.to_string());
    assert!(std::error::Error::source(&err).is_some());
}
