use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    assert_eq!(singular().to_string(), "Matrix det == 0; not invertible.");
    assert_eq!(division_by_zero().to_string(), "division by zero");
    assert_eq!(
        shape_mismatch("+", (2, 2), (3, 1)).to_string(),
        "Matrix size mismatch: (2, 2) + (3, 1)."
    );
    assert_eq!(
        non_square("determinant", 2, 3).to_string(),
        "determinant requires a square matrix, got (2, 3)"
    );
    assert_eq!(unsupported("function sin").to_string(), "unsupported: function sin");
}

#[test]
fn offset_does_not_change_message() {
    let err = syntax("unexpected ')'").at(4);
    assert_eq!(err.offset, Some(4));
    assert_eq!(err.to_string(), "invalid expression: unexpected ')'");
}
