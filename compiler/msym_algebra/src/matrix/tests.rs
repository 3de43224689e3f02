use super::*;
use pretty_assertions::assert_eq;

use crate::errors::AlgebraErrorKind;
use crate::parse::parse_expr;
use crate::render::to_plain;

fn matrix(rows: &[&[&str]]) -> SymbolicMatrix {
    let rows = rows
        .iter()
        .map(|row| row.iter().map(|cell| parse_expr(cell).unwrap()).collect())
        .collect();
    SymbolicMatrix::from_rows(rows).unwrap()
}

fn render(m: &SymbolicMatrix) -> Vec<Vec<String>> {
    m.iter_rows()
        .map(|row| row.iter().map(to_plain).collect())
        .collect()
}

#[test]
fn ragged_rows_are_rejected() {
    let rows = vec![vec![Expr::one(), Expr::one()], vec![Expr::one()]];
    assert!(SymbolicMatrix::from_rows(rows).is_none());
    assert!(SymbolicMatrix::from_vec(2, 2, vec![Expr::one()]).is_none());
}

#[test]
fn empty_matrix_has_no_columns() {
    let m = SymbolicMatrix::from_rows(Vec::new()).unwrap();
    assert_eq!(m.shape(), (0, 0));
    assert_eq!(to_plain(&m.determinant().unwrap()), "1");
    assert_eq!(m.rank(), 0);
    assert_eq!(m.inverse().unwrap().shape(), (0, 0));
}

#[test]
fn transpose_swaps_entries() {
    let m = matrix(&[&["a", "b"], &["c", "d"]]);
    assert_eq!(render(&m.transpose()), [["a", "c"], ["b", "d"]]);
    assert_eq!(m.transpose().transpose(), m);

    let wide = matrix(&[&["1", "2", "3"]]);
    assert_eq!(wide.transpose().shape(), (3, 1));
}

#[test]
fn transpose_of_empty_row_has_no_rows() {
    let row = SymbolicMatrix::from_vec(1, 0, Vec::new()).unwrap();
    assert_eq!(row.shape(), (1, 0));
    let t = row.transpose();
    assert_eq!(t.shape(), (0, 0));
    assert_eq!(row.mul(&t).unwrap().shape(), (1, 0));
    assert_eq!(
        t.mul(&row).unwrap_err().kind,
        AlgebraErrorKind::ShapeMismatch {
            op: "*",
            left: (0, 0),
            right: (1, 0),
        }
    );
}

#[test]
fn numeric_determinant() {
    let m = matrix(&[&["1", "2"], &["3", "4"]]);
    assert_eq!(to_plain(&m.determinant().unwrap()), "-2");
    let m = matrix(&[&["2", "0", "1"], &["1", "3", "2"], &["1", "1", "1"]]);
    assert_eq!(to_plain(&m.determinant().unwrap()), "0");
}

#[test]
fn determinant_needs_row_swap() {
    let m = matrix(&[&["0", "1"], &["1", "0"]]);
    assert_eq!(to_plain(&m.determinant().unwrap()), "-1");
}

#[test]
fn symbolic_determinant() {
    let m = matrix(&[&["a", "b"], &["c", "d"]]);
    assert_eq!(to_plain(&m.determinant().unwrap()), "a*d - b*c");
    let m = matrix(&[&["a", "b", "0"], &["c", "d", "0"], &["0", "0", "1"]]);
    assert_eq!(to_plain(&m.determinant().unwrap()), "a*d - b*c");
}

#[test]
fn trace_sums_diagonal() {
    let m = matrix(&[&["a", "b"], &["c", "d"]]);
    assert_eq!(to_plain(&m.trace().unwrap()), "a + d");
}

#[test]
fn square_only_operations_reject_other_shapes() {
    let m = matrix(&[&["1", "2", "3"]]);
    for err in [
        m.determinant().unwrap_err(),
        m.trace().unwrap_err(),
        m.inverse().unwrap_err(),
    ] {
        assert!(matches!(err.kind, AlgebraErrorKind::NonSquare { rows: 1, cols: 3, .. }));
    }
}

#[test]
fn symbolic_inverse() {
    let m = matrix(&[&["a", "b"], &["c", "d"]]);
    let inv = m.inverse().unwrap();
    assert_eq!(
        render(&inv),
        [
            ["d/(a*d - b*c)", "-b/(a*d - b*c)"],
            ["-c/(a*d - b*c)", "a/(a*d - b*c)"],
        ]
    );
    assert_eq!(m.mul(&inv).unwrap().simplify(), SymbolicMatrix::identity(2));
}

#[test]
fn singular_inverse() {
    let m = matrix(&[&["1", "2"], &["2", "4"]]);
    let err = m.inverse().unwrap_err();
    assert_eq!(err.to_string(), "Matrix det == 0; not invertible.");

    let m = matrix(&[&["a", "b"], &["2a", "2b"]]);
    assert_eq!(m.inverse().unwrap_err().kind, AlgebraErrorKind::Singular);
}

#[test]
fn rref_and_rank() {
    let m = matrix(&[&["1", "2", "3"], &["2", "4", "6"], &["1", "0", "1"]]);
    let (reduced, pivots) = m.rref();
    assert_eq!(render(&reduced), [["1", "0", "1"], ["0", "1", "1"], ["0", "0", "0"]]);
    assert_eq!(pivots, [0, 1]);
    assert_eq!(m.rank(), 2);
    assert_eq!(SymbolicMatrix::zeros(3, 2).rank(), 0);
}

#[test]
fn arithmetic_checks_shapes() {
    let a = matrix(&[&["1", "2"], &["3", "4"]]);
    let b = matrix(&[&["1", "0"], &["0", "1"]]);
    assert_eq!(render(&a.add(&b).unwrap()), [["2", "2"], ["3", "5"]]);
    assert_eq!(render(&a.sub(&b).unwrap()), [["0", "2"], ["3", "3"]]);
    assert_eq!(render(&a.mul(&a).unwrap()), [["7", "10"], ["15", "22"]]);

    let row = matrix(&[&["1", "2", "3"]]);
    let err = a.add(&row).unwrap_err();
    assert_eq!(err.to_string(), "Matrix size mismatch: (2, 2) + (1, 3).");
    assert!(a.mul(&row).is_err());
    assert_eq!(render(&row.mul(&row.transpose()).unwrap()), [["14"]]);
}

#[test]
fn scalar_operations() {
    let m = matrix(&[&["a", "2"]]);
    let two = Expr::from_i64(2);
    assert_eq!(render(&m.scalar_mul(&two)), [["2*a", "4"]]);
    assert_eq!(render(&m.scalar_div(&two).unwrap()), [["a/2", "1"]]);
    assert_eq!(
        m.scalar_div(&Expr::zero()).unwrap_err().kind,
        AlgebraErrorKind::DivisionByZero
    );
}
