use super::*;
use pretty_assertions::assert_eq;

#[test]
fn names_are_case_insensitive() {
    let mut bindings = MatrixBindings::new();
    bindings.insert("abc", SymbolicMatrix::identity(2));
    assert!(bindings.get("ABC").is_some());
    assert!(bindings.get("Abc").is_some());
    assert_eq!(bindings.names(), vec!["ABC"]);
}

#[test]
fn last_binding_wins() {
    let bindings: MatrixBindings = [
        ("A", SymbolicMatrix::identity(2)),
        ("a", SymbolicMatrix::identity(3)),
    ]
    .into_iter()
    .collect();
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings.get("A").map(SymbolicMatrix::shape), Some((3, 3)));
}

#[test]
fn empty() {
    let bindings = MatrixBindings::new();
    assert!(bindings.is_empty());
    assert_eq!(bindings.get("A"), None);
}
