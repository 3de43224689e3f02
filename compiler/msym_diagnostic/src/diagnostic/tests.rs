use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_collects_labels_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("Mismatched parentheses")
        .with_label(Span::new(4, 5), "no matching `(`")
        .with_note("parentheses must balance");

    assert_eq!(diag.to_string(), "error[E1001]: Mismatched parentheses");
    assert_eq!(diag.labels, [Label::new(Span::new(4, 5), "no matching `(`")]);
    assert_eq!(diag.notes, ["parentheses must balance"]);
}

#[test]
fn no_labels_by_default() {
    let diag = Diagnostic::error(ErrorCode::E6005).with_message("x");
    assert!(diag.labels.is_empty());
    assert!(diag.notes.is_empty());
}
