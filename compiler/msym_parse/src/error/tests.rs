use super::*;
use pretty_assertions::assert_eq;

#[test]
fn both_kinds_share_message() {
    let close = unmatched_close(Span::new(3, 4));
    let open = unclosed_open(Span::new(0, 1));
    assert_eq!(close.to_string(), "Mismatched parentheses");
    assert_eq!(open.to_string(), "Mismatched parentheses");
    assert_ne!(close.label(), open.label());
}
