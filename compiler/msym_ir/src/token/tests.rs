use super::*;
use pretty_assertions::assert_eq;

#[test]
fn implicit_star_is_synthetic_point() {
    let tok = Token::implicit_star(4);
    assert_eq!(tok.kind, TokenKind::Star);
    assert!(tok.synthetic);
    assert!(tok.span.is_empty());
    assert_eq!(tok.span.start, 4);
}

#[test]
fn display_uses_source_text_for_literals() {
    assert_eq!(TokenKind::Number("2.5".into()).to_string(), "2.5");
    assert_eq!(TokenKind::Word("INV".into()).to_string(), "INV");
    assert_eq!(TokenKind::Slash.to_string(), "/");
}

#[test]
fn debug_marks_implicit_tokens() {
    let explicit = Token::new(TokenKind::Star, Span::new(1, 2));
    assert_eq!(format!("{explicit:?}"), "Star @ 1..2");
    assert_eq!(format!("{:?}", Token::implicit_star(1)), "Star (implicit) @ 1..1");
}
