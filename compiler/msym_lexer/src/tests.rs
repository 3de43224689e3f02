use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn num(text: &str) -> TokenKind {
    TokenKind::Number(text.into())
}

fn word(text: &str) -> TokenKind {
    TokenKind::Word(text.into())
}

#[test]
fn operators_and_parens() {
    use TokenKind::{LParen, Minus, Plus, RParen, Slash, Star};
    assert_eq!(
        kinds("( A + B ) - C * D / E"),
        [
            LParen,
            word("A"),
            Plus,
            word("B"),
            RParen,
            Minus,
            word("C"),
            Star,
            word("D"),
            Slash,
            word("E"),
        ]
    );
}

#[test]
fn words_are_uppercased() {
    assert_eq!(kinds("inv(a)")[0], word("INV"));
    assert_eq!(kinds("Abc"), [word("ABC")]);
}

#[test]
fn numbers() {
    assert_eq!(kinds("12"), [num("12")]);
    assert_eq!(kinds("2.5"), [num("2.5")]);
    assert_eq!(kinds(".5"), [num(".5")]);
    assert_eq!(kinds("3."), [num("3.")]);
}

#[test]
fn implicit_number_word() {
    let tokens = tokenize("2A").unwrap();
    assert_eq!(
        tokens.iter().map(|t| t.kind.clone()).collect::<Vec<_>>(),
        [num("2"), TokenKind::Star, word("A")]
    );
    assert!(!tokens[0].synthetic);
    assert!(tokens[1].synthetic);
    assert!(!tokens[2].synthetic);
}

#[test]
fn implicit_between_groups() {
    let tokens = tokenize("(A)(B)").unwrap();
    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens.iter().filter(|t| t.synthetic).count(), 1);
    assert_eq!(tokens[3].kind, TokenKind::Star);
}

#[test]
fn no_implicit_after_word() {
    assert_eq!(
        kinds("A(B)"),
        [word("A"), TokenKind::LParen, word("B"), TokenKind::RParen]
    );
    assert_eq!(kinds("A B"), [word("A"), word("B")]);
}

#[test]
fn spans_are_byte_offsets() {
    let tokens = tokenize("  INV( A )").unwrap();
    assert_eq!(tokens[0].span, Span::new(2, 5));
    assert_eq!(tokens[2].span, Span::new(7, 8));
}

#[test]
fn rejects_multiple_dots() {
    let err = tokenize("1.2.3").unwrap_err();
    assert_eq!(err.to_string(), "Invalid number format");
    assert_eq!(err.span, Span::new(0, 5));
}

#[test]
fn rejects_unknown_characters() {
    for (source, found, start) in [("A + $", '$', 4), ("A^2", '^', 1), ("A.B", '.', 1), ("Aé", 'é', 1)] {
        let err = tokenize(source).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { found }, "{source}");
        assert_eq!(err.span.start, start);
    }
    assert_eq!(tokenize("A_1").unwrap_err().to_string(), "Unexpected character: _");
}

#[test]
fn empty_input() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   \t").unwrap().is_empty());
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_implicit {
    use super::super::{lex_raw, needs_implicit_star, tokenize};
    use proptest::prelude::*;

    fn piece() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("A"),
            Just("inv"),
            Just("2"),
            Just("75"),
            Just("("),
            Just(")"),
            Just("+"),
            Just("*"),
            Just(" "),
        ]
    }

    proptest! {
        #[test]
        fn inserted_count_matches_adjacent_pairs(
            pieces in proptest::collection::vec(piece(), 0..24)
        ) {
            let source = pieces.concat();
            let raw = lex_raw(&source).unwrap();
            let tokens = tokenize(&source).unwrap();
            let pairs = raw
                .windows(2)
                .filter(|w| needs_implicit_star(&w[0].kind, &w[1].kind))
                .count();
            prop_assert_eq!(tokens.len(), raw.len() + pairs);

            let originals: Vec<_> = tokens.iter().filter(|t| !t.synthetic).cloned().collect();
            prop_assert_eq!(originals, raw);
        }
    }
}
