use super::*;
use msym_lexer::tokenize;
use pretty_assertions::assert_eq;

fn postfix(source: &str) -> String {
    format_postfix(&to_postfix(&tokenize(source).unwrap()).unwrap())
}

fn parse_err(source: &str) -> ParseError {
    to_postfix(&tokenize(source).unwrap()).unwrap_err()
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(postfix("A+B*C"), "A B C * +");
    assert_eq!(postfix("A*B+C"), "A B * C +");
    assert_eq!(postfix("A-B-C"), "A B - C -");
    assert_eq!(postfix("A/B*C"), "A B / C *");
    assert_eq!(postfix("(A+B)*C"), "A B + C *");
}

#[test]
fn functions_follow_their_argument() {
    assert_eq!(postfix("T(A)"), "A T");
    assert_eq!(postfix("DET(A+B)"), "A B + DET");
    assert_eq!(postfix("T(T(A))"), "A T T");
    assert_eq!(postfix("inv(A)*B"), "A INV B *");
    assert_eq!(postfix("2*TRACE(A)"), "2 A TRACE *");
}

#[test]
fn function_without_parentheses_applies_at_end() {
    assert_eq!(postfix("DET A"), "A DET");
}

#[test]
fn implicit_multiplication_is_an_operator() {
    assert_eq!(postfix("2A+B"), "2 A * B +");
    assert_eq!(postfix("(A)(B)"), "A B *");
}

#[test]
fn non_keyword_call_is_two_values() {
    assert_eq!(postfix("A(B)"), "A B");
}

#[test]
fn spans_point_at_source_tokens() {
    let items = to_postfix(&tokenize("A + B").unwrap()).unwrap();
    assert_eq!(items[2].kind, PostfixKind::Op(BinaryOp::Add));
    assert_eq!(items[2].span, Span::new(2, 3));
    let items = to_postfix(&tokenize("DET(A)").unwrap()).unwrap();
    assert_eq!(items[1].span, Span::new(0, 3));
}

#[test]
fn unclosed_parenthesis() {
    let err = parse_err("(A+B");
    assert_eq!(err.kind, ParseErrorKind::UnclosedOpen);
    assert_eq!(err.span, Span::new(0, 1));
    assert_eq!(err.to_string(), "Mismatched parentheses");
}

#[test]
fn unmatched_close() {
    let err = parse_err("A+B)");
    assert_eq!(err.kind, ParseErrorKind::UnmatchedClose);
    assert_eq!(err.span, Span::new(3, 4));
}

#[test]
fn empty_input_is_empty_postfix() {
    assert!(to_postfix(&[]).unwrap().is_empty());
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_precedence {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// Reference evaluation: fold `*` first, then `+`/`-` left to right.
    fn reference(numbers: &[i64], ops: &[char]) -> i64 {
        let mut terms = vec![numbers[0]];
        let mut signs = Vec::new();
        for (op, &n) in ops.iter().zip(&numbers[1..]) {
            match op {
                '*' => {
                    if let Some(last) = terms.last_mut() {
                        *last *= n;
                    }
                }
                sign => {
                    signs.push(*sign);
                    terms.push(n);
                }
            }
        }
        let mut total = terms[0];
        for (sign, term) in signs.iter().zip(&terms[1..]) {
            if *sign == '+' {
                total += term;
            } else {
                total -= term;
            }
        }
        total
    }

    fn run_postfix(items: &[PostfixItem]) -> i64 {
        let mut stack = Vec::new();
        for item in items {
            match &item.kind {
                PostfixKind::Number(text) => stack.push(text.parse::<i64>().unwrap()),
                PostfixKind::Op(op) => {
                    let b = stack.pop().unwrap();
                    let a = stack.pop().unwrap();
                    stack.push(match op {
                        BinaryOp::Add => a + b,
                        BinaryOp::Sub => a - b,
                        BinaryOp::Mul => a * b,
                        BinaryOp::Div => unreachable!(),
                    });
                }
                other => panic!("unexpected {other}"),
            }
        }
        assert_eq!(stack.len(), 1);
        stack[0]
    }

    proptest! {
        #[test]
        fn postfix_matches_standard_precedence(
            numbers in proptest::collection::vec(0i64..10, 1..8),
            ops in proptest::collection::vec(prop_oneof![Just('+'), Just('-'), Just('*')], 7),
        ) {
            let ops = &ops[..numbers.len() - 1];
            let mut source = numbers[0].to_string();
            for (op, n) in ops.iter().zip(&numbers[1..]) {
                source.push(*op);
                source.push_str(&n.to_string());
            }
            let items = to_postfix(&tokenize(&source).unwrap()).unwrap();
            prop_assert_eq!(run_postfix(&items), reference(&numbers, ops));
        }
    }
}
