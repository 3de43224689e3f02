use super::*;
use pretty_assertions::assert_eq;

fn var(name: &str) -> Poly {
    Poly::var(Symbol::from(name))
}

fn int(value: i64) -> Poly {
    Poly::constant(Rational::from_i64(value))
}

#[test]
fn cancellation_drops_zero_terms() {
    let a = var("a");
    let diff = a.add(&int(1)).sub(&a);
    assert_eq!(diff, int(1));
    assert!(a.sub(&a).is_zero());
    assert_eq!(a.sub(&a).constant_value(), Some(Rational::zero()));
}

#[test]
fn square_of_binomial() {
    let sum = var("a").add(&var("b"));
    let square = sum.pow(2);
    assert_eq!(square.len(), 3);
    assert_eq!(square.coefficient_of("a", 1), var("b").scale(&Rational::from_i64(2)));
    assert_eq!(square.coefficient_of("a", 0), var("b").pow(2));
    assert_eq!(square.degree_in("b"), 2);
}

#[test]
fn pow_zero_is_one() {
    assert!(var("x").pow(0).is_one());
}

#[test]
fn exact_division() {
    let a = var("a");
    let b = var("b");
    let product = a.add(&b).mul(&a.sub(&b));
    assert_eq!(product.div_exact(&a.add(&b)), Some(a.sub(&b)));
    assert_eq!(product.div_exact(&a), None);
    assert_eq!(product.div_exact(&Poly::zero()), None);
    assert_eq!(Poly::zero().div_exact(&a), Some(Poly::zero()));
}

#[test]
fn leading_term_is_highest_degree() {
    let p = var("a").add(&var("b").pow(2)).add(&int(3));
    let (m, c) = p.leading_term().unwrap();
    assert_eq!(m.total_degree(), 2);
    assert!(c.is_one());
}

#[test]
fn primitive_parts_normalise_sign_and_fractions() {
    let half = Rational::from_parts(IBig::from(1), IBig::from(2)).unwrap();
    let p = var("a").scale(&Rational::from_i64(-3)).add(&Poly::constant(half));
    let (content, primitive) = p.primitive_parts();
    assert_eq!(content.to_string(), "-1/2");
    assert_eq!(primitive, var("a").scale(&Rational::from_i64(6)).sub(&int(1)));
    assert_eq!(primitive.scale(&content), p);
}

#[test]
fn monomial_content_is_shared_factor() {
    let a = var("a");
    let p = a.pow(2).mul(&var("b")).add(&a.mul(&var("c")));
    let content = p.monomial_content();
    assert_eq!(content, Monomial::var(Symbol::from("a")));
    let reduced = p.div_monomial(&content).unwrap();
    assert_eq!(reduced, a.mul(&var("b")).add(&var("c")));
}

#[test]
fn symbols_are_collected_in_order() {
    let p = var("c").mul(&var("a")).add(&var("b"));
    let names: Vec<String> = p.symbols().iter().map(ToString::to_string).collect();
    assert_eq!(names, ["a", "b", "c"]);
}
