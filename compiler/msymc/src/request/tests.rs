use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn minimal_request_uses_defaults() {
    let request: EvalRequest = serde_json::from_value(json!({
        "matrices": [{"name": "A", "data": [["1"]]}],
        "expression": "A"
    }))
    .unwrap();
    assert!(!request.simplify);
    assert_eq!(request.format, WireFormat::Text);
    assert_eq!(request.matrices[0].declared_shape(), None);
    assert_eq!(request.options(), EvalOptions::default());
}

#[test]
fn full_request() {
    let request: EvalRequest = serde_json::from_value(json!({
        "matrices": [{"name": "A", "rows": 1, "cols": 2, "data": [["a", "b"]]}],
        "expression": "T(A)",
        "simplify": true,
        "format": "latex"
    }))
    .unwrap();
    assert_eq!(request.matrices[0].declared_shape(), Some((1, 2)));
    assert_eq!(
        request.options(),
        EvalOptions {
            simplify: true,
            format: OutputFormat::Latex
        }
    );
}

#[test]
fn unknown_format_is_rejected() {
    let result = serde_json::from_value::<EvalRequest>(json!({
        "expression": "A",
        "format": "html"
    }));
    assert!(result.is_err());
}

#[test]
fn response_shapes() {
    let matrix = EvalResponse::Matrix(vec![vec!["1".into(), "0".into()]]);
    assert_eq!(
        serde_json::to_value(&matrix).unwrap(),
        json!({"kind": "matrix", "value": [["1", "0"]]})
    );
    let scalar = EvalResponse::from(EvalOutput::Scalar("-2".into()));
    assert_eq!(
        serde_json::to_value(&scalar).unwrap(),
        json!({"kind": "scalar", "value": "-2"})
    );
}
