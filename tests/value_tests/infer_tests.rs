//! Tests for value inference
//!
//! These tests verify:
//! - Integers and whole floats classify as Integer
//! - Strings classify as String
//! - Everything else is rejected with the undefined-type error

use duokv::value::{classify, infer, Input, Kind, KindOf, Value};
use duokv::DuoError;

// =============================================================================
// Accepted Input
// =============================================================================

#[test]
fn test_infer_integer() {
    assert_eq!(infer(Input::Integer(42)).unwrap(), Value::Integer(42));
    assert_eq!(infer(Input::Integer(-7)).unwrap(), Value::Integer(-7));
}

#[test]
fn test_infer_whole_float_becomes_integer() {
    assert_eq!(infer(Input::Float(4.0)).unwrap(), Value::Integer(4));
    assert_eq!(infer(Input::Float(-12.0)).unwrap(), Value::Integer(-12));
    assert_eq!(classify(&Input::Float(4.0)), Kind::Integer);
}

#[test]
fn test_infer_string() {
    let value = infer(Input::from("3d")).unwrap();
    assert_eq!(value, Value::String("3d".to_string()));
    assert_eq!(value.kind(), Kind::String);
}

#[test]
fn test_infer_numeric_looking_string_stays_string() {
    assert_eq!(infer(Input::from("42")).unwrap(), Value::String("42".to_string()));
}

// =============================================================================
// Rejected Input
// =============================================================================

#[test]
fn test_infer_fractional_float_rejected() {
    let err = infer(Input::Float(133.7)).unwrap_err();
    match err {
        DuoError::Type(msg) => assert_eq!(msg, "undefined value type"),
        other => panic!("Expected Type error, got {:?}", other),
    }
    assert_eq!(classify(&Input::Float(133.7)), Kind::Undefined);
}

#[test]
fn test_infer_composites_rejected() {
    let rejected = vec![
        Input::Bool(true),
        Input::Null,
        Input::List(1),
        Input::Map(1),
        Input::Float(f64::NAN),
        Input::Float(f64::INFINITY),
        Input::Float(1e20),
    ];

    for input in rejected {
        assert_eq!(classify(&input), Kind::Undefined, "classify {:?}", input);
        assert!(
            matches!(infer(input.clone()), Err(DuoError::Type(_))),
            "infer {:?}",
            input
        );
    }
}

// =============================================================================
// JSON and Literal Conversion
// =============================================================================

#[test]
fn test_input_from_json() {
    let json: serde_json::Value = serde_json::json!({
        "int": 5,
        "float": 4.0,
        "text": "hi",
        "list": [1, 2]
    });

    assert_eq!(Input::from(json), Input::Map(4));
    assert_eq!(Input::from(serde_json::json!(5)), Input::Integer(5));
    assert_eq!(Input::from(serde_json::json!(4.0)), Input::Float(4.0));
    assert_eq!(Input::from(serde_json::json!("hi")), Input::String("hi".to_string()));
    assert_eq!(Input::from(serde_json::json!([1, [2, [3]]])), Input::List(2));
}

#[test]
fn test_parse_literal() {
    assert_eq!(Input::parse_literal("42"), Input::Integer(42));
    assert_eq!(Input::parse_literal("4.5"), Input::Float(4.5));
    assert_eq!(Input::parse_literal("\"42\""), Input::String("42".to_string()));
    assert_eq!(Input::parse_literal("hello"), Input::String("hello".to_string()));
    assert_eq!(Input::parse_literal("true"), Input::Bool(true));
}

// =============================================================================
// Kind Tags
// =============================================================================

#[test]
fn test_kind_display() {
    assert_eq!(Kind::Integer.to_string(), "D");
    assert_eq!(Kind::String.to_string(), "S");
    assert_eq!(Kind::Undefined.to_string(), "UND");
    assert_eq!(KindOf::Kind(Kind::String).to_string(), "S");
    assert_eq!(KindOf::No.to_string(), "No");
}
