//! Tests for ScalarTable
//!
//! These tests verify:
//! - set/get round trips for every accepted input shape
//! - Failed sets leave the table untouched
//! - kind_of reports the "No" sentinel for absent keys

use duokv::memtable::ScalarTable;
use duokv::value::{infer, Input, Kind, KindOf, Value};
use duokv::DuoError;

#[test]
fn test_set_get_matches_inference() {
    let mut table = ScalarTable::new();
    let cases = vec![
        ("first", Input::from("world")),
        ("second", Input::Integer(2)),
        ("third", Input::from("3d")),
        ("fourth", Input::Float(4.0)),
    ];

    for (key, input) in cases {
        let expected = infer(input.clone()).unwrap();
        table.set(key, input).unwrap();
        assert_eq!(table.get(key), Some(expected));
    }

    assert_eq!(table.len(), 4);
}

#[test]
fn test_set_returns_kind() {
    let mut table = ScalarTable::new();
    assert_eq!(table.set("a", Input::Integer(1)).unwrap(), Kind::Integer);
    assert_eq!(table.set("b", Input::from("x")).unwrap(), Kind::String);
}

#[test]
fn test_get_absent() {
    let table = ScalarTable::new();
    assert_eq!(table.get("missing"), None);
}

#[test]
fn test_overwrite_replaces_value_and_kind() {
    let mut table = ScalarTable::new();
    table.set("key", Input::Integer(1)).unwrap();
    table.set("key", Input::from("one")).unwrap();

    assert_eq!(table.get("key"), Some(Value::String("one".to_string())));
    assert_eq!(table.kind_of("key"), KindOf::Kind(Kind::String));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_failed_set_keeps_previous_value() {
    let mut table = ScalarTable::new();
    table.set("key", Input::Integer(1221)).unwrap();

    let err = table.set("key", Input::Float(1221.07)).unwrap_err();
    assert!(matches!(err, DuoError::Type(_)));

    assert_eq!(table.get("key"), Some(Value::Integer(1221)));
    assert_eq!(table.kind_of("key"), KindOf::Kind(Kind::Integer));
}

#[test]
fn test_failed_set_does_not_create_key() {
    let mut table = ScalarTable::new();
    assert!(table.set("key", Input::Bool(false)).is_err());
    assert!(!table.contains_key("key"));
    assert!(table.is_empty());
}

#[test]
fn test_kind_of() {
    let mut table = ScalarTable::new();
    table.set("int", Input::Integer(7)).unwrap();
    table.set("text", Input::from("seven")).unwrap();

    assert_eq!(table.kind_of("int"), KindOf::Kind(Kind::Integer));
    assert_eq!(table.kind_of("text"), KindOf::Kind(Kind::String));
    assert_eq!(table.kind_of("absent"), KindOf::No);
    assert_eq!(table.kind_of("absent").to_string(), "No");
}

#[test]
fn test_get_returns_copy() {
    let mut table = ScalarTable::new();
    table.set("key", Input::from("original")).unwrap();

    let mut copy = table.get("key").unwrap();
    copy = Value::String(format!("{}-changed", copy.as_str().unwrap()));
    assert_eq!(copy, Value::String("original-changed".to_string()));

    assert_eq!(table.get("key"), Some(Value::String("original".to_string())));
}
