//! Integration tests for building list arrays from untyped JSON input.

#![cfg(feature = "json")]

use minlist::{ListArray, ListSlot, MinlistError};
use serde_json::json;

#[test]
fn test_example_scenario() {
    let arr = ListArray::try_from_json(&json!([["a", "b"], null, []])).unwrap();
    assert_eq!(arr.isna().as_slice(), &[false, true, false]);
    assert_eq!(arr.get(2).unwrap(), &ListSlot::empty());
    assert!(!arr.get(2).unwrap().is_null());
    assert_eq!(arr.get(0).unwrap().as_list(), Some(&['a', 'b'][..]));
}

#[test]
fn test_non_sequence_backing_store_rejected() {
    let err = ListArray::try_from_json(&json!({"rows": [["a"]]})).unwrap_err();
    assert_eq!(err, MinlistError::InvalidBackingStore { found: "object" });
}

#[test]
fn test_validation_is_eager() {
    // The bad element sits after valid ones; nothing partial comes back.
    let err = ListArray::try_from_json(&json!([["a"], ["b"], true, ["c"]])).unwrap_err();
    assert_eq!(err, MinlistError::InvalidElementType { index: 2, found: "bool".into() });
}

#[test]
fn test_json_text_round_trip() {
    let text = r#"[["h","i"],null,[]]"#;
    let arr = ListArray::try_from_json_str(text).unwrap();
    assert_eq!(arr.to_json().to_string(), text);
}
