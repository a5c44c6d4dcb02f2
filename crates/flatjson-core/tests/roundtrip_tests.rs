use flatjson_core::{parse, serialize, to_json, Document, Value};

/// Assert that text → document → text reproduces the canonical input exactly,
/// and that the document survives a second pass unchanged.
fn assert_roundtrip(canonical: &str) {
    let doc = parse(canonical).expect("parse failed");
    let text = serialize(&doc).expect("serialize failed");
    assert_eq!(text, canonical, "Roundtrip changed the text");
    let again = parse(&text).expect("reparse failed");
    assert_eq!(doc, again, "Roundtrip changed the document");
}

/// Assert that non-canonical input normalizes to `canonical`.
fn assert_normalizes(input: &str, canonical: &str) {
    let doc = parse(input).expect("parse failed");
    assert_eq!(serialize(&doc).unwrap(), canonical);
}

// ============================================================================
// Canonical Texts
// ============================================================================

#[test]
fn roundtrip_empty() {
    assert_roundtrip("{}");
}

#[test]
fn roundtrip_single_string() {
    assert_roundtrip(r#"{"name": "John"}"#);
}

#[test]
fn roundtrip_mixed() {
    assert_roundtrip(r#"{"name": "John", "age": 30, "height": 1.85, "id": "007"}"#);
}

#[test]
fn roundtrip_whole_float() {
    assert_roundtrip(r#"{"age": 30.0}"#);
}

#[test]
fn roundtrip_negative_numbers() {
    assert_roundtrip(r#"{"i": -1, "f": -0.001}"#);
}

#[test]
fn roundtrip_unicode() {
    assert_roundtrip("{\"caf\u{e9}\": \"na\u{ef}ve\", \"\u{4f60}\": 1}");
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn compact_input_gains_canonical_spacing() {
    assert_normalizes(r#"{"name":"John","age":30}"#, r#"{"name": "John", "age": 30}"#);
}

#[test]
fn loose_whitespace_collapses() {
    assert_normalizes(
        "{\n  \"name\" :\t\"John\" ,\n  \"age\" : 30\n}\n",
        r#"{"name": "John", "age": 30}"#,
    );
}

#[test]
fn leading_zeros_and_trailing_fraction_zeros_drop() {
    assert_normalizes(r#"{"a": 007, "b": 1.50}"#, r#"{"a": 7, "b": 1.5}"#);
}

#[test]
fn duplicate_keys_collapse() {
    assert_normalizes(r#"{"a": 1, "b": 2, "a": 3}"#, r#"{"a": 3, "b": 2}"#);
}

// ============================================================================
// Documents Built In Code
// ============================================================================

#[test]
fn built_document_roundtrips() {
    let mut doc = Document::new();
    doc.insert("name", "John");
    doc.insert("age", 30);
    doc.insert("score", 97.25);
    let back = parse(&serialize(&doc).unwrap()).unwrap();
    assert_eq!(back, doc);
    assert_eq!(back.get("score"), Some(&Value::Float(97.25)));
}

#[test]
fn to_json_is_standard_json() {
    let json = to_json(r#"{"name": "John", "age": 30, "h": 1.5}"#).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!({"name": "John", "age": 30, "h": 1.5}));
    assert_eq!(json, r#"{"name":"John","age":30,"h":1.5}"#);
}
