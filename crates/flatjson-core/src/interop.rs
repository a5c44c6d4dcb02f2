//! Bridge between flat documents and `serde_json`.
//!
//! `serde_json::Value` is dynamically shaped, so this is where the flat-object
//! contract gets checked at runtime: a non-object fails with `Expected dictionary
//! object` and any array, object, bool or null value fails with `Dictionary
//! values must be strings or numbers`.
//!
//! The string-to-string helpers [`to_json`] and [`from_json`] are what the CLI
//! and WASM bindings call.

use serde_json::{Map, Value as JsonValue};

use crate::error::{Result, SerializeError};
use crate::parser::parse;
use crate::serializer::serialize;
use crate::types::{Document, Value};

impl TryFrom<&JsonValue> for Document {
    type Error = SerializeError;

    fn try_from(json: &JsonValue) -> std::result::Result<Self, Self::Error> {
        let map = json.as_object().ok_or(SerializeError::ExpectedDictionary)?;
        map_to_document(map)
    }
}

impl TryFrom<JsonValue> for Document {
    type Error = SerializeError;

    fn try_from(json: JsonValue) -> std::result::Result<Self, Self::Error> {
        Document::try_from(&json)
    }
}

fn map_to_document(map: &Map<String, JsonValue>) -> std::result::Result<Document, SerializeError> {
    let mut doc = Document::with_capacity(map.len());
    for (key, value) in map {
        doc.insert(key.as_str(), json_to_value(value)?);
    }
    Ok(doc)
}

/// Numbers that serde_json holds as `i64` become integers; everything else
/// numeric (fractional literals, values past `i64::MAX`) becomes a float.
fn json_to_value(json: &JsonValue) -> std::result::Result<Value, SerializeError> {
    match json {
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Ok(Value::Integer(i)),
            None => n
                .as_f64()
                .map(Value::Float)
                .ok_or(SerializeError::UnsupportedValue),
        },
        _ => Err(SerializeError::UnsupportedValue),
    }
}

/// Parse flat JSON text and re-emit it as compact standard JSON.
///
/// ```
/// let json = flatjson_core::to_json(r#"{ "a" : 1 , "b" : "x" }"#).unwrap();
/// assert_eq!(json, r#"{"a":1,"b":"x"}"#);
/// ```
pub fn to_json(text: &str) -> Result<String> {
    let doc = parse(text)?;
    Ok(serde_json::to_string(&doc)?)
}

/// Read standard JSON text and serialize it in the canonical flat form.
///
/// ```
/// let flat = flatjson_core::from_json(r#"{"a":1,"b":"x"}"#).unwrap();
/// assert_eq!(flat, r#"{"a": 1, "b": "x"}"#);
/// ```
pub fn from_json(json: &str) -> Result<String> {
    let value: JsonValue = serde_json::from_str(json)?;
    let doc = Document::try_from(&value)?;
    Ok(serialize(&doc)?)
}
