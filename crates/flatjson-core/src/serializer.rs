//! Flat JSON serializer: [`Document`] → canonical text.
//!
//! Output shape is `{"k1": v1, "k2": v2}`: pairs joined by `", "`, keys quoted,
//! string values quoted verbatim, numbers in their [`Value`] display form. Keys
//! appear in the document's insertion order and `{}` is the empty document.

use crate::error::SerializeError;
use crate::types::{Document, Value};

/// Serialize a document into canonical flat JSON text.
///
/// Fails only for non-finite floats, which the grammar cannot express.
///
/// # Example
/// ```
/// use flatjson_core::{serialize, Document, Value};
/// let mut doc = Document::new();
/// doc.insert("name", "John");
/// doc.insert("age", 30.5);
/// assert_eq!(serialize(&doc).unwrap(), r#"{"name": "John", "age": 30.5}"#);
/// ```
pub fn serialize(doc: &Document) -> Result<String, SerializeError> {
    let mut out = String::with_capacity(2 + doc.len() * 16);
    out.push('{');
    for (i, (key, value)) in doc.iter().enumerate() {
        if matches!(value, Value::Float(f) if !f.is_finite()) {
            tracing::debug!(key, "non-finite float cannot be serialized");
            return Err(SerializeError::UnsupportedValue);
        }
        if i > 0 {
            out.push_str(", ");
        }
        out.push('"');
        out.push_str(key);
        out.push_str("\": ");
        encode_value(value, &mut out);
    }
    out.push('}');
    Ok(out)
}

fn encode_value(value: &Value, out: &mut String) {
    match value {
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        _ => out.push_str(&value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document() {
        assert_eq!(serialize(&Document::new()).unwrap(), "{}");
    }

    #[test]
    fn single_pair_has_no_separator() {
        let doc: Document = [("k", "v")].into_iter().collect();
        assert_eq!(serialize(&doc).unwrap(), r#"{"k": "v"}"#);
    }

    #[test]
    fn whole_float_keeps_decimal_point() {
        let doc: Document = [("x", 30.0)].into_iter().collect();
        assert_eq!(serialize(&doc).unwrap(), r#"{"x": 30.0}"#);
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let doc: Document = [("x", f)].into_iter().collect();
            assert_eq!(serialize(&doc), Err(SerializeError::UnsupportedValue));
        }
    }
}
