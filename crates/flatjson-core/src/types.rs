//! The flat document model shared by the parser and the serializer.
//!
//! A [`Document`] is an ordered mapping from string keys to [`Value`]s. Order is
//! kept in a `Vec` of entries; a `HashMap` from key to entry index enforces key
//! uniqueness, so inserting an existing key replaces its value in place.

use std::collections::HashMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single value in a flat document.
///
/// Integers and floats are distinct cases: `30` parses as `Integer(30)` and
/// `30.0` as `Float(30.0)`, and each serializes back to its own form.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric value as `f64`; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::String(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        !matches!(self, Value::String(_))
    }
}

/// Canonical textual form, as written by the serializer.
///
/// Strings are wrapped in quotes verbatim. Floats always carry a decimal point
/// so that they parse back as floats. Non-finite floats have no canonical form;
/// `serialize` rejects them before formatting.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => {
                let text = x.to_string();
                if x.is_finite() && !text.contains('.') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

/// An insertion-ordered mapping of unique string keys to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: Vec<(String, Value)>,
    index: HashMap<String, usize>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a key/value pair, returning the previous value for the key.
    ///
    /// A new key is appended at the end. An existing key keeps its original
    /// position and only has its value replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

/// Borrowing iterator over a [`Document`], in insertion order.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Document {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Document::new();
        doc.extend(iter);
        doc
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order() {
        let mut doc = Document::new();
        doc.insert("b", 1);
        doc.insert("a", 2);
        doc.insert("c", 3);
        assert_eq!(doc.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
    }

    #[test]
    fn duplicate_key_keeps_first_position() {
        let mut doc = Document::new();
        doc.insert("a", 1);
        doc.insert("b", 2);
        let previous = doc.insert("a", "x");
        assert_eq!(previous, Some(Value::Integer(1)));
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(doc.get("a"), Some(&Value::from("x")));
    }

    #[test]
    fn from_iterator_collects_pairs() {
        let doc: Document = [("name", Value::from("John")), ("age", Value::from(30))]
            .into_iter()
            .collect();
        assert_eq!(doc.len(), 2);
        assert!(doc.contains_key("age"));
        assert!(!doc.contains_key("missing"));
    }

    #[test]
    fn equality_depends_on_order() {
        let ab: Document = [("a", 1), ("b", 2)].into_iter().collect();
        let ba: Document = [("b", 2), ("a", 1)].into_iter().collect();
        assert_ne!(ab, ba);
    }

    #[test]
    fn owned_iteration_yields_entries() {
        let doc: Document = [("k", 1.5)].into_iter().collect();
        let entries: Vec<(String, Value)> = doc.into_iter().collect();
        assert_eq!(entries, vec![("k".to_string(), Value::Float(1.5))]);
    }

    #[test]
    fn display_keeps_numeric_case() {
        assert_eq!(Value::Integer(30).to_string(), "30");
        assert_eq!(Value::Float(30.0).to_string(), "30.0");
        assert_eq!(Value::Float(30.5).to_string(), "30.5");
        assert_eq!(Value::Float(-0.25).to_string(), "-0.25");
        assert_eq!(Value::from("John").to_string(), "\"John\"");
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert_eq!(Value::from(7).as_i64(), Some(7));
        assert_eq!(Value::from(7).as_f64(), Some(7.0));
        assert_eq!(Value::from(2.5).as_i64(), None);
        assert!(Value::from(2.5).is_number());
        assert!(!Value::from("2.5").is_number());
    }

    #[test]
    fn serializes_through_serde_in_order() {
        let doc: Document = [("z", Value::from("last")), ("a", Value::from(1))]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"z":"last","a":1}"#
        );
    }
}
