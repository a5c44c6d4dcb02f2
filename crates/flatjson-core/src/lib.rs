//! # flatjson-core
//!
//! Parser and serializer for **flat JSON**: a single JSON object whose values are
//! strings, integers or floats. No nesting, arrays, booleans, null, escape
//! sequences or exponents.
//!
//! ## Quick start
//!
//! ```rust
//! use flatjson_core::{parse, serialize, Value};
//!
//! let doc = parse(r#"{   "name"  :  "John" ,  "age": 30 }"#).unwrap();
//! assert_eq!(doc.get("age"), Some(&Value::Integer(30)));
//!
//! // Canonical form: ", " between pairs, ": " after keys.
//! assert_eq!(serialize(&doc).unwrap(), r#"{"name": "John", "age": 30}"#);
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: text → [`Document`], with position-aware [`ParseError`]s
//! - [`serializer`]: [`Document`] → canonical text
//! - [`types`]: [`Value`] and the insertion-ordered [`Document`]
//! - [`interop`]: conversion from `serde_json` values and JSON-text helpers
//! - [`error`]: the error taxonomy

pub mod error;
pub mod interop;
pub mod parser;
pub mod serializer;
pub mod types;

pub use error::{Error, ParseError, ParseErrorKind, Result, SerializeError};
pub use interop::{from_json, to_json};
pub use parser::{parse, parse_bytes};
pub use serializer::serialize;
pub use types::{Document, Value};
