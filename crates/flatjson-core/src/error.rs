//! Error types for flat JSON parsing and serialization.
//!
//! The `Display` text of every error is the exact taxonomy message callers match
//! on. Parse errors additionally carry the byte offset where scanning stopped,
//! reported out of band through [`ParseError::offset`] and [`ParseError::location`].

use thiserror::Error;

/// What went wrong while parsing. One variant per taxonomy message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    #[error("Expected string input")]
    ExpectedStringInput,

    #[error("Empty JSON string")]
    EmptyInput,

    #[error("Expected object")]
    ExpectedObject,

    #[error("Expected object key")]
    ExpectedKey,

    #[error("Expected closing '\"' for object key")]
    UnterminatedKey,

    #[error("Expected ':' after object key")]
    ExpectedColon,

    #[error("Expected value after ':'")]
    MissingValue,

    #[error("Expected number value")]
    ExpectedNumber,

    #[error("Expected closing '\"' for string value")]
    UnterminatedString,

    #[error("Expected ',' after key and value pair")]
    ExpectedComma,

    #[error("Invalid JSON string")]
    InvalidJson,
}

/// A parse failure: the taxonomy message plus the byte offset it was detected at.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Byte offset into the input where the failure was detected.
    ///
    /// For unterminated keys and string values this is the offset of the
    /// opening quote; for everything else it is the offending character (or the
    /// input length when the input ended early).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Resolve the offset into a 1-based `(line, column)` pair within `text`.
    ///
    /// Columns count characters, not bytes. `text` must be the input that
    /// produced this error; offsets past the end clamp to the end.
    pub fn location(&self, text: &str) -> (usize, usize) {
        let mut end = self.offset.min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let before = &text[..end];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}

/// A serialization failure. Raised when a mapping crosses a dynamically typed
/// boundary and turns out not to be a flat object of strings and numbers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerializeError {
    #[error("Expected dictionary object")]
    ExpectedDictionary,

    #[error("Dictionary keys must be strings")]
    KeyNotString,

    #[error("Dictionary values must be strings or numbers")]
    UnsupportedValue,
}

/// Errors surfaced by the string-to-string entry points in [`crate::interop`].
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),

    /// The input to `from_json` was not valid JSON at all.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout flatjson-core.
pub type Result<T> = std::result::Result<T, Error>;
