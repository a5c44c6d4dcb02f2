//! Flat JSON parser: text → [`Document`].
//!
//! Accepts exactly one object whose values are strings or numbers:
//!
//! ```text
//! document := '{' [ pair (',' pair)* ] '}'
//! pair     := key ':' value
//! key      := '"' chars '"'
//! value    := string | number
//! string   := '"' chars '"'
//! number   := ['-'] digit+ ['.' digit+]
//! ```
//!
//! Strings are taken verbatim between quotes; there is no escape processing.
//! Space, tab, carriage return and newline between tokens are skipped.
//!
//! # Key design decisions
//!
//! - **Explicit state machine**: `Scanner::run` drives a `State` enum with one
//!   cursor and one byte of lookahead. Every state either advances the cursor or
//!   fails, so scanning always terminates.
//! - **Byte scanning, `str` slicing**: every structural character is ASCII, so
//!   positions found by scanning bytes are always valid `char` boundaries and
//!   keys/strings are sliced straight out of the input.
//! - **Lexical numeric typing**: a `.` in the literal makes it a float; its
//!   absence makes it an integer, regardless of value.

use crate::error::{ParseError, ParseErrorKind};
use crate::types::{Document, Value};

/// Parse flat JSON text into a [`Document`].
///
/// # Example
/// ```
/// use flatjson_core::{parse, Value};
/// let doc = parse(r#"{"name": "John", "age": 30}"#).unwrap();
/// assert_eq!(doc.get("age"), Some(&Value::Integer(30)));
/// ```
pub fn parse(text: &str) -> Result<Document, ParseError> {
    if text.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyInput, 0));
    }
    Scanner::new(text).run().inspect_err(|err| {
        tracing::debug!(offset = err.offset(), error = %err, "flat json parse failed");
    })
}

/// Parse raw bytes, failing with `Expected string input` if they are not UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<Document, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        ParseError::new(ParseErrorKind::ExpectedStringInput, e.valid_up_to())
    })?;
    parse(text)
}

/// Scanner states. `Done` is the only accepting state; failures leave the loop
/// through `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectObjectOpen,
    /// Right after `{`: a key or an immediate `}`.
    ExpectKeyOrClose,
    /// Right after `,`: a key is mandatory.
    ExpectKey,
    InKey,
    ExpectColon,
    ExpectValue,
    InStringValue,
    InNumberValue,
    ExpectCommaOrClose,
    /// After the closing `}`: only whitespace may follow.
    Closed,
    Done,
}

struct Scanner<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    doc: Document,
    key: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            doc: Document::new(),
            key: "",
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn fail<T>(&self, kind: ParseErrorKind) -> Result<T, ParseError> {
        Err(ParseError::new(kind, self.pos))
    }

    fn run(mut self) -> Result<Document, ParseError> {
        let mut state = State::ExpectObjectOpen;
        while state != State::Done {
            state = self.step(state)?;
        }
        Ok(self.doc)
    }

    fn step(&mut self, state: State) -> Result<State, ParseError> {
        match state {
            State::ExpectObjectOpen => {
                self.skip_whitespace();
                if self.peek() != Some(b'{') {
                    return self.fail(ParseErrorKind::ExpectedObject);
                }
                self.pos += 1;
                Ok(State::ExpectKeyOrClose)
            }
            State::ExpectKeyOrClose => {
                self.skip_whitespace();
                match self.peek() {
                    Some(b'}') => {
                        self.pos += 1;
                        Ok(State::Closed)
                    }
                    Some(b'"') => Ok(State::InKey),
                    None => self.fail(ParseErrorKind::InvalidJson),
                    Some(_) => self.fail(ParseErrorKind::ExpectedKey),
                }
            }
            State::ExpectKey => {
                self.skip_whitespace();
                match self.peek() {
                    Some(b'"') => Ok(State::InKey),
                    None | Some(b'}') => self.fail(ParseErrorKind::InvalidJson),
                    Some(_) => self.fail(ParseErrorKind::ExpectedKey),
                }
            }
            State::InKey => {
                self.key = self.quoted(ParseErrorKind::UnterminatedKey)?;
                Ok(State::ExpectColon)
            }
            State::ExpectColon => {
                self.skip_whitespace();
                if self.peek() != Some(b':') {
                    return self.fail(ParseErrorKind::ExpectedColon);
                }
                self.pos += 1;
                Ok(State::ExpectValue)
            }
            State::ExpectValue => {
                self.skip_whitespace();
                match self.peek() {
                    None | Some(b'}') => self.fail(ParseErrorKind::MissingValue),
                    Some(b'"') => Ok(State::InStringValue),
                    Some(b'-' | b'0'..=b'9') => Ok(State::InNumberValue),
                    Some(_) => self.fail(ParseErrorKind::ExpectedNumber),
                }
            }
            State::InStringValue => {
                let value = self.quoted(ParseErrorKind::UnterminatedString)?;
                self.doc.insert(self.key, value);
                Ok(State::ExpectCommaOrClose)
            }
            State::InNumberValue => {
                let value = self.number()?;
                self.doc.insert(self.key, value);
                Ok(State::ExpectCommaOrClose)
            }
            State::ExpectCommaOrClose => {
                self.skip_whitespace();
                match self.peek() {
                    Some(b',') => {
                        self.pos += 1;
                        Ok(State::ExpectKey)
                    }
                    Some(b'}') => {
                        self.pos += 1;
                        Ok(State::Closed)
                    }
                    _ => self.fail(ParseErrorKind::ExpectedComma),
                }
            }
            State::Closed => {
                self.skip_whitespace();
                match self.peek() {
                    None => Ok(State::Done),
                    Some(_) => self.fail(ParseErrorKind::InvalidJson),
                }
            }
            State::Done => Ok(State::Done),
        }
    }

    /// Consume a `"`-delimited run starting at the cursor and return its contents.
    /// On a missing closing quote the error points at the opening quote.
    fn quoted(&mut self, unterminated: ParseErrorKind) -> Result<&'a str, ParseError> {
        let text = self.text;
        let open = self.pos;
        let start = open + 1;
        match self.bytes[start..].iter().position(|&b| b == b'"') {
            Some(len) => {
                self.pos = start + len + 1;
                Ok(&text[start..start + len])
            }
            None => Err(ParseError::new(unterminated, open)),
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Consume `['-'] digit+ ['.' digit+]` at the cursor.
    fn number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        if self.digits() == 0 {
            return self.fail(ParseErrorKind::ExpectedNumber);
        }
        let is_float = self.peek() == Some(b'.');
        if is_float {
            self.pos += 1;
            if self.digits() == 0 {
                return self.fail(ParseErrorKind::ExpectedNumber);
            }
        }

        let literal = &self.text[start..self.pos];
        let value = if is_float {
            literal.parse::<f64>().map(Value::Float).ok()
        } else {
            literal.parse::<i64>().map(Value::Integer).ok()
        };
        value.ok_or_else(|| ParseError::new(ParseErrorKind::ExpectedNumber, start))
    }
}
