//! `JsonReader`: pull-style JSON tokenizer over a byte slice.

use clustermgmt_buffers::Reader;

use crate::util::{decode_json_string, find_ending_quote};
use crate::JsonError;

/// Maximum container nesting accepted by [`JsonReader`].
pub const MAX_DEPTH: usize = 128;

/// Class of the next JSON value, as reported by [`JsonReader::whats_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

/// Streaming JSON reader.
///
/// Values are consumed one at a time with the typed `read_*` methods;
/// containers are walked with [`read_object`](Self::read_object) and
/// [`read_array`](Self::read_array), which hand the reader back to a callback
/// positioned at each member value or element.
#[derive(Debug, Clone)]
pub struct JsonReader<'a> {
    reader: Reader<'a>,
    depth: usize,
}

impl<'a> JsonReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(data),
            depth: 0,
        }
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.reader.peek() {
            self.reader.skip(1);
        }
    }

    fn peek_byte(&mut self) -> Result<u8, JsonError> {
        self.skip_whitespace();
        self.reader.peek().ok_or(JsonError::UnexpectedEnd {
            offset: self.reader.position(),
        })
    }

    fn unexpected(&self, expected: &'static str) -> JsonError {
        JsonError::UnexpectedToken {
            offset: self.reader.position(),
            expected,
        }
    }

    /// Peeks at the class of the next value without consuming it.
    pub fn whats_next(&mut self) -> Result<Token, JsonError> {
        match self.peek_byte()? {
            b'n' => Ok(Token::Null),
            b't' | b'f' => Ok(Token::Bool),
            b'"' => Ok(Token::String),
            b'[' => Ok(Token::Array),
            b'{' => Ok(Token::Object),
            b'-' | b'0'..=b'9' => Ok(Token::Number),
            _ => Err(self.unexpected("a JSON value")),
        }
    }

    fn expect_literal(&mut self, literal: &[u8], expected: &'static str) -> Result<(), JsonError> {
        if self.reader.starts_with(literal) {
            self.reader.skip(literal.len());
            return Ok(());
        }
        let rest = self.reader.rest();
        if rest.len() < literal.len() && literal.starts_with(rest) {
            return Err(JsonError::UnexpectedEnd {
                offset: self.reader.position() + rest.len(),
            });
        }
        Err(self.unexpected(expected))
    }

    pub fn read_null(&mut self) -> Result<(), JsonError> {
        self.skip_whitespace();
        self.expect_literal(b"null", "null")
    }

    pub fn read_bool(&mut self) -> Result<bool, JsonError> {
        match self.peek_byte()? {
            b't' => self.expect_literal(b"true", "a boolean").map(|_| true),
            b'f' => self.expect_literal(b"false", "a boolean").map(|_| false),
            _ => Err(self.unexpected("a boolean")),
        }
    }

    // Consumes a number token and returns its text and whether it has a
    // fraction or exponent.
    fn read_number_text(&mut self) -> Result<(&'a str, bool), JsonError> {
        let ch = self.peek_byte()?;
        if ch != b'-' && !ch.is_ascii_digit() {
            return Err(self.unexpected("a number"));
        }
        let start = self.reader.position();
        let data = self.reader.rest();
        let len = data.len();
        let digits = |mut x: usize| {
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
            x
        };
        let invalid = JsonError::InvalidNumber { offset: start };

        let mut x = 0;
        if data[x] == b'-' {
            x += 1;
        }
        let int_end = digits(x);
        // No leading zeros: `0` is the only integer part that starts with one.
        if int_end == x || (data[x] == b'0' && int_end > x + 1) {
            return Err(invalid);
        }
        x = int_end;
        let mut is_float = false;
        if x < len && data[x] == b'.' {
            is_float = true;
            let frac_end = digits(x + 1);
            if frac_end == x + 1 {
                return Err(invalid);
            }
            x = frac_end;
        }
        if x < len && (data[x] == b'e' || data[x] == b'E') {
            is_float = true;
            x += 1;
            if x < len && (data[x] == b'+' || data[x] == b'-') {
                x += 1;
            }
            let exp_end = digits(x);
            if exp_end == x {
                return Err(invalid);
            }
            x = exp_end;
        }
        let bytes = self.reader.buf(x).ok_or(JsonError::UnexpectedEnd { offset: start })?;
        let text = std::str::from_utf8(bytes).map_err(|_| JsonError::InvalidUtf8)?;
        Ok((text, is_float))
    }

    /// Reads an integer. Numbers with a fraction or exponent, and integers
    /// outside the `i64` range, are rejected.
    pub fn read_i64(&mut self) -> Result<i64, JsonError> {
        self.skip_whitespace();
        let offset = self.reader.position();
        let (text, is_float) = self.read_number_text()?;
        if is_float {
            return Err(JsonError::InvalidNumber { offset });
        }
        text.parse()
            .map_err(|_| JsonError::InvalidNumber { offset })
    }

    pub fn read_f64(&mut self) -> Result<f64, JsonError> {
        self.skip_whitespace();
        let offset = self.reader.position();
        let (text, _) = self.read_number_text()?;
        text.parse()
            .map_err(|_| JsonError::InvalidNumber { offset })
    }

    pub fn read_str(&mut self) -> Result<String, JsonError> {
        if self.peek_byte()? != b'"' {
            return Err(self.unexpected("a string"));
        }
        self.reader.skip(1);
        let truncated = JsonError::UnexpectedEnd {
            offset: self.reader.position() + self.reader.size(),
        };
        let raw = find_ending_quote(self.reader.rest(), 0)
            .and_then(|end| self.reader.buf(end + 1))
            .ok_or(truncated)?;
        decode_json_string(&raw[..raw.len() - 1])
    }

    fn enter(&mut self) -> Result<(), JsonError> {
        if self.depth >= MAX_DEPTH {
            return Err(JsonError::DepthExceeded {
                offset: self.reader.position(),
                max: MAX_DEPTH,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Reads an object, calling `f` once per member with the reader
    /// positioned at the member value. `f` must consume exactly that value.
    pub fn read_object<F>(&mut self, mut f: F) -> Result<(), JsonError>
    where
        F: FnMut(&mut Self, String) -> Result<(), JsonError>,
    {
        if self.peek_byte()? != b'{' {
            return Err(self.unexpected("an object"));
        }
        self.enter()?;
        self.reader.skip(1);
        let mut first = true;
        loop {
            let ch = self.peek_byte()?;
            if ch == b'}' {
                self.reader.skip(1);
                break;
            }
            if !first {
                if ch != b',' {
                    return Err(self.unexpected("',' or '}'"));
                }
                self.reader.skip(1);
            }
            if self.peek_byte()? != b'"' {
                return Err(self.unexpected("an object key"));
            }
            let key = self.read_str()?;
            if self.peek_byte()? != b':' {
                return Err(self.unexpected("':'"));
            }
            self.reader.skip(1);
            f(self, key)?;
            first = false;
        }
        self.depth -= 1;
        Ok(())
    }

    /// Reads an array, calling `f` once per element with the reader
    /// positioned at that element. `f` must consume exactly one value.
    pub fn read_array<F>(&mut self, mut f: F) -> Result<(), JsonError>
    where
        F: FnMut(&mut Self) -> Result<(), JsonError>,
    {
        if self.peek_byte()? != b'[' {
            return Err(self.unexpected("an array"));
        }
        self.enter()?;
        self.reader.skip(1);
        let mut first = true;
        loop {
            let ch = self.peek_byte()?;
            if ch == b']' {
                self.reader.skip(1);
                break;
            }
            if !first {
                if ch != b',' {
                    return Err(self.unexpected("',' or ']'"));
                }
                self.reader.skip(1);
            }
            f(self)?;
            first = false;
        }
        self.depth -= 1;
        Ok(())
    }

    /// Consumes the next value, whatever its type.
    pub fn skip_value(&mut self) -> Result<(), JsonError> {
        match self.whats_next()? {
            Token::Null => self.read_null(),
            Token::Bool => self.read_bool().map(|_| ()),
            Token::Number => self.read_number_text().map(|_| ()),
            Token::String => self.read_str().map(|_| ()),
            Token::Array => self.read_array(|r| r.skip_value()),
            Token::Object => self.read_object(|r, _| r.skip_value()),
        }
    }

    /// Fails unless only whitespace is left.
    pub fn finish(&mut self) -> Result<(), JsonError> {
        self.skip_whitespace();
        if self.reader.size() == 0 {
            Ok(())
        } else {
            Err(JsonError::TrailingData {
                offset: self.reader.position(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whats_next() {
        let cases: [(&[u8], Token); 6] = [
            (b" null", Token::Null),
            (b"false", Token::Bool),
            (b"-1", Token::Number),
            (b"\"s\"", Token::String),
            (b"\n[", Token::Array),
            (b"{", Token::Object),
        ];
        for (input, token) in cases {
            assert_eq!(JsonReader::new(input).whats_next().unwrap(), token);
        }
        assert!(matches!(
            JsonReader::new(b"").whats_next(),
            Err(JsonError::UnexpectedEnd { offset: 0 })
        ));
    }

    #[test]
    fn test_read_numbers() {
        assert_eq!(JsonReader::new(b"42").read_i64().unwrap(), 42);
        assert_eq!(JsonReader::new(b" -7 ").read_i64().unwrap(), -7);
        assert_eq!(JsonReader::new(b"2.5e1").read_f64().unwrap(), 25.0);
        assert!(matches!(
            JsonReader::new(b"1.5").read_i64(),
            Err(JsonError::InvalidNumber { offset: 0 })
        ));
        assert!(matches!(
            JsonReader::new(b"99999999999999999999").read_i64(),
            Err(JsonError::InvalidNumber { .. })
        ));
        assert!(JsonReader::new(b"-").read_i64().is_err());
        assert!(JsonReader::new(b"1.").read_f64().is_err());
        assert!(JsonReader::new(b"1e").read_f64().is_err());
        assert_eq!(JsonReader::new(b"0").read_i64().unwrap(), 0);
        assert_eq!(JsonReader::new(b"-0.5").read_f64().unwrap(), -0.5);
        for input in [&b"007"[..], b"-01", b"00", b"01.5"] {
            assert!(
                matches!(
                    JsonReader::new(input).read_f64(),
                    Err(JsonError::InvalidNumber { offset: 0 })
                ),
                "accepted {:?}",
                std::str::from_utf8(input)
            );
        }
    }

    #[test]
    fn test_read_literals() {
        assert!(JsonReader::new(b"true").read_bool().unwrap());
        assert!(!JsonReader::new(b"false").read_bool().unwrap());
        assert!(JsonReader::new(b"null").read_null().is_ok());
        assert!(matches!(
            JsonReader::new(b"tru").read_bool(),
            Err(JsonError::UnexpectedEnd { offset: 3 })
        ));
        assert!(matches!(
            JsonReader::new(b"\"true\"").read_bool(),
            Err(JsonError::UnexpectedToken { offset: 0, .. })
        ));
    }

    #[test]
    fn test_read_str() {
        assert_eq!(JsonReader::new(br#""a\"b""#).read_str().unwrap(), "a\"b");
        assert!(matches!(
            JsonReader::new(b"\"open").read_str(),
            Err(JsonError::UnexpectedEnd { .. })
        ));
        assert!(JsonReader::new(b"1").read_str().is_err());
    }

    #[test]
    fn test_read_object_in_order() {
        let mut reader = JsonReader::new(br#"{ "a" : 1 , "b" : [true] }"#);
        let mut keys = Vec::new();
        reader
            .read_object(|r, key| {
                keys.push(key);
                r.skip_value()
            })
            .unwrap();
        reader.finish().unwrap();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn test_malformed_containers() {
        let cases: [&[u8]; 8] = [
            b"{",
            b"{\"a\"}",
            b"{\"a\":1,}",
            b"{,\"a\":1}",
            b"{\"a\":1 \"b\":2}",
            b"[1,]",
            b"[1 2]",
            b"[",
        ];
        for input in cases {
            assert!(
                JsonReader::new(input).skip_value().is_err(),
                "accepted {:?}",
                std::str::from_utf8(input).unwrap()
            );
        }
    }

    #[test]
    fn test_empty_containers() {
        let mut reader = JsonReader::new(b"[ ]");
        let mut count = 0;
        reader
            .read_array(|r| {
                count += 1;
                r.skip_value()
            })
            .unwrap();
        assert_eq!(count, 0);
        assert!(JsonReader::new(b"{}").skip_value().is_ok());
    }

    #[test]
    fn test_depth_limit() {
        let deep = "[".repeat(MAX_DEPTH + 1) + &"]".repeat(MAX_DEPTH + 1);
        assert!(matches!(
            JsonReader::new(deep.as_bytes()).skip_value(),
            Err(JsonError::DepthExceeded { .. })
        ));
        let ok = "[".repeat(MAX_DEPTH) + &"]".repeat(MAX_DEPTH);
        assert!(JsonReader::new(ok.as_bytes()).skip_value().is_ok());
    }

    #[test]
    fn test_finish_rejects_trailing_data() {
        let mut reader = JsonReader::new(b"1 2");
        reader.read_i64().unwrap();
        assert!(matches!(
            reader.finish(),
            Err(JsonError::TrailingData { offset: 2 })
        ));
    }
}
