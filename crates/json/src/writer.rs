//! `JsonWriter`: compact JSON token writer on top of a [`Writer`] buffer.

use std::io;

use clustermgmt_buffers::Writer;

use crate::util::format_float;

#[derive(Debug, Clone, Copy)]
enum Frame {
    Object { first: bool },
    Array { first: bool },
}

/// Streaming JSON writer.
///
/// Containers are opened and closed explicitly; commas between members and
/// elements are inserted automatically, so callers only ever write keys and
/// values.
///
/// # Example
///
/// ```
/// use clustermgmt_json::JsonWriter;
///
/// let mut writer = JsonWriter::new();
/// writer.write_start_arr();
/// writer.write_bool(true);
/// writer.write_i64(-3);
/// writer.write_end_arr();
/// assert_eq!(writer.finish(), b"[true,-3]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonWriter {
    writer: Writer,
    stack: Vec<Frame>,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer whose buffer grows in steps of `alloc_size` bytes.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            writer: Writer::with_alloc_size(alloc_size),
            stack: Vec::new(),
        }
    }

    /// Returns the bytes written so far and starts a new document.
    pub fn finish(&mut self) -> Vec<u8> {
        self.stack.clear();
        self.writer.flush()
    }

    /// Forwards the bytes written so far to `sink`.
    pub fn flush_to<W: io::Write + ?Sized>(&mut self, sink: &mut W) -> io::Result<()> {
        self.writer.flush_to(sink)?;
        self.stack.clear();
        Ok(())
    }

    // Emits the separator owed by an array element.
    fn before_value(&mut self) {
        if let Some(Frame::Array { first }) = self.stack.last_mut() {
            if !*first {
                self.writer.u8(b',');
            }
            *first = false;
        }
    }

    pub fn write_null(&mut self) {
        self.before_value();
        self.writer.buf(b"null");
    }

    pub fn write_bool(&mut self, b: bool) {
        self.before_value();
        let literal: &[u8] = if b { b"true" } else { b"false" };
        self.writer.buf(literal);
    }

    pub fn write_i64(&mut self, int: i64) {
        self.before_value();
        self.writer.ascii(&int.to_string());
    }

    /// Writes a float; NaN and infinities have no JSON form and are written
    /// as `null`.
    pub fn write_f64(&mut self, float: f64) {
        if !float.is_finite() {
            self.write_null();
            return;
        }
        self.before_value();
        self.writer.ascii(&format_float(float));
    }

    /// Writes a JSON string (with escaping).
    pub fn write_str(&mut self, s: &str) {
        self.before_value();
        self.write_quoted(s);
    }

    fn write_quoted(&mut self, s: &str) {
        let bytes = s.as_bytes();
        // Fast path: printable ASCII without quotes or backslashes.
        if bytes
            .iter()
            .all(|&b| (32..=126).contains(&b) && b != b'"' && b != b'\\')
        {
            self.writer.ensure_capacity(bytes.len() + 2);
            self.writer.u8(b'"');
            self.writer.buf(bytes);
            self.writer.u8(b'"');
            return;
        }
        let json_str = serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
        self.writer.buf(json_str.as_bytes());
    }

    pub fn write_start_obj(&mut self) {
        self.before_value();
        self.writer.u8(b'{');
        self.stack.push(Frame::Object { first: true });
    }

    /// Writes a member key; the next write is its value.
    pub fn write_key(&mut self, key: &str) {
        if let Some(Frame::Object { first }) = self.stack.last_mut() {
            if !*first {
                self.writer.u8(b',');
            }
            *first = false;
        }
        self.write_quoted(key);
        self.writer.u8(b':');
    }

    pub fn write_end_obj(&mut self) {
        self.stack.pop();
        self.writer.u8(b'}');
    }

    pub fn write_start_arr(&mut self) {
        self.before_value();
        self.writer.u8(b'[');
        self.stack.push(Frame::Array { first: true });
    }

    pub fn write_end_arr(&mut self) {
        self.stack.pop();
        self.writer.u8(b']');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(bytes: &[u8]) -> serde_json::Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_scalars() {
        let mut w = JsonWriter::new();
        w.write_null();
        assert_eq!(w.finish(), b"null");
        w.write_bool(false);
        assert_eq!(w.finish(), b"false");
        w.write_i64(i64::MIN);
        assert_eq!(w.finish(), b"-9223372036854775808");
        w.write_f64(0.5);
        assert_eq!(w.finish(), b"0.5");
        w.write_f64(f64::NAN);
        assert_eq!(w.finish(), b"null");
    }

    #[test]
    fn test_string_escaping() {
        let mut w = JsonWriter::new();
        w.write_str("say \"hi\"\n\u{1}é");
        let out = w.finish();
        assert_eq!(parse(&out), json!("say \"hi\"\n\u{1}é"));
    }

    #[test]
    fn test_nested_separators() {
        let mut w = JsonWriter::new();
        w.write_start_obj();
        w.write_key("a");
        w.write_start_arr();
        w.write_i64(1);
        w.write_start_obj();
        w.write_end_obj();
        w.write_start_arr();
        w.write_end_arr();
        w.write_end_arr();
        w.write_key("b");
        w.write_str("x");
        w.write_end_obj();
        assert_eq!(w.finish(), br#"{"a":[1,{},[]],"b":"x"}"#);
    }

    #[test]
    fn test_finish_starts_new_document() {
        let mut w = JsonWriter::with_alloc_size(8);
        w.write_start_arr();
        w.write_i64(1);
        let _ = w.finish();
        w.write_start_arr();
        w.write_i64(2);
        w.write_end_arr();
        assert_eq!(w.finish(), b"[2]");
    }
}
