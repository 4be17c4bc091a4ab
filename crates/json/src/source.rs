//! Input normalization for the unmarshal entry points.

use std::borrow::Cow;
use std::fmt;
use std::io::Read;

use crate::JsonError;

/// Something JSON can be read from.
///
/// Byte slices and strings are borrowed as they are; streams are read to the
/// end by [`Source::into_bytes`]. Conversions exist for the usual owned and
/// borrowed byte and string types, so entry points can take
/// `impl Into<Source<'a>>`.
///
/// # Example
///
/// ```
/// use clustermgmt_json::Source;
///
/// let from_str = Source::from("{}").into_bytes().unwrap();
/// let from_stream = Source::reader(&b"{}"[..]).into_bytes().unwrap();
/// assert_eq!(from_str, from_stream);
/// ```
pub enum Source<'a> {
    Bytes(Cow<'a, [u8]>),
    Reader(Box<dyn Read + 'a>),
}

impl<'a> Source<'a> {
    /// Wraps a stream.
    pub fn reader<R: Read + 'a>(reader: R) -> Self {
        Source::Reader(Box::new(reader))
    }

    /// Returns the whole input as one buffer. Read errors are returned
    /// unchanged as [`JsonError::Io`].
    pub fn into_bytes(self) -> Result<Cow<'a, [u8]>, JsonError> {
        match self {
            Source::Bytes(bytes) => Ok(bytes),
            Source::Reader(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                Ok(Cow::Owned(buf))
            }
        }
    }
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Source::Reader(_) => f.write_str("Reader"),
        }
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Source::Bytes(Cow::Borrowed(bytes))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Source<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Source::Bytes(Cow::Borrowed(bytes))
    }
}

impl<'a> From<&'a Vec<u8>> for Source<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Source::Bytes(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for Source<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Source::Bytes(Cow::Owned(bytes))
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Source::Bytes(Cow::Borrowed(text.as_bytes()))
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Source::Bytes(Cow::Borrowed(text.as_bytes()))
    }
}

impl From<String> for Source<'_> {
    fn from(text: String) -> Self {
        Source::Bytes(Cow::Owned(text.into_bytes()))
    }
}
