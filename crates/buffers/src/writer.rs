//! Byte buffer writer with auto-growing capacity.

use std::io;

/// Allocation size used by [`Writer::new`] (64 KiB).
pub const DEFAULT_ALLOC_SIZE: usize = 64 * 1024;

/// A byte buffer writer that grows automatically as needed.
///
/// Bytes written since the last flush are pending; [`Writer::flush`] returns
/// them and [`Writer::flush_to`] forwards them to a sink.
///
/// # Example
///
/// ```
/// use clustermgmt_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(b'{');
/// writer.utf8("\"cpu\"");
/// writer.u8(b'}');
/// assert_eq!(writer.flush(), b"{\"cpu\"}");
/// ```
#[derive(Debug, Clone)]
pub struct Writer {
    uint8: Vec<u8>,
    /// Position where last flush happened.
    x0: usize,
    /// Current cursor position.
    x: usize,
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with the default allocation size.
    pub fn new() -> Self {
        Self::with_alloc_size(DEFAULT_ALLOC_SIZE)
    }

    /// Creates a new writer with a custom allocation size.
    ///
    /// The buffer is allocated lazily on the first write.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            uint8: Vec::new(),
            x0: 0,
            x: 0,
            alloc_size: alloc_size.max(1),
        }
    }

    /// Ensures the buffer has at least `capacity` bytes available.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.uint8.len() - self.x;
        if remaining >= capacity {
            return;
        }
        let pending = self.x - self.x0;
        let required = pending + capacity;
        let new_size = if required <= self.alloc_size {
            self.alloc_size
        } else {
            required * 2
        };
        self.grow(new_size);
    }

    // Drops already flushed bytes while growing.
    fn grow(&mut self, new_size: usize) {
        let pending = self.x - self.x0;
        let mut new_buf = vec![0u8; new_size];
        new_buf[..pending].copy_from_slice(&self.uint8[self.x0..self.x]);
        self.uint8 = new_buf;
        self.x = pending;
        self.x0 = 0;
    }

    /// Number of pending bytes.
    pub fn len(&self) -> usize {
        self.x - self.x0
    }

    pub fn is_empty(&self) -> bool {
        self.x == self.x0
    }

    /// Discards pending bytes.
    pub fn reset(&mut self) {
        self.x = self.x0;
    }

    /// Returns the pending bytes and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    /// Writes the pending bytes to `sink` and advances the flush position.
    ///
    /// Errors reported by the sink are returned unchanged; on error the
    /// pending bytes are kept.
    pub fn flush_to<W: io::Write + ?Sized>(&mut self, sink: &mut W) -> io::Result<()> {
        sink.write_all(&self.uint8[self.x0..self.x])?;
        self.x0 = self.x;
        Ok(())
    }

    /// Writes a single byte.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = val;
        self.x += 1;
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        let length = buf.len();
        self.ensure_capacity(length);
        self.uint8[self.x..self.x + length].copy_from_slice(buf);
        self.x += length;
    }

    /// Writes a UTF-8 string. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        self.buf(s.as_bytes());
        s.len()
    }

    /// Writes an ASCII string.
    pub fn ascii(&mut self, s: &str) {
        self.utf8(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let mut writer = Writer::new();
        writer.u8(0x01);
        writer.u8(0x02);
        assert_eq!(writer.flush(), [0x01, 0x02]);
    }

    #[test]
    fn test_utf8() {
        let mut writer = Writer::new();
        assert_eq!(writer.utf8("café"), 5);
        assert_eq!(std::str::from_utf8(&writer.flush()).unwrap(), "café");
    }

    #[test]
    fn test_flush_multiple() {
        let mut writer = Writer::new();
        writer.u8(0x01);
        assert_eq!(writer.flush(), [0x01]);
        writer.u8(0x02);
        assert_eq!(writer.flush(), [0x02]);
        assert!(writer.is_empty());
    }

    #[test]
    fn test_grows_past_alloc_size() {
        let mut writer = Writer::with_alloc_size(4);
        writer.buf(b"abc");
        writer.buf(b"defghij");
        assert_eq!(writer.len(), 10);
        assert_eq!(writer.flush(), b"abcdefghij");
    }

    #[test]
    fn test_grow_keeps_only_pending_bytes() {
        let mut writer = Writer::with_alloc_size(4);
        writer.buf(b"abcd");
        writer.flush();
        writer.buf(b"efghijkl");
        assert_eq!(writer.flush(), b"efghijkl");
    }

    #[test]
    fn test_reset_discards_pending() {
        let mut writer = Writer::new();
        writer.buf(b"keep");
        writer.flush();
        writer.buf(b"drop");
        writer.reset();
        writer.buf(b"!");
        assert_eq!(writer.flush(), b"!");
    }

    #[test]
    fn test_flush_to_sink() {
        let mut writer = Writer::new();
        writer.ascii("[1,2]");
        let mut out = Vec::new();
        writer.flush_to(&mut out).unwrap();
        assert_eq!(out, b"[1,2]");
        assert!(writer.is_empty());
    }

    #[test]
    fn test_flush_to_failing_sink_keeps_bytes() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let mut writer = Writer::new();
        writer.ascii("x");
        let err = writer.flush_to(&mut Broken).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(writer.flush(), b"x");
    }
}
