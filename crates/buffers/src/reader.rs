//! Checked cursor over a borrowed byte slice.

/// A reader over a byte slice that tracks a cursor position.
///
/// Unlike a raw index, every accessor is bounds checked: reading past the end
/// yields `None` instead of panicking, which lets decoders report truncated
/// input as an error.
///
/// # Example
///
/// ```
/// use clustermgmt_buffers::Reader;
///
/// let mut reader = Reader::new(b"{}");
/// assert_eq!(reader.peek(), Some(b'{'));
/// assert_eq!(reader.buf(2), Some(&b"{}"[..]));
/// assert_eq!(reader.buf(1), None);
/// assert_eq!(reader.peek(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    uint8: &'a [u8],
    x: usize,
}

impl<'a> Reader<'a> {
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Number of bytes left to read.
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Peeks at the current byte without advancing the cursor.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.uint8.get(self.x).copied()
    }

    /// Advances the cursor, stopping at the end of the data.
    pub fn skip(&mut self, length: usize) {
        self.x = (self.x + length).min(self.uint8.len());
    }

    /// Returns the next `size` bytes and advances the cursor, or `None` if
    /// fewer than `size` bytes are left.
    pub fn buf(&mut self, size: usize) -> Option<&'a [u8]> {
        let end = self.x.checked_add(size)?;
        let bin = self.uint8.get(self.x..end)?;
        self.x = end;
        Some(bin)
    }

    /// Returns `true` if the unread bytes start with `prefix`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// The unread bytes.
    pub fn rest(&self) -> &'a [u8] {
        &self.uint8[self.x..]
    }
}
