use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::hooks::Hooks;
use crate::{
    CursorResult, EatOptions, Eaten, Endianness, Exhausted, IntOptions, IntWidth, IntoSeparator, Separator,
};

/// A read cursor over an owned byte buffer which keeps growing as input arrives.
///
/// The offset counts the bytes already consumed from the start of the whole buffer, across
/// every `append`. It always stays within `0..=len`.
///
/// Text is encoded and decoded as UTF-8 throughout, invalid sequences being replaced by U+FFFD.
#[derive(Debug, Default)]
pub struct ByteCursor {
    buffer: Vec<u8>,
    offset: usize,
    endianness: Endianness,
    finished: bool,
    hooks: Hooks,
}

impl ByteCursor {
    /// Creates an empty big-endian cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a big-endian cursor seeded with `data`.
    pub fn from_bytes(data: impl AsRef<[u8]>) -> Self {
        Self::with_endianness(data, Endianness::Big)
    }

    /// Creates a cursor seeded with `data`, decoding integers in the given byte order by default.
    pub fn with_endianness(data: impl AsRef<[u8]>, endianness: Endianness) -> Self {
        Self {
            buffer: data.as_ref().to_vec(),
            endianness,
            ..Self::default()
        }
    }

    /// Returns the default byte order used for integer decoding.
    #[inline]
    pub const fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Sets the default byte order from a token such as `le`, `little`, `BE` or `big`.
    ///
    /// On error the current byte order is left untouched.
    pub fn set_endianness(&mut self, value: &str) -> CursorResult<&mut Self> {
        self.endianness = Endianness::parse(value)?;
        Ok(self)
    }

    /// Sets the default byte order.
    pub fn set_byte_order(&mut self, endianness: Endianness) -> &mut Self {
        self.endianness = endianness;
        self
    }

    /// Registers a hook called with the bytes of every subsequent `append`.
    pub fn on_append<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut(&[u8]) + Send + 'static,
    {
        self.hooks.push_append(alloc::boxed::Box::new(hook));
        self
    }

    /// Registers a hook called when input is finished.
    pub fn on_end<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut() + Send + 'static,
    {
        self.hooks.push_end(alloc::boxed::Box::new(hook));
        self
    }

    /// Registers a hook called whenever a read asks for more bytes than are left.
    pub fn on_exhausted<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut(Exhausted) + Send + 'static,
    {
        self.hooks.push_exhausted(alloc::boxed::Box::new(hook));
        self
    }

    /// Appends bytes (or UTF-8 text) at the end of the buffer.
    ///
    /// The offset does not move.
    pub fn append(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        let start = self.buffer.len();
        self.buffer.extend_from_slice(data.as_ref());

        let appended = &self.buffer[start..];
        trace!(len = appended.len(), total = self.buffer.len(), "Appended bytes");
        self.hooks.notify_append(appended);

        self
    }

    /// Signals that no more input will arrive.
    pub fn finish(&mut self) -> &mut Self {
        self.finished = true;
        trace!(total = self.buffer.len(), "Input finished");
        self.hooks.notify_end();
        self
    }

    /// Appends a last piece of input, then signals that no more input will arrive.
    pub fn finish_with(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.append(data).finish()
    }

    /// Returns `true` once [`ByteCursor::finish`] has been called.
    #[inline]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consumes up to `amount` bytes and returns an owned copy of them.
    ///
    /// Returns `None` when nothing is left or `amount` is zero. When fewer than `amount` bytes
    /// remain, the exhausted hooks are notified and the shorter tail is returned.
    pub fn eat(&mut self, amount: usize) -> Option<Vec<u8>> {
        let range = self.consume(amount)?;
        Some(self.buffer[range].to_vec())
    }

    /// Consumes up to `amount` bytes and returns them raw or decoded, according to `options`.
    pub fn eat_with(&mut self, amount: usize, options: EatOptions) -> CursorResult<Option<Eaten>> {
        match options {
            EatOptions::Bytes => Ok(self.eat(amount).map(Eaten::Bytes)),
            EatOptions::Integer(options) => Ok(self.eat_int(amount, options)?.map(Eaten::Int)),
        }
    }

    /// Consumes `amount` bytes and decodes them as an integer.
    ///
    /// `amount` must be 1, 2 or 4, whatever the buffer holds. Returns `None` when nothing is left.
    /// On error the offset does not move.
    pub fn eat_int(&mut self, amount: usize, options: IntOptions) -> CursorResult<Option<i64>> {
        let width = IntWidth::from_amount(amount)?;
        let endianness = options.endian.unwrap_or(self.endianness);

        if self.remaining() == 0 {
            return Ok(None);
        }

        ensure_remaining!(ctx: "ByteCursor::eat_int", in: self, size: width.size());

        let Some(range) = self.consume(width.size()) else {
            return Ok(None);
        };

        Ok(width.decode(&self.buffer[range], options.signed, endianness))
    }

    /// Consumes a two's complement integer of `amount` bytes.
    pub fn eat_signed_int(&mut self, amount: usize, endian: Option<Endianness>) -> CursorResult<Option<i64>> {
        self.eat_int(amount, IntOptions { signed: true, endian })
    }

    /// Consumes an unsigned integer of `amount` bytes.
    pub fn eat_unsigned_int(&mut self, amount: usize, endian: Option<Endianness>) -> CursorResult<Option<i64>> {
        self.eat_int(amount, IntOptions { signed: false, endian })
    }

    /// Consumes one byte, `true` unless it is zero. An empty cursor yields `false`.
    pub fn eat_bool(&mut self) -> bool {
        matches!(self.eat_unsigned_int(1, None), Ok(Some(value)) if value != 0)
    }

    /// Like [`ByteCursor::eat`], decoding the bytes as UTF-8 text.
    pub fn eat_text(&mut self, amount: usize) -> Option<String> {
        let range = self.consume(amount)?;
        Some(decode_text(&self.buffer[range]))
    }

    /// Returns the current offset.
    #[inline]
    pub const fn position(&self) -> usize {
        self.offset
    }

    /// Moves the offset back by `amount` bytes, stopping at the start of the buffer.
    ///
    /// `None` or `Some(0)` rewinds all the way to the start.
    pub fn rewind(&mut self, amount: Option<usize>) -> &mut Self {
        self.offset = match amount {
            None | Some(0) => 0,
            Some(amount) => self.offset.saturating_sub(amount),
        };
        self
    }

    /// Returns what [`ByteCursor::eat`] would, leaving the offset where it was.
    pub fn peek(&mut self, amount: usize) -> Option<Vec<u8>> {
        self.restoring_offset(|cursor| cursor.eat(amount))
    }

    /// Returns what [`ByteCursor::eat_with`] would, leaving the offset where it was.
    pub fn peek_with(&mut self, amount: usize, options: EatOptions) -> CursorResult<Option<Eaten>> {
        self.restoring_offset(|cursor| cursor.eat_with(amount, options))
    }

    /// Returns what [`ByteCursor::eat_int`] would, leaving the offset where it was.
    pub fn peek_int(&mut self, amount: usize, options: IntOptions) -> CursorResult<Option<i64>> {
        self.restoring_offset(|cursor| cursor.eat_int(amount, options))
    }

    /// Returns what [`ByteCursor::eat_text`] would, leaving the offset where it was.
    pub fn peek_text(&mut self, amount: usize) -> Option<String> {
        self.restoring_offset(|cursor| cursor.eat_text(amount))
    }

    /// Consumes bytes up to and including `separator`, returning them as text without the separator.
    ///
    /// When the separator never shows up, everything left is returned. Returns `None` when nothing
    /// is left to consume.
    pub fn eat_delimited(&mut self, separator: impl IntoSeparator) -> CursorResult<Option<String>> {
        let separator = separator.into_separator()?;
        Ok(self.eat_until(separator))
    }

    /// Consumes a NUL-terminated string. See [`ByteCursor::eat_delimited`].
    pub fn eat_string(&mut self) -> Option<String> {
        self.eat_until(Separator::NUL)
    }

    /// Consumes everything left. Returns `None` when nothing is left.
    pub fn eat_remaining(&mut self) -> Option<Vec<u8>> {
        let start = self.offset;
        let end = self.buffer.len();
        self.offset = end;

        if start >= end {
            return None;
        }

        Some(self.buffer[start..end].to_vec())
    }

    /// Consumes everything left in chunks of `chunk_size` bytes, each returned according to `options`.
    ///
    /// The last chunk may be shorter. A `chunk_size` of zero returns the remainder as a single raw chunk.
    /// On error nothing is consumed: the offset goes back to where it was before the call.
    pub fn eat_chunks(&mut self, chunk_size: usize, options: EatOptions) -> CursorResult<Vec<Eaten>> {
        if chunk_size == 0 {
            return Ok(self.eat_remaining().map(Eaten::Bytes).into_iter().collect());
        }

        let start = self.offset;
        let mut chunks = Vec::new();

        loop {
            match self.eat_with(chunk_size, options) {
                Ok(Some(chunk)) => chunks.push(chunk),
                Ok(None) => return Ok(chunks),
                Err(e) => {
                    self.offset = start;
                    return Err(e);
                }
            }
        }
    }

    /// Returns the whole buffer, including the bytes already consumed.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns the bytes not consumed yet.
    #[inline]
    pub fn remaining_slice(&self) -> &[u8] {
        let idx = core::cmp::min(self.offset, self.buffer.len());
        &self.buffer[idx..]
    }

    /// Returns the number of bytes not consumed yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// Returns the length of the whole buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if nothing was ever appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the whole buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Moves the offset forward by at most `amount` bytes, returning the range covered.
    fn consume(&mut self, amount: usize) -> Option<Range<usize>> {
        let len = self.buffer.len();
        let start = self.offset;

        if start >= len || amount == 0 {
            return None;
        }

        let wanted_end = start.saturating_add(amount);

        let end = if wanted_end > len {
            let available = len - start;
            trace!(requested = amount, available, "Buffer exhausted");
            self.hooks.notify_exhausted(Exhausted {
                requested: amount,
                available,
            });
            len
        } else {
            wanted_end
        };

        self.offset = end;

        Some(start..end)
    }

    fn eat_until(&mut self, separator: Separator) -> Option<String> {
        let start = self.offset;
        let len = self.buffer.len();

        if start >= len {
            return None;
        }

        let (text_end, next_offset) = match self.buffer[start..].iter().position(|&b| b == separator.byte()) {
            Some(idx) => (start + idx, start + idx + 1),
            None => (len, len),
        };

        self.offset = next_offset;

        Some(decode_text(&self.buffer[start..text_end]))
    }

    // Restores the offset by however many bytes `f` actually consumed, which may be less than requested.
    fn restoring_offset<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let start = self.offset;
        let value = f(self);
        self.offset = start;
        value
    }
}

impl From<Vec<u8>> for ByteCursor {
    fn from(buffer: Vec<u8>) -> Self {
        Self {
            buffer,
            ..Self::default()
        }
    }
}

impl From<&[u8]> for ByteCursor {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for ByteCursor {
    fn from(text: &str) -> Self {
        Self::from_bytes(text)
    }
}

impl From<String> for ByteCursor {
    fn from(text: String) -> Self {
        Self::from(text.into_bytes())
    }
}

fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(feature = "std")]
impl std::io::Read for ByteCursor {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let src = self.remaining_slice();
        let n_to_copy = core::cmp::min(buf.len(), src.len());
        buf[..n_to_copy].copy_from_slice(&src[..n_to_copy]);
        self.offset += n_to_copy;
        Ok(n_to_copy)
    }
}

#[cfg(feature = "std")]
impl std::io::Write for ByteCursor {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
