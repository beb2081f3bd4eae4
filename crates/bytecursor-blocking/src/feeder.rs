use core::fmt;
use std::io::{self, Read};

use bytecursor::ByteCursor;

/// Default number of bytes requested from the stream on each read.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Pulls bytes from a blocking reader into a [`ByteCursor`].
pub struct Feeder<S> {
    stream: S,
    cursor: ByteCursor,
    chunk_size: usize,
}

impl<S> Feeder<S> {
    /// Feeds a fresh, empty cursor from `stream`.
    pub fn new(stream: S) -> Self {
        Self::new_with_cursor(stream, ByteCursor::new())
    }

    /// Feeds an existing cursor, keeping its contents, offset and hooks.
    pub fn new_with_cursor(stream: S, cursor: ByteCursor) -> Self {
        Self {
            stream,
            cursor,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Sets how many bytes are requested from the stream on each read. Zero is bumped to one.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Returns how many bytes are requested from the stream on each read.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Gives back the stream and the cursor.
    pub fn into_inner(self) -> (S, ByteCursor) {
        (self.stream, self.cursor)
    }

    /// Borrows the stream and the cursor.
    pub fn get_inner(&self) -> (&S, &ByteCursor) {
        (&self.stream, &self.cursor)
    }

    /// Mutably borrows the stream and the cursor at the same time.
    pub fn get_inner_mut(&mut self) -> (&mut S, &mut ByteCursor) {
        (&mut self.stream, &mut self.cursor)
    }

    /// Returns the cursor being fed.
    pub fn cursor(&self) -> &ByteCursor {
        &self.cursor
    }

    /// Returns the cursor being fed, for reading.
    pub fn cursor_mut(&mut self) -> &mut ByteCursor {
        &mut self.cursor
    }
}

impl<S> Feeder<S>
where
    S: Read,
{
    /// Performs a single read from the stream and appends the result to the cursor.
    ///
    /// Returns the number of bytes read, zero meaning end of stream (in which case nothing is appended).
    pub fn fill(&mut self) -> io::Result<usize> {
        let mut chunk = vec![0u8; self.chunk_size];

        let len = loop {
            match self.stream.read(&mut chunk) {
                Ok(len) => break len,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };

        if len > 0 {
            trace!(len, "Read from stream");
            self.cursor.append(&chunk[..len]);
        }

        Ok(len)
    }

    /// Reads until at least `length` unconsumed bytes are available in the cursor.
    pub fn fill_to(&mut self, length: usize) -> io::Result<()> {
        while self.cursor.remaining() < length {
            let len = self.fill()?;

            // Handle EOF
            if len == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "not enough bytes"));
            }
        }

        Ok(())
    }

    /// Accumulates at least `length` bytes and consumes exactly `length` of them.
    pub fn eat_exact(&mut self, length: usize) -> io::Result<Vec<u8>> {
        self.fill_to(length)?;
        Ok(self.cursor.eat(length).unwrap_or_default())
    }

    /// Reads the stream to its end, then finishes the cursor.
    ///
    /// Returns the total number of bytes read.
    pub fn drain(&mut self) -> io::Result<usize> {
        let mut total = 0;

        loop {
            let len = self.fill()?;

            if len == 0 {
                break;
            }

            total += len;
        }

        debug!(total, "Reached end of stream");
        self.cursor.finish();

        Ok(total)
    }
}

impl<S> fmt::Debug for Feeder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feeder")
            .field("cursor", &self.cursor)
            .field("chunk_size", &self.chunk_size)
            .finish_non_exhaustive()
    }
}
