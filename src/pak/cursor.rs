//! In-memory byte cursor for binary parsing.
//!
//! All multi-byte reads are little-endian, matching the PAK container
//! layout. Seeks are unchecked: the format routinely declares section
//! sizes that skip past trailing padding, so bounds are enforced lazily
//! by whichever read happens next.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

use super::error::PakError;

/// Owned byte buffer with a mutable read position.
pub struct ByteCursor {
    inner: Cursor<Vec<u8>>,
}

impl ByteCursor {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(data),
        }
    }

    fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    fn out_of_bounds(&self, offset: u64, wanted: usize) -> PakError {
        PakError::OutOfBounds {
            offset,
            wanted,
            len: self.len(),
        }
    }

    /// Current read position in bytes from the start of the buffer.
    pub fn position(&self) -> u64 {
        self.inner.position()
    }

    /// Set the read position directly.
    ///
    /// No bounds check happens here; a position past the end simply makes
    /// the next read fail with [`PakError::OutOfBounds`] and makes
    /// [`is_eof`](Self::is_eof) report true.
    pub fn seek(&mut self, pos: u64) {
        self.inner.set_position(pos);
    }

    /// True once the position is at or past the end of the buffer.
    pub fn is_eof(&self) -> bool {
        self.inner.position() >= self.len() as u64
    }

    /// Zero-copy view of the buffer from the current position to the end.
    ///
    /// Used to hand payload ranges to the codec and to the output writer
    /// without an intermediate allocation.
    pub fn remaining(&self) -> &[u8] {
        let data = self.inner.get_ref();
        let pos = (self.inner.position() as usize).min(data.len());
        &data[pos..]
    }

    /// Borrow `n` bytes at the current position without copying or
    /// advancing. This is the input path for the codec boundary and for
    /// raw payload writes.
    pub fn peek_bytes(&self, n: usize) -> Result<&[u8], PakError> {
        let rest = self.remaining();
        if rest.len() < n {
            return Err(self.out_of_bounds(self.position(), n));
        }
        Ok(&rest[..n])
    }

    /// Read a little-endian `u32`, advancing the position by 4.
    pub fn read_u32(&mut self) -> Result<u32, PakError> {
        let at = self.position();
        self.inner
            .read_u32::<LittleEndian>()
            .map_err(|_| self.out_of_bounds(at, 4))
    }

    /// Read a little-endian `u64`, advancing the position by 8.
    pub fn read_u64(&mut self) -> Result<u64, PakError> {
        let at = self.position();
        self.inner
            .read_u64::<LittleEndian>()
            .map_err(|_| self.out_of_bounds(at, 8))
    }

    /// Read `n` bytes into an owned buffer.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, PakError> {
        let at = self.position();
        let mut buf = vec![0u8; n];
        self.inner
            .read_exact(&mut buf)
            .map_err(|_| self.out_of_bounds(at, n))?;
        Ok(buf)
    }

    /// Read a fixed-width ASCII field of `n` bytes as text.
    ///
    /// Section tags embed significant trailing spaces, so nothing is
    /// trimmed. Non-ASCII bytes decode lossily and will simply fail any
    /// exact tag match downstream.
    pub fn read_str(&mut self, n: usize) -> Result<String, PakError> {
        let bytes = self.read_bytes(n)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read text up to a null terminator or the end of the buffer,
    /// excluding the terminator. Consumes the terminator when present.
    pub fn read_cstring(&mut self) -> String {
        let rest = self.remaining();
        let end = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
        let text = String::from_utf8_lossy(&rest[..end]).into_owned();
        let consumed = if end < rest.len() { end + 1 } else { end };
        self.seek(self.position() + consumed as u64);
        text
    }
}
