use thiserror::Error;

/// Errors raised while parsing or extracting a PAK container.
///
/// A buffer whose first bytes are not the `ENDILTLE` magic is *not* an
/// error: that case is reported as [`crate::pak::Outcome::NotThisFormat`]
/// so callers can probe arbitrary inputs.
#[derive(Error, Debug)]
pub enum PakError {
    /// A read would run past the end of the archive buffer.
    #[error("read of {wanted} bytes at offset {offset} exceeds buffer length {len}")]
    OutOfBounds {
        offset: u64,
        wanted: usize,
        len: usize,
    },

    /// A section required for extraction was absent after scanning.
    #[error("required section {0} not found in archive")]
    MissingSection(&'static str),

    /// A file entry's name index has no corresponding name table entry.
    #[error("name index {index} out of range (name table holds {count} entries)")]
    InvalidIndex { index: usize, count: usize },

    /// The compression primitive reported failure or produced a payload
    /// whose length does not match the declared unpacked size.
    #[error("codec failure: {0}")]
    Codec(String),

    /// Surfaced from the filesystem collaborator, never retried.
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}
