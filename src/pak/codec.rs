//! Boundary to the zlib compression primitive.
//!
//! The container stores payloads as raw zlib streams and records the
//! decompressed length in the file table, so decompression is driven by
//! an exact expected output size rather than a guess. Beyond the stream
//! status and that length check the format carries no integrity data:
//! corruption that still decodes to the right length goes undetected.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use super::error::PakError;

/// Compress `data` as a zlib stream at maximum compression.
///
/// The output buffer is sized by a worst-case estimate up front; a stream
/// that somehow exceeds it is reported as a codec failure rather than
/// grown and retried.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, PakError> {
    let bound = data.len() + data.len() / 1000 + 64;
    let mut out = Vec::with_capacity(bound);
    let status = Compress::new(Compression::best(), true)
        .compress_vec(data, &mut out, FlushCompress::Finish)
        .map_err(|e| PakError::Codec(e.to_string()))?;
    if status != Status::StreamEnd {
        return Err(PakError::Codec(
            "compressed stream exceeded the estimated output bound".into(),
        ));
    }
    Ok(out)
}

/// Decompress a zlib stream whose decompressed length is known exactly.
///
/// `expected_len` comes from the file table's unpacked-size field. The
/// stream must terminate within that many bytes and produce exactly that
/// many, otherwise the payload is rejected.
pub fn decompress(data: &[u8], expected_len: usize) -> Result<Vec<u8>, PakError> {
    let mut out = Vec::with_capacity(expected_len);
    let status = Decompress::new(true)
        .decompress_vec(data, &mut out, FlushDecompress::Finish)
        .map_err(|e| PakError::Codec(e.to_string()))?;
    if status != Status::StreamEnd {
        return Err(PakError::Codec(
            "decompressed stream did not terminate at the declared size".into(),
        ));
    }
    if out.len() != expected_len {
        return Err(PakError::Codec(format!(
            "decompressed {} bytes, file table declared {}",
            out.len(),
            expected_len
        )));
    }
    Ok(out)
}
