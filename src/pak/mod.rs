//! PAK archive parsing and extraction.
//!
//! This module reads the `ENDILTLE` sectioned container format and
//! extracts its contents to a directory tree, recursively unpacking
//! nested archives and decompressing stored payloads.
//!
//! ## Architecture
//!
//! The module is organized into small, single-purpose pieces:
//!
//! - [`cursor`]: byte-buffer cursor with little-endian reads (`ByteCursor`)
//! - [`codec`]: boundary to the zlib compress/decompress primitive
//! - [`structures`]: section records and their per-variant parsers
//! - [`parser`]: magic probe and section scan ([`PakParser`])
//! - [`extractor`]: high-level extraction API ([`PakExtractor`])
//!
//! ## Format Overview
//!
//! A container starts with the 8-byte ASCII magic `ENDILTLE`, followed
//! by a flat sequence of sections, each framed as an 8-byte ASCII tag,
//! a 64-bit little-endian body length, and the body. Recognized tags:
//! `ENDILTLE`, `PACKHEDR`, `PACKTOC ` (trailing space), `PACKFSLS`,
//! `PACKFSHD`, `GENESTRT`. Any other tag ends the section region; the
//! raw payload data addressed by the file lists usually follows it.
//!
//! File tables reference names through the `GENESTRT` string table.
//! Whether an entry is a nested archive or a leaf file is decided purely
//! by its resolved name: no file extension means nested archive.
//!
//! ## Limitations
//!
//! - Extraction only; the container is never written or repacked
//! - No integrity verification beyond the zlib stream status and the
//!   declared unpacked size
//! - The whole archive is held in memory; no streaming

mod codec;
mod cursor;
mod error;
mod extractor;
mod parser;
mod structures;

pub use codec::{compress, decompress};
pub use cursor::ByteCursor;
pub use error::PakError;
pub use extractor::{Outcome, PakExtractor};
pub use parser::PakParser;
pub use structures::*;
