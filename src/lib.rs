//! # runpak
//!
//! A Rust extraction utility for `ENDILTLE` .pak archive containers.
//!
//! This library parses the sectioned PAK container format and extracts
//! its contents to a directory tree. Archives can nest: an entry whose
//! name carries no file extension is itself a complete container and is
//! unpacked recursively into a subdirectory.
//!
//! ## Features
//!
//! - Section scan driven by self-describing tag + length framing
//! - zlib decompression of stored payloads with exact-size validation
//! - Recursive extraction of nested archives
//! - Graceful "not this format" probing of arbitrary input buffers
//!
//! ## Example
//!
//! ```no_run
//! use runpak::{Outcome, PakExtractor};
//!
//! fn main() -> Result<(), runpak::PakError> {
//!     let buffer = std::fs::read("data.pak")?;
//!
//!     match PakExtractor::new(buffer, "data").extract()? {
//!         Outcome::Extracted { files } => println!("{files} files extracted"),
//!         Outcome::NotThisFormat => println!("not a PAK container"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod pak;

pub use cli::Cli;
pub use pak::{Outcome, PakError, PakExtractor};
