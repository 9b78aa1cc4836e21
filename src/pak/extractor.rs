//! High-level PAK extraction.

use std::fs;
use std::path::PathBuf;

use super::codec;
use super::error::PakError;
use super::parser::PakParser;
use super::structures::{FileEntry, Sections, TAG_FILE_LIST_HEADER, TAG_NAME_TABLE};

/// Terminal outcome of an extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The buffer was a PAK container; `files` leaf files were written,
    /// counting nested archives recursively.
    Extracted { files: u64 },
    /// The buffer does not begin with the `ENDILTLE` magic. Nothing was
    /// written; the input may simply be some other kind of file.
    NotThisFormat,
}

/// PAK archive extractor.
///
/// Walks a scanned archive and materializes it under a destination
/// directory: the active file list is joined with the name table, and
/// each entry either recurses into a nested archive or becomes a leaf
/// file on disk.
///
/// Extraction is depth-first and fail-fast: the first error aborts the
/// whole walk, and whatever was already written stays on disk.
pub struct PakExtractor {
    parser: PakParser,
    dest: PathBuf,
}

impl PakExtractor {
    pub fn new(buffer: Vec<u8>, dest: impl Into<PathBuf>) -> Self {
        Self {
            parser: PakParser::new(buffer),
            dest: dest.into(),
        }
    }

    /// Run the walk: magic probe, section scan, then entry extraction.
    ///
    /// The extractor is consumed; nothing is retained once extraction
    /// completes.
    pub fn extract(mut self) -> Result<Outcome, PakError> {
        if !self.parser.check_magic() {
            return Ok(Outcome::NotThisFormat);
        }
        let sections = self.parser.scan_sections()?;
        let files = self.extract_entries(&sections)?;
        Ok(Outcome::Extracted { files })
    }

    /// Join the file list with the name table and process every entry in
    /// declared order.
    fn extract_entries(&mut self, sections: &Sections) -> Result<u64, PakError> {
        let names = sections
            .name_table
            .as_ref()
            .ok_or(PakError::MissingSection(TAG_NAME_TABLE))?;
        let list = sections
            .active_file_list()
            .ok_or(PakError::MissingSection(TAG_FILE_LIST_HEADER))?;

        let mut files = 0;
        for entry in &list.entries {
            let name = names.resolve(entry.name_index as usize)?;
            if has_extension(name) {
                self.extract_leaf(entry, name)?;
                files += 1;
            } else {
                files += self.extract_nested(entry, name)?;
            }
        }
        Ok(files)
    }

    /// Carve the entry's byte range out of this archive and recurse into
    /// it as a complete container of its own, rooted in a subdirectory
    /// named after the entry.
    ///
    /// The sub-buffer is an exclusively-owned copy, never a view back
    /// into the parent. A payload that turns out not to carry the magic
    /// leaves an empty directory behind, which is not an error.
    fn extract_nested(&mut self, entry: &FileEntry, name: &str) -> Result<u64, PakError> {
        let cursor = self.parser.cursor_mut();
        cursor.seek(entry.file_offset);
        let nested = cursor.read_bytes(entry.size as usize)?;

        let sub_dest = self.dest.join(relative_path(name));
        fs::create_dir_all(&sub_dest)?;

        match PakExtractor::new(nested, sub_dest).extract()? {
            Outcome::Extracted { files } => Ok(files),
            Outcome::NotThisFormat => Ok(0),
        }
    }

    /// Write one leaf file, creating intermediate directories as needed.
    ///
    /// Entries with a declared unpacked size (the `PACKFSHD` list) are
    /// decompressed to exactly that size; entries from the `PACKFSLS`
    /// list are copied raw. Empty entries short-circuit to an empty file
    /// and never reach the codec.
    fn extract_leaf(&mut self, entry: &FileEntry, name: &str) -> Result<(), PakError> {
        let target = self.dest.join(relative_path(name));
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if entry.size == 0 {
            fs::write(&target, [])?;
            return Ok(());
        }

        let cursor = self.parser.cursor_mut();
        cursor.seek(entry.file_offset);
        let input = cursor.peek_bytes(entry.size as usize)?;

        match entry.unpacked_size {
            Some(unpacked) => {
                let data = codec::decompress(input, unpacked as usize)?;
                fs::write(&target, data)?;
            }
            None => fs::write(&target, input)?,
        }
        Ok(())
    }
}

/// The sole nested-vs-leaf discriminator the format offers: a `.`
/// followed by at least one non-separator character marks a leaf file.
/// There is no explicit flag in the binary layout.
fn has_extension(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'.' && matches!(bytes.get(i + 1), Some(&next) if next != b'/' && next != b'\\')
    })
}

/// Turn an archive-internal name into a relative path, splitting on
/// either separator flavor and dropping empty components.
fn relative_path(name: &str) -> PathBuf {
    name.split(['/', '\\']).filter(|c| !c.is_empty()).collect()
}
