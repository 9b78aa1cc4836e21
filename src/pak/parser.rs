//! Low-level PAK container parser.
//!
//! This module handles the section scan over the raw archive buffer.
//!
//! ## Parsing Strategy
//!
//! A PAK container is a flat sequence of sections, each framed as an
//! 8-byte ASCII tag, a 64-bit little-endian body length, and the body:
//!
//! 1. Probe the `ENDILTLE` magic at offset 0
//! 2. From offset 0, read tags and dispatch each to its section parser
//! 3. Stop at the end of the buffer or at the first unrecognized tag
//!
//! The declared body length is authoritative: after a section parser
//! runs, the cursor is forced to the declared end of that section no
//! matter how many bytes the parser actually consumed. A format revision
//! that appends trailing fields can therefore never desynchronize the
//! scan, and payload data following the section region is never mistaken
//! for sections (the first non-tag bytes halt the scan).

use super::cursor::ByteCursor;
use super::error::PakError;
use super::structures::*;

/// Registry of recognized section tags.
///
/// The tag space is closed: these six tags are the only ones dispatched,
/// and anything else acts as the format's de facto end-of-sections
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    EndMarker,
    Header,
    Toc,
    FileListShort,
    FileListHeader,
    NameTable,
}

impl SectionKind {
    /// Exact tag match; embedded trailing spaces are significant
    /// (`"PACKTOC "` is a different key from `"PACKTOC"`).
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            TAG_END_MARKER => Some(Self::EndMarker),
            TAG_PACK_HEADER => Some(Self::Header),
            TAG_PACK_TOC => Some(Self::Toc),
            TAG_FILE_LIST_SHORT => Some(Self::FileListShort),
            TAG_FILE_LIST_HEADER => Some(Self::FileListHeader),
            TAG_NAME_TABLE => Some(Self::NameTable),
            _ => None,
        }
    }
}

/// Low-level PAK container parser.
///
/// Owns the archive buffer through its [`ByteCursor`] and produces the
/// [`Sections`] record set that drives extraction. Typically used through
/// [`PakExtractor`](super::PakExtractor) rather than directly.
pub struct PakParser {
    cursor: ByteCursor,
}

impl PakParser {
    pub fn new(buffer: Vec<u8>) -> Self {
        Self {
            cursor: ByteCursor::new(buffer),
        }
    }

    /// Mutable access to the underlying cursor, used by the extractor to
    /// read payload ranges after the scan.
    pub fn cursor_mut(&mut self) -> &mut ByteCursor {
        &mut self.cursor
    }

    /// Probe the `ENDILTLE` magic tag at offset 0.
    ///
    /// A buffer shorter than the tag is simply not this format; the probe
    /// never reads past the end.
    pub fn check_magic(&mut self) -> bool {
        self.cursor.seek(0);
        let head = self.cursor.remaining();
        head.len() >= TAG_LEN && &head[..TAG_LEN] == MAGIC.as_bytes()
    }

    /// Scan all sections from the start of the buffer.
    ///
    /// Scanning ends cleanly at the end of the buffer, at the first
    /// unrecognized tag, or when fewer than a tag's worth of bytes remain
    /// (the payload region usually follows the sections). A later
    /// duplicate of a known tag overwrites the earlier record.
    ///
    /// # Errors
    ///
    /// Returns [`PakError::OutOfBounds`] if a recognized section declares
    /// more body than the buffer holds.
    pub fn scan_sections(&mut self) -> Result<Sections, PakError> {
        self.cursor.seek(0);
        let mut sections = Sections::default();

        while !self.cursor.is_eof() {
            if self.cursor.remaining().len() < TAG_LEN {
                break;
            }
            let tag = self.cursor.read_str(TAG_LEN)?;
            let Some(kind) = SectionKind::from_tag(&tag) else {
                break;
            };
            sections.insert(self.parse_section(kind)?);
        }

        Ok(sections)
    }

    /// Parse one section under the universal framing contract: read the
    /// body length, let the variant parser consume what it knows, then
    /// land exactly on the declared section end, discarding anything the
    /// parser left unread.
    fn parse_section(&mut self, kind: SectionKind) -> Result<Section, PakError> {
        let section_size = self.cursor.read_u64()?;
        let start = self.cursor.position();

        let section = match kind {
            SectionKind::EndMarker => Section::EndMarker(EndMarker::parse(&mut self.cursor)?),
            SectionKind::Header => Section::Header(PackHeader::parse(&mut self.cursor)?),
            SectionKind::Toc => Section::Toc(PackToc::parse(&mut self.cursor)?),
            SectionKind::FileListShort => {
                Section::FileListShort(FileList::parse_short(&mut self.cursor)?)
            }
            SectionKind::FileListHeader => {
                Section::FileListHeader(FileList::parse_header(&mut self.cursor)?)
            }
            SectionKind::NameTable => Section::NameTable(NameTable::parse(&mut self.cursor)?),
        };

        self.cursor.seek(start + section_size);
        Ok(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(tag: &str, body: &[u8]) -> Vec<u8> {
        assert_eq!(tag.len(), TAG_LEN);
        let mut out = Vec::new();
        out.extend_from_slice(tag.as_bytes());
        out.extend_from_slice(&(body.len() as u64).to_le_bytes());
        out.extend_from_slice(body);
        out
    }

    fn toc_body(block_size: u32) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(&block_size.to_le_bytes());
        body.extend_from_slice(&3u32.to_le_bytes()); // file_count
        body.extend_from_slice(&16u32.to_le_bytes()); // alignment
        body.extend_from_slice(&0u32.to_le_bytes());
        body
    }

    #[test]
    fn magic_probe_handles_short_and_wrong_buffers() {
        assert!(!PakParser::new(b"ENDI".to_vec()).check_magic());
        assert!(!PakParser::new(b"NOTAPACK".to_vec()).check_magic());
        assert!(!PakParser::new(Vec::new()).check_magic());
        assert!(PakParser::new(b"ENDILTLE".to_vec()).check_magic());
    }

    #[test]
    fn declared_size_governs_the_cursor_not_the_parser() {
        // The TOC body declares 24 bytes but the parser only reads 16;
        // the following section parses correctly iff the scan seeks to
        // the declared end.
        let mut toc = toc_body(0x800);
        toc.extend_from_slice(&[0xAA; 8]);

        let mut hedr = Vec::new();
        hedr.extend_from_slice(&0x10u32.to_le_bytes()); // header_size
        hedr.extend_from_slice(&0x40u32.to_le_bytes()); // data_offset
        hedr.extend_from_slice(&[0u8; 8]);

        let mut archive = section(TAG_END_MARKER, &[]);
        archive.extend(section(TAG_PACK_TOC, &toc));
        archive.extend(section(TAG_PACK_HEADER, &hedr));

        let sections = PakParser::new(archive).scan_sections().unwrap();
        assert_eq!(sections.toc.unwrap().block_size, 0x800);
        assert_eq!(sections.header.unwrap().data_offset, 0x40);
    }

    #[test]
    fn unknown_tag_halts_scanning_without_error() {
        let mut archive = section(TAG_END_MARKER, &[]);
        archive.extend(section("GENEEOF ", &[]));
        archive.extend(section(TAG_NAME_TABLE, &[0u8; 16]));

        let sections = PakParser::new(archive).scan_sections().unwrap();
        assert!(sections.end_marker.is_some());
        // Everything after the unknown tag is never inspected.
        assert!(sections.name_table.is_none());
    }

    #[test]
    fn later_duplicate_tag_overwrites_earlier_record() {
        let mut archive = section(TAG_PACK_TOC, &toc_body(0x200));
        archive.extend(section(TAG_PACK_TOC, &toc_body(0x400)));

        let sections = PakParser::new(archive).scan_sections().unwrap();
        assert_eq!(sections.toc.unwrap().block_size, 0x400);
    }

    #[test]
    fn payload_tail_shorter_than_a_tag_ends_the_scan() {
        let mut archive = section(TAG_END_MARKER, &[]);
        archive.extend_from_slice(b"xyz");
        assert!(PakParser::new(archive).scan_sections().is_ok());
    }

    #[test]
    fn truncated_section_body_is_out_of_bounds() {
        // PACKTOC claims a 16-byte body but the buffer ends after 4.
        let mut archive = Vec::new();
        archive.extend_from_slice(TAG_PACK_TOC.as_bytes());
        archive.extend_from_slice(&16u64.to_le_bytes());
        archive.extend_from_slice(&[0u8; 4]);
        assert!(matches!(
            PakParser::new(archive).scan_sections(),
            Err(PakError::OutOfBounds { .. })
        ));
    }
}
