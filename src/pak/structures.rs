use super::cursor::ByteCursor;
use super::error::PakError;

/// Magic tag identifying the container, at offset 0.
pub const MAGIC: &str = "ENDILTLE";

/// Section tags are exactly 8 ASCII bytes; shorter names are padded with
/// significant trailing spaces.
pub const TAG_LEN: usize = 8;

pub const TAG_END_MARKER: &str = "ENDILTLE";
pub const TAG_PACK_HEADER: &str = "PACKHEDR";
pub const TAG_PACK_TOC: &str = "PACKTOC ";
pub const TAG_FILE_LIST_SHORT: &str = "PACKFSLS";
pub const TAG_FILE_LIST_HEADER: &str = "PACKFSHD";
pub const TAG_NAME_TABLE: &str = "GENESTRT";

/// `ENDILTLE` section. Declares a zero-length body in every observed
/// container; any reserved body bytes are skipped by the size-restore.
#[derive(Debug)]
pub struct EndMarker;

impl EndMarker {
    pub fn parse(_cursor: &mut ByteCursor) -> Result<Self, PakError> {
        Ok(Self)
    }
}

/// `PACKHEDR` fixed metadata - 16-byte body, not consumed by extraction.
#[derive(Debug)]
pub struct PackHeader {
    pub header_size: u32,
    pub data_offset: u32,
    pub reserved: [u32; 2],
}

impl PackHeader {
    pub fn parse(cursor: &mut ByteCursor) -> Result<Self, PakError> {
        Ok(Self {
            header_size: cursor.read_u32()?,
            data_offset: cursor.read_u32()?,
            reserved: [cursor.read_u32()?, cursor.read_u32()?],
        })
    }
}

/// `PACKTOC ` fixed metadata - 16-byte body, not consumed by extraction.
/// The counts that actually drive extraction come from the file lists.
#[derive(Debug)]
pub struct PackToc {
    pub block_size: u32,
    pub file_count: u32,
    pub alignment: u32,
    pub reserved: u32,
}

impl PackToc {
    pub fn parse(cursor: &mut ByteCursor) -> Result<Self, PakError> {
        Ok(Self {
            block_size: cursor.read_u32()?,
            file_count: cursor.read_u32()?,
            alignment: cursor.read_u32()?,
            reserved: cursor.read_u32()?,
        })
    }
}

/// One archived item: where it sits in the archive buffer and how big it
/// is. `unpacked_size` is present exactly when the entry came from the
/// `PACKFSHD` list and is therefore stored zlib-compressed.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name_index: u32,
    pub file_offset: u64,
    pub size: u64,
    pub unpacked_size: Option<u64>,
}

/// Ordered file table from either list section.
#[derive(Debug)]
pub struct FileList {
    pub entries: Vec<FileEntry>,
}

impl FileList {
    /// Parse a `PACKFSLS` body: `count, reserved`, then 24-byte entries
    /// without an unpacked size. Entries are stored raw.
    pub fn parse_short(cursor: &mut ByteCursor) -> Result<Self, PakError> {
        let count = cursor.read_u32()?;
        let _reserved = cursor.read_u32()?;
        let mut entries = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let name_index = cursor.read_u32()?;
            let _reserved = cursor.read_u32()?;
            entries.push(FileEntry {
                name_index,
                file_offset: cursor.read_u64()?,
                size: cursor.read_u64()?,
                unpacked_size: None,
            });
        }
        Ok(Self { entries })
    }

    /// Parse a `PACKFSHD` body: `count, entry_size`, then 32-byte entries
    /// carrying the decompressed size.
    pub fn parse_header(cursor: &mut ByteCursor) -> Result<Self, PakError> {
        let count = cursor.read_u32()?;
        let _entry_size = cursor.read_u32()?;
        let mut entries = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let name_index = cursor.read_u32()?;
            let _reserved = cursor.read_u32()?;
            entries.push(FileEntry {
                name_index,
                file_offset: cursor.read_u64()?,
                size: cursor.read_u64()?,
                unpacked_size: Some(cursor.read_u64()?),
            });
        }
        Ok(Self { entries })
    }
}

/// `GENESTRT` name table: small integer indices to relative path strings.
///
/// The body is `count, reserved, offset_table_size, blob_size` followed by
/// `count` 32-bit offsets. Each offset is relative to the string blob,
/// which starts `offset_table_size` bytes after the section body. Strings
/// are null-terminated.
#[derive(Debug)]
pub struct NameTable {
    names: Vec<String>,
}

impl NameTable {
    /// Parse the body, resolving every offset into a decoded string
    /// immediately. Each resolution seeks into the blob and back, so the
    /// cursor always ends up exactly past the offset table.
    pub fn parse(cursor: &mut ByteCursor) -> Result<Self, PakError> {
        let body_start = cursor.position();
        let count = cursor.read_u32()?;
        let _reserved = cursor.read_u32()?;
        let offset_table_size = cursor.read_u32()?;
        let _blob_size = cursor.read_u32()?;
        let blob_base = body_start + offset_table_size as u64;

        let mut names = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let offset = cursor.read_u32()?;
            let resume = cursor.position();
            cursor.seek(blob_base + offset as u64);
            names.push(cursor.read_cstring());
            cursor.seek(resume);
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve an entry's name index into its relative path string.
    pub fn resolve(&self, index: usize) -> Result<&str, PakError> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or(PakError::InvalidIndex {
                index,
                count: self.names.len(),
            })
    }
}

/// A parsed section record, tagged by the section kind that produced it.
#[derive(Debug)]
pub enum Section {
    EndMarker(EndMarker),
    Header(PackHeader),
    Toc(PackToc),
    FileListShort(FileList),
    FileListHeader(FileList),
    NameTable(NameTable),
}

/// The record set collected by a section scan: one slot per known tag.
/// Inserting a record for an occupied slot overwrites it, so a duplicate
/// tag later in the archive wins.
#[derive(Debug, Default)]
pub struct Sections {
    pub end_marker: Option<EndMarker>,
    pub header: Option<PackHeader>,
    pub toc: Option<PackToc>,
    pub file_list_short: Option<FileList>,
    pub file_list_header: Option<FileList>,
    pub name_table: Option<NameTable>,
}

impl Sections {
    pub fn insert(&mut self, section: Section) {
        match section {
            Section::EndMarker(s) => self.end_marker = Some(s),
            Section::Header(s) => self.header = Some(s),
            Section::Toc(s) => self.toc = Some(s),
            Section::FileListShort(s) => self.file_list_short = Some(s),
            Section::FileListHeader(s) => self.file_list_header = Some(s),
            Section::NameTable(s) => self.name_table = Some(s),
        }
    }

    /// The file list that drives extraction. The `PACKFSHD` variant
    /// carries decompression metadata and takes precedence when both
    /// lists are present.
    pub fn active_file_list(&self) -> Option<&FileList> {
        self.file_list_header
            .as_ref()
            .or(self.file_list_short.as_ref())
    }
}
