//! Fixed 128-byte SAUCE record layout and bounds-checked field readers.
//!
//! | Offset | Length | Field    | Type      |
//! |--------|--------|----------|-----------|
//! | 0      | 5      | ID       | "SAUCE"   |
//! | 5      | 2      | Version  | "00"      |
//! | 7      | 35     | Title    | char[35]  |
//! | 42     | 20     | Author   | char[20]  |
//! | 62     | 20     | Group    | char[20]  |
//! | 82     | 8      | Date     | CCYYMMDD  |
//! | 90     | 4      | FileSize | u32 LE    |
//! | 94     | 1      | DataType | u8        |
//! | 95     | 1      | FileType | u8        |
//! | 96     | 2      | TInfo1   | u16 LE    |
//! | 98     | 2      | TInfo2   | u16 LE    |
//! | 100    | 2      | TInfo3   | u16 LE    |
//! | 102    | 2      | TInfo4   | u16 LE    |
//! | 104    | 1      | Comments | u8        |
//! | 105    | 1      | TFlags   | u8        |
//! | 106    | 22     | TInfoS   | char[22]  |
//!
//! Every read is relative to the located SAUCE offset.  A field whose range
//! runs past the end of the buffer decodes to its zero value.

use byteorder::{ByteOrder, LittleEndian};

use crate::scan;

pub const SAUCE_ID:      &[u8; 5] = b"SAUCE";
pub const SAUCE_VERSION: &[u8; 2] = b"00";
pub const COMNT_ID:      &[u8; 5] = b"COMNT";
/// Total length of the fixed record in bytes.
pub const RECORD_SIZE:   usize = 128;
/// Width of one comment line in bytes.
pub const COMNT_LINE_SIZE: usize = 64;
/// Maximum number of comment lines a record can declare.
pub const COMNT_MAX_LINES: usize = 255;

// ── Field ranges ──────────────────────────────────────────────────────────────

/// A byte range relative to the start of the SAUCE record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub start: usize,
    pub len:   usize,
}

impl Field {
    const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub const fn end(self) -> usize {
        self.start + self.len
    }
}

pub const ID:        Field = Field::new(0, 5);
pub const VERSION:   Field = Field::new(5, 2);
pub const TITLE:     Field = Field::new(7, 35);
pub const AUTHOR:    Field = Field::new(42, 20);
pub const GROUP:     Field = Field::new(62, 20);
pub const DATE:      Field = Field::new(82, 8);
pub const FILE_SIZE: Field = Field::new(90, 4);
pub const DATA_TYPE: Field = Field::new(94, 1);
pub const FILE_TYPE: Field = Field::new(95, 1);
pub const TINFO1:    Field = Field::new(96, 2);
pub const TINFO2:    Field = Field::new(98, 2);
pub const TINFO3:    Field = Field::new(100, 2);
pub const TINFO4:    Field = Field::new(102, 2);
pub const COMMENTS:  Field = Field::new(104, 1);
pub const TFLAGS:    Field = Field::new(105, 1);
pub const TINFOS:    Field = Field::new(106, 22);

// ── Byte accessors ────────────────────────────────────────────────────────────

/// Slice `field` out of `buf` relative to `offset`, or `None` when the range
/// does not fit inside the buffer.
pub fn field(buf: &[u8], offset: usize, field: Field) -> Option<&[u8]> {
    let start = offset.checked_add(field.start)?;
    let end   = offset.checked_add(field.end())?;
    buf.get(start..end)
}

pub fn read_u8(buf: &[u8], offset: usize, f: Field) -> u8 {
    field(buf, offset, f).and_then(|b| b.first().copied()).unwrap_or(0)
}

pub fn read_u16(buf: &[u8], offset: usize, f: Field) -> u16 {
    field(buf, offset, f).map(LittleEndian::read_u16).unwrap_or(0)
}

pub fn read_u32(buf: &[u8], offset: usize, f: Field) -> u32 {
    field(buf, offset, f).map(LittleEndian::read_u32).unwrap_or(0)
}

/// Copy a fixed-width byte field; out-of-range reads give all zeros.
pub fn read_array<const N: usize>(buf: &[u8], offset: usize, f: Field) -> [u8; N] {
    let mut out = [0u8; N];
    if let Some(src) = field(buf, offset, f) {
        let n = src.len().min(N);
        out[..n].copy_from_slice(&src[..n]);
    }
    out
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Raw field values of one SAUCE record, copied out of the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Offset of the record inside the source buffer.
    pub offset:    usize,
    pub id:        [u8; 5],
    pub version:   [u8; 2],
    pub title:     [u8; 35],
    pub author:    [u8; 20],
    pub group:     [u8; 20],
    pub date:      [u8; 8],
    pub file_size: u32,
    pub data_type: u8,
    pub file_type: u8,
    pub tinfo1:    u16,
    pub tinfo2:    u16,
    pub tinfo3:    u16,
    pub tinfo4:    u16,
    /// Declared number of comment lines.
    pub comments:  u8,
    pub tflags:    u8,
    pub tinfos:    [u8; 22],
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            offset:    0,
            id:        [0; 5],
            version:   [0; 2],
            title:     [0; 35],
            author:    [0; 20],
            group:     [0; 20],
            date:      [0; 8],
            file_size: 0,
            data_type: 0,
            file_type: 0,
            tinfo1:    0,
            tinfo2:    0,
            tinfo3:    0,
            tinfo4:    0,
            comments:  0,
            tflags:    0,
            tinfos:    [0; 22],
        }
    }
}

impl Layout {
    /// Locate the SAUCE record in `buf` and read every fixed field.
    /// Returns `None` when no record is present.
    pub fn extract(buf: &[u8]) -> Option<Self> {
        scan::index(buf).map(|offset| Self::read_at(buf, offset))
    }

    /// Read every fixed field relative to `offset`.
    pub fn read_at(buf: &[u8], offset: usize) -> Self {
        Self {
            offset,
            id:        read_array(buf, offset, ID),
            version:   read_array(buf, offset, VERSION),
            title:     read_array(buf, offset, TITLE),
            author:    read_array(buf, offset, AUTHOR),
            group:     read_array(buf, offset, GROUP),
            date:      read_array(buf, offset, DATE),
            file_size: read_u32(buf, offset, FILE_SIZE),
            data_type: read_u8(buf, offset, DATA_TYPE),
            file_type: read_u8(buf, offset, FILE_TYPE),
            tinfo1:    read_u16(buf, offset, TINFO1),
            tinfo2:    read_u16(buf, offset, TINFO2),
            tinfo3:    read_u16(buf, offset, TINFO3),
            tinfo4:    read_u16(buf, offset, TINFO4),
            comments:  read_u8(buf, offset, COMMENTS),
            tflags:    read_u8(buf, offset, TFLAGS),
            tinfos:    read_array(buf, offset, TINFOS),
        }
    }

    /// Font name from TInfoS with every NUL byte dropped.
    pub fn font(&self) -> String {
        let bytes: Vec<u8> = self.tinfos.iter().copied().filter(|&b| b != 0).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

/// Text of a fixed-width field, without padding.
pub fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_matches(|c: char| c.is_whitespace() || c == '\0')
        .to_string()
}
