//! High-level [`Record`] API, the primary embedding surface.
//!
//! ```no_run
//! use sauce::record::Record;
//!
//! let data = std::fs::read("art.ans")?;
//! let record = sauce::decode(&data);
//! if record.valid() {
//!     println!("{} by {}", record.title, record.author);
//! }
//! let text = sauce::trim(&data);
//! # let _ = (text, Record::default());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::{self, Read};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::comment::Comment;
use crate::date::Dates;
use crate::filetype::{self, Datas, Files, Infos};
use crate::humanize::{self, Locale};
use crate::layout::{self, Layout, SAUCE_ID, SAUCE_VERSION};
use crate::scan;
use crate::xml;

/// Substitute character conventionally written before appended metadata.
pub const EOF_MARKER: u8 = 0x1a;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

// ── DecodeOptions ─────────────────────────────────────────────────────────────

/// Configuration for [`decode_with`].
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Number formatting of the humanized file sizes.
    pub locale: Locale,
}

// ── Sizes ─────────────────────────────────────────────────────────────────────

/// Original file size in bytes and in humanized decimal and binary units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sizes {
    pub bytes:   u32,
    pub decimal: String,
    pub binary:  String,
}

impl Sizes {
    pub fn new(bytes: u32, locale: &Locale) -> Self {
        Self {
            bytes,
            decimal: humanize::decimal(u64::from(bytes), locale),
            binary:  humanize::binary(u64::from(bytes), locale),
        }
    }
}

// ── Record ────────────────────────────────────────────────────────────────────

/// A decoded SAUCE record.  A buffer without SAUCE metadata decodes to
/// `Record::default()`, for which [`Record::valid`] is false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id:        String,
    pub version:   String,
    pub title:     String,
    pub author:    String,
    pub group:     String,
    pub date:      Dates,
    #[serde(rename = "filesize")]
    pub file_size: Sizes,
    #[serde(rename = "dataType")]
    pub data:      Datas,
    #[serde(rename = "fileType")]
    pub file:      Files,
    #[serde(rename = "typeInfo")]
    pub info:      Infos,
    /// Long description of the file type.
    #[serde(skip)]
    pub desc:      String,
    #[serde(rename = "comments")]
    pub comment:   Comment,
}

impl Record {
    /// Drain `reader` and decode its content.
    pub fn read<R: Read>(reader: R) -> Result<Self, RecordError> {
        Self::read_with(reader, &DecodeOptions::default())
    }

    pub fn read_with<R: Read>(mut reader: R, opts: &DecodeOptions) -> Result<Self, RecordError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(decode_with(&buf, opts))
    }

    /// Reports whether the record carries the SAUCE ID and version `00`.
    pub fn valid(&self) -> bool {
        self.id.as_bytes() == SAUCE_ID && self.version.as_bytes() == SAUCE_VERSION
    }

    pub fn to_json(&self) -> Result<Vec<u8>, RecordError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Like [`to_json`](Self::to_json) with every element on its own line,
    /// nested by copies of `indent`.
    pub fn to_json_indent(&self, indent: &str) -> Result<Vec<u8>, RecordError> {
        let mut out = Vec::new();
        let fmt = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut out, fmt);
        self.serialize(&mut ser)?;
        Ok(out)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// XML encoding under a `Record` root element.  Elements use snake case
    /// names (`data_type`, `type_info`) and ids, counts and humanized sizes
    /// are written as attributes.
    pub fn to_xml(&self) -> Result<Vec<u8>, RecordError> {
        Ok(xml::to_vec(self, "")?)
    }

    /// Like [`to_xml`](Self::to_xml) with every element on its own line.
    /// `indent` should repeat a single character, such as two spaces or a tab.
    pub fn to_xml_indent(&self, indent: &str) -> Result<Vec<u8>, RecordError> {
        Ok(xml::to_vec(self, indent)?)
    }
}

// ── Decode / Trim ─────────────────────────────────────────────────────────────

/// Decode the SAUCE record in `buf` with English size formatting.
pub fn decode(buf: &[u8]) -> Record {
    decode_with(buf, &DecodeOptions::default())
}

pub fn decode_with(buf: &[u8], opts: &DecodeOptions) -> Record {
    let Some(l) = Layout::extract(buf) else {
        return Record::default();
    };
    if l.version == [0, 0] {
        return Record::default();
    }
    trace!(offset = l.offset, "decoding sauce record");
    let block = scan::comment_block(buf, l.comments, l.offset);
    Record {
        id:        String::from_utf8_lossy(&l.id).into_owned(),
        version:   String::from_utf8_lossy(&l.version).into_owned(),
        title:     layout::text(&l.title),
        author:    layout::text(&l.author),
        group:     layout::text(&l.group),
        date:      Dates::decode(&l.date),
        file_size: Sizes::new(l.file_size, &opts.locale),
        data:      Datas::new(l.data_type),
        file:      Files::new(l.data_type, l.file_type),
        info:      Infos::new(&l),
        desc:      filetype::description(l.data_type, l.file_type).to_string(),
        comment:   Comment::new(l.comments, block),
    }
}

/// `buf` without its SAUCE record, comment block and EOF marker.
///
/// A buffer without SAUCE metadata is returned unchanged.  When the byte
/// before the cut is [`EOF_MARKER`], it and the byte before it are removed
/// too.
pub fn trim(buf: &[u8]) -> &[u8] {
    let Some(sauce) = scan::index(buf) else {
        return buf;
    };
    let count = layout::read_u8(buf, sauce, layout::COMMENTS);
    let cut = scan::comment_block(buf, count, sauce).map_or(sauce, |c| c.index);
    if cut > buf.len() {
        return &[];
    }
    let before = cut.checked_sub(1).and_then(|i| buf.get(i));
    let cut = if before == Some(&EOF_MARKER) { cut.saturating_sub(2) } else { cut };
    buf.get(..cut).unwrap_or_default()
}
