//! Decoding of the optional COMNT block into comment lines.
//!
//! The format stores up to 255 lines of exactly 64 bytes each with no line
//! terminators.  Files in the wild also embed real line breaks, so the raw
//! bytes are split on line breaks when any are present and into 64-byte lines
//! otherwise.

use serde::{Deserialize, Serialize};

use crate::layout::{COMNT_ID, COMNT_LINE_SIZE};
use crate::scan::CommentBlock;

/// Whether a comment block was declared and whether it was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentStatus {
    /// The record declares no comment lines.
    #[default]
    Absent,
    /// The record declares comment lines but no COMNT marker was located.
    Missing,
    /// A COMNT block was located.
    Present,
}

/// The decoded comment block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id:      String,
    /// Declared number of lines.
    pub count:   u8,
    /// Offset of the `COMNT` marker in the source buffer.
    #[serde(skip)]
    pub index:   Option<usize>,
    #[serde(skip)]
    pub status:  CommentStatus,
    #[serde(rename = "lines")]
    pub comment: Vec<String>,
}

impl Comment {
    /// Build the comment of a located SAUCE record from its declared line
    /// count and the scan result.
    pub fn new(count: u8, block: Option<CommentBlock<'_>>) -> Self {
        let status = match (count, &block) {
            (0, _)       => CommentStatus::Absent,
            (_, None)    => CommentStatus::Missing,
            (_, Some(_)) => CommentStatus::Present,
        };
        Self {
            id: String::from_utf8_lossy(COMNT_ID).into_owned(),
            count,
            index: block.map(|b| b.index),
            status,
            comment: block.map(|b| lines(b.lines)).unwrap_or_default(),
        }
    }
}

/// Split raw comment bytes into lines, choosing the mode by the presence of
/// a line break.
pub fn lines(raw: &[u8]) -> Vec<String> {
    if has_break(raw) {
        by_break(raw)
    } else {
        by_line(raw)
    }
}

fn has_break(raw: &[u8]) -> bool {
    raw.iter().any(|&b| b == b'\n' || b == b'\r')
}

/// Split on line breaks.  `\r\n` and a lone `\r` both end a line, and a
/// trailing break does not produce an empty final line.
pub fn by_break(raw: &[u8]) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = raw;
    while !rest.is_empty() {
        let end = rest.iter().position(|&b| b == b'\n' || b == b'\r').unwrap_or(rest.len());
        out.push(String::from_utf8_lossy(&rest[..end]).into_owned());
        let skip = match (rest.get(end), rest.get(end + 1)) {
            (Some(b'\r'), Some(b'\n')) => 2,
            (Some(_), _)               => 1,
            (None, _)                  => 0,
        };
        rest = &rest[end + skip..];
    }
    out
}

/// Split into 64-byte lines; a shorter trailing chunk is kept as the last line.
pub fn by_line(raw: &[u8]) -> Vec<String> {
    raw.chunks(COMNT_LINE_SIZE)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect()
}
