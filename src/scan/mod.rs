//! Backward scanners for the SAUCE record and its optional COMNT block.
//!
//! # How it works
//!
//! Both markers sit at the tail of a file, so both scanners walk backwards
//! towards the start of the buffer inside a bounded window.  At each candidate
//! end position the pattern is compared last byte first, which rejects almost
//! every position on its first comparison.
//!
//! | Scanner | Pattern | Window | Lower bound |
//! |---------|---------|--------|-------------|
//! | [`index`] | `SAUCE00` | 512 bytes | buffer must hold a full 128-byte record |
//! | [`comment_block`] | `COMNT` | 255 × 64 bytes before the record | no match below byte 64 or at/after the SAUCE offset |
//!
//! Neither scanner allocates or mutates the input.

use tracing::{debug, trace};

use crate::layout::{COMNT_ID, COMNT_LINE_SIZE, COMNT_MAX_LINES, RECORD_SIZE};

/// `SAUCE` followed by the only supported version, `00`.
pub const SAUCE_SEEK: &[u8; 7] = b"SAUCE00";
/// How far back from the last byte the record scan looks.
pub const SCAN_WINDOW: usize = 512;
/// How far back from the SAUCE offset the comment scan looks.
pub const COMNT_WINDOW: usize = COMNT_LINE_SIZE * COMNT_MAX_LINES;

// ── Record scan ───────────────────────────────────────────────────────────────

/// Offset of the `SAUCE00` marker in `buf`, or `None` if it is not present.
pub fn index(buf: &[u8]) -> Option<usize> {
    if buf.len() < RECORD_SIZE {
        return None;
    }
    let last = buf.len() - 1;
    let lowest = last.saturating_sub(SCAN_WINDOW).max(SAUCE_SEEK.len() - 1);
    let found = (lowest..=last)
        .rev()
        .find(|&end| ends_with_at(buf, end, SAUCE_SEEK))
        .map(|end| end + 1 - SAUCE_SEEK.len());
    trace!(len = buf.len(), ?found, "sauce scan");
    found
}

/// Reports whether `buf` carries a SAUCE record.
pub fn contains(buf: &[u8]) -> bool {
    index(buf).is_some()
}

/// Compare `pattern` against the bytes ending at `end`, last byte first.
fn ends_with_at(buf: &[u8], end: usize, pattern: &[u8]) -> bool {
    pattern
        .iter()
        .rev()
        .enumerate()
        .all(|(back, want)| end.checked_sub(back).and_then(|i| buf.get(i)) == Some(want))
}

// ── Comment scan ──────────────────────────────────────────────────────────────

/// A located COMNT block, borrowed from the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentBlock<'a> {
    /// Offset of the first byte of `COMNT`.
    pub index: usize,
    /// Comment text between the marker and the SAUCE record.
    pub lines: &'a [u8],
}

impl CommentBlock<'_> {
    /// Length of the comment text in bytes, marker excluded.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Find the COMNT block that precedes the SAUCE record at `sauce_index`.
///
/// `count` is the declared number of comment lines.  A count of zero means no
/// block exists and nothing is searched.  A non-zero count with no marker in
/// range also returns `None`; callers distinguish the two through `count`.
pub fn comment_block(buf: &[u8], count: u8, sauce_index: usize) -> Option<CommentBlock<'_>> {
    if count == 0 || buf.is_empty() {
        return None;
    }
    let last = buf.len() - 1;
    let lowest = sauce_index.saturating_sub(COMNT_WINDOW).max(COMNT_LINE_SIZE);
    // A marker ending at or past the record would overlap it.
    let highest = sauce_index.checked_sub(1)?.min(last);
    if highest < lowest {
        debug!(count, sauce_index, "comment scan range is empty");
        return None;
    }
    let found = (lowest..=highest)
        .rev()
        .find(|&text| ends_with_at(buf, text - 1, COMNT_ID));
    match found {
        Some(text) => Some(CommentBlock {
            index: text - COMNT_ID.len(),
            lines: buf.get(text..sauce_index).unwrap_or_default(),
        }),
        None => {
            debug!(count, sauce_index, "declared comments but no COMNT marker");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(prefix: &[u8], total: usize) -> Vec<u8> {
        let mut b = prefix.to_vec();
        b.resize(total, b'?');
        b
    }

    #[test]
    fn test_index_empty_and_short() {
        assert_eq!(index(&[]), None);
        assert_eq!(index(b"Hello world!"), None);
        // Marker present but the buffer cannot hold a whole record.
        assert_eq!(index(b"Hello world!SAUCE00"), None);
    }

    #[test]
    fn test_index_finds_marker() {
        let buf = padded(b"Hello world!SAUCE00", 19 + 150);
        assert_eq!(index(&buf), Some(12));
        assert!(contains(&buf));
    }

    #[test]
    fn test_index_marker_at_tail() {
        let mut buf = vec![b' '; 200];
        buf.extend_from_slice(SAUCE_SEEK);
        assert_eq!(index(&buf), Some(200));
    }

    #[test]
    fn test_index_outside_window() {
        let mut buf = SAUCE_SEEK.to_vec();
        buf.resize(SAUCE_SEEK.len() + 1000, b'?');
        assert_eq!(index(&buf), None);
    }

    #[test]
    fn test_index_prefers_last_marker() {
        let mut buf = vec![b'?'; 10];
        buf.extend_from_slice(SAUCE_SEEK);
        buf.extend_from_slice(&[b'?'; 50]);
        buf.extend_from_slice(SAUCE_SEEK);
        buf.resize(300, b'?');
        assert_eq!(index(&buf), Some(67));
    }

    #[test]
    fn test_index_rejects_other_version() {
        let buf = padded(b"Hello world!SAUCE01", 200);
        assert_eq!(index(&buf), None);
    }

    #[test]
    fn test_comment_block_located() {
        let mut buf = vec![b'x'; 100];
        buf.extend_from_slice(COMNT_ID);
        buf.extend_from_slice(&[b'c'; 64]);
        let sauce = buf.len();
        buf.extend_from_slice(&padded(SAUCE_SEEK, RECORD_SIZE));

        let block = comment_block(&buf, 1, sauce).expect("block");
        assert_eq!(block.index, 100);
        assert_eq!(block.len(), 64);
        assert!(block.lines.iter().all(|&b| b == b'c'));
    }

    #[test]
    fn test_comment_block_full_size() {
        let mut buf = vec![b'x'; 100];
        buf.extend_from_slice(COMNT_ID);
        buf.extend_from_slice(&vec![b'c'; COMNT_WINDOW]);
        let sauce = buf.len();
        buf.extend_from_slice(&padded(SAUCE_SEEK, RECORD_SIZE));

        let block = comment_block(&buf, 255, sauce).expect("block");
        assert_eq!(block.index, 100);
        assert_eq!(block.len(), COMNT_LINE_SIZE * COMNT_MAX_LINES);
    }

    #[test]
    fn test_comment_block_one_past_window() {
        let mut buf = vec![b'x'; 100];
        buf.extend_from_slice(COMNT_ID);
        buf.extend_from_slice(&vec![b'c'; COMNT_WINDOW + 1]);
        let sauce = buf.len();
        buf.extend_from_slice(&padded(SAUCE_SEEK, RECORD_SIZE));

        assert_eq!(comment_block(&buf, 255, sauce), None);
    }

    #[test]
    fn test_comment_block_zero_count_is_absent() {
        let mut buf = vec![b'x'; 100];
        buf.extend_from_slice(COMNT_ID);
        buf.extend_from_slice(&[b'c'; 64]);
        let sauce = buf.len();
        buf.extend_from_slice(&padded(SAUCE_SEEK, RECORD_SIZE));
        assert_eq!(comment_block(&buf, 0, sauce), None);
    }

    #[test]
    fn test_comment_block_missing_marker() {
        let mut buf = vec![b'x'; 300];
        let sauce = buf.len();
        buf.extend_from_slice(&padded(SAUCE_SEEK, RECORD_SIZE));
        assert_eq!(comment_block(&buf, 2, sauce), None);
    }

    #[test]
    fn test_comment_block_too_close_to_start() {
        let mut buf = b"COMNT".to_vec();
        buf.extend_from_slice(&[b'c'; 10]);
        let sauce = buf.len();
        buf.extend_from_slice(&padded(SAUCE_SEEK, RECORD_SIZE));
        assert_eq!(comment_block(&buf, 1, sauce), None);
    }

    #[test]
    fn test_comment_block_ignores_marker_after_record() {
        let mut buf = vec![b'x'; 100];
        let sauce = buf.len();
        let mut record = padded(SAUCE_SEEK, RECORD_SIZE);
        record[20..25].copy_from_slice(COMNT_ID);
        buf.extend_from_slice(&record);
        assert_eq!(comment_block(&buf, 1, sauce), None);
    }
}
