#![allow(dead_code)]

/// Comment line of the example file, padded to 64 bytes.
pub const COMMENT: &str = "Any comments go here.                                           ";

pub const BODY: &str = "File: sauce.txt\r\n\r\nSAUCE package test with complete data and comment.\r\n\r\n\
Cras sit amet purus urna. Phasellus in dapibus ex. Proin pretium eget leo ut gravida.\r\n";

/// The 128-byte record of the example file.
pub fn sauce_record(comments: u8) -> Vec<u8> {
    let mut r = b"SAUCE00".to_vec();
    r.extend_from_slice(format!("{:<35}", "Sauce title").as_bytes());
    r.extend_from_slice(format!("{:<20}", "Sauce author").as_bytes());
    r.extend_from_slice(format!("{:<20}", "Sauce group").as_bytes());
    r.extend_from_slice(b"20161126");
    r.extend_from_slice(&[0x9d, 0x0e, 0x00, 0x00]); // 3741 bytes
    r.extend_from_slice(&[0x01, 0x00]); // character, ASCII
    r.extend_from_slice(&[0xd1, 0x03, 0x09, 0x00, 0x00, 0x00, 0x00, 0x00]);
    r.push(comments);
    r.push(0x13);
    let mut font = b"IBM VGA".to_vec();
    font.resize(22, 0);
    r.extend_from_slice(&font);
    assert_eq!(r.len(), 128);
    r
}

/// Body, EOF marker, one comment line and the record.
pub fn sauce_file() -> Vec<u8> {
    let mut b = BODY.as_bytes().to_vec();
    b.push(0x1a);
    b.extend_from_slice(b"COMNT");
    b.extend_from_slice(COMMENT.as_bytes());
    b.extend_from_slice(&sauce_record(1));
    b
}

/// Same file without a comment block.
pub fn sauce_file_no_comment() -> Vec<u8> {
    let mut b = BODY.as_bytes().to_vec();
    b.push(0x1a);
    b.extend_from_slice(&sauce_record(0));
    b
}

/// Offset of `COMNT` in [`sauce_file`].
pub fn comment_offset() -> usize {
    BODY.len() + 1
}

/// Offset of `SAUCE00` in [`sauce_file`].
pub fn sauce_offset() -> usize {
    comment_offset() + 5 + 64
}
