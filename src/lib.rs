//! Reader for SAUCE (Standard Architecture for Universal Comment Extensions)
//! metadata, the 128-byte record and optional comment block appended to ANSI
//! art and many other file types.
//!
//! See <http://www.acid.org/info/sauce/sauce.htm>.

pub mod layout;
pub mod scan;
pub mod filetype;
pub mod flags;
pub mod date;
pub mod comment;
pub mod humanize;
pub mod record;
mod xml;

pub use scan::{contains, index};
pub use record::{decode, decode_with, trim, DecodeOptions, Record, RecordError};
pub use filetype::{DataType, FileType};
pub use flags::AnsiFlags;
pub use comment::{Comment, CommentStatus};
