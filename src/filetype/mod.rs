//! Two-level SAUCE type taxonomy: DataType selects a file-type family, and the
//! family gives the FileType byte its name, description and TInfo meanings.
//!
//! Raw bytes are resolved into a typed [`FileType`] first; names and
//! descriptions come from one [`Family`] table per DataType and the TInfo
//! meanings from the variant itself.

pub mod info;
pub mod kinds;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use info::{Info, Infos};
pub use kinds::{Archive, Audio, Bitmap, Character, Vector};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileTypeError {
    /// DataType byte outside the nine known categories.
    #[error("unknown filetype")]
    UnknownDataType(u8),
}

// ── Info field meanings ──────────────────────────────────────────────────────

/// Meaning of TInfo1, TInfo2 and TInfo3; an empty string means "not used".
pub type InfoMeaning = [&'static str; 3];

pub const NO_INFO: InfoMeaning = ["", "", ""];
const CHARACTER_INFO: InfoMeaning = ["character width", "number of lines", ""];
const RIP_INFO: InfoMeaning = ["pixel width", "character screen height", "number of colors"];
const BITMAP_INFO: InfoMeaning = ["pixel width", "pixel height", "pixel depth"];
const SAMPLE_INFO: InfoMeaning = ["sample rate", "", ""];

// ── Family descriptors ───────────────────────────────────────────────────────

/// Name and description tables of one file-type family.
#[derive(Debug)]
pub struct Family {
    pub names:        &'static [&'static str],
    pub descriptions: &'static [&'static str],
}

impl Family {
    /// Number of valid FileType values in this family.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Display name of `file_type`, empty when out of range.
    pub fn name(&self, file_type: u8) -> &'static str {
        self.names.get(usize::from(file_type)).copied().unwrap_or("")
    }

    /// Long description of `file_type`; only the character family has them.
    pub fn description(&self, file_type: u8) -> &'static str {
        self.descriptions.get(usize::from(file_type)).copied().unwrap_or("")
    }
}

static NONE_FAMILY: Family = Family {
    names:        &["Undefined filetype"],
    descriptions: &[],
};

static CHARACTER_FAMILY: Family = Family {
    names: &[
        "ASCII text",
        "ANSI color text",
        "ANSIMation",
        "RIPScript",
        "PCBoard color text",
        "Avatar color text",
        "HTML markup",
        "Programming source code",
        "TundraDraw color text",
    ],
    descriptions: &[
        "ASCII text file with no formatting codes or color codes.",
        "ANSI text file with coloring codes and cursor positioning.",
        "ANSIMation are ANSI text files that rely on fixed screen sizes.",
        "RIPScript are Remote Imaging Protocol graphics.",
        "PCBoard color codes and macros, and ANSI codes.",
        "Avatar color codes, and ANSi codes.",
        "HTML markup files.",
        "Source code for a programming language.",
        "TundraDraw files, like ANSI, but with a custom palette.",
    ],
};

static BITMAP_FAMILY: Family = Family {
    names: &[
        "GIF image",
        "ZSoft Paintbrush image",
        "DeluxePaint image",
        "Targa true color image",
        "Autodesk Animator animation",
        "Autodesk Animator animation",
        "BMP Windows/OS2 bitmap",
        "Grasp GL animation",
        "DL animation",
        "WordPerfect graphic",
        "PNG image",
        "Jpeg photo",
        "MPEG video",
        "AVI video",
    ],
    descriptions: &[],
};

static VECTOR_FAMILY: Family = Family {
    names: &[
        "AutoDesk CAD vector graphic",
        "AutoDesk CAD vector graphic",
        "WordPerfect vector graphic",
        "3D Studio vector graphic",
    ],
    descriptions: &[],
};

static AUDIO_FAMILY: Family = Family {
    names: &[
        "NoiseTracker module",
        "Composer 669 module",
        "ScreamTracker module",
        "ScreamTracker 3 module",
        "MultiTracker module",
        "Farandole Composer module",
        "Ultra Tracker module",
        "Dual Module Player module",
        "X-Tracker module",
        "Oktalyzer module",
        "AdLib Visual Composer FM audio",
        "Creative Music FM audio",
        "MIDI audio",
        "SAdT composer FM audio",
        "Creative Voice File",
        "Waveform audio",
        "single channel 8-bit sample",
        "stereo 8-bit sample",
        "single channel 16-bit sample",
        "stereo 16-bit sample",
        "8-bit patch file",
        "16-bit patch file",
        "Extended Module",
        "Hannes Seifert Composition FM audio",
        "Impulse Tracker module",
    ],
    descriptions: &[],
};

static BINARY_TEXT_FAMILY: Family = Family {
    names:        &["Binary text or a .BIN file"],
    descriptions: &[],
};

static XBIN_FAMILY: Family = Family {
    names:        &["Extended binary text or a XBin file"],
    descriptions: &[],
};

static ARCHIVE_FAMILY: Family = Family {
    names: &[
        "ZIP compressed archive",
        "ARJ compressed archive",
        "LHA compressed archive",
        "ARC compressed archive",
        "Tarball tape archive",
        "ZOO compressed archive",
        "RAR compressed archive",
        "UltraCompressor II compressed archive",
        "PAK ARC compressed archive",
        "Squeeze It compressed archive",
    ],
    descriptions: &[],
};

static EXECUTABLE_FAMILY: Family = Family {
    names:        &["Executable program file"],
    descriptions: &[],
};

// ── DataType ─────────────────────────────────────────────────────────────────

/// The SAUCE DataType byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataType {
    None = 0,
    Character,
    Bitmap,
    Vector,
    Audio,
    BinaryText,
    XBin,
    Archive,
    Executable,
}

impl DataType {
    pub const ALL: [DataType; 9] = [
        DataType::None,
        DataType::Character,
        DataType::Bitmap,
        DataType::Vector,
        DataType::Audio,
        DataType::BinaryText,
        DataType::XBin,
        DataType::Archive,
        DataType::Executable,
    ];

    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(usize::from(v)).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            DataType::None       => "undefined",
            DataType::Character  => "text or character stream",
            DataType::Bitmap     => "bitmap graphic or animation",
            DataType::Vector     => "vector graphic",
            DataType::Audio      => "audio or music",
            DataType::BinaryText => "binary text",
            DataType::XBin       => "extended binary text",
            DataType::Archive    => "archive",
            DataType::Executable => "executable",
        }
    }

    /// The file-type family this DataType selects.
    pub fn family(self) -> &'static Family {
        match self {
            DataType::None       => &NONE_FAMILY,
            DataType::Character  => &CHARACTER_FAMILY,
            DataType::Bitmap     => &BITMAP_FAMILY,
            DataType::Vector     => &VECTOR_FAMILY,
            DataType::Audio      => &AUDIO_FAMILY,
            DataType::BinaryText => &BINARY_TEXT_FAMILY,
            DataType::XBin       => &XBIN_FAMILY,
            DataType::Archive    => &ARCHIVE_FAMILY,
            DataType::Executable => &EXECUTABLE_FAMILY,
        }
    }
}

// ── FileType ─────────────────────────────────────────────────────────────────

/// A resolved (DataType, FileType) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Undefined,
    Character(Character),
    Bitmap(Bitmap),
    Vector(Vector),
    Audio(Audio),
    BinaryText,
    XBin,
    Archive(Archive),
    Executable,
}

impl FileType {
    /// Resolve raw DataType and FileType bytes.
    ///
    /// `Ok(None)` is a known DataType with an out-of-range FileType; an
    /// unknown DataType is an error.
    pub fn resolve(data_type: u8, file_type: u8) -> Result<Option<Self>, FileTypeError> {
        let data = DataType::from_u8(data_type).ok_or(FileTypeError::UnknownDataType(data_type))?;
        let single = |t: FileType| (file_type == 0).then_some(t);
        Ok(match data {
            DataType::None       => single(FileType::Undefined),
            DataType::Character  => Character::from_u8(file_type).map(FileType::Character),
            DataType::Bitmap     => Bitmap::from_u8(file_type).map(FileType::Bitmap),
            DataType::Vector     => Vector::from_u8(file_type).map(FileType::Vector),
            DataType::Audio      => Audio::from_u8(file_type).map(FileType::Audio),
            DataType::BinaryText => single(FileType::BinaryText),
            DataType::XBin       => single(FileType::XBin),
            DataType::Archive    => Archive::from_u8(file_type).map(FileType::Archive),
            DataType::Executable => single(FileType::Executable),
        })
    }

    pub fn data_type(self) -> DataType {
        match self {
            FileType::Undefined    => DataType::None,
            FileType::Character(_) => DataType::Character,
            FileType::Bitmap(_)    => DataType::Bitmap,
            FileType::Vector(_)    => DataType::Vector,
            FileType::Audio(_)     => DataType::Audio,
            FileType::BinaryText   => DataType::BinaryText,
            FileType::XBin         => DataType::XBin,
            FileType::Archive(_)   => DataType::Archive,
            FileType::Executable   => DataType::Executable,
        }
    }

    /// The raw FileType byte.
    pub fn code(self) -> u8 {
        match self {
            FileType::Character(c) => c as u8,
            FileType::Bitmap(b)    => b as u8,
            FileType::Vector(v)    => v as u8,
            FileType::Audio(a)     => a as u8,
            FileType::Archive(a)   => a as u8,
            FileType::Undefined
            | FileType::BinaryText
            | FileType::XBin
            | FileType::Executable => 0,
        }
    }

    pub fn name(self) -> &'static str {
        self.data_type().family().name(self.code())
    }

    pub fn description(self) -> &'static str {
        self.data_type().family().description(self.code())
    }

    /// Meaning of TInfo1, TInfo2 and TInfo3 for this file type.
    pub fn info(self) -> InfoMeaning {
        match self {
            FileType::Character(Character::RipScript) => RIP_INFO,
            FileType::Character(c) if c.is_markup()    => NO_INFO,
            FileType::Character(_) | FileType::XBin    => CHARACTER_INFO,
            FileType::Bitmap(_)                        => BITMAP_INFO,
            FileType::Audio(a) if a.is_sample()        => SAMPLE_INFO,
            _                                          => NO_INFO,
        }
    }
}

// ── Output records ───────────────────────────────────────────────────────────

/// DataType value and name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datas {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
}

impl Datas {
    pub fn new(data_type: u8) -> Self {
        Self {
            kind: data_type,
            name: DataType::from_u8(data_type).map(DataType::name).unwrap_or_default().to_string(),
        }
    }
}

/// FileType value and name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Files {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
}

impl Files {
    /// An unknown DataType reports the error text as its name and a zero type.
    pub fn new(data_type: u8, file_type: u8) -> Self {
        match FileType::resolve(data_type, file_type) {
            Ok(resolved) => Self {
                kind: file_type,
                name: resolved.map(FileType::name).unwrap_or_default().to_string(),
            },
            Err(e) => Self { kind: 0, name: e.to_string() },
        }
    }
}

/// Long description of a file; only character streams have one.
pub fn description(data_type: u8, file_type: u8) -> &'static str {
    match FileType::resolve(data_type, file_type) {
        Ok(Some(t)) => t.description(),
        _ => "",
    }
}
