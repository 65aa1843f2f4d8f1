//! File-type families that carry more than one variant.
//!
//! Each enum's discriminant is the raw SAUCE FileType byte.

/// Text and character stream formats (DataType 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Character {
    Ascii = 0,
    Ansi,
    AnsiMation,
    RipScript,
    PcBoard,
    Avatar,
    Html,
    Source,
    TundraDraw,
}

impl Character {
    pub const ALL: [Character; 9] = [
        Character::Ascii,
        Character::Ansi,
        Character::AnsiMation,
        Character::RipScript,
        Character::PcBoard,
        Character::Avatar,
        Character::Html,
        Character::Source,
        Character::TundraDraw,
    ];

    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(usize::from(v)).copied()
    }

    /// HTML and source code, which have no fixed character grid.
    pub fn is_markup(self) -> bool {
        matches!(self, Character::Html | Character::Source)
    }
}

/// Bitmap graphic and animation formats (DataType 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Bitmap {
    Gif = 0,
    Pcx,
    Lbm,
    Tga,
    Fli,
    Flc,
    Bmp,
    Gl,
    Dl,
    Wpg,
    Png,
    Jpg,
    Mpg,
    Avi,
}

impl Bitmap {
    pub const ALL: [Bitmap; 14] = [
        Bitmap::Gif,
        Bitmap::Pcx,
        Bitmap::Lbm,
        Bitmap::Tga,
        Bitmap::Fli,
        Bitmap::Flc,
        Bitmap::Bmp,
        Bitmap::Gl,
        Bitmap::Dl,
        Bitmap::Wpg,
        Bitmap::Png,
        Bitmap::Jpg,
        Bitmap::Mpg,
        Bitmap::Avi,
    ];

    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(usize::from(v)).copied()
    }
}

/// Vector graphic formats (DataType 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Vector {
    Dxf = 0,
    Dwg,
    Wpvg,
    Kinetix,
}

impl Vector {
    pub const ALL: [Vector; 4] = [Vector::Dxf, Vector::Dwg, Vector::Wpvg, Vector::Kinetix];

    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(usize::from(v)).copied()
    }
}

/// Audio and music formats (DataType 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Audio {
    Mod = 0,
    Composer669,
    Stm,
    S3m,
    Mtm,
    Far,
    Ult,
    Amf,
    Dmf,
    Okt,
    Rol,
    Cmf,
    Midi,
    Sadt,
    Voc,
    Wave,
    Smp8,
    Smp8s,
    Smp16,
    Smp16s,
    Patch8,
    Patch16,
    Xm,
    Hsc,
    It,
}

impl Audio {
    pub const ALL: [Audio; 25] = [
        Audio::Mod,
        Audio::Composer669,
        Audio::Stm,
        Audio::S3m,
        Audio::Mtm,
        Audio::Far,
        Audio::Ult,
        Audio::Amf,
        Audio::Dmf,
        Audio::Okt,
        Audio::Rol,
        Audio::Cmf,
        Audio::Midi,
        Audio::Sadt,
        Audio::Voc,
        Audio::Wave,
        Audio::Smp8,
        Audio::Smp8s,
        Audio::Smp16,
        Audio::Smp16s,
        Audio::Patch8,
        Audio::Patch16,
        Audio::Xm,
        Audio::Hsc,
        Audio::It,
    ];

    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(usize::from(v)).copied()
    }

    /// Raw PCM sample variants, the only audio types with a TInfo meaning.
    pub fn is_sample(self) -> bool {
        matches!(self, Audio::Smp8 | Audio::Smp8s | Audio::Smp16 | Audio::Smp16s)
    }
}

/// Archive and compressed formats (DataType 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Archive {
    Zip = 0,
    Arj,
    Lzh,
    Arc,
    Tar,
    Zoo,
    Rar,
    Uc2,
    Pak,
    Sqz,
}

impl Archive {
    pub const ALL: [Archive; 10] = [
        Archive::Zip,
        Archive::Arj,
        Archive::Lzh,
        Archive::Arc,
        Archive::Tar,
        Archive::Zoo,
        Archive::Rar,
        Archive::Uc2,
        Archive::Pak,
        Archive::Sqz,
    ];

    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(usize::from(v)).copied()
    }
}
