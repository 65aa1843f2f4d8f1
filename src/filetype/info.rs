//! Type dependent numeric fields, flags and font name.

use serde::{Deserialize, Serialize};

use crate::filetype::{FileType, NO_INFO};
use crate::flags::AnsiFlags;
use crate::layout::Layout;

/// One TInfo field and what it means for this file type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub value: u16,
    pub info:  String,
}

/// All fields whose meaning depends on DataType and FileType.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infos {
    #[serde(rename = "1")]
    pub info1: Info,
    #[serde(rename = "2")]
    pub info2: Info,
    #[serde(rename = "3")]
    pub info3: Info,
    pub flags: AnsiFlags,
    #[serde(rename = "fontName")]
    pub font:  String,
}

impl Infos {
    pub fn new(layout: &Layout) -> Self {
        let meaning = FileType::resolve(layout.data_type, layout.file_type)
            .ok()
            .flatten()
            .map_or(NO_INFO, FileType::info);
        let info = |value: u16, i: usize| Info { value, info: meaning[i].to_string() };
        Self {
            info1: info(layout.tinfo1, 0),
            info2: info(layout.tinfo2, 1),
            info3: info(layout.tinfo3, 2),
            flags: AnsiFlags::parse(layout.tflags),
            font:  layout.font(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(data_type: u8, file_type: u8) -> Layout {
        Layout {
            data_type,
            file_type,
            tinfo1: 977,
            tinfo2: 9,
            tinfo3: 16,
            ..Layout::default()
        }
    }

    #[test]
    fn test_character() {
        let infos = Infos::new(&layout(1, 0));
        assert_eq!(infos.info1, Info { value: 977, info: "character width".into() });
        assert_eq!(infos.info2, Info { value: 9, info: "number of lines".into() });
        assert_eq!(infos.info3, Info { value: 16, info: String::new() });
    }

    #[test]
    fn test_ripscript() {
        let infos = Infos::new(&layout(1, 3));
        assert_eq!(infos.info1.info, "pixel width");
        assert_eq!(infos.info2.info, "character screen height");
        assert_eq!(infos.info3.info, "number of colors");
    }

    #[test]
    fn test_bitmap() {
        let infos = Infos::new(&layout(2, 10));
        assert_eq!(infos.info3.info, "pixel depth");
        assert_eq!(Infos::new(&layout(2, 14)).info1.info, "");
    }

    #[test]
    fn test_audio_sample() {
        assert_eq!(Infos::new(&layout(4, 16)).info1.info, "sample rate");
        assert_eq!(Infos::new(&layout(4, 0)).info1.info, "");
    }

    #[test]
    fn test_unknown_and_meaningless() {
        for (d, f) in [(0, 0), (3, 1), (5, 0), (7, 4), (8, 0), (200, 0)] {
            let infos = Infos::new(&layout(d, f));
            assert_eq!(infos.info1.info, "", "data {d} file {f}");
            assert_eq!(infos.info1.value, 977);
        }
        assert_eq!(Infos::new(&layout(6, 0)).info2.info, "number of lines");
    }
}
