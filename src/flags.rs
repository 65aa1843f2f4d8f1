//! ANSiFlags: rendering hints for ANSI and similar character files.
//!
//! The flags byte is printed as a zero-padded five digit binary string and
//! read by position in that string:
//!
//! | Position | Width | Meaning |
//! |----------|-------|---------|
//! | 0 | 1 | non-blink mode (iCE color) |
//! | 1..3 | 2 | letter-spacing (8/9 pixel font) |
//! | 3..5 | 2 | aspect ratio |
//!
//! A two-bit field of `11` is not a valid value and decodes to the
//! [`FlagError::InvalidValue`] text rather than failing.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Legacy "no preference" value of letter-spacing and aspect ratio.
pub const NO_PREFERENCE: &str = "no preference";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagError {
    #[error("invalid value")]
    InvalidValue,
}

/// One decoded sub-field: its bit pattern and what it means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagField {
    pub flag: String,
    #[serde(rename = "interpretation")]
    pub info: String,
}

impl FlagField {
    fn new(bits: &str, interpret: fn(&str) -> Result<&'static str, FlagError>) -> Self {
        let info = match interpret(bits) {
            Ok(s)  => s.to_string(),
            Err(e) => e.to_string(),
        };
        Self { flag: bits.to_string(), info }
    }
}

/// Decoded SAUCE TFlags byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsiFlags {
    pub decimal:        u8,
    pub binary:         String,
    #[serde(rename = "nonBlinkMode")]
    pub non_blink:      FlagField,
    #[serde(rename = "letterSpacing")]
    pub letter_spacing: FlagField,
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio:   FlagField,
}

impl AnsiFlags {
    pub fn parse(value: u8) -> Self {
        let binary = format!("{value:05b}");
        let (b, ls, ar) = (&binary[0..1], &binary[1..3], &binary[3..5]);
        Self {
            decimal:        value,
            non_blink:      FlagField::new(b, non_blink),
            letter_spacing: FlagField::new(ls, letter_spacing),
            aspect_ratio:   FlagField::new(ar, aspect_ratio),
            binary,
        }
    }

    /// Comma separated interpretations, skipping "no preference" fields.
    /// Empty for a zero flags byte.
    pub fn interpretations(&self) -> String {
        if self.decimal == 0 {
            return String::new();
        }
        [&self.non_blink, &self.letter_spacing, &self.aspect_ratio]
            .iter()
            .map(|f| f.info.as_str())
            .filter(|info| *info != NO_PREFERENCE && !info.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for AnsiFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.interpretations())
    }
}

pub fn non_blink(bit: &str) -> Result<&'static str, FlagError> {
    match bit {
        "0" => Ok("blink mode"),
        "1" => Ok("non-blink mode"),
        _   => Err(FlagError::InvalidValue),
    }
}

pub fn letter_spacing(bits: &str) -> Result<&'static str, FlagError> {
    match bits {
        "00" => Ok(NO_PREFERENCE),
        "01" => Ok("select 8 pixel font"),
        "10" => Ok("select 9 pixel font"),
        _    => Err(FlagError::InvalidValue),
    }
}

pub fn aspect_ratio(bits: &str) -> Result<&'static str, FlagError> {
    match bits {
        "00" => Ok(NO_PREFERENCE),
        "01" => Ok("stretch pixels"),
        "10" => Ok("square pixels"),
        _    => Err(FlagError::InvalidValue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVALID: &str = "invalid value";

    #[test]
    fn test_parse_table() {
        let cases: [(u8, &str, &str, &str, &str); 8] = [
            (0, "blink mode", NO_PREFERENCE, NO_PREFERENCE, ""),
            (1, "blink mode", NO_PREFERENCE, "stretch pixels", "blink mode, stretch pixels"),
            (2, "blink mode", NO_PREFERENCE, "square pixels", "blink mode, square pixels"),
            (3, "blink mode", NO_PREFERENCE, INVALID, "blink mode, invalid value"),
            (4, "blink mode", "select 8 pixel font", NO_PREFERENCE, "blink mode, select 8 pixel font"),
            (5, "blink mode", "select 8 pixel font", "stretch pixels",
                "blink mode, select 8 pixel font, stretch pixels"),
            (99, "non-blink mode", "select 9 pixel font", NO_PREFERENCE,
                "non-blink mode, select 9 pixel font"),
            (255, "non-blink mode", INVALID, INVALID, "non-blink mode, invalid value, invalid value"),
        ];
        for (value, b, ls, ar, summary) in cases {
            let flags = AnsiFlags::parse(value);
            assert_eq!(flags.non_blink.info, b, "value {value}");
            assert_eq!(flags.letter_spacing.info, ls, "value {value}");
            assert_eq!(flags.aspect_ratio.info, ar, "value {value}");
            assert_eq!(flags.to_string(), summary, "value {value}");
        }
    }

    #[test]
    fn test_sauce_example_flags() {
        let flags = AnsiFlags::parse(19);
        assert_eq!(flags.binary, "10011");
        assert_eq!(flags.non_blink.flag, "1");
        assert_eq!(flags.letter_spacing.flag, "00");
        assert_eq!(flags.aspect_ratio.flag, "11");
        assert_eq!(flags.aspect_ratio.info, INVALID);
    }

    #[test]
    fn test_letter_spacing_invalid() {
        assert_eq!(letter_spacing("11"), Err(FlagError::InvalidValue));
        assert_eq!(letter_spacing(""), Err(FlagError::InvalidValue));
        // 0b01100 prints as "01100": letter-spacing bits are "11".
        assert_eq!(AnsiFlags::parse(12).letter_spacing.info, INVALID);
    }

    #[test]
    fn test_non_blink_invalid() {
        assert_eq!(non_blink("2"), Err(FlagError::InvalidValue));
        assert_eq!(non_blink(""), Err(FlagError::InvalidValue));
    }

    #[test]
    fn test_default_is_empty() {
        let flags = AnsiFlags::default();
        assert_eq!(flags.binary, "");
        assert_eq!(flags.to_string(), "");
    }
}
