//! Locale-aware, human readable byte sizes and date layouts.
//!
//! ```
//! use sauce::humanize::{binary, decimal, Locale};
//!
//! let de: Locale = "de".parse().unwrap();
//! assert_eq!(decimal(15724, &Locale::English), "15.7 kB");
//! assert_eq!(binary(15724, &de), "15,4 KiB");
//! ```

use std::convert::Infallible;
use std::str::FromStr;

use chrono::{DateTime, Utc};

const KB: u64 = 1000;
const KIB: u64 = 1024;

const DECIMAL_UNITS: [&str; 5] = ["kB", "MB", "GB", "TB", "PB"];
const BINARY_UNITS:  [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];

/// Number separators of a language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// `1,234.5`
    #[default]
    English,
    /// `1.234,5`
    German,
    /// `1 234,5` with a narrow no-break space.
    French,
    /// `1'234.5`
    Swiss,
}

impl Locale {
    fn group(self) -> char {
        match self {
            Locale::English => ',',
            Locale::German  => '.',
            Locale::French  => '\u{202f}',
            Locale::Swiss   => '\'',
        }
    }

    fn decimal(self) -> char {
        match self {
            Locale::English | Locale::Swiss => '.',
            Locale::German | Locale::French => ',',
        }
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    /// Parse a BCP-47 style tag such as `en-US` or `de_AT`.  Unrecognised
    /// languages use English separators.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.to_ascii_lowercase();
        let mut parts = tag.split(['-', '_']);
        let lang = parts.next().unwrap_or_default();
        let region = parts.next().unwrap_or_default();
        Ok(match (lang, region) {
            ("de" | "rm", "ch") | ("it", "ch") => Locale::Swiss,
            ("de" | "da" | "es" | "id" | "it" | "nl" | "pt" | "tr", _) => Locale::German,
            ("fr" | "cs" | "fi" | "nb" | "pl" | "ru" | "sv" | "uk", _) => Locale::French,
            _ => Locale::English,
        })
    }
}

/// Format `bytes` with decimal (power of 1000) units.
pub fn decimal(bytes: u64, locale: &Locale) -> String {
    humanize(bytes, KB, &DECIMAL_UNITS, *locale)
}

/// Format `bytes` with binary (power of 1024) units.
pub fn binary(bytes: u64, locale: &Locale) -> String {
    humanize(bytes, KIB, &BINARY_UNITS, *locale)
}

fn humanize(bytes: u64, base: u64, units: &[&str; 5], locale: Locale) -> String {
    if bytes == 0 {
        return "0".to_string();
    }
    if bytes < base {
        return format!("{}B", localize(&bytes.to_string(), locale));
    }
    let mut scale = base;
    let mut unit = 0;
    while unit + 1 < units.len() && bytes / scale >= base {
        scale *= base;
        unit += 1;
    }
    let value = bytes as f64 / scale as f64;
    // The smallest unit keeps one decimal place, larger ones two.
    let digits = if unit == 0 { format!("{value:.1}") } else { format!("{value:.2}") };
    format!("{} {}", localize(&digits, locale), units[unit])
}

/// Apply the locale's separators to a plain `1234.5` style number.
fn localize(number: &str, locale: Locale) -> String {
    let (int, frac) = match number.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (number, None),
    };
    let mut out = String::with_capacity(number.len() + int.len() / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(locale.group());
        }
        out.push(c);
    }
    if let Some(frac) = frac {
        out.push(locale.decimal());
        out.push_str(frac);
    }
    out
}

// ── Date layouts ─────────────────────────────────────────────────────────────

/// Predefined date and time layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateLayout {
    /// `2 Jan 2006`
    Dmy,
    /// `2006 Jan 2`
    Ymd,
    /// `Jan 2 2006`
    Mdy,
    /// `3:04 pm`
    H12,
    /// `15:04`
    H24,
    Dmy12,
    Dmy24,
    Ymd12,
    #[default]
    Ymd24,
    Mdy12,
    Mdy24,
}

impl DateLayout {
    /// The `chrono` format string of this layout.
    pub fn pattern(self) -> &'static str {
        match self {
            DateLayout::Dmy   => "%-d %b %Y",
            DateLayout::Ymd   => "%Y %b %-d",
            DateLayout::Mdy   => "%b %-d %Y",
            DateLayout::H12   => "%-I:%M %P",
            DateLayout::H24   => "%H:%M",
            DateLayout::Dmy12 => "%-d %b %Y %-I:%M %P",
            DateLayout::Dmy24 => "%-d %b %Y %H:%M",
            DateLayout::Ymd12 => "%Y %b %-d %-I:%M %P",
            DateLayout::Ymd24 => "%Y %b %-d %H:%M",
            DateLayout::Mdy12 => "%b %-d %Y %-I:%M %P",
            DateLayout::Mdy24 => "%b %-d %Y %H:%M",
        }
    }

    pub fn format(self, time: &DateTime<Utc>) -> String {
        time.format(self.pattern()).to_string()
    }
}
