//! The SAUCE creation date, stored as eight ASCII digits `CCYYMMDD`.

use std::num::ParseIntError;

use chrono::{DateTime, Days, Months, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::humanize::DateLayout;

/// `chrono` format string of the SAUCE date field.
pub const SAUCE_DATE_FORMAT: &str = "%Y%m%d";

/// RFC 3339 text written for a record without a date.
pub const ZERO_TIME: &str = "0001-01-01T00:00:00Z";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("year failed: {value:?}: {source}")]
    Year { value: String, source: ParseIntError },
    #[error("month failed: {value:?}: {source}")]
    Month { value: String, source: ParseIntError },
    #[error("day failed: {value:?}: {source}")]
    Day { value: String, source: ParseIntError },
    /// The digits roll over past the dates `chrono` can represent.
    #[error("{year:04}-{month:02}-{day:02} is outside the supported range")]
    OutOfRange { year: i32, month: i32, day: i32 },
}

/// The date in its raw, calendar and Unix epoch forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dates {
    pub value: String,
    /// `None` for a blank or malformed field; serialized as [`ZERO_TIME`].
    #[serde(rename = "iso", with = "iso")]
    pub time:  Option<DateTime<Utc>>,
    pub epoch: i64,
}

impl Dates {
    /// Decode the raw date field.  A blank field, or one that does not
    /// parse, gives the zero value; parse failures are logged.
    pub fn decode(raw: &[u8; 8]) -> Self {
        if raw.iter().all(|&b| b == 0 || b.is_ascii_whitespace()) {
            return Self::default();
        }
        match parse(raw) {
            Ok(time) => Self {
                value: String::from_utf8_lossy(raw).into_owned(),
                time:  Some(time),
                epoch: time.timestamp(),
            },
            Err(e) => {
                warn!(error = %e, "sauce date error");
                Self::default()
            }
        }
    }

    /// The date as RFC 3339 text, [`ZERO_TIME`] when there is none.
    pub fn iso(&self) -> String {
        self.time
            .map_or_else(|| ZERO_TIME.to_string(), |t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    /// The date in a human readable layout, empty when there is none.
    pub fn humanize(&self, layout: DateLayout) -> String {
        self.time.map(|t| layout.format(&t)).unwrap_or_default()
    }
}

/// Parse `CCYYMMDD` into midnight UTC of that day.
///
/// Months and days past the end of their range roll over the way a calendar
/// counts on, so `20160230` is 1 March 2016 and a zero day is the last day
/// of the previous month.
pub fn parse(raw: &[u8; 8]) -> Result<DateTime<Utc>, DateError> {
    let part = |range: std::ops::Range<usize>| String::from_utf8_lossy(&raw[range]).into_owned();

    let (y, m, d) = (part(0..4), part(4..6), part(6..8));
    let year: i32 = y.parse().map_err(|source| DateError::Year { value: y.clone(), source })?;
    let month: i32 = m.parse().map_err(|source| DateError::Month { value: m.clone(), source })?;
    let day: i32 = d.parse().map_err(|source| DateError::Day { value: d.clone(), source })?;

    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|jan| shift_months(jan, month - 1))
        .and_then(|first| shift_days(first, i64::from(day) - 1))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or(DateError::OutOfRange { year, month, day })
}

fn shift_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let n = Months::new(months.unsigned_abs());
    if months < 0 { date.checked_sub_months(n) } else { date.checked_add_months(n) }
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let n = Days::new(days.unsigned_abs());
    if days < 0 { date.checked_sub_days(n) } else { date.checked_add_days(n) }
}

/// Serde adapter that keeps `iso` a string for undated records.
mod iso {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::ZERO_TIME;

    pub fn serialize<S: Serializer>(time: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => s.serialize_str(&t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None    => s.serialize_str(ZERO_TIME),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        let text = String::deserialize(d)?;
        if text == ZERO_TIME {
            return Ok(None);
        }
        DateTime::parse_from_rfc3339(&text)
            .map(|t| Some(t.with_timezone(&Utc)))
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap().and_utc()
    }

    #[test]
    fn test_decode_example() {
        let dates = Dates::decode(b"20161126");
        assert_eq!(dates.value, "20161126");
        assert_eq!(dates.epoch, 1_480_118_400);
        let time = dates.time.unwrap();
        assert_eq!(time.format(SAUCE_DATE_FORMAT).to_string(), "20161126");
        assert_eq!(dates.iso(), "2016-11-26T00:00:00Z");
    }

    #[test]
    fn test_blank_is_zero() {
        assert_eq!(Dates::decode(&[0u8; 8]), Dates::default());
        assert_eq!(Dates::decode(b"        "), Dates::default());
        assert_eq!(Dates::default().iso(), ZERO_TIME);
    }

    #[test]
    fn test_field_errors() {
        assert!(matches!(parse(b"19x01231"), Err(DateError::Year { .. })));
        assert!(matches!(parse(b"1990ab31"), Err(DateError::Month { .. })));
        assert!(matches!(parse(b"199012  "), Err(DateError::Day { .. })));
    }

    #[test]
    fn test_calendar_overflow_rolls_over() {
        assert_eq!(parse(b"20160230").unwrap(), ymd(2016, 3, 1));
        assert_eq!(parse(b"20161300").unwrap(), ymd(2016, 12, 31));
        assert_eq!(parse(b"19901332").unwrap(), ymd(1991, 2, 1));
        assert_eq!(parse(b"20170100").unwrap(), ymd(2016, 12, 31));
        assert_eq!(parse(b"00000000").unwrap(), ymd(-1, 11, 30));
        assert_eq!(Dates::decode(b"20160230").value, "20160230");
    }

    #[test]
    fn test_malformed_degrades() {
        assert_eq!(Dates::decode(b"notadate"), Dates::default());
    }

    #[test]
    fn test_epoch_start() {
        assert_eq!(Dates::decode(b"19700101").epoch, 0);
    }

    #[test]
    fn test_zero_time_json() {
        let js = serde_json::to_string(&Dates::default()).unwrap();
        assert_eq!(js, r#"{"value":"","iso":"0001-01-01T00:00:00Z","epoch":0}"#);
        let back: Dates = serde_json::from_str(&js).unwrap();
        assert_eq!(back, Dates::default());

        let dated = Dates::decode(b"20161126");
        let back: Dates = serde_json::from_str(&serde_json::to_string(&dated).unwrap()).unwrap();
        assert_eq!(back, dated);
    }

    #[test]
    fn test_humanize() {
        let dates = Dates::decode(b"20200101");
        assert_eq!(dates.humanize(DateLayout::Dmy), "1 Jan 2020");
        assert_eq!(Dates::default().humanize(DateLayout::Dmy), "");
    }
}
