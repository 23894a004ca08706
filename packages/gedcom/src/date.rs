//! GEDCOM date values and the date sub-grammar.
//!
//! Supported forms, tried in order:
//! - `ABT 1984` (approximate, year only)
//! - `12 MAY 1984` (three-letter or full English month name)
//! - `12.05.1984`
//! - `1984` (year only, exact)

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};
use serde::Serialize;

use crate::error::{GedcomError, Result};

/// Keyword marking an approximate date.
const APPROXIMATE_KEYWORD: &str = "ABT";

/// Length of a `dd.mm.yyyy` token.
const DOTTED_LEN: usize = 10;

/// A date as recorded in a GEDCOM `DATE` line.
///
/// Day and month are either both present or both absent, and an approximate
/// date never carries them. Dates read in `<day> <month-name> <year>` form are
/// not checked against the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GedcomDate {
    #[serde(skip_serializing_if = "Option::is_none")]
    day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    month: Option<u32>,
    year: i32,
    approximate: bool,
}

impl GedcomDate {
    /// Exact calendar date.
    ///
    /// Returns `None` when day and month do not form a real date in `year`.
    #[must_use]
    pub fn new(day: u32, month: u32, year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    /// Exact date known only by year.
    #[must_use]
    pub fn year_only(year: i32) -> Self {
        Self {
            day: None,
            month: None,
            year,
            approximate: false,
        }
    }

    /// Approximate date ("about <year>").
    #[must_use]
    pub fn approximate(year: i32) -> Self {
        Self {
            approximate: true,
            ..Self::year_only(year)
        }
    }

    #[must_use]
    pub fn day(&self) -> Option<u32> {
        self.day
    }

    #[must_use]
    pub fn month(&self) -> Option<u32> {
        self.month
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn is_approximate(&self) -> bool {
        self.approximate
    }

    /// Parse a GEDCOM date value.
    ///
    /// # Examples
    /// ```
    /// use gedcom_ahnentafel::GedcomDate;
    ///
    /// let date = GedcomDate::parse("12 MAY 1984").unwrap();
    /// assert_eq!((date.day(), date.month(), date.year()), (Some(12), Some(5), 1984));
    /// assert_eq!(date.to_string(), "12-05-1984");
    ///
    /// assert_eq!(GedcomDate::parse("ABT 1984").unwrap().to_string(), "Ca 1984");
    /// assert!(GedcomDate::parse("sometime").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || GedcomDate::invalid(text);
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let first = *tokens.first().ok_or_else(invalid)?;

        if first.eq_ignore_ascii_case(APPROXIMATE_KEYWORD) {
            return match tokens.as_slice() {
                [_, year] => year
                    .parse::<i32>()
                    .map(Self::approximate)
                    .map_err(|_| invalid()),
                _ => Err(invalid()),
            };
        }

        match tokens.as_slice() {
            [day, month, year] => parse_day_month_year(day, month, year).ok_or_else(invalid),
            [single] => parse_dotted(single)
                .or_else(|| single.parse::<i32>().ok().map(Self::year_only))
                .ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }

    fn invalid(text: &str) -> GedcomError {
        GedcomError::InvalidDate(text.trim().to_string())
    }
}

/// `<day> <month-name> <year>`.
///
/// Only the shape is checked here: transcribed values such as `31 FEB 1900`
/// or `0 JAN 1900` are kept as written.
fn parse_day_month_year(day: &str, month: &str, year: &str) -> Option<GedcomDate> {
    let day = day.parse::<u32>().ok()?;
    let month = Month::from_str(month).ok()?;
    let year = year.parse::<i32>().ok()?;
    Some(GedcomDate {
        day: Some(day),
        month: Some(month.number_from_month()),
        year,
        approximate: false,
    })
}

/// `<dd>.<mm>.<yyyy>`, two-digit day and month, checked against the calendar.
fn parse_dotted(token: &str) -> Option<GedcomDate> {
    let bytes = token.as_bytes();
    if bytes.len() != DOTTED_LEN || bytes[2] != b'.' || bytes[5] != b'.' {
        return None;
    }
    NaiveDate::parse_from_str(token, "%d.%m.%Y")
        .ok()
        .map(GedcomDate::from)
}

impl From<NaiveDate> for GedcomDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: Some(date.day()),
            month: Some(date.month()),
            year: date.year(),
            approximate: false,
        }
    }
}

impl FromStr for GedcomDate {
    type Err = GedcomError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for GedcomDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.approximate {
            return write!(f, "Ca {}", self.year);
        }
        match (self.day, self.month) {
            (Some(day), Some(month)) => write!(f, "{day:02}-{month:02}-{}", self.year),
            _ => write!(f, "{}", self.year),
        }
    }
}
