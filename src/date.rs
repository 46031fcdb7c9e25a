//! Calendar date input and display.
//!
//! Dates come in from callers as ISO `yyyy-mm-dd` strings, from the
//! date-entry form as masked `dd-mm-yyyy`, and go out to users as
//! `dd.mm.yyyy`. Every entry point validates strictly: fixed field widths,
//! digits only, and a real calendar day (so `2023-02-29` and `2024-04-31`
//! are rejected rather than rolled over).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{InvalidDateError, Result};

const ISO_FORMAT: &str = "yyyy-mm-dd";
const DISPLAY_FORMAT: &str = "dd.mm.yyyy";
const MASKED_FORMAT: &str = "dd-mm-yyyy";

/// Digits kept by [`mask_date_input`]: two for the day, two for the month,
/// four for the year.
const MASK_MAX_DIGITS: usize = 8;

/// A validated date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        ymd(year, month, day).map(BirthDate)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn is_leap_day(&self) -> bool {
        self.month() == 2 && self.day() == 29
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        BirthDate(date)
    }
}

impl FromStr for BirthDate {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self> {
        parse_iso_date(s).map(BirthDate)
    }
}

impl TryFrom<String> for BirthDate {
    type Error = InvalidDateError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<BirthDate> for String {
    fn from(birth: BirthDate) -> Self {
        birth.to_string()
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Parses a strict ISO `yyyy-mm-dd` date. Used for birth dates and for
/// reference dates supplied by callers.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    let [year, month, day] = split_fields(input, '-', [4, 2, 2], ISO_FORMAT)?;
    ymd(year as i32, month, day)
}

/// Formats a birth date the way every screen shows it: `dd.mm.yyyy`.
pub fn format_display_date(birth: &BirthDate) -> String {
    format!("{:02}.{:02}.{:04}", birth.day(), birth.month(), birth.year())
}

/// Inverse of [`format_display_date`].
pub fn parse_display_date(input: &str) -> Result<BirthDate> {
    let [day, month, year] = split_fields(input, '.', [2, 2, 4], DISPLAY_FORMAT)?;
    BirthDate::new(year as i32, month, day)
}

/// Progressive input mask for the birth-date field.
///
/// Non-digits are dropped and at most eight digits are kept, grouped as
/// `dd-mm-yyyy` while the user types: `"2507"` becomes `"25-07"`,
/// `"25072015"` becomes `"25-07-2015"`.
pub fn mask_date_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MASK_MAX_DIGITS)
        .collect();

    let mut masked = String::with_capacity(MASKED_FORMAT.len());
    for (i, c) in digits.chars().enumerate() {
        if i == 2 || i == 4 {
            masked.push('-');
        }
        masked.push(c);
    }
    masked
}

/// Validates a completed mask produced by [`mask_date_input`].
pub fn parse_masked_date(input: &str) -> Result<BirthDate> {
    let [day, month, year] = split_fields(input, '-', [2, 2, 4], MASKED_FORMAT)?;
    BirthDate::new(year as i32, month, day)
}

pub(crate) fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| InvalidDateError::out_of_range(year, month, day))
}

/// Splits `input` on `sep` into exactly three all-digit fields of the given
/// widths.
fn split_fields(
    input: &str,
    sep: char,
    widths: [usize; 3],
    expected: &'static str,
) -> Result<[u32; 3]> {
    let parts: Vec<&str> = input.split(sep).collect();
    if parts.len() != 3 {
        return Err(InvalidDateError::unparsable(input, expected));
    }

    let mut out = [0u32; 3];
    for ((slot, part), width) in out.iter_mut().zip(&parts).zip(widths) {
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidDateError::unparsable(input, expected));
        }
        *slot = part
            .parse()
            .map_err(|_| InvalidDateError::unparsable(input, expected))?;
    }
    Ok(out)
}
