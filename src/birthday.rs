//! Where a birthday falls relative to a reference day.
//!
//! Every function takes the reference date explicitly; nothing here reads
//! the clock. Dates are `NaiveDate`, so there is no time of day to
//! normalize.

use chrono::{Datelike, NaiveDate};

use crate::date::{BirthDate, ymd};
use crate::error::Result;

/// How a February 29 birthday is observed in a common year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeapDayPolicy {
    February28,
    March1,
}

/// The policy applied by every function in this crate.
pub const LEAP_DAY_POLICY: LeapDayPolicy = LeapDayPolicy::February28;

impl LeapDayPolicy {
    /// The day in `year` on which `birth` is celebrated.
    pub fn observe(self, birth: &BirthDate, year: i32) -> Result<NaiveDate> {
        if let Some(date) = NaiveDate::from_ymd_opt(year, birth.month(), birth.day()) {
            return Ok(date);
        }
        // Only Feb 29 in a common year lands here (or a year chrono cannot
        // represent, which `ymd` reports).
        match self {
            LeapDayPolicy::February28 => ymd(year, 2, 28),
            LeapDayPolicy::March1 => ymd(year, 3, 1),
        }
    }
}

/// The anniversary in the reference year, whether or not it has passed.
pub fn birthday_this_year(birth: &BirthDate, reference: NaiveDate) -> Result<NaiveDate> {
    LEAP_DAY_POLICY.observe(birth, reference.year())
}

/// The first anniversary on or after `reference`.
pub fn upcoming_occurrence(birth: &BirthDate, reference: NaiveDate) -> Result<NaiveDate> {
    let candidate = birthday_this_year(birth, reference)?;
    if candidate < reference {
        LEAP_DAY_POLICY.observe(birth, reference.year() + 1)
    } else {
        Ok(candidate)
    }
}

/// Whole days until the upcoming occurrence; 0 when `reference` is the
/// birthday.
pub fn days_until_birthday(birth: &BirthDate, reference: NaiveDate) -> Result<u32> {
    let target = upcoming_occurrence(birth, reference)?;
    let days = (target - reference).num_days().max(0);
    Ok(days as u32)
}
