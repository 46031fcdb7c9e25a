//! age.rs
//!
//! Age in whole years, plus a human-readable breakdown in the format:
//!     "X years, Y months, Z days"
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python's
//! relativedelta). The breakdown starts from the last observed anniversary
//! and steps whole months with `checked_add_months`, which clamps to the end
//! of short months, so a Jan 31 birth reaches one month on Feb 28/29.
//!
//! Whole-year age follows the observed anniversary from `birthday`, so a
//! Feb 29 birthday ages on the same day `days_until_birthday` reports 0.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::birthday::{LEAP_DAY_POLICY, birthday_this_year, upcoming_occurrence};
use crate::date::BirthDate;
use crate::error::{InvalidDateError, Result};

/// Completed years at `reference`.
pub fn calculate_age(birth: &BirthDate, reference: NaiveDate) -> Result<u32> {
    ensure_born(birth, reference)?;

    let mut years = reference.year() - birth.year();
    if reference < birthday_this_year(birth, reference)? {
        years -= 1;
    }
    Ok(years as u32)
}

/// The age reached on the upcoming birthday ("turns N").
pub fn next_age(birth: &BirthDate, reference: NaiveDate) -> Result<u32> {
    ensure_born(birth, reference)?;
    calculate_age(birth, upcoming_occurrence(birth, reference)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Returns the age as years, months and days
pub fn age_breakdown(birth: &BirthDate, reference: NaiveDate) -> Result<AgeBreakdown> {
    let years = calculate_age(birth, reference)?;
    let anniversary = LEAP_DAY_POLICY.observe(birth, birth.year() + years as i32)?;

    // Latest month anniversary on or before `reference`; there are at most
    // eleven between two yearly anniversaries.
    let mut months = 0;
    let mut since = anniversary;
    for m in 1..12 {
        let step = birth
            .date()
            .checked_add_months(Months::new(years * 12 + m))
            .ok_or_else(|| {
                InvalidDateError::out_of_range(birth.year(), birth.month(), birth.day())
            })?;
        if step > reference {
            break;
        }
        months = m;
        since = step;
    }

    Ok(AgeBreakdown {
        years,
        months,
        days: (reference - since).num_days() as u32,
    })
}

impl fmt::Display for AgeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

fn ensure_born(birth: &BirthDate, reference: NaiveDate) -> Result<()> {
    if birth.date() > reference {
        tracing::debug!(%birth, %reference, "birth date after reference date");
        return Err(InvalidDateError::BornAfterReference {
            birth: birth.date(),
            reference,
        });
    }
    Ok(())
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}
