use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InvalidDateError>;

/// The only failure the date math can produce: input that is not a usable
/// calendar date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDateError {
    #[error("cannot parse {input:?} as {expected}")]
    Unparsable {
        input: String,
        expected: &'static str,
    },

    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    OutOfRange { year: i32, month: u32, day: u32 },

    #[error("birth date {birth} is after reference date {reference}")]
    BornAfterReference {
        birth: NaiveDate,
        reference: NaiveDate,
    },
}

impl InvalidDateError {
    pub(crate) fn unparsable<S: Into<String>>(input: S, expected: &'static str) -> Self {
        let input = input.into();
        tracing::debug!(%input, expected, "rejected date input");
        InvalidDateError::Unparsable { input, expected }
    }

    pub(crate) fn out_of_range(year: i32, month: u32, day: u32) -> Self {
        tracing::debug!(year, month, day, "rejected date components");
        InvalidDateError::OutOfRange { year, month, day }
    }
}
