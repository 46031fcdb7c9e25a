//! Birthday date math: display formatting, upcoming occurrence, days left,
//! age and zodiac sign for a date of birth.
//!
//! Every computation takes the reference day ("today") as a parameter and
//! never reads the clock, so results depend only on their inputs.

pub mod age;
pub mod birthday;
pub mod card;
pub mod date;
pub mod error;
pub mod summary;
pub mod zodiac;

pub use age::{AgeBreakdown, age_breakdown, calculate_age, next_age};
pub use birthday::{
    LEAP_DAY_POLICY, LeapDayPolicy, birthday_this_year, days_until_birthday, upcoming_occurrence,
};
pub use date::{
    BirthDate, format_display_date, mask_date_input, parse_display_date, parse_iso_date,
    parse_masked_date,
};
pub use error::{InvalidDateError, Result};
pub use summary::{BirthdaySummary, URGENT_WITHIN_DAYS, upcoming_birthdays};
pub use zodiac::{ZodiacSign, zodiac_sign};
