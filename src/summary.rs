use chrono::NaiveDate;
use serde::Serialize;

use crate::age::{AgeBreakdown, age_breakdown, calculate_age, next_age};
use crate::birthday::{days_until_birthday, upcoming_occurrence};
use crate::date::{BirthDate, format_display_date};
use crate::error::Result;
use crate::zodiac::{ZodiacSign, zodiac_sign};

/// Birthdays this close are highlighted on the card.
pub const URGENT_WITHIN_DAYS: u32 = 7;

/// Everything a birthday card shows for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdaySummary {
    pub name: String,
    pub birth_date: BirthDate,
    pub display_date: String,
    pub upcoming: NaiveDate,
    pub days_until: u32,
    pub age: u32,
    pub turns: u32,
    pub age_detail: AgeBreakdown,
    pub zodiac: ZodiacSign,
    pub urgent: bool,
}

impl BirthdaySummary {
    pub fn compute(name: impl Into<String>, birth: BirthDate, reference: NaiveDate) -> Result<Self> {
        let days_until = days_until_birthday(&birth, reference)?;
        Ok(Self {
            name: name.into(),
            birth_date: birth,
            display_date: format_display_date(&birth),
            upcoming: upcoming_occurrence(&birth, reference)?,
            days_until,
            age: calculate_age(&birth, reference)?,
            turns: next_age(&birth, reference)?,
            age_detail: age_breakdown(&birth, reference)?,
            zodiac: zodiac_sign(&birth),
            urgent: days_until <= URGENT_WITHIN_DAYS,
        })
    }

    pub fn is_today(&self) -> bool {
        self.days_until == 0
    }
}

/// Summaries ordered by how soon the birthday comes, ties broken by name.
/// `search` keeps names containing it, ignoring case; `limit` then truncates
/// the list (the home screen shows the next two).
pub fn upcoming_birthdays<I, S>(
    entries: I,
    reference: NaiveDate,
    search: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<BirthdaySummary>>
where
    I: IntoIterator<Item = (S, BirthDate)>,
    S: Into<String>,
{
    let mut summaries = entries
        .into_iter()
        .map(|(name, birth)| BirthdaySummary::compute(name, birth, reference))
        .collect::<Result<Vec<_>>>()?;

    summaries.sort_by(|a, b| {
        a.days_until
            .cmp(&b.days_until)
            .then_with(|| a.name.cmp(&b.name))
    });
    if let Some(term) = search {
        let term = term.to_lowercase();
        summaries.retain(|s| s.name.to_lowercase().contains(&term));
    }
    if let Some(limit) = limit {
        summaries.truncate(limit);
    }

    tracing::debug!(
        reference = %reference,
        count = summaries.len(),
        "computed upcoming birthdays"
    );
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::parse_iso_date;

    fn birth(s: &str) -> BirthDate {
        s.parse().unwrap()
    }

    #[test]
    fn summary_for_child_turning_nine() {
        let reference = parse_iso_date("2024-07-20").unwrap();
        let summary = BirthdaySummary::compute("Mia", birth("2015-07-25"), reference).unwrap();

        assert_eq!(summary.display_date, "25.07.2015");
        assert_eq!(summary.upcoming, parse_iso_date("2024-07-25").unwrap());
        assert_eq!(summary.days_until, 5);
        assert_eq!(summary.age, 8);
        assert_eq!(summary.turns, 9);
        assert_eq!(summary.zodiac, ZodiacSign::Leo);
        assert!(summary.urgent);
        assert!(!summary.is_today());
    }

    #[test]
    fn urgency_threshold() {
        let reference = parse_iso_date("2024-07-17").unwrap();
        let at_limit = BirthdaySummary::compute("a", birth("2015-07-24"), reference).unwrap();
        let past_limit = BirthdaySummary::compute("b", birth("2015-07-25"), reference).unwrap();
        assert_eq!(at_limit.days_until, 7);
        assert!(at_limit.urgent);
        assert_eq!(past_limit.days_until, 8);
        assert!(!past_limit.urgent);
    }

    #[test]
    fn sorted_by_days_then_name_and_limited() {
        let reference = parse_iso_date("2024-12-31").unwrap();
        let entries = vec![
            ("Noah", birth("2018-03-03")),
            ("Emma", birth("2020-01-01")),
            ("Ava", birth("2019-01-01")),
            ("Liam", birth("2016-12-31")),
        ];

        let all = upcoming_birthdays(entries.clone(), reference, None, None).unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Liam", "Ava", "Emma", "Noah"]);
        assert!(all[0].is_today());

        let top = upcoming_birthdays(entries, reference, None, Some(2)).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[1].name, "Ava");
    }

    #[test]
    fn search_ignores_case_and_applies_before_limit() {
        let reference = parse_iso_date("2024-12-31").unwrap();
        let entries = [
            ("Liam", birth("2016-12-31")),
            ("Emma", birth("2020-01-01")),
            ("Emmett", birth("2018-03-03")),
        ];

        let found = upcoming_birthdays(entries, reference, Some("EMM"), Some(5)).unwrap();
        let names: Vec<&str> = found.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Emma", "Emmett"]);

        let first = upcoming_birthdays(entries, reference, Some("emm"), Some(1)).unwrap();
        assert_eq!(first[0].name, "Emma");

        assert!(upcoming_birthdays(entries, reference, Some("zoe"), None).unwrap().is_empty());
        assert_eq!(upcoming_birthdays(entries, reference, Some(""), None).unwrap().len(), 3);
    }

    #[test]
    fn one_unborn_entry_fails_the_list() {
        let reference = parse_iso_date("2024-01-01").unwrap();
        let entries = [("Old", birth("2000-01-01")), ("Unborn", birth("2030-01-01"))];
        assert!(upcoming_birthdays(entries, reference, None, None).is_err());
    }

    #[test]
    fn serializes_for_clients() {
        let reference = parse_iso_date("2024-12-10").unwrap();
        let summary = BirthdaySummary::compute("Sam", birth("1990-12-10"), reference).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["birth_date"], "1990-12-10");
        assert_eq!(json["upcoming"], "2024-12-10");
        assert_eq!(json["days_until"], 0);
        assert_eq!(json["age"], 34);
        assert_eq!(json["zodiac"], "Sagittarius");
        assert_eq!(json["age_detail"]["years"], 34);
    }
}
