//! Fuzzy calendar-date parsing and the date-range experience heuristic

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

const DEFAULT_YEAR: i32 = 1900;

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Parse a loosely formatted date mention, ignoring words that aren't date parts.
///
/// Missing components fall back to 1900-01-01. Returns `None` when no date part
/// is present at all, or when the parts don't form a real calendar date.
pub fn parse_fuzzy_date(text: &str) -> Option<NaiveDate> {
    let mut year: Option<i32> = None;
    let mut month_name: Option<u32> = None;
    let mut numbers: Vec<u32> = Vec::new();

    let lowered = text.to_lowercase();
    let tokens = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty());

    for token in tokens {
        let digits = token.trim_end_matches(|c: char| c.is_alphabetic());
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            if digits.len() > 4 {
                continue;
            }
            let value: u32 = digits.parse().ok()?;
            if digits.len() == 4 && year.is_none() {
                year = Some(value as i32);
            } else if digits.len() <= 2 {
                numbers.push(value);
            }
        } else if month_name.is_none() {
            month_name = month_from_word(token);
        }
    }

    let (month, day) = match month_name {
        Some(month) => (Some(month), numbers.first().copied()),
        None => (numbers.first().copied(), numbers.get(1).copied()),
    };

    if year.is_none() && month.is_none() && day.is_none() {
        return None;
    }

    NaiveDate::from_ymd_opt(
        year.unwrap_or(DEFAULT_YEAR),
        month.unwrap_or(1),
        day.unwrap_or(1),
    )
}

fn month_from_word(word: &str) -> Option<u32> {
    if word.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|month| month.starts_with(word))
        .map(|index| index as u32 + 1)
}

/// Turns the date mentions of a text into a count of years worked.
pub trait TimelineEstimator: Send + Sync {
    fn estimate_years(&self, date_mentions: &[String]) -> u32;
}

/// Sorts parsed dates and reads them as consecutive start/end pairs.
///
/// Every calendar year touched by a valid pair (start strictly before end) counts
/// once. Unparsable mentions are skipped; a trailing unpaired date is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialPairEstimator;

impl TimelineEstimator for SequentialPairEstimator {
    fn estimate_years(&self, date_mentions: &[String]) -> u32 {
        let mut dates: Vec<NaiveDate> = date_mentions
            .iter()
            .filter_map(|mention| parse_fuzzy_date(mention))
            .collect();
        dates.sort();

        let mut years_worked = BTreeSet::new();
        for pair in dates.chunks_exact(2) {
            let (start, end) = (pair[0], pair[1]);
            if start < end {
                years_worked.extend(start.year()..=end.year());
            }
        }

        years_worked.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mentions(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_month_year() {
        assert_eq!(parse_fuzzy_date("Jan 2018"), Some(ymd(2018, 1, 1)));
        assert_eq!(parse_fuzzy_date("Sept. 2020"), Some(ymd(2020, 9, 1)));
        assert_eq!(parse_fuzzy_date("September 3rd, 2019"), Some(ymd(2019, 9, 3)));
    }

    #[test]
    fn test_parse_numeric_forms() {
        assert_eq!(parse_fuzzy_date("06/2021"), Some(ymd(2021, 6, 1)));
        assert_eq!(parse_fuzzy_date("2021-11"), Some(ymd(2021, 11, 1)));
        assert_eq!(parse_fuzzy_date("2015"), Some(ymd(2015, 1, 1)));
    }

    #[test]
    fn test_missing_year_defaults() {
        assert_eq!(parse_fuzzy_date("March"), Some(ymd(1900, 3, 1)));
    }

    #[test]
    fn test_unparsable_mentions() {
        assert_eq!(parse_fuzzy_date("Present"), None);
        assert_eq!(parse_fuzzy_date(""), None);
        assert_eq!(parse_fuzzy_date("Feb 30, 2020"), None);
    }

    #[test]
    fn test_pairs_count_inclusive_years() {
        let estimator = SequentialPairEstimator;
        let years = estimator.estimate_years(&mentions(&["Jan 2018", "Mar 2021"]));
        assert_eq!(years, 4);
    }

    #[test]
    fn test_overlapping_ranges_count_years_once() {
        let estimator = SequentialPairEstimator;
        // Sorted: 2016, 2018 | 2018-06, 2020
        let years = estimator.estimate_years(&mentions(&["2018", "2016", "Jun 2018", "2020"]));
        assert_eq!(years, 5);
    }

    #[test]
    fn test_unpaired_and_unparsable_dates_are_dropped() {
        let estimator = SequentialPairEstimator;
        assert_eq!(estimator.estimate_years(&mentions(&["2019", "Present"])), 0);
        assert_eq!(estimator.estimate_years(&mentions(&["2010", "2012", "2020"])), 3);
        assert_eq!(estimator.estimate_years(&[]), 0);
    }

    #[test]
    fn test_equal_dates_are_not_a_range() {
        let estimator = SequentialPairEstimator;
        assert_eq!(estimator.estimate_years(&mentions(&["2019", "2019"])), 0);
    }
}
