//! Last-touch date normalization.
//!
//! Patterns are tried in a fixed order: ISO `YYYY-MM-DD`, slash-separated
//! `M/D/Y` with a two- or four-digit year, then textual `Month D, YYYY`.
//! Two-digit years get a `20` prefix. Text matching no pattern is carried
//! through raw; callers must tolerate non-canonical dates downstream.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::TouchDate;
use crate::normalize::is_missing;

static ISO: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap());
static SLASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{2,4})").unwrap());
static TEXTUAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z]+)\s+(\d{1,2}),?\s+(\d{4})").unwrap());

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

pub fn normalize(raw: &str) -> TouchDate {
    if is_missing(raw) {
        return TouchDate::Missing;
    }

    let value = raw.trim();

    if let Some(caps) = ISO.captures(value) {
        if let Some(date) = build_date(&caps[1], &caps[2], &caps[3]) {
            return TouchDate::Date(date);
        }
    }

    if let Some(caps) = SLASH.captures(value) {
        let year = expand_year(&caps[3]);
        if let Some(date) = build_date(&year, &caps[1], &caps[2]) {
            return TouchDate::Date(date);
        }
    }

    if let Some(caps) = TEXTUAL.captures(value) {
        let month = month_number(&caps[1]);
        if let Some(date) = build_date(&caps[3], &month.to_string(), &caps[2]) {
            return TouchDate::Date(date);
        }
    }

    TouchDate::Raw(value.to_string())
}

fn build_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn expand_year(year: &str) -> String {
    if year.len() == 2 {
        format!("20{year}")
    } else {
        year.to_string()
    }
}

/// Month name lookup; an unrecognized name defaults to January.
fn month_number(name: &str) -> u32 {
    let lowered = name.to_lowercase();
    MONTHS
        .iter()
        .position(|month| *month == lowered)
        .map(|index| index as u32 + 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> TouchDate {
        TouchDate::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn iso_dates_pass_unchanged() {
        assert_eq!(normalize("2025-07-01"), date(2025, 7, 1));
    }

    #[test]
    fn slash_dates_with_short_year() {
        assert_eq!(normalize("7/1/25"), date(2025, 7, 1));
        assert_eq!(normalize("05/16/25"), date(2025, 5, 16));
    }

    #[test]
    fn slash_dates_with_full_year() {
        assert_eq!(normalize("07/01/2025"), date(2025, 7, 1));
    }

    #[test]
    fn textual_dates() {
        assert_eq!(normalize("July 1, 2025"), date(2025, 7, 1));
        assert_eq!(normalize("March 01, 2025"), date(2025, 3, 1));
        assert_eq!(normalize("April 04 2025"), date(2025, 4, 4));
    }

    #[test]
    fn unrecognized_month_defaults_to_january() {
        assert_eq!(normalize("Juli 1, 2025"), date(2025, 1, 1));
    }

    #[test]
    fn unmatched_text_passes_through_raw() {
        assert_eq!(
            normalize("sometime last spring"),
            TouchDate::Raw("sometime last spring".into())
        );
    }

    #[test]
    fn invalid_calendar_dates_pass_through_raw() {
        assert_eq!(normalize("2025-13-40"), TouchDate::Raw("2025-13-40".into()));
    }

    #[test]
    fn missing_markers_map_to_missing() {
        for raw in ["", "nan", "Unknown", "n/a"] {
            assert_eq!(normalize(raw), TouchDate::Missing);
        }
    }
}
