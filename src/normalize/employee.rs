//! Employee-count normalization.
//!
//! Recognizes numeric ranges (`"500-1,000"`), `"X to Y"` phrasing,
//! trailing-`+` open ranges, and a couple of free-text idioms seen in the
//! source data. Unrecognized text is title-cased and passed through so no
//! data is lost.

use crate::core::{EmployeeBand, EmployeeCount};
use crate::normalize::{is_missing, title_case};

pub fn normalize(raw: &str) -> EmployeeCount {
    if is_missing(raw) {
        return EmployeeCount::Unknown;
    }

    let value = raw.trim().to_lowercase();

    // Free-text idioms observed in the dataset.
    if value.contains("five hundred") || value.contains("approx 800") {
        return EmployeeCount::Band(EmployeeBand::From500To1000);
    }

    if value.contains('-') {
        return normalize_hyphen_range(raw, &value);
    }
    if value.contains("to") {
        return normalize_to_range(raw, &value);
    }
    if value.contains('+') {
        return normalize_open_range(raw, &value);
    }

    EmployeeCount::Other(title_case(raw.trim()))
}

/// `"500-1,000"` / `"50-200"` style ranges. Endpoints with thousands
/// commas are accepted; unknown endpoint pairs pass through.
fn normalize_hyphen_range(raw: &str, value: &str) -> EmployeeCount {
    let mut parts = value.splitn(2, '-');
    let bounds = (
        parts.next().and_then(parse_count),
        parts.next().and_then(parse_count),
    );
    match bounds {
        (Some(low), Some(high)) => match EmployeeBand::from_bounds(low, high) {
            Some(band) => EmployeeCount::Band(band),
            None => EmployeeCount::Other(title_case(raw.trim())),
        },
        _ => EmployeeCount::Other(title_case(raw.trim())),
    }
}

/// `"500 to 1000"` phrasing, rewritten to the equivalent range.
fn normalize_to_range(raw: &str, value: &str) -> EmployeeCount {
    let parts: Vec<&str> = value.splitn(2, "to").collect();
    if let [low, high] = parts.as_slice() {
        if let (Some(low), Some(high)) = (parse_count(low), parse_count(high)) {
            if let Some(band) = EmployeeBand::from_bounds(low, high) {
                return EmployeeCount::Band(band);
            }
        }
    }
    EmployeeCount::Other(title_case(raw.trim()))
}

/// `"1000+"` style open ranges.
fn normalize_open_range(raw: &str, value: &str) -> EmployeeCount {
    match parse_count(value.trim_end_matches('+')) {
        Some(count) if count >= 1000 => EmployeeCount::Band(EmployeeBand::Over1000),
        _ => EmployeeCount::Other(raw.trim().to_uppercase()),
    }
}

fn parse_count(text: &str) -> Option<u64> {
    text.trim().replace(',', "").parse().ok()
}
