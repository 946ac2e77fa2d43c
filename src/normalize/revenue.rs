//! Revenue normalization to whole USD millions.
//!
//! Accepts `€20M`, `$20M`, `USD 250M`, `$1.5B`, bare-unit figures like
//! `5000000`, and comma-grouped forms. The scale marker is read from the
//! original string: `M` means millions, `B` means billions, and a bare
//! number with seven or more digits is divided down to millions.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::Revenue;
use crate::normalize::is_missing;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)").unwrap());
static USD_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)usd").unwrap());

pub fn normalize(raw: &str) -> Revenue {
    if is_missing(raw) {
        return Revenue::Unknown;
    }

    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '€' | '$' | ','))
        .collect();
    let cleaned = USD_TOKEN.replace_all(&cleaned, "");

    let Some(capture) = NUMBER.captures(&cleaned) else {
        return Revenue::Unknown;
    };
    let Ok(number) = capture[1].parse::<f64>() else {
        return Revenue::Unknown;
    };

    let marker = raw.to_uppercase();
    if marker.contains('M') {
        Revenue::Millions(number as u64)
    } else if marker.contains('B') {
        Revenue::Millions((number * 1000.0) as u64)
    } else if digit_count(number) >= 7 {
        Revenue::Millions((number / 1_000_000.0) as u64)
    } else {
        Revenue::Millions(number as u64)
    }
}

fn digit_count(number: f64) -> usize {
    (number as u64).to_string().len()
}
