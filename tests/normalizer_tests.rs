//! Normalizer behavior across the documented input formats: totality,
//! determinism, and idempotence on already-canonical values.

use leadmap::normalize::{date, employee, region, revenue, tech_stack, website};
use leadmap::{EmployeeCount, Revenue, TouchDate};
use pretty_assertions::assert_eq;

#[test]
fn employee_count_outputs_are_canonical_or_unknown() {
    let canonical = ["1-50", "50-200", "200-500", "500-1,000", "1000+", "Unknown"];
    let inputs = ["500-1,000", "500 to 1000", "1000+", "five hundred", "Unknown", ""];
    for raw in inputs {
        let normalized = employee::normalize(raw);
        assert!(
            canonical.contains(&normalized.to_string().as_str()),
            "{raw:?} produced non-canonical {normalized:?}"
        );
    }
}

#[test]
fn employee_count_normalization_is_deterministic_and_idempotent() {
    let inputs = ["500-1,000", "500 to 1000", "1000+", "five hundred", "Unknown", "", "a few dozen"];
    for raw in inputs {
        let first = employee::normalize(raw);
        let again = employee::normalize(raw);
        assert_eq!(first, again, "non-deterministic for {raw:?}");

        let renormalized = employee::normalize(&first.to_string());
        assert_eq!(first, renormalized, "not idempotent for {raw:?}");
    }
}

#[test]
fn revenue_covers_documented_formats() {
    assert_eq!(revenue::normalize("€20M"), Revenue::Millions(20));
    assert_eq!(revenue::normalize("$1.5B"), Revenue::Millions(1500));
    assert_eq!(revenue::normalize("5000000"), Revenue::Millions(5));
    assert_eq!(revenue::normalize("USD 250M"), Revenue::Millions(250));
    assert_eq!(revenue::normalize("call us"), Revenue::Unknown);
}

#[test]
fn revenue_canonical_form_is_idempotent() {
    for raw in ["€20M", "$1.5B", "5000000", "USD 250M"] {
        let first = revenue::normalize(raw);
        let renormalized = revenue::normalize(&first.to_string());
        assert_eq!(first, renormalized);
    }
}

#[test]
fn date_formats_converge_on_iso() {
    let expected = date::normalize("2025-07-01");
    assert!(matches!(expected, TouchDate::Date(_)));
    assert_eq!(date::normalize("7/1/25"), expected);
    assert_eq!(date::normalize("07/01/2025"), expected);
    assert_eq!(date::normalize("July 1, 2025"), expected);
}

#[test]
fn unrecognized_date_text_passes_through_unchanged() {
    assert_eq!(
        date::normalize("next quarter probably"),
        TouchDate::Raw("next quarter probably".into())
    );
}

#[test]
fn region_codes_map_to_canonical_names() {
    assert_eq!(region::normalize("AMS").to_string(), "Americas");
    assert_eq!(region::normalize("uki").to_string(), "UK & Ireland");
    assert_eq!(region::normalize("MDO").to_string(), "MEA");
    assert_eq!(region::normalize("apj").to_string(), "APJ");
    assert_eq!(region::normalize("").to_string(), "Unknown");
}

#[test]
fn website_strips_scheme_prefix_and_slash() {
    assert_eq!(
        website::normalize("https://www.Example.com/"),
        Some("example.com".into())
    );
    assert_eq!(website::normalize("n/a"), None);
}

#[test]
fn tech_stack_splitting_is_delimiter_order_independent() {
    let mixed = tech_stack::normalize("a & b; c, d | e");
    assert_eq!(mixed, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn pass_through_policy_keeps_unrecognized_values() {
    // Ambiguity resolves to best-effort pass-through, not data loss.
    assert_eq!(
        employee::normalize("rather large"),
        EmployeeCount::Other("Rather Large".into())
    );
    assert_eq!(region::normalize("LATAM").to_string(), "LATAM");
    assert_eq!(
        date::normalize("soonish"),
        TouchDate::Raw("soonish".into())
    );
}
