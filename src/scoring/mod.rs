//! The composite scoring engine.
//!
//! Four independent, additive sub-scorers run over one normalized record
//! each. Every component is capped by its own table, so the total lands
//! in [0, 100] with no rescaling.

pub mod firmographic;
pub mod intent;
pub mod solution;
pub mod tech;

use chrono::NaiveDate;

use crate::config::ScoringConfig;
use crate::core::{NormalizedRecord, ScoreBreakdown};

/// Compute all four sub-scores for one record as of the given date.
pub fn score_record(
    record: &NormalizedRecord,
    config: &ScoringConfig,
    as_of: NaiveDate,
) -> ScoreBreakdown {
    ScoreBreakdown {
        firmographic: firmographic::score(record, &config.firmographic),
        solution_fit: solution::score(record, &config.solution),
        intent: intent::score(record, &config.intent, as_of),
        tech_compliance: tech::score(record, &config.tech),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawRecord;
    use crate::normalize::normalize_record;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
    }

    #[test]
    fn ideal_enterprise_risk_profile_scores_one_hundred() {
        let record = normalize_record(RawRecord {
            company_name: "Meridian Holdings".into(),
            employee_count: "1000+".into(),
            revenue: "$250M".into(),
            industry: "Financial Services".into(),
            solution_interest: "Risk".into(),
            contact_role: "Chief Risk Officer".into(),
            intent_score: "85".into(),
            lead_source: "Referral".into(),
            last_touch: "2025-07-10".into(),
            tech_stack: "Salesforce".into(),
            certifications: "SOX".into(),
            ..RawRecord::default()
        });
        let breakdown = score_record(&record, &ScoringConfig::default(), as_of());
        assert_eq!(breakdown.firmographic, 40);
        assert_eq!(breakdown.solution_fit, 25);
        assert_eq!(breakdown.intent, 20);
        assert_eq!(breakdown.tech_compliance, 15);
        assert_eq!(breakdown.total(), 100);
    }

    #[test]
    fn entirely_unknown_record_scores_component_floors() {
        let record = normalize_record(RawRecord::default());
        let breakdown = score_record(&record, &ScoringConfig::default(), as_of());
        // industry floor only
        assert_eq!(breakdown.firmographic, 3);
        // interest fallback + role floor
        assert_eq!(breakdown.solution_fit, 8);
        // source fallback only; intent and touch are absent
        assert_eq!(breakdown.intent, 2);
        assert_eq!(breakdown.tech_compliance, 0);
        assert_eq!(breakdown.total(), 13);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::core::RawRecord;
    use crate::normalize::normalize_record;
    use proptest::prelude::*;

    fn field() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("unknown".to_string()),
            "[a-zA-Z0-9 $€.,/+-]{0,24}",
            Just("1000+".to_string()),
            Just("$250M".to_string()),
            Just("Risk".to_string()),
            Just("Referral".to_string()),
            Just("2025-07-01".to_string()),
            Just("Salesforce; Okta".to_string()),
            Just("95".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn total_score_is_always_within_bounds(
            employee in field(),
            revenue in field(),
            industry in field(),
            interest in field(),
            role in field(),
            source in field(),
            touch in field(),
            tech in field(),
            certs in field(),
            intent in field(),
        ) {
            let record = normalize_record(RawRecord {
                employee_count: employee,
                revenue,
                industry,
                solution_interest: interest,
                contact_role: role,
                lead_source: source,
                last_touch: touch,
                tech_stack: tech,
                certifications: certs,
                intent_score: intent,
                ..RawRecord::default()
            });
            let as_of = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
            let breakdown = score_record(&record, &ScoringConfig::default(), as_of);

            prop_assert!(breakdown.firmographic <= 40);
            prop_assert!(breakdown.solution_fit <= 25);
            prop_assert!(breakdown.intent <= 20);
            prop_assert!(breakdown.tech_compliance <= 15);
            prop_assert!(breakdown.total() <= 100);
        }
    }
}
