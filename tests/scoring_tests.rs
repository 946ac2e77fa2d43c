//! Scoring engine and classifier behavior over whole records.

use chrono::NaiveDate;
use leadmap::{
    normalize_record, prioritize, score_record, LeadmapConfig, PriorityTier, RawRecord,
    ScoringConfig,
};
use pretty_assertions::assert_eq;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
}

fn ideal_record() -> RawRecord {
    RawRecord {
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
    }
}

#[test]
fn ideal_enterprise_risk_account_scores_one_hundred_critical() {
    let record = normalize_record(ideal_record());
    let breakdown = score_record(&record, &ScoringConfig::default(), as_of());

    assert_eq!(breakdown.firmographic, 40);
    assert_eq!(breakdown.solution_fit, 25);
    assert_eq!(breakdown.intent, 20);
    assert_eq!(breakdown.tech_compliance, 15);
    assert_eq!(breakdown.total(), 100);
    assert_eq!(PriorityTier::from_score(breakdown.total()), PriorityTier::Critical);

    let accounts = prioritize(vec![record], &LeadmapConfig::default(), as_of(), false);
    assert_eq!(accounts[0].archetype, "Enterprise_Risk_Management");
    assert_eq!(accounts[0].tier, PriorityTier::Critical);
}

#[test]
fn empty_record_scores_floors_and_classifies_other() {
    let record = normalize_record(RawRecord::default());
    let breakdown = score_record(&record, &ScoringConfig::default(), as_of());

    assert_eq!(breakdown.firmographic, 3);
    assert_eq!(breakdown.solution_fit, 8);
    assert_eq!(breakdown.intent, 2);
    assert_eq!(breakdown.tech_compliance, 0);

    let accounts = prioritize(vec![record], &LeadmapConfig::default(), as_of(), false);
    assert_eq!(accounts[0].archetype, "Other");
    assert_eq!(accounts[0].tier, PriorityTier::Low);
}

#[test]
fn recency_is_stable_for_a_fixed_evaluation_date() {
    let record = normalize_record(ideal_record());
    let config = ScoringConfig::default();
    let first = score_record(&record, &config, as_of());
    let second = score_record(&record, &config, as_of());
    assert_eq!(first, second);

    // A later evaluation date demotes the recency bucket.
    let much_later = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
    let later = score_record(&record, &config, much_later);
    assert_eq!(later.intent, first.intent - 4);
}

#[test]
fn tier_boundaries_partition_the_score_range() {
    let expectations = [
        (0, PriorityTier::Low),
        (40, PriorityTier::Low),
        (41, PriorityTier::Medium),
        (60, PriorityTier::Medium),
        (61, PriorityTier::High),
        (80, PriorityTier::High),
        (81, PriorityTier::Critical),
        (100, PriorityTier::Critical),
    ];
    for (score, expected) in expectations {
        assert_eq!(PriorityTier::from_score(score), expected, "score {score}");
    }
}

#[test]
fn archetype_assignment_is_deterministic() {
    let record = normalize_record(ideal_record());
    let config = LeadmapConfig::default();
    let baseline = leadmap::classify(&record, &config.catalog);
    for _ in 0..20 {
        assert_eq!(leadmap::classify(&record, &config.catalog), baseline);
    }
}
