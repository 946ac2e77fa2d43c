//! Field normalizers and the record-level normalization pipeline.
//!
//! Every normalizer is a total function from raw text to a canonical
//! value: ambiguous or unparsable input maps to an explicit sentinel
//! (`Unknown`, pass-through, or absent), never to an error. Normalizers
//! are pure and column-local, so records are processed independently and
//! in order.

pub mod contact;
pub mod date;
pub mod employee;
pub mod region;
pub mod revenue;
pub mod tech_stack;
pub mod website;

use crate::core::{NormalizedRecord, RawRecord};

/// Tokens treated as absent data wherever a field is normalized.
const MISSING_MARKERS: [&str; 4] = ["", "nan", "unknown", "n/a"];

/// True when a raw cell carries no usable value.
pub fn is_missing(raw: &str) -> bool {
    let lowered = raw.trim().to_lowercase();
    MISSING_MARKERS.contains(&lowered.as_str())
}

/// Capitalize the first letter of each whitespace-separated word.
pub fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive every canonical field for one record.
pub fn normalize_record(raw: RawRecord) -> NormalizedRecord {
    let employee_count = employee::normalize(&raw.employee_count);
    let revenue = revenue::normalize(&raw.revenue);
    let region = region::normalize(&raw.region);
    let last_touch = date::normalize(&raw.last_touch);
    let website = website::normalize(&raw.website);
    let tech_stack = tech_stack::normalize(&raw.tech_stack);
    let certifications = contact::normalize_certifications(&raw.certifications);
    let intent_score = contact::normalize_intent(&raw.intent_score);
    let sfdc_account_id = contact::normalize_sfdc_id(&raw.sfdc_account_id);
    let lead_owner = contact::normalize_owner(&raw.lead_owner);

    NormalizedRecord {
        raw,
        employee_count,
        revenue,
        region,
        last_touch,
        website,
        tech_stack,
        certifications,
        intent_score,
        sfdc_account_id,
        lead_owner,
    }
}

/// Normalize a whole batch, preserving input order.
pub fn normalize_records(raws: Vec<RawRecord>) -> Vec<NormalizedRecord> {
    raws.into_iter().map(normalize_record).collect()
}
