//! ICP archetype classification.
//!
//! Every catalog definition is scored against the record on five
//! criteria; the first definition with the maximum score wins, and a
//! best match below the confidence threshold resolves to `Other`. The
//! catalog's order is the documented tie-break.

use crate::config::{ArchetypeCatalog, ArchetypeDefinition, MatchWeights};
use crate::core::{EmployeeCount, NormalizedRecord, Revenue};

/// Sentinel assignment for records no archetype claims.
pub const OTHER_ARCHETYPE: &str = "Other";

pub fn classify(record: &NormalizedRecord, catalog: &ArchetypeCatalog) -> String {
    let mut best: Option<(&str, u32)> = None;
    for definition in &catalog.archetypes {
        let score = match_score(record, definition, &catalog.weights);
        // Strict comparison keeps the earliest definition on ties.
        if best.map_or(true, |(_, current)| score > current) {
            best = Some((definition.name.as_str(), score));
        }
    }

    match best {
        Some((name, score)) if score >= catalog.min_confidence => name.to_string(),
        _ => OTHER_ARCHETYPE.to_string(),
    }
}

pub fn match_score(
    record: &NormalizedRecord,
    definition: &ArchetypeDefinition,
    weights: &MatchWeights,
) -> u32 {
    let mut score = 0;

    if let EmployeeCount::Band(band) = record.employee_count {
        if definition.employee_bands.contains(&band) {
            score += weights.employee;
        }
    }

    if let Revenue::Millions(value) = record.revenue {
        if definition.revenue_millions.contains(&value) {
            score += weights.revenue;
        }
    }

    let industry = record.raw.industry.trim();
    if definition.industries.iter().any(|i| i == industry) {
        score += weights.industry;
    }

    let interest = record.raw.solution_interest.trim();
    if definition.solutions.iter().any(|s| s == interest) {
        score += weights.solution;
    }

    let role = record.raw.contact_role.to_lowercase();
    if definition
        .roles
        .iter()
        .any(|candidate| role.contains(&candidate.to_lowercase()))
    {
        score += weights.role;
    }

    score
}
