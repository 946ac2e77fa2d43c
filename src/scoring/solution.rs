//! Solution-interest and contact-role fit, max 25.

use crate::config::SolutionTable;
use crate::core::NormalizedRecord;

pub fn score(record: &NormalizedRecord, table: &SolutionTable) -> u32 {
    interest_points(record.raw.solution_interest.trim(), table)
        + table.roles.substring_points(&record.raw.contact_role)
}

fn interest_points(interest: &str, table: &SolutionTable) -> u32 {
    table
        .interests
        .iter()
        .find(|entry| entry.name == interest)
        .map(|entry| entry.points)
        .unwrap_or(table.fallback_points)
}
