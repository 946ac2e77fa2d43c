//! Technology and compliance readiness, max 15.
//!
//! Both checks are case-insensitive substring containment with the
//! high-value list tried first; an empty field scores zero rather than
//! taking the base floor.

use crate::config::TechComplianceTable;
use crate::core::NormalizedRecord;
use crate::normalize::tech_stack::canonical_string;

pub fn score(record: &NormalizedRecord, table: &TechComplianceTable) -> u32 {
    tech_points(record, table) + certification_points(record, table)
}

fn tech_points(record: &NormalizedRecord, table: &TechComplianceTable) -> u32 {
    if record.tech_stack.is_empty() {
        return 0;
    }
    table.tech.substring_points(&canonical_string(&record.tech_stack))
}

fn certification_points(record: &NormalizedRecord, table: &TechComplianceTable) -> u32 {
    match &record.certifications {
        Some(certs) => table.certifications.substring_points(certs),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawRecord;
    use crate::normalize::normalize_record;

    fn record(tech: &str, certs: &str) -> NormalizedRecord {
        normalize_record(RawRecord {
            tech_stack: tech.to_string(),
            certifications: certs.to_string(),
            ..RawRecord::default()
        })
    }

    #[test]
    fn enterprise_stack_with_high_value_cert_is_max() {
        let record = record("Salesforce; Workday", "SOX, ISO27001");
        assert_eq!(score(&record, &Default::default()), 15);
    }

    #[test]
    fn mid_market_stack_with_medium_cert() {
        let record = record("HubSpot", "GDPR");
        assert_eq!(score(&record, &Default::default()), 10);
    }

    #[test]
    fn unrecognized_values_take_base_floors() {
        let record = record("Homegrown CRM", "SOC 2");
        assert_eq!(score(&record, &Default::default()), 3 + 2);
    }

    #[test]
    fn absent_fields_score_zero() {
        let empty = record("", "");
        assert_eq!(score(&empty, &Default::default()), 0);
        let na = record("n/a", "unknown");
        assert_eq!(score(&na, &Default::default()), 0);
    }

    #[test]
    fn enterprise_list_is_checked_before_mid_market() {
        let record = record("HubSpot, Okta", "");
        assert_eq!(score(&record, &Default::default()), 8);
    }
}
