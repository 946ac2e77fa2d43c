//! Cleanup for contact-adjacent fields: certifications, intent score,
//! SFDC account id, and lead owner.

use crate::normalize::is_missing;

pub fn normalize_certifications(raw: &str) -> Option<String> {
    if is_missing(raw) {
        None
    } else {
        Some(raw.trim().to_string())
    }
}

/// Lenient numeric coercion; anything non-numeric is treated as absent.
pub fn normalize_intent(raw: &str) -> Option<f64> {
    if is_missing(raw) {
        return None;
    }
    raw.trim().parse().ok()
}

/// Missing account ids are flagged rather than left blank.
pub fn normalize_sfdc_id(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "Missing".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Placeholder and test-user owners are folded into `Unassigned`.
pub fn normalize_owner(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "TBD" || trimmed.to_lowercase().contains("test") {
        "Unassigned".to_string()
    } else {
        trimmed.to_string()
    }
}
