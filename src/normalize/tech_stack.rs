//! Tech-stack signal normalization.
//!
//! The raw cell may mix `;`, `,`, `|`, and `&` as delimiters. Each
//! delimiter pass re-splits all accumulated fragments, so delimiter order
//! does not affect the final token set. Tokens are trimmed, title-cased,
//! and filtered of missing markers.

use crate::normalize::{is_missing, title_case};

const DELIMITERS: [char; 4] = [';', ',', '|', '&'];

pub fn normalize(raw: &str) -> Vec<String> {
    if is_missing(raw) {
        return Vec::new();
    }

    let mut fragments = vec![raw.to_string()];
    for delimiter in DELIMITERS {
        fragments = fragments
            .iter()
            .flat_map(|fragment| fragment.split(delimiter))
            .map(str::to_string)
            .collect();
    }

    fragments
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !is_missing(fragment))
        .map(title_case)
        .collect()
}

/// Canonical comma-separated rendering of a normalized stack.
pub fn canonical_string(stack: &[String]) -> String {
    stack.join(", ")
}
