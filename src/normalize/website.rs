//! Website canonicalization: scheme, `www.` prefix, and trailing slash
//! stripped, lowercased. Domain syntax is not validated.

use crate::normalize::is_missing;

pub fn normalize(raw: &str) -> Option<String> {
    if is_missing(raw) {
        return None;
    }

    let mut url = raw.trim().to_lowercase();
    for prefix in ["https://", "http://"] {
        if let Some(rest) = url.strip_prefix(prefix) {
            url = rest.to_string();
            break;
        }
    }
    if let Some(rest) = url.strip_prefix("www.") {
        url = rest.to_string();
    }
    if let Some(rest) = url.strip_suffix('/') {
        url = rest.to_string();
    }

    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scheme_prefix_and_slash() {
        assert_eq!(
            normalize("https://www.Example.com/"),
            Some("example.com".into())
        );
        assert_eq!(normalize("http://example.com"), Some("example.com".into()));
    }

    #[test]
    fn bare_domains_are_lowercased() {
        assert_eq!(normalize("Example.COM"), Some("example.com".into()));
    }

    #[test]
    fn does_not_validate_syntax() {
        assert_eq!(normalize("not a url"), Some("not a url".into()));
    }

    #[test]
    fn missing_markers_map_to_absent() {
        for raw in ["", "nan", "Unknown", "n/a"] {
            assert_eq!(normalize(raw), None);
        }
    }
}
