//! Region code normalization against a fixed lookup table.

use crate::core::Region;
use crate::normalize::is_missing;

pub fn normalize(raw: &str) -> Region {
    if is_missing(raw) {
        return Region::Unknown;
    }

    let code = raw.trim().to_uppercase();
    match code.as_str() {
        "AMS" => Region::Americas,
        "EMEA" => Region::Emea,
        "APAC" => Region::Apac,
        "UKI" => Region::UkIreland,
        "DACH" => Region::Dach,
        "FR" => Region::France,
        "MDO" => Region::Mea,
        _ => Region::Other(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_codes() {
        assert_eq!(normalize("AMS"), Region::Americas);
        assert_eq!(normalize(" uki "), Region::UkIreland);
        assert_eq!(normalize("mdo"), Region::Mea);
        assert_eq!(normalize("fr"), Region::France);
    }

    #[test]
    fn unmapped_codes_pass_through_uppercased() {
        assert_eq!(normalize("LatAm"), Region::Other("LATAM".into()));
    }

    #[test]
    fn missing_markers_map_to_unknown() {
        for raw in ["", "nan", "Unknown", "N/A"] {
            assert_eq!(normalize(raw), Region::Unknown);
        }
    }
}
