use crate::types::{CanonicalKey, RawNameRef};
use crate::utils::{replace_whole_word, strip_admin_suffix};

/// Converts a raw county/parish/borough name into the canonical key used for joining.
///
/// The steps run in a fixed order since later steps assume earlier cleanup:
///
/// 1. Upper-case.
/// 2. Drop periods and apostrophes (`ST.` -> `ST`, `O'BRIEN` -> `OBRIEN`).
/// 3. Collapse whitespace runs and trim.
/// 4. `SAINT` -> `ST`, `STE` -> `ST` (whole words).
/// 5. `DE KALB` -> `DEKALB`.
/// 6. Strip trailing administrative-unit suffixes.
/// 7. Trim.
///
/// Never fails; input that cannot be matched simply produces a key nothing else shares.
/// The output is a fixed point: normalizing a key again returns the same key.
pub fn normalize_county_name(raw: &RawNameRef) -> CanonicalKey {
    let upper = raw.to_uppercase();

    let without_punctuation: String = upper
        .chars()
        .filter(|c| !matches!(c, '.' | '\''))
        .collect();

    let collapsed = without_punctuation
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let saints = replace_whole_word(&collapsed, "SAINT", "ST");
    let saints = replace_whole_word(&saints, "STE", "ST");
    let dekalb = replace_whole_word(&saints, "DE KALB", "DEKALB");

    strip_admin_suffix(&dekalb).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_punctuation_invariance() {
        assert_eq!(
            normalize_county_name("St. Mary's Parish"),
            normalize_county_name("SAINT MARYS")
        );
        assert_eq!(normalize_county_name("St. Mary's Parish"), "ST MARYS");
    }

    #[test]
    fn test_ste_collapses_to_st() {
        assert_eq!(normalize_county_name("Ste. Genevieve County"), "ST GENEVIEVE");
    }

    #[test]
    fn test_dekalb_forms_collapse() {
        assert_eq!(normalize_county_name("De Kalb"), "DEKALB");
        assert_eq!(normalize_county_name("DeKalb County"), "DEKALB");
        assert_eq!(normalize_county_name("De   Kalb County"), "DEKALB");
    }

    #[test]
    fn test_whitespace_is_collapsed_and_trimmed() {
        assert_eq!(normalize_county_name("  Prince   George's \t County "), "PRINCE GEORGES");
    }

    #[test]
    fn test_apostrophe_removed() {
        assert_eq!(normalize_county_name("O'Brien County"), "OBRIEN");
    }

    #[test]
    fn test_suffix_only_stripped_at_end() {
        assert_eq!(normalize_county_name("County Road"), "COUNTY ROAD");
        assert_ne!(normalize_county_name("County Road"), normalize_county_name("Road"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_county_name(""), "");
        assert_eq!(normalize_county_name("   "), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "St. Louis County",
            "DeKalb County",
            "Charles City County",
            "Matanuska-Susitna Borough",
            "Doña Ana County",
            "",
        ] {
            let once = normalize_county_name(raw);
            assert_eq!(normalize_county_name(&once), once, "not a fixed point: {}", raw);
        }
    }
}
