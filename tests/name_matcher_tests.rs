use carbon_choropleth::{normalize_county_name, AliasTable, NameMatcher};

#[cfg(test)]
mod name_matcher_tests {
    use super::*;

    #[test]
    fn test_case_and_punctuation_invariance() {
        let matcher = NameMatcher::default();

        assert_eq!(
            matcher.canonical_key("St. Mary's Parish"),
            matcher.canonical_key("SAINT MARYS")
        );
    }

    #[test]
    fn test_suffix_only_stripped_at_end() {
        let matcher = NameMatcher::default();

        assert_ne!(
            matcher.canonical_key("County Road"),
            matcher.canonical_key("Road")
        );
        assert_eq!(matcher.canonical_key("County Road"), "COUNTY ROAD");
    }

    #[test]
    fn test_normalization_is_a_fixed_point() {
        let names = [
            "St. Louis County",
            "Ste. Genevieve County",
            "De Kalb",
            "  Prince  George's County ",
            "Bethel Census Area",
            "Anchorage Municipality",
            "Mayagüez Municipio",
            "Baltimore city",
            "O'Brien",
            "",
        ];

        for name in names {
            let key = normalize_county_name(name);
            assert_eq!(normalize_county_name(&key), key, "{:?} is not stable", name);
        }
    }

    #[test]
    fn test_alias_resolution() {
        let matcher = NameMatcher::new(AliasTable::from_pairs([("LASALLE", "LA SALLE")]));

        assert_eq!(matcher.resolve("LaSalle"), normalize_county_name("La Salle"));
    }

    #[test]
    fn test_alias_table_from_fixture() {
        let alias_table =
            AliasTable::from_csv_path(test_utils::constants::TEST_ALIASES_CSV_PATH).unwrap();
        let matcher = NameMatcher::new(alias_table);

        assert_eq!(matcher.resolve("LaSalle"), "LA SALLE");
        assert_eq!(matcher.resolve("Adams"), "ADAMS");
    }

    #[test]
    fn test_arbitrary_input_never_fails() {
        let matcher = NameMatcher::default();

        for name in ["...", "''", "\t\n", "🙂 County", "COUNTY COUNTY", "ST."] {
            let _ = matcher.resolve(name);
        }
        assert_eq!(matcher.canonical_key("..."), "");
    }
}
