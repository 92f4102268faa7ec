use crate::models::AliasTable;
use crate::types::{CanonicalKey, RawNameRef};
use crate::utils::normalize_county_name;

/// Turns human-entered county names into canonical join keys, optionally correcting known
/// mismatches through an [`AliasTable`].
#[derive(Clone, Debug, Default)]
pub struct NameMatcher {
    alias_table: AliasTable,
}

impl NameMatcher {
    pub fn new(alias_table: AliasTable) -> Self {
        NameMatcher { alias_table }
    }

    pub fn alias_table(&self) -> &AliasTable {
        &self.alias_table
    }

    /// Normalizes `raw` without consulting the alias table.
    pub fn canonical_key(&self, raw: &RawNameRef) -> CanonicalKey {
        normalize_county_name(raw)
    }

    /// Normalizes `raw` and, if its key has an alias, normalizes the aliased name instead.
    pub fn resolve(&self, raw: &RawNameRef) -> CanonicalKey {
        let key = normalize_county_name(raw);

        match self.alias_table.get(&key) {
            Some(replacement) => normalize_county_name(replacement),
            None => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_applies_before_lookup() {
        let matcher = NameMatcher::new(AliasTable::from_pairs([("LASALLE", "LA SALLE")]));

        assert_eq!(matcher.resolve("LaSalle"), matcher.canonical_key("La Salle"));
        assert_eq!(matcher.resolve("LaSalle"), "LA SALLE");
    }

    #[test]
    fn test_canonical_key_ignores_aliases() {
        let matcher = NameMatcher::new(AliasTable::from_pairs([("LASALLE", "LA SALLE")]));

        assert_eq!(matcher.canonical_key("LaSalle"), "LASALLE");
    }

    #[test]
    fn test_without_alias_falls_back_to_normalization() {
        let matcher = NameMatcher::default();

        assert_eq!(matcher.resolve("St. Louis County"), "ST LOUIS");
    }
}
