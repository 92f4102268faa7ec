use crate::models::{ConflictPolicy, CountyMatch, EmissionsRecord, GeoCounty, MatchResult, NameMatcher};
use crate::types::{CanonicalKey, CanonicalKeyRef, RawNameRef, TotalFootprint};
use crate::Error;
use log::debug;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Lookup from canonical county key to emissions value, built once from the dataset and
/// never mutated afterwards.
///
/// Dataset names are alias-resolved when the lookup is built; geometry names are only
/// normalized when they are looked up.
pub struct EmissionsJoin<'a> {
    matcher: &'a NameMatcher,
    lookup: HashMap<CanonicalKey, Option<TotalFootprint>>,
}

impl<'a> EmissionsJoin<'a> {
    /// Builds the lookup by walking `records` in source order.
    ///
    /// A record without a numeric value still claims its key, so under
    /// [`ConflictPolicy::KeepFirst`] a later numeric duplicate does not replace it.
    pub fn build(
        records: &[EmissionsRecord],
        matcher: &'a NameMatcher,
        conflict_policy: ConflictPolicy,
    ) -> Result<Self, Error> {
        let mut lookup = HashMap::with_capacity(records.len());

        for record in records {
            let key = matcher.resolve(&record.county_name);

            match lookup.entry(key) {
                Entry::Vacant(entry) => {
                    entry.insert(record.total_footprint);
                }
                Entry::Occupied(mut entry) => match conflict_policy {
                    ConflictPolicy::KeepFirst => {
                        debug!("Ignoring duplicate record for '{}'", entry.key());
                    }
                    ConflictPolicy::KeepLast => {
                        entry.insert(record.total_footprint);
                    }
                    ConflictPolicy::Reject => {
                        return Err(Error::DuplicateKey(entry.key().clone()));
                    }
                },
            }
        }

        Ok(EmissionsJoin { matcher, lookup })
    }

    pub fn matcher(&self) -> &NameMatcher {
        self.matcher
    }

    /// Returns the stored entry for an already-normalized key. The outer `Option` is the
    /// key's presence; the inner one is whether its record carried a numeric value.
    pub fn get(&self, key: &CanonicalKeyRef) -> Option<Option<TotalFootprint>> {
        self.lookup.get(key).copied()
    }

    /// Looks up a geometry-side county name.
    pub fn lookup(&self, geo_name: &RawNameRef) -> MatchResult {
        let key = self.matcher.canonical_key(geo_name);

        match self.get(&key) {
            Some(Some(value)) => MatchResult::Matched(value),
            _ => MatchResult::Unmatched,
        }
    }

    /// Matches every county, preserving county order.
    pub fn apply<'c>(&self, counties: &'c [GeoCounty]) -> Vec<CountyMatch<'c>> {
        counties
            .iter()
            .map(|county| CountyMatch {
                county,
                result: self.lookup(&county.name),
            })
            .collect()
    }

    /// Number of distinct keys in the lookup.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AliasTable;

    #[test]
    fn test_first_write_wins() {
        let matcher = NameMatcher::default();
        let records = vec![
            EmissionsRecord::new("St. Louis", Some(100.0)),
            EmissionsRecord::new("SAINT LOUIS COUNTY", Some(999.0)),
        ];

        let join = EmissionsJoin::build(&records, &matcher, ConflictPolicy::KeepFirst).unwrap();

        assert_eq!(join.len(), 1);
        assert_eq!(join.lookup("St. Louis County"), MatchResult::Matched(100.0));
    }

    #[test]
    fn test_no_data_record_still_claims_key() {
        let matcher = NameMatcher::default();
        let records = vec![
            EmissionsRecord::new("Adams", None),
            EmissionsRecord::new("Adams", Some(5.0)),
        ];

        let join = EmissionsJoin::build(&records, &matcher, ConflictPolicy::KeepFirst).unwrap();

        assert_eq!(join.get("ADAMS"), Some(None));
        assert_eq!(join.lookup("Adams County"), MatchResult::Unmatched);
    }

    #[test]
    fn test_keep_last() {
        let matcher = NameMatcher::default();
        let records = vec![
            EmissionsRecord::new("Adams", Some(1.0)),
            EmissionsRecord::new("Adams", Some(2.0)),
        ];

        let join = EmissionsJoin::build(&records, &matcher, ConflictPolicy::KeepLast).unwrap();

        assert_eq!(join.lookup("Adams"), MatchResult::Matched(2.0));
    }

    #[test]
    fn test_reject_duplicates() {
        let matcher = NameMatcher::default();
        let records = vec![
            EmissionsRecord::new("Adams", Some(1.0)),
            EmissionsRecord::new("ADAMS COUNTY", Some(2.0)),
        ];

        let result = EmissionsJoin::build(&records, &matcher, ConflictPolicy::Reject);

        match result {
            Err(Error::DuplicateKey(key)) => assert_eq!(key, "ADAMS"),
            _ => panic!("expected a duplicate key error"),
        }
    }

    #[test]
    fn test_aliases_apply_to_dataset_side_only() {
        let matcher = NameMatcher::new(AliasTable::from_pairs([("LASALLE", "LA SALLE")]));
        let records = vec![EmissionsRecord::new("LaSalle", Some(7.0))];

        let join = EmissionsJoin::build(&records, &matcher, ConflictPolicy::KeepFirst).unwrap();

        assert_eq!(join.lookup("La Salle Parish"), MatchResult::Matched(7.0));
        assert_eq!(join.lookup("LaSalle Parish"), MatchResult::Unmatched);
    }
}
