use crate::constants::UNMATCHED_SAMPLE_SIZE;
use crate::models::{EmissionsRecord, GeoCounty, NameMatcher};
use crate::types::CanonicalKey;
use log::info;
use std::collections::HashSet;

/// Overlap diagnostics between the geometry names and the dataset names.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchReport {
    pub geometry_key_count: usize,
    pub dataset_key_count: usize,
    pub overlap_count: usize,
    /// Up to `UNMATCHED_SAMPLE_SIZE` dataset keys with no geometry counterpart, in
    /// dataset order.
    pub unmatched_sample: Vec<CanonicalKey>,
}

impl MatchReport {
    pub fn new(counties: &[GeoCounty], records: &[EmissionsRecord], matcher: &NameMatcher) -> Self {
        let geometry_keys: HashSet<CanonicalKey> = counties
            .iter()
            .map(|county| matcher.canonical_key(&county.name))
            .collect();

        let mut seen = HashSet::new();
        let dataset_keys: Vec<CanonicalKey> = records
            .iter()
            .map(|record| matcher.resolve(&record.county_name))
            .filter(|key| seen.insert(key.clone()))
            .collect();

        let overlap_count = dataset_keys
            .iter()
            .filter(|key| geometry_keys.contains(*key))
            .count();

        let unmatched_sample = dataset_keys
            .iter()
            .filter(|key| !geometry_keys.contains(*key))
            .take(UNMATCHED_SAMPLE_SIZE)
            .cloned()
            .collect();

        MatchReport {
            geometry_key_count: geometry_keys.len(),
            dataset_key_count: dataset_keys.len(),
            overlap_count,
            unmatched_sample,
        }
    }

    pub fn log_summary(&self) {
        info!("Unique county names in geometry: {}", self.geometry_key_count);
        info!("Unique county names in dataset: {}", self.dataset_key_count);
        info!("Overlapping names: {}", self.overlap_count);
        info!("Sample not matched: {:?}", self.unmatched_sample);
    }
}
