use crate::models::GeoCounty;
use crate::types::TotalFootprint;

/// Outcome of looking a county up in the emissions join.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MatchResult {
    Matched(TotalFootprint),
    /// No record shares the county's key, or the record that does has no numeric value.
    Unmatched,
}

impl MatchResult {
    pub fn value(&self) -> Option<TotalFootprint> {
        match self {
            MatchResult::Matched(value) => Some(*value),
            MatchResult::Unmatched => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }
}

/// A county paired with its match outcome.
#[derive(Clone, Copy, Debug)]
pub struct CountyMatch<'a> {
    pub county: &'a GeoCounty,
    pub result: MatchResult,
}

/// Collects the numeric values of every matched county, in county order.
pub fn matched_values(county_matches: &[CountyMatch]) -> Vec<TotalFootprint> {
    county_matches
        .iter()
        .filter_map(|county_match| county_match.result.value())
        .collect()
}
