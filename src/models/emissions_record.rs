use crate::types::{RawName, TotalFootprint};
use crate::utils::parse_numeric_like;
use crate::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single row of the county CO2 dataset.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EmissionsRecord {
    #[serde(rename = "County", default, deserialize_with = "deserialize_name_like")]
    pub county_name: RawName,

    /// `None` when the source value is missing or not numeric.
    #[serde(
        rename = "Total County Carbon Footprint (tCO2e/yr)",
        default,
        deserialize_with = "deserialize_numeric_like"
    )]
    pub total_footprint: Option<TotalFootprint>,
}

fn deserialize_name_like<'de, D>(deserializer: D) -> Result<RawName, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(match value {
        Value::String(name) => name,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn deserialize_numeric_like<'de, D>(deserializer: D) -> Result<Option<TotalFootprint>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_numeric_like(&value))
}

impl EmissionsRecord {
    pub fn new(county_name: impl Into<RawName>, total_footprint: Option<TotalFootprint>) -> Self {
        EmissionsRecord {
            county_name: county_name.into(),
            total_footprint,
        }
    }

    /// Parses the dataset: a JSON array of row objects, in source order.
    pub fn list_from_json_str(json: &str) -> Result<Vec<Self>, Error> {
        let records: Vec<Self> = serde_json::from_str(json)?;
        Ok(records)
    }
}
