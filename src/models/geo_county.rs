use crate::types::{CountyId, MultiPolygon, RawName};

/// A region decoded from a topology object.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
    pub id: Option<CountyId>,
    pub name: Option<RawName>,
    pub geometry: MultiPolygon,
}

/// A county boundary from the geometry source. Immutable once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoCounty {
    pub id: CountyId,
    /// Display name; falls back to the id when the feature has no `name` property.
    pub name: RawName,
    pub geometry: MultiPolygon,
}

impl From<GeoFeature> for GeoCounty {
    fn from(feature: GeoFeature) -> Self {
        let id = feature.id.unwrap_or_default();
        let name = feature.name.unwrap_or_else(|| id.clone());

        GeoCounty {
            id,
            name,
            geometry: feature.geometry,
        }
    }
}
