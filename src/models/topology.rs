use crate::models::{GeoCounty, GeoFeature};
use crate::types::{LineString, MultiPolygon, Point, Polygon};
use crate::Error;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Quantization transform; positions in quantized arcs are deltas from the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GeometryProperties {
    #[serde(default)]
    pub name: Option<String>,
}

/// Arc references index `Topology::arcs`; a negative index `i` means arc `!i` reversed.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum TopologyGeometry {
    GeometryCollection {
        geometries: Vec<TopologyGeometry>,
    },
    Polygon {
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<GeometryProperties>,
        arcs: Vec<Vec<i64>>,
    },
    MultiPolygon {
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<GeometryProperties>,
        arcs: Vec<Vec<Vec<i64>>>,
    },
    LineString {
        arcs: Vec<i64>,
    },
    MultiLineString {
        arcs: Vec<Vec<i64>>,
    },
    /// Points and null geometries reference no arcs and are not rendered.
    #[serde(other)]
    Other,
}

impl TopologyGeometry {
    /// Depth-first list of the non-collection geometries.
    fn leaves(&self) -> Vec<&TopologyGeometry> {
        match self {
            TopologyGeometry::GeometryCollection { geometries } => {
                geometries.iter().flat_map(|geometry| geometry.leaves()).collect()
            }
            leaf => vec![leaf],
        }
    }

    fn arc_references(&self) -> Vec<i64> {
        match self {
            TopologyGeometry::GeometryCollection { geometries } => geometries
                .iter()
                .flat_map(|geometry| geometry.arc_references())
                .collect(),
            TopologyGeometry::Polygon { arcs, .. } | TopologyGeometry::MultiLineString { arcs } => {
                arcs.iter().flatten().copied().collect()
            }
            TopologyGeometry::MultiPolygon { arcs, .. } => {
                arcs.iter().flatten().flatten().copied().collect()
            }
            TopologyGeometry::LineString { arcs } => arcs.clone(),
            TopologyGeometry::Other => Vec::new(),
        }
    }
}

fn id_to_string(id: &Option<Value>) -> Option<String> {
    match id {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    }
}

fn arc_index(reference: i64) -> (usize, bool) {
    if reference < 0 {
        ((!reference) as usize, true)
    } else {
        (reference as usize, false)
    }
}

/// A TopoJSON topology document.
#[derive(Clone, Debug, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<Transform>,
    pub arcs: Vec<Vec<Vec<f64>>>,
    pub objects: HashMap<String, TopologyGeometry>,
}

impl Topology {
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let topology: Topology = serde_json::from_str(json)?;
        Ok(topology)
    }

    fn object(&self, object_name: &str) -> Result<&TopologyGeometry, Error> {
        self.objects
            .get(object_name)
            .ok_or_else(|| Error::MissingObject(object_name.to_string()))
    }

    /// Arcs in absolute coordinates, with the transform applied when present.
    pub fn decode_arcs(&self) -> Vec<LineString> {
        self.arcs
            .iter()
            .map(|arc| {
                let (mut x, mut y) = (0.0, 0.0);

                arc.iter()
                    .filter(|position| position.len() >= 2)
                    .map(|position| match self.transform {
                        Some(transform) => {
                            x += position[0];
                            y += position[1];
                            [
                                x * transform.scale[0] + transform.translate[0],
                                y * transform.scale[1] + transform.translate[1],
                            ]
                        }
                        None => [position[0], position[1]],
                    })
                    .collect()
            })
            .collect()
    }

    /// Joins referenced arcs end to end, dropping the shared point between neighbours.
    fn stitch(decoded_arcs: &[LineString], references: &[i64]) -> Result<Vec<Point>, Error> {
        let mut points: Vec<Point> = Vec::new();

        for &reference in references {
            let (index, reversed) = arc_index(reference);
            let arc = decoded_arcs.get(index).ok_or_else(|| {
                Error::ParserError(format!("Arc reference {} is out of range", reference))
            })?;

            points.pop();
            if reversed {
                points.extend(arc.iter().rev().copied());
            } else {
                points.extend(arc.iter().copied());
            }
        }

        Ok(points)
    }

    fn polygon(decoded_arcs: &[LineString], rings: &[Vec<i64>]) -> Result<Polygon, Error> {
        rings
            .iter()
            .map(|ring| Self::stitch(decoded_arcs, ring))
            .collect()
    }

    /// Converts every polygonal geometry in `object_name` into a feature. Other geometry
    /// types are skipped.
    pub fn feature(&self, object_name: &str) -> Result<Vec<GeoFeature>, Error> {
        let object = self.object(object_name)?;
        let decoded_arcs = self.decode_arcs();
        let mut features = Vec::new();

        for geometry in object.leaves() {
            let (id, properties, multi_polygon): (_, _, MultiPolygon) = match geometry {
                TopologyGeometry::Polygon {
                    id,
                    properties,
                    arcs,
                } => (id, properties, vec![Self::polygon(&decoded_arcs, arcs)?]),
                TopologyGeometry::MultiPolygon {
                    id,
                    properties,
                    arcs,
                } => (
                    id,
                    properties,
                    arcs.iter()
                        .map(|polygon| Self::polygon(&decoded_arcs, polygon))
                        .collect::<Result<_, _>>()?,
                ),
                _ => continue,
            };

            features.push(GeoFeature {
                id: id_to_string(id),
                name: properties.as_ref().and_then(|p| p.name.clone()),
                geometry: multi_polygon,
            });
        }

        Ok(features)
    }

    /// The features of `object_name` as counties.
    pub fn counties(&self, object_name: &str) -> Result<Vec<GeoCounty>, Error> {
        Ok(self
            .feature(object_name)?
            .into_iter()
            .map(GeoCounty::from)
            .collect())
    }

    /// Every arc referenced by `object_name`, once each, in arc order.
    ///
    /// With `interior_only`, an arc is kept only when the first and last geometries that
    /// reference it differ, i.e. it is a border between two regions rather than coastline.
    pub fn mesh(&self, object_name: &str, interior_only: bool) -> Result<Vec<LineString>, Error> {
        let object = self.object(object_name)?;
        let mut geometries_by_arc: Vec<Vec<usize>> = vec![Vec::new(); self.arcs.len()];

        for (geometry_index, geometry) in object.leaves().into_iter().enumerate() {
            for reference in geometry.arc_references() {
                let (index, _) = arc_index(reference);
                let geometries = geometries_by_arc.get_mut(index).ok_or_else(|| {
                    Error::ParserError(format!("Arc reference {} is out of range", reference))
                })?;
                geometries.push(geometry_index);
            }
        }

        let decoded_arcs = self.decode_arcs();

        Ok(geometries_by_arc
            .iter()
            .zip(decoded_arcs)
            .filter(|(geometries, _)| match (geometries.first(), geometries.last()) {
                (Some(first), Some(last)) => !interior_only || first != last,
                _ => false,
            })
            .map(|(_, arc)| arc)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two unit squares side by side sharing the arc x = 1.
    const SIDE_BY_SIDE: &str = r#"{
        "type": "Topology",
        "arcs": [
            [[1, 0], [1, 1]],
            [[1, 1], [0, 1], [0, 0], [1, 0]],
            [[1, 0], [2, 0], [2, 1], [1, 1]]
        ],
        "objects": {
            "counties": {
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Polygon", "id": "01001", "properties": {"name": "West"}, "arcs": [[0, 1]]},
                    {"type": "Polygon", "id": 1003, "arcs": [[2, -1]]},
                    {"type": "Point", "coordinates": [0, 0]}
                ]
            }
        }
    }"#;

    #[test]
    fn test_feature_stitches_rings() {
        let topology = Topology::from_json_str(SIDE_BY_SIDE).unwrap();
        let features = topology.feature("counties").unwrap();

        assert_eq!(features.len(), 2);
        assert_eq!(features[0].id.as_deref(), Some("01001"));
        assert_eq!(features[0].name.as_deref(), Some("West"));
        assert_eq!(
            features[0].geometry,
            vec![vec![vec![[1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0]]]]
        );
        assert_eq!(features[1].id.as_deref(), Some("1003"));
        assert_eq!(
            features[1].geometry,
            vec![vec![vec![[1.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0], [1.0, 0.0]]]]
        );
    }

    #[test]
    fn test_transform_decodes_deltas() {
        let json = r#"{
            "type": "Topology",
            "transform": {"scale": [0.5, 2], "translate": [10, 20]},
            "arcs": [[[2, 1], [2, 0], [0, 3]]],
            "objects": {}
        }"#;
        let topology = Topology::from_json_str(json).unwrap();

        assert_eq!(
            topology.decode_arcs(),
            vec![vec![[11.0, 22.0], [12.0, 22.0], [12.0, 28.0]]]
        );
    }

    #[test]
    fn test_mesh_interior_only() {
        let topology = Topology::from_json_str(SIDE_BY_SIDE).unwrap();

        assert_eq!(
            topology.mesh("counties", true).unwrap(),
            vec![vec![[1.0, 0.0], [1.0, 1.0]]]
        );
        assert_eq!(topology.mesh("counties", false).unwrap().len(), 3);
    }

    #[test]
    fn test_missing_object() {
        let topology = Topology::from_json_str(SIDE_BY_SIDE).unwrap();

        assert!(matches!(
            topology.feature("states"),
            Err(Error::MissingObject(name)) if name == "states"
        ));
    }

    #[test]
    fn test_out_of_range_arc() {
        let json = r#"{
            "type": "Topology",
            "arcs": [],
            "objects": {"counties": {"type": "Polygon", "arcs": [[4]]}}
        }"#;
        let topology = Topology::from_json_str(json).unwrap();

        assert!(matches!(topology.feature("counties"), Err(Error::ParserError(_))));
    }
}
