pub mod constants;

use carbon_choropleth::{GeoCounty, Topology};
use serde_json::{json, Map, Value};
use std::fs;

use constants::TOTAL_FOOTPRINT_FIELD;

/// Reads a fixture file relative to the crate root.
pub fn read_fixture(file_path: &str) -> String {
    fs::read_to_string(file_path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", file_path, e))
}

/// Builds an emissions document from `(county, value)` rows, preserving order.
pub fn emissions_json(rows: &[(&str, Value)]) -> String {
    let rows: Vec<Value> = rows
        .iter()
        .map(|(county, value)| {
            let mut row = Map::new();
            row.insert("County".to_string(), Value::from(*county));
            row.insert(TOTAL_FOOTPRINT_FIELD.to_string(), value.clone());
            Value::Object(row)
        })
        .collect();

    Value::Array(rows).to_string()
}

/// Builds a topology with one unit-square county per name, laid out in a row, plus a
/// single state covering all of them.
///
/// Adjacent squares share an arc, so the county mesh has `names.len() - 1` interior arcs.
pub fn topology_json(names: &[&str]) -> String {
    let mut arcs: Vec<Value> = Vec::new();

    // Vertical edges x = 0..=n, each its own arc
    for x in 0..=names.len() {
        arcs.push(json!([[x, 0], [x, 1]]));
    }
    // Bottom and top edges of each square
    for x in 0..names.len() {
        arcs.push(json!([[x + 1, 0], [x, 0]]));
        arcs.push(json!([[x, 1], [x + 1, 1]]));
    }

    let vertical = |x: usize| x as i64;
    let bottom = |x: usize| (names.len() + 1 + 2 * x) as i64;
    let top = |x: usize| (names.len() + 2 + 2 * x) as i64;

    let counties: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(x, name)| {
            json!({
                "type": "Polygon",
                "id": format!("{:05}", x + 1),
                "properties": { "name": name },
                "arcs": [[vertical(x), top(x), !vertical(x + 1), bottom(x)]]
            })
        })
        .collect();

    let state_ring: Vec<i64> = std::iter::once(vertical(0))
        .chain((0..names.len()).map(top))
        .chain(std::iter::once(!vertical(names.len())))
        .chain((0..names.len()).rev().map(bottom))
        .collect();

    json!({
        "type": "Topology",
        "arcs": arcs,
        "objects": {
            "states": {
                "type": "GeometryCollection",
                "geometries": [{ "type": "Polygon", "id": "01", "properties": { "name": "Test" }, "arcs": [state_ring] }]
            },
            "counties": { "type": "GeometryCollection", "geometries": counties }
        }
    })
    .to_string()
}

/// Decodes the counties of a topology built by `topology_json`.
pub fn counties_from_names(names: &[&str]) -> Vec<GeoCounty> {
    Topology::from_json_str(&topology_json(names))
        .and_then(|topology| topology.counties("counties"))
        .expect("Failed to decode test topology")
}
