#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod constants;
pub use constants::{ADMIN_UNIT_SUFFIXES, COUNTY_CO2_URL, DEFAULT_CHOROPLETH_CONFIG, GEO_URL};
pub mod models;
pub use models::{
    AliasTable, ChoroplethConfig, ChoroplethLayers, ChoroplethRenderer, ColorDomain,
    ConflictPolicy, CountyMatch, DataSource, EmissionsJoin, EmissionsRecord, Error, GeoCounty,
    MatchReport, MatchResult, NameMatcher, QuantileMethod, SequentialColorScale, Topology,
};
pub mod types;
mod utils;
pub use types::{CanonicalKey, CountyId, RawName, TotalFootprint};
pub use utils::normalize_county_name;

use log::{info, warn};
use models::matched_values;

/// Renders the choropleth SVG from the topology and emissions documents using the default
/// configuration and no aliases.
pub fn render_choropleth(topology_json: &str, emissions_json: &str) -> Result<String, Error> {
    render_choropleth_with_custom_config(
        topology_json,
        emissions_json,
        &DEFAULT_CHOROPLETH_CONFIG,
        &AliasTable::default(),
    )
}

pub fn render_choropleth_with_custom_config(
    topology_json: &str,
    emissions_json: &str,
    config: &ChoroplethConfig,
    alias_table: &AliasTable,
) -> Result<String, Error> {
    let topology = Topology::from_json_str(topology_json)?;
    let records = EmissionsRecord::list_from_json_str(emissions_json)?;
    info!("Loaded {} emissions records", records.len());

    let counties = topology.counties(config.counties_object)?;
    let states: Vec<_> = topology
        .feature(config.states_object)?
        .into_iter()
        .map(|state| state.geometry)
        .collect();
    let state_borders = topology.mesh(config.states_object, true)?;
    let county_lines = topology.mesh(config.counties_object, true)?;

    let matcher = NameMatcher::new(alias_table.clone());
    MatchReport::new(&counties, &records, &matcher).log_summary();

    let join = EmissionsJoin::build(&records, &matcher, config.conflict_policy)?;
    let county_matches = join.apply(&counties);

    let domain = match ColorDomain::from_values(
        &matched_values(&county_matches),
        config.lower_quantile,
        config.upper_quantile,
        config.quantile_method,
    ) {
        Ok(domain) => Some(domain),
        Err(Error::EmptyMatchedValues) => {
            warn!("No county matched a numeric value; rendering without colour scale");
            None
        }
        Err(err) => return Err(err),
    };

    let svg = ChoroplethRenderer::new(config).render(&ChoroplethLayers {
        states: &states,
        state_borders: &state_borders,
        county_lines: &county_lines,
        county_matches: &county_matches,
        domain,
    });

    Ok(svg)
}

/// Loads both sources concurrently, then renders.
pub fn load_and_render(
    geometry_source: &DataSource,
    emissions_source: &DataSource,
    config: &ChoroplethConfig,
    alias_table: &AliasTable,
) -> Result<String, Error> {
    let (topology_json, emissions_json) =
        DataSource::fetch_both(geometry_source, emissions_source)?;

    render_choropleth_with_custom_config(&topology_json, &emissions_json, config, alias_table)
}
