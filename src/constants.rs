use crate::models::{ChoroplethConfig, ConflictPolicy, QuantileMethod};

/// us-atlas v2 county topology, pre-projected into a 975x610 viewport.
pub const GEO_URL: &str = "https://cdn.jsdelivr.net/npm/us-atlas@2/us/10m.json";

pub const COUNTY_CO2_URL: &str =
    "https://raw.githubusercontent.com/Locutuss/D3Map/refs/heads/main/County_CO2.json";

/// Administrative-unit suffixes stripped from the end of a county name.
pub const ADMIN_UNIT_SUFFIXES: &[&str] = &[
    "COUNTY",
    "PARISH",
    "CENSUS AREA",
    "BOROUGH",
    "CITY",
    "MUNICIPIO",
    "MUNICIPALITY",
];

/// Number of unmatched dataset keys included in a `MatchReport`.
pub const UNMATCHED_SAMPLE_SIZE: usize = 20;

pub const DEFAULT_CHOROPLETH_CONFIG: ChoroplethConfig = ChoroplethConfig {
    counties_object: "counties",
    states_object: "states",
    conflict_policy: ConflictPolicy::KeepFirst,
    lower_quantile: 0.10,
    upper_quantile: 0.90,
    quantile_method: QuantileMethod::Lower,
    view_box_width: 975.0,
    view_box_height: 610.0,
    state_fill: "#e6edf5",
    state_border_stroke: "#ffffff",
    county_line_stroke: "#bfc8d4",
    county_line_width: 0.3,
    no_data_fill: "#eeeeee",
    legend_x: 630.0,
    legend_y: 40.0,
    legend_width: 160.0,
    legend_height: 10.0,
    legend_title: "Total County Carbon Footprint (tCO2e/yr)",
    legend_text_fill: "#444",
};
