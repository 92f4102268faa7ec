use crate::models::{ConflictPolicy, QuantileMethod};

/// Tunables for the join, statistics and SVG output. See `DEFAULT_CHOROPLETH_CONFIG`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChoroplethConfig {
    /// Topology object holding county geometries.
    pub counties_object: &'static str,
    pub states_object: &'static str,
    pub conflict_policy: ConflictPolicy,
    pub lower_quantile: f64,
    pub upper_quantile: f64,
    pub quantile_method: QuantileMethod,
    pub view_box_width: f64,
    pub view_box_height: f64,
    pub state_fill: &'static str,
    pub state_border_stroke: &'static str,
    pub county_line_stroke: &'static str,
    pub county_line_width: f64,
    /// Fill for counties without a matched value.
    pub no_data_fill: &'static str,
    pub legend_x: f64,
    pub legend_y: f64,
    pub legend_width: f64,
    pub legend_height: f64,
    pub legend_title: &'static str,
    pub legend_text_fill: &'static str,
}
