use crate::models::{ChoroplethConfig, ColorDomain, CountyMatch, MatchResult, SequentialColorScale};
use crate::types::{LineString, MultiPolygon};
use crate::utils::{escape_xml, format_coordinate, format_si};

const GRADIENT_ID: &str = "grad";

fn polygon_path(geometry: &MultiPolygon) -> String {
    let mut path = String::new();

    for ring in geometry.iter().flatten() {
        for (index, [x, y]) in ring.iter().enumerate() {
            path.push(if index == 0 { 'M' } else { 'L' });
            path.push_str(&format_coordinate(*x));
            path.push(',');
            path.push_str(&format_coordinate(*y));
        }
        if !ring.is_empty() {
            path.push('Z');
        }
    }

    path
}

fn line_path(lines: &[LineString]) -> String {
    let mut path = String::new();

    for line in lines {
        for (index, [x, y]) in line.iter().enumerate() {
            path.push(if index == 0 { 'M' } else { 'L' });
            path.push_str(&format_coordinate(*x));
            path.push(',');
            path.push_str(&format_coordinate(*y));
        }
    }

    path
}

/// Everything the renderer draws, already decoded and matched.
pub struct ChoroplethLayers<'a> {
    pub states: &'a [MultiPolygon],
    pub state_borders: &'a [LineString],
    pub county_lines: &'a [LineString],
    pub county_matches: &'a [CountyMatch<'a>],
    /// `None` when no county matched; every county then gets the no-data fill and the
    /// legend is omitted.
    pub domain: Option<ColorDomain>,
}

/// Writes the choropleth as a standalone SVG document.
pub struct ChoroplethRenderer<'a> {
    config: &'a ChoroplethConfig,
}

impl<'a> ChoroplethRenderer<'a> {
    pub fn new(config: &'a ChoroplethConfig) -> Self {
        ChoroplethRenderer { config }
    }

    pub fn render(&self, layers: &ChoroplethLayers) -> String {
        let scale = layers.domain.map(SequentialColorScale::new);
        let mut svg = String::with_capacity(64 * 1024);

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet">"#,
            format_coordinate(self.config.view_box_width),
            format_coordinate(self.config.view_box_height)
        ));

        self.build_states(&mut svg, layers.states);
        self.build_lines(&mut svg, layers.state_borders, self.config.state_border_stroke, None);
        self.build_lines(
            &mut svg,
            layers.county_lines,
            self.config.county_line_stroke,
            Some(self.config.county_line_width),
        );
        self.build_counties(&mut svg, layers.county_matches, scale.as_ref());
        if let Some(scale) = scale {
            self.build_legend(&mut svg, &scale);
        }

        svg.push_str("</svg>");
        svg
    }

    fn build_states(&self, svg: &mut String, states: &[MultiPolygon]) {
        svg.push_str("<g>");
        for state in states {
            svg.push_str(&format!(
                r#"<path d="{}" fill="{}"/>"#,
                polygon_path(state),
                self.config.state_fill
            ));
        }
        svg.push_str("</g>");
    }

    fn build_lines(&self, svg: &mut String, lines: &[LineString], stroke: &str, width: Option<f64>) {
        let stroke_width = width
            .map(|width| format!(r#" stroke-width="{}""#, format_coordinate(width)))
            .unwrap_or_default();

        svg.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}"{}/>"#,
            line_path(lines),
            stroke,
            stroke_width
        ));
    }

    fn build_counties(
        &self,
        svg: &mut String,
        county_matches: &[CountyMatch],
        scale: Option<&SequentialColorScale>,
    ) {
        svg.push_str("<g>");
        for county_match in county_matches {
            let name = escape_xml(&county_match.county.name);

            let (fill, title) = match (county_match.result, scale) {
                (MatchResult::Matched(value), Some(scale)) => (
                    scale.color(value).to_string(),
                    format!("{}: {:.0} tCO2e/yr", name, value),
                ),
                _ => (
                    self.config.no_data_fill.to_string(),
                    format!("{}: no data", name),
                ),
            };

            svg.push_str(&format!(
                r#"<path d="{}" fill="{}"><title>{}</title></path>"#,
                polygon_path(&county_match.county.geometry),
                fill,
                title
            ));
        }
        svg.push_str("</g>");
    }

    fn build_legend(&self, svg: &mut String, scale: &SequentialColorScale) {
        let ColorDomain { lo, hi } = scale.domain();
        let text_fill = self.config.legend_text_fill;

        svg.push_str(&format!(
            r#"<defs><linearGradient id="{GRADIENT_ID}"><stop offset="0%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></linearGradient></defs>"#,
            scale.color(lo),
            scale.color(hi)
        ));

        svg.push_str(&format!(
            r#"<g transform="translate({},{})">"#,
            format_coordinate(self.config.legend_x),
            format_coordinate(self.config.legend_y)
        ));
        svg.push_str(&format!(
            r#"<rect width="{}" height="{}" fill="url(#{GRADIENT_ID})" rx="4"/>"#,
            format_coordinate(self.config.legend_width),
            format_coordinate(self.config.legend_height)
        ));
        svg.push_str(&format!(
            r#"<text y="-6" font-size="12" fill="{text_fill}">{}</text>"#,
            escape_xml(self.config.legend_title)
        ));
        svg.push_str(&format!(
            r#"<text y="24" font-size="12" fill="{text_fill}">{}</text>"#,
            format_si(lo)
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="24" text-anchor="end" font-size="12" fill="{text_fill}">{}</text>"#,
            format_coordinate(self.config.legend_width),
            format_si(hi)
        ));
        svg.push_str("</g>");
    }
}
