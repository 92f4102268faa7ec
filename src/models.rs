pub mod alias_table;
pub use alias_table::AliasTable;

pub mod choropleth_renderer;
pub use choropleth_renderer::{ChoroplethLayers, ChoroplethRenderer};

pub mod color_domain;
pub use color_domain::{ColorDomain, QuantileMethod};

pub mod color_scale;
pub use color_scale::{Rgb, SequentialColorScale};

pub mod config;
pub use config::ChoroplethConfig;

pub mod conflict_policy;
pub use conflict_policy::ConflictPolicy;

pub mod data_source;
pub use data_source::DataSource;

pub mod emissions_join;
pub use emissions_join::EmissionsJoin;

pub mod emissions_record;
pub use emissions_record::EmissionsRecord;

pub mod error;
pub use error::Error;

pub mod geo_county;
pub use geo_county::{GeoCounty, GeoFeature};

pub mod match_report;
pub use match_report::MatchReport;

pub mod match_result;
pub use match_result::{matched_values, CountyMatch, MatchResult};

pub mod name_matcher;
pub use name_matcher::NameMatcher;

pub mod topology;
pub use topology::{Topology, TopologyGeometry, Transform};
