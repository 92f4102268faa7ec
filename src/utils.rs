pub mod escape_xml;
pub mod format_coordinate;
pub mod format_si;
pub mod interpolate_cividis;
pub mod normalize_county_name;
pub mod parse_numeric_like;
pub mod quantile;
pub mod replace_whole_word;
pub mod strip_admin_suffix;

pub use escape_xml::escape_xml;
pub use format_coordinate::format_coordinate;
pub use format_si::format_si;
pub use interpolate_cividis::interpolate_cividis;
pub use normalize_county_name::normalize_county_name;
pub use parse_numeric_like::parse_numeric_like;
pub use quantile::quantile;
pub use replace_whole_word::replace_whole_word;
pub use strip_admin_suffix::strip_admin_suffix;
