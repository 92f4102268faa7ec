// Types listed here are either shared across multiple files and/or exposed via the library.

/// A raw, human-entered place name as it appears in either source (e.g. `"St. Mary's Parish"`).
pub type RawName = String;

/// Represents a borrowed view of a raw place name.
pub type RawNameRef = str;

/// A normalized county name used purely as an equality join key. Never displayed.
pub type CanonicalKey = String;

/// Represents a borrowed view of a canonical key.
pub type CanonicalKeyRef = str;

/// The opaque identifier of a county feature (a FIPS code in us-atlas).
pub type CountyId = String;

/// Total county carbon footprint, in tons CO2-equivalent per year.
pub type TotalFootprint = f64;

/// A single `[x, y]` position, already projected into SVG user space.
pub type Point = [f64; 2];

/// A closed ring of points.
pub type Ring = Vec<Point>;

/// A polygon: the exterior ring followed by any holes.
pub type Polygon = Vec<Ring>;

/// A list of polygons that together form one region's boundary.
pub type MultiPolygon = Vec<Polygon>;

/// An open polyline, as produced by a topology mesh.
pub type LineString = Vec<Point>;
