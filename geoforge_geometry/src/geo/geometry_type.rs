use crate::geo::Geometry;
use std::fmt;

/// The concrete variants a [`Geometry`] can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point,
	LineString,
	LinearRing,
	Polygon,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryType {
	/// Returns the name in CamelCase, e.g. `"LinearRing"`.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::LineString => "LineString",
			GeometryType::LinearRing => "LinearRing",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPolygon => "MultiPolygon",
			GeometryType::GeometryCollection => "GeometryCollection",
		}
	}

	/// Returns the Well-Known-Text keyword, e.g. `"LINEARRING"`.
	#[must_use]
	pub fn wkt_tag(&self) -> &'static str {
		match self {
			GeometryType::Point => "POINT",
			GeometryType::LineString => "LINESTRING",
			GeometryType::LinearRing => "LINEARRING",
			GeometryType::Polygon => "POLYGON",
			GeometryType::MultiPolygon => "MULTIPOLYGON",
			GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
		}
	}
}

impl fmt::Display for GeometryType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<&Geometry> for GeometryType {
	fn from(geometry: &Geometry) -> Self {
		use crate::GeometryTrait;
		geometry.geometry_type()
	}
}
