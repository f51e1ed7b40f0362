use super::*;
use crate::{GeometryError, Result};

/// Receives the concrete variant of a [`Geometry`] through [`Geometry::accept`].
///
/// Every method defaults to [`GeometryError::UnsupportedGeometry`], so an
/// operation only implements the variants it understands and reports the rest.
pub trait GeometryVisitor {
	type Output;

	fn visit_point(&mut self, _point: &Point) -> Result<Self::Output> {
		Err(GeometryError::UnsupportedGeometry(GeometryType::Point.as_str()))
	}

	fn visit_line_string(&mut self, _line: &LineString) -> Result<Self::Output> {
		Err(GeometryError::UnsupportedGeometry(GeometryType::LineString.as_str()))
	}

	fn visit_linear_ring(&mut self, _ring: &LinearRing) -> Result<Self::Output> {
		Err(GeometryError::UnsupportedGeometry(GeometryType::LinearRing.as_str()))
	}

	fn visit_polygon(&mut self, _polygon: &Polygon) -> Result<Self::Output> {
		Err(GeometryError::UnsupportedGeometry(GeometryType::Polygon.as_str()))
	}

	fn visit_multi_polygon(&mut self, _multi: &MultiPolygon) -> Result<Self::Output> {
		Err(GeometryError::UnsupportedGeometry(GeometryType::MultiPolygon.as_str()))
	}

	fn visit_geometry_collection(&mut self, _collection: &GeometryCollection) -> Result<Self::Output> {
		Err(GeometryError::UnsupportedGeometry(GeometryType::GeometryCollection.as_str()))
	}
}
