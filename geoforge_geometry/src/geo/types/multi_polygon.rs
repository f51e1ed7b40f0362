use super::{CompositeGeometryTrait, Envelope, GeometryTrait, Polygon};
use crate::{GeometryContext, GeometryType};
use std::fmt::Debug;

/// Represents a collection of polygons, each of which may have holes.
/// This struct is used for complex, multi-part areas in 2D space.
#[derive(Clone, PartialEq)]
pub struct MultiPolygon {
	polygons: Vec<Polygon>,
	context: GeometryContext,
}

impl MultiPolygon {
	pub(crate) fn new(polygons: Vec<Polygon>, context: GeometryContext) -> Self {
		Self { polygons, context }
	}
}

/// - `envelope()` merges the envelopes of all polygons.
/// - `is_empty()` is true if every polygon is empty.
impl GeometryTrait for MultiPolygon {
	fn geometry_type(&self) -> GeometryType {
		GeometryType::MultiPolygon
	}

	fn context(&self) -> &GeometryContext {
		&self.context
	}

	fn envelope(&self) -> Option<Envelope> {
		Envelope::merge_all(self.polygons.iter().map(GeometryTrait::envelope))
	}

	fn is_empty(&self) -> bool {
		self.polygons.iter().all(GeometryTrait::is_empty)
	}

	fn num_points(&self) -> usize {
		self.polygons.iter().map(GeometryTrait::num_points).sum()
	}

	fn dimension(&self) -> Option<u8> {
		Some(2)
	}

	fn has_z(&self) -> bool {
		self.polygons.iter().any(GeometryTrait::has_z)
	}
}

impl CompositeGeometryTrait<Polygon> for MultiPolygon {
	fn members(&self) -> &[Polygon] {
		&self.polygons
	}
	fn into_members(self) -> Vec<Polygon> {
		self.polygons
	}
}

impl Debug for MultiPolygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.polygons).finish()
	}
}
