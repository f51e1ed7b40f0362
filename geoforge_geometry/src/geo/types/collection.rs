use super::{CompositeGeometryTrait, Envelope, GeometryTrait};
use crate::{Geometry, GeometryContext, GeometryType};
use std::fmt::Debug;

/// An ordered set of geometries of any variant, nested collections included.
///
/// Members are owned by the collection. A caller that wants to keep using a
/// geometry after putting it into a collection has to clone it first.
#[derive(Clone, PartialEq)]
pub struct GeometryCollection {
	members: Vec<Geometry>,
	context: GeometryContext,
}

impl GeometryCollection {
	pub(crate) fn new(members: Vec<Geometry>, context: GeometryContext) -> Self {
		Self { members, context }
	}
}

impl GeometryTrait for GeometryCollection {
	fn geometry_type(&self) -> GeometryType {
		GeometryType::GeometryCollection
	}

	fn context(&self) -> &GeometryContext {
		&self.context
	}

	fn envelope(&self) -> Option<Envelope> {
		Envelope::merge_all(self.members.iter().map(GeometryTrait::envelope))
	}

	fn is_empty(&self) -> bool {
		self.members.iter().all(GeometryTrait::is_empty)
	}

	fn num_points(&self) -> usize {
		self.members.iter().map(GeometryTrait::num_points).sum()
	}

	fn dimension(&self) -> Option<u8> {
		self.members.iter().filter_map(GeometryTrait::dimension).max()
	}

	fn has_z(&self) -> bool {
		self.members.iter().any(GeometryTrait::has_z)
	}
}

impl CompositeGeometryTrait<Geometry> for GeometryCollection {
	fn members(&self) -> &[Geometry] {
		&self.members
	}
	fn into_members(self) -> Vec<Geometry> {
		self.members
	}
}

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.members).finish()
	}
}
