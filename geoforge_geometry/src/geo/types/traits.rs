use super::Envelope;
use crate::{GeometryContext, GeometryType};
use std::fmt::Debug;

/// Defines the basic interface shared by all geometry variants.
///
/// Cloning a geometry always yields an independent deep copy; that is how a
/// caller keeps a geometry while donating the original to a polygon or collection.
pub trait GeometryTrait: Debug + Clone {
	/// Returns the concrete variant of this geometry.
	fn geometry_type(&self) -> GeometryType;

	/// Returns the precision model and SRID stamped in by the factory.
	fn context(&self) -> &GeometryContext;

	/// Returns the spatial reference identifier.
	fn srid(&self) -> i32 {
		self.context().srid
	}

	/// Computes the bounding rectangle of all coordinates,
	/// or `None` if the geometry is empty.
	fn envelope(&self) -> Option<Envelope>;

	/// Checks whether the geometry contains no coordinates at all.
	fn is_empty(&self) -> bool;

	/// Counts all coordinates, including the closing coordinates of rings.
	fn num_points(&self) -> usize;

	/// Returns the topological dimension: 0 for points, 1 for lines, 2 for areas.
	///
	/// Collections report the highest dimension of their members and `None`
	/// when they have no members.
	fn dimension(&self) -> Option<u8>;

	/// Checks whether any coordinate carries a z ordinate.
	fn has_z(&self) -> bool;
}

/// Represents geometries that are ordered containers of owned members,
/// e.g. a multipolygon made of polygons.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Returns the members in their stored order.
	fn members(&self) -> &[Item];

	/// Consumes the container and hands ownership of the members back to the caller.
	fn into_members(self) -> Vec<Item>;

	/// Returns the number of direct members.
	fn num_members(&self) -> usize {
		self.members().len()
	}

	/// Returns a reference to the member at `index`, if any.
	fn member(&self, index: usize) -> Option<&Item> {
		self.members().get(index)
	}

	/// Returns an iterator over the members.
	fn iter_members(&self) -> std::slice::Iter<'_, Item> {
		self.members().iter()
	}
}
