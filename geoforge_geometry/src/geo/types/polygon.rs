use super::{Envelope, GeometryTrait, LinearRing};
use crate::{GeometryContext, GeometryType};
use std::fmt::Debug;

/// An area bounded by one shell ring, minus zero or more hole rings.
///
/// The polygon owns its rings exclusively; they are dropped together with it.
/// Holes are expected to lie inside the shell and not to overlap each other.
/// Neither property is checked.
#[derive(Clone, PartialEq)]
pub struct Polygon {
	shell: LinearRing,
	holes: Vec<LinearRing>,
	context: GeometryContext,
}

impl Polygon {
	pub(crate) fn new(shell: LinearRing, holes: Vec<LinearRing>, context: GeometryContext) -> Self {
		Self { shell, holes, context }
	}

	#[must_use]
	pub fn shell(&self) -> &LinearRing {
		&self.shell
	}

	/// Returns the holes in their stored order.
	#[must_use]
	pub fn holes(&self) -> &[LinearRing] {
		&self.holes
	}

	#[must_use]
	pub fn num_holes(&self) -> usize {
		self.holes.len()
	}

	/// Iterates over all rings, shell first.
	pub fn rings(&self) -> impl Iterator<Item = &LinearRing> {
		std::iter::once(&self.shell).chain(self.holes.iter())
	}

	/// Consumes the polygon and hands its shell and holes back to the caller.
	#[must_use]
	pub fn into_rings(self) -> (LinearRing, Vec<LinearRing>) {
		(self.shell, self.holes)
	}
}

impl GeometryTrait for Polygon {
	fn geometry_type(&self) -> GeometryType {
		GeometryType::Polygon
	}

	fn context(&self) -> &GeometryContext {
		&self.context
	}

	/// The shell bounds the whole polygon, so holes are ignored.
	fn envelope(&self) -> Option<Envelope> {
		self.shell.envelope()
	}

	fn is_empty(&self) -> bool {
		self.shell.is_empty()
	}

	fn num_points(&self) -> usize {
		self.rings().map(GeometryTrait::num_points).sum()
	}

	fn dimension(&self) -> Option<u8> {
		Some(2)
	}

	fn has_z(&self) -> bool {
		self.rings().any(GeometryTrait::has_z)
	}
}

impl Debug for Polygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.rings()).finish()
	}
}
