use super::{CoordinateSequence, Envelope, GeometryTrait};
use crate::{GeometryContext, GeometryType};
use std::fmt::Debug;

/// Represents a sequence of connected coordinates forming an open line.
///
/// A line string has either no coordinates or at least two.
#[derive(Clone, PartialEq)]
pub struct LineString {
	coords: CoordinateSequence,
	context: GeometryContext,
}

impl LineString {
	pub(crate) fn new(coords: CoordinateSequence, context: GeometryContext) -> Self {
		Self { coords, context }
	}

	/// Returns the owned coordinate sequence. It can be read but not modified.
	#[must_use]
	pub fn coords(&self) -> &CoordinateSequence {
		&self.coords
	}

	/// Checks whether first and last coordinates coincide.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		self.coords.is_closed()
	}
}

impl GeometryTrait for LineString {
	fn geometry_type(&self) -> GeometryType {
		GeometryType::LineString
	}

	fn context(&self) -> &GeometryContext {
		&self.context
	}

	fn envelope(&self) -> Option<Envelope> {
		Envelope::from_coords(&self.coords)
	}

	fn is_empty(&self) -> bool {
		self.coords.is_empty()
	}

	fn num_points(&self) -> usize {
		self.coords.len()
	}

	fn dimension(&self) -> Option<u8> {
		Some(1)
	}

	fn has_z(&self) -> bool {
		self.coords.has_z()
	}
}

impl Debug for LineString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.coords.fmt(f)
	}
}
