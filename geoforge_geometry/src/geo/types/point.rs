use super::{Coordinate, Envelope, GeometryTrait};
use crate::{GeometryContext, GeometryType};
use std::fmt::Debug;

/// A single position, or the empty point.
///
/// This is the simplest geometric type. Points are built by
/// [`GeometryFactory::create_point`](crate::GeometryFactory::create_point).
#[derive(Clone, PartialEq)]
pub struct Point {
	coord: Option<Coordinate>,
	context: GeometryContext,
}

impl Point {
	pub(crate) fn new(coord: Option<Coordinate>, context: GeometryContext) -> Self {
		Self { coord, context }
	}

	/// Returns the coordinate, `None` for the empty point.
	#[must_use]
	pub fn coord(&self) -> Option<&Coordinate> {
		self.coord.as_ref()
	}

	#[must_use]
	pub fn x(&self) -> Option<f64> {
		self.coord.as_ref().map(Coordinate::x)
	}

	#[must_use]
	pub fn y(&self) -> Option<f64> {
		self.coord.as_ref().map(Coordinate::y)
	}
}

impl GeometryTrait for Point {
	fn geometry_type(&self) -> GeometryType {
		GeometryType::Point
	}

	fn context(&self) -> &GeometryContext {
		&self.context
	}

	fn envelope(&self) -> Option<Envelope> {
		self.coord.as_ref().map(Envelope::from_coord)
	}

	fn is_empty(&self) -> bool {
		self.coord.is_none()
	}

	fn num_points(&self) -> usize {
		usize::from(self.coord.is_some())
	}

	fn dimension(&self) -> Option<u8> {
		Some(0)
	}

	fn has_z(&self) -> bool {
		self.coord.as_ref().is_some_and(Coordinate::has_z)
	}
}

impl Debug for Point {
	/// Formats the point as `[x, y]`, or `[]` when empty.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.coord {
			Some(c) => c.fmt(f),
			None => f.write_str("[]"),
		}
	}
}
