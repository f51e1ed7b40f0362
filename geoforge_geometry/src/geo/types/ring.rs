use super::{CoordinateSequence, Envelope, GeometryTrait};
use crate::{GeometryContext, GeometryError, GeometryType, Result};
use std::fmt::Debug;

/// Represents a closed ring, the building block of polygon shells and holes.
///
/// A ring is either empty or has at least four coordinates, and its first and
/// last coordinates are identical. Rings must not self-intersect; that is a
/// contract for the caller and is not checked here.
#[derive(Clone, PartialEq)]
pub struct LinearRing {
	coords: CoordinateSequence,
	context: GeometryContext,
}

impl LinearRing {
	/// Smallest number of coordinates of a non-empty ring:
	/// three distinct points plus the closing point.
	pub const MIN_POINTS: usize = 4;

	pub(crate) fn new(coords: CoordinateSequence, context: GeometryContext) -> Result<Self> {
		Self::verify(&coords)?;
		Ok(Self { coords, context })
	}

	pub(crate) fn empty(context: GeometryContext) -> Self {
		Self {
			coords: CoordinateSequence::new(),
			context,
		}
	}

	/// Verifies that a sequence can form a ring:
	/// - it is empty, or has at least 4 coordinates,
	/// - it is closed, i.e. the first and last points are identical in x and y.
	pub fn verify(coords: &CoordinateSequence) -> Result<()> {
		if coords.is_empty() {
			return Ok(());
		}
		if coords.len() < Self::MIN_POINTS {
			return Err(GeometryError::invalid(format!(
				"ring must have at least {} points, got {}",
				Self::MIN_POINTS,
				coords.len()
			)));
		}
		if !coords.is_closed() {
			return Err(GeometryError::invalid("ring must be closed"));
		}
		Ok(())
	}

	/// Returns the owned coordinate sequence, closing coordinate included.
	#[must_use]
	pub fn coords(&self) -> &CoordinateSequence {
		&self.coords
	}
}

impl GeometryTrait for LinearRing {
	fn geometry_type(&self) -> GeometryType {
		GeometryType::LinearRing
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

impl Debug for LinearRing {
	/// Formats the ring as the list of its coordinates.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.coords.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn square() -> LinearRing {
		LinearRing::new(
			CoordinateSequence::from(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]),
			GeometryContext::default(),
		)
		.unwrap()
	}

	#[test]
	fn verify_valid() {
		assert!(LinearRing::verify(square().coords()).is_ok());
	}

	#[test]
	fn verify_empty() {
		assert!(LinearRing::verify(&CoordinateSequence::new()).is_ok());
	}

	#[rstest]
	#[case(vec![[0.0, 0.0]])]
	#[case(vec![[0.0, 0.0], [0.0, 0.0]])]
	#[case(vec![[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]])]
	fn verify_too_few_points(#[case] coords: Vec<[f64; 2]>) {
		let err = LinearRing::verify(&CoordinateSequence::from(coords)).unwrap_err();
		assert!(matches!(err, GeometryError::InvalidGeometry(_)));
		assert!(err.to_string().contains("at least 4 points"));
	}

	#[test]
	fn verify_not_closed() {
		let seq = CoordinateSequence::from(&[[0, 0], [1, 0], [1, 1], [0, 1]]);
		assert_eq!(
			LinearRing::verify(&seq),
			Err(GeometryError::invalid("ring must be closed"))
		);
	}

	#[test]
	fn envelope() {
		assert_eq!(square().envelope().unwrap().as_array(), [0.0, 0.0, 10.0, 10.0]);
		assert!(LinearRing::empty(GeometryContext::default()).envelope().is_none());
	}

	#[test]
	fn counts_closing_point() {
		assert_eq!(square().num_points(), 5);
	}

	#[test]
	fn debug_format() {
		assert!(format!("{:?}", square()).starts_with("[[0.0, 0.0], [10.0, 0.0]"));
	}

	#[test]
	fn clone_and_eq() {
		let a = square();
		assert_eq!(a.clone(), a);
	}
}
