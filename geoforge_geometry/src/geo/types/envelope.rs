use super::Coordinate;
use std::fmt::Debug;

/// An axis-aligned bounding rectangle in the x/y plane.
///
/// Empty geometries have no envelope; callers receive `None` instead of a
/// degenerate rectangle.
#[derive(Clone, Copy, PartialEq)]
pub struct Envelope {
	pub min_x: f64,
	pub min_y: f64,
	pub max_x: f64,
	pub max_y: f64,
}

impl Envelope {
	/// Creates an envelope from two corners given in any order.
	#[must_use]
	pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
		Self {
			min_x: x0.min(x1),
			min_y: y0.min(y1),
			max_x: x0.max(x1),
			max_y: y0.max(y1),
		}
	}

	#[must_use]
	pub fn from_coord(coord: &Coordinate) -> Self {
		Self::new(coord.x(), coord.y(), coord.x(), coord.y())
	}

	/// Computes the envelope of a set of coordinates, `None` if there are none.
	pub fn from_coords<'a>(coords: impl IntoIterator<Item = &'a Coordinate>) -> Option<Self> {
		let mut iter = coords.into_iter();
		let mut envelope = Envelope::from_coord(iter.next()?);
		for coord in iter {
			envelope.expand_to_include(coord);
		}
		Some(envelope)
	}

	/// Merges optional envelopes, skipping the `None`s.
	pub fn merge_all(envelopes: impl IntoIterator<Item = Option<Envelope>>) -> Option<Self> {
		envelopes.into_iter().flatten().reduce(|mut a, b| {
			a.merge(&b);
			a
		})
	}

	pub fn expand_to_include(&mut self, coord: &Coordinate) {
		self.min_x = self.min_x.min(coord.x());
		self.min_y = self.min_y.min(coord.y());
		self.max_x = self.max_x.max(coord.x());
		self.max_y = self.max_y.max(coord.y());
	}

	pub fn merge(&mut self, other: &Envelope) {
		self.min_x = self.min_x.min(other.min_x);
		self.min_y = self.min_y.min(other.min_y);
		self.max_x = self.max_x.max(other.max_x);
		self.max_y = self.max_y.max(other.max_y);
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.min_x, self.min_y, self.max_x, self.max_y]
	}
}

impl Debug for Envelope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Envelope{:?}", self.as_array())
	}
}
