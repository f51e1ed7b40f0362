use std::fmt::Debug;

/// A single position: x and y, plus an optional z ordinate.
///
/// Coordinates are plain values. They are copied into sequences and carry no identity.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
	xy: [f64; 2],
	z: Option<f64>,
}

impl Coordinate {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { xy: [x, y], z: None }
	}

	#[must_use]
	pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self { xy: [x, y], z: Some(z) }
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.xy[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.xy[1]
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	#[must_use]
	pub fn has_z(&self) -> bool {
		self.z.is_some()
	}

	/// Compares only the x and y ordinates.
	#[must_use]
	pub fn equals_2d(&self, other: &Coordinate) -> bool {
		self.xy == other.xy
	}

	/// Returns a copy with every ordinate passed through `f`.
	#[must_use]
	pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
		Self {
			xy: [f(self.xy[0]), f(self.xy[1])],
			z: self.z.map(&f),
		}
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinate
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinate::new(value[0].into(), value[1].into())
	}
}

impl From<[f64; 2]> for Coordinate {
	fn from(value: [f64; 2]) -> Self {
		Coordinate::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Coordinate {
	fn from(value: [f64; 3]) -> Self {
		Coordinate::new_3d(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Coordinate {
	fn from(value: (f64, f64)) -> Self {
		Coordinate::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for Coordinate {
	fn from(value: &(f64, f64)) -> Self {
		Coordinate::new(value.0, value.1)
	}
}

impl From<Coordinate> for [f64; 2] {
	fn from(value: Coordinate) -> Self {
		value.xy
	}
}

impl Debug for Coordinate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.z {
			Some(z) => [self.xy[0], self.xy[1], z].fmt(f),
			None => self.xy.fmt(f),
		}
	}
}
