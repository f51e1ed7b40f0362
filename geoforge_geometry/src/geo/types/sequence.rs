use super::Coordinate;
use crate::{GeometryError, Result};
use std::fmt::Debug;

/// An ordered list of coordinates, the storage behind every linear geometry.
///
/// A sequence is either growable (built with [`CoordinateSequence::new`] or
/// from a `Vec`) or fixed-size (built with [`CoordinateSequence::with_size`]),
/// in which case only [`set_at`](CoordinateSequence::set_at) may change it.
///
/// Geometries copy the sequence they are built from and only ever expose it
/// by shared reference, so an embedded sequence cannot be mutated.
#[derive(Clone, PartialEq)]
pub struct CoordinateSequence {
	coords: Vec<Coordinate>,
	fixed: bool,
}

impl CoordinateSequence {
	/// Creates an empty, growable sequence.
	#[must_use]
	pub fn new() -> Self {
		Self {
			coords: Vec::new(),
			fixed: false,
		}
	}

	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			coords: Vec::with_capacity(capacity),
			fixed: false,
		}
	}

	/// Creates a fixed-size sequence of `size` coordinates, all set to `(0, 0)`.
	#[must_use]
	pub fn with_size(size: usize) -> Self {
		Self {
			coords: vec![Coordinate::new(0.0, 0.0); size],
			fixed: true,
		}
	}

	#[must_use]
	pub fn is_fixed_size(&self) -> bool {
		self.fixed
	}

	pub fn push(&mut self, coord: impl Into<Coordinate>) -> Result<()> {
		if self.fixed {
			return Err(GeometryError::FixedSize);
		}
		self.coords.push(coord.into());
		Ok(())
	}

	pub fn set_at(&mut self, index: usize, coord: impl Into<Coordinate>) -> Result<()> {
		let len = self.coords.len();
		let slot = self
			.coords
			.get_mut(index)
			.ok_or(GeometryError::OutOfBounds { index, len })?;
		*slot = coord.into();
		Ok(())
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&Coordinate> {
		self.coords.get(index)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.coords.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.coords.is_empty()
	}

	#[must_use]
	pub fn first(&self) -> Option<&Coordinate> {
		self.coords.first()
	}

	#[must_use]
	pub fn last(&self) -> Option<&Coordinate> {
		self.coords.last()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
		self.coords.iter()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Coordinate] {
		&self.coords
	}

	/// Returns `true` if the sequence is non-empty and its first and last
	/// coordinates match in x and y.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		match (self.first(), self.last()) {
			(Some(first), Some(last)) => first.equals_2d(last),
			_ => false,
		}
	}

	/// Returns `true` if any coordinate carries a z ordinate.
	#[must_use]
	pub fn has_z(&self) -> bool {
		self.coords.iter().any(Coordinate::has_z)
	}

	/// Copies the sequence, passing every ordinate through `f`.
	/// The copy is always growable.
	#[must_use]
	pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
		Self {
			coords: self.coords.iter().map(|c| c.map(&f)).collect(),
			fixed: false,
		}
	}
}

impl Default for CoordinateSequence {
	fn default() -> Self {
		Self::new()
	}
}

impl<'a> IntoIterator for &'a CoordinateSequence {
	type Item = &'a Coordinate;
	type IntoIter = std::slice::Iter<'a, Coordinate>;

	fn into_iter(self) -> Self::IntoIter {
		self.coords.iter()
	}
}

impl FromIterator<Coordinate> for CoordinateSequence {
	fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
		Self {
			coords: iter.into_iter().collect(),
			fixed: false,
		}
	}
}

impl Debug for CoordinateSequence {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.coords).finish()
	}
}

impl<T> From<Vec<T>> for CoordinateSequence
where
	Coordinate: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		value.into_iter().map(Coordinate::from).collect()
	}
}

impl<'a, T, const N: usize> From<&'a [T; N]> for CoordinateSequence
where
	Coordinate: From<&'a T>,
{
	fn from(value: &'a [T; N]) -> Self {
		value.iter().map(Coordinate::from).collect()
	}
}
