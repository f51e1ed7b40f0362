//! Ready-made shapes: axis-aligned squares, squares with a centred hole, and
//! the demo set printed by `geoforge demo`.

use anyhow::Result;
use geoforge_geometry::{
	Coordinate, CoordinateSequence, Geometry, GeometryCollection, GeometryFactory, LinearRing, Polygon,
};

/// Creates the closed ring of a square with its lower-left corner at
/// `(x, y)`, running counter-clockwise.
pub fn square_ring(factory: &GeometryFactory, x: f64, y: f64, side: f64) -> Result<LinearRing> {
	let mut coords = CoordinateSequence::with_size(5);
	coords.set_at(0, Coordinate::new(x, y))?;
	coords.set_at(1, Coordinate::new(x + side, y))?;
	coords.set_at(2, Coordinate::new(x + side, y + side))?;
	coords.set_at(3, Coordinate::new(x, y + side))?;
	coords.set_at(4, Coordinate::new(x, y))?;

	// the ring keeps its own copy, `coords` is dropped here
	Ok(factory.create_linear_ring(&coords)?)
}

/// Creates a square polygon. With `hole` set, a square a third of the side
/// long is cut out of its centre.
pub fn square_polygon(factory: &GeometryFactory, x: f64, y: f64, side: f64, hole: bool) -> Result<Polygon> {
	let shell = square_ring(factory, x, y, side)?;
	let mut holes = Vec::new();
	if hole {
		let third = side / 3.0;
		holes.push(square_ring(factory, x + third, y + third, third)?);
	}
	Ok(factory.create_polygon(shell, holes)?)
}

/// Wraps two geometries into a collection, which takes ownership of both.
pub fn pair_collection(factory: &GeometryFactory, first: Geometry, second: Geometry) -> GeometryCollection {
	factory.create_geometry_collection(vec![first, second])
}

/// Builds the demo geometries: a square ring, a square polygon with a hole,
/// and a collection holding copies of both.
pub fn demo_geometries(factory: &GeometryFactory) -> Result<Vec<Geometry>> {
	let ring = square_ring(factory, 0.0, 0.0, 100.0)?;
	let polygon = square_polygon(factory, 0.0, 200.0, 300.0, true)?;

	// the collection adopts its members, so it gets clones
	let collection = pair_collection(factory, ring.clone().into(), polygon.clone().into());

	Ok(vec![ring.into(), polygon.into(), collection.into()])
}
