//! The single construction authority for geometries.
//!
//! Two parameter-passing conventions are used on purpose:
//!
//! - Coordinate sequences are taken by reference and copied. The caller keeps
//!   its sequence and may reuse or drop it.
//! - Rings, polygons and geometries are taken by value. They move into the new
//!   parent, and the compiler rejects any later use of the donated value.
//!   Clone first to keep a copy.

use crate::{
	Coordinate, CoordinateSequence, Geometry, GeometryCollection, GeometryContext, GeometryError, GeometryTrait,
	LineString, LinearRing, MultiPolygon, Point, Polygon, PrecisionModel, Result,
};

/// Builds geometries and stamps them with one precision model and SRID.
///
/// The factory holds no geometries. What it builds does not borrow from it,
/// so geometries may outlive the factory.
///
/// ```
/// use geoforge_geometry::{CoordinateSequence, GeometryFactory, WktWriter};
///
/// let factory = GeometryFactory::default();
/// let coords = CoordinateSequence::from(&[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]);
/// let shell = factory.create_linear_ring(&coords).unwrap();
/// let polygon = factory.create_polygon(shell, vec![]).unwrap();
///
/// let wkt = WktWriter::new().write(&polygon.into()).unwrap();
/// assert_eq!(wkt, "POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0))");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeometryFactory {
	context: GeometryContext,
}

impl GeometryFactory {
	/// Creates a factory for the given configuration.
	///
	/// Fails with [`GeometryError::InvalidPrecisionModel`] if a fixed precision
	/// model has an unusable scale.
	pub fn new(context: GeometryContext) -> Result<Self> {
		context.verify()?;
		log::debug!("geometry factory: {context:?}");
		Ok(Self { context })
	}

	/// Returns a copy of this factory with another SRID.
	#[must_use]
	pub fn with_srid(mut self, srid: i32) -> Self {
		self.context.srid = srid;
		self
	}

	#[must_use]
	pub fn context(&self) -> &GeometryContext {
		&self.context
	}

	#[must_use]
	pub fn precision_model(&self) -> &PrecisionModel {
		&self.context.precision_model
	}

	#[must_use]
	pub fn srid(&self) -> i32 {
		self.context.srid
	}

	fn make_precise(&self, coords: &CoordinateSequence) -> CoordinateSequence {
		let model = self.context.precision_model;
		coords.map(|v| model.make_precise(v))
	}

	/// Creates a point, or the empty point for `None`.
	#[must_use]
	pub fn create_point(&self, coord: Option<Coordinate>) -> Point {
		let model = self.context.precision_model;
		let point = Point::new(coord.map(|c| c.map(|v| model.make_precise(v))), self.context);
		log::trace!("created point {point:?}");
		point
	}

	/// Creates a line string from a copy of `coords`.
	///
	/// Fails with [`GeometryError::InvalidGeometry`] for exactly one coordinate.
	pub fn create_line_string(&self, coords: &CoordinateSequence) -> Result<LineString> {
		if coords.len() == 1 {
			log::debug!("rejected line string with a single point");
			return Err(GeometryError::invalid("line string must have 0 or at least 2 points"));
		}
		let line = LineString::new(self.make_precise(coords), self.context);
		log::trace!("created line string with {} points", line.num_points());
		Ok(line)
	}

	/// Creates a ring from a copy of `coords`; the caller keeps ownership of `coords`.
	///
	/// Fails with [`GeometryError::InvalidGeometry`] if the sequence is non-empty
	/// and either has fewer than 4 coordinates or is not closed. On failure the
	/// internal copy is discarded.
	pub fn create_linear_ring(&self, coords: &CoordinateSequence) -> Result<LinearRing> {
		let ring = LinearRing::new(self.make_precise(coords), self.context).inspect_err(|e| {
			log::debug!("rejected linear ring: {e}");
		})?;
		log::trace!("created linear ring with {} points", ring.num_points());
		Ok(ring)
	}

	/// Creates a polygon that takes ownership of `shell` and of every ring in `holes`.
	///
	/// Fails with [`GeometryError::InvalidGeometry`] if the shell is empty while
	/// there are holes. Hole containment and overlap are not checked.
	pub fn create_polygon(&self, shell: LinearRing, holes: Vec<LinearRing>) -> Result<Polygon> {
		if shell.is_empty() && !holes.is_empty() {
			log::debug!("rejected polygon: empty shell with {} holes", holes.len());
			return Err(GeometryError::invalid("polygon with holes must have a non-empty shell"));
		}
		let polygon = Polygon::new(shell, holes, self.context);
		log::trace!("created polygon with {} holes", polygon.num_holes());
		Ok(polygon)
	}

	/// Creates the empty polygon, `POLYGON EMPTY`.
	#[must_use]
	pub fn create_empty_polygon(&self) -> Polygon {
		Polygon::new(LinearRing::empty(self.context), Vec::new(), self.context)
	}

	/// Creates a multipolygon that takes ownership of `polygons`.
	#[must_use]
	pub fn create_multi_polygon(&self, polygons: Vec<Polygon>) -> MultiPolygon {
		log::trace!("created multipolygon with {} polygons", polygons.len());
		MultiPolygon::new(polygons, self.context)
	}

	/// Creates a collection that takes ownership of `members`, keeping their order.
	#[must_use]
	pub fn create_geometry_collection(&self, members: Vec<Geometry>) -> GeometryCollection {
		log::trace!("created geometry collection with {} members", members.len());
		GeometryCollection::new(members, self.context)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, GeometryType};
	use rstest::rstest;

	fn square(x: f64, y: f64, side: f64) -> CoordinateSequence {
		CoordinateSequence::from(vec![
			[x, y],
			[x + side, y],
			[x + side, y + side],
			[x, y + side],
			[x, y],
		])
	}

	#[test]
	fn rejects_bad_precision_model() {
		let context = GeometryContext::new(PrecisionModel::Fixed { scale: 0.0 }, 0);
		assert!(matches!(
			GeometryFactory::new(context),
			Err(GeometryError::InvalidPrecisionModel(_))
		));
	}

	#[test]
	fn stamps_context_into_geometries() {
		let context = GeometryContext::new(PrecisionModel::fixed(10.0).unwrap(), 3857);
		let factory = GeometryFactory::new(context).unwrap();
		let ring = factory.create_linear_ring(&square(0.0, 0.0, 1.0)).unwrap();
		let polygon = factory.create_polygon(ring, vec![]).unwrap();
		let collection = factory.create_geometry_collection(vec![polygon.into()]);
		assert_eq!(collection.context(), &context);
		assert_eq!(collection.member(0).unwrap().srid(), 3857);
	}

	#[test]
	fn ring_copies_the_sequence() {
		let factory = GeometryFactory::default();
		let mut coords = square(0.0, 0.0, 1.0);
		let ring = factory.create_linear_ring(&coords).unwrap();
		coords.set_at(1, (5.0, 5.0)).unwrap();
		drop(coords);
		assert_eq!(ring.coords().get(1), Some(&Coordinate::new(1.0, 0.0)));
	}

	#[test]
	fn ring_applies_precision_model() {
		let factory = GeometryFactory::new(GeometryContext::new(PrecisionModel::fixed(1.0).unwrap(), 0)).unwrap();
		let ring = factory.create_linear_ring(&square(0.2, 0.2, 0.9)).unwrap();
		assert_eq!(ring.coords().get(2), Some(&Coordinate::new(1.0, 1.0)));
	}

	#[test]
	fn ring_accepts_empty_sequence() {
		let ring = GeometryFactory::default()
			.create_linear_ring(&CoordinateSequence::new())
			.unwrap();
		assert!(ring.is_empty());
	}

	#[rstest]
	#[case(vec![[0.0, 0.0]])]
	#[case(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]])]
	#[case(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])]
	#[case(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.5]])]
	fn ring_rejects_invalid_sequences(#[case] coords: Vec<[f64; 2]>) {
		let result = GeometryFactory::default().create_linear_ring(&CoordinateSequence::from(coords));
		assert!(matches!(result, Err(GeometryError::InvalidGeometry(_))));
	}

	#[test]
	fn ring_closure_compares_2d_only() {
		let coords = CoordinateSequence::from(vec![
			[0.0, 0.0, 1.0],
			[1.0, 0.0, 1.0],
			[1.0, 1.0, 1.0],
			[0.0, 0.0, 2.0],
		]);
		assert!(GeometryFactory::default().create_linear_ring(&coords).is_ok());
	}

	#[test]
	fn ring_from_fixed_size_sequence() {
		let mut coords = CoordinateSequence::with_size(5);
		for (i, c) in [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]].into_iter().enumerate() {
			coords.set_at(i, c).unwrap();
		}
		let ring = GeometryFactory::default().create_linear_ring(&coords).unwrap();
		assert_eq!(ring.num_points(), 5);
	}

	#[test]
	fn polygon_adopts_shell_and_holes() {
		let factory = GeometryFactory::default();
		let shell = factory.create_linear_ring(&square(0.0, 0.0, 9.0)).unwrap();
		let holes = vec![
			factory.create_linear_ring(&square(1.0, 1.0, 2.0)).unwrap(),
			factory.create_linear_ring(&square(5.0, 5.0, 2.0)).unwrap(),
		];
		let polygon = factory.create_polygon(shell, holes).unwrap();
		assert_eq!(polygon.num_holes(), 2);
		assert_eq!(polygon.holes()[1].coords().first(), Some(&Coordinate::new(5.0, 5.0)));
	}

	#[test]
	fn polygon_rejects_holes_without_shell() {
		let factory = GeometryFactory::default();
		let shell = factory.create_linear_ring(&CoordinateSequence::new()).unwrap();
		let hole = factory.create_linear_ring(&square(1.0, 1.0, 2.0)).unwrap();
		assert!(matches!(
			factory.create_polygon(shell, vec![hole]),
			Err(GeometryError::InvalidGeometry(_))
		));
	}

	#[test]
	fn empty_polygon() {
		let polygon = GeometryFactory::default().create_empty_polygon();
		assert!(polygon.is_empty());
		assert_eq!(polygon.num_holes(), 0);
	}

	#[test]
	fn line_string_rejects_single_point() {
		let factory = GeometryFactory::default();
		let result = factory.create_line_string(&CoordinateSequence::from(vec![[1.0, 1.0]]));
		assert!(matches!(result, Err(GeometryError::InvalidGeometry(_))));
		assert!(factory.create_line_string(&CoordinateSequence::new()).is_ok());
	}

	#[test]
	fn point_applies_precision_model() {
		let factory = GeometryFactory::new(GeometryContext::new(PrecisionModel::fixed(100.0).unwrap(), 0)).unwrap();
		let point = factory.create_point(Some(Coordinate::new(1.23456, -7.891)));
		assert_eq!(point.x(), Some(1.23));
		assert_eq!(point.y(), Some(-7.89));
	}

	#[test]
	fn collection_keeps_member_order() {
		let factory = GeometryFactory::default();
		let ring = factory.create_linear_ring(&square(0.0, 0.0, 1.0)).unwrap();
		let polygon = factory.create_polygon(ring.clone(), vec![]).unwrap();
		let collection = factory.create_geometry_collection(vec![ring.into(), polygon.into()]);
		let kinds: Vec<GeometryType> = collection.iter_members().map(GeometryTrait::geometry_type).collect();
		assert_eq!(kinds, vec![GeometryType::LinearRing, GeometryType::Polygon]);
	}

	#[test]
	fn geometries_outlive_the_factory() {
		let ring = {
			let factory = GeometryFactory::default().with_srid(31467);
			factory.create_linear_ring(&square(0.0, 0.0, 1.0)).unwrap()
		};
		assert_eq!(ring.srid(), 31467);
	}
}
