use super::*;
use crate::{GeometryContext, Result, WktWriter};
use std::fmt::{self, Debug};

/// Any geometry, as a closed set of variants.
///
/// Each variant owns its whole subtree; dropping a `Geometry` tears the tree
/// down depth-first. Use [`Clone`] to keep an independent copy before handing
/// a geometry to a parent.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(Point),
	LineString(LineString),
	LinearRing(LinearRing),
	Polygon(Polygon),
	MultiPolygon(MultiPolygon),
	GeometryCollection(GeometryCollection),
}

macro_rules! dispatch {
	($self:ident, $g:ident => $body:expr) => {
		match $self {
			Geometry::Point($g) => $body,
			Geometry::LineString($g) => $body,
			Geometry::LinearRing($g) => $body,
			Geometry::Polygon($g) => $body,
			Geometry::MultiPolygon($g) => $body,
			Geometry::GeometryCollection($g) => $body,
		}
	};
}

impl Geometry {
	/// Hands the concrete variant to `visitor`.
	///
	/// Visitor methods a visitor does not override report
	/// [`GeometryError::UnsupportedGeometry`](crate::GeometryError::UnsupportedGeometry).
	pub fn accept<V: GeometryVisitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output> {
		match self {
			Geometry::Point(g) => visitor.visit_point(g),
			Geometry::LineString(g) => visitor.visit_line_string(g),
			Geometry::LinearRing(g) => visitor.visit_linear_ring(g),
			Geometry::Polygon(g) => visitor.visit_polygon(g),
			Geometry::MultiPolygon(g) => visitor.visit_multi_polygon(g),
			Geometry::GeometryCollection(g) => visitor.visit_geometry_collection(g),
		}
	}

	#[must_use]
	pub fn as_linear_ring(&self) -> Option<&LinearRing> {
		match self {
			Geometry::LinearRing(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_polygon(&self) -> Option<&Polygon> {
		match self {
			Geometry::Polygon(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_geometry_collection(&self) -> Option<&GeometryCollection> {
		match self {
			Geometry::GeometryCollection(g) => Some(g),
			_ => None,
		}
	}

	/// Renders the geometry with the default [`WktWriter`].
	pub fn to_wkt(&self) -> Result<String> {
		WktWriter::default().write(self)
	}
}

impl GeometryTrait for Geometry {
	fn geometry_type(&self) -> GeometryType {
		dispatch!(self, g => g.geometry_type())
	}
	fn context(&self) -> &GeometryContext {
		dispatch!(self, g => g.context())
	}
	fn envelope(&self) -> Option<Envelope> {
		dispatch!(self, g => g.envelope())
	}
	fn is_empty(&self) -> bool {
		dispatch!(self, g => g.is_empty())
	}
	fn num_points(&self) -> usize {
		dispatch!(self, g => g.num_points())
	}
	fn dimension(&self) -> Option<u8> {
		dispatch!(self, g => g.dimension())
	}
	fn has_z(&self) -> bool {
		dispatch!(self, g => g.has_z())
	}
}

macro_rules! impl_from_variant {
	($($variant:ident),*) => {$(
		impl From<$variant> for Geometry {
			fn from(geometry: $variant) -> Self {
				Geometry::$variant(geometry)
			}
		}
	)*}
}

impl_from_variant!(Point, LineString, LinearRing, Polygon, MultiPolygon, GeometryCollection);

impl Debug for Geometry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let inner: &dyn Debug = dispatch!(self, g => g);
		f.debug_tuple(self.geometry_type().as_str()).field(inner).finish()
	}
}

/// Formats the geometry as Well-Known-Text.
impl fmt::Display for Geometry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let text = self.to_wkt().map_err(|_| fmt::Error)?;
		f.write_str(&text)
	}
}
