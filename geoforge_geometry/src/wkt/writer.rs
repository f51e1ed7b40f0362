use crate::{
	CompositeGeometryTrait, Coordinate, CoordinateSequence, Geometry, GeometryCollection, GeometryContext,
	GeometryTrait, GeometryType, GeometryVisitor, LineString, LinearRing, MultiPolygon, Point, Polygon, Result,
};

/// Serializes geometries to Well-Known-Text.
///
/// Writing is a pure function of the geometry: the same geometry always
/// produces the same text, and a failed write produces no text at all.
///
/// Ordinates are printed in their shortest round-trip form unless a number of
/// decimal places is set with [`with_precision`](WktWriter::with_precision).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WktWriter {
	precision: Option<u8>,
	trim: bool,
}

impl Default for WktWriter {
	fn default() -> Self {
		Self {
			precision: None,
			trim: true,
		}
	}
}

impl WktWriter {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Picks the number of decimal places from the context's precision model.
	#[must_use]
	pub fn for_context(context: &GeometryContext) -> Self {
		Self::default().with_precision(context.precision_model.decimal_places())
	}

	/// Sets a fixed number of decimal places, `None` for the shortest round-trip form.
	#[must_use]
	pub fn with_precision(mut self, precision: Option<u8>) -> Self {
		self.precision = precision;
		self
	}

	/// Strips trailing zeros (and a dangling decimal point) from fixed-precision output.
	#[must_use]
	pub fn with_trim(mut self, trim: bool) -> Self {
		self.trim = trim;
		self
	}

	#[must_use]
	pub fn precision(&self) -> Option<u8> {
		self.precision
	}

	#[must_use]
	pub fn trim(&self) -> bool {
		self.trim
	}

	/// Renders `geometry` and all of its members.
	///
	/// If any coordinate has a z ordinate, the whole output is three-dimensional:
	/// every tag gets a ` Z` suffix and coordinates without z print `NaN`.
	pub fn write(&self, geometry: &Geometry) -> Result<String> {
		let mut renderer = Renderer {
			writer: self,
			with_z: geometry.has_z(),
			buffer: String::new(),
		};
		geometry.accept(&mut renderer)?;
		log::trace!("wrote {} as {} bytes of WKT", geometry.geometry_type(), renderer.buffer.len());
		Ok(renderer.buffer)
	}

	/// Formats one ordinate. Negative zero is printed as `0`.
	#[must_use]
	pub fn format_ordinate(&self, value: f64) -> String {
		let value = if value == 0.0 { 0.0 } else { value };
		let mut text = match self.precision {
			None => format!("{value}"),
			Some(decimals) => format!("{value:.prec$}", prec = decimals as usize),
		};
		if self.trim && self.precision.is_some() && text.contains('.') {
			let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
			text.truncate(trimmed);
		}
		if text.starts_with('-') && text[1..].bytes().all(|b| b == b'0' || b == b'.') {
			text.remove(0);
		}
		text
	}
}

struct Renderer<'a> {
	writer: &'a WktWriter,
	with_z: bool,
	buffer: String,
}

impl Renderer<'_> {
	fn write_tag(&mut self, kind: GeometryType) {
		self.buffer.push_str(kind.wkt_tag());
		if self.with_z {
			self.buffer.push_str(" Z");
		}
	}

	fn write_empty(&mut self, kind: GeometryType) {
		self.write_tag(kind);
		self.buffer.push_str(" EMPTY");
	}

	fn write_coord(&mut self, coord: &Coordinate) {
		self.buffer.push_str(&self.writer.format_ordinate(coord.x()));
		self.buffer.push(' ');
		self.buffer.push_str(&self.writer.format_ordinate(coord.y()));
		if self.with_z {
			self.buffer.push(' ');
			self.buffer.push_str(&self.writer.format_ordinate(coord.z().unwrap_or(f64::NAN)));
		}
	}

	/// Writes `(x y, x y, …)`.
	fn write_coords(&mut self, coords: &CoordinateSequence) {
		self.buffer.push('(');
		for (i, coord) in coords.iter().enumerate() {
			if i > 0 {
				self.buffer.push_str(", ");
			}
			self.write_coord(coord);
		}
		self.buffer.push(')');
	}

	/// Writes `((shell), (hole), …)`. An empty hole is written as `EMPTY`.
	fn write_rings(&mut self, polygon: &Polygon) {
		self.buffer.push('(');
		for (i, ring) in polygon.rings().enumerate() {
			if i > 0 {
				self.buffer.push_str(", ");
			}
			if ring.coords().is_empty() {
				self.buffer.push_str("EMPTY");
			} else {
				self.write_coords(ring.coords());
			}
		}
		self.buffer.push(')');
	}

	fn write_linear(&mut self, kind: GeometryType, coords: &CoordinateSequence) {
		if coords.is_empty() {
			self.write_empty(kind);
		} else {
			self.write_tag(kind);
			self.buffer.push(' ');
			self.write_coords(coords);
		}
	}
}

impl GeometryVisitor for Renderer<'_> {
	type Output = ();

	fn visit_point(&mut self, point: &Point) -> Result<()> {
		match point.coord() {
			None => self.write_empty(GeometryType::Point),
			Some(coord) => {
				self.write_tag(GeometryType::Point);
				self.buffer.push_str(" (");
				self.write_coord(coord);
				self.buffer.push(')');
			}
		}
		Ok(())
	}

	fn visit_line_string(&mut self, line: &LineString) -> Result<()> {
		self.write_linear(GeometryType::LineString, line.coords());
		Ok(())
	}

	fn visit_linear_ring(&mut self, ring: &LinearRing) -> Result<()> {
		self.write_linear(GeometryType::LinearRing, ring.coords());
		Ok(())
	}

	fn visit_polygon(&mut self, polygon: &Polygon) -> Result<()> {
		if polygon.is_empty() {
			self.write_empty(GeometryType::Polygon);
			return Ok(());
		}
		self.write_tag(GeometryType::Polygon);
		self.buffer.push(' ');
		self.write_rings(polygon);
		Ok(())
	}

	fn visit_multi_polygon(&mut self, multi: &MultiPolygon) -> Result<()> {
		if multi.is_empty() {
			self.write_empty(GeometryType::MultiPolygon);
			return Ok(());
		}
		self.write_tag(GeometryType::MultiPolygon);
		self.buffer.push_str(" (");
		for (i, polygon) in multi.iter_members().enumerate() {
			if i > 0 {
				self.buffer.push_str(", ");
			}
			if polygon.is_empty() {
				self.buffer.push_str("EMPTY");
			} else {
				self.write_rings(polygon);
			}
		}
		self.buffer.push(')');
		Ok(())
	}

	fn visit_geometry_collection(&mut self, collection: &GeometryCollection) -> Result<()> {
		if collection.is_empty() {
			self.write_empty(GeometryType::GeometryCollection);
			return Ok(());
		}
		self.write_tag(GeometryType::GeometryCollection);
		self.buffer.push_str(" (");
		for (i, member) in collection.iter_members().enumerate() {
			if i > 0 {
				self.buffer.push_str(", ");
			}
			member.accept(self)?;
		}
		self.buffer.push(')');
		Ok(())
	}
}
