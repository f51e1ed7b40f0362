use geoforge_geometry::{PrecisionModel, WktWriter};
use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WriterConfig {
	/// Number of decimal places. Falls back to what the precision model
	/// suggests, or the shortest round-trip form for floating models.
	pub precision: Option<u8>,

	/// Strip trailing zeros from fixed-precision output. Defaults to `true`.
	pub trim: Option<bool>,
}

impl WriterConfig {
	pub fn override_optional_precision(&mut self, precision: Option<u8>) {
		if precision.is_some() {
			self.precision = precision;
		}
	}

	pub fn override_optional_trim(&mut self, trim: Option<bool>) {
		if trim.is_some() {
			self.trim = trim;
		}
	}

	/// Builds a writer for geometries created under `precision_model`.
	pub fn build(&self, precision_model: &PrecisionModel) -> WktWriter {
		WktWriter::new()
			.with_precision(self.precision.or(precision_model.decimal_places()))
			.with_trim(self.trim.unwrap_or(true))
	}
}
