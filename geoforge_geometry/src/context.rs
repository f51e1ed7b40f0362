//! Precision model and spatial reference configuration.
//!
//! A [`GeometryContext`] is handed to the [`GeometryFactory`](crate::GeometryFactory)
//! once and copied into every geometry the factory builds. Geometries never look
//! back at the factory after construction.

use crate::{GeometryError, Result};
use serde::Deserialize;

/// Describes how coordinate values are rounded when they enter a geometry.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrecisionModel {
	/// Full double precision, values are stored unchanged.
	#[default]
	Floating,
	/// Values are rounded to single precision.
	FloatingSingle,
	/// Values are snapped to a grid of `1 / scale`, e.g. a scale of `1000`
	/// keeps three decimal places.
	Fixed { scale: f64 },
}

impl PrecisionModel {
	/// Creates a fixed precision model, rejecting non-positive or non-finite scales.
	pub fn fixed(scale: f64) -> Result<Self> {
		let model = PrecisionModel::Fixed { scale };
		model.verify()?;
		Ok(model)
	}

	/// Checks that a fixed scale is usable.
	pub fn verify(&self) -> Result<()> {
		if let PrecisionModel::Fixed { scale } = self
			&& (!scale.is_finite() || *scale <= 0.0)
		{
			return Err(GeometryError::InvalidPrecisionModel(format!(
				"scale must be a positive finite number, got {scale}"
			)));
		}
		Ok(())
	}

	/// Rounds a single ordinate according to this model.
	#[must_use]
	pub fn make_precise(&self, value: f64) -> f64 {
		match self {
			PrecisionModel::Floating => value,
			PrecisionModel::FloatingSingle => f64::from(value as f32),
			PrecisionModel::Fixed { scale } => (value * scale).round() / scale,
		}
	}

	/// Number of decimal places worth printing for values of this model.
	///
	/// `None` means the shortest representation that reads back to the same `f64`.
	#[must_use]
	pub fn decimal_places(&self) -> Option<u8> {
		match self {
			PrecisionModel::Floating => None,
			PrecisionModel::FloatingSingle => Some(6),
			PrecisionModel::Fixed { scale } => Some((scale.log10() - 1e-9).ceil().clamp(0.0, 16.0) as u8),
		}
	}
}

/// The configuration stamped into every geometry: precision model and SRID.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeometryContext {
	pub precision_model: PrecisionModel,
	pub srid: i32,
}

impl GeometryContext {
	#[must_use]
	pub fn new(precision_model: PrecisionModel, srid: i32) -> Self {
		Self { precision_model, srid }
	}

	pub fn verify(&self) -> Result<()> {
		self.precision_model.verify()
	}
}
