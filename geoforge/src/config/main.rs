use super::WriterConfig;
use anyhow::{Context, Result};
use geoforge_geometry::{GeometryContext, GeometryFactory, PrecisionModel, WktWriter};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Spatial reference identifier stamped into every geometry
	#[serde(default)]
	pub srid: i32,

	/// How coordinates are rounded when they enter a geometry
	#[serde(default)]
	pub precision_model: PrecisionModel,

	/// WKT output settings
	#[serde(default)]
	pub writer: WriterConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))
	}

	/// Loads `path` if given, the defaults otherwise.
	pub fn from_optional_path(path: Option<&Path>) -> Result<Self> {
		match path {
			Some(path) => Config::from_path(path),
			None => Ok(Config::default()),
		}
	}

	#[must_use]
	pub fn context(&self) -> GeometryContext {
		GeometryContext::new(self.precision_model, self.srid)
	}

	/// Builds the geometry factory, rejecting unusable precision models.
	pub fn factory(&self) -> Result<GeometryFactory> {
		Ok(GeometryFactory::new(self.context())?)
	}

	#[must_use]
	pub fn wkt_writer(&self) -> WktWriter {
		self.writer.build(&self.precision_model)
	}
}
