//! # geoforge
//!
//! Builds vector geometries and prints them as Well-Known-Text.
//!
//! The geometry model lives in [`geoforge_geometry`], re-exported here as
//! [`geometry`]. This crate adds a YAML [`config`] and a few ready-made
//! [`shapes`].
//!
//! ## Usage Example
//!
//! ```rust
//! use geoforge::{config::Config, shapes::square_polygon};
//!
//! let config = Config::from_string("srid: 4326").unwrap();
//! let factory = config.factory().unwrap();
//! let polygon = square_polygon(&factory, 0.0, 0.0, 3.0, true).unwrap();
//!
//! let wkt = config.wkt_writer().write(&polygon.into()).unwrap();
//! assert_eq!(wkt, "POLYGON ((0 0, 3 0, 3 3, 0 3, 0 0), (1 1, 2 1, 2 2, 1 2, 1 1))");
//! ```

pub mod config;
pub mod shapes;

pub use geoforge_geometry as geometry;
