//! # geoforge_geometry
//!
//! A small vector geometry object model and its Well-Known-Text writer.
//!
//! Geometries are built bottom-up through a [`GeometryFactory`]: coordinate
//! sequences become rings, rings become polygons, and any geometry can go into
//! a [`GeometryCollection`]. Every geometry is an exclusively owned tree.
//! Sequences are copied into the geometries built from them, while rings and
//! geometries are moved into their parents.
//!
//! ```
//! use geoforge_geometry::*;
//!
//! let factory = GeometryFactory::default();
//! let square = CoordinateSequence::from(&[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]);
//!
//! let ring = factory.create_linear_ring(&square).unwrap();
//! let polygon = factory.create_polygon(ring.clone(), vec![]).unwrap();
//! let collection = factory.create_geometry_collection(vec![ring.into(), polygon.into()]);
//!
//! assert_eq!(
//!     WktWriter::new().write(&collection.into()).unwrap(),
//!     "GEOMETRYCOLLECTION (LINEARRING (0 0, 1 0, 1 1, 0 1, 0 0), POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0)))"
//! );
//! ```

mod context;
mod error;
mod factory;
mod geo;
pub mod wkt;

pub use context::*;
pub use error::*;
pub use factory::*;
pub use geo::*;
pub use wkt::WktWriter;
