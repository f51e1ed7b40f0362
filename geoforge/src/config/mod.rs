//! geoforge configuration.
//!
//! A YAML file selects the spatial reference, the precision model stamped into
//! every geometry, and the options of the WKT writer:
//!
//! ```yaml
//! srid: 4326
//! precision_model:
//!   type: fixed
//!   scale: 1000
//! writer:
//!   precision: 3
//!   trim: true
//! ```
//!
//! - [`Config`](crate::config::Config): top-level configuration loader and YAML parser
//! - [`WriterConfig`](crate::config::WriterConfig): WKT output settings

mod main;
mod writer;

pub use main::Config;
pub use writer::WriterConfig;
