#![allow(clippy::module_inception)]

mod geometry;
mod geometry_type;
mod types;
mod visitor;

pub use geometry::*;
pub use geometry_type::*;
pub use types::*;
pub use visitor::*;
