// This module defines the geometric types of the `geoforge_geometry` crate:
// coordinates and coordinate sequences as storage, the geometry variants
// `Point`, `LineString`, `LinearRing`, `Polygon`, `MultiPolygon` and
// `GeometryCollection`, and the shared traits `GeometryTrait` and
// `CompositeGeometryTrait` that give them consistent behavior.

mod collection;
mod coordinates;
mod envelope;
mod linestring;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod sequence;
mod traits;

pub use collection::*;
pub use coordinates::*;
pub use envelope::*;
pub use linestring::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use sequence::*;
pub use traits::*;
