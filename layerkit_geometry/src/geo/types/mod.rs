// Geometric primitives of the crate: `PointGeometry`, `LineStringGeometry`,
// `PolygonGeometry` (built from `RingGeometry`) and their multi counterparts.
// They share `GeometryTrait` and serialize as bare GeoJSON coordinate arrays.

mod coordinates;
mod linestring;
mod macros;
mod multi;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
