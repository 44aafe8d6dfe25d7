//! Geometry, GeoJSON and drawing-surface conversions for map drawing layers.

pub mod degrees;
pub mod drawing;
mod geo;
pub mod geojson;
mod utils;

pub use drawing::*;
pub use geo::*;
pub use geojson::*;
pub use utils::*;
