//! Conversion of shapes completed on a drawing surface into GeoJSON features.

mod codec;
mod overlay;

pub use codec::*;
pub use overlay::*;
