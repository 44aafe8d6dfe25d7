//! GeoJSON input handling.
//!
//! [`normalize_geojson`] turns any parsed JSON value into a uniform list of
//! features, or nothing when the value is not recognizably GeoJSON.

mod normalize;

pub use normalize::*;
