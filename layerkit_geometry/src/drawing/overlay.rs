use crate::Coordinates;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// A position as reported by the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
	pub lat: f64,
	pub lng: f64,
}

impl LatLng {
	#[must_use]
	pub fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}

	/// GeoJSON order: `[lng, lat]`.
	#[must_use]
	pub fn to_coordinates(&self) -> Coordinates {
		Coordinates::new(self.lng, self.lat)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLngBounds {
	pub north_east: LatLng,
	pub south_west: LatLng,
}

/// The kind tag carried by a "shape completed" event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
	Marker,
	Polyline,
	Polygon,
	Rectangle,
	Circle,
}

impl OverlayKind {
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			OverlayKind::Marker => "marker",
			OverlayKind::Polyline => "polyline",
			OverlayKind::Polygon => "polygon",
			OverlayKind::Rectangle => "rectangle",
			OverlayKind::Circle => "circle",
		}
	}
}

impl Display for OverlayKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for OverlayKind {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		Ok(match s.to_ascii_lowercase().as_str() {
			"marker" | "point" => OverlayKind::Marker,
			"polyline" => OverlayKind::Polyline,
			"polygon" => OverlayKind::Polygon,
			"rectangle" => OverlayKind::Rectangle,
			"circle" => OverlayKind::Circle,
			_ => bail!("unsupported overlay kind '{s}'"),
		})
	}
}

/// Accessors of a shape object handed over by the drawing surface.
///
/// A handle only answers the accessors that belong to its own shape; every
/// other accessor returns `None`. A missing answer for the declared kind makes
/// the shape unconvertible.
pub trait Overlay {
	/// Marker position.
	fn position(&self) -> Option<LatLng> {
		None
	}
	/// Polyline path.
	fn path(&self) -> Option<Vec<LatLng>> {
		None
	}
	/// Polygon paths, one per ring.
	fn paths(&self) -> Option<Vec<Vec<LatLng>>> {
		None
	}
	/// Rectangle bounds.
	fn bounds(&self) -> Option<LatLngBounds> {
		None
	}
	/// Circle center.
	fn center(&self) -> Option<LatLng> {
		None
	}
	/// Circle radius in meters.
	fn radius(&self) -> Option<f64> {
		None
	}
}

/// A plain-data description of a drawn shape, e.g. read from a file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DrawnShape {
	Marker { position: LatLng },
	Polyline { path: Vec<LatLng> },
	Polygon { paths: Vec<Vec<LatLng>> },
	Rectangle { bounds: LatLngBounds },
	Circle { center: LatLng, radius: f64 },
}

impl DrawnShape {
	#[must_use]
	pub fn kind(&self) -> OverlayKind {
		match self {
			DrawnShape::Marker { .. } => OverlayKind::Marker,
			DrawnShape::Polyline { .. } => OverlayKind::Polyline,
			DrawnShape::Polygon { .. } => OverlayKind::Polygon,
			DrawnShape::Rectangle { .. } => OverlayKind::Rectangle,
			DrawnShape::Circle { .. } => OverlayKind::Circle,
		}
	}
}

impl Overlay for DrawnShape {
	fn position(&self) -> Option<LatLng> {
		match self {
			DrawnShape::Marker { position } => Some(*position),
			_ => None,
		}
	}
	fn path(&self) -> Option<Vec<LatLng>> {
		match self {
			DrawnShape::Polyline { path } => Some(path.clone()),
			_ => None,
		}
	}
	fn paths(&self) -> Option<Vec<Vec<LatLng>>> {
		match self {
			DrawnShape::Polygon { paths } => Some(paths.clone()),
			_ => None,
		}
	}
	fn bounds(&self) -> Option<LatLngBounds> {
		match self {
			DrawnShape::Rectangle { bounds } => Some(*bounds),
			_ => None,
		}
	}
	fn center(&self) -> Option<LatLng> {
		match self {
			DrawnShape::Circle { center, .. } => Some(*center),
			_ => None,
		}
	}
	fn radius(&self) -> Option<f64> {
		match self {
			DrawnShape::Circle { radius, .. } => Some(*radius),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("marker", OverlayKind::Marker)]
	#[case("Point", OverlayKind::Marker)]
	#[case("POLYLINE", OverlayKind::Polyline)]
	#[case("polygon", OverlayKind::Polygon)]
	#[case("rectangle", OverlayKind::Rectangle)]
	#[case("circle", OverlayKind::Circle)]
	fn parse_kind(#[case] input: &str, #[case] expected: OverlayKind) {
		assert_eq!(input.parse::<OverlayKind>().unwrap(), expected);
	}

	#[test]
	fn unknown_kind_is_rejected() {
		assert!("ellipse".parse::<OverlayKind>().is_err());
	}

	#[test]
	fn drawn_shape_from_json() {
		let shape: DrawnShape = serde_json::from_value(json!({
			"type": "rectangle",
			"bounds": {"northEast": {"lat": 2.0, "lng": 3.0}, "southWest": {"lat": 1.0, "lng": 0.5}}
		}))
		.unwrap();
		assert_eq!(shape.kind(), OverlayKind::Rectangle);
		assert_eq!(shape.bounds().unwrap().south_west, LatLng::new(1.0, 0.5));
		assert_eq!(shape.position(), None);
		assert_eq!(shape.radius(), None);
	}
}
