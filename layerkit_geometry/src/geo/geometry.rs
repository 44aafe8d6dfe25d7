use super::*;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A GeoJSON geometry object, serialized as `{"type": ..., "coordinates": ...}`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	#[must_use]
	pub fn is_point(&self) -> bool {
		matches!(self, Geometry::Point(_) | Geometry::MultiPoint(_))
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn serializes_as_geojson_geometry() {
		let geometry = Geometry::new_point([139.767125, 35.681236]);
		assert_eq!(
			serde_json::to_value(&geometry).unwrap(),
			json!({"type": "Point", "coordinates": [139.767125, 35.681236]})
		);
	}

	#[test]
	fn deserializes_every_type() {
		let cases = [
			(json!({"type": "Point", "coordinates": [1, 2]}), "Point"),
			(json!({"type": "LineString", "coordinates": [[1, 2], [3, 4]]}), "LineString"),
			(
				json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}),
				"Polygon",
			),
			(json!({"type": "MultiPoint", "coordinates": [[1, 2]]}), "MultiPoint"),
			(
				json!({"type": "MultiLineString", "coordinates": [[[1, 2], [3, 4]]]}),
				"MultiLineString",
			),
			(
				json!({"type": "MultiPolygon", "coordinates": [[[[0, 0], [1, 0], [1, 1], [0, 0]]]]}),
				"MultiPolygon",
			),
		];
		for (value, name) in cases {
			let geometry: Geometry = serde_json::from_value(value).unwrap();
			assert_eq!(geometry.type_name(), name);
			assert!(geometry.verify().is_ok());
		}
	}

	#[test]
	fn rejects_unknown_type() {
		let value = json!({"type": "Circle", "coordinates": [1, 2]});
		assert!(serde_json::from_value::<Geometry>(value).is_err());
	}

	#[test]
	fn debug_shows_type() {
		let geometry = Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]]);
		assert_eq!(format!("{geometry:?}"), "LineString([[0.0, 0.0], [1.0, 1.0]])");
	}
}
