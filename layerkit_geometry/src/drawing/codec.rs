use super::{LatLng, LatLngBounds, Overlay, OverlayKind};
use crate::{
	Coordinates, GeoFeature, Geometry, LineStringGeometry, PointGeometry, PolygonGeometry, RingGeometry, generate_id,
	timestamp_now,
};
use anyhow::{Result, ensure};
use log::trace;
use serde_json::Value as JsonValue;
use std::f64::consts::PI;

/// Earth radius used for the circle approximation, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

pub const DEFAULT_CIRCLE_SEGMENTS: usize = 48;

/// Converts completed drawing-surface shapes into GeoJSON features.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryCodec {
	circle_segments: usize,
}

impl Default for GeometryCodec {
	fn default() -> Self {
		Self {
			circle_segments: DEFAULT_CIRCLE_SEGMENTS,
		}
	}
}

impl GeometryCodec {
	pub fn new(circle_segments: usize) -> Result<Self> {
		ensure!(
			circle_segments >= 3,
			"a circle needs at least 3 segments, got {circle_segments}"
		);
		Ok(Self { circle_segments })
	}

	#[must_use]
	pub fn circle_segments(&self) -> usize {
		self.circle_segments
	}

	/// Converts a shape into a feature with a fresh id and provenance
	/// properties (`source`, `drawingType`, `createdAt`).
	///
	/// Returns `None` when the handle does not answer the accessors of the
	/// declared `kind` or when the resulting geometry would be empty.
	pub fn overlay_to_feature(&self, kind: OverlayKind, overlay: &dyn Overlay) -> Option<GeoFeature> {
		let geometry = self.overlay_to_geometry(kind, overlay)?;

		let mut feature = GeoFeature::new(geometry);
		feature.set_id(generate_id());
		feature.set_property("source", "drawing");
		feature.set_property("drawingType", kind.as_str());
		feature.set_property("createdAt", JsonValue::from(timestamp_now()));
		Some(feature)
	}

	pub fn overlay_to_geometry(&self, kind: OverlayKind, overlay: &dyn Overlay) -> Option<Geometry> {
		let geometry = match kind {
			OverlayKind::Marker => Geometry::Point(PointGeometry(overlay.position()?.to_coordinates())),
			OverlayKind::Polyline => {
				let coordinates = path_to_coordinates(&overlay.path()?);
				if coordinates.len() < 2 {
					trace!("polyline with {} points dropped", coordinates.len());
					return None;
				}
				Geometry::LineString(LineStringGeometry(coordinates))
			}
			OverlayKind::Polygon => {
				let rings = paths_to_rings(&overlay.paths()?);
				if rings.is_empty() {
					return None;
				}
				Geometry::Polygon(PolygonGeometry(rings))
			}
			OverlayKind::Rectangle => Geometry::Polygon(rectangle_to_polygon(&overlay.bounds()?)),
			OverlayKind::Circle => Geometry::Polygon(circle_to_polygon(
				&overlay.center()?,
				overlay.radius()?,
				self.circle_segments,
			)?),
		};
		Some(geometry)
	}
}

#[must_use]
pub fn path_to_coordinates(path: &[LatLng]) -> Vec<Coordinates> {
	path.iter().map(LatLng::to_coordinates).collect()
}

/// One closed ring per path; rings with fewer than 4 points after closing
/// are dropped.
#[must_use]
pub fn paths_to_rings(paths: &[Vec<LatLng>]) -> Vec<RingGeometry> {
	paths
		.iter()
		.map(|path| RingGeometry::closed_from(path_to_coordinates(path)))
		.filter(|ring| {
			let keep = ring.len() >= 4;
			if !keep {
				trace!("ring with {} points dropped", ring.len());
			}
			keep
		})
		.collect()
}

/// A single closed ring in the order SW, SE, NE, NW, SW.
#[must_use]
pub fn rectangle_to_polygon(bounds: &LatLngBounds) -> PolygonGeometry {
	let ne = bounds.north_east;
	let sw = bounds.south_west;
	let ring = RingGeometry(vec![
		Coordinates::new(sw.lng, sw.lat),
		Coordinates::new(ne.lng, sw.lat),
		Coordinates::new(ne.lng, ne.lat),
		Coordinates::new(sw.lng, ne.lat),
		Coordinates::new(sw.lng, sw.lat),
	]);
	PolygonGeometry(vec![ring])
}

/// Approximates a circle by a closed ring of `segments` vertices plus the
/// closing copy of the first one.
///
/// Offsets are applied in radians on an equirectangular projection, so the
/// shape distorts at high latitudes and large radii.
///
/// Returns `None` for fewer than 3 segments or a negative/non-finite radius.
#[must_use]
pub fn circle_to_polygon(center: &LatLng, radius: f64, segments: usize) -> Option<PolygonGeometry> {
	if segments < 3 || !radius.is_finite() || radius < 0.0 {
		trace!("circle with radius {radius} and {segments} segments dropped");
		return None;
	}

	let lat = center.lat.to_radians();
	let lng = center.lng.to_radians();
	let angular = radius / EARTH_RADIUS_METERS;

	let mut coordinates: Vec<Coordinates> = (0..segments)
		.map(|i| {
			let angle = 2.0 * PI * (i as f64) / (segments as f64);
			let lat_offset = angular * angle.cos();
			let lng_offset = angular * angle.sin() / lat.cos();
			Coordinates::new((lng + lng_offset).to_degrees(), (lat + lat_offset).to_degrees())
		})
		.collect();
	coordinates.push(coordinates[0]);

	Some(PolygonGeometry(vec![RingGeometry(coordinates)]))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{DrawnShape, GeometryTrait};
	use approx::assert_relative_eq;

	fn ll(lat: f64, lng: f64) -> LatLng {
		LatLng::new(lat, lng)
	}

	fn convert(shape: &DrawnShape) -> Option<GeoFeature> {
		GeometryCodec::default().overlay_to_feature(shape.kind(), shape)
	}

	#[test]
	fn marker_becomes_point() {
		let feature = convert(&DrawnShape::Marker {
			position: ll(35.681236, 139.767125),
		})
		.unwrap();
		assert_eq!(feature.geometry, Geometry::new_point([139.767125, 35.681236]));
	}

	#[test]
	fn provenance_properties() {
		let feature = convert(&DrawnShape::Marker { position: ll(1.0, 2.0) }).unwrap();
		assert!(feature.id.is_some());
		assert_eq!(feature.properties.get_str("source"), Some("drawing"));
		assert_eq!(feature.properties.get_str("drawingType"), Some("marker"));
		let created_at = feature.properties.get_str("createdAt").unwrap();
		assert!(created_at.contains('T'), "{created_at}");
	}

	#[test]
	fn every_feature_gets_its_own_id() {
		let shape = DrawnShape::Marker { position: ll(1.0, 2.0) };
		assert_ne!(convert(&shape).unwrap().id, convert(&shape).unwrap().id);
	}

	#[test]
	fn polyline_needs_two_points() {
		let line = DrawnShape::Polyline {
			path: vec![ll(0.0, 0.0), ll(1.0, 1.0)],
		};
		let feature = convert(&line).unwrap();
		assert_eq!(
			feature.geometry,
			Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]])
		);

		let short = DrawnShape::Polyline { path: vec![ll(0.0, 0.0)] };
		assert!(convert(&short).is_none());
	}

	#[test]
	fn polygon_rings_are_closed() {
		let polygon = DrawnShape::Polygon {
			paths: vec![vec![ll(0.0, 0.0), ll(0.0, 1.0), ll(1.0, 1.0)]],
		};
		let Geometry::Polygon(geometry) = convert(&polygon).unwrap().geometry else {
			panic!("expected a polygon");
		};
		assert_eq!(geometry.0.len(), 1);
		assert_eq!(geometry.0[0].len(), 4);
		assert!(geometry.0[0].is_closed());
		assert!(geometry.verify().is_ok());
	}

	#[test]
	fn polygon_drops_degenerate_rings() {
		let polygon = DrawnShape::Polygon {
			paths: vec![
				vec![ll(0.0, 0.0), ll(0.0, 1.0), ll(1.0, 1.0), ll(0.0, 0.0)],
				vec![ll(5.0, 5.0), ll(6.0, 6.0)],
				vec![],
			],
		};
		let Geometry::Polygon(geometry) = convert(&polygon).unwrap().geometry else {
			panic!("expected a polygon");
		};
		assert_eq!(geometry.0.len(), 1);
		assert_eq!(geometry.0[0].len(), 4);
	}

	#[test]
	fn polygon_without_valid_rings_is_rejected() {
		let polygon = DrawnShape::Polygon {
			paths: vec![vec![ll(0.0, 0.0), ll(1.0, 1.0)]],
		};
		assert!(convert(&polygon).is_none());
		assert!(convert(&DrawnShape::Polygon { paths: vec![] }).is_none());
	}

	#[test]
	fn rectangle_ring_order() {
		let bounds = LatLngBounds {
			north_east: ll(36.0, 140.0),
			south_west: ll(35.0, 139.0),
		};
		let polygon = rectangle_to_polygon(&bounds);
		assert_eq!(
			polygon,
			PolygonGeometry::from(&[[[139.0, 35.0], [140.0, 35.0], [140.0, 36.0], [139.0, 36.0], [139.0, 35.0]]])
		);
		assert_eq!(polygon.0[0].len(), 5);
		assert!(polygon.0[0].is_closed());
	}

	#[test]
	fn circle_has_segments_plus_one_points() {
		let polygon = circle_to_polygon(&ll(35.0, 139.0), 1000.0, 48).unwrap();
		assert_eq!(polygon.0.len(), 1);
		let ring = &polygon.0[0];
		assert_eq!(ring.len(), 49);
		assert_eq!(ring.0[0], ring.0[48]);
	}

	#[test]
	fn circle_offsets() {
		let center = ll(35.0, 139.0);
		let radius = 1000.0;
		let ring = circle_to_polygon(&center, radius, 4).unwrap().0.remove(0);
		let angular = (radius / EARTH_RADIUS_METERS).to_degrees();

		// angle 0 points north
		assert_relative_eq!(ring.0[0].x(), 139.0, epsilon = 1e-12);
		assert_relative_eq!(ring.0[0].y(), 35.0 + angular, epsilon = 1e-12);
		// angle 90° points east, stretched by 1/cos(lat)
		assert_relative_eq!(ring.0[1].x(), 139.0 + angular / 35f64.to_radians().cos(), epsilon = 1e-12);
		assert_relative_eq!(ring.0[1].y(), 35.0, epsilon = 1e-12);
		// angle 180° points south
		assert_relative_eq!(ring.0[2].y(), 35.0 - angular, epsilon = 1e-12);
	}

	#[test]
	fn circle_through_codec_uses_configured_segments() {
		let codec = GeometryCodec::new(12).unwrap();
		let shape = DrawnShape::Circle {
			center: ll(0.0, 0.0),
			radius: 50.0,
		};
		let Some(Geometry::Polygon(polygon)) = codec.overlay_to_geometry(OverlayKind::Circle, &shape) else {
			panic!("expected a polygon");
		};
		assert_eq!(polygon.0[0].len(), 13);
	}

	#[test]
	fn invalid_circles() {
		assert!(circle_to_polygon(&ll(0.0, 0.0), -1.0, 48).is_none());
		assert!(circle_to_polygon(&ll(0.0, 0.0), f64::NAN, 48).is_none());
		assert!(circle_to_polygon(&ll(0.0, 0.0), 10.0, 2).is_none());
		assert!(GeometryCodec::new(2).is_err());
	}

	#[test]
	fn mismatched_handle_is_rejected() {
		let marker = DrawnShape::Marker { position: ll(1.0, 2.0) };
		let codec = GeometryCodec::default();
		for kind in [
			OverlayKind::Polyline,
			OverlayKind::Polygon,
			OverlayKind::Rectangle,
			OverlayKind::Circle,
		] {
			assert!(codec.overlay_to_feature(kind, &marker).is_none(), "{kind}");
		}
	}

	struct CenterOnly;

	impl Overlay for CenterOnly {
		fn center(&self) -> Option<LatLng> {
			Some(LatLng::new(0.0, 0.0))
		}
	}

	#[test]
	fn partial_handle_is_rejected() {
		assert!(
			GeometryCodec::default()
				.overlay_to_feature(OverlayKind::Circle, &CenterOnly)
				.is_none()
		);
	}
}
