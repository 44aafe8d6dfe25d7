use crate::GeoFeature;
use log::debug;
use serde_json::Value as JsonValue;

/// The result of normalizing arbitrary GeoJSON input.
#[derive(Clone, Debug, PartialEq)]
pub enum NormalizedGeoJson {
	/// The input was a single `Feature` object.
	Feature(GeoFeature),
	/// The input was a `FeatureCollection` or a bare array of features.
	Features(Vec<GeoFeature>),
}

impl NormalizedGeoJson {
	#[must_use]
	pub fn into_features(self) -> Vec<GeoFeature> {
		match self {
			NormalizedGeoJson::Feature(feature) => vec![feature],
			NormalizedGeoJson::Features(features) => features,
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		match self {
			NormalizedGeoJson::Feature(_) => 1,
			NormalizedGeoJson::Features(features) => features.len(),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Accepts a `FeatureCollection`, a single `Feature` or a bare array of
/// features. Everything else, including members that do not decode as
/// features, yields `None`; there is no partial result.
#[must_use]
pub fn normalize_geojson(raw: &JsonValue) -> Option<NormalizedGeoJson> {
	match raw {
		JsonValue::Object(object) => match object.get("type").and_then(JsonValue::as_str) {
			Some("FeatureCollection") => {
				let features = object.get("features")?;
				decode_features(features).map(NormalizedGeoJson::Features)
			}
			Some("Feature") => match serde_json::from_value::<GeoFeature>(raw.clone()) {
				Ok(feature) => Some(NormalizedGeoJson::Feature(feature)),
				Err(e) => {
					debug!("ignoring undecodable feature: {e}");
					None
				}
			},
			other => {
				debug!("not a GeoJSON feature object, type is {other:?}");
				None
			}
		},
		JsonValue::Array(_) => decode_features(raw).map(NormalizedGeoJson::Features),
		_ => None,
	}
}

fn decode_features(value: &JsonValue) -> Option<Vec<GeoFeature>> {
	match serde_json::from_value::<Vec<GeoFeature>>(value.clone()) {
		Ok(features) => Some(features),
		Err(e) => {
			debug!("ignoring undecodable feature list: {e}");
			None
		}
	}
}
