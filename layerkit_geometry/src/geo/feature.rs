use super::*;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// A feature id. GeoJSON allows strings and numbers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
	String(String),
	Number(serde_json::Number),
}

impl Display for FeatureId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FeatureId::String(s) => f.write_str(s),
			FeatureId::Number(n) => Display::fmt(n, f),
		}
	}
}

impl From<&str> for FeatureId {
	fn from(value: &str) -> Self {
		FeatureId::String(value.to_string())
	}
}

impl From<String> for FeatureId {
	fn from(value: String) -> Self {
		FeatureId::String(value)
	}
}

impl From<u64> for FeatureId {
	fn from(value: u64) -> Self {
		FeatureId::Number(value.into())
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct GeoFeature {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<FeatureId>,
	pub geometry: Geometry,
	#[serde(default)]
	pub properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	pub fn set_id<T: Into<FeatureId>>(&mut self, id: T) {
		self.id = Some(id.into());
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T: Into<serde_json::Value>>(&mut self, key: &str, value: T) {
		self.properties.insert(key, value);
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		use serde_json::json;
		Self {
			id: Some(FeatureId::from("hq")),
			geometry: Geometry::new_point([139.767125, 35.681236]),
			properties: GeoProperties::from(vec![
				("name", json!("HQ (Sample)")),
				("floors", json!(12)),
				("is_open", json!(true)),
			]),
		}
	}
}
