use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::{collections::BTreeMap, fmt::Debug};

/// The open, string-keyed `properties` member of a feature.
///
/// A JSON `null` deserializes to an empty map.
#[derive(Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GeoProperties {
	properties: BTreeMap<String, JsonValue>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: BTreeMap::new(),
		}
	}
	pub fn insert<T: Into<JsonValue>>(&mut self, key: &str, value: T) {
		self.properties.insert(key.to_string(), value.into());
	}
	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		self.properties.remove(key)
	}
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.properties.get(key)
	}
	#[must_use]
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.properties.get(key).and_then(JsonValue::as_str)
	}
	#[must_use]
	pub fn get_f64(&self, key: &str) -> Option<f64> {
		self.properties.get(key).and_then(JsonValue::as_f64)
	}
	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.properties.contains_key(key)
	}
	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
}

impl<'de> Deserialize<'de> for GeoProperties {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let properties = Option::<BTreeMap<String, JsonValue>>::deserialize(deserializer)?;
		Ok(GeoProperties {
			properties: properties.unwrap_or_default(),
		})
	}
}

impl From<Vec<(&str, JsonValue)>> for GeoProperties {
	fn from(value: Vec<(&str, JsonValue)>) -> Self {
		GeoProperties {
			properties: value.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn null_deserializes_to_empty() {
		let properties: GeoProperties = serde_json::from_value(JsonValue::Null).unwrap();
		assert!(properties.is_empty());
	}

	#[test]
	fn typed_getters() {
		let properties: GeoProperties =
			serde_json::from_value(json!({"name": "HQ", "strokeWidth": 3, "nested": {"a": 1}})).unwrap();
		assert_eq!(properties.get_str("name"), Some("HQ"));
		assert_eq!(properties.get_f64("strokeWidth"), Some(3.0));
		assert_eq!(properties.get_str("strokeWidth"), None);
		assert_eq!(properties.get("nested"), Some(&json!({"a": 1})));
	}

	#[test]
	fn insert_and_remove() {
		let mut properties = GeoProperties::from(vec![("name", json!("a")), ("keep", json!(true))]);
		properties.insert("name", "b");
		assert_eq!(properties.get_str("name"), Some("b"));
		assert_eq!(properties.len(), 2);
		assert_eq!(properties.remove("keep"), Some(json!(true)));
		assert!(!properties.contains_key("keep"));
	}
}
