//! Moving features between layers and GeoJSON files.

use crate::{Layer, LayerTree, LayerUpdate};
use anyhow::{Result, anyhow, bail};
use lazy_static::lazy_static;
use layerkit_geometry::{GeoCollection, GeoFeature, normalize_geojson};
use log::debug;
use regex::Regex;
use serde_json::Value as JsonValue;

/// Property that map decoration adds to tie a feature to its layer.
pub const LAYER_ID_PROPERTY: &str = "layerId";

lazy_static! {
	static ref UNSAFE_FILE_CHARS: Regex = Regex::new(r"[^a-zA-Z0-9_-]+").unwrap();
}

/// The layer's features as a `FeatureCollection`, unmodified.
#[must_use]
pub fn export_layer_geojson(layer: &Layer) -> GeoCollection {
	GeoCollection::from(layer.features.clone())
}

/// Normalizes `raw` and appends the resulting features to the layer
/// `layer_id`. Returns the new tree and the number of features added.
pub fn import_geojson_into_layer(tree: &LayerTree, layer_id: &str, raw: &JsonValue) -> Result<(LayerTree, usize)> {
	let features = normalize_geojson(raw)
		.ok_or_else(|| anyhow!("input is not GeoJSON: expected a Feature, a FeatureCollection or an array of features"))?
		.into_features();
	let count = features.len();
	Ok((import_features(tree, layer_id, features)?, count))
}

/// Appends `features` to the layer `layer_id`, dropping any stale
/// `layerId` property they carry.
pub fn import_features(tree: &LayerTree, layer_id: &str, features: Vec<GeoFeature>) -> Result<LayerTree> {
	let layer = find_layer(tree, layer_id)?;
	let mut merged = layer.features.clone();
	merged.extend(features.into_iter().map(|mut feature| {
		feature.properties.remove(LAYER_ID_PROPERTY);
		feature
	}));
	debug!(
		"layer '{layer_id}' grows from {} to {} features",
		layer.features.len(),
		merged.len()
	);
	Ok(tree.update_layer(layer_id, &LayerUpdate::default().features(merged)))
}

/// Removes all features of the layer `layer_id`.
#[must_use]
pub fn clear_layer(tree: &LayerTree, layer_id: &str) -> LayerTree {
	tree.update_layer(layer_id, &LayerUpdate::default().features(Vec::new()))
}

/// Appends a freshly drawn feature, naming it after the layer unless it
/// already has a name.
pub fn append_drawn_feature(tree: &LayerTree, layer_id: &str, mut feature: GeoFeature) -> Result<LayerTree> {
	let layer = find_layer(tree, layer_id)?;
	if !feature.properties.contains_key("name") {
		feature.set_property("name", format!("{} shape", layer.name));
	}
	let mut features = layer.features.clone();
	features.push(feature);
	Ok(tree.update_layer(layer_id, &LayerUpdate::default().features(features)))
}

fn find_layer<'a>(tree: &'a LayerTree, layer_id: &str) -> Result<&'a Layer> {
	match tree.find_layer(layer_id) {
		Some(layer) => Ok(layer),
		None => bail!("no layer with id '{layer_id}'"),
	}
}

fn file_timestamp(timestamp: &str) -> String {
	timestamp.replace([':', '.'], "-")
}

/// `<layer name>-<timestamp>.geojson`, with the name reduced to
/// `[A-Za-z0-9_-]`.
#[must_use]
pub fn geojson_file_name(layer_name: &str, timestamp: &str) -> String {
	let replaced = UNSAFE_FILE_CHARS.replace_all(layer_name, "_");
	let safe_name = if replaced.is_empty() { "layer" } else { replaced.as_ref() };
	format!("{safe_name}-{}.geojson", file_timestamp(timestamp))
}

#[must_use]
pub fn collection_file_name(timestamp: &str) -> String {
	format!("prj-layer-list-{}.json", file_timestamp(timestamp))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::render_features;
	use layerkit_geometry::{GeoProperties, Geometry};
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serde_json::json;

	fn point(name: &str) -> GeoFeature {
		GeoFeature {
			id: Some(name.into()),
			geometry: Geometry::new_point([1.5, 2.5]),
			properties: GeoProperties::from(vec![("name", json!(name)), ("height", json!(3))]),
		}
	}

	fn tree_with_layer() -> LayerTree {
		let mut layer = Layer::new("Wells");
		layer.id = String::from("l");
		layer.features = vec![point("a"), point("b")];
		LayerTree::new(vec![layer.into(), Layer::new("Other").into()])
	}

	#[test]
	fn export_then_import_keeps_features() {
		let tree = tree_with_layer();
		let exported = export_layer_geojson(tree.find_layer("l").unwrap());
		let json = exported.to_json_string(false).unwrap();

		let target = clear_layer(&tree, "l");
		assert!(target.find_layer("l").unwrap().features.is_empty());

		let raw: JsonValue = serde_json::from_str(&json).unwrap();
		let (imported, count) = import_geojson_into_layer(&target, "l", &raw).unwrap();
		assert_eq!(count, 2);
		assert_eq!(
			imported.find_layer("l").unwrap().features,
			tree.find_layer("l").unwrap().features
		);
	}

	#[test]
	fn decorated_features_lose_layer_id_on_import() {
		let tree = tree_with_layer();
		let decorated: Vec<GeoFeature> = render_features(&tree);
		assert!(decorated.iter().all(|f| f.properties.get_str(LAYER_ID_PROPERTY) == Some("l")));

		let imported = import_features(&clear_layer(&tree, "l"), "l", decorated).unwrap();
		for feature in &imported.find_layer("l").unwrap().features {
			assert!(!feature.properties.contains_key(LAYER_ID_PROPERTY));
			assert_eq!(feature.geometry, Geometry::new_point([1.5, 2.5]));
		}
	}

	#[test]
	fn import_single_feature_appends() {
		let tree = tree_with_layer();
		let raw = json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [0, 0]}, "properties": null});
		let (imported, count) = import_geojson_into_layer(&tree, "l", &raw).unwrap();
		assert_eq!(count, 1);
		assert_eq!(imported.find_layer("l").unwrap().features.len(), 3);
		assert_eq!(tree.find_layer("l").unwrap().features.len(), 2);
	}

	#[rstest]
	#[case(json!({}), "l", "not GeoJSON")]
	#[case(json!(null), "l", "not GeoJSON")]
	#[case(json!([]), "missing", "no layer with id 'missing'")]
	fn import_errors(#[case] raw: JsonValue, #[case] layer_id: &str, #[case] message: &str) {
		let err = import_geojson_into_layer(&tree_with_layer(), layer_id, &raw).unwrap_err();
		assert!(err.to_string().contains(message), "{err}");
	}

	#[test]
	fn drawn_feature_gets_default_name() {
		let tree = tree_with_layer();
		let unnamed = GeoFeature::new(Geometry::new_point([0.0, 0.0]));
		let tree = append_drawn_feature(&tree, "l", unnamed).unwrap();
		let tree = append_drawn_feature(&tree, "l", point("kept")).unwrap();
		let features = &tree.find_layer("l").unwrap().features;
		assert_eq!(features[2].properties.get_str("name"), Some("Wells shape"));
		assert_eq!(features[3].properties.get_str("name"), Some("kept"));
		assert!(append_drawn_feature(&tree, "missing", point("x")).is_err());
	}

	#[rstest]
	#[case("Wells", "Wells-2024-05-01T10-20-30-123Z.geojson")]
	#[case("My layer (v2)", "My_layer_v2_-2024-05-01T10-20-30-123Z.geojson")]
	#[case("地図", "_-2024-05-01T10-20-30-123Z.geojson")]
	#[case("", "layer-2024-05-01T10-20-30-123Z.geojson")]
	fn file_names(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(geojson_file_name(name, "2024-05-01T10:20:30.123Z"), expected);
	}

	#[test]
	fn collection_file_names() {
		assert_eq!(
			collection_file_name("2024-05-01T10:20:30Z"),
			"prj-layer-list-2024-05-01T10-20-30Z.json"
		);
	}
}
