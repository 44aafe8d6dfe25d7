//! Versioned collection files: the whole tree (`"2.0"`) or, for flat
//! deployments, the plain layer list (`"1.0"`).
//!
//! Import accepts both, plus schemaless legacy payloads that only carry a
//! `layers` array. Legacy layers are rebuilt field by field so that files
//! written by older releases load with defaults instead of failing.

use crate::{Layer, LayerTree, PartialStyle, Style, TreeItem};
use anyhow::{Context, Result, bail};
use layerkit_geometry::{GeoFeature, generate_id, timestamp_now};
use log::{debug, warn};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value as JsonValue};

pub const TREE_FILE_VERSION: &str = "2.0";
pub const FLAT_FILE_VERSION: &str = "1.0";

/// A `"2.0"` collection file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeCollectionFile {
	pub version: String,
	pub exported_at: String,
	pub tree: LayerTree,
}

/// A `"1.0"` collection file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatCollectionFile {
	pub version: String,
	pub exported_at: String,
	pub layers: Vec<Layer>,
}

impl TreeCollectionFile {
	#[must_use]
	pub fn new(tree: &LayerTree) -> Self {
		Self {
			version: TREE_FILE_VERSION.to_string(),
			exported_at: timestamp_now(),
			tree: tree.clone(),
		}
	}

	pub fn to_json_string(&self, pretty: bool) -> Result<String> {
		to_json_string(self, pretty)
	}
}

impl FlatCollectionFile {
	/// Collects every layer of `tree` in preorder; nodes are dropped.
	#[must_use]
	pub fn new(tree: &LayerTree) -> Self {
		Self {
			version: FLAT_FILE_VERSION.to_string(),
			exported_at: timestamp_now(),
			layers: tree.get_all_layers().into_iter().cloned().collect(),
		}
	}

	pub fn to_json_string(&self, pretty: bool) -> Result<String> {
		to_json_string(self, pretty)
	}
}

fn to_json_string<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
	let json = if pretty {
		serde_json::to_string_pretty(value)
	} else {
		serde_json::to_string(value)
	};
	json.context("serializing collection file")
}

/// Serializes the whole tree as a `"2.0"` file.
pub fn export_tree(tree: &LayerTree, pretty: bool) -> Result<String> {
	TreeCollectionFile::new(tree).to_json_string(pretty)
}

/// Serializes the layers of the tree as a flat `"1.0"` file.
pub fn export_layers(tree: &LayerTree, pretty: bool) -> Result<String> {
	FlatCollectionFile::new(tree).to_json_string(pretty)
}

pub fn import_collection_str(json: &str) -> Result<LayerTree> {
	let value: JsonValue = serde_json::from_str(json).context("parsing collection file")?;
	import_collection(&value)
}

/// Loads a collection file of any supported version.
///
/// A `"2.0"` tree must be structurally complete, but missing or mistyped
/// style fields of its layers are taken from `default_style`. Missing legacy
/// fields are defaulted from `default_style` and fresh ids.
pub fn import_collection(value: &JsonValue) -> Result<LayerTree> {
	import_collection_with_style(value, &Style::default())
}

pub fn import_collection_with_style(value: &JsonValue, default_style: &Style) -> Result<LayerTree> {
	let Some(object) = value.as_object() else {
		bail!("invalid collection file: expected a JSON object");
	};

	let tree = if object.get("version").and_then(JsonValue::as_str) == Some(TREE_FILE_VERSION)
		&& let Some(items) = object.get("tree").filter(|tree| tree.is_array())
	{
		let mut items = items.clone();
		backfill_styles(&mut items, default_style)?;
		let items: Vec<TreeItem> = serde_json::from_value(items).context("decoding the layer tree")?;
		debug!("loaded version {TREE_FILE_VERSION} collection with {} root items", items.len());
		LayerTree::new(items)
	} else if let Some(JsonValue::Array(layers)) = object.get("layers") {
		let items: Vec<TreeItem> = layers
			.iter()
			.enumerate()
			.map(|(index, layer)| TreeItem::Layer(restore_layer(index, layer, default_style)))
			.collect();
		debug!("restored {} layers from a flat collection", items.len());
		LayerTree::new(items)
	} else {
		bail!("invalid collection file: expected a version {TREE_FILE_VERSION} 'tree' array or a 'layers' array");
	};

	if let Err(err) = tree.check_unique_ids() {
		warn!("{err}");
	}
	Ok(tree)
}

/// Replaces the `style` of every layer in a `"2.0"` item list with a complete
/// one. Items that are not layers or nodes are left for the decoder to reject.
fn backfill_styles(items: &mut JsonValue, default_style: &Style) -> Result<()> {
	let JsonValue::Array(items) = items else {
		return Ok(());
	};
	for item in items {
		let Some(object) = item.as_object_mut() else {
			continue;
		};
		match object.get("type").and_then(JsonValue::as_str) {
			Some("layer") => {
				let style = restore_style(object.get("style"), default_style);
				object.insert(String::from("style"), serde_json::to_value(style)?);
			}
			Some("node") => {
				if let Some(children) = object.get_mut("children") {
					backfill_styles(children, default_style)?;
				}
			}
			_ => {}
		}
	}
	Ok(())
}

fn restore_layer(index: usize, value: &JsonValue, default_style: &Style) -> Layer {
	let empty = Map::new();
	let object = value.as_object().unwrap_or_else(|| {
		warn!("layer {index} is not an object, using defaults");
		&empty
	});

	let id = match object.get("id") {
		Some(JsonValue::String(id)) => id.clone(),
		Some(JsonValue::Number(id)) => id.to_string(),
		_ => {
			warn!("layer {index} has no id, generating one");
			generate_id()
		}
	};
	let name = match object.get("name").and_then(JsonValue::as_str) {
		Some(name) => name.to_string(),
		None => format!("Imported layer {}", index + 1),
	};
	let visible = object.get("visible").and_then(JsonValue::as_bool).unwrap_or(true);
	let style = restore_style(object.get("style"), default_style);
	let features = match object.get("features") {
		Some(JsonValue::Array(features)) => restore_features(&id, features),
		Some(_) => {
			warn!("layer '{id}' has malformed features, dropping them");
			Vec::new()
		}
		None => Vec::new(),
	};

	Layer {
		id,
		name,
		visible,
		style,
		features,
	}
}

/// Each style field is taken on its own; absent or mistyped fields fall back
/// to `default_style`.
fn restore_style(value: Option<&JsonValue>, default_style: &Style) -> Style {
	fn field<T: DeserializeOwned>(style: &Map<String, JsonValue>, key: &str) -> Option<T> {
		let value = style.get(key).filter(|value| !value.is_null())?;
		let parsed = serde_json::from_value(value.clone()).ok();
		if parsed.is_none() {
			warn!("ignoring invalid style field '{key}': {value}");
		}
		parsed
	}

	let Some(JsonValue::Object(style)) = value else {
		return default_style.clone();
	};
	PartialStyle {
		stroke_color: field(style, "strokeColor"),
		stroke_width: field(style, "strokeWidth"),
		stroke_style: field(style, "strokeStyle"),
		fill_color: field(style, "fillColor"),
		fill_opacity: field(style, "fillOpacity"),
		point_size: field(style, "pointSize"),
		point_shape: field(style, "pointShape"),
	}
	.apply_to(default_style)
}

fn restore_features(layer_id: &str, values: &[JsonValue]) -> Vec<GeoFeature> {
	values
		.iter()
		.enumerate()
		.filter_map(|(index, value)| match serde_json::from_value::<GeoFeature>(value.clone()) {
			Ok(feature) => Some(feature),
			Err(err) => {
				warn!("skipping feature {index} of layer '{layer_id}': {err}");
				None
			}
		})
		.collect()
}
