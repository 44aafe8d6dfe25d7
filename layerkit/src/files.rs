//! Reading and writing the files the subcommands work on.

use crate::Config;
use anyhow::{Context, Result};
use layerkit_geometry::DrawnShape;
use layerkit_tree::{LayerTree, export_layers, export_tree, import_collection_with_style};
use log::debug;
use serde_json::Value as JsonValue;
use std::{fs, fs::File, io::BufReader, path::Path};

pub fn read_json(path: &Path) -> Result<JsonValue> {
	let file = File::open(path).with_context(|| format!("opening {path:?}"))?;
	serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing JSON in {path:?}"))
}

pub fn write_text(path: &Path, text: &str) -> Result<()> {
	fs::write(path, text).with_context(|| format!("writing {path:?}"))?;
	debug!("wrote {} bytes to {path:?}", text.len());
	Ok(())
}

/// Loads a collection file of any version. Legacy layers are completed with
/// the configured default style.
pub fn load_collection(path: &Path, config: &Config) -> Result<LayerTree> {
	let value = read_json(path)?;
	import_collection_with_style(&value, &config.default_style())
		.with_context(|| format!("loading collection {path:?}"))
}

/// Writes `tree` as a version 2.0 collection file.
pub fn save_collection(path: &Path, tree: &LayerTree, config: &Config) -> Result<()> {
	write_text(path, &export_tree(tree, config.pretty)?)
}

/// Writes the layers of `tree` as a flat version 1.0 collection file.
pub fn save_flat_collection(path: &Path, tree: &LayerTree, config: &Config) -> Result<()> {
	write_text(path, &export_layers(tree, config.pretty)?)
}

/// Reads drawn shapes from a JSON file holding one shape or an array of them.
pub fn read_shapes(path: &Path) -> Result<Vec<DrawnShape>> {
	let value = read_json(path)?;
	let shapes = if value.is_array() {
		serde_json::from_value(value)
	} else {
		serde_json::from_value(value).map(|shape| vec![shape])
	};
	shapes.with_context(|| format!("decoding drawn shapes in {path:?}"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use layerkit_geometry::OverlayKind;
	use pretty_assertions::assert_eq;
	use tempfile::tempdir;

	#[test]
	fn collection_round_trip() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("layers.json");
		let config = Config::default();

		let tree = LayerTree::sample();
		save_collection(&path, &tree, &config).unwrap();
		assert_eq!(load_collection(&path, &config).unwrap(), tree);

		save_flat_collection(&path, &tree, &config).unwrap();
		let flat = load_collection(&path, &config).unwrap();
		assert_eq!(flat.get_all_layers().len(), 1);
	}

	#[test]
	fn legacy_layers_use_configured_style() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("legacy.json");
		write_text(&path, r#"{"layers": [{"id": "a"}]}"#).unwrap();

		let config = Config::from_string("default_style:\n  fillOpacity: 0.9").unwrap();
		let tree = load_collection(&path, &config).unwrap();
		assert_eq!(tree.find_layer("a").unwrap().style.fill_opacity, 0.9);
	}

	#[test]
	fn load_errors_name_the_file() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("broken.json");
		write_text(&path, "{\"something\": 1}").unwrap();
		let err = load_collection(&path, &Config::default()).unwrap_err();
		assert!(err.to_string().contains("broken.json"), "{err}");

		let missing = dir.path().join("missing.json");
		assert!(load_collection(&missing, &Config::default()).is_err());
	}

	#[test]
	fn shapes_accept_one_or_many() {
		let dir = tempdir().unwrap();
		let single = dir.path().join("single.json");
		write_text(&single, r#"{"type": "marker", "position": {"lat": 1, "lng": 2}}"#).unwrap();
		let shapes = read_shapes(&single).unwrap();
		assert_eq!(shapes.len(), 1);
		assert_eq!(shapes[0].kind(), OverlayKind::Marker);

		let many = dir.path().join("many.json");
		write_text(
			&many,
			r#"[{"type": "circle", "center": {"lat": 1, "lng": 2}, "radius": 50},
			    {"type": "polyline", "path": [{"lat": 0, "lng": 0}, {"lat": 1, "lng": 1}]}]"#,
		)
		.unwrap();
		let kinds: Vec<OverlayKind> = read_shapes(&many).unwrap().iter().map(|s| s.kind()).collect();
		assert_eq!(kinds, [OverlayKind::Circle, OverlayKind::Polyline]);

		write_text(&many, r#"[{"type": "hexagon"}]"#).unwrap();
		assert!(read_shapes(&many).is_err());
	}
}
