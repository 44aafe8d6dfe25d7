use anyhow::{Result, bail};
use layerkit::{Config, load_collection, read_shapes, save_collection};
use layerkit_tree::append_drawn_feature;
use log::warn;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// collection file, rewritten as version 2.0
	#[arg()]
	collection: PathBuf,

	/// id of the layer receiving the features
	#[arg()]
	layer_id: String,

	/// JSON file with one drawn shape or an array of them, e.g.
	///   {"type": "marker", "position": {"lat": 35.68, "lng": 139.76}}
	///   {"type": "polyline", "path": [{"lat": ..., "lng": ...}, ...]}
	///   {"type": "polygon", "paths": [[{"lat": ..., "lng": ...}, ...]]}
	///   {"type": "rectangle", "bounds": {"northEast": {...}, "southWest": {...}}}
	///   {"type": "circle", "center": {"lat": ..., "lng": ...}, "radius": 250}
	#[arg(verbatim_doc_comment)]
	shapes: PathBuf,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let codec = config.codec()?;
	let mut tree = load_collection(&arguments.collection, config)?;
	if tree.find_layer(&arguments.layer_id).is_none() {
		bail!("there is no layer with id '{}'", arguments.layer_id);
	}

	let mut added = 0;
	for (index, shape) in read_shapes(&arguments.shapes)?.iter().enumerate() {
		let Some(feature) = codec.overlay_to_feature(shape.kind(), shape) else {
			warn!("shape {index} ({}) cannot be converted, skipping it", shape.kind());
			continue;
		};
		tree = append_drawn_feature(&tree, &arguments.layer_id, feature)?;
		added += 1;
	}

	save_collection(&arguments.collection, &tree, config)?;
	eprintln!("added {added} features to layer '{}'", arguments.layer_id);
	Ok(())
}
