use anyhow::Result;
use layerkit::{Config, load_collection, read_json, save_collection};
use layerkit_tree::import_geojson_into_layer;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// collection file, rewritten as version 2.0
	#[arg()]
	collection: PathBuf,

	/// id of the layer receiving the features
	#[arg()]
	layer_id: String,

	/// GeoJSON file: a FeatureCollection, a single Feature or an array of features
	#[arg()]
	geojson: PathBuf,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let tree = load_collection(&arguments.collection, config)?;
	let raw = read_json(&arguments.geojson)?;

	let (tree, count) = import_geojson_into_layer(&tree, &arguments.layer_id, &raw)?;
	save_collection(&arguments.collection, &tree, config)?;
	eprintln!("added {count} features to layer '{}'", arguments.layer_id);
	Ok(())
}
