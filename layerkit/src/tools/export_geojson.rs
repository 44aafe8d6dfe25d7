use anyhow::{Context, Result};
use layerkit::{Config, load_collection, write_text};
use layerkit_geometry::timestamp_now;
use layerkit_tree::{export_layer_geojson, geojson_file_name};
use log::warn;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// collection file
	#[arg()]
	collection: PathBuf,

	/// id of the layer to export
	#[arg()]
	layer_id: String,

	/// output file, defaults to "<layer name>-<timestamp>.geojson"
	#[arg()]
	output: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let tree = load_collection(&arguments.collection, config)?;
	let layer = tree
		.find_layer(&arguments.layer_id)
		.with_context(|| format!("there is no layer with id '{}'", arguments.layer_id))?;
	if layer.features.is_empty() {
		warn!("layer '{}' has no features", layer.name);
	}

	let output = arguments
		.output
		.clone()
		.unwrap_or_else(|| PathBuf::from(geojson_file_name(&layer.name, &timestamp_now())));

	let collection = export_layer_geojson(layer);
	write_text(&output, &collection.to_json_string(config.pretty)?)?;
	println!("{}", output.display());
	Ok(())
}
