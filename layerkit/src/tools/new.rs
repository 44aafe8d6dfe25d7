use anyhow::{Result, bail};
use layerkit::{Config, save_collection};
use layerkit_geometry::timestamp_now;
use layerkit_tree::{LayerTree, collection_file_name};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// output file, defaults to "prj-layer-list-<timestamp>.json"
	#[arg()]
	output: Option<PathBuf>,

	/// start without the sample layer
	#[arg(long)]
	empty: bool,

	/// replace an existing file
	#[arg(long, short)]
	force: bool,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let output = arguments
		.output
		.clone()
		.unwrap_or_else(|| PathBuf::from(collection_file_name(&timestamp_now())));

	if output.exists() && !arguments.force {
		bail!("{output:?} already exists, use --force to replace it");
	}

	let tree = if arguments.empty {
		LayerTree::default()
	} else {
		LayerTree::sample()
	};
	save_collection(&output, &tree, config)?;
	println!("{}", output.display());
	Ok(())
}
