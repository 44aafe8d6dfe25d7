use anyhow::Result;
use layerkit::{Config, load_collection, save_collection, save_flat_collection};
use log::info;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// collection file of any version, including files that only have a "layers" array
	#[arg()]
	input: PathBuf,

	/// output file
	#[arg()]
	output: PathBuf,

	/// write a flat version 1.0 file containing only the layers
	#[arg(long)]
	flat: bool,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let tree = load_collection(&arguments.input, config)?;
	info!(
		"read {} items from {:?}",
		tree.count_all_items(),
		arguments.input
	);

	if arguments.flat {
		save_flat_collection(&arguments.output, &tree, config)
	} else {
		save_collection(&arguments.output, &tree, config)
	}
}
