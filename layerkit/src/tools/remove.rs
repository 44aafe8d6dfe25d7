use anyhow::{Result, bail};
use layerkit::{Config, load_collection, save_collection};
use log::info;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// collection file, rewritten as version 2.0
	#[arg()]
	collection: PathBuf,

	/// id of the layer or node to remove, nodes are removed with all their children
	#[arg()]
	id: String,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let tree = load_collection(&arguments.collection, config)?;
	if !tree.contains(&arguments.id) {
		bail!("there is no item with id '{}'", arguments.id);
	}

	let removed = tree.remove_item(&arguments.id);
	info!(
		"removed {} items",
		tree.count_all_items() - removed.count_all_items()
	);
	save_collection(&arguments.collection, &removed, config)
}
