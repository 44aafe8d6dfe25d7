use anyhow::{Context, Result};
use layerkit::{Config, load_collection, save_collection};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// collection file, rewritten as version 2.0
	#[arg()]
	collection: PathBuf,

	/// id of the layer or node, a node passes its new visibility on to all its children
	#[arg()]
	id: String,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let tree = load_collection(&arguments.collection, config)?;
	let tree = tree.toggle_item_visibility(&arguments.id);

	let item = tree
		.find_item_by_id(&arguments.id)
		.with_context(|| format!("there is no item with id '{}'", arguments.id))?
		.item;
	println!("{}", if item.visible() { "visible" } else { "hidden" });

	save_collection(&arguments.collection, &tree, config)
}
