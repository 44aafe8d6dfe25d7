use anyhow::{Result, bail};
use layerkit::{Config, load_collection, save_collection};
use layerkit_tree::{Layer, Node, TreeItem};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// collection file, rewritten as version 2.0
	#[arg()]
	collection: PathBuf,

	/// name of the new item
	#[arg()]
	name: String,

	/// add a node (folder) instead of a layer
	#[arg(long)]
	node: bool,

	/// id of the node to add the item to, default is the root level
	#[arg(long, value_name = "NODE_ID")]
	parent: Option<String>,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let tree = load_collection(&arguments.collection, config)?;

	if let Some(parent) = &arguments.parent
		&& tree.find_node(parent).is_none()
	{
		bail!("there is no node with id '{parent}'");
	}

	let item: TreeItem = if arguments.node {
		Node::new(&arguments.name).into()
	} else {
		let mut layer = Layer::new(&arguments.name);
		layer.style = config.default_style();
		layer.into()
	};
	let id = item.id().to_string();

	let tree = tree.add_item(arguments.parent.as_deref(), item);
	save_collection(&arguments.collection, &tree, config)?;
	println!("{id}");
	Ok(())
}
