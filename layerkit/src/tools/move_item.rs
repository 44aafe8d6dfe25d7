use anyhow::{Result, bail};
use clap::ArgGroup;
use layerkit::{Config, load_collection, save_collection};
use layerkit_tree::{DropPosition, DropTarget, apply_drop};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(
	arg_required_else_help = true,
	disable_version_flag = true,
	group(ArgGroup::new("target").required(true))
)]
pub struct Subcommand {
	/// collection file, rewritten as version 2.0
	#[arg()]
	collection: PathBuf,

	/// id of the item to move
	#[arg()]
	source: String,

	/// append to the children of this node
	#[arg(long, group = "target", value_name = "NODE_ID")]
	inside: Option<String>,

	/// place directly before this item
	#[arg(long, group = "target", value_name = "ID")]
	before: Option<String>,

	/// place directly after this item
	#[arg(long, group = "target", value_name = "ID")]
	after: Option<String>,

	/// append to the root level
	#[arg(long, group = "target")]
	root: bool,
}

impl Subcommand {
	/// `None` stands for the root level.
	fn drop_target(&self) -> Option<DropTarget> {
		if self.root {
			None
		} else if let Some(id) = &self.inside {
			Some(DropTarget::new(id, DropPosition::Inside))
		} else if let Some(id) = &self.before {
			Some(DropTarget::new(id, DropPosition::Before))
		} else {
			self.after.as_ref().map(|id| DropTarget::new(id, DropPosition::After))
		}
	}
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let tree = load_collection(&arguments.collection, config)?;
	let Some(source) = tree.find_item_by_id(&arguments.source) else {
		bail!("there is no item with id '{}'", arguments.source);
	};

	let moved = match arguments.drop_target() {
		Some(target) => {
			if target.position == DropPosition::Inside && tree.find_node(&target.target_id).is_none() {
				bail!("there is no node with id '{}'", target.target_id);
			}
			if !tree.contains(&target.target_id) {
				bail!("there is no item with id '{}'", target.target_id);
			}
			if source.item.contains_id(&target.target_id) {
				bail!("cannot move '{}' into itself", arguments.source);
			}
			apply_drop(&tree, &arguments.source, &target)
		}
		None => tree.move_item(&arguments.source, None, None),
	};

	save_collection(&arguments.collection, &moved, config)
}
