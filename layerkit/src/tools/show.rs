use anyhow::Result;
use layerkit::{Config, load_collection};
use layerkit_tree::{FlatItem, TreeItem, flatten_tree, hide_collapsed};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// collection file (*.json, version 1.0 or 2.0)
	#[arg()]
	collection: PathBuf,

	/// hide everything below this node, can be repeated
	#[arg(long, value_name = "NODE_ID")]
	collapse: Vec<String>,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let tree = load_collection(&arguments.collection, config)?;
	let flat = flatten_tree(&tree);
	let rows = hide_collapsed(&flat, |node| arguments.collapse.contains(&node.id));

	for row in &rows {
		println!("{}", format_row(row));
	}
	eprintln!(
		"{} layers, {} nodes, {} features",
		tree.get_all_layers().len(),
		tree.get_all_nodes().len(),
		tree.count_all_features()
	);
	Ok(())
}

fn format_row(row: &FlatItem) -> String {
	let indent = "  ".repeat(row.depth);
	let visibility = if row.item.visible() { "visible" } else { "hidden" };
	match row.item {
		TreeItem::Layer(layer) => format!(
			"{indent}layer {:?} [{}] {visibility}, {} features",
			layer.name,
			layer.id,
			layer.features.len()
		),
		TreeItem::Node(node) => format!(
			"{indent}node {:?} [{}] {visibility}, {} children",
			node.name,
			node.id,
			node.children.len()
		),
	}
}
