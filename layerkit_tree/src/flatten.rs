//! Display-ordered linearization of a [`LayerTree`].

use crate::{LayerTree, Node, TreeItem};

/// One row of the flattened tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatItem<'a> {
	pub item: &'a TreeItem,
	/// Nesting depth, 0 for root items.
	pub depth: usize,
}

/// Every item exactly once, in preorder, annotated with its depth.
#[must_use]
pub fn flatten_tree(tree: &LayerTree) -> Vec<FlatItem<'_>> {
	fn recurse<'a>(items: &'a [TreeItem], depth: usize, result: &mut Vec<FlatItem<'a>>) {
		for item in items {
			result.push(FlatItem { item, depth });
			if let TreeItem::Node(node) = item {
				recurse(&node.children, depth + 1, result);
			}
		}
	}

	let mut result = Vec::new();
	recurse(tree.items(), 0, &mut result);
	result
}

/// Removes every row that has a collapsed node among its ancestors.
///
/// `items` must be in the order produced by [`flatten_tree`]. The depths of
/// visible collapsed nodes are kept on a stack, so a row is judged by all of
/// its ancestors and not only by the row above it.
#[must_use]
pub fn hide_collapsed<'a>(items: &[FlatItem<'a>], is_collapsed: impl Fn(&Node) -> bool) -> Vec<FlatItem<'a>> {
	let mut collapsed_depths: Vec<usize> = Vec::new();
	let mut result = Vec::with_capacity(items.len());

	for flat in items {
		while collapsed_depths.last().is_some_and(|&depth| depth >= flat.depth) {
			collapsed_depths.pop();
		}
		if !collapsed_depths.is_empty() {
			continue;
		}
		result.push(*flat);
		if let TreeItem::Node(node) = flat.item
			&& is_collapsed(node)
		{
			collapsed_depths.push(flat.depth);
		}
	}
	result
}
