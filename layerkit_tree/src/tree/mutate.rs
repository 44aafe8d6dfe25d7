//! Copy-on-write edits of a [`LayerTree`].
//!
//! Every method clones the tree, edits the clone and returns it. When the
//! addressed item does not exist, or is of the wrong kind, the returned tree
//! equals the input.

use super::LayerTree;
use crate::{LayerUpdate, NodeUpdate, TreeItem};
use log::{debug, trace};

impl LayerTree {
	/// Appends `item` at the root (`parent_id == None`) or to the children of
	/// the node `parent_id`.
	#[must_use]
	pub fn add_item(&self, parent_id: Option<&str>, item: TreeItem) -> LayerTree {
		let mut tree = self.clone();
		match parent_id {
			None => tree.items.push(item),
			Some(parent_id) => match tree.children_of_mut(parent_id) {
				Some(children) => children.push(item),
				None => trace!("add_item: no node '{parent_id}'"),
			},
		}
		tree
	}

	/// Removes every item with this id; removing a node drops its subtree.
	#[must_use]
	pub fn remove_item(&self, id: &str) -> LayerTree {
		fn retain(items: &mut Vec<TreeItem>, id: &str) {
			items.retain(|item| item.id() != id);
			for item in items {
				if let TreeItem::Node(node) = item {
					retain(&mut node.children, id);
				}
			}
		}

		let mut tree = self.clone();
		retain(&mut tree.items, id);
		tree
	}

	/// Detaches the subtree `source_id` and reinserts it at the root or into
	/// the node `target_parent_id`, at `target_index` (clamped) or at the end.
	///
	/// The move is rejected when the source does not exist, when the target
	/// parent is the source itself or lies inside it, or when the target
	/// parent is not a node.
	#[must_use]
	pub fn move_item(&self, source_id: &str, target_parent_id: Option<&str>, target_index: Option<usize>) -> LayerTree {
		let Some(found) = self.find_item_by_id(source_id) else {
			trace!("move_item: no item '{source_id}'");
			return self.clone();
		};

		if let Some(parent_id) = target_parent_id {
			if found.item.contains_id(parent_id) {
				debug!("move_item: refusing to move '{source_id}' into itself or its descendant '{parent_id}'");
				return self.clone();
			}
			if self.find_node(parent_id).is_none() {
				trace!("move_item: no node '{parent_id}'");
				return self.clone();
			}
		}

		let mut tree = self.clone();
		let Some(item) = tree.detach(&found.path) else {
			return self.clone();
		};

		let siblings = match target_parent_id {
			None => Some(&mut tree.items),
			Some(parent_id) => tree.children_of_mut(parent_id),
		};
		let Some(siblings) = siblings else {
			return self.clone();
		};
		let index = target_index.map_or(siblings.len(), |index| index.min(siblings.len()));
		siblings.insert(index, item);
		tree
	}

	/// Shallow-merges `update` into the layer `layer_id`.
	#[must_use]
	pub fn update_layer(&self, layer_id: &str, update: &LayerUpdate) -> LayerTree {
		let mut tree = self.clone();
		match tree.item_mut(layer_id) {
			Some(TreeItem::Layer(layer)) => update.apply(layer),
			_ => trace!("update_layer: no layer '{layer_id}'"),
		}
		tree
	}

	/// Shallow-merges `update` into the node `node_id`.
	#[must_use]
	pub fn update_node(&self, node_id: &str, update: &NodeUpdate) -> LayerTree {
		let mut tree = self.clone();
		match tree.item_mut(node_id) {
			Some(TreeItem::Node(node)) => update.apply(node),
			_ => trace!("update_node: no node '{node_id}'"),
		}
		tree
	}

	/// Flips the visibility of a layer, or of a node together with all of its
	/// descendants, which all receive the node's new value.
	#[must_use]
	pub fn toggle_item_visibility(&self, id: &str) -> LayerTree {
		fn cascade(items: &mut [TreeItem], visible: bool) {
			for item in items {
				item.set_visible(visible);
				if let TreeItem::Node(node) = item {
					cascade(&mut node.children, visible);
				}
			}
		}

		let mut tree = self.clone();
		match tree.item_mut(id) {
			Some(TreeItem::Layer(layer)) => layer.visible = !layer.visible,
			Some(TreeItem::Node(node)) => {
				node.visible = !node.visible;
				cascade(&mut node.children, node.visible);
			}
			None => trace!("toggle_item_visibility: no item '{id}'"),
		}
		tree
	}

	fn item_mut(&mut self, id: &str) -> Option<&mut TreeItem> {
		let path = self.find_item_by_id(id)?.path;
		self.item_at_path_mut(&path)
	}

	fn item_at_path_mut(&mut self, path: &[usize]) -> Option<&mut TreeItem> {
		let (first, rest) = path.split_first()?;
		let mut item = self.items.get_mut(*first)?;
		for &index in rest {
			item = match item {
				TreeItem::Node(node) => node.children.get_mut(index)?,
				TreeItem::Layer(_) => return None,
			};
		}
		Some(item)
	}

	fn children_of_mut(&mut self, node_id: &str) -> Option<&mut Vec<TreeItem>> {
		match self.item_mut(node_id)? {
			TreeItem::Node(node) => Some(&mut node.children),
			TreeItem::Layer(_) => None,
		}
	}

	fn detach(&mut self, path: &[usize]) -> Option<TreeItem> {
		let (last, parent_path) = path.split_last()?;
		let siblings = if parent_path.is_empty() {
			&mut self.items
		} else {
			match self.item_at_path_mut(parent_path)? {
				TreeItem::Node(node) => &mut node.children,
				TreeItem::Layer(_) => return None,
			}
		};
		(*last < siblings.len()).then(|| siblings.remove(*last))
	}
}
