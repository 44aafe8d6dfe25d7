//! Read-only lookups and traversals of a [`LayerTree`].

use super::LayerTree;
use crate::{Layer, Node, TreeItem};
use anyhow::{Result, bail};
use std::collections::HashSet;

/// An item found by id together with its index path from the root.
#[derive(Clone, Debug, PartialEq)]
pub struct FoundItem<'a> {
	pub item: &'a TreeItem,
	pub path: Vec<usize>,
}

impl LayerTree {
	/// Depth-first preorder search; the first match wins.
	#[must_use]
	pub fn find_item_by_id(&self, id: &str) -> Option<FoundItem<'_>> {
		fn recurse<'a>(items: &'a [TreeItem], id: &str, path: &mut Vec<usize>) -> Option<&'a TreeItem> {
			for (index, item) in items.iter().enumerate() {
				path.push(index);
				if item.id() == id {
					return Some(item);
				}
				if let TreeItem::Node(node) = item
					&& let Some(found) = recurse(&node.children, id, path)
				{
					return Some(found);
				}
				path.pop();
			}
			None
		}

		let mut path = Vec::new();
		recurse(&self.items, id, &mut path).map(|item| FoundItem { item, path })
	}

	/// Follows an index path from the root. Every step but the last must
	/// pass through a node.
	#[must_use]
	pub fn get_item_by_path(&self, path: &[usize]) -> Option<&TreeItem> {
		let (last, ancestors) = path.split_last()?;
		let mut items = self.items.as_slice();
		for &index in ancestors {
			match items.get(index)? {
				TreeItem::Node(node) => items = &node.children,
				TreeItem::Layer(_) => return None,
			}
		}
		items.get(*last)
	}

	/// The id of the parent node (`None` at root level) and the index of the
	/// item within its parent.
	#[must_use]
	pub fn locate(&self, id: &str) -> Option<(Option<&str>, usize)> {
		let found = self.find_item_by_id(id)?;
		let (index, parent_path) = found.path.split_last()?;
		let parent_id = if parent_path.is_empty() {
			None
		} else {
			Some(self.get_item_by_path(parent_path)?.id())
		};
		Some((parent_id, *index))
	}

	#[must_use]
	pub fn contains(&self, id: &str) -> bool {
		self.find_item_by_id(id).is_some()
	}

	#[must_use]
	pub fn find_layer(&self, id: &str) -> Option<&Layer> {
		self.find_item_by_id(id)?.item.as_layer()
	}

	#[must_use]
	pub fn find_node(&self, id: &str) -> Option<&Node> {
		self.find_item_by_id(id)?.item.as_node()
	}

	/// Calls `f` for every item in depth-first preorder.
	pub fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a TreeItem)) {
		fn recurse<'a>(items: &'a [TreeItem], f: &mut dyn FnMut(&'a TreeItem)) {
			for item in items {
				f(item);
				if let TreeItem::Node(node) = item {
					recurse(&node.children, f);
				}
			}
		}
		recurse(&self.items, f);
	}

	/// All layers in preorder, regardless of nesting.
	#[must_use]
	pub fn get_all_layers(&self) -> Vec<&Layer> {
		let mut layers = Vec::new();
		self.walk(&mut |item| {
			if let TreeItem::Layer(layer) = item {
				layers.push(layer);
			}
		});
		layers
	}

	/// All nodes in preorder, regardless of nesting.
	#[must_use]
	pub fn get_all_nodes(&self) -> Vec<&Node> {
		let mut nodes = Vec::new();
		self.walk(&mut |item| {
			if let TreeItem::Node(node) = item {
				nodes.push(node);
			}
		});
		nodes
	}

	#[must_use]
	pub fn count_all_items(&self) -> usize {
		let mut count = 0;
		self.walk(&mut |_| count += 1);
		count
	}

	#[must_use]
	pub fn count_all_features(&self) -> usize {
		self.get_all_layers().iter().map(|layer| layer.features.len()).sum()
	}

	/// Fails on the first id that occurs more than once.
	pub fn check_unique_ids(&self) -> Result<()> {
		let mut seen = HashSet::new();
		let mut duplicate = None;
		self.walk(&mut |item| {
			if duplicate.is_none() && !seen.insert(item.id()) {
				duplicate = Some(item.id());
			}
		});
		if let Some(id) = duplicate {
			bail!("id '{id}' is used by more than one tree item");
		}
		Ok(())
	}
}
