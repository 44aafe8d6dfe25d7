//! Resolving a pointer position over a tree row into a drop placement.

use crate::{ItemKind, LayerTree};
use log::trace;
use std::fmt::Display;

/// Where a dragged item lands relative to the hovered item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropPosition {
	Before,
	After,
	/// Appended to the children of the hovered node.
	Inside,
}

impl Display for DropPosition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			DropPosition::Before => "before",
			DropPosition::After => "after",
			DropPosition::Inside => "inside",
		})
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropTarget {
	pub target_id: String,
	pub position: DropPosition,
}

impl DropTarget {
	#[must_use]
	pub fn new(target_id: &str, position: DropPosition) -> Self {
		Self {
			target_id: target_id.to_string(),
			position,
		}
	}
}

/// Vertical extent of a rendered row, in the pointer's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowBounds {
	pub top: f64,
	pub height: f64,
}

impl RowBounds {
	#[must_use]
	pub fn new(top: f64, height: f64) -> Self {
		Self { top, height }
	}
}

/// The row currently under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct HoveredRow {
	pub id: String,
	pub kind: ItemKind,
	pub bounds: RowBounds,
}

impl HoveredRow {
	#[must_use]
	pub fn new(id: &str, kind: ItemKind, bounds: RowBounds) -> Self {
		Self {
			id: id.to_string(),
			kind,
			bounds,
		}
	}
}

/// Node rows split into a top quarter (before), a middle half (inside) and a
/// bottom quarter (after). Layer rows split in halves and never offer inside.
#[must_use]
pub fn resolve_drop_position(kind: ItemKind, pointer_y: f64, bounds: RowBounds) -> DropPosition {
	let y = pointer_y - bounds.top;
	let height = bounds.height;
	match kind {
		ItemKind::Node => {
			if y < height * 0.25 {
				DropPosition::Before
			} else if y > height * 0.75 {
				DropPosition::After
			} else {
				DropPosition::Inside
			}
		}
		ItemKind::Layer => {
			if y < height * 0.5 {
				DropPosition::Before
			} else {
				DropPosition::After
			}
		}
	}
}

/// The drop target for dragging `source_id` over `hovered`, or `None` when
/// hovering the dragged item itself.
#[must_use]
pub fn resolve_drop_target(source_id: &str, hovered: &HoveredRow, pointer_y: f64) -> Option<DropTarget> {
	if hovered.id == source_id {
		return None;
	}
	let position = resolve_drop_position(hovered.kind, pointer_y, hovered.bounds);
	Some(DropTarget::new(&hovered.id, position))
}

/// Moves `source_id` according to `target`.
///
/// `Inside` appends to the target node. `Before` and `After` splice the
/// source next to the target within the target's own parent. Drops onto the
/// source itself or into its own subtree leave the tree unchanged.
#[must_use]
pub fn apply_drop(tree: &LayerTree, source_id: &str, target: &DropTarget) -> LayerTree {
	if target.target_id == source_id {
		return tree.clone();
	}

	if target.position == DropPosition::Inside {
		return tree.move_item(source_id, Some(&target.target_id), None);
	}

	let (Some((source_parent, source_index)), Some((target_parent, target_index))) =
		(tree.locate(source_id), tree.locate(&target.target_id))
	else {
		trace!("apply_drop: '{source_id}' or '{}' not found", target.target_id);
		return tree.clone();
	};

	// the index of the target once the source has been detached
	let mut index = target_index;
	if source_parent == target_parent && source_index < target_index {
		index -= 1;
	}
	if target.position == DropPosition::After {
		index += 1;
	}

	tree.move_item(source_id, target_parent, Some(index))
}
