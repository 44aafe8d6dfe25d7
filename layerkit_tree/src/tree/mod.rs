//! The layer tree: an ordered forest of [`TreeItem`]s.
//!
//! Traversal order of the root list and of every node's `children` is the
//! display order. Every operation is pure: it borrows the tree and returns a
//! new one, leaving the input untouched. Operations addressed by an id that
//! does not exist return an unchanged copy.
//!
//! Ids are expected to be unique across the whole tree (see
//! [`layerkit_geometry::generate_id`]). Lookups are depth-first preorder and
//! the first match wins, so with duplicated ids only the first item is ever
//! reachable; [`LayerTree::check_unique_ids`] detects that situation.

mod mutate;
mod queries;

use crate::{Layer, Style, TreeItem};
use layerkit_geometry::{GeoFeature, GeoProperties, Geometry};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub use queries::FoundItem;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerTree {
	items: Vec<TreeItem>,
}

impl LayerTree {
	#[must_use]
	pub fn new(items: Vec<TreeItem>) -> Self {
		Self { items }
	}

	/// Root-level items in display order.
	#[must_use]
	pub fn items(&self) -> &[TreeItem] {
		&self.items
	}

	#[must_use]
	pub fn into_items(self) -> Vec<TreeItem> {
		self.items
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// A tree with one sample layer near Tokyo Station.
	#[must_use]
	pub fn sample() -> Self {
		let point = GeoFeature {
			id: None,
			geometry: Geometry::new_point([139.767125, 35.681236]),
			properties: GeoProperties::from(vec![
				("name", json!("HQ (Sample)")),
				("description", json!("Sample project location.")),
			]),
		};
		let area = GeoFeature {
			id: None,
			geometry: Geometry::new_polygon(&[[
				[139.7605, 35.686],
				[139.7725, 35.686],
				[139.7725, 35.676],
				[139.7605, 35.676],
				[139.7605, 35.686],
			]]),
			properties: GeoProperties::from(vec![
				("name", json!("Survey area")),
				("description", json!("Example polygon highlighted on the map.")),
			]),
		};
		let layer = Layer {
			id: String::from("layer-sample"),
			name: String::from("Sample layer"),
			visible: true,
			style: Style {
				stroke_color: String::from("#1976d2"),
				fill_color: String::from("#90caf9"),
				fill_opacity: 0.45,
				..Style::default()
			},
			features: vec![point, area],
		};
		Self::new(vec![TreeItem::Layer(layer)])
	}
}

impl From<Vec<TreeItem>> for LayerTree {
	fn from(items: Vec<TreeItem>) -> Self {
		Self::new(items)
	}
}
