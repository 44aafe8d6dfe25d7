use crate::Style;
use layerkit_geometry::{GeoFeature, generate_id};
use serde::{Deserialize, Serialize};

/// A leaf of the tree: a styled, ordered list of features.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer {
	pub id: String,
	pub name: String,
	pub visible: bool,
	pub style: Style,
	pub features: Vec<GeoFeature>,
}

impl Layer {
	/// A visible, empty layer with a fresh id and the default style.
	#[must_use]
	pub fn new(name: &str) -> Self {
		Self {
			id: generate_id(),
			name: name.to_string(),
			visible: true,
			style: Style::default(),
			features: Vec::new(),
		}
	}
}

/// A folder of layers and further nodes.
///
/// `visible` is the value last cascaded onto the children, not an
/// independent switch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
	pub id: String,
	pub name: String,
	pub visible: bool,
	pub children: Vec<TreeItem>,
}

impl Node {
	#[must_use]
	pub fn new(name: &str) -> Self {
		Self {
			id: generate_id(),
			name: name.to_string(),
			visible: true,
			children: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_children(mut self, children: Vec<TreeItem>) -> Self {
		self.children = children;
		self
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
	Layer,
	Node,
}

/// Discriminated by `"type": "layer" | "node"` in the serialized form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeItem {
	Layer(Layer),
	Node(Node),
}

impl TreeItem {
	#[must_use]
	pub fn id(&self) -> &str {
		match self {
			TreeItem::Layer(layer) => &layer.id,
			TreeItem::Node(node) => &node.id,
		}
	}

	#[must_use]
	pub fn name(&self) -> &str {
		match self {
			TreeItem::Layer(layer) => &layer.name,
			TreeItem::Node(node) => &node.name,
		}
	}

	#[must_use]
	pub fn visible(&self) -> bool {
		match self {
			TreeItem::Layer(layer) => layer.visible,
			TreeItem::Node(node) => node.visible,
		}
	}

	pub fn set_visible(&mut self, visible: bool) {
		match self {
			TreeItem::Layer(layer) => layer.visible = visible,
			TreeItem::Node(node) => node.visible = visible,
		}
	}

	#[must_use]
	pub fn kind(&self) -> ItemKind {
		match self {
			TreeItem::Layer(_) => ItemKind::Layer,
			TreeItem::Node(_) => ItemKind::Node,
		}
	}

	#[must_use]
	pub fn as_layer(&self) -> Option<&Layer> {
		match self {
			TreeItem::Layer(layer) => Some(layer),
			TreeItem::Node(_) => None,
		}
	}

	#[must_use]
	pub fn as_node(&self) -> Option<&Node> {
		match self {
			TreeItem::Layer(_) => None,
			TreeItem::Node(node) => Some(node),
		}
	}

	/// Whether `id` names this item or anything below it.
	#[must_use]
	pub fn contains_id(&self, id: &str) -> bool {
		match self {
			TreeItem::Layer(layer) => layer.id == id,
			TreeItem::Node(node) => node.id == id || node.children.iter().any(|child| child.contains_id(id)),
		}
	}
}

impl From<Layer> for TreeItem {
	fn from(layer: Layer) -> Self {
		TreeItem::Layer(layer)
	}
}

impl From<Node> for TreeItem {
	fn from(node: Node) -> Self {
		TreeItem::Node(node)
	}
}

/// Fields to shallow-merge into a layer; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerUpdate {
	pub name: Option<String>,
	pub visible: Option<bool>,
	pub style: Option<Style>,
	pub features: Option<Vec<GeoFeature>>,
}

impl LayerUpdate {
	#[must_use]
	pub fn name(mut self, name: &str) -> Self {
		self.name = Some(name.to_string());
		self
	}
	#[must_use]
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = Some(visible);
		self
	}
	#[must_use]
	pub fn style(mut self, style: Style) -> Self {
		self.style = Some(style);
		self
	}
	#[must_use]
	pub fn features(mut self, features: Vec<GeoFeature>) -> Self {
		self.features = Some(features);
		self
	}

	pub fn apply(&self, layer: &mut Layer) {
		if let Some(name) = &self.name {
			layer.name.clone_from(name);
		}
		if let Some(visible) = self.visible {
			layer.visible = visible;
		}
		if let Some(style) = &self.style {
			layer.style = style.clone();
		}
		if let Some(features) = &self.features {
			layer.features = features.clone();
		}
	}
}

/// Fields to shallow-merge into a node; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeUpdate {
	pub name: Option<String>,
	pub visible: Option<bool>,
}

impl NodeUpdate {
	#[must_use]
	pub fn name(mut self, name: &str) -> Self {
		self.name = Some(name.to_string());
		self
	}
	#[must_use]
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = Some(visible);
		self
	}

	pub fn apply(&self, node: &mut Node) {
		if let Some(name) = &self.name {
			node.name.clone_from(name);
		}
		if let Some(visible) = self.visible {
			node.visible = visible;
		}
	}
}
