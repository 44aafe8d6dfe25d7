//! Styling features for a map surface.

use crate::{LAYER_ID_PROPERTY, LayerTree, PointShape, Style};
use layerkit_geometry::GeoFeature;

/// Marker drawn for a point feature.
#[derive(Clone, Debug, PartialEq)]
pub enum PointIcon {
	/// A built-in circle symbol; `scale` is its radius in pixels.
	Circle { scale: f64 },
	/// An SVG path centered on the point.
	Svg { path: String },
}

impl PointIcon {
	#[must_use]
	pub fn new(shape: PointShape, size: f64) -> Self {
		match shape {
			PointShape::Circle => PointIcon::Circle { scale: size / 2.0 },
			PointShape::Square => {
				let h = size / 2.0;
				PointIcon::Svg {
					path: format!("M -{h} -{h} L {h} -{h} L {h} {h} L -{h} {h} Z"),
				}
			}
			PointShape::Triangle => {
				let r = size / 1.5;
				let h = size / 2.0;
				PointIcon::Svg {
					path: format!("M 0 -{r} L {r} {h} L -{r} {h} Z"),
				}
			}
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
	pub stroke_color: String,
	pub stroke_width: f64,
	pub fill_color: String,
	pub fill_opacity: f64,
	/// Only set for point geometries.
	pub icon: Option<PointIcon>,
}

/// Resolves the style of a feature drawn on the map.
///
/// Every value comes from the feature's own property if present, else from
/// the style of the layer named by its `layerId` property, else from
/// `default_style`. The point shape is a layer-level setting.
#[must_use]
pub fn resolve_feature_style(
	tree: &LayerTree,
	feature: &GeoFeature,
	default_style: &Style,
) -> ResolvedStyle {
	let style = feature
		.properties
		.get_str(LAYER_ID_PROPERTY)
		.and_then(|id| tree.find_layer(id))
		.map_or(default_style, |layer| &layer.style);

	let properties = &feature.properties;
	let stroke_color = properties.get_str("strokeColor").unwrap_or(style.stroke_color.as_str());
	let stroke_width = properties.get_f64("strokeWidth").unwrap_or(style.stroke_width);
	let fill_color = properties.get_str("fillColor").unwrap_or(style.fill_color.as_str());
	let fill_opacity = properties.get_f64("fillOpacity").unwrap_or(style.fill_opacity);
	let point_size = properties.get_f64("pointSize").unwrap_or(style.point_size);

	ResolvedStyle {
		stroke_color: stroke_color.to_string(),
		stroke_width,
		fill_color: fill_color.to_string(),
		fill_opacity,
		icon: feature
			.geometry
			.is_point()
			.then(|| PointIcon::new(style.point_shape, point_size)),
	}
}

/// Features of all visible layers in display order, each tagged with its
/// layer id, a name and the layer's colors.
#[must_use]
pub fn render_features(tree: &LayerTree) -> Vec<GeoFeature> {
	let mut result = Vec::new();
	for layer in tree.get_all_layers() {
		if !layer.visible {
			continue;
		}
		for feature in &layer.features {
			let mut feature = feature.clone();
			if feature.properties.get("name").is_none_or(serde_json::Value::is_null) {
				feature.set_property("name", layer.name.as_str());
			}
			feature.set_property(LAYER_ID_PROPERTY, layer.id.as_str());
			feature.set_property("strokeColor", layer.style.stroke_color.as_str());
			feature.set_property("fillColor", layer.style.fill_color.as_str());
			feature.set_property("fillOpacity", layer.style.fill_opacity);
			result.push(feature);
		}
	}
	result
}
