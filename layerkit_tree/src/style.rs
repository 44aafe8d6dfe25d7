use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
	#[default]
	Solid,
	Dashed,
	Dotted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointShape {
	#[default]
	Circle,
	Square,
	Triangle,
}

/// Visual style shared by all features of a layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
	pub stroke_color: String,
	/// Line width in pixels, > 0.
	pub stroke_width: f64,
	pub stroke_style: StrokeStyle,
	pub fill_color: String,
	/// Fill opacity in `[0, 1]`.
	pub fill_opacity: f64,
	/// Point marker size in pixels, > 0.
	pub point_size: f64,
	pub point_shape: PointShape,
}

impl Default for Style {
	fn default() -> Self {
		Self {
			stroke_color: String::from("#0f60ff"),
			stroke_width: 2.0,
			stroke_style: StrokeStyle::Solid,
			fill_color: String::from("#38bdf8"),
			fill_opacity: 0.35,
			point_size: 8.0,
			point_shape: PointShape::Circle,
		}
	}
}

/// A style with any subset of fields set. Unset fields are taken from a base
/// style by [`PartialStyle::apply_to`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialStyle {
	pub stroke_color: Option<String>,
	pub stroke_width: Option<f64>,
	pub stroke_style: Option<StrokeStyle>,
	pub fill_color: Option<String>,
	pub fill_opacity: Option<f64>,
	pub point_size: Option<f64>,
	pub point_shape: Option<PointShape>,
}

impl PartialStyle {
	#[must_use]
	pub fn apply_to(&self, base: &Style) -> Style {
		Style {
			stroke_color: self.stroke_color.clone().unwrap_or_else(|| base.stroke_color.clone()),
			stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
			stroke_style: self.stroke_style.unwrap_or(base.stroke_style),
			fill_color: self.fill_color.clone().unwrap_or_else(|| base.fill_color.clone()),
			fill_opacity: self.fill_opacity.unwrap_or(base.fill_opacity),
			point_size: self.point_size.unwrap_or(base.point_size),
			point_shape: self.point_shape.unwrap_or(base.point_shape),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn serializes_camel_case() {
		assert_eq!(
			serde_json::to_value(Style::default()).unwrap(),
			json!({
				"strokeColor": "#0f60ff",
				"strokeWidth": 2.0,
				"strokeStyle": "solid",
				"fillColor": "#38bdf8",
				"fillOpacity": 0.35,
				"pointSize": 8.0,
				"pointShape": "circle"
			})
		);
	}

	#[test]
	fn partial_style_backfills() {
		let partial: PartialStyle =
			serde_json::from_value(json!({"strokeColor": "#ff0000", "pointShape": "triangle"})).unwrap();
		let style = partial.apply_to(&Style::default());
		assert_eq!(style.stroke_color, "#ff0000");
		assert_eq!(style.point_shape, PointShape::Triangle);
		assert_eq!(style.stroke_width, 2.0);
		assert_eq!(style.fill_color, "#38bdf8");
	}

	#[test]
	fn partial_style_rejects_unknown_fields() {
		assert!(serde_json::from_value::<PartialStyle>(json!({"color": "#fff"})).is_err());
	}
}
