use super::GeoFeature;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	pub fn to_json_string(&self, pretty: bool) -> Result<String> {
		Ok(if pretty {
			serde_json::to_string_pretty(self)?
		} else {
			serde_json::to_string(self)?
		})
	}
}
