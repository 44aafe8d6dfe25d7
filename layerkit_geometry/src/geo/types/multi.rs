use super::{GeometryTrait, LineStringGeometry, PointGeometry, PolygonGeometry};
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

macro_rules! impl_multi {
	($($t:ty, $name:literal),*) => {$(
		impl GeometryTrait for $t {
			fn verify(&self) -> Result<()> {
				ensure!(!self.0.is_empty(), "{} must have at least one member", $name);
				for geometry in &self.0 {
					geometry.verify()?;
				}
				Ok(())
			}
		}

		impl Debug for $t {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_list().entries(&self.0).finish()
			}
		}
	)*};
}

impl_multi!(
	MultiPointGeometry,
	"MultiPoint",
	MultiLineStringGeometry,
	"MultiLineString",
	MultiPolygonGeometry,
	"MultiPolygon"
);

crate::impl_from_array!(
	MultiPointGeometry,
	PointGeometry,
	MultiLineStringGeometry,
	LineStringGeometry,
	MultiPolygonGeometry,
	PolygonGeometry
);
