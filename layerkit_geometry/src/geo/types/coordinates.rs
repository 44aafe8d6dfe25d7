use anyhow::{Error, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A GeoJSON position, stored as `[longitude, latitude]`.
///
/// Positions with additional ordinates (e.g. altitude) are accepted when
/// deserializing; everything after the first two values is dropped.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	/// Longitude in degrees.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	/// Latitude in degrees.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}
}

impl TryFrom<Vec<f64>> for Coordinates {
	type Error = Error;

	fn try_from(value: Vec<f64>) -> Result<Self> {
		ensure!(
			value.len() >= 2,
			"a position must have at least two values, found {}",
			value.len()
		);
		Ok(Coordinates([value[0], value[1]]))
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
