use super::{Coordinates, GeometryTrait};
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A linear ring: a closed loop of coordinates bounding one side of a polygon.
/// The first and last points must be identical.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Builds a ring from an open or closed path, appending the first point
	/// when it differs from the last one.
	#[must_use]
	pub fn closed_from(mut coordinates: Vec<Coordinates>) -> Self {
		if let (Some(first), Some(last)) = (coordinates.first(), coordinates.last())
			&& first != last
		{
			coordinates.push(*first);
		}
		Self(coordinates)
	}

	#[must_use]
	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl GeometryTrait for RingGeometry {
	/// Checks for at least 4 coordinates (3 distinct points plus the closing
	/// point) and that the ring is closed.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "Ring must have at least 4 points");
		ensure!(self.is_closed(), "Ring must be closed");
		Ok(())
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);
