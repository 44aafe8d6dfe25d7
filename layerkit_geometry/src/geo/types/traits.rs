use anyhow::Result;
use std::fmt::Debug;

/// Common interface of all geometric primitives.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Verifies the structural validity of the geometry, e.g. point counts and
	/// closed rings. Topology (self-intersection, orientation) is not checked.
	fn verify(&self) -> Result<()>;
}
