mod collection;
mod feature;
mod geometry;
mod properties;
mod types;

pub use collection::*;
pub use feature::*;
pub use geometry::*;
pub use properties::*;
pub use types::*;
