//! The layer tree of a map drawing application: layers and folders, their
//! editing operations, list rendering helpers and persisted file formats.

mod collection;
mod flatten;
mod geojson_io;
mod gesture;
mod item;
mod placement;
mod render;
mod style;
mod tree;

pub use collection::*;
pub use flatten::*;
pub use geojson_io::*;
pub use gesture::*;
pub use item::*;
pub use placement::*;
pub use render::*;
pub use style::*;
pub use tree::*;
