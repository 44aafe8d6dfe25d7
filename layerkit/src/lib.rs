//! # layerkit
//!
//! Command line tools for map drawing layers: an editable tree of layers and
//! folders, stored as versioned collection files, with GeoJSON import and
//! export and conversion of drawn shapes.
//!
//! The library part holds the file handling shared by the subcommands. The
//! domain logic lives in [`tree`] and [`geometry`].
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use layerkit::{Config, load_collection, save_collection};
//! use std::path::Path;
//!
//! let config = Config::default();
//! let tree = load_collection(Path::new("layers.json"), &config).unwrap();
//! let tree = tree.toggle_item_visibility("layer-sample");
//! save_collection(Path::new("layers.json"), &tree, &config).unwrap();
//! ```

mod config;
mod files;

pub use config::Config;
pub use files::*;
pub use layerkit_geometry as geometry;
pub use layerkit_tree as tree;
