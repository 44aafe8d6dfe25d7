use anyhow::{Context, Result, ensure};
use layerkit_geometry::{DEFAULT_CIRCLE_SEGMENTS, GeometryCodec};
use layerkit_tree::{PartialStyle, Style};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Settings read from the YAML file given by `--config`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Style of new layers and fallback for incomplete legacy layers.
	/// Unset fields keep the built-in default.
	#[serde(default)]
	pub default_style: PartialStyle,

	/// Number of polygon vertices used to approximate a drawn circle.
	#[serde(default = "default_circle_segments")]
	pub circle_segments: usize,

	/// Pretty-print written JSON files.
	#[serde(default = "default_pretty")]
	pub pretty: bool,
}

fn default_circle_segments() -> usize {
	DEFAULT_CIRCLE_SEGMENTS
}

fn default_pretty() -> bool {
	true
}

impl Default for Config {
	fn default() -> Self {
		Self {
			default_style: PartialStyle::default(),
			circle_segments: DEFAULT_CIRCLE_SEGMENTS,
			pretty: true,
		}
	}
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_reader(reader)?;
		config.verify()?;
		Ok(config)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_str(text)?;
		config.verify()?;
		Ok(config)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))
	}

	/// Reads `path` if given, the built-in defaults otherwise.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		match path {
			Some(path) => Config::from_path(path),
			None => Ok(Config::default()),
		}
	}

	fn verify(&self) -> Result<()> {
		ensure!(
			self.circle_segments >= 3,
			"circle_segments must be at least 3, got {}",
			self.circle_segments
		);
		Ok(())
	}

	#[must_use]
	pub fn default_style(&self) -> Style {
		self.default_style.apply_to(&Style::default())
	}

	pub fn codec(&self) -> Result<GeometryCodec> {
		GeometryCodec::new(self.circle_segments)
	}
}
