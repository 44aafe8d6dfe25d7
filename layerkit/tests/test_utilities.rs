#![allow(unused)]

use assert_cmd::{Command, cargo};
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

#[cfg(windows)]
pub const BINARY_NAME: &str = "layerkit.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "layerkit";

/// Helper to create a Command for the layerkit binary.
pub fn layerkit_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

/// Helper to get a temp file path.
pub fn temp_file(filename: &str) -> (TempDir, PathBuf) {
	let dir = tempdir().expect("failed to create temp dir");
	let path = dir.path().join(filename);
	(dir, path)
}

/// Helper to write a file into a temp dir that already exists.
pub fn write_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
	let path = dir.path().join(filename);
	std::fs::write(&path, content).unwrap();
	path
}

pub fn read_json(path: &Path) -> JsonValue {
	serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// Creates a collection holding the sample layer and returns its path.
pub fn sample_collection() -> (TempDir, PathBuf) {
	let (dir, path) = temp_file("layers.json");
	layerkit_cmd()
		.args(["new", path.to_str().unwrap()])
		.assert()
		.success();
	(dir, path)
}

/// Runs a subcommand that prints one line and returns that line.
pub fn stdout_line(args: &[&str]) -> String {
	let output = layerkit_cmd().args(args).assert().success().get_output().stdout.clone();
	String::from_utf8(output).unwrap().trim().to_string()
}
