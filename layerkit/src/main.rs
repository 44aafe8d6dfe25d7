// Import necessary modules and dependencies
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use layerkit::Config;
use std::path::PathBuf;

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author, // Set the author
	version, // Set the version
	about, // Set a short description
	long_about = None, // Disable long description
	propagate_version = true, // Enable version flag for subcommands
	disable_help_subcommand = true, // Disable help subcommand
)]
struct Cli {
	#[command(subcommand)]
	command: Commands, // Set subcommands

	/// Path to a YAML configuration file (default style, circle segments, pretty printing)
	#[arg(short = 'c', long, global = true, value_name = "FILE", display_order = 0)]
	config: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>, // Set verbosity flag
}

// Define subcommands for the command-line interface
#[derive(Subcommand, Debug)]
enum Commands {
	/// Print the layer tree of a collection file
	Show(tools::show::Subcommand),

	/// Create a collection file containing a sample layer
	New(tools::new::Subcommand),

	#[clap(alias = "convert")]
	/// Convert a collection file of any version to the current format
	Upgrade(tools::upgrade::Subcommand),

	/// Add a layer or a node to a collection
	Add(tools::add::Subcommand),

	/// Remove an item and everything below it
	Remove(tools::remove::Subcommand),

	/// Toggle the visibility of an item
	Toggle(tools::toggle::Subcommand),

	/// Move an item to another place in the tree
	Move(tools::move_item::Subcommand),

	/// Append the features of a GeoJSON file to a layer
	ImportGeojson(tools::import_geojson::Subcommand),

	/// Write the features of a layer as a GeoJSON file
	ExportGeojson(tools::export_geojson::Subcommand),

	/// Convert drawn shapes to features and append them to a layer
	Draw(tools::draw::Subcommand),

	/// Parse a latitude/longitude pair and print it in decimal degrees
	Locate(tools::locate::Subcommand),
}

// Main function for running the command-line interface
fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

// Helper function for running subcommands
fn run(cli: Cli) -> Result<()> {
	let config = Config::load(cli.config.as_deref())?;
	match &cli.command {
		Commands::Show(arguments) => tools::show::run(arguments, &config),
		Commands::New(arguments) => tools::new::run(arguments, &config),
		Commands::Upgrade(arguments) => tools::upgrade::run(arguments, &config),
		Commands::Add(arguments) => tools::add::run(arguments, &config),
		Commands::Remove(arguments) => tools::remove::run(arguments, &config),
		Commands::Toggle(arguments) => tools::toggle::run(arguments, &config),
		Commands::Move(arguments) => tools::move_item::run(arguments, &config),
		Commands::ImportGeojson(arguments) => tools::import_geojson::run(arguments, &config),
		Commands::ExportGeojson(arguments) => tools::export_geojson::run(arguments, &config),
		Commands::Draw(arguments) => tools::draw::run(arguments, &config),
		Commands::Locate(arguments) => tools::locate::run(arguments),
	}
}
