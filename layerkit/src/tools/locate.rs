use anyhow::Result;
use layerkit_geometry::degrees::parse_lat_lng;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// latitude, e.g. "35° 41' 22'' N", "35° 41.37' N" or "35.6894"
	#[arg(allow_hyphen_values = true)]
	lat: String,

	/// longitude, e.g. "139° 45' 0'' E" or "-0.1276"
	#[arg(allow_hyphen_values = true)]
	lng: String,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let coordinates = parse_lat_lng(&arguments.lat, &arguments.lng)?;
	println!("{:.6} {:.6}", coordinates.y(), coordinates.x());
	Ok(())
}
