use anyhow::Result;
use apelos::geometry::{GeoCollection, geojson::read_geojson_file};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(
	arg_required_else_help = true,
	disable_version_flag = true,
	allow_negative_numbers = true
)]
pub struct Subcommand {
	/// Longitude of the point (WGS84)
	lng: f64,

	/// Latitude of the point (WGS84)
	lat: f64,

	/// GeoJSON file with (multi)polygon features, e.g. neighbourhoods
	file: PathBuf,

	/// Print only this property of every matching feature, one per line
	#[arg(short, long, value_name = "KEY")]
	property: Option<String>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let collection = read_geojson_file(&arguments.file)?;
	let matches: Vec<usize> = collection.find_containing(arguments.lng, arguments.lat);
	log::info!(
		"{} of {} features contain ({}, {})",
		matches.len(),
		collection.len(),
		arguments.lng,
		arguments.lat
	);

	match &arguments.property {
		Some(key) => {
			for index in matches {
				match collection.features[index].properties.get(key) {
					Some(value) => println!("{value}"),
					None => log::warn!("feature {index} has no property \"{key}\""),
				}
			}
		}
		None => {
			let found: GeoCollection = matches
				.into_iter()
				.map(|index| collection.features[index].clone())
				.collect();
			println!("{}", found.to_json().stringify());
		}
	}
	Ok(())
}
