use anyhow::{Result, anyhow};
use apelos::{geometry::geojson::read_geojson_file, viewer::FeatureContent};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file
	file: PathBuf,

	/// Index of the feature in the FeatureCollection
	#[arg(short, long, default_value_t = 0)]
	index: usize,

	/// Render the sidebar panel instead of the popup
	#[arg(long)]
	sidebar: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let collection = read_geojson_file(&arguments.file)?;
	let feature = collection.features.get(arguments.index).ok_or_else(|| {
		anyhow!(
			"there is no feature {} in {:?}, it has {} features",
			arguments.index,
			arguments.file,
			collection.len()
		)
	})?;

	let content = FeatureContent::from_properties(&feature.properties);
	if arguments.sidebar {
		print!("{}", content.sidebar_html());
	} else {
		print!("{}", content.popup_html());
	}
	Ok(())
}
