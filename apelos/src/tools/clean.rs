use anyhow::{Context, Result};
use apelos::{geometry::geojson::read_geojson_file, viewer::content::clean::clean_collection};
use std::{fs, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// GeoJSON file whose features carry HTML in "Description"
	input: PathBuf,

	/// Where to write the cleaned GeoJSON.
	/// "Description" becomes plain text, "Link" holds the first http(s) link or null.
	#[arg(verbatim_doc_comment)]
	output: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut collection = read_geojson_file(&arguments.input)?;
	let links = clean_collection(&mut collection);

	fs::write(&arguments.output, collection.to_json().stringify() + "\n")
		.with_context(|| format!("failed to write \"{}\"", arguments.output.display()))?;

	log::info!(
		"cleaned {} features, {links} with a document link, into {:?}",
		collection.len(),
		arguments.output
	);
	Ok(())
}
