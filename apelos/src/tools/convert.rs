use anyhow::{Context, Result, ensure};
use apelos::{geometry::kml::read_kml_file, viewer::content::clean::clean_collection};
use std::{fs, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// KML file with one placemark per feature
	input: PathBuf,

	/// Where to write the GeoJSON FeatureCollection.
	/// Placemark "name" and "description" become the "Name" and "Description" properties.
	#[arg(verbatim_doc_comment)]
	output: PathBuf,

	/// Also clean the descriptions, like the "clean" command
	#[arg(long)]
	clean: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	ensure!(
		arguments.input.is_file(),
		"input file not found at \"{}\"",
		arguments.input.display()
	);
	let mut collection = read_kml_file(&arguments.input)?;
	if arguments.clean {
		clean_collection(&mut collection);
	}

	fs::write(&arguments.output, collection.to_json().stringify() + "\n")
		.with_context(|| format!("failed to write \"{}\"", arguments.output.display()))?;

	log::info!(
		"converted {} placemarks from {:?} into {:?}",
		collection.len(),
		arguments.input,
		arguments.output
	);
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use apelos::geometry::geojson::read_geojson_file;

	#[test]
	fn convert_testdata() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("apelos.geojson");
		run_command(vec![
			"apelos",
			"convert",
			"-q",
			"../testdata/apelos.kml",
			output.to_str().unwrap(),
		])
		.unwrap();

		let collection = read_geojson_file(&output).unwrap();
		assert_eq!(collection.len(), 4);
		let first = &collection.features[0].properties;
		assert_eq!(first.get_text("Name").as_deref(), Some("Apelo 1"));
		assert!(first.get_text("Description").unwrap().starts_with("<div><b>"));
	}

	#[test]
	fn convert_and_clean() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("apelos.geojson");
		run_command(vec![
			"apelos",
			"convert",
			"-q",
			"--clean",
			"../testdata/apelos.kml",
			output.to_str().unwrap(),
		])
		.unwrap();

		let first = read_geojson_file(&output).unwrap().features.remove(0).properties;
		assert_eq!(
			first.get_text("Description").as_deref(),
			Some("Iluminação pública Rua do Catete, em frente ao nº 120.")
		);
		assert_eq!(first.get_text("Link").as_deref(), Some("https://camara.rio/apelos/1.pdf"));
	}

	#[test]
	fn convert_missing_input() {
		let error = run_command(vec![
			"apelos",
			"convert",
			"-q",
			"../testdata/missing.kml",
			"out.geojson",
		])
		.unwrap_err();
		assert_eq!(error.to_string(), "input file not found at \"../testdata/missing.kml\"");
	}
}
