use anyhow::{Context, Result, anyhow, ensure};
use apelos::{
	config::ViewerConfig,
	geometry::{GeoFeature, geojson::read_geojson_file},
	viewer::{ScreenSize, all_features, load_layers, plan_fit},
};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// GeoJSON files (FeatureCollections). The extent covers the features of all of them.
	/// Without files, the layers of the configuration are read.
	#[arg(num_args = 0.., verbatim_doc_comment)]
	files: Vec<PathBuf>,

	/// Also print the camera that fits the extent into a map of this size, e.g. "1280x720".
	#[arg(long, value_name = "WIDTHxHEIGHT")]
	fit: Option<String>,

	/// Viewer configuration (YAML) with the layers and the fit options.
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let viewport = arguments.fit.as_deref().map(parse_viewport).transpose()?;

	let config = match &arguments.config {
		Some(path) => ViewerConfig::from_path(path)?,
		None => ViewerConfig::default(),
	};

	let features: Vec<GeoFeature> = if arguments.files.is_empty() {
		ensure!(
			arguments.config.is_some(),
			"give at least one GeoJSON file or a configuration with layers"
		);
		all_features(&load_layers(&config))
	} else {
		let mut features = Vec::new();
		for path in &arguments.files {
			let collection = read_geojson_file(path)?;
			log::info!("loaded {} features from {:?}", collection.len(), path);
			features.extend(collection.features);
		}
		features
	};

	let Some(plan) = plan_fit(&features, &config.fit) else {
		println!("null");
		return Ok(());
	};

	println!("{}", plan.bounds.as_string_json());
	if let Some(viewport) = viewport {
		let camera = plan.camera(viewport.width, viewport.height);
		println!(
			"{{\"center\":[{:.6},{:.6}],\"zoom\":{:.2}}}",
			camera.center[0], camera.center[1], camera.zoom
		);
	}
	Ok(())
}

/// Parses `"<width>x<height>"` in pixels.
fn parse_viewport(text: &str) -> Result<ScreenSize> {
	let (width, height) = text
		.split_once(['x', 'X'])
		.ok_or_else(|| anyhow!("viewport \"{text}\" must look like 1280x720"))?;
	let parse = |value: &str| {
		value
			.trim()
			.parse::<f64>()
			.with_context(|| format!("invalid viewport size \"{text}\""))
	};
	let size = ScreenSize::new(parse(width)?, parse(height)?);
	ensure!(
		size.width > 0.0 && size.height > 0.0,
		"viewport \"{text}\" must have a positive width and height"
	);
	Ok(size)
}
