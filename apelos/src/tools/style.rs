use anyhow::Result;
use apelos::{
	config::{ViewerConfig, maptiler_key},
	core::json::{JsonArray, JsonObject, JsonValue},
	viewer::{MapControl, PopupOptions},
};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// Viewer configuration (YAML). Without it the built-in layers are used.
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// URL prefix under which the browser finds the layer files
	#[arg(long, default_value = "data/")]
	data_url: String,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = match &arguments.config {
		Some(path) => ViewerConfig::from_path(path)?,
		None => ViewerConfig::default(),
	};
	println!("{}", build_style(&config, &arguments.data_url, maptiler_key().as_deref()).stringify_pretty_multi_line(100, 0));
	Ok(())
}

/// The map options, sources and style layers of the viewer as one JSON object,
/// plus the popup options and the map controls.
///
/// Without an API key the basemap `style` is left out and a warning is logged.
fn build_style(config: &ViewerConfig, data_url: &str, key: Option<&str>) -> JsonObject {
	let mut sources = JsonObject::new();
	let mut layers = JsonArray::default();
	for layer in &config.layers {
		let data = JsonValue::from(format!("{data_url}{}", layer.file));
		sources.set(&layer.id, layer.source_json(data));
		for style_layer in layer.style_layers() {
			layers.push(style_layer);
		}
	}

	let mut style = JsonObject::new();
	match config.map.style_url(key) {
		Ok(url) => style.set("style", url),
		Err(err) => log::warn!("{err}"),
	}
	style.set("center", config.map.center);
	style.set("zoom", config.map.zoom);
	style.set("pitch", config.map.pitch);
	style.set("bearing", config.map.bearing);
	style.set("sources", sources);
	style.set("layers", layers);
	style.set("popup", PopupOptions::default().to_json());
	style.set("controls", MapControl::all_json());
	style
}
