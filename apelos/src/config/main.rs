use super::{LayerConfig, LayerKind, MapConfig};
use crate::viewer::FitOptions;
use anyhow::{Context, Result, bail, ensure};
use serde::Deserialize;
use std::{
	collections::HashSet,
	fs::File,
	io::{BufReader, Read},
	path::{Path, PathBuf},
};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ViewerConfig {
	/// Directory holding the layer files.
	pub data_dir: PathBuf,

	/// Initial camera and basemap style.
	pub map: MapConfig,

	/// How the map is fitted to the data.
	pub fit: FitOptions,

	/// Layers in drawing order. Replaces the default layers when given.
	pub layers: Vec<LayerConfig>,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		ViewerConfig {
			data_dir: PathBuf::from("data"),
			map: MapConfig::default(),
			fit: FitOptions::default(),
			layers: vec![LayerConfig::apelos(), LayerConfig::filtro_bairros()],
		}
	}
}

impl ViewerConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let config: ViewerConfig = serde_yaml_ng::from_reader(reader)?;
		config.verify()?;
		Ok(config)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		let config: ViewerConfig = serde_yaml_ng::from_str(text)?;
		config.verify()?;
		Ok(config)
	}

	/// Reads a YAML file; a relative `data_dir` is taken relative to the file.
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config \"{}\"", path.display()))?;
		let mut config = ViewerConfig::from_reader(BufReader::new(file))
			.with_context(|| format!("failed to parse config \"{}\"", path.display()))?;

		if config.data_dir.is_relative()
			&& let Some(base) = path.parent()
		{
			config.data_dir = base.join(&config.data_dir);
		}
		Ok(config)
	}

	/// Checks what serde cannot: unique non-empty layer ids and clustering on point layers only.
	pub fn verify(&self) -> Result<()> {
		let mut ids = HashSet::new();
		for layer in &self.layers {
			ensure!(!layer.id.trim().is_empty(), "layer \"{}\" has an empty id", layer.name);
			if !ids.insert(layer.id.as_str()) {
				bail!("layer id \"{}\" is used more than once", layer.id);
			}
			if layer.cluster.is_some() && layer.kind != LayerKind::Point {
				bail!("layer \"{}\": clustering is only supported for point layers", layer.id);
			}
		}
		Ok(())
	}

	#[must_use]
	pub fn layer(&self, id: &str) -> Option<&LayerConfig> {
		self.layers.iter().find(|layer| layer.id == id)
	}

	#[must_use]
	pub fn layer_path(&self, layer: &LayerConfig) -> PathBuf {
		self.data_dir.join(&layer.file)
	}
}
