use crate::config::{LayerConfig, ViewerConfig};
use apelos_geometry::{GeoCollection, GeoFeature, geojson::read_geojson_file};
use log::{error, info};

/// A configured layer together with its features.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedLayer {
	pub config: LayerConfig,
	pub collection: GeoCollection,
}

/// Reads every configured layer file. A layer that fails to load is logged and
/// left out; the others still load.
pub fn load_layers(config: &ViewerConfig) -> Vec<LoadedLayer> {
	let mut loaded = Vec::with_capacity(config.layers.len());
	for layer in &config.layers {
		match read_geojson_file(&config.layer_path(layer)) {
			Ok(collection) => {
				info!("loaded layer: {} ({} features)", layer.name, collection.len());
				loaded.push(LoadedLayer {
					config: layer.clone(),
					collection,
				});
			}
			Err(err) => error!("error loading layer {}: {err:#}", layer.name),
		}
	}
	loaded
}

/// All features of all loaded layers, in layer order.
pub fn all_features(layers: &[LoadedLayer]) -> Vec<GeoFeature> {
	layers
		.iter()
		.flat_map(|layer| layer.collection.iter().cloned())
		.collect()
}
