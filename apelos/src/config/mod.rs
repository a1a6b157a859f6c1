//! Viewer configuration.
//!
//! A [`ViewerConfig`] describes the basemap, how the map fits the data and the
//! GeoJSON layers to show. It is read from YAML (`viewer.yml`); every section is
//! optional and falls back to the defaults of the Rio de Janeiro appeals map.

mod layer;
mod main;
mod map;

pub use layer::{ClusterConfig, LayerCategory, LayerConfig, LayerKind};
pub use main::ViewerConfig;
pub use map::{MapConfig, maptiler_key, maptiler_key_from};
