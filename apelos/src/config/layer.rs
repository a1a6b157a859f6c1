use serde::Deserialize;

/// How a layer's features are drawn.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
	Point,
	Polygon,
	Line,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayerCategory {
	#[default]
	Main,
	Context,
}

/// Point clustering of a GeoJSON source.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClusterConfig {
	/// Highest zoom level at which points are still clustered.
	pub max_zoom: u8,
	/// Cluster radius in pixels.
	pub radius: u32,
}

/// One GeoJSON layer of the viewer.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LayerConfig {
	/// Source id, also the prefix of the style layer ids.
	pub id: String,

	/// Label in the layer control.
	pub name: String,

	/// GeoJSON file, relative to `data_dir`.
	pub file: String,

	pub kind: LayerKind,

	#[serde(default = "default_visible")]
	pub visible: bool,

	/// CSS colour, e.g. `"#C1272D"`.
	pub color: String,

	#[serde(default)]
	pub category: LayerCategory,

	/// Only used by point layers.
	#[serde(default)]
	pub cluster: Option<ClusterConfig>,
}

fn default_visible() -> bool {
	true
}

impl LayerConfig {
	/// The appeals layer: clustered red points.
	pub fn apelos() -> Self {
		LayerConfig {
			id: String::from("apelos"),
			name: String::from("Apelos (Appeals)"),
			file: String::from("apelos_clean.geojson"),
			kind: LayerKind::Point,
			visible: true,
			color: String::from("#C1272D"),
			category: LayerCategory::Main,
			cluster: Some(ClusterConfig {
				max_zoom: 16,
				radius: 50,
			}),
		}
	}

	/// The filtered neighbourhoods layer, hidden at start.
	pub fn filtro_bairros() -> Self {
		LayerConfig {
			id: String::from("filtro-bairros"),
			name: String::from("Bairros Filtrados (Filtered Neighborhoods)"),
			file: String::from("filtro_bairros.geojson"),
			kind: LayerKind::Polygon,
			visible: false,
			color: String::from("#E8862E"),
			category: LayerCategory::Main,
			cluster: None,
		}
	}

	pub fn is_clustered(&self) -> bool {
		self.kind == LayerKind::Point && self.cluster.is_some()
	}
}
