//! MapLibre sources and style layers per configured layer, and their visibility.

use crate::config::{LayerConfig, LayerKind};
use apelos_core::json::{JsonObject, JsonValue};
use log::debug;

macro_rules! expr {
	($($value:expr),* $(,)?) => {
		JsonValue::from(vec![$(JsonValue::from($value)),*])
	};
}

/// `layout.visibility` value.
fn visibility(visible: bool) -> &'static str {
	if visible { "visible" } else { "none" }
}

fn has_point_count() -> JsonValue {
	expr!["has", "point_count"]
}

impl LayerConfig {
	/// Ids of the style layers drawn for this layer, in drawing order.
	pub fn style_layer_ids(&self) -> Vec<String> {
		let suffixes: &[&str] = match self.kind {
			LayerKind::Point if self.is_clustered() => &["clusters", "cluster-count", "points", "hover"],
			LayerKind::Point => &["points"],
			LayerKind::Polygon => &["fill", "outline"],
			LayerKind::Line => &["line"],
		};
		suffixes.iter().map(|suffix| format!("{}-{suffix}", self.id)).collect()
	}

	/// The GeoJSON source, `data` being a URL or an inline FeatureCollection.
	pub fn source_json(&self, data: JsonValue) -> JsonObject {
		let mut source = JsonObject::new();
		source.set("type", "geojson");
		source.set("data", data);
		if self.kind == LayerKind::Point
			&& let Some(cluster) = &self.cluster
		{
			source.set("cluster", true);
			source.set("clusterMaxZoom", cluster.max_zoom);
			source.set("clusterRadius", cluster.radius);
		}
		source
	}

	/// The style layers, ready for `map.addLayer`.
	pub fn style_layers(&self) -> Vec<JsonObject> {
		match self.kind {
			LayerKind::Point if self.is_clustered() => vec![
				self.cluster_layer(),
				self.cluster_count_layer(),
				self.point_layer(8, 0.9, Some(expr!["!", has_point_count()])),
				self.hover_layer(),
			],
			LayerKind::Point => vec![self.point_layer(6, 0.8, None)],
			LayerKind::Polygon => vec![self.fill_layer(), self.outline_layer()],
			LayerKind::Line => vec![self.line_layer()],
		}
	}

	fn style_layer(&self, suffix: &str, layer_type: &str, paint: JsonObject, filter: Option<JsonValue>) -> JsonObject {
		let mut layer = JsonObject::new();
		layer.set("id", format!("{}-{suffix}", self.id));
		layer.set("type", layer_type);
		layer.set("source", &self.id);
		layer.set_optional("filter", filter);
		layer.set("paint", paint);
		layer.set("layout", JsonObject::from(vec![("visibility", visibility(self.visible))]));
		layer
	}

	fn cluster_layer(&self) -> JsonObject {
		let paint = JsonObject::from(vec![
			(
				"circle-color",
				expr!["step", expr!["get", "point_count"], "#E8B931", 10, "#E8862E", 30, &self.color],
			),
			("circle-radius", expr!["step", expr!["get", "point_count"], 20, 10, 30, 30, 40]),
			("circle-opacity", JsonValue::from(0.8)),
			("circle-stroke-width", JsonValue::from(2)),
			("circle-stroke-color", JsonValue::from("#fff")),
		]);
		self.style_layer("clusters", "circle", paint, Some(has_point_count()))
	}

	fn cluster_count_layer(&self) -> JsonObject {
		let mut layer = self.style_layer(
			"cluster-count",
			"symbol",
			JsonObject::from(vec![("text-color", "#ffffff")]),
			Some(has_point_count()),
		);
		layer.set(
			"layout",
			JsonObject::from(vec![
				("text-field", JsonValue::from("{point_count_abbreviated}")),
				("text-font", expr!["Noto Sans Bold"]),
				("text-size", JsonValue::from(12)),
				("visibility", JsonValue::from(visibility(self.visible))),
			]),
		);
		layer
	}

	fn point_layer(&self, radius: u8, opacity: f64, filter: Option<JsonValue>) -> JsonObject {
		let paint = JsonObject::from(vec![
			("circle-color", JsonValue::from(&self.color)),
			("circle-radius", JsonValue::from(radius)),
			("circle-stroke-width", JsonValue::from(2)),
			("circle-stroke-color", JsonValue::from("#fff")),
			("circle-opacity", JsonValue::from(opacity)),
		]);
		self.style_layer("points", "circle", paint, filter)
	}

	fn hover_layer(&self) -> JsonObject {
		let paint = JsonObject::from(vec![
			("circle-color", JsonValue::from(&self.color)),
			("circle-radius", JsonValue::from(14)),
			("circle-opacity", JsonValue::from(0.3)),
		]);
		self.style_layer("hover", "circle", paint, Some(super::HoverFilter::default().leave()))
	}

	fn fill_layer(&self) -> JsonObject {
		let paint = JsonObject::from(vec![
			("fill-color", JsonValue::from(&self.color)),
			("fill-opacity", JsonValue::from(0.2)),
		]);
		self.style_layer("fill", "fill", paint, None)
	}

	fn outline_layer(&self) -> JsonObject {
		let paint = JsonObject::from(vec![
			("line-color", JsonValue::from(&self.color)),
			("line-width", JsonValue::from(2)),
			("line-opacity", JsonValue::from(0.8)),
		]);
		self.style_layer("outline", "line", paint, None)
	}

	fn line_layer(&self) -> JsonObject {
		let paint = JsonObject::from(vec![
			("line-color", JsonValue::from(&self.color)),
			("line-width", JsonValue::from(1)),
			("line-opacity", JsonValue::from(0.6)),
		]);
		self.style_layer("line", "line", paint, None)
	}
}

/// One `setLayoutProperty(layer_id, "visibility", visibility)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityChange {
	pub layer_id: String,
	pub visibility: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
struct LayerState {
	id: String,
	visible: bool,
	style_layer_ids: Vec<String>,
}

/// Which configured layers are switched on.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerVisibility {
	states: Vec<LayerState>,
}

impl LayerVisibility {
	/// Starts from each layer's configured `visible` flag.
	pub fn new(layers: &[LayerConfig]) -> Self {
		LayerVisibility {
			states: layers
				.iter()
				.map(|layer| LayerState {
					id: layer.id.clone(),
					visible: layer.visible,
					style_layer_ids: layer.style_layer_ids(),
				})
				.collect(),
		}
	}

	#[must_use]
	pub fn is_visible(&self, id: &str) -> Option<bool> {
		self.states.iter().find(|state| state.id == id).map(|state| state.visible)
	}

	/// Switches a layer and lists the layout changes for all of its style layers.
	/// Unknown ids change nothing and give `None`.
	pub fn toggle(&mut self, id: &str, visible: bool) -> Option<Vec<VisibilityChange>> {
		let state = self.states.iter_mut().find(|state| state.id == id)?;
		state.visible = visible;
		debug!("layer \"{id}\" is now {}", visibility(visible));
		Some(
			state
				.style_layer_ids
				.iter()
				.map(|layer_id| VisibilityChange {
					layer_id: layer_id.clone(),
					visibility: visibility(visible),
				})
				.collect(),
		)
	}
}
