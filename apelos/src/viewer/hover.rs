//! Filter expressions for the highlight layer under the pointer.

use apelos_core::json::JsonValue;
use apelos_geometry::{GeoFeature, GeoValue};

/// Builds the filter of a clustered layer's `-hover` style layer.
///
/// The highlight shows unclustered points whose `property` equals the hovered
/// feature's value. With nothing hovered the filter is `["boolean", false]`, which
/// matches no feature at all, so features whose name happens to be empty are never
/// highlighted by accident.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverFilter {
	property: String,
}

impl Default for HoverFilter {
	fn default() -> Self {
		HoverFilter::new("Name")
	}
}

impl HoverFilter {
	pub fn new(property: &str) -> Self {
		HoverFilter {
			property: property.to_owned(),
		}
	}

	/// The filter for a selection; `None` means nothing is hovered.
	pub fn filter(&self, selection: Option<&GeoValue>) -> JsonValue {
		match selection {
			Some(value) => JsonValue::from(vec![
				JsonValue::from("all"),
				JsonValue::from(vec![
					JsonValue::from("!"),
					JsonValue::from(vec!["has", "point_count"]),
				]),
				JsonValue::from(vec![
					JsonValue::from("=="),
					JsonValue::from(vec!["get", self.property.as_str()]),
					value.to_json(),
				]),
			]),
			None => JsonValue::from(vec![JsonValue::from("boolean"), JsonValue::from(false)]),
		}
	}

	/// Pointer entered `feature`. A feature without a usable value clears the highlight.
	pub fn enter(&self, feature: &GeoFeature) -> JsonValue {
		let selection = feature.properties.get(&self.property).filter(|value| value.is_truthy());
		self.filter(selection)
	}

	/// Pointer left the layer.
	pub fn leave(&self) -> JsonValue {
		self.filter(None)
	}
}
