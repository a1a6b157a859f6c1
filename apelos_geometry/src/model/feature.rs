use super::*;
use apelos_core::json::{JsonObject, JsonValue};
use std::fmt::Debug;

/// A GeoJSON feature. The geometry is optional: `"geometry": null` is valid GeoJSON
/// and such features are skipped by extent and containment checks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoFeature {
	pub id: Option<GeoValue>,
	pub geometry: Option<Geometry>,
	pub properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry: Some(geometry),
			properties: GeoProperties::new(),
		}
	}

	/// A feature with `"geometry": null`.
	#[must_use]
	pub fn without_geometry() -> Self {
		Self::default()
	}

	pub fn set_id<T>(&mut self, id: T)
	where
		GeoValue: From<T>,
	{
		self.id = Some(GeoValue::from(id));
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key.to_string(), GeoValue::from(value));
	}

	/// True if the point lies strictly inside the feature's (multi)polygon.
	#[must_use]
	pub fn contains_point(&self, lng: f64, lat: f64) -> bool {
		self.geometry.as_ref().is_some_and(|g| g.contains_point(lng, lat))
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("type", "Feature");
		obj.set_optional("id", self.id.as_ref().map(GeoValue::to_json));
		obj.set(
			"geometry",
			self.geometry.as_ref().map_or(JsonValue::Null, |g| JsonValue::from(g.to_json())),
		);
		obj.set("properties", self.properties.to_json());
		obj
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn bairro() -> GeoFeature {
		let mut feature = GeoFeature::new(Geometry::new_polygon(&[[[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]]]));
		feature.set_id(7);
		feature.set_property("nome", "Centro");
		feature
	}

	#[test]
	fn containment() {
		let feature = bairro();
		assert!(feature.contains_point(1.0, 1.0));
		assert!(!feature.contains_point(5.0, 1.0));
		assert!(!GeoFeature::without_geometry().contains_point(1.0, 1.0));
	}

	#[test]
	fn json_output() {
		assert_eq!(
			bairro().to_json().stringify(),
			r#"{"geometry":{"coordinates":[[[0,0],[4,0],[4,4],[0,4],[0,0]]],"type":"Polygon"},"id":7,"properties":{"nome":"Centro"},"type":"Feature"}"#
		);
		assert_eq!(
			GeoFeature::without_geometry().to_json().stringify(),
			r#"{"geometry":null,"properties":{},"type":"Feature"}"#
		);
	}

	#[test]
	fn replace_properties() {
		let mut feature = bairro();
		feature.set_properties(GeoProperties::from(vec![("Name", "x")]));
		assert_eq!(feature.properties.get_text("Name").as_deref(), Some("x"));
		assert_eq!(feature.properties.get("nome"), None);
	}
}
