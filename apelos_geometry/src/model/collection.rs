use super::GeoFeature;
use crate::{extent::compute_extent, geojson::parse_geojson};
use anyhow::Result;
use apelos_core::{
	GeoBBox,
	json::{JsonObject, JsonValue},
};

/// A GeoJSON `FeatureCollection`; one per layer file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	pub fn from_json_str(json: &str) -> Result<Self> {
		parse_geojson(json)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, GeoFeature> {
		self.features.iter()
	}

	/// The extent of every feature in the collection; see [`compute_extent`].
	#[must_use]
	pub fn compute_extent(&self) -> Option<GeoBBox> {
		compute_extent(&self.features)
	}

	/// Indices of all features whose area strictly contains the point, in input order.
	#[must_use]
	pub fn find_containing(&self, lng: f64, lat: f64) -> Vec<usize> {
		self
			.features
			.iter()
			.enumerate()
			.filter(|(_, feature)| feature.contains_point(lng, lat))
			.map(|(index, _)| index)
			.collect()
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("type", "FeatureCollection");
		obj.set(
			"features",
			self
				.features
				.iter()
				.map(|f| JsonValue::from(f.to_json()))
				.collect::<Vec<_>>(),
		);
		obj
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<T: IntoIterator<Item = GeoFeature>>(iter: T) -> Self {
		GeoCollection {
			features: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Geometry;

	fn collection() -> GeoCollection {
		let square = |x: i32, y: i32| {
			GeoFeature::new(Geometry::new_polygon(&[[
				[x, y],
				[x + 2, y],
				[x + 2, y + 2],
				[x, y + 2],
				[x, y],
			]]))
		};
		GeoCollection::from(vec![
			square(0, 0),
			GeoFeature::new(Geometry::new_point([1.0, 1.0])),
			square(1, 1),
			GeoFeature::without_geometry(),
			square(10, 10),
		])
	}

	#[test]
	fn find_containing_in_order() {
		let collection = collection();
		assert_eq!(collection.find_containing(1.5, 1.5), vec![0, 2]);
		assert_eq!(collection.find_containing(11.0, 11.0), vec![4]);
		assert!(collection.find_containing(50.0, 50.0).is_empty());
	}

	#[test]
	fn extent_and_len() {
		let collection = collection();
		assert_eq!(collection.len(), 5);
		assert_eq!(collection.compute_extent().unwrap().as_tuple(), (0.0, 0.0, 12.0, 12.0));
		assert_eq!(GeoCollection::default().compute_extent(), None);
	}

	#[test]
	fn json_round_trip() -> Result<()> {
		let collection = collection();
		let text = collection.to_json().stringify();
		assert!(text.starts_with(r#"{"features":[{"geometry":{"coordinates":[[[0,0],[2,0]"#));
		assert_eq!(GeoCollection::from_json_str(&text)?, collection);
		Ok(())
	}
}
