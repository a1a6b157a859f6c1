use super::GeoValue;
use apelos_core::json::JsonObject;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// The open, string-keyed property map of a feature.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: BTreeMap<String, GeoValue>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: BTreeMap::new(),
		}
	}

	pub fn insert(&mut self, key: String, value: GeoValue) {
		self.properties.insert(key, value);
	}

	pub fn remove(&mut self, key: &str) -> Option<GeoValue> {
		self.properties.remove(key)
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.properties.get(key)
	}

	/// The value as display text, or `None` when it is missing or not truthy
	/// (null, empty string, `false`, zero). Callers substitute their own fallback.
	#[must_use]
	pub fn get_text(&self, key: &str) -> Option<String> {
		self
			.properties
			.get(key)
			.filter(|value| value.is_truthy())
			.map(ToString::to_string)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, GeoValue> {
		self.properties.iter()
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut obj = JsonObject::new();
		for (key, value) in &self.properties {
			obj.set(key, value.to_json());
		}
		obj
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = btree_map::IntoIter<String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl<T> From<Vec<(&str, T)>> for GeoProperties
where
	GeoValue: From<T>,
{
	fn from(value: Vec<(&str, T)>) -> Self {
		GeoProperties {
			properties: value
				.into_iter()
				.map(|(k, v)| (k.to_string(), GeoValue::from(v)))
				.collect(),
		}
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		GeoProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}
