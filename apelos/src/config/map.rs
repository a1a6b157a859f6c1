use anyhow::{Result, ensure};
use serde::Deserialize;

const KEY_VARIABLES: [&str; 2] = ["MAPTILER_KEY", "VITE_MAPTILER_KEY"];

/// Initial camera and basemap.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct MapConfig {
	/// `[lng, lat]` of the initial view.
	pub center: [f64; 2],
	pub zoom: f64,
	pub pitch: f64,
	pub bearing: f64,

	/// Basemap style URL; `{key}` is replaced by the MapTiler API key.
	pub style: String,
}

impl Default for MapConfig {
	fn default() -> Self {
		MapConfig {
			center: [-43.1895, -22.9068],
			zoom: 13.0,
			pitch: 0.0,
			bearing: 0.0,
			style: String::from("https://api.maptiler.com/maps/streets-v2/style.json?key={key}"),
		}
	}
}

impl MapConfig {
	/// Fills the API key into the style URL.
	pub fn style_url(&self, key: Option<&str>) -> Result<String> {
		if !self.style.contains("{key}") {
			return Ok(self.style.clone());
		}
		let key = key.map(str::trim).unwrap_or_default();
		ensure!(
			!key.is_empty(),
			"MapTiler API key not found, get a free key at https://www.maptiler.com/cloud/ and set the {} environment variable",
			KEY_VARIABLES[0]
		);
		Ok(self.style.replace("{key}", key))
	}
}

/// Looks the MapTiler key up with `lookup`, trying `MAPTILER_KEY` first and
/// `VITE_MAPTILER_KEY` second. Empty values count as missing.
pub fn maptiler_key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
	KEY_VARIABLES
		.iter()
		.filter_map(|name| lookup(name))
		.find(|value| !value.trim().is_empty())
}

/// The MapTiler key from the process environment.
pub fn maptiler_key() -> Option<String> {
	maptiler_key_from(|name| std::env::var(name).ok())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn style_url_with_key() {
		let url = MapConfig::default().style_url(Some("abc123")).unwrap();
		assert_eq!(url, "https://api.maptiler.com/maps/streets-v2/style.json?key=abc123");
	}

	#[rstest]
	#[case(None)]
	#[case(Some(""))]
	#[case(Some("  "))]
	fn style_url_without_key(#[case] key: Option<&str>) {
		let error = MapConfig::default().style_url(key).unwrap_err().to_string();
		assert!(error.contains("MAPTILER_KEY"), "{error}");
	}

	#[test]
	fn style_url_without_placeholder() {
		let config = MapConfig {
			style: String::from("https://demotiles.maplibre.org/style.json"),
			..MapConfig::default()
		};
		assert_eq!(config.style_url(None).unwrap(), config.style);
	}

	#[rstest]
	#[case(Some("a"), Some("b"), Some("a"))]
	#[case(None, Some("b"), Some("b"))]
	#[case(Some(""), Some("b"), Some("b"))]
	#[case(Some(""), None, None)]
	#[case(None, None, None)]
	fn key_lookup(#[case] primary: Option<&str>, #[case] fallback: Option<&str>, #[case] expected: Option<&str>) {
		let key = maptiler_key_from(|name| match name {
			"MAPTILER_KEY" => primary.map(String::from),
			"VITE_MAPTILER_KEY" => fallback.map(String::from),
			_ => None,
		});
		assert_eq!(key.as_deref(), expected);
	}
}
