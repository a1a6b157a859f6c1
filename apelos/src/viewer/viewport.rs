//! Fitting the map view to the loaded data.

use apelos_core::{
	GeoBBox,
	json::{JsonObject, JsonValue},
	lng_to_mercator_x, mercator_y_to_lat,
};
use apelos_geometry::{GeoFeature, compute_extent};
use log::warn;
use serde::Deserialize;

/// Size of a map tile in pixels, as MapLibre renders it.
const TILE_SIZE: f64 = 512.0;

/// Zoom a clicked cluster eases to when its source reports no expansion zoom.
pub const CLUSTER_FALLBACK_ZOOM: f64 = 14.0;
const CLUSTER_EASE_MS: u64 = 500;

/// Options of the `fitBounds` call.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct FitOptions {
	/// Pixels kept free on every side.
	pub padding: f64,
	/// The fit never zooms in further than this.
	pub max_zoom: f64,
	/// Length of the camera animation.
	pub duration_ms: u64,
}

impl Default for FitOptions {
	fn default() -> Self {
		FitOptions {
			padding: 50.0,
			max_zoom: 15.0,
			duration_ms: 1000,
		}
	}
}

/// Where the camera is pointed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
	/// `[lng, lat]`
	pub center: [f64; 2],
	pub zoom: f64,
}

/// An `easeTo` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaseTo {
	pub camera: Camera,
	pub duration_ms: u64,
}

impl EaseTo {
	/// The argument of `map.easeTo(options)`.
	pub fn to_json(&self) -> JsonObject {
		JsonObject::from(vec![
			("center", JsonValue::from(self.camera.center)),
			("zoom", JsonValue::from(self.camera.zoom)),
			("duration", JsonValue::from(self.duration_ms)),
		])
	}
}

/// Where the camera goes when a cluster circle is clicked.
///
/// `center` is the cluster's position and `expansion_zoom` the zoom at which the
/// cluster source splits it up. A missing, zero or NaN zoom falls back to
/// [`CLUSTER_FALLBACK_ZOOM`].
pub fn cluster_click_camera(center: [f64; 2], expansion_zoom: Option<f64>) -> EaseTo {
	let zoom = expansion_zoom
		.filter(|zoom| *zoom > 0.0)
		.unwrap_or(CLUSTER_FALLBACK_ZOOM);
	EaseTo {
		camera: Camera { center, zoom },
		duration_ms: CLUSTER_EASE_MS,
	}
}

/// A `fitBounds` call: the extent of the data plus the options to fit it with.
#[derive(Debug, Clone, PartialEq)]
pub struct FitPlan {
	pub bounds: GeoBBox,
	pub options: FitOptions,
}

/// Plans fitting the view to `features`.
///
/// Returns `None` when the features have no coordinates at all; the view is then
/// left as it is.
pub fn plan_fit(features: &[GeoFeature], options: &FitOptions) -> Option<FitPlan> {
	let Some(bounds) = compute_extent(features) else {
		warn!("no features found to fit map to");
		return None;
	};
	Some(FitPlan {
		bounds,
		options: *options,
	})
}

impl FitPlan {
	/// The arguments of `map.fitBounds(bounds, options)`.
	pub fn to_json(&self) -> JsonObject {
		let padding = self.options.padding;
		let mut json = JsonObject::new();
		json.set("bounds", JsonValue::from(self.bounds.as_corners().map(JsonValue::from)));
		json.set(
			"options",
			JsonObject::from(vec![
				(
					"padding",
					JsonValue::from(JsonObject::from(vec![
						("top", padding),
						("bottom", padding),
						("left", padding),
						("right", padding),
					])),
				),
				("duration", JsonValue::from(self.options.duration_ms)),
				("maxZoom", JsonValue::from(self.options.max_zoom)),
			]),
		);
		json
	}

	/// The camera `fitBounds` ends up with in a viewport of `width` × `height` pixels.
	///
	/// The box is centred in Web Mercator space and the zoom is chosen so the box
	/// fills the viewport minus the padding, capped at `max_zoom` and never below 0.
	pub fn camera(&self, width: f64, height: f64) -> Camera {
		let [x0, y0, x1, y1] = self.bounds.to_mercator();
		let world = 2.0 * lng_to_mercator_x(180.0);

		let available_width = (width - 2.0 * self.options.padding).max(0.0);
		let available_height = (height - 2.0 * self.options.padding).max(0.0);

		let scale = |available: f64, extent: f64| {
			if extent > 0.0 {
				available / (extent / world * TILE_SIZE)
			} else {
				f64::INFINITY
			}
		};
		let scale = scale(available_width, x1 - x0).min(scale(available_height, y1 - y0));
		let zoom = scale.log2().min(self.options.max_zoom).max(0.0);

		let (lng, _) = self.bounds.center();
		let lat = mercator_y_to_lat(f64::midpoint(y0, y1));
		Camera { center: [lng, lat], zoom }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use apelos_core::lat_to_mercator_y;
	use apelos_geometry::Geometry;
	use approx::assert_relative_eq;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn plan(features: &[GeoFeature]) -> FitPlan {
		plan_fit(features, &FitOptions::default()).unwrap()
	}

	fn line(coordinates: Vec<[f64; 2]>) -> GeoFeature {
		GeoFeature::new(Geometry::new_line_string(coordinates))
	}

	#[test]
	fn nothing_to_fit() {
		assert_eq!(plan_fit(&[], &FitOptions::default()), None);
		assert_eq!(plan_fit(&[GeoFeature::without_geometry()], &FitOptions::default()), None);
	}

	#[test]
	fn plan_uses_extent() {
		let plan = plan(&[line(vec![[-43.3, -22.8], [-43.1, -23.0]])]);
		assert_eq!(plan.bounds.as_tuple(), (-43.3, -23.0, -43.1, -22.8));
		assert_eq!(
			plan.to_json().stringify(),
			r#"{"bounds":[[-43.3,-23],[-43.1,-22.8]],"options":{"duration":1000,"maxZoom":15,"padding":{"bottom":50,"left":50,"right":50,"top":50}}}"#
		);
	}

	#[test]
	fn single_point_is_capped_at_max_zoom() {
		let camera = plan(&[GeoFeature::new(Geometry::new_point([-43.1895, -22.9068]))]).camera(800.0, 600.0);
		assert_eq!(camera.zoom, 15.0);
		assert_relative_eq!(camera.center[0], -43.1895, epsilon = 1e-9);
		assert_relative_eq!(camera.center[1], -22.9068, epsilon = 1e-9);
	}

	#[test]
	fn whole_width_of_the_world() {
		let plan = FitPlan {
			bounds: GeoBBox::new(-180.0, 0.0, 180.0, 0.0).unwrap(),
			options: FitOptions {
				padding: 0.0,
				..FitOptions::default()
			},
		};
		assert_relative_eq!(plan.camera(1024.0, 1024.0).zoom, 1.0, epsilon = 1e-9);
		assert_relative_eq!(plan.camera(512.0, 512.0).zoom, 0.0, epsilon = 1e-9);
		assert_eq!(plan.camera(256.0, 256.0).zoom, 0.0);
	}

	#[test]
	fn padding_is_taken_from_the_viewport() {
		let plan = plan(&[line(vec![[-1.0, 0.0], [1.0, 0.0]])]);
		let camera = plan.camera(1000.0, 1000.0);
		let expected = (900.0 / (2.0 / 360.0 * TILE_SIZE)).log2();
		assert_relative_eq!(camera.zoom, expected, epsilon = 1e-9);
		assert_relative_eq!(camera.center[0], 0.0, epsilon = 1e-12);
		assert_relative_eq!(camera.center[1], 0.0, epsilon = 1e-9);
	}

	#[test]
	fn narrower_axis_wins() {
		let plan = plan(&[line(vec![[0.0, 0.0], [1.0, 1.0]])]);
		let wide = plan.camera(2000.0, 500.0);
		let tall = plan.camera(500.0, 2000.0);
		let square = plan.camera(500.0, 500.0);
		assert_relative_eq!(wide.zoom, square.zoom, epsilon = 1e-9);
		assert!(tall.zoom >= square.zoom);
		assert!(tall.zoom < square.zoom + 0.01);
	}

	#[test]
	fn center_is_mercator_midpoint() {
		let plan = plan(&[line(vec![[-43.8, -23.1], [-43.1, -22.7]])]);
		let camera = plan.camera(800.0, 600.0);
		assert_relative_eq!(camera.center[0], -43.45, epsilon = 1e-9);
		let y = f64::midpoint(lat_to_mercator_y(-23.1), lat_to_mercator_y(-22.7));
		assert_relative_eq!(camera.center[1], mercator_y_to_lat(y), epsilon = 1e-12);
		assert!(camera.center[1] < -22.9);
		assert!(camera.zoom > 9.0 && camera.zoom < 11.0, "{}", camera.zoom);
	}

	#[test]
	fn viewport_smaller_than_padding() {
		let plan = plan(&[line(vec![[0.0, 0.0], [1.0, 1.0]])]);
		assert_eq!(plan.camera(80.0, 80.0).zoom, 0.0);
	}

	#[rstest]
	#[case(Some(16.0), 16.0)]
	#[case(Some(0.0), 14.0)]
	#[case(Some(f64::NAN), 14.0)]
	#[case(None, 14.0)]
	fn cluster_click(#[case] expansion_zoom: Option<f64>, #[case] zoom: f64) {
		let ease = cluster_click_camera([-43.18, -22.9], expansion_zoom);
		assert_eq!(ease.camera, Camera { center: [-43.18, -22.9], zoom });
		assert_eq!(ease.duration_ms, 500);
	}

	#[test]
	fn cluster_click_json() {
		assert_eq!(
			cluster_click_camera([-43.18, -22.9], Some(15.5)).to_json().stringify(),
			r#"{"center":[-43.18,-22.9],"duration":500,"zoom":15.5}"#
		);
	}
}
