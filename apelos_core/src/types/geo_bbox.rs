use crate::json::JsonValue;
use anyhow::{Context, Result, ensure};
use std::fmt::Debug;

const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;
const MAX_MERCATOR_LNG: f64 = 180.0;
const RADIUS: f64 = 6_378_137.0; // meters

/// A longitude/latitude rectangle in WGS84 degrees.
///
/// A box always satisfies `lng_min <= lng_max` and `lat_min <= lat_max`. Boxes are
/// either validated on construction ([`GeoBBox::new`]) or grown from real
/// coordinates ([`GeoBBox::from_point`] and [`GeoBBox::include`]), which keeps the
/// ordering intact without clamping the values to the WGS84 range.
///
/// ```
/// use apelos_core::GeoBBox;
///
/// let mut bbox = GeoBBox::from_point(-43.2, -22.9);
/// bbox.include(-43.3, -22.8);
/// bbox.include(-43.1, -23.0);
/// assert_eq!(bbox.as_tuple(), (-43.3, -23.0, -43.1, -22.8));
/// ```
#[derive(Clone, Copy, PartialEq)]
#[allow(clippy::manual_non_exhaustive)]
pub struct GeoBBox {
	pub lng_min: f64,
	pub lat_min: f64,
	pub lng_max: f64,
	pub lat_max: f64,
	phantom: (),
}

impl GeoBBox {
	/// Builds a box from `west, south, east, north`, rejecting values outside WGS84
	/// and inverted axes.
	pub fn new(lng_min: f64, lat_min: f64, lng_max: f64, lat_max: f64) -> Result<GeoBBox> {
		GeoBBox {
			lng_min,
			lat_min,
			lng_max,
			lat_max,
			phantom: (),
		}
		.checked()
	}

	/// The degenerate box covering a single position.
	#[must_use]
	pub fn from_point(lng: f64, lat: f64) -> GeoBBox {
		GeoBBox {
			lng_min: lng,
			lat_min: lat,
			lng_max: lng,
			lat_max: lat,
			phantom: (),
		}
	}

	/// Grows the box so it covers the position.
	pub fn include(&mut self, lng: f64, lat: f64) {
		self.lng_min = self.lng_min.min(lng);
		self.lat_min = self.lat_min.min(lat);
		self.lng_max = self.lng_max.max(lng);
		self.lat_max = self.lat_max.max(lat);
	}

	/// Grows the box so it covers `other`.
	pub fn extend(&mut self, other: &GeoBBox) {
		self.lng_min = self.lng_min.min(other.lng_min);
		self.lat_min = self.lat_min.min(other.lat_min);
		self.lng_max = self.lng_max.max(other.lng_max);
		self.lat_max = self.lat_max.max(other.lat_max);
	}

	#[must_use]
	pub fn extended(mut self, other: &GeoBBox) -> GeoBBox {
		self.extend(other);
		self
	}

	/// `[west, south, east, north]`
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.lng_min, self.lat_min, self.lng_max, self.lat_max]
	}

	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.lng_min, self.lat_min, self.lng_max, self.lat_max)
	}

	/// `[[west, south], [east, north]]`, the corner form map widgets take for fitting.
	#[must_use]
	pub fn as_corners(&self) -> [[f64; 2]; 2] {
		[[self.lng_min, self.lat_min], [self.lng_max, self.lat_max]]
	}

	#[must_use]
	pub fn as_string_json(&self) -> String {
		format!(
			"[{},{},{},{}]",
			self.lng_min, self.lat_min, self.lng_max, self.lat_max
		)
	}

	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		JsonValue::from(self.as_array())
	}

	/// Midpoint in degrees.
	#[must_use]
	pub fn center(&self) -> (f64, f64) {
		(
			f64::midpoint(self.lng_min, self.lng_max),
			f64::midpoint(self.lat_min, self.lat_max),
		)
	}

	#[must_use]
	pub fn contains(&self, lng: f64, lat: f64) -> bool {
		(self.lng_min..=self.lng_max).contains(&lng) && (self.lat_min..=self.lat_max).contains(&lat)
	}

	fn checked(self) -> Result<Self> {
		ensure!(self.lng_min >= -180., "lng_min ({}) must be >= -180", self.lng_min);
		ensure!(self.lat_min >= -90., "lat_min ({}) must be >= -90", self.lat_min);
		ensure!(self.lng_max <= 180., "lng_max ({}) must be <= 180", self.lng_max);
		ensure!(self.lat_max <= 90., "lat_max ({}) must be <= 90", self.lat_max);
		ensure!(
			self.lng_min <= self.lng_max,
			"lng_min ({}) must be <= lng_max ({})",
			self.lng_min,
			self.lng_max
		);
		ensure!(
			self.lat_min <= self.lat_max,
			"lat_min ({}) must be <= lat_max ({})",
			self.lat_min,
			self.lat_max
		);
		Ok(self)
	}

	/// Projects the box to Web Mercator meters (EPSG:3857), clamping latitudes to the
	/// projection's domain first.
	#[must_use]
	pub fn to_mercator(&self) -> [f64; 4] {
		[
			lng_to_mercator_x(self.lng_min),
			lat_to_mercator_y(self.lat_min),
			lng_to_mercator_x(self.lng_max),
			lat_to_mercator_y(self.lat_max),
		]
	}
}

/// Web Mercator x in meters.
#[must_use]
pub fn lng_to_mercator_x(lng: f64) -> f64 {
	RADIUS * lng.clamp(-MAX_MERCATOR_LNG, MAX_MERCATOR_LNG).to_radians()
}

/// Web Mercator y in meters.
#[must_use]
pub fn lat_to_mercator_y(lat: f64) -> f64 {
	let phi = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
	RADIUS * (std::f64::consts::FRAC_PI_4 + phi / 2.0).tan().ln()
}

/// Inverse of [`lat_to_mercator_y`].
#[must_use]
pub fn mercator_y_to_lat(y: f64) -> f64 {
	(2.0 * (y / RADIUS).exp().atan() - std::f64::consts::FRAC_PI_2).to_degrees()
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.lng_min, self.lat_min, self.lng_max, self.lat_max
		)
	}
}

impl TryFrom<Vec<f64>> for GeoBBox {
	type Error = anyhow::Error;

	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"a bbox needs 4 values (lng_min, lat_min, lng_max, lat_max), found {}",
			input.len()
		);
		GeoBBox::new(input[0], input[1], input[2], input[3])
	}
}

impl TryFrom<&str> for GeoBBox {
	type Error = anyhow::Error;

	/// Parses `"west,south,east,north"`, with optional brackets and spaces.
	fn try_from(input: &str) -> Result<Self> {
		let values = input
			.trim()
			.trim_start_matches('[')
			.trim_end_matches(']')
			.split(',')
			.map(|part| part.trim().parse::<f64>())
			.collect::<std::result::Result<Vec<f64>, _>>()
			.with_context(|| format!("invalid number in bbox \"{input}\""))?;
		GeoBBox::try_from(values).with_context(|| format!("invalid bbox \"{input}\""))
	}
}
