use crate::{Coordinates, GeoCollection, GeoFeature, GeoProperties, GeoValue, Geometry};
use anyhow::{Context, Result, anyhow, bail};
use apelos_core::{
	byte_iterator::{
		ByteIterator, parse_array_entries, parse_number_as, parse_number_as_string, parse_object_entries,
		parse_quoted_json_string, parse_tag,
	},
	json::{JsonValue, parse_json_iter},
};
use log::warn;
use std::io::Cursor;

/// Parses a GeoJSON `FeatureCollection` from a string.
pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	super::read_geojson(Cursor::new(json))
}

/// Parses a `FeatureCollection` object at the cursor. Members other than `type` and
/// `features` (e.g. `name`, `crs`, `bbox`) are skipped.
pub fn parse_geojson_collection(iter: &mut ByteIterator) -> Result<GeoCollection> {
	let mut features = Vec::new();
	let mut object_type: Option<String> = None;

	parse_object_entries(iter, |key, iter| {
		match key.as_str() {
			"type" => object_type = Some(parse_quoted_json_string(iter)?),
			"features" => {
				let mut index = 0;
				features = parse_array_entries(iter, |iter| {
					let feature = parse_geojson_feature(iter).with_context(|| format!("in feature {index}"));
					index += 1;
					feature
				})?;
			}
			_ => {
				parse_json_iter(iter)?;
			}
		}
		Ok(())
	})?;

	check_type(object_type, "FeatureCollection")?;
	Ok(GeoCollection { features })
}

fn check_type(object_type: Option<String>, name: &str) -> Result<()> {
	let object_type = object_type.ok_or_else(|| anyhow!("{name} must have a type"))?;
	if object_type != name {
		bail!("type must be '{name}', found '{object_type}'")
	}
	Ok(())
}

/// Parses a single `Feature` object at the cursor.
///
/// A `null` or missing geometry gives a feature without geometry, a `null` or missing
/// `properties` member gives empty properties.
pub fn parse_geojson_feature(iter: &mut ByteIterator) -> Result<GeoFeature> {
	let mut object_type: Option<String> = None;
	let mut id: Option<GeoValue> = None;
	let mut geometry: Option<Geometry> = None;
	let mut properties: Option<GeoProperties> = None;

	parse_object_entries(iter, |key, iter| {
		match key.as_str() {
			"type" => object_type = Some(parse_quoted_json_string(iter)?),
			"id" => id = parse_geojson_id(iter)?,
			"geometry" => geometry = parse_geojson_geometry(iter)?,
			"properties" => properties = parse_geojson_properties(iter)?,
			_ => {
				parse_json_iter(iter)?;
			}
		}
		Ok(())
	})?;

	check_type(object_type, "Feature")?;

	Ok(GeoFeature {
		id,
		geometry,
		properties: properties.unwrap_or_default(),
	})
}

/// Consumes `null` if it is next, reporting whether it did.
fn parse_null(iter: &mut ByteIterator) -> Result<bool> {
	iter.skip_whitespace();
	if iter.peek() == Some(b'n') {
		parse_tag(iter, "null")?;
		return Ok(true);
	}
	Ok(false)
}

fn parse_geojson_id(iter: &mut ByteIterator) -> Result<Option<GeoValue>> {
	if parse_null(iter)? {
		return Ok(None);
	}
	match iter.expect_peeked_byte()? {
		b'"' => parse_quoted_json_string(iter).map(|s| Some(GeoValue::from(s))),
		b'-' | b'0'..=b'9' => parse_geojson_number(iter).map(Some),
		c => Err(iter.format_error(&format!(
			"expected a string or number as id, found character '{}'",
			c as char
		))),
	}
}

fn parse_geojson_number(iter: &mut ByteIterator) -> Result<GeoValue> {
	let number = parse_number_as_string(iter)?;
	let integer = if number.contains(['.', 'e', 'E']) {
		None
	} else if number.starts_with('-') {
		number.parse::<i64>().ok().map(GeoValue::Int)
	} else {
		number.parse::<u64>().ok().map(GeoValue::UInt)
	};
	match integer {
		Some(value) => Ok(value),
		None => number
			.parse::<f64>()
			.map(GeoValue::Double)
			.map_err(|_| iter.format_error("invalid number")),
	}
}

fn parse_geojson_value(iter: &mut ByteIterator) -> Result<GeoValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'"' => parse_quoted_json_string(iter).map(GeoValue::from),
		b'-' | b'0'..=b'9' => parse_geojson_number(iter),
		b't' => parse_tag(iter, "true").map(|()| GeoValue::Bool(true)),
		b'f' => parse_tag(iter, "false").map(|()| GeoValue::Bool(false)),
		b'n' => parse_tag(iter, "null").map(|()| GeoValue::Null),
		_ => parse_json_iter(iter).map(|json| GeoValue::from(&json)),
	}
}

fn parse_geojson_properties(iter: &mut ByteIterator) -> Result<Option<GeoProperties>> {
	if parse_null(iter)? {
		return Ok(None);
	}
	let mut list: Vec<(String, GeoValue)> = Vec::new();
	parse_object_entries(iter, |key, iter| {
		list.push((key, parse_geojson_value(iter)?));
		Ok(())
	})?;
	Ok(Some(GeoProperties::from_iter(list)))
}

fn parse_geojson_geometry(iter: &mut ByteIterator) -> Result<Option<Geometry>> {
	if parse_null(iter)? {
		return Ok(None);
	}

	let mut geometry_type: Option<String> = None;
	let mut coordinates: Option<RawCoordinates> = None;

	parse_object_entries(iter, |key, iter| {
		match key.as_str() {
			"type" => geometry_type = Some(parse_quoted_json_string(iter)?),
			"coordinates" => coordinates = Some(parse_raw_coordinates(iter)?),
			_ => {
				parse_json_iter(iter)?;
			}
		}
		Ok(())
	})?;

	let geometry_type = geometry_type.ok_or_else(|| anyhow!("geometry must have a type"))?;
	Ok(build_geometry(geometry_type, coordinates.as_ref()))
}

/// Turns a parsed `type` and `coordinates` pair into a geometry.
///
/// Unknown types become [`Geometry::Unknown`]. A known type whose coordinates are
/// missing or nested to the wrong depth is dropped with a warning, so one broken
/// feature does not make a whole layer unreadable.
fn build_geometry(geometry_type: String, coordinates: Option<&RawCoordinates>) -> Option<Geometry> {
	let geometry = match geometry_type.as_str() {
		"Point" => coordinates.and_then(RawCoordinates::to_c0).map(Geometry::new_point),
		"LineString" => coordinates.and_then(RawCoordinates::to_c1).map(Geometry::new_line_string),
		"Polygon" => coordinates.and_then(RawCoordinates::to_c2).map(Geometry::new_polygon),
		"MultiPoint" => coordinates.and_then(RawCoordinates::to_c1).map(Geometry::new_multi_point),
		"MultiLineString" => coordinates
			.and_then(RawCoordinates::to_c2)
			.map(Geometry::new_multi_line_string),
		"MultiPolygon" => coordinates.and_then(RawCoordinates::to_c3).map(Geometry::new_multi_polygon),
		_ => return Some(Geometry::Unknown(geometry_type)),
	};
	if geometry.is_none() {
		warn!("ignoring {geometry_type} geometry with missing or malformed coordinates");
	}
	geometry
}

/// The `coordinates` member before its nesting depth is checked against the type.
enum RawCoordinates {
	Number(f64),
	List(Vec<RawCoordinates>),
	Other,
}

impl RawCoordinates {
	fn as_list(&self) -> Option<&Vec<RawCoordinates>> {
		match self {
			RawCoordinates::List(list) => Some(list),
			_ => None,
		}
	}

	/// A position: at least two numbers; altitude and further values are ignored.
	fn to_c0(&self) -> Option<Coordinates> {
		match self.as_list()?.as_slice() {
			[RawCoordinates::Number(x), RawCoordinates::Number(y), ..] => Some(Coordinates::new(*x, *y)),
			_ => None,
		}
	}

	fn to_c1(&self) -> Option<Vec<Coordinates>> {
		self.as_list()?.iter().map(RawCoordinates::to_c0).collect()
	}

	fn to_c2(&self) -> Option<Vec<Vec<Coordinates>>> {
		self.as_list()?.iter().map(RawCoordinates::to_c1).collect()
	}

	fn to_c3(&self) -> Option<Vec<Vec<Vec<Coordinates>>>> {
		self.as_list()?.iter().map(RawCoordinates::to_c2).collect()
	}
}

fn parse_raw_coordinates(iter: &mut ByteIterator) -> Result<RawCoordinates> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => parse_array_entries(iter, parse_raw_coordinates).map(RawCoordinates::List),
		b'-' | b'0'..=b'9' => parse_number_as::<f64>(iter).map(RawCoordinates::Number),
		_ => parse_json_iter(iter).map(|value| match value {
			JsonValue::Number(n) => RawCoordinates::Number(n),
			_ => RawCoordinates::Other,
		}),
	}
}
