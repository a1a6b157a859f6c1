use super::*;
use apelos_core::json::{JsonObject, JsonValue};
use std::fmt::Debug;

/// One GeoJSON geometry.
///
/// Kinds this crate does not model (e.g. `GeometryCollection`) are kept as
/// [`Geometry::Unknown`] with their type name. They carry no coordinates, so they
/// never contribute to an extent and never contain a point.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	Unknown(String),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}

	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}

	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}

	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}

	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}

	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	/// The GeoJSON `type` of this geometry.
	#[must_use]
	pub fn type_name(&self) -> &str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::Unknown(name) => name,
		}
	}

	/// Flattens the geometry into its positions, in document order.
	///
	/// Lines, rings and polygons are walked part by part; closing points of rings
	/// are not deduplicated. Unknown kinds yield nothing.
	pub fn iter_coordinates(&self) -> Box<dyn Iterator<Item = &Coordinates> + '_> {
		match self {
			Geometry::Point(g) => Box::new(g.iter_coordinates()),
			Geometry::LineString(g) => Box::new(g.iter_coordinates()),
			Geometry::Polygon(g) => Box::new(g.iter_coordinates()),
			Geometry::MultiPoint(g) => Box::new(g.iter_coordinates()),
			Geometry::MultiLineString(g) => Box::new(g.iter_coordinates()),
			Geometry::MultiPolygon(g) => Box::new(g.iter_coordinates()),
			Geometry::Unknown(_) => Box::new(std::iter::empty()),
		}
	}

	/// True if the point lies strictly inside a (multi)polygon.
	#[must_use]
	pub fn contains_point(&self, x: f64, y: f64) -> bool {
		match self {
			Geometry::Polygon(g) => g.contains_point(x, y),
			Geometry::MultiPolygon(g) => g.contains_point(x, y),
			_ => false,
		}
	}

	pub fn verify(&self) -> anyhow::Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
			Geometry::Unknown(_) => Ok(()),
		}
	}

	/// The GeoJSON geometry object. Unknown kinds are written with their type only.
	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("type", self.type_name());
		let coordinates: Option<JsonValue> = match self {
			Geometry::Point(g) => Some(g.to_coord_json()),
			Geometry::LineString(g) => Some(g.to_coord_json()),
			Geometry::Polygon(g) => Some(g.to_coord_json()),
			Geometry::MultiPoint(g) => Some(g.to_coord_json()),
			Geometry::MultiLineString(g) => Some(g.to_coord_json()),
			Geometry::MultiPolygon(g) => Some(g.to_coord_json()),
			Geometry::Unknown(_) => None,
		};
		obj.set_optional("coordinates", coordinates);
		obj
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (type_name, inner): (&str, &dyn Debug) = match self {
			Geometry::Point(g) => ("Point", g),
			Geometry::LineString(g) => ("LineString", g),
			Geometry::Polygon(g) => ("Polygon", g),
			Geometry::MultiPoint(g) => ("MultiPoint", g),
			Geometry::MultiLineString(g) => ("MultiLineString", g),
			Geometry::MultiPolygon(g) => ("MultiPolygon", g),
			Geometry::Unknown(name) => ("Unknown", name),
		};
		f.debug_tuple(type_name).field(inner).finish()
	}
}
