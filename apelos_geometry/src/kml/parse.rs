use crate::{Coordinates, GeoFeature, Geometry};
use anyhow::{Context, Result, anyhow, bail, ensure};
use log::warn;

/// A KML element below a `Placemark`, with its text and child elements.
#[derive(Debug, Default, PartialEq)]
pub(super) struct KmlElement {
	pub name: String,
	pub attributes: Vec<(String, String)>,
	pub text: String,
	pub children: Vec<KmlElement>,
}

impl KmlElement {
	pub fn new(name: String, attributes: Vec<(String, String)>) -> Self {
		Self {
			name,
			attributes,
			..Self::default()
		}
	}

	fn attribute(&self, key: &str) -> Option<&str> {
		self
			.attributes
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, value)| value.as_str())
	}

	fn child(&self, name: &str) -> Option<&KmlElement> {
		self.children.iter().find(|child| child.name == name)
	}

	fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a KmlElement> {
		self.children.iter().filter(move |child| child.name == name)
	}

	fn trimmed_text(&self) -> &str {
		self.text.trim()
	}
}

fn is_geometry(name: &str) -> bool {
	matches!(
		name,
		"Point" | "LineString" | "LinearRing" | "Polygon" | "MultiGeometry"
	)
}

/// Turns a `Placemark` element into a feature.
///
/// `name` and `description` become the `Name` and `Description` properties,
/// `ExtendedData` fields are added as string properties and the `id` attribute
/// becomes the feature id. A placemark whose geometry cannot be read keeps its
/// properties and loses the geometry, with a warning.
pub(super) fn parse_placemark(placemark: &KmlElement) -> GeoFeature {
	let mut feature = GeoFeature::without_geometry();

	if let Some(id) = placemark.attribute("id") {
		feature.set_id(id);
	}

	if let Some(extended) = placemark.child("ExtendedData") {
		for data in extended.children_named("Data") {
			if let Some(key) = data.attribute("name") {
				let value = data.child("value").map_or("", KmlElement::trimmed_text);
				feature.set_property(key, value);
			}
		}
		for schema in extended.children_named("SchemaData") {
			for data in schema.children_named("SimpleData") {
				if let Some(key) = data.attribute("name") {
					feature.set_property(key, data.trimmed_text());
				}
			}
		}
	}

	if let Some(name) = placemark.child("name") {
		feature.set_property("Name", name.trimmed_text());
	}
	if let Some(description) = placemark.child("description") {
		feature.set_property("Description", description.trimmed_text());
	}

	feature.geometry = placemark
		.children
		.iter()
		.find(|child| is_geometry(&child.name))
		.and_then(|element| match parse_shape(element) {
			Ok(shape) => Some(shape.into_geometry()),
			Err(error) => {
				warn!("ignoring {} geometry: {error:#}", element.name);
				None
			}
		});

	feature
}

/// A KML geometry before it is mapped onto the GeoJSON model.
#[derive(Debug, PartialEq)]
enum Shape {
	Point(Coordinates),
	Line(Vec<Coordinates>),
	Polygon(Vec<Vec<Coordinates>>),
	Multi(Vec<Shape>),
}

impl Shape {
	fn into_point(self) -> Option<Coordinates> {
		match self {
			Shape::Point(position) => Some(position),
			_ => None,
		}
	}

	fn into_line(self) -> Option<Vec<Coordinates>> {
		match self {
			Shape::Line(line) => Some(line),
			_ => None,
		}
	}

	fn into_polygon(self) -> Option<Vec<Vec<Coordinates>>> {
		match self {
			Shape::Polygon(rings) => Some(rings),
			_ => None,
		}
	}

	/// `MultiGeometry` becomes the matching multi geometry when all parts have the
	/// same kind, and an unknown `GeometryCollection` otherwise.
	fn into_geometry(self) -> Geometry {
		match self {
			Shape::Point(position) => Geometry::new_point(position),
			Shape::Line(line) => Geometry::new_line_string(line),
			Shape::Polygon(rings) => Geometry::new_polygon(rings),
			Shape::Multi(parts) => {
				if parts.is_empty() {
					Geometry::Unknown(String::from("GeometryCollection"))
				} else if parts.iter().all(|part| matches!(part, Shape::Point(_))) {
					Geometry::new_multi_point(parts.into_iter().filter_map(Shape::into_point).collect::<Vec<_>>())
				} else if parts.iter().all(|part| matches!(part, Shape::Line(_))) {
					Geometry::new_multi_line_string(parts.into_iter().filter_map(Shape::into_line).collect::<Vec<_>>())
				} else if parts.iter().all(|part| matches!(part, Shape::Polygon(_))) {
					Geometry::new_multi_polygon(parts.into_iter().filter_map(Shape::into_polygon).collect::<Vec<_>>())
				} else {
					Geometry::Unknown(String::from("GeometryCollection"))
				}
			}
		}
	}
}

fn parse_shape(element: &KmlElement) -> Result<Shape> {
	match element.name.as_str() {
		"Point" => {
			let mut positions = parse_coordinates(element)?;
			ensure!(
				positions.len() == 1,
				"Point must have exactly one position, found {}",
				positions.len()
			);
			Ok(Shape::Point(positions.remove(0)))
		}
		"LineString" | "LinearRing" => Ok(Shape::Line(parse_coordinates(element)?)),
		"Polygon" => {
			let outer = element
				.child("outerBoundaryIs")
				.and_then(|boundary| boundary.child("LinearRing"))
				.ok_or_else(|| anyhow!("Polygon must have an outer boundary"))?;
			let mut rings = vec![parse_coordinates(outer).context("in outer boundary")?];
			for (index, boundary) in element.children_named("innerBoundaryIs").enumerate() {
				for ring in boundary.children_named("LinearRing") {
					rings.push(parse_coordinates(ring).with_context(|| format!("in inner boundary {index}"))?);
				}
			}
			Ok(Shape::Polygon(rings))
		}
		"MultiGeometry" => element
			.children
			.iter()
			.filter(|child| is_geometry(&child.name))
			.map(parse_shape)
			.collect::<Result<Vec<_>>>()
			.map(Shape::Multi),
		other => bail!("unknown geometry '{other}'"),
	}
}

/// Reads the `coordinates` child: whitespace separated `lng,lat[,alt]` tuples.
fn parse_coordinates(element: &KmlElement) -> Result<Vec<Coordinates>> {
	let text = element
		.child("coordinates")
		.ok_or_else(|| anyhow!("{} must have coordinates", element.name))?
		.trimmed_text();
	text.split_whitespace().map(parse_position).collect()
}

/// One `lng,lat[,alt]` tuple; the altitude is ignored.
fn parse_position(tuple: &str) -> Result<Coordinates> {
	let mut values = tuple.split(',').map(str::trim);
	let (Some(lng), Some(lat)) = (values.next(), values.next()) else {
		bail!("position '{tuple}' must have a longitude and a latitude");
	};
	let lng = lng
		.parse::<f64>()
		.with_context(|| format!("invalid longitude in position '{tuple}'"))?;
	let lat = lat
		.parse::<f64>()
		.with_context(|| format!("invalid latitude in position '{tuple}'"))?;
	Ok(Coordinates::new(lng, lat))
}
