use super::Coordinates;
use anyhow::Result;
use apelos_core::{GeoBBox, json::JsonValue};
use std::fmt::Debug;

/// Shared interface of all geometry primitives.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Checks structural validity, e.g. that rings are closed.
	fn verify(&self) -> Result<()>;

	/// The GeoJSON `coordinates` member of this geometry.
	fn to_coord_json(&self) -> JsonValue;

	/// Every position of the geometry, in document order. Closing points of rings are
	/// visited twice.
	fn iter_coordinates(&self) -> impl Iterator<Item = &Coordinates>;

	/// True if the point lies strictly inside the area of the geometry. Points and
	/// lines have no area and never contain anything.
	fn contains_point(&self, x: f64, y: f64) -> bool;

	/// Bounding box of all positions, `None` for empty geometries.
	fn compute_bounds(&self) -> Option<GeoBBox> {
		let mut coordinates = self.iter_coordinates();
		let first = coordinates.next()?;
		let mut bbox = GeoBBox::from_point(first.x(), first.y());
		for c in coordinates {
			bbox.include(c.x(), c.y());
		}
		Some(bbox)
	}
}

/// Geometries that are a list of simpler parts, e.g. a polygon made of rings.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
