use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, PolygonGeometry};
use anyhow::{Context, Result};
use apelos_core::json::JsonValue;
use std::fmt::Debug;

/// Several polygons; neighbourhoods split by water are stored this way.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> Result<()> {
		for (index, polygon) in self.0.iter().enumerate() {
			polygon.verify().with_context(|| format!("in polygon {index}"))?;
		}
		Ok(())
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(PolygonGeometry::to_coord_json).collect::<Vec<_>>())
	}

	fn iter_coordinates(&self) -> impl Iterator<Item = &Coordinates> {
		self.0.iter().flat_map(PolygonGeometry::iter_coordinates)
	}

	fn contains_point(&self, x: f64, y: f64) -> bool {
		self.0.iter().any(|polygon| polygon.contains_point(x, y))
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	fn two_squares() -> MultiPolygonGeometry {
		MultiPolygonGeometry::from(&[
			[[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]],
			[[[5, 5], [7, 5], [7, 8], [5, 8], [5, 5]]],
		])
	}

	#[test]
	fn union_of_extents() {
		assert_eq!(two_squares().compute_bounds().unwrap().as_tuple(), (0.0, 0.0, 7.0, 8.0));
	}

	#[test]
	fn contains_in_any_part() {
		let multi = two_squares();
		assert!(multi.contains_point(0.5, 0.5));
		assert!(multi.contains_point(6.0, 6.0));
		assert!(!multi.contains_point(3.0, 3.0));
	}

	#[test]
	fn verify_names_the_part() {
		let multi = MultiPolygonGeometry::from(vec![PolygonGeometry::new()]);
		assert_eq!(
			format!("{:#}", multi.verify().unwrap_err()),
			"in polygon 0: Polygon must have at least one ring"
		);
	}
}
