use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use anyhow::{Result, ensure};
use apelos_core::json::JsonValue;
use geo::Contains;
use std::fmt::Debug;

/// A closed loop of positions; the outline or a hole of a polygon.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	#[must_use]
	pub fn to_geo(&self) -> geo::LineString<f64> {
		geo::LineString::new(self.0.iter().map(Coordinates::to_geo).collect())
	}
}

impl GeometryTrait for RingGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "Ring must have at least 4 points");
		ensure!(self.0.first() == self.0.last(), "Ring must be closed");
		Ok(())
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(Coordinates::to_json).collect::<Vec<_>>())
	}

	fn iter_coordinates(&self) -> impl Iterator<Item = &Coordinates> {
		self.0.iter()
	}

	fn contains_point(&self, x: f64, y: f64) -> bool {
		if self.0.len() < 3 {
			return false;
		}
		geo::Polygon::new(self.to_geo(), vec![]).contains(&geo::Point::new(x, y))
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn square() -> RingGeometry {
		RingGeometry::from(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]])
	}

	#[test]
	fn verify() {
		assert!(square().verify().is_ok());
		assert!(RingGeometry::from(&[[0, 0], [1, 1], [0, 0]]).verify().is_err());
		assert!(RingGeometry::from(&[[0, 0], [1, 0], [1, 1], [0, 1]]).verify().is_err());
	}

	#[rstest]
	#[case(5.0, 5.0, true)]
	#[case(0.5, 9.5, true)]
	#[case(-1.0, 5.0, false)]
	#[case(11.0, 5.0, false)]
	#[case(10.0, 5.0, false)]
	#[case(0.0, 0.0, false)]
	fn containment_excludes_boundary(#[case] x: f64, #[case] y: f64, #[case] inside: bool) {
		assert_eq!(square().contains_point(x, y), inside);
	}

	#[test]
	fn closing_point_is_visited_twice() {
		assert_eq!(square().iter_coordinates().count(), 5);
	}
}
