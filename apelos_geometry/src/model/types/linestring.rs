use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use anyhow::{Result, ensure};
use apelos_core::json::JsonValue;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 2, "LineString must have at least two coordinates");
		Ok(())
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(Coordinates::to_json).collect::<Vec<_>>())
	}

	fn iter_coordinates(&self) -> impl Iterator<Item = &Coordinates> {
		self.0.iter()
	}

	fn contains_point(&self, _x: f64, _y: f64) -> bool {
		false
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verify() {
		assert!(LineStringGeometry::from(&[[0, 0], [1, 1]]).verify().is_ok());
		assert!(LineStringGeometry::from(&[[0, 0]]).verify().is_err());
	}

	#[test]
	fn bounds() {
		let line = LineStringGeometry::from(vec![[-43.3, -22.8], [-43.1, -23.0]]);
		assert_eq!(line.compute_bounds().unwrap().as_tuple(), (-43.3, -23.0, -43.1, -22.8));
		assert_eq!(LineStringGeometry::new().compute_bounds(), None);
	}

	#[test]
	fn composite() {
		assert!(LineStringGeometry::new().is_empty());
		let line = LineStringGeometry::from(vec![[1.0, 2.0], [3.0, 4.0]]);
		assert_eq!(line.len(), 2);
		assert_eq!(line.first(), Some(&Coordinates::new(1.0, 2.0)));
		assert_eq!(line.last(), Some(&Coordinates::new(3.0, 4.0)));
		assert_eq!(format!("{line:?}"), "[[1.0, 2.0], [3.0, 4.0]]");
	}
}
