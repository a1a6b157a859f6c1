use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, PointGeometry};
use anyhow::Result;
use apelos_core::json::JsonValue;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> Result<()> {
		Ok(())
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(PointGeometry::to_coord_json).collect::<Vec<_>>())
	}

	fn iter_coordinates(&self) -> impl Iterator<Item = &Coordinates> {
		self.0.iter().map(|point| &point.0)
	}

	fn contains_point(&self, _x: f64, _y: f64) -> bool {
		false
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);
