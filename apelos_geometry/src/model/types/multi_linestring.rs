use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, LineStringGeometry};
use anyhow::{Context, Result};
use apelos_core::json::JsonValue;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn verify(&self) -> Result<()> {
		for (index, line) in self.0.iter().enumerate() {
			line.verify().with_context(|| format!("in line {index}"))?;
		}
		Ok(())
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(LineStringGeometry::to_coord_json).collect::<Vec<_>>())
	}

	fn iter_coordinates(&self) -> impl Iterator<Item = &Coordinates> {
		self.0.iter().flat_map(LineStringGeometry::iter_coordinates)
	}

	fn contains_point(&self, _x: f64, _y: f64) -> bool {
		false
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);
