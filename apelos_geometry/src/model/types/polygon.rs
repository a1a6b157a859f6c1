use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, RingGeometry};
use anyhow::{Context, Result, ensure};
use apelos_core::json::JsonValue;
use geo::Contains;
use std::fmt::Debug;

/// An outer ring followed by any number of holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// `None` for a polygon without rings.
	#[must_use]
	pub fn to_geo(&self) -> Option<geo::Polygon<f64>> {
		let (exterior, interiors) = self.0.split_first()?;
		Some(geo::Polygon::new(
			exterior.to_geo(),
			interiors.iter().map(RingGeometry::to_geo).collect(),
		))
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "Polygon must have at least one ring");
		for (index, ring) in self.0.iter().enumerate() {
			ring.verify().with_context(|| format!("in ring {index}"))?;
		}
		Ok(())
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(RingGeometry::to_coord_json).collect::<Vec<_>>())
	}

	fn iter_coordinates(&self) -> impl Iterator<Item = &Coordinates> {
		self.0.iter().flat_map(RingGeometry::iter_coordinates)
	}

	fn contains_point(&self, x: f64, y: f64) -> bool {
		self
			.to_geo()
			.is_some_and(|polygon| polygon.contains(&geo::Point::new(x, y)))
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);
