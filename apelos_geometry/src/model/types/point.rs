use super::{Coordinates, GeometryTrait};
use anyhow::Result;
use apelos_core::json::JsonValue;
use std::fmt::Debug;

/// A single position. Point layers in the viewer are made of these.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
}

impl GeometryTrait for PointGeometry {
	fn verify(&self) -> Result<()> {
		Ok(())
	}

	fn to_coord_json(&self) -> JsonValue {
		self.0.to_json()
	}

	fn iter_coordinates(&self) -> impl Iterator<Item = &Coordinates> {
		std::iter::once(&self.0)
	}

	fn contains_point(&self, _x: f64, _y: f64) -> bool {
		false
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}
