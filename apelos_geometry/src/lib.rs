//! GeoJSON features and geometries, the extent calculator and point-in-area tests.
//!
//! Features are read from GeoJSON with [`geojson::read_geojson`] or
//! [`geojson::parse_geojson`], KML placemarks with [`kml::read_kml`].
//! [`compute_extent`] folds every coordinate of a feature
//! sequence into one [`GeoBBox`](apelos_core::GeoBBox).

pub mod extent;
pub mod model;
pub mod geojson;
pub mod kml;

pub use extent::compute_extent;
pub use model::*;
