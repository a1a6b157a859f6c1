//! # apelos
//!
//! Tooling for the GeoJSON layers of the Rio de Janeiro appeals map ("apelos").
//!
//! - [`config`]: the viewer configuration (basemap, fit options, layers), read from YAML.
//! - [`viewer`]: the map viewer's logic without a browser: MapLibre style layers,
//!   layer visibility, the hover filter, popup markup, fitting the view to the data
//!   and the draggable layer control.
//!
//! GeoJSON reading, geometries and the extent calculator live in
//! [`apelos_geometry`], re-exported as [`geometry`].
//!
//! ```
//! use apelos::{geometry::GeoCollection, viewer::{FitOptions, plan_fit}};
//!
//! let collection = GeoCollection::from_json_str(
//! 	r#"{"type":"FeatureCollection","features":[
//! 		{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[-43.2,-22.9]}},
//! 		{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[-43.1,-23.0]}}
//! 	]}"#,
//! )
//! .unwrap();
//! let plan = plan_fit(&collection.features, &FitOptions::default()).unwrap();
//! assert_eq!(plan.bounds.as_tuple(), (-43.2, -23.0, -43.1, -22.9));
//! ```

pub mod config;
pub mod viewer;

pub use apelos_core as core;
pub use apelos_geometry as geometry;
