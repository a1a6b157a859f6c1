//! The extent calculator: the smallest longitude/latitude rectangle covering every
//! coordinate of a sequence of features.
//!
//! The result is purely geometric. It adds no padding, does no rounding and does
//! not clamp to the valid WGS84 range; viewport policy such as padding or a maximum
//! zoom belongs to the caller.

use crate::GeoFeature;
use apelos_core::GeoBBox;

/// Folds every coordinate pair of every feature into one bounding box.
///
/// Features without a geometry and geometries of unknown kinds contribute nothing.
/// Returns `None` when no coordinate pair was visited at all, e.g. for an empty
/// input. The result does not depend on the order of the features and repeated
/// coordinates do not change it.
///
/// ```
/// use apelos_geometry::{GeoFeature, Geometry, compute_extent};
///
/// let features = vec![
/// 	GeoFeature::new(Geometry::new_point([-43.2, -22.9])),
/// 	GeoFeature::new(Geometry::new_line_string(vec![[-43.3, -22.8], [-43.1, -23.0]])),
/// 	GeoFeature::without_geometry(),
/// ];
/// let bbox = compute_extent(&features).unwrap();
/// assert_eq!(bbox.as_tuple(), (-43.3, -23.0, -43.1, -22.8));
/// assert!(compute_extent(&[]).is_none());
/// ```
pub fn compute_extent(features: &[GeoFeature]) -> Option<GeoBBox> {
	features
		.iter()
		.filter_map(|feature| feature.geometry.as_ref())
		.flat_map(|geometry| geometry.iter_coordinates())
		.fold(None, |bbox: Option<GeoBBox>, c| match bbox {
			None => Some(GeoBBox::from_point(c.x(), c.y())),
			Some(mut bbox) => {
				bbox.include(c.x(), c.y());
				Some(bbox)
			}
		})
}
