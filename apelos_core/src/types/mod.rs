//! Shared value types.

mod geo_bbox;
pub use geo_bbox::*;
