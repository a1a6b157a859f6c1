//! Reading KML documents, as exported by Google My Maps and similar tools, into
//! GeoJSON-shaped features.

mod parse;
mod read;

pub use read::*;
