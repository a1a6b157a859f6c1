//! Reading GeoJSON layer files.
//!
//! The parser streams through [`ByteIterator`](apelos_core::byte_iterator::ByteIterator)
//! and is lenient where layer files in the wild tend to be sloppy: `null` geometries
//! and properties, unknown geometry kinds and third coordinate values are accepted.
//! Broken JSON is still an error.

mod parse;
mod read;

pub use parse::*;
pub use read::*;
