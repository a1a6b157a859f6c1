//! Byte-level iteration over a reader plus the JSON token helpers built on top of it.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
