//! Parsing substrate and shared types for the apelos crates: a peekable byte
//! iterator, a small JSON model and the geographic bounding box.

pub mod byte_iterator;
pub mod json;

mod types;
pub use types::*;
