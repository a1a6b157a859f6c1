pub mod clean;
pub mod convert;
pub mod extent;
pub mod locate;
pub mod popup;
pub mod style;
