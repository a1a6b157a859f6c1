//! The logic of the browser map viewer, free of any DOM or map widget.
//!
//! Each module produces what the viewer hands to MapLibre or to the page: style
//! layer objects, filter expressions, popup markup and options, camera targets,
//! the stock map controls and the state of the draggable layer control.

pub mod content;
pub mod control;
pub mod hover;
pub mod layers;
pub mod loader;
pub mod viewport;

pub use content::{FeatureContent, PopupOptions};
pub use control::{DragState, LayerControl, MapControl, ScreenPoint, ScreenRect, ScreenSize};
pub use hover::HoverFilter;
pub use layers::{LayerVisibility, VisibilityChange};
pub use loader::{LoadedLayer, all_features, load_layers};
pub use viewport::{Camera, EaseTo, FitOptions, FitPlan, cluster_click_camera, plan_fit};
