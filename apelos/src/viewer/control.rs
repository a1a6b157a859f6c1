//! State of the floating layer control: collapsing and dragging it around the map.

use super::{LayerVisibility, content::escape_html};
use crate::config::LayerConfig;
use apelos_core::json::{JsonArray, JsonObject, JsonValue};

/// A position in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenPoint {
	pub x: f64,
	pub y: f64,
}

impl ScreenPoint {
	pub fn new(x: f64, y: f64) -> Self {
		ScreenPoint { x, y }
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenSize {
	pub width: f64,
	pub height: f64,
}

impl ScreenSize {
	pub fn new(width: f64, height: f64) -> Self {
		ScreenSize { width, height }
	}
}

/// A bounding client rect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenRect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl ScreenRect {
	pub fn size(&self) -> ScreenSize {
		ScreenSize::new(self.width, self.height)
	}
}

/// Pointer drag of the panel. Mouse and touch input feed the same three calls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
	/// Pointer position relative to the panel's top left corner, while dragging.
	offset: Option<ScreenPoint>,
}

impl DragState {
	pub fn is_dragging(&self) -> bool {
		self.offset.is_some()
	}

	/// Pointer pressed on the panel header.
	pub fn start(&mut self, pointer: ScreenPoint, panel: ScreenRect) {
		self.offset = Some(ScreenPoint::new(pointer.x - panel.left, pointer.y - panel.top));
	}

	/// Pointer moved. Returns the panel's new top left corner inside `container`,
	/// or `None` when no drag is in progress.
	///
	/// Each axis is clamped to `[0, container - panel]`; when the panel is larger
	/// than the container it sticks to 0.
	pub fn drag(&self, pointer: ScreenPoint, container: ScreenSize, panel: ScreenSize) -> Option<ScreenPoint> {
		let offset = self.offset?;
		let clamp = |value: f64, max: f64| value.min(max).max(0.0);
		Some(ScreenPoint::new(
			clamp(pointer.x - offset.x, container.width - panel.width),
			clamp(pointer.y - offset.y, container.height - panel.height),
		))
	}

	/// Pointer released. Returns whether a drag was in progress.
	pub fn end(&mut self) -> bool {
		self.offset.take().is_some()
	}
}

/// The stock MapLibre controls the viewer adds next to its own layer panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapControl {
	Navigation,
	Scale,
	Fullscreen,
}

impl MapControl {
	/// Every control, in the order they are added to the map.
	pub const ALL: [MapControl; 3] = [MapControl::Navigation, MapControl::Scale, MapControl::Fullscreen];

	/// The MapLibre class name.
	pub fn class_name(self) -> &'static str {
		match self {
			MapControl::Navigation => "NavigationControl",
			MapControl::Scale => "ScaleControl",
			MapControl::Fullscreen => "FullscreenControl",
		}
	}

	/// The corner passed to `map.addControl`.
	pub fn position(self) -> &'static str {
		match self {
			MapControl::Scale => "bottom-right",
			MapControl::Navigation | MapControl::Fullscreen => "top-right",
		}
	}

	pub fn to_json(self) -> JsonObject {
		let mut json = JsonObject::new();
		json.set("control", self.class_name());
		json.set("position", self.position());
		json
	}

	/// All controls as `[{"control": …, "position": …}, …]`.
	pub fn all_json() -> JsonArray {
		MapControl::ALL
			.into_iter()
			.map(|control| JsonValue::from(control.to_json()))
			.collect()
	}
}

/// The layer control panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerControl {
	collapsed: bool,
	/// Set once the panel was dragged; until then it sits at its CSS position.
	position: Option<ScreenPoint>,
	drag: DragState,
}

impl LayerControl {
	pub fn new() -> Self {
		LayerControl::default()
	}

	pub fn is_collapsed(&self) -> bool {
		self.collapsed
	}

	/// Collapses or expands the panel and returns the toggle button's new
	/// `aria-expanded` value.
	pub fn toggle_collapsed(&mut self) -> bool {
		self.collapsed = !self.collapsed;
		!self.collapsed
	}

	pub fn position(&self) -> Option<ScreenPoint> {
		self.position
	}

	pub fn is_dragging(&self) -> bool {
		self.drag.is_dragging()
	}

	pub fn start_drag(&mut self, pointer: ScreenPoint, panel: ScreenRect) {
		self.drag.start(pointer, panel);
	}

	/// Moves the panel while dragging and returns its new position.
	pub fn drag_to(&mut self, pointer: ScreenPoint, container: ScreenSize, panel: ScreenSize) -> Option<ScreenPoint> {
		let position = self.drag.drag(pointer, container, panel)?;
		self.position = Some(position);
		Some(position)
	}

	pub fn end_drag(&mut self) -> bool {
		self.drag.end()
	}

	/// The panel markup: one checkbox per layer and the fit button.
	pub fn html(&self, layers: &[LayerConfig], visibility: &LayerVisibility) -> String {
		let mut html = String::from("<div class=\"layer-control");
		if self.collapsed {
			html.push_str(" collapsed");
		}
		html.push('"');
		if let Some(position) = self.position {
			html.push_str(&format!(
				" style=\"left: {}px; top: {}px; right: auto\"",
				position.x, position.y
			));
		}
		html.push_str(">\n");
		html.push_str("  <div class=\"layer-control-header\">\n    <h3>Camadas do Mapa</h3>\n");
		html.push_str(&format!(
			"    <button class=\"layer-control-toggle\" aria-label=\"Toggle layer control\" aria-expanded=\"{}\"></button>\n  </div>\n",
			!self.collapsed
		));
		html.push_str("  <div class=\"layer-control-content\">\n    <div class=\"layer-group\">\n");
		for layer in layers {
			let checked = visibility.is_visible(&layer.id).unwrap_or(layer.visible);
			html.push_str(&format!(
				"      <label class=\"layer-item\"><input type=\"checkbox\" data-layer-id=\"{}\"{}><span class=\"layer-color\" style=\"background-color: {}\"></span><span class=\"layer-name\">{}</span></label>\n",
				escape_html(&layer.id),
				if checked { " checked" } else { "" },
				escape_html(&layer.color),
				escape_html(&layer.name)
			));
		}
		html.push_str("    </div>\n    <div class=\"layer-control-actions\">\n");
		html.push_str("      <button id=\"fit-to-features-btn\" class=\"fit-to-features-btn\" title=\"Ajustar zoom para mostrar todos os dados\">Ajustar Zoom</button>\n");
		html.push_str("    </div>\n  </div>\n</div>\n");
		html
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::ViewerConfig;
	use rstest::rstest;

	const CONTAINER: ScreenSize = ScreenSize {
		width: 1000.0,
		height: 800.0,
	};
	const PANEL: ScreenRect = ScreenRect {
		left: 700.0,
		top: 20.0,
		width: 250.0,
		height: 200.0,
	};

	#[test]
	fn map_controls() {
		assert_eq!(
			MapControl::all_json().stringify(),
			r#"[{"control":"NavigationControl","position":"top-right"},{"control":"ScaleControl","position":"bottom-right"},{"control":"FullscreenControl","position":"top-right"}]"#
		);
	}

	#[test]
	fn toggle_collapsed_reports_aria_expanded() {
		let mut control = LayerControl::new();
		assert!(!control.is_collapsed());
		assert!(!control.toggle_collapsed());
		assert!(control.is_collapsed());
		assert!(control.toggle_collapsed());
		assert!(!control.is_collapsed());
	}

	#[test]
	fn drag_keeps_pointer_offset() {
		let mut drag = DragState::default();
		drag.start(ScreenPoint::new(710.0, 30.0), PANEL);
		assert!(drag.is_dragging());
		assert_eq!(
			drag.drag(ScreenPoint::new(510.0, 130.0), CONTAINER, PANEL.size()),
			Some(ScreenPoint::new(500.0, 120.0))
		);
		assert!(drag.end());
		assert!(!drag.is_dragging());
		assert!(!drag.end());
	}

	#[rstest]
	#[case(-50.0, -50.0, 0.0, 0.0)]
	#[case(2000.0, 2000.0, 750.0, 600.0)]
	#[case(760.0, 610.0, 750.0, 600.0)]
	#[case(100.0, 700.0, 100.0, 600.0)]
	fn drag_is_clamped_to_container(#[case] x: f64, #[case] y: f64, #[case] left: f64, #[case] top: f64) {
		let mut drag = DragState::default();
		drag.start(ScreenPoint::new(PANEL.left, PANEL.top), PANEL);
		assert_eq!(
			drag.drag(ScreenPoint::new(x, y), CONTAINER, PANEL.size()),
			Some(ScreenPoint::new(left, top))
		);
	}

	#[test]
	fn panel_larger_than_container() {
		let mut drag = DragState::default();
		drag.start(ScreenPoint::new(0.0, 0.0), ScreenRect::default());
		let position = drag
			.drag(ScreenPoint::new(40.0, 40.0), ScreenSize::new(100.0, 100.0), ScreenSize::new(300.0, 300.0))
			.unwrap();
		assert_eq!(position, ScreenPoint::new(0.0, 0.0));
	}

	#[test]
	fn moves_without_drag_are_ignored() {
		let mut control = LayerControl::new();
		assert_eq!(control.drag_to(ScreenPoint::new(5.0, 5.0), CONTAINER, PANEL.size()), None);
		assert_eq!(control.position(), None);
		assert!(!control.end_drag());

		control.start_drag(ScreenPoint::new(710.0, 30.0), PANEL);
		assert!(control.is_dragging());
		control.drag_to(ScreenPoint::new(20.0, 20.0), CONTAINER, PANEL.size());
		assert!(control.end_drag());
		assert_eq!(control.position(), Some(ScreenPoint::new(10.0, 10.0)));
		assert_eq!(control.drag_to(ScreenPoint::new(500.0, 500.0), CONTAINER, PANEL.size()), None);
		assert_eq!(control.position(), Some(ScreenPoint::new(10.0, 10.0)));
	}

	#[test]
	fn panel_html() {
		let config = ViewerConfig::default();
		let mut visibility = LayerVisibility::new(&config.layers);
		let mut control = LayerControl::new();

		let html = control.html(&config.layers, &visibility);
		assert!(html.starts_with("<div class=\"layer-control\">\n"));
		assert!(html.contains("aria-expanded=\"true\""));
		assert!(html.contains("data-layer-id=\"apelos\" checked>"));
		assert!(html.contains("data-layer-id=\"filtro-bairros\"><span"));
		assert!(html.contains("<span class=\"layer-name\">Apelos (Appeals)</span>"));

		visibility.toggle("filtro-bairros", true);
		control.toggle_collapsed();
		control.start_drag(ScreenPoint::new(710.0, 30.0), PANEL);
		control.drag_to(ScreenPoint::new(20.0, 20.0), CONTAINER, PANEL.size());

		let html = control.html(&config.layers, &visibility);
		assert!(html.starts_with("<div class=\"layer-control collapsed\" style=\"left: 10px; top: 10px; right: auto\">"));
		assert!(html.contains("aria-expanded=\"false\""));
		assert!(html.contains("data-layer-id=\"filtro-bairros\" checked>"));
	}
}
