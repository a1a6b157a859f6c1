//! Markup for the popup and the sidebar of a clicked feature.

pub mod clean;

use apelos_core::json::JsonObject;
use apelos_geometry::GeoProperties;

const NAME_FALLBACK: &str = "Sem informação";
const DESCRIPTION_FALLBACK: &str = "Descrição não disponível";

/// What the viewer shows about a feature: its `Name`, `Description` and `Link`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureContent {
	pub name: String,
	pub description: String,
	pub link: Option<String>,
}

impl FeatureContent {
	/// Missing, null or empty values fall back to the Portuguese placeholders;
	/// an empty link means no link.
	pub fn from_properties(properties: &GeoProperties) -> Self {
		FeatureContent {
			name: properties
				.get_text("Name")
				.unwrap_or_else(|| NAME_FALLBACK.to_owned()),
			description: properties
				.get_text("Description")
				.unwrap_or_else(|| DESCRIPTION_FALLBACK.to_owned()),
			link: properties.get_text("Link"),
		}
	}

	pub fn popup_html(&self) -> String {
		let mut html = String::from("<div class=\"popup-content\">\n");
		html.push_str(&format!("  <h3>{}</h3>\n", escape_html(&self.name)));
		html.push_str(&format!("  <p>{}</p>\n", escape_html(&self.description)));
		if let Some(link) = &self.link {
			html.push_str(&format!("  {}\n", link_html(link, "popup-link", "Ver documento →")));
		}
		html.push_str("</div>\n");
		html
	}

	pub fn sidebar_html(&self) -> String {
		let mut html = format!("<h3>{}</h3>\n", escape_html(&self.name));
		html.push_str(&format!(
			"<div class=\"info-description\">{}</div>\n",
			escape_html(&self.description)
		));
		if let Some(link) = &self.link {
			html.push_str(&link_html(link, "info-link", "Acessar documento original →"));
			html.push('\n');
		}
		html
	}
}

/// Options of the MapLibre popup that shows [`FeatureContent::popup_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupOptions {
	pub close_button: bool,
	/// Clicking the map elsewhere keeps the popup open when false.
	pub close_on_click: bool,
	/// CSS width.
	pub max_width: String,
}

impl Default for PopupOptions {
	fn default() -> Self {
		PopupOptions {
			close_button: true,
			close_on_click: false,
			max_width: String::from("400px"),
		}
	}
}

impl PopupOptions {
	/// The argument of `new maplibregl.Popup(options)`.
	pub fn to_json(&self) -> JsonObject {
		let mut json = JsonObject::new();
		json.set("closeButton", self.close_button);
		json.set("closeOnClick", self.close_on_click);
		json.set("maxWidth", &self.max_width);
		json
	}
}

fn link_html(href: &str, class: &str, label: &str) -> String {
	format!(
		"<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"{class}\">{label}</a>",
		escape_html(href)
	)
}

/// Escapes text for use in HTML content and quoted attributes.
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;
	use apelos_geometry::GeoValue;
	use pretty_assertions::assert_eq;

	fn content(properties: Vec<(&str, GeoValue)>) -> FeatureContent {
		FeatureContent::from_properties(&GeoProperties::from(properties))
	}

	#[test]
	fn full_content() {
		let content = content(vec![
			("Name", GeoValue::from("Apelo 12")),
			("Description", GeoValue::from("Pedido de iluminação")),
			("Link", GeoValue::from("https://example.org/doc.pdf")),
		]);
		assert_eq!(
			content.popup_html(),
			"<div class=\"popup-content\">\n  <h3>Apelo 12</h3>\n  <p>Pedido de iluminação</p>\n  <a href=\"https://example.org/doc.pdf\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"popup-link\">Ver documento →</a>\n</div>\n"
		);
		assert_eq!(
			content.sidebar_html(),
			"<h3>Apelo 12</h3>\n<div class=\"info-description\">Pedido de iluminação</div>\n<a href=\"https://example.org/doc.pdf\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"info-link\">Acessar documento original →</a>\n"
		);
	}

	#[test]
	fn fallbacks() {
		let content = content(vec![
			("Name", GeoValue::from("")),
			("Description", GeoValue::Null),
			("Link", GeoValue::from("")),
		]);
		assert_eq!(
			content,
			FeatureContent {
				name: String::from("Sem informação"),
				description: String::from("Descrição não disponível"),
				link: None,
			}
		);
		assert_eq!(
			content.popup_html(),
			"<div class=\"popup-content\">\n  <h3>Sem informação</h3>\n  <p>Descrição não disponível</p>\n</div>\n"
		);
		assert!(!content.sidebar_html().contains("<a "));
	}

	#[test]
	fn missing_properties() {
		assert_eq!(content(vec![]).name, "Sem informação");
	}

	#[test]
	fn numbers_are_shown_as_text() {
		assert_eq!(content(vec![("Name", GeoValue::UInt(42))]).name, "42");
	}

	#[test]
	fn values_are_escaped() {
		let content = content(vec![
			("Name", GeoValue::from("<b>Rua & Praça</b>")),
			("Link", GeoValue::from("https://x.org/?a=1&b=\"2\"")),
		]);
		let html = content.popup_html();
		assert!(html.contains("<h3>&lt;b&gt;Rua &amp; Praça&lt;/b&gt;</h3>"));
		assert!(html.contains("href=\"https://x.org/?a=1&amp;b=&quot;2&quot;\""));
	}

	#[test]
	fn escape() {
		assert_eq!(escape_html("it's <fine> & \"ok\""), "it&#39;s &lt;fine&gt; &amp; &quot;ok&quot;");
		assert_eq!(escape_html("São Cristóvão"), "São Cristóvão");
	}

	#[test]
	fn popup_options() {
		assert_eq!(
			PopupOptions::default().to_json().stringify(),
			r#"{"closeButton":true,"closeOnClick":false,"maxWidth":"400px"}"#
		);
	}
}
