//! Turns the HTML descriptions of exported KML placemarks into plain text plus a
//! document link.

use apelos_geometry::{GeoCollection, GeoFeature, GeoValue};
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};

lazy_static! {
	static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
	static ref SELECT_LINKS: Selector = Selector::parse("a[href]").unwrap();
}

// Elements whose text is never shown: links (their text is replaced by the link
// itself) and the raw text of scripts and stylesheets.
const HIDDEN_ELEMENTS: [&str; 3] = ["a", "script", "style"];

/// The visible text of an HTML fragment.
///
/// The fragment is parsed like a browser would, so entities are decoded, comments
/// vanish and an unclosed `<a>` hides everything after it. Text inside links,
/// scripts and styles is dropped, the remaining text nodes are joined by spaces
/// and whitespace is collapsed.
pub fn clean_text(html: &str) -> String {
	if html.is_empty() {
		return String::new();
	}
	let fragment = Html::parse_fragment(html);
	let parts: Vec<&str> = fragment
		.tree
		.root()
		.descendants()
		.filter_map(|node| {
			let text = node.value().as_text()?;
			let hidden = node.ancestors().any(|ancestor| {
				ancestor
					.value()
					.as_element()
					.is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
			});
			(!hidden).then_some(&**text)
		})
		.collect();
	RE_WHITESPACE.replace_all(&parts.join(" "), " ").trim().to_owned()
}

/// The first link target starting with `http`, if any.
pub fn first_url(html: &str) -> Option<String> {
	let fragment = Html::parse_fragment(html);
	fragment
		.select(&SELECT_LINKS)
		.filter_map(|anchor| anchor.value().attr("href"))
		.find(|href| href.starts_with("http"))
		.map(str::to_owned)
}

/// Replaces `Description` by its plain text and stores the first document URL as
/// `Link` (`null` when there is none).
pub fn clean_feature(feature: &mut GeoFeature) {
	let raw = feature.properties.get_text("Description").unwrap_or_default();
	let link = first_url(&raw).map_or(GeoValue::Null, GeoValue::from);
	feature.set_property("Description", clean_text(&raw));
	feature.set_property("Link", link);
}

/// Cleans every feature and returns how many of them got a link.
pub fn clean_collection(collection: &mut GeoCollection) -> usize {
	collection
		.features
		.iter_mut()
		.map(|feature| {
			clean_feature(feature);
			feature.properties.get("Link").is_some_and(|link| !link.is_null())
		})
		.filter(|has_link| *has_link)
		.count()
}

#[cfg(test)]
mod tests {
	use super::*;
	use apelos_geometry::Geometry;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	const PLACEMARK: &str = r#"<div><b>Apelo nº 12</b><br>Pedido de&nbsp;iluminação   na <i>Rua&#32;Uruguai</i>
		<a href="https://camara.rio/doc/12.pdf">Documento</a> <a href="http://other.org">x</a></div>"#;

	#[rstest]
	#[case("", "")]
	#[case("plain text", "plain text")]
	#[case("  lots \n of \t space  ", "lots of space")]
	#[case("<p>one</p><p>two</p>", "one two")]
	#[case("see <a href='x'>this <b>link</b></a> here", "see here")]
	#[case("<A HREF=\"x\">upper</A>case", "case")]
	#[case("Tom &amp; Jerry &lt;3", "Tom & Jerry <3")]
	#[case("S&atilde;o Crist&oacute;v&atilde;o", "São Cristóvão")]
	#[case("&#x41;&#66;&unknown;", "AB&unknown;")]
	#[case("&lt;b&gt;not a tag&lt;/b&gt;", "<b>not a tag</b>")]
	#[case("Rua Uruguai &ndash; caf&egrave; &hellip; d&rsquo;&Aacute;gua", "Rua Uruguai – cafè … d’Água")]
	#[case("antes <!-- a > b --> depois <script>var x=1;</script>fim", "antes depois fim")]
	#[case("<style>p { color: red }</style>texto", "texto")]
	#[case("texto <a href='http://x'>link sem fim", "texto")]
	fn clean_text_cases(#[case] html: &str, #[case] expected: &str) {
		assert_eq!(clean_text(html), expected);
	}

	#[test]
	fn clean_placemark() {
		assert_eq!(
			clean_text(PLACEMARK),
			"Apelo nº 12 Pedido de iluminação na Rua Uruguai"
		);
	}

	#[rstest]
	#[case(PLACEMARK, Some("https://camara.rio/doc/12.pdf"))]
	#[case(r#"<a href="mailto:x@y.org">m</a><a href='https://a.org/?x=1&amp;y=2'>a</a>"#, Some("https://a.org/?x=1&y=2"))]
	#[case("<a href=http://bare.org/x>b</a>", Some("http://bare.org/x"))]
	#[case("<a name=\"top\">no href</a>", None)]
	#[case(r#"<a data-href="http://wrong.example" href="https://right.example">doc</a>"#, Some("https://right.example"))]
	#[case(r#"<a data-href="http://wrong.example">doc</a>"#, None)]
	#[case("https://not-a-link.org", None)]
	#[case("", None)]
	fn first_url_cases(#[case] html: &str, #[case] expected: Option<&str>) {
		assert_eq!(first_url(html).as_deref(), expected);
	}

	#[test]
	fn clean_feature_rewrites_description() {
		let mut feature = GeoFeature::new(Geometry::new_point([-43.2, -22.9]));
		feature.set_property("Name", "Apelo 12");
		feature.set_property("Description", PLACEMARK);
		clean_feature(&mut feature);

		assert_eq!(
			feature.properties.get_text("Description").as_deref(),
			Some("Apelo nº 12 Pedido de iluminação na Rua Uruguai")
		);
		assert_eq!(
			feature.properties.get_text("Link").as_deref(),
			Some("https://camara.rio/doc/12.pdf")
		);
		assert_eq!(feature.properties.get_text("Name").as_deref(), Some("Apelo 12"));
	}

	#[test]
	fn clean_feature_without_description() {
		let mut feature = GeoFeature::without_geometry();
		clean_feature(&mut feature);
		assert_eq!(feature.properties.get("Description"), Some(&GeoValue::from("")));
		assert_eq!(feature.properties.get("Link"), Some(&GeoValue::Null));
	}

	#[test]
	fn clean_collection_counts_links() {
		let mut with_link = GeoFeature::without_geometry();
		with_link.set_property("Description", PLACEMARK);
		let mut collection = GeoCollection::from(vec![with_link, GeoFeature::without_geometry()]);
		assert_eq!(clean_collection(&mut collection), 1);
	}
}
