use super::parse::{KmlElement, parse_placemark};
use crate::GeoCollection;
use anyhow::{Context, Result, ensure};
use quick_xml::{
	Reader,
	events::{BytesStart, Event},
};
use std::{
	fs::File,
	io::{BufRead, BufReader},
	path::Path,
};

fn local_name(start: &BytesStart) -> String {
	String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn read_attributes(start: &BytesStart) -> Result<Vec<(String, String)>> {
	start
		.attributes()
		.map(|attribute| {
			let attribute = attribute?;
			let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
			let value = attribute.unescape_value()?.into_owned();
			Ok((key, value))
		})
		.collect()
}

/// Reads every `Placemark` of a KML document, wherever it sits in the
/// `Document`/`Folder` hierarchy, as a feature.
///
/// Namespace prefixes are ignored. Everything outside placemarks (styles,
/// folders, schemas) is skipped.
pub fn read_kml(reader: impl BufRead) -> Result<GeoCollection> {
	let mut reader = Reader::from_reader(reader);
	reader.config_mut().trim_text(true);

	let mut features = Vec::new();
	// open elements of the current placemark, the placemark itself at the bottom
	let mut stack: Vec<KmlElement> = Vec::new();
	let mut buf = Vec::new();

	loop {
		let event = reader
			.read_event_into(&mut buf)
			.with_context(|| format!("invalid XML at position {}", reader.error_position()))?;
		match event {
			Event::Start(start) => {
				let name = local_name(&start);
				if !stack.is_empty() || name == "Placemark" {
					stack.push(KmlElement::new(name, read_attributes(&start)?));
				}
			}
			Event::Empty(start) => {
				if let Some(parent) = stack.last_mut() {
					parent
						.children
						.push(KmlElement::new(local_name(&start), read_attributes(&start)?));
				}
			}
			Event::Text(text) => {
				if let Some(element) = stack.last_mut() {
					element.text.push_str(&text.unescape()?);
				}
			}
			Event::CData(data) => {
				if let Some(element) = stack.last_mut() {
					element.text.push_str(&String::from_utf8_lossy(&data));
				}
			}
			Event::End(_) => {
				if let Some(element) = stack.pop() {
					match stack.last_mut() {
						Some(parent) => parent.children.push(element),
						None => features.push(parse_placemark(&element)),
					}
				}
			}
			Event::Eof => break,
			_ => {}
		}
		buf.clear();
	}

	ensure!(stack.is_empty(), "unexpected end of document inside a Placemark");
	Ok(GeoCollection::from(features))
}

/// Reads a KML document from a string.
pub fn parse_kml(xml: &str) -> Result<GeoCollection> {
	read_kml(xml.as_bytes())
}

/// Opens and reads a KML file.
pub fn read_kml_file(path: &Path) -> Result<GeoCollection> {
	let file = File::open(path).with_context(|| format!("failed to open \"{}\"", path.display()))?;
	let collection =
		read_kml(BufReader::new(file)).with_context(|| format!("failed to parse \"{}\"", path.display()))?;
	log::debug!("read {} placemarks from \"{}\"", collection.len(), path.display());
	Ok(collection)
}
