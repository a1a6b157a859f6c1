use super::{parse_geojson_collection, parse_geojson_feature};
use crate::{GeoCollection, GeoFeature};
use anyhow::{Context, Result, bail};
use apelos_core::byte_iterator::ByteIterator;
use std::{
	fs::File,
	io::{BufRead, BufReader, Cursor, Read},
	path::Path,
};

/// Streams a `FeatureCollection` out of `reader`. A leading UTF-8 byte order mark is skipped.
pub fn read_geojson(reader: impl Read) -> Result<GeoCollection> {
	let mut iter = ByteIterator::from_reader(reader, true);
	iter.skip_bom()?;
	let collection = parse_geojson_collection(&mut iter)?;
	if !iter.is_exhausted() {
		bail!(iter.format_error("unexpected data after the FeatureCollection"));
	}
	Ok(collection)
}

/// Opens and reads a GeoJSON layer file.
pub fn read_geojson_file(path: &Path) -> Result<GeoCollection> {
	let file = File::open(path).with_context(|| format!("failed to open \"{}\"", path.display()))?;
	let collection =
		read_geojson(BufReader::new(file)).with_context(|| format!("failed to parse \"{}\"", path.display()))?;
	log::debug!("read {} features from \"{}\"", collection.len(), path.display());
	Ok(collection)
}

fn process_line(line: std::io::Result<String>, index: usize) -> Result<Option<GeoFeature>> {
	let line = line.with_context(|| format!("line {}", index + 1))?;
	if line.trim().is_empty() {
		return Ok(None);
	}
	let mut iter = ByteIterator::from_reader(Cursor::new(line), true);
	iter.skip_bom()
		.and_then(|()| parse_geojson_feature(&mut iter))
		.map(Some)
		.with_context(|| format!("line {}", index + 1))
}

/// Reads newline-delimited GeoJSON: one `Feature` per line, blank lines skipped.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<GeoFeature>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index).transpose())
}
