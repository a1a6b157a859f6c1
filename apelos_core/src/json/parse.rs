use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::{Context, Result};
use std::{collections::BTreeMap, io::Cursor};

/// Parses a complete JSON document; trailing non-whitespace is an error.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_reader(Cursor::new(json), true);
	let value = parse_json_iter(&mut iter).context("while parsing JSON")?;
	if !iter.is_exhausted() {
		return Err(iter.format_error("unexpected data after JSON value"));
	}
	Ok(value)
}

/// Parses the next JSON value at the cursor.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => parse_array_entries(iter, parse_json_iter).map(|items| JsonValue::Array(JsonArray(items))),
		b'{' => parse_json_object(iter).map(JsonValue::Object),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		b'-' | b'+' | b'0'..=b'9' => parse_number_as::<f64>(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_object(iter: &mut ByteIterator) -> Result<JsonObject> {
	let mut map = BTreeMap::new();
	parse_object_entries(iter, |key, iter| {
		map.insert(key, parse_json_iter(iter)?);
		Ok(())
	})?;
	Ok(JsonObject(map))
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn nested_document() -> Result<()> {
		let json = parse_json_str(
			r#"{"name":"Apelos","center":[-43.1895,-22.9068],"visible":true,"cluster":{"radius":50},"note":null}"#,
		)?;
		let mut cluster = JsonObject::new();
		cluster.set("radius", 50);
		let mut expected = JsonObject::new();
		expected.set("name", "Apelos");
		expected.set("center", vec![-43.1895, -22.9068]);
		expected.set("visible", true);
		expected.set("cluster", cluster);
		expected.set("note", JsonValue::Null);
		assert_eq!(json, JsonValue::Object(expected));
		Ok(())
	}

	#[test]
	fn whitespace_everywhere() -> Result<()> {
		let template = r#"_{_"a"_:_[_{_"b"_:_7_,_"c"_:_true_}_,_null_]_}_"#;
		let expected = parse_json_str(&template.replace('_', ""))?;
		for ws in [" ", "\t", "\n", "\r\n"] {
			assert_eq!(parse_json_str(&template.replace('_', ws))?, expected);
		}
		Ok(())
	}

	#[test]
	fn empty_containers() -> Result<()> {
		assert_eq!(parse_json_str("{}")?, JsonValue::Object(JsonObject::new()));
		assert_eq!(parse_json_str("[]")?, JsonValue::Array(JsonArray::default()));
		Ok(())
	}

	#[test]
	fn reports_position() {
		let error = parse_json_str(r#"{"city":"Rio","state","RJ"}"#).unwrap_err();
		assert_eq!(
			error.root_cause().to_string(),
			"expected ':' at position 22: {\"city\":\"Rio\",\"state\","
		);
	}

	#[test]
	fn rejects_trailing_data() {
		assert!(parse_json_str("[1] 2").is_err());
		assert!(parse_json_str("nul").is_err());
		assert!(parse_json_str("").is_err());
	}
}
