//! Token-level JSON helpers on top of [`ByteIterator`].
//!
//! Every helper consumes exactly the token it parses and leaves the iterator on the
//! next byte, so callers can stream through large GeoJSON documents while deciding
//! per key what to do with each value.

use super::iterator::ByteIterator;
use anyhow::{Context, Result, bail};
use std::str::FromStr;

/// Matches the fixed ASCII `tag` at the cursor.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if iter.expect_next_byte()? != expected {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u16> {
	let mut value: u16 = 0;
	for _ in 0..4 {
		let digit = match iter.expect_next_byte()? {
			b @ b'0'..=b'9' => b - b'0',
			b @ b'a'..=b'f' => b - b'a' + 10,
			b @ b'A'..=b'F' => b - b'A' + 10,
			_ => return Err(iter.format_error("invalid unicode escape")),
		};
		value = (value << 4) | u16::from(digit);
	}
	Ok(value)
}

/// Parses a quoted JSON string literal, including `\uXXXX` escapes and surrogate pairs.
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		bail!(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes: Vec<u8> = Vec::with_capacity(32);
	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(0x08),
				b'f' => bytes.push(0x0c),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut units = vec![parse_hex4(iter)?];
					if (0xD800..0xDC00).contains(&units[0]) {
						parse_tag(iter, "\\u")?;
						units.push(parse_hex4(iter)?);
					}
					let decoded =
						String::from_utf16(&units).map_err(|_| iter.format_error("invalid unicode code point"))?;
					bytes.extend_from_slice(decoded.as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			byte => bytes.push(byte),
		}
	}
	String::from_utf8(bytes).context("string is not valid UTF-8")
}

fn push_digits(iter: &mut ByteIterator, number: &mut String) -> bool {
	let mut found = false;
	while let Some(b @ b'0'..=b'9') = iter.peek() {
		number.push(b as char);
		iter.advance();
		found = true;
	}
	found
}

/// Reads a JSON number token and returns its text.
///
/// Accepts an optional sign, integer digits, an optional fraction and an optional exponent.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	let mut number = String::with_capacity(16);

	if let Some(b @ (b'+' | b'-')) = iter.peek() {
		number.push(b as char);
		iter.advance();
	}

	if !push_digits(iter, &mut number) {
		return Err(iter.format_error("expected digits in number"));
	}

	if iter.peek() == Some(b'.') {
		number.push('.');
		iter.advance();
		if !push_digits(iter, &mut number) {
			return Err(iter.format_error("expected digits after decimal point"));
		}
		if iter.peek() == Some(b'.') {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if let Some(b @ (b'e' | b'E')) = iter.peek() {
		number.push(b as char);
		iter.advance();
		if let Some(b @ (b'+' | b'-')) = iter.peek() {
			number.push(b as char);
			iter.advance();
		}
		if !push_digits(iter, &mut number) {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	Ok(number)
}

/// Reads a JSON number and converts it with `R::from_str`.
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Walks a JSON object and hands each key to `parse_value`, which must consume the value.
pub fn parse_object_entries(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		bail!(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if iter.peek() == Some(b'}') {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("parsing object, expected '\"' or '}'"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b'}' => return Ok(()),
			_ => return Err(iter.format_error("expected ',' or '}'")),
		}
	}
}

/// Walks a JSON array and collects whatever `parse_value` returns per element.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		bail!(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();
	iter.skip_whitespace();
	if iter.peek() == Some(b']') {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b']' => return Ok(result),
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}
}
