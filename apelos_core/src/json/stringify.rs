use super::JsonValue;

/// Compact JSON without whitespace. Object keys come out sorted.
#[must_use]
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(s) => format!("\"{}\"", escape_json_string(s)),
		JsonValue::Number(n) => stringify_number(*n),
		JsonValue::Boolean(b) => b.to_string(),
		JsonValue::Null => String::from("null"),
		JsonValue::Array(arr) => arr.stringify(),
		JsonValue::Object(obj) => obj.stringify(),
	}
}

/// Non-finite numbers have no JSON form and are written as `null`.
fn stringify_number(n: f64) -> String {
	if n.is_finite() { n.to_string() } else { String::from("null") }
}

/// Pretty JSON: containers that fit into `max_width` stay on one line, others are
/// broken up with two-space indentation.
#[must_use]
pub fn stringify_pretty_multi_line(json: &JsonValue, max_width: usize, depth: usize, indention: usize) -> String {
	let single_line = stringify_pretty_single_line(json);
	if single_line.len() + indention <= max_width {
		return single_line;
	}
	match json {
		JsonValue::Array(arr) => arr.stringify_pretty_multi_line(max_width, depth),
		JsonValue::Object(obj) => obj.stringify_pretty_multi_line(max_width, depth),
		_ => single_line,
	}
}

#[must_use]
pub fn stringify_pretty_single_line(json: &JsonValue) -> String {
	match json {
		JsonValue::Array(arr) => arr.stringify_pretty_single_line(),
		JsonValue::Object(obj) => obj.stringify_pretty_single_line(),
		_ => stringify(json),
	}
}

#[must_use]
pub fn escape_json_string(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len() + 2);
	for c in input.chars() {
		match c {
			'"' => escaped.push_str("\\\""),
			'\\' => escaped.push_str("\\\\"),
			'\n' => escaped.push_str("\\n"),
			'\r' => escaped.push_str("\\r"),
			'\t' => escaped.push_str("\\t"),
			'\u{08}' => escaped.push_str("\\b"),
			'\u{0c}' => escaped.push_str("\\f"),
			c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
			c => escaped.push(c),
		}
	}
	escaped
}
