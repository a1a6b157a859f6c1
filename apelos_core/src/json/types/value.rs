use crate::json::{JsonArray, JsonObject, parse_json_str, stringify};
use anyhow::{Result, bail};

/// Any JSON value.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, JsonValue::Null)
	}

	pub fn as_array(&self) -> Result<&JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => bail!("expected an array, found a {}", self.type_as_str()),
		}
	}

	pub fn as_object(&self) -> Result<&JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => bail!("expected an object, found a {}", self.type_as_str()),
		}
	}

	pub fn into_object(self) -> Result<JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => bail!("expected an object, found a {}", self.type_as_str()),
		}
	}

	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found a {}", self.type_as_str()),
		}
	}

	pub fn as_string(&self) -> Result<String> {
		self.as_str().map(str::to_owned)
	}

	pub fn as_number(&self) -> Result<f64> {
		match self {
			JsonValue::Number(value) => Ok(*value),
			_ => bail!("expected a number, found a {}", self.type_as_str()),
		}
	}

	pub fn as_bool(&self) -> Result<bool> {
		match self {
			JsonValue::Boolean(value) => Ok(*value),
			_ => bail!("expected a boolean, found a {}", self.type_as_str()),
		}
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.clone())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<&JsonValue> for JsonValue {
	fn from(input: &JsonValue) -> Self {
		input.clone()
	}
}

impl From<JsonArray> for JsonValue {
	fn from(input: JsonArray) -> Self {
		JsonValue::Array(input)
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

impl<T> From<Vec<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonValue::Array(JsonArray::from(input))
	}
}

impl<T, const N: usize> From<[T; N]> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: [T; N]) -> Self {
		JsonValue::Array(JsonArray::from(input))
	}
}

impl<T> From<Option<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Option<T>) -> Self {
		input.map_or(JsonValue::Null, JsonValue::from)
	}
}
