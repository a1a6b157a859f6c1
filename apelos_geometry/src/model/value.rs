use apelos_core::json::JsonValue;
use std::fmt::{Debug, Display};

/// A property value of a GeoJSON feature.
///
/// Numbers keep the representation they were written in: integers without a
/// fraction become `Int`/`UInt`, everything else `Double`.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Bool(bool),
	Double(f64),
	Int(i64),
	Null,
	String(String),
	UInt(u64),
}

impl GeoValue {
	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			GeoValue::String(s) => Some(s),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, GeoValue::Null)
	}

	/// False for null, `false`, zero, NaN and the empty string.
	#[must_use]
	pub fn is_truthy(&self) -> bool {
		match self {
			GeoValue::Bool(v) => *v,
			GeoValue::Double(v) => *v != 0.0 && !v.is_nan(),
			GeoValue::Int(v) => *v != 0,
			GeoValue::Null => false,
			GeoValue::String(v) => !v.is_empty(),
			GeoValue::UInt(v) => *v != 0,
		}
	}

	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		match self {
			GeoValue::Bool(v) => JsonValue::from(*v),
			GeoValue::Double(v) => JsonValue::from(*v),
			GeoValue::Int(v) => JsonValue::from(*v),
			GeoValue::Null => JsonValue::Null,
			GeoValue::String(v) => JsonValue::from(v),
			GeoValue::UInt(v) => JsonValue::from(*v),
		}
	}
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::Null => f.write_str("Null"),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
		}
	}
}

/// The plain text form, as shown in popups: strings without quotes, null as `null`.
impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Null => f.write_str("null"),
			GeoValue::String(v) => f.write_str(v),
			GeoValue::UInt(v) => write!(f, "{v}"),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<&String> for GeoValue {
	fn from(value: &String) -> Self {
		GeoValue::String(value.clone())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(i64::from(value))
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		GeoValue::Int(value)
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl From<&JsonValue> for GeoValue {
	/// Nested arrays and objects have no `GeoValue` form; they are kept as their JSON text.
	fn from(value: &JsonValue) -> Self {
		match value {
			JsonValue::Boolean(v) => GeoValue::Bool(*v),
			JsonValue::Number(v) => GeoValue::Double(*v),
			JsonValue::Null => GeoValue::Null,
			JsonValue::String(v) => GeoValue::String(v.clone()),
			JsonValue::Array(_) | JsonValue::Object(_) => GeoValue::String(value.stringify()),
		}
	}
}
