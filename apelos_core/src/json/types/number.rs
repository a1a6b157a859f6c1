//! `From` conversions of Rust numbers into `JsonValue::Number`.

use super::JsonValue;

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Number(input)
	}
}

macro_rules! impl_from_number_lossless {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(f64::from(input))
				}
			}
		)+
	};
}

macro_rules! impl_from_number_lossy {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(input as f64)
				}
			}
		)+
	};
}

impl_from_number_lossless!(f32, u8, u16, u32, i8, i16, i32);
impl_from_number_lossy!(u64, usize, i64, isize);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn integers_and_floats() {
		assert_eq!(JsonValue::from(50u8), JsonValue::Number(50.0));
		assert_eq!(JsonValue::from(-3i32), JsonValue::Number(-3.0));
		assert_eq!(JsonValue::from(1000u64), JsonValue::Number(1000.0));
		assert_eq!(JsonValue::from(7usize), JsonValue::Number(7.0));
		assert_eq!(JsonValue::from(0.5f32), JsonValue::Number(0.5));
	}
}
