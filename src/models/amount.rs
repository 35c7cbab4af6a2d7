//! Monetary amounts expressed as scaled integers.

// crates.io
use serde::{Deserializer, de::Error as DeError};
// self
use crate::_prelude::*;

/// Monetary amount paired with its ISO 4217 currency code.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
	/// ISO 4217 currency code.
	pub currency_code: String,
	/// Scaled integer value.
	pub value: ScaledValue,
}

/// Exact decimal represented as `unscaled_value * 10^-scale`.
///
/// The remote serializes both fields as numbers in its documentation but as strings in some
/// responses; both encodings are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledValue {
	/// Power-of-ten divisor exponent.
	#[serde(deserialize_with = "flexible_i64")]
	pub scale: i64,
	/// Integer mantissa.
	#[serde(deserialize_with = "flexible_i64")]
	pub unscaled_value: i64,
}
impl ScaledValue {
	/// Converts the scaled representation into an `f64`.
	///
	/// The conversion is lossy for mantissas beyond 2^53; use the raw fields when exact
	/// arithmetic matters.
	pub fn to_f64(&self) -> f64 {
		(self.unscaled_value as f64) * 10_f64.powi(-self.scale as i32)
	}
}

fn flexible_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Number(i64),
		Text(String),
	}

	match Raw::deserialize(deserializer)? {
		Raw::Number(value) => Ok(value),
		Raw::Text(text) => text.parse().map_err(DeError::custom),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn scaled_value_converts_with_negative_and_positive_scales() {
		assert!((ScaledValue { scale: 2, unscaled_value: 1999 }.to_f64() - 19.99).abs() < 1e-12);
		assert_eq!(ScaledValue { scale: 0, unscaled_value: 42 }.to_f64(), 42.0);
		assert_eq!(ScaledValue { scale: -3, unscaled_value: 19 }.to_f64(), 19_000.0);
	}

	#[test]
	fn scaled_value_accepts_number_and_string_encodings() {
		let numeric: ScaledValue =
			serde_json::from_str("{\"scale\":2,\"unscaledValue\":1999}")
				.expect("Numeric scaled value should deserialize.");
		let text: ScaledValue =
			serde_json::from_str("{\"scale\":\"2\",\"unscaledValue\":\"1999\"}")
				.expect("String scaled value should deserialize.");

		assert_eq!(numeric, text);
		assert!((numeric.to_f64() - 19.99).abs() < 1e-12);
	}

	#[test]
	fn amount_deserializes_from_camel_case() {
		let amount: Amount = serde_json::from_str(
			"{\"currencyCode\":\"EUR\",\"value\":{\"scale\":2,\"unscaledValue\":-500}}",
		)
		.expect("Amount should deserialize.");

		assert_eq!(amount.currency_code, "EUR");
		assert_eq!(amount.value.to_f64(), -5.0);
	}
}
