//! Decimal amount value object
//!
//! An [`Amount`] is an immutable arbitrary-precision decimal tagged with the
//! decimal exponent of the chain it belongs to. Values are stored internally
//! at asset (human) scale with full precision; the base-unit view is derived.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::errors::AmountError;

/// Whether a raw value was given in base (smallest) units or asset units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountType {
	BaseAmount,
	AssetAmount,
}

/// Immutable decimal value with an explicit per-chain scale
#[derive(Debug, Clone)]
pub struct Amount {
	value: BigDecimal,
	decimal: u8,
	amount_type: AmountType,
}

fn pow10(decimal: u8) -> BigDecimal {
	BigDecimal::new(BigInt::from(1), -i64::from(decimal))
}

impl Amount {
	/// Build from a human-scale value
	pub fn from_asset_value(value: BigDecimal, decimal: u8) -> Self {
		Self {
			value,
			decimal,
			amount_type: AmountType::AssetAmount,
		}
	}

	/// Build from a base-unit value (integer in the chain's smallest unit)
	pub fn from_base_value(value: BigDecimal, decimal: u8) -> Self {
		Self {
			value: value / pow10(decimal),
			decimal,
			amount_type: AmountType::BaseAmount,
		}
	}

	pub fn from_base_units(units: u64, decimal: u8) -> Self {
		Self::from_base_value(BigDecimal::from(units), decimal)
	}

	/// Parse a base-unit string as returned by chain/indexer APIs
	pub fn from_base_str(value: &str, decimal: u8) -> Result<Self, AmountError> {
		let parsed = BigDecimal::from_str(value.trim()).map_err(|_| AmountError::InvalidValue {
			value: value.to_string(),
		})?;
		Ok(Self::from_base_value(parsed, decimal))
	}

	/// Parse a human-scale string (user input)
	pub fn from_asset_str(value: &str, decimal: u8) -> Result<Self, AmountError> {
		let parsed = BigDecimal::from_str(value.trim()).map_err(|_| AmountError::InvalidValue {
			value: value.to_string(),
		})?;
		Ok(Self::from_asset_value(parsed, decimal))
	}

	pub fn zero(decimal: u8) -> Self {
		Self::from_asset_value(BigDecimal::zero(), decimal)
	}

	pub fn decimal(&self) -> u8 {
		self.decimal
	}

	pub fn amount_type(&self) -> AmountType {
		self.amount_type
	}

	/// Human-scale view, full precision
	pub fn asset_value(&self) -> BigDecimal {
		self.value.clone()
	}

	/// Base-unit view, truncated to an integer
	pub fn base_value(&self) -> BigDecimal {
		(&self.value * pow10(self.decimal)).with_scale_round(0, RoundingMode::Down)
	}

	/// Base-unit view as a plain integer string (memo limits, DTOs)
	pub fn base_units_string(&self) -> String {
		self.base_value().to_string()
	}

	pub fn is_zero(&self) -> bool {
		self.value.is_zero()
	}

	/// Re-scale to a different decimal exponent, preserving the value
	pub fn with_decimal(&self, decimal: u8) -> Self {
		Self {
			value: self.value.clone(),
			decimal,
			amount_type: self.amount_type,
		}
	}

	/// Addition; operands must carry the same scale
	pub fn add(&self, other: &Amount) -> Result<Amount, AmountError> {
		self.check_decimal(other)?;
		Ok(Self {
			value: &self.value + &other.value,
			decimal: self.decimal,
			amount_type: self.amount_type,
		})
	}

	/// Subtraction; operands must carry the same scale
	pub fn sub(&self, other: &Amount) -> Result<Amount, AmountError> {
		self.check_decimal(other)?;
		Ok(Self {
			value: &self.value - &other.value,
			decimal: self.decimal,
			amount_type: self.amount_type,
		})
	}

	/// Multiplication; the left operand's scale is preserved
	pub fn mul(&self, other: &Amount) -> Amount {
		self.mul_value(&other.value)
	}

	/// Division; the left operand's scale is preserved. Division by zero
	/// collapses to zero.
	pub fn div(&self, other: &Amount) -> Amount {
		self.div_value(&other.value)
	}

	pub fn mul_value(&self, value: &BigDecimal) -> Amount {
		Self {
			value: &self.value * value,
			decimal: self.decimal,
			amount_type: self.amount_type,
		}
	}

	pub fn div_value(&self, value: &BigDecimal) -> Amount {
		let quotient = if value.is_zero() {
			BigDecimal::zero()
		} else {
			&self.value / value
		};
		Self {
			value: quotient,
			decimal: self.decimal,
			amount_type: self.amount_type,
		}
	}

	fn check_decimal(&self, other: &Amount) -> Result<(), AmountError> {
		if self.decimal != other.decimal {
			return Err(AmountError::DecimalMismatch {
				left: self.decimal,
				right: other.decimal,
			});
		}
		Ok(())
	}
}

impl PartialEq for Amount {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl Eq for Amount {}

impl PartialOrd for Amount {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.value.cmp(&other.value))
	}
}

impl fmt::Display for Amount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}",
			self.value
				.with_scale_round(i64::from(self.decimal), RoundingMode::HalfUp)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_base_and_asset_views_agree() {
		let amount = Amount::from_base_str("150000000", 8).unwrap();
		assert_eq!(amount.asset_value(), BigDecimal::from_str("1.5").unwrap());
		assert_eq!(amount.base_units_string(), "150000000");
		assert_eq!(amount.amount_type(), AmountType::BaseAmount);
	}

	#[test]
	fn test_add_requires_matching_scale() {
		let btc = Amount::from_asset_str("1", 8).unwrap();
		let eth = Amount::from_asset_str("1", 18).unwrap();
		assert_eq!(
			btc.add(&eth),
			Err(AmountError::DecimalMismatch { left: 8, right: 18 })
		);

		let sum = btc.add(&Amount::from_asset_str("0.5", 8).unwrap()).unwrap();
		assert_eq!(sum.asset_value(), BigDecimal::from_str("1.5").unwrap());
	}

	#[test]
	fn test_mul_div_preserve_scale() {
		let amount = Amount::from_asset_str("2", 8).unwrap();
		let other = Amount::from_asset_str("4", 18).unwrap();
		assert_eq!(amount.mul(&other).decimal(), 8);
		assert_eq!(amount.div(&other).decimal(), 8);
		assert_eq!(
			amount.div(&other).asset_value(),
			BigDecimal::from_str("0.5").unwrap()
		);
	}

	#[test]
	fn test_div_by_zero_is_zero() {
		let amount = Amount::from_asset_str("2", 8).unwrap();
		assert!(amount.div(&Amount::zero(8)).is_zero());
	}

	#[test]
	fn test_rescale_keeps_value() {
		let eth = Amount::from_base_str("1000000000000000000", 18).unwrap();
		let thor_scale = eth.with_decimal(8);
		assert_eq!(thor_scale.base_units_string(), "100000000");
		assert_eq!(eth, thor_scale);
	}

	#[test]
	fn test_base_value_truncates() {
		let amount = Amount::from_asset_str("0.123456789", 8).unwrap();
		assert_eq!(amount.base_units_string(), "12345678");
	}

	#[test]
	fn test_invalid_value_rejected() {
		assert!(Amount::from_base_str("12notanumber", 8).is_err());
	}
}
