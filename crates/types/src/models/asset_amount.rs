//! An amount constrained to an asset's decimal precision

use bigdecimal::BigDecimal;
use std::fmt;

use crate::models::errors::AmountError;
use crate::models::{Amount, Asset};

#[derive(Debug, Clone, PartialEq)]
pub struct AssetAmount {
	pub asset: Asset,
	pub amount: Amount,
}

impl AssetAmount {
	/// Pair an asset with an amount, coercing the amount to the asset's
	/// decimal precision
	pub fn new(asset: Asset, amount: Amount) -> Self {
		let amount = amount.with_decimal(asset.decimal());
		Self { asset, amount }
	}

	pub fn from_asset_str(asset: Asset, value: &str) -> Result<Self, AmountError> {
		let amount = Amount::from_asset_str(value, asset.decimal())?;
		Ok(Self { asset, amount })
	}

	pub fn from_base_str(asset: Asset, value: &str) -> Result<Self, AmountError> {
		let amount = Amount::from_base_str(value, asset.decimal())?;
		Ok(Self { asset, amount })
	}

	pub fn zero(asset: Asset) -> Self {
		let amount = Amount::zero(asset.decimal());
		Self { asset, amount }
	}

	pub fn is_zero(&self) -> bool {
		self.amount.is_zero()
	}

	/// Addition; operands must be the same asset
	pub fn add(&self, other: &AssetAmount) -> Result<AssetAmount, AmountError> {
		self.check_asset(other)?;
		Ok(Self {
			asset: self.asset.clone(),
			amount: self.amount.add(&other.amount)?,
		})
	}

	/// Subtraction; operands must be the same asset
	pub fn sub(&self, other: &AssetAmount) -> Result<AssetAmount, AmountError> {
		self.check_asset(other)?;
		Ok(Self {
			asset: self.asset.clone(),
			amount: self.amount.sub(&other.amount)?,
		})
	}

	/// Multiplication by a bare amount; the base asset's scale is preserved
	pub fn mul(&self, other: &Amount) -> AssetAmount {
		Self {
			asset: self.asset.clone(),
			amount: self.amount.mul(other),
		}
	}

	/// Division by a bare amount; the base asset's scale is preserved
	pub fn div(&self, other: &Amount) -> AssetAmount {
		Self {
			asset: self.asset.clone(),
			amount: self.amount.div(other),
		}
	}

	pub fn mul_value(&self, value: &BigDecimal) -> AssetAmount {
		Self {
			asset: self.asset.clone(),
			amount: self.amount.mul_value(value),
		}
	}

	fn check_asset(&self, other: &AssetAmount) -> Result<(), AmountError> {
		if self.asset != other.asset {
			return Err(AmountError::AssetMismatch {
				left: self.asset.to_string(),
				right: other.asset.to_string(),
			});
		}
		Ok(())
	}
}

impl fmt::Display for AssetAmount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.amount, self.asset)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;

	#[test]
	fn test_add_rejects_different_assets() {
		let btc = AssetAmount::from_asset_str(Asset::btc(), "1").unwrap();
		let eth = AssetAmount::from_asset_str(Asset::eth(), "1").unwrap();
		assert!(matches!(
			btc.add(&eth),
			Err(AmountError::AssetMismatch { .. })
		));
		assert!(matches!(
			btc.sub(&eth),
			Err(AmountError::AssetMismatch { .. })
		));
	}

	#[test]
	fn test_mul_div_keep_asset_scale() {
		let btc = AssetAmount::from_asset_str(Asset::btc(), "2").unwrap();
		let factor = Amount::from_asset_str("3", 18).unwrap();
		let product = btc.mul(&factor);
		assert_eq!(product.amount.decimal(), 8);
		assert_eq!(
			product.amount.asset_value(),
			BigDecimal::from_str("6").unwrap()
		);
		assert_eq!(btc.div(&factor).amount.decimal(), 8);
	}

	#[test]
	fn test_amount_coerced_to_asset_precision() {
		let usdc = Asset::new(crate::models::Chain::Ethereum, "USDC-0xabc").with_decimal(6);
		let paired = AssetAmount::new(usdc, Amount::from_asset_str("1.5", 18).unwrap());
		assert_eq!(paired.amount.decimal(), 6);
		assert_eq!(paired.amount.base_units_string(), "1500000");
	}
}
