//! Price derivation against the pool set

use bigdecimal::{BigDecimal, One, Zero};

use crate::models::errors::PriceError;
use crate::models::{Amount, Asset, Pool};

/// Unit price of an asset denominated in RUNE
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
	pub asset: Asset,
	unit_price: BigDecimal,
}

impl Price {
	pub fn new(asset: &Asset, pools: &[Pool]) -> Result<Self, PriceError> {
		let unit_price = if asset.is_rune_native() {
			BigDecimal::one()
		} else {
			Pool::find(pools, asset)
				.ok_or_else(|| PriceError::PoolNotFound {
					asset: asset.to_string(),
				})?
				.asset_price_in_rune()
		};
		Ok(Self {
			asset: asset.clone(),
			unit_price,
		})
	}

	pub fn unit_price(&self) -> &BigDecimal {
		&self.unit_price
	}

	/// Convert an amount of this asset into the target asset's units
	pub fn convert(&self, amount: &Amount, target: &Price) -> Amount {
		if target.unit_price.is_zero() {
			return Amount::zero(target.asset.decimal());
		}
		let rune_value = amount.asset_value() * &self.unit_price;
		Amount::from_asset_value(rune_value / &target.unit_price, target.asset.decimal())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::pool::tests::pool_detail;
	use std::str::FromStr;

	#[test]
	fn test_rune_price_is_unit() {
		let price = Price::new(&Asset::rune_native(), &[]).unwrap();
		assert_eq!(price.unit_price(), &BigDecimal::one());
	}

	#[test]
	fn test_conversion_through_rune() {
		let pools = vec![
			// BTC at 10 RUNE
			Pool::from_detail(pool_detail("BTC.BTC", "10000000000", "100000000000")).unwrap(),
			// ETH at 2 RUNE
			Pool::from_detail(pool_detail("ETH.ETH", "10000000000", "20000000000")).unwrap(),
		];
		let btc = Price::new(&Asset::btc(), &pools).unwrap();
		let eth = Price::new(&Asset::eth(), &pools).unwrap();

		let one_btc = Amount::from_asset_str("1", 8).unwrap();
		let in_eth = btc.convert(&one_btc, &eth);
		assert_eq!(in_eth.asset_value(), BigDecimal::from_str("5").unwrap());
		assert_eq!(in_eth.decimal(), 18);
	}

	#[test]
	fn test_missing_pool_is_an_error() {
		assert!(matches!(
			Price::new(&Asset::btc(), &[]),
			Err(PriceError::PoolNotFound { .. })
		));
	}
}
