//! Liquidity-unit share math

use bigdecimal::{BigDecimal, Zero};

use crate::constants::THORCHAIN_DECIMAL;
use crate::models::{Amount, Percent, Pool};

/// A member's liquidity position in one pool
#[derive(Debug, Clone)]
pub struct Liquidity {
	pub pool: Pool,
	pub pool_units: Amount,
	pub liquidity_units: Amount,
}

impl Liquidity {
	pub fn new(pool: Pool, pool_units: Amount, liquidity_units: Amount) -> Self {
		Self {
			pool,
			pool_units,
			liquidity_units,
		}
	}

	/// The member's share of the pool
	pub fn pool_share(&self) -> Percent {
		if self.pool_units.is_zero() {
			return Percent::zero();
		}
		Percent::from_fraction(
			self.liquidity_units.asset_value() / self.pool_units.asset_value(),
		)
	}

	/// RUNE-side redeemable amount
	pub fn rune_share(&self) -> Amount {
		self.pool
			.rune_depth
			.mul_value(self.pool_share().as_fraction())
	}

	/// Asset-side redeemable amount
	pub fn asset_share(&self) -> Amount {
		self.pool
			.asset_depth
			.mul_value(self.pool_share().as_fraction())
	}

	/// Units minted for adding `rune_amount` + `asset_amount`, slip-adjusted:
	/// `P * (R*a + r*A) / (2*R*A) * (1 - |R*a - r*A| / ((r+R)*(a+A)))`
	pub fn units_for_add(&self, rune_amount: &Amount, asset_amount: &Amount) -> Amount {
		let big_r = self.pool.rune_depth.asset_value();
		let big_a = self.pool.asset_depth.asset_value();
		let r = rune_amount.asset_value();
		let a = asset_amount.asset_value();

		let depth_product = &big_r * &big_a;
		if depth_product.is_zero() {
			return Amount::zero(THORCHAIN_DECIMAL);
		}

		let cross = &big_r * &a + &r * &big_a;
		let base_units = self.pool_units.asset_value() * &cross / (BigDecimal::from(2) * depth_product);

		let denominator = (&r + &big_r) * (&a + &big_a);
		let slip_adjustment = if denominator.is_zero() {
			BigDecimal::zero()
		} else {
			BigDecimal::from(1) - (&big_r * &a - &r * &big_a).abs() / denominator
		};

		Amount::from_asset_value(base_units * slip_adjustment, THORCHAIN_DECIMAL)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::pool::tests::pool_detail;
	use std::str::FromStr;

	fn sample_pool() -> Pool {
		// 100 asset / 1000 RUNE
		Pool::from_detail(pool_detail("BTC.BTC", "10000000000", "100000000000")).unwrap()
	}

	#[test]
	fn test_pool_share_and_redeemable_legs() {
		let liquidity = Liquidity::new(
			sample_pool(),
			Amount::from_asset_str("500", 8).unwrap(),
			Amount::from_asset_str("50", 8).unwrap(),
		);
		assert_eq!(liquidity.pool_share(), Percent::from_percent(10));
		assert_eq!(
			liquidity.rune_share().asset_value(),
			BigDecimal::from_str("100").unwrap()
		);
		assert_eq!(
			liquidity.asset_share().asset_value(),
			BigDecimal::from_str("10").unwrap()
		);
	}

	#[test]
	fn test_balanced_add_mints_proportional_units() {
		let liquidity = Liquidity::new(
			sample_pool(),
			Amount::from_asset_str("500", 8).unwrap(),
			Amount::zero(8),
		);
		// 10% of both depths, perfectly balanced: no slip penalty
		let units = liquidity.units_for_add(
			&Amount::from_asset_str("100", 8).unwrap(),
			&Amount::from_asset_str("10", 8).unwrap(),
		);
		assert_eq!(units.asset_value(), BigDecimal::from_str("50").unwrap());
	}

	#[test]
	fn test_lopsided_add_is_penalized() {
		let liquidity = Liquidity::new(
			sample_pool(),
			Amount::from_asset_str("500", 8).unwrap(),
			Amount::zero(8),
		);
		let balanced = liquidity.units_for_add(
			&Amount::from_asset_str("100", 8).unwrap(),
			&Amount::from_asset_str("10", 8).unwrap(),
		);
		let lopsided = liquidity.units_for_add(
			&Amount::from_asset_str("200", 8).unwrap(),
			&Amount::zero(8),
		);
		assert!(lopsided < balanced);
	}

	#[test]
	fn test_empty_pool_mints_nothing() {
		let empty = Pool::from_detail(pool_detail("BTC.BTC", "0", "0")).unwrap();
		let liquidity = Liquidity::new(empty, Amount::zero(8), Amount::zero(8));
		assert!(liquidity
			.units_for_add(
				&Amount::from_asset_str("1", 8).unwrap(),
				&Amount::from_asset_str("1", 8).unwrap()
			)
			.is_zero());
	}
}
