//! Swap calculation entity
//!
//! A [`Swap`] is built fresh for every quote attempt: it resolves the pools
//! involved, prices the output with the constant-product formula, and exposes
//! the derived slip, minimum output and validity verdict. Nothing here talks
//! to the network.

use bigdecimal::{BigDecimal, Zero};

use crate::constants::THORCHAIN_DECIMAL;
use crate::models::errors::SwapError;
use crate::models::{Asset, AssetAmount, Percent, Pool};

#[derive(Debug, Clone)]
pub struct Swap {
	pub input_asset: Asset,
	pub output_asset: Asset,
	pub input_amount: AssetAmount,
	pub slip_tolerance: Percent,
	pub fee: Option<AssetAmount>,
	input_pool: Option<Pool>,
	output_pool: Option<Pool>,
}

impl Swap {
	pub fn new(
		input_asset: Asset,
		output_asset: Asset,
		input_amount: AssetAmount,
		pools: &[Pool],
		slip_tolerance: Percent,
		fee: Option<AssetAmount>,
	) -> Result<Self, SwapError> {
		if input_asset == output_asset {
			return Err(SwapError::InvalidPair {
				asset: input_asset.to_string(),
			});
		}
		if let Some(fee) = &fee {
			if fee.asset != output_asset {
				return Err(SwapError::InvalidFeeAsset {
					fee_asset: fee.asset.to_string(),
					output_asset: output_asset.to_string(),
				});
			}
		}

		let input_pool = Self::resolve_pool(&input_asset, pools)?;
		let output_pool = Self::resolve_pool(&output_asset, pools)?;

		Ok(Self {
			input_asset,
			output_asset,
			input_amount,
			slip_tolerance,
			fee,
			input_pool,
			output_pool,
		})
	}

	fn resolve_pool(asset: &Asset, pools: &[Pool]) -> Result<Option<Pool>, SwapError> {
		if asset.is_rune_native() {
			return Ok(None);
		}
		let pool = Pool::find(pools, asset).ok_or_else(|| SwapError::InvalidLiquidity {
			asset: asset.to_string(),
		})?;
		if pool.rune_depth.is_zero() || pool.asset_depth.is_zero() {
			return Err(SwapError::InvalidLiquidity {
				asset: asset.to_string(),
			});
		}
		Ok(Some(pool.clone()))
	}

	/// Whether the swap routes through RUNE across two pools
	pub fn is_double(&self) -> bool {
		self.input_pool.is_some() && self.output_pool.is_some()
	}

	// y = (x * X * Y) / (x + X)^2
	fn single_output(x: &BigDecimal, input_depth: &BigDecimal, output_depth: &BigDecimal) -> BigDecimal {
		let denominator = x + input_depth;
		let denominator = &denominator * &denominator;
		if denominator.is_zero() {
			return BigDecimal::zero();
		}
		x * input_depth * output_depth / denominator
	}

	// slip = x / (x + X)
	fn single_slip(x: &BigDecimal, input_depth: &BigDecimal) -> BigDecimal {
		let denominator = x + input_depth;
		if denominator.is_zero() {
			return BigDecimal::zero();
		}
		x / denominator
	}

	/// Expected output before the network fee
	pub fn output_amount(&self) -> AssetAmount {
		let x = self.input_amount.amount.asset_value();
		let value = match (&self.input_pool, &self.output_pool) {
			// asset -> RUNE
			(Some(input), None) => Self::single_output(
				&x,
				&input.asset_depth.asset_value(),
				&input.rune_depth.asset_value(),
			),
			// RUNE -> asset
			(None, Some(output)) => Self::single_output(
				&x,
				&output.rune_depth.asset_value(),
				&output.asset_depth.asset_value(),
			),
			// asset -> RUNE -> asset
			(Some(input), Some(output)) => {
				let rune_leg = Self::single_output(
					&x,
					&input.asset_depth.asset_value(),
					&input.rune_depth.asset_value(),
				);
				Self::single_output(
					&rune_leg,
					&output.rune_depth.asset_value(),
					&output.asset_depth.asset_value(),
				)
			},
			// both RUNE is rejected at construction
			(None, None) => BigDecimal::zero(),
		};
		AssetAmount::new(
			self.output_asset.clone(),
			crate::models::Amount::from_asset_value(value, self.output_asset.decimal()),
		)
	}

	/// Expected output after the network fee, floored at zero
	pub fn output_after_fee(&self) -> AssetAmount {
		let output = self.output_amount();
		match &self.fee {
			Some(fee) => match output.sub(fee) {
				Ok(after) if after.amount.asset_value() < BigDecimal::zero() => {
					AssetAmount::zero(self.output_asset.clone())
				},
				Ok(after) => after,
				Err(_) => output,
			},
			None => output,
		}
	}

	/// Price impact of the swap
	pub fn slip(&self) -> Percent {
		let x = self.input_amount.amount.asset_value();
		match (&self.input_pool, &self.output_pool) {
			(Some(input), None) => {
				Percent::from_fraction(Self::single_slip(&x, &input.asset_depth.asset_value()))
			},
			(None, Some(output)) => {
				Percent::from_fraction(Self::single_slip(&x, &output.rune_depth.asset_value()))
			},
			(Some(input), Some(output)) => {
				let first = Self::single_slip(&x, &input.asset_depth.asset_value());
				let rune_leg = Self::single_output(
					&x,
					&input.asset_depth.asset_value(),
					&input.rune_depth.asset_value(),
				);
				let second = Self::single_slip(&rune_leg, &output.rune_depth.asset_value());
				// combined slip: s1 + s2 - s1*s2
				Percent::from_fraction(&first + &second - &first * &second)
			},
			(None, None) => Percent::zero(),
		}
	}

	/// Guaranteed minimum output under the slip tolerance, after fee
	pub fn min_output(&self) -> AssetAmount {
		self.output_after_fee()
			.mul_value(self.slip_tolerance.complement().as_fraction())
	}

	/// The minimum output expressed in protocol base units (1e8), the wire
	/// form of the swap memo limit
	pub fn min_output_base_units(&self) -> String {
		self.min_output()
			.amount
			.with_decimal(THORCHAIN_DECIMAL)
			.base_units_string()
	}

	/// Pre-flight validity verdict
	pub fn validate(&self) -> Result<(), SwapError> {
		if self.input_amount.is_zero() {
			return Err(SwapError::InvalidAmount);
		}
		if let Some(fee) = &self.fee {
			if fee.amount >= self.output_amount().amount {
				return Err(SwapError::InsufficientFee);
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::pool::tests::pool_detail;
	use crate::models::Amount;
	use std::str::FromStr;

	fn pools() -> Vec<Pool> {
		vec![
			// 100 BTC / 1000 RUNE
			Pool::from_detail(pool_detail("BTC.BTC", "10000000000", "100000000000")).unwrap(),
			// 1000 ETH / 1000 RUNE
			Pool::from_detail(pool_detail("ETH.ETH", "100000000000", "100000000000")).unwrap(),
		]
	}

	fn btc_in(value: &str) -> AssetAmount {
		AssetAmount::from_asset_str(Asset::btc(), value).unwrap()
	}

	#[test]
	fn test_single_swap_output_and_slip() {
		let swap = Swap::new(
			Asset::btc(),
			Asset::rune_native(),
			btc_in("10"),
			&pools(),
			Percent::zero(),
			None,
		)
		.unwrap();

		// y = (10 * 100 * 1000) / 110^2
		let output = swap.output_amount();
		let expected = BigDecimal::from_str("1000000")
			.unwrap() / BigDecimal::from_str("12100").unwrap();
		assert_eq!(output.amount.asset_value().with_scale(6), expected.with_scale(6));

		// slip = 10 / 110
		assert_eq!(
			swap.slip().as_fraction().with_scale(6),
			(BigDecimal::from(10) / BigDecimal::from(110)).with_scale(6)
		);
		assert!(!swap.is_double());
	}

	#[test]
	fn test_double_swap_routes_through_rune() {
		let swap = Swap::new(
			Asset::btc(),
			Asset::eth(),
			btc_in("10"),
			&pools(),
			Percent::zero(),
			None,
		)
		.unwrap();
		assert!(swap.is_double());

		// first leg ~82.6446 RUNE, second leg through the 1000/1000 pool
		let output = swap.output_amount();
		assert!(output.amount.asset_value() > BigDecimal::from(70));
		assert!(output.amount.asset_value() < BigDecimal::from(80));
		assert_eq!(output.asset, Asset::eth());
	}

	#[test]
	fn test_missing_pool_is_invalid_liquidity() {
		let result = Swap::new(
			Asset::btc(),
			Asset::bnb(),
			btc_in("1"),
			&pools(),
			Percent::zero(),
			None,
		);
		assert!(matches!(result, Err(SwapError::InvalidLiquidity { .. })));
	}

	#[test]
	fn test_zero_amount_is_invalid() {
		let swap = Swap::new(
			Asset::btc(),
			Asset::rune_native(),
			AssetAmount::zero(Asset::btc()),
			&pools(),
			Percent::zero(),
			None,
		)
		.unwrap();
		assert_eq!(swap.validate(), Err(SwapError::InvalidAmount));
	}

	#[test]
	fn test_fee_exceeding_output_is_invalid() {
		let fee = AssetAmount::from_asset_str(Asset::rune_native(), "1000000").unwrap();
		let swap = Swap::new(
			Asset::btc(),
			Asset::rune_native(),
			btc_in("1"),
			&pools(),
			Percent::zero(),
			Some(fee),
		)
		.unwrap();
		assert_eq!(swap.validate(), Err(SwapError::InsufficientFee));
	}

	#[test]
	fn test_min_output_honors_tolerance() {
		let swap = Swap::new(
			Asset::btc(),
			Asset::rune_native(),
			btc_in("10"),
			&pools(),
			Percent::from_percent(10),
			None,
		)
		.unwrap();
		let expected = swap
			.output_amount()
			.mul_value(&BigDecimal::from_str("0.9").unwrap());
		assert_eq!(swap.min_output(), expected);

		// wire form is an integer string in 1e8 units
		let limit = swap.min_output_base_units();
		assert!(limit.chars().all(|c| c.is_ascii_digit()));
		let as_amount = Amount::from_base_str(&limit, 8).unwrap();
		assert!(as_amount.asset_value() > BigDecimal::from(70));
	}

	#[test]
	fn test_same_asset_pair_rejected() {
		let result = Swap::new(
			Asset::btc(),
			Asset::btc(),
			btc_in("1"),
			&pools(),
			Percent::zero(),
			None,
		);
		assert!(matches!(result, Err(SwapError::InvalidPair { .. })));
	}
}
