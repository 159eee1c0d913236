//! Protocol-wide constants

use crate::models::{Amount, Asset, AssetAmount};

/// Decimal exponent of protocol base units (all pool depths and memo limits)
pub const THORCHAIN_DECIMAL: u8 = 8;

/// Whole RUNE a wallet must retain after a protocol deposit so later chain
/// operations can still pay for gas
pub const RUNE_THRESHOLD: u64 = 2;

/// Unlimited ERC-20 allowance (2^256 - 1), decimal string
pub const MAX_ALLOWANCE: &str =
	"115792089237316195423570985008687907853269984665640564039457584007913129639935";

/// The retained-balance threshold as an amount of native RUNE
pub fn rune_threshold_amount() -> AssetAmount {
	AssetAmount::new(
		Asset::rune_native(),
		Amount::from_asset_value(RUNE_THRESHOLD.into(), THORCHAIN_DECIMAL),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rune_threshold_amount() {
		let threshold = rune_threshold_amount();
		assert_eq!(threshold.asset, Asset::rune_native());
		assert_eq!(threshold.amount.base_units_string(), "200000000");
	}
}
