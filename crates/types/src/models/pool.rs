//! Liquidity pool model built over the indexing service's pool detail

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::THORCHAIN_DECIMAL;
use crate::models::errors::PoolError;
use crate::models::{Amount, Asset};

/// Raw pool record as served by the indexing API
///
/// Depth and unit fields are 1e8 base-unit integers encoded as strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoolDetail {
	pub asset: String,
	pub asset_depth: String,
	pub rune_depth: String,
	#[serde(default)]
	pub asset_price: Option<String>,
	#[serde(default, rename = "assetPriceUSD")]
	pub asset_price_usd: Option<String>,
	#[serde(default)]
	pub liquidity_units: Option<String>,
	#[serde(default)]
	pub units: Option<String>,
	#[serde(default, rename = "poolAPY")]
	pub pool_apy: Option<String>,
	#[serde(default)]
	pub status: Option<String>,
	#[serde(default, rename = "volume24h")]
	pub volume_24h: Option<String>,
}

/// A pool with parsed asset identity and two-sided depth
#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
	pub asset: Asset,
	pub rune_depth: Amount,
	pub asset_depth: Amount,
	pub detail: PoolDetail,
}

impl Pool {
	pub fn from_detail(detail: PoolDetail) -> Result<Self, PoolError> {
		let asset = Asset::from_string(&detail.asset)?;
		let rune_depth = Amount::from_base_str(&detail.rune_depth, THORCHAIN_DECIMAL).map_err(
			|_| PoolError::InvalidDepth {
				asset: detail.asset.clone(),
				value: detail.rune_depth.clone(),
			},
		)?;
		let asset_depth = Amount::from_base_str(&detail.asset_depth, THORCHAIN_DECIMAL).map_err(
			|_| PoolError::InvalidDepth {
				asset: detail.asset.clone(),
				value: detail.asset_depth.clone(),
			},
		)?;
		Ok(Self {
			asset,
			rune_depth,
			asset_depth,
			detail,
		})
	}

	/// RUNE per one unit of the pool asset
	pub fn asset_price_in_rune(&self) -> BigDecimal {
		if self.asset_depth.is_zero() {
			return BigDecimal::zero();
		}
		self.rune_depth.asset_value() / self.asset_depth.asset_value()
	}

	/// Pool-asset units per one RUNE
	pub fn rune_price_in_asset(&self) -> BigDecimal {
		if self.rune_depth.is_zero() {
			return BigDecimal::zero();
		}
		self.asset_depth.asset_value() / self.rune_depth.asset_value()
	}

	/// Total liquidity units issued for the pool, when the detail carries them
	pub fn units(&self) -> Option<Amount> {
		let raw = self.detail.units.as_deref().or(self.detail.liquidity_units.as_deref())?;
		Amount::from_base_str(raw, THORCHAIN_DECIMAL).ok()
	}

	pub fn is_available(&self) -> bool {
		self.detail
			.status
			.as_deref()
			.map(|s| s.eq_ignore_ascii_case("available"))
			.unwrap_or(true)
	}

	pub fn find<'a>(pools: &'a [Pool], asset: &Asset) -> Option<&'a Pool> {
		pools.iter().find(|pool| &pool.asset == asset)
	}
}

impl fmt::Display for Pool {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} pool", self.asset)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;

	pub(crate) fn pool_detail(asset: &str, asset_depth: &str, rune_depth: &str) -> PoolDetail {
		PoolDetail {
			asset: asset.to_string(),
			asset_depth: asset_depth.to_string(),
			rune_depth: rune_depth.to_string(),
			asset_price: None,
			asset_price_usd: None,
			liquidity_units: None,
			units: None,
			pool_apy: None,
			status: Some("available".to_string()),
			volume_24h: None,
		}
	}

	#[test]
	fn test_pool_pricing() {
		// 100 BTC against 1000 RUNE
		let pool =
			Pool::from_detail(pool_detail("BTC.BTC", "10000000000", "100000000000")).unwrap();
		assert_eq!(pool.asset_price_in_rune(), BigDecimal::from_str("10").unwrap());
		assert_eq!(pool.rune_price_in_asset(), BigDecimal::from_str("0.1").unwrap());
	}

	#[test]
	fn test_zero_depth_prices_are_zero() {
		let pool = Pool::from_detail(pool_detail("BTC.BTC", "0", "0")).unwrap();
		assert!(pool.asset_price_in_rune().is_zero());
		assert!(pool.rune_price_in_asset().is_zero());
	}

	#[test]
	fn test_invalid_detail_rejected() {
		assert!(Pool::from_detail(pool_detail("NOPE", "1", "1")).is_err());
		assert!(Pool::from_detail(pool_detail("BTC.BTC", "depth", "1")).is_err());
	}

	#[test]
	fn test_detail_deserializes_indexer_shape() {
		let raw = r#"{
			"asset": "ETH.ETH",
			"assetDepth": "1000",
			"runeDepth": "2000",
			"assetPriceUSD": "1800.5",
			"volume24h": "123",
			"status": "available"
		}"#;
		let detail: PoolDetail = serde_json::from_str(raw).unwrap();
		assert_eq!(detail.asset, "ETH.ETH");
		assert_eq!(detail.asset_price_usd.as_deref(), Some("1800.5"));
		assert!(detail.units.is_none());
	}
}
