//! Supported blockchain identities and per-chain constants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::errors::ChainError;

/// Supported blockchain
///
/// The set is closed: every wallet map and client registry is keyed by
/// exactly these six chains.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Chain {
	#[serde(rename = "BTC")]
	Bitcoin,
	#[serde(rename = "BCH")]
	BitcoinCash,
	#[serde(rename = "LTC")]
	Litecoin,
	#[serde(rename = "BNB")]
	Binance,
	#[serde(rename = "ETH")]
	Ethereum,
	#[serde(rename = "THOR")]
	Thorchain,
}

impl Chain {
	/// Every supported chain, in wallet-map order
	pub const ALL: [Chain; 6] = [
		Chain::Bitcoin,
		Chain::BitcoinCash,
		Chain::Litecoin,
		Chain::Binance,
		Chain::Ethereum,
		Chain::Thorchain,
	];

	/// Canonical chain ticker used in asset strings and memos
	pub fn ticker(&self) -> &'static str {
		match self {
			Chain::Bitcoin => "BTC",
			Chain::BitcoinCash => "BCH",
			Chain::Litecoin => "LTC",
			Chain::Binance => "BNB",
			Chain::Ethereum => "ETH",
			Chain::Thorchain => "THOR",
		}
	}

	/// Symbol of the chain's native gas asset
	pub fn gas_symbol(&self) -> &'static str {
		match self {
			Chain::Thorchain => "RUNE",
			_ => self.ticker(),
		}
	}

	/// Decimal exponent of the chain's native asset
	pub fn native_decimals(&self) -> u8 {
		match self {
			Chain::Ethereum => 18,
			_ => 8,
		}
	}

	/// Display prefix some chains attach to addresses (stripped on intake)
	pub fn address_prefix(&self) -> Option<&'static str> {
		match self {
			Chain::BitcoinCash => Some("bitcoincash:"),
			_ => None,
		}
	}

	/// Strip the chain's display prefix, if the address carries one
	pub fn strip_address_prefix<'a>(&self, address: &'a str) -> &'a str {
		match self.address_prefix() {
			Some(prefix) => address.strip_prefix(prefix).unwrap_or(address),
			None => address,
		}
	}

	/// Minimal send amount, in base units, accepted on the chain
	pub fn dust_base_units(&self) -> u64 {
		match self {
			Chain::Bitcoin | Chain::BitcoinCash | Chain::Litecoin => 10_000,
			Chain::Binance => 1,
			Chain::Ethereum | Chain::Thorchain => 0,
		}
	}
}

impl fmt::Display for Chain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.ticker())
	}
}

impl FromStr for Chain {
	type Err = ChainError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"BTC" => Ok(Chain::Bitcoin),
			"BCH" => Ok(Chain::BitcoinCash),
			"LTC" => Ok(Chain::Litecoin),
			"BNB" => Ok(Chain::Binance),
			"ETH" => Ok(Chain::Ethereum),
			"THOR" => Ok(Chain::Thorchain),
			_ => Err(ChainError::UnknownChain {
				value: s.to_string(),
			}),
		}
	}
}
