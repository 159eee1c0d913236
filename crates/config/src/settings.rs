//! Configuration settings structures

use serde::{Deserialize, Serialize};

use mcs_types::Chain;

/// Main SDK settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub network: NetworkProfile,
	pub endpoints: EndpointSettings,
	pub logging: LoggingSettings,
}

/// Protocol network the SDK points at
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkProfile {
	#[default]
	Mainnet,
	Stagenet,
	Testnet,
}

/// Gateway endpoints, one per external service
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EndpointSettings {
	pub midgard_url: String,
	pub thornode_url: String,
	pub bitcoin_url: String,
	pub bitcoin_cash_url: String,
	pub litecoin_url: String,
	pub binance_url: String,
	pub ethereum_rpc_url: String,
	/// ERC-20 symbols (`TICKER-0x...`) whose balances the ETH gateway tracks
	pub ethereum_tokens: Vec<String>,
}

impl Default for EndpointSettings {
	fn default() -> Self {
		Self {
			midgard_url: "https://midgard.thorchain.info".to_string(),
			thornode_url: "https://thornode.thorchain.info".to_string(),
			bitcoin_url: "https://haskoin.ninerealms.com/btc".to_string(),
			bitcoin_cash_url: "https://haskoin.ninerealms.com/bch".to_string(),
			litecoin_url: "https://ltc.thorchain.info".to_string(),
			binance_url: "https://dex.binance.org".to_string(),
			ethereum_rpc_url: "https://ethereum-rpc.publicnode.com".to_string(),
			ethereum_tokens: Vec::new(),
		}
	}
}

impl EndpointSettings {
	/// The gateway endpoint serving a chain
	pub fn chain_url(&self, chain: Chain) -> &str {
		match chain {
			Chain::Bitcoin => &self.bitcoin_url,
			Chain::BitcoinCash => &self.bitcoin_cash_url,
			Chain::Litecoin => &self.litecoin_url,
			Chain::Binance => &self.binance_url,
			Chain::Ethereum => &self.ethereum_rpc_url,
			Chain::Thorchain => &self.thornode_url,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_cover_every_chain() {
		let settings = Settings::default();
		for chain in Chain::ALL {
			assert!(!settings.endpoints.chain_url(chain).is_empty());
		}
		assert_eq!(settings.network, NetworkProfile::Mainnet);
	}

	#[test]
	fn test_partial_config_deserializes_with_defaults() {
		let settings: Settings = serde_json::from_str(r#"{ "network": "stagenet" }"#).unwrap();
		assert_eq!(settings.network, NetworkProfile::Stagenet);
		assert_eq!(settings.logging.level, "info");
	}
}
