//! Haskoin-style UTXO indexer gateway (BTC, BCH, LTC)

use async_trait::async_trait;
use serde::Deserialize;

use mcs_types::{
	Chain, ChainProvider, ClientResult, FeeRates, RawBalance, SignedTransfer, TxHash,
};

use crate::address;
use crate::providers::{base_url, http_client, DEFAULT_TIMEOUT_MS};

#[derive(Debug)]
pub struct HaskoinProvider {
	chain: Chain,
	base_url: String,
	explorer_base: String,
	hrp: Option<&'static str>,
	base58_version: u8,
	fee_rates: FeeRates,
	client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct AddressBalance {
	confirmed: u64,
	#[serde(default)]
	#[allow(dead_code)]
	unconfirmed: i64,
}

#[derive(Debug, Deserialize)]
struct BroadcastResponse {
	txid: String,
}

impl HaskoinProvider {
	fn new(
		chain: Chain,
		raw_base: &str,
		explorer_base: &str,
		hrp: Option<&'static str>,
		base58_version: u8,
		fee_rates: FeeRates,
	) -> ClientResult<Self> {
		Ok(Self {
			chain,
			base_url: base_url(raw_base)?,
			explorer_base: explorer_base.trim_end_matches('/').to_string(),
			hrp,
			base58_version,
			fee_rates,
			client: http_client(DEFAULT_TIMEOUT_MS)?,
		})
	}

	pub fn bitcoin(raw_base: &str) -> ClientResult<Self> {
		Self::new(
			Chain::Bitcoin,
			raw_base,
			"https://blockchair.com/bitcoin/transaction",
			Some("bc"),
			0x00,
			FeeRates {
				average: 10.0,
				fast: 25.0,
				fastest: 60.0,
			},
		)
	}

	pub fn bitcoin_cash(raw_base: &str) -> ClientResult<Self> {
		Self::new(
			Chain::BitcoinCash,
			raw_base,
			"https://blockchair.com/bitcoin-cash/transaction",
			None,
			0x00,
			FeeRates {
				average: 1.0,
				fast: 2.0,
				fastest: 5.0,
			},
		)
	}

	pub fn litecoin(raw_base: &str) -> ClientResult<Self> {
		Self::new(
			Chain::Litecoin,
			raw_base,
			"https://blockchair.com/litecoin/transaction",
			Some("ltc"),
			0x30,
			FeeRates {
				average: 1.0,
				fast: 5.0,
				fastest: 10.0,
			},
		)
	}
}

#[async_trait]
impl ChainProvider for HaskoinProvider {
	fn chain(&self) -> Chain {
		self.chain
	}

	async fn balances(&self, address: &str) -> ClientResult<Vec<RawBalance>> {
		let address = self.chain.strip_address_prefix(address);
		let url = format!("{}/address/{}/balance", self.base_url, address);
		let balance: AddressBalance = self
			.client
			.get(url)
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(vec![RawBalance {
			symbol: self.chain.gas_symbol().to_string(),
			amount: balance.confirmed.to_string(),
			decimals: Some(self.chain.native_decimals()),
		}])
	}

	async fn fee_rates(&self) -> ClientResult<FeeRates> {
		Ok(self.fee_rates)
	}

	async fn broadcast(&self, transfer: &SignedTransfer) -> ClientResult<TxHash> {
		let url = format!("{}/transactions", self.base_url);
		let response: BroadcastResponse = self
			.client
			.post(url)
			.json(transfer)
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(response.txid)
	}

	fn validate_address(&self, raw: &str) -> bool {
		let stripped = self.chain.strip_address_prefix(raw);
		let segwit_ok = self
			.hrp
			.map(|hrp| address::is_valid_bech32(stripped, hrp))
			.unwrap_or(false);
		segwit_ok || address::is_valid_base58check(stripped, self.base58_version)
	}

	fn explorer_tx_url(&self, hash: &str) -> String {
		format!("{}/{}", self.explorer_base, hash)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_address_validation_per_chain() {
		let btc = HaskoinProvider::bitcoin("https://haskoin.example/btc").unwrap();
		assert!(btc.validate_address("bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu"));
		assert!(!btc.validate_address("ltc1qabc"));
		assert!(!btc.validate_address(""));

		let ltc = HaskoinProvider::litecoin("https://haskoin.example/ltc").unwrap();
		assert!(!ltc.validate_address("bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu"));
	}

	#[test]
	fn test_explorer_url() {
		let btc = HaskoinProvider::bitcoin("https://haskoin.example/btc").unwrap();
		assert_eq!(
			btc.explorer_tx_url("deadbeef"),
			"https://blockchair.com/bitcoin/transaction/deadbeef"
		);
	}
}
