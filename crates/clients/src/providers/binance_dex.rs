//! Binance Chain DEX REST gateway

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::warn;

use mcs_types::{
	Amount, Chain, ChainProvider, ClientResult, FeeRates, RawBalance, SignedTransfer, TxHash,
};

use crate::address;
use crate::providers::{base_url, http_client, DEFAULT_TIMEOUT_MS};

#[derive(Debug)]
pub struct BinanceDexProvider {
	base_url: String,
	client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct AccountResponse {
	#[serde(default)]
	balances: Vec<AccountBalance>,
}

#[derive(Debug, Deserialize)]
struct AccountBalance {
	symbol: String,
	free: String,
}

#[derive(Debug, Deserialize)]
struct BroadcastResponse {
	hash: String,
}

impl BinanceDexProvider {
	pub fn new(raw_base: &str) -> ClientResult<Self> {
		Ok(Self {
			base_url: base_url(raw_base)?,
			client: http_client(DEFAULT_TIMEOUT_MS)?,
		})
	}
}

#[async_trait]
impl ChainProvider for BinanceDexProvider {
	fn chain(&self) -> Chain {
		Chain::Binance
	}

	async fn balances(&self, address: &str) -> ClientResult<Vec<RawBalance>> {
		let url = format!("{}/api/v1/account/{}", self.base_url, address);
		let response = self.client.get(url).send().await?;
		// unseen accounts are 404 on the DEX API
		if response.status() == StatusCode::NOT_FOUND {
			return Ok(Vec::new());
		}
		let account: AccountResponse = response.error_for_status()?.json().await?;

		let decimals = Chain::Binance.native_decimals();
		Ok(account
			.balances
			.into_iter()
			.filter_map(|entry| {
				// `free` is a human-scale decimal string
				match Amount::from_asset_str(&entry.free, decimals) {
					Ok(amount) => Some(RawBalance {
						symbol: entry.symbol,
						amount: amount.base_units_string(),
						decimals: Some(decimals),
					}),
					Err(e) => {
						warn!("Skipping BNB balance entry {}: {}", entry.symbol, e);
						None
					},
				}
			})
			.collect())
	}

	async fn fee_rates(&self) -> ClientResult<FeeRates> {
		// fixed-fee chain; the rate is nominal
		Ok(FeeRates::flat(1.0))
	}

	async fn broadcast(&self, transfer: &SignedTransfer) -> ClientResult<TxHash> {
		let url = format!("{}/api/v1/broadcast", self.base_url);
		let response: BroadcastResponse = self
			.client
			.post(url)
			.json(transfer)
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(response.hash)
	}

	fn validate_address(&self, raw: &str) -> bool {
		address::is_valid_bech32(raw, "bnb")
	}

	fn explorer_tx_url(&self, hash: &str) -> String {
		format!("https://explorer.binance.org/tx/{}", hash)
	}
}
