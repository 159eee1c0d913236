//! THORChain node REST gateway
//!
//! Doubles as the chain provider for THOR wallets and the live protocol
//! snapshot source (inbound addresses, mimir, liquidity providers).

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::warn;

use mcs_types::{
	Asset, Chain, ChainProvider, ClientResult, FeeRates, InboundAddress,
	InboundAddressDetail, InboundSource, LiquidityProviderDetail, Mimir, RawBalance,
	SignedTransfer, TxHash,
};

use crate::address;
use crate::providers::{base_url, http_client, DEFAULT_TIMEOUT_MS};

#[derive(Debug)]
pub struct ThornodeProvider {
	base_url: String,
	client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct BankBalancesResponse {
	#[serde(default)]
	balances: Vec<Coin>,
}

#[derive(Debug, Deserialize)]
struct Coin {
	denom: String,
	amount: String,
}

#[derive(Debug, Deserialize)]
struct TxResponse {
	#[serde(alias = "txhash")]
	hash: String,
}

impl ThornodeProvider {
	pub fn new(raw_base: &str) -> ClientResult<Self> {
		Ok(Self {
			base_url: base_url(raw_base)?,
			client: http_client(DEFAULT_TIMEOUT_MS)?,
		})
	}
}

#[async_trait]
impl ChainProvider for ThornodeProvider {
	fn chain(&self) -> Chain {
		Chain::Thorchain
	}

	async fn balances(&self, owner: &str) -> ClientResult<Vec<RawBalance>> {
		let url = format!("{}/cosmos/bank/v1beta1/balances/{}", self.base_url, owner);
		let response: BankBalancesResponse = self
			.client
			.get(url)
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(response
			.balances
			.into_iter()
			.map(|coin| RawBalance {
				symbol: coin.denom.to_ascii_uppercase(),
				amount: coin.amount,
				decimals: Some(Chain::Thorchain.native_decimals()),
			})
			.collect())
	}

	async fn fee_rates(&self) -> ClientResult<FeeRates> {
		// flat native fee; the rate is nominal
		Ok(FeeRates::flat(1.0))
	}

	async fn broadcast(&self, transfer: &SignedTransfer) -> ClientResult<TxHash> {
		let url = format!("{}/txs", self.base_url);
		let response: TxResponse = self
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
		address::is_valid_bech32(raw, "thor")
	}

	fn explorer_tx_url(&self, hash: &str) -> String {
		format!("https://viewblock.io/thorchain/tx/{}", hash)
	}
}

#[async_trait]
impl InboundSource for ThornodeProvider {
	async fn inbound_addresses(&self) -> ClientResult<Vec<InboundAddress>> {
		let url = format!("{}/thorchain/inbound_addresses", self.base_url);
		let details: Vec<InboundAddressDetail> = self
			.client
			.get(url)
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(details
			.into_iter()
			.filter_map(|detail| match InboundAddress::try_from(detail) {
				Ok(inbound) => Some(inbound),
				Err(e) => {
					warn!("Skipping inbound entry: {}", e);
					None
				},
			})
			.collect())
	}

	async fn mimir(&self) -> ClientResult<Mimir> {
		let url = format!("{}/thorchain/mimir", self.base_url);
		let mimir: Mimir = self
			.client
			.get(url)
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(mimir)
	}

	async fn liquidity_provider(
		&self,
		asset: &Asset,
		owner: &str,
	) -> ClientResult<Option<LiquidityProviderDetail>> {
		let url = format!(
			"{}/thorchain/pool/{}/liquidity_provider/{}",
			self.base_url, asset, owner
		);
		let response = self.client.get(url).send().await?;
		if response.status() == StatusCode::NOT_FOUND {
			return Ok(None);
		}
		let detail: LiquidityProviderDetail = response.error_for_status()?.json().await?;
		Ok(Some(detail))
	}
}
