//! Ethereum JSON-RPC gateway
//!
//! Balance enumeration needs a token list: JSON-RPC cannot discover held
//! tokens, so the provider is configured with the token symbols to track
//! (`TICKER-0x...` form) and queries `balanceOf` per token.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use mcs_types::{
	bigdecimal::num_bigint::BigInt, Chain, ChainProvider, ClientError, ClientResult,
	EthCallRequest, EthProvider, FeeRates, RawBalance, SignedTransfer, TxHash,
};

use crate::abi;
use crate::address;
use crate::providers::{base_url, http_client, DEFAULT_TIMEOUT_MS};

#[derive(Debug)]
pub struct EthRpcProvider {
	rpc_url: String,
	tracked_tokens: Vec<String>,
	client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
	#[serde(default)]
	result: Option<Value>,
	#[serde(default)]
	error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
	code: i64,
	message: String,
}

impl EthRpcProvider {
	pub fn new(raw_base: &str) -> ClientResult<Self> {
		Ok(Self {
			rpc_url: base_url(raw_base)?,
			tracked_tokens: Vec::new(),
			client: http_client(DEFAULT_TIMEOUT_MS)?,
		})
	}

	/// Token symbols (`TICKER-0x...`) whose balances the gateway reports
	pub fn with_tokens(mut self, tokens: Vec<String>) -> Self {
		self.tracked_tokens = tokens;
		self
	}

	async fn rpc(&self, method: &str, params: Value) -> ClientResult<Value> {
		let body = json!({
			"jsonrpc": "2.0",
			"id": 1,
			"method": method,
			"params": params,
		});
		let response: RpcResponse = self
			.client
			.post(&self.rpc_url)
			.json(&body)
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		if let Some(error) = response.error {
			return Err(ClientError::Rpc {
				code: error.code,
				message: error.message,
			});
		}
		response.result.ok_or_else(|| ClientError::InvalidResponse {
			reason: format!("empty result for {}", method),
		})
	}

	async fn rpc_string(&self, method: &str, params: Value) -> ClientResult<String> {
		let value = self.rpc(method, params).await?;
		value
			.as_str()
			.map(str::to_string)
			.ok_or_else(|| ClientError::InvalidResponse {
				reason: format!("non-string result for {}", method),
			})
	}

	fn amount_hex(amount_base: &str) -> ClientResult<String> {
		let int = BigInt::parse_bytes(amount_base.as_bytes(), 10).ok_or_else(|| {
			ClientError::InvalidResponse {
				reason: format!("invalid base amount: {}", amount_base),
			}
		})?;
		Ok(format!("0x{:x}", int))
	}
}

#[async_trait]
impl ChainProvider for EthRpcProvider {
	fn chain(&self) -> Chain {
		Chain::Ethereum
	}

	async fn balances(&self, owner: &str) -> ClientResult<Vec<RawBalance>> {
		let native = self
			.rpc_string("eth_getBalance", json!([owner, "latest"]))
			.await?;
		let mut entries = vec![RawBalance {
			symbol: Chain::Ethereum.gas_symbol().to_string(),
			amount: abi::decode_uint(&native)?.to_string(),
			decimals: Some(Chain::Ethereum.native_decimals()),
		}];

		for symbol in &self.tracked_tokens {
			let contract = match symbol.split_once('-') {
				Some((_, contract)) => contract,
				None => {
					warn!("Skipping tracked token without contract: {}", symbol);
					continue;
				},
			};
			let data = match abi::balance_of_data(owner) {
				Ok(data) => data,
				Err(e) => {
					warn!("Skipping token {}: {}", symbol, e);
					continue;
				},
			};
			match self
				.eth_call(contract, &data)
				.await
				.and_then(|result| abi::decode_uint(&result))
			{
				Ok(amount) => entries.push(RawBalance {
					symbol: symbol.clone(),
					amount: amount.to_string(),
					decimals: None,
				}),
				Err(e) => warn!("Skipping token {}: balance query failed: {}", symbol, e),
			}
		}
		Ok(entries)
	}

	async fn fee_rates(&self) -> ClientResult<FeeRates> {
		let price = self.rpc_string("eth_gasPrice", json!([])).await?;
		let wei = abi::decode_uint(&price)?;
		let wei = u128::try_from(wei).map_err(|_| ClientError::InvalidResponse {
			reason: format!("implausible gas price: {}", price),
		})?;
		let gwei = wei as f64 / 1e9;
		Ok(FeeRates {
			average: gwei,
			fast: gwei * 1.25,
			fastest: gwei * 1.5,
		})
	}

	async fn broadcast(&self, transfer: &SignedTransfer) -> ClientResult<TxHash> {
		self.rpc_string(
			"eth_sendTransaction",
			json!([{
				"from": transfer.from_address,
				"to": transfer.recipient,
				"value": Self::amount_hex(&transfer.amount)?,
			}]),
		)
		.await
	}

	fn validate_address(&self, raw: &str) -> bool {
		address::is_valid_eth_address(raw)
	}

	fn explorer_tx_url(&self, hash: &str) -> String {
		format!("https://etherscan.io/tx/{}", hash)
	}
}

#[async_trait]
impl EthProvider for EthRpcProvider {
	async fn eth_call(&self, to: &str, data: &str) -> ClientResult<String> {
		self.rpc_string("eth_call", json!([{ "to": to, "data": data }, "latest"]))
			.await
	}

	async fn send_transaction(&self, request: &EthCallRequest) -> ClientResult<TxHash> {
		self.rpc_string(
			"eth_sendTransaction",
			json!([{
				"from": request.from,
				"to": request.to,
				"value": Self::amount_hex(&request.value)?,
				"data": request.data,
			}]),
		)
		.await
	}
}
