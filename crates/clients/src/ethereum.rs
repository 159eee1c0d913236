//! Ethereum client
//!
//! The only client with contract state: ERC-20 allowance management against
//! the protocol router and a calldata-bearing `call` primitive used for
//! router deposits. Token precision is re-derived per asset through the
//! gateway and cached.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::json;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{debug, warn};

use mcs_types::{
	bigdecimal::num_bigint::BigInt, Asset, AssetAmount, AssetError, Chain, ChainClient,
	ChainWallet, ClientError, ClientResult, ContractCall, EthCallRequest, EthProvider, TxHash,
	TxParams, WalletProvider, WalletSource, MAX_ALLOWANCE,
};

use crate::abi;
use crate::address;
use crate::backend::{sign_transfer, SignerBackend};
use crate::core::ClientCore;
use crate::keys::{paths, KeystoreSigner};
use crate::utxo::tx_hash_from_value;

const ACCOUNTS_METHOD: &str = "eth_requestAccounts";
const SEND_TRANSACTION_METHOD: &str = "eth_sendTransaction";

#[derive(Debug)]
pub struct EthClient {
	provider: Arc<dyn EthProvider>,
	core: ClientCore,
	decimals_cache: DashMap<String, u8>,
}

impl EthClient {
	pub fn new(provider: Arc<dyn EthProvider>) -> Self {
		Self {
			provider,
			core: ClientCore::new(Chain::Ethereum),
			decimals_cache: DashMap::new(),
		}
	}

	fn token_contract(asset: &Asset) -> ClientResult<String> {
		asset
			.contract_address()
			.map(str::to_string)
			.ok_or_else(|| {
				ClientError::Asset(AssetError::InvalidAssetString {
					value: asset.to_string(),
				})
			})
	}

	/// On-chain precision of a token, cached per contract
	pub async fn erc20_decimals(&self, contract: &str) -> ClientResult<u8> {
		let key = contract.to_ascii_lowercase();
		if let Some(cached) = self.decimals_cache.get(&key) {
			return Ok(*cached);
		}
		let result = self.provider.eth_call(contract, &abi::decimals_data()).await?;
		let decimals = abi::decode_uint(&result)?;
		let decimals = u8::try_from(decimals).map_err(|_| ClientError::InvalidResponse {
			reason: format!("implausible decimals for {}: {}", contract, result),
		})?;
		self.decimals_cache.insert(key, decimals);
		Ok(decimals)
	}

	fn wei_hex(amount_base: &str) -> ClientResult<String> {
		let int = BigInt::parse_bytes(amount_base.as_bytes(), 10).ok_or_else(|| {
			ClientError::InvalidResponse {
				reason: format!("invalid base amount: {}", amount_base),
			}
		})?;
		Ok(format!("0x{:x}", int))
	}

	/// Submit a typed contract call via the active backend
	pub async fn call(&self, call: &ContractCall) -> ClientResult<TxHash> {
		let backend = self.core.backend()?;
		let from = self.core.address()?;
		let data = abi::encode_hex(call)?;
		// gas-asset router deposits carry the value with the call
		let value = match call {
			ContractCall::RouterDeposit {
				token: None,
				amount,
				..
			} => amount.clone(),
			_ => "0".to_string(),
		};

		match backend {
			SignerBackend::Keystore(signer) => {
				let request = self.signed_call_request(&signer, &from, call.target(), &value, &data);
				self.provider.send_transaction(&request).await
			},
			SignerBackend::Extension(wallet_provider) => {
				let response = wallet_provider
					.request(
						SEND_TRANSACTION_METHOD,
						json!([{
							"from": from,
							"to": call.target(),
							"value": Self::wei_hex(&value)?,
							"data": data,
						}]),
					)
					.await?;
				tx_hash_from_value(&response)
			},
		}
	}

	fn signed_call_request(
		&self,
		signer: &KeystoreSigner,
		from: &str,
		to: &str,
		value: &str,
		data: &str,
	) -> EthCallRequest {
		let payload = json!({
			"data": data,
			"from": from,
			"to": to,
			"value": value,
		});
		let digest: [u8; 32] = Sha256::digest(payload.to_string().as_bytes()).into();
		EthCallRequest {
			from: from.to_string(),
			to: to.to_string(),
			value: value.to_string(),
			data: data.to_string(),
			public_key: Some(signer.public_key_hex()),
			signature: Some(signer.sign_digest(digest)),
		}
	}

	/// Whether the router may already spend the token; the chain's gas asset
	/// needs no allowance
	pub async fn is_approved(&self, asset: &Asset, spender: &str) -> ClientResult<bool> {
		if asset.is_gas_asset() || asset.contract_address().is_none() {
			return Ok(true);
		}
		let contract = Self::token_contract(asset)?;
		let owner = self.core.address()?;
		let result = self
			.provider
			.eth_call(&contract, &abi::allowance_data(&owner, spender)?)
			.await?;
		Ok(abi::decode_uint(&result)? > BigInt::from(0))
	}

	/// Grant the router an unlimited allowance for the token
	pub async fn approve(&self, asset: &Asset, spender: &str) -> ClientResult<TxHash> {
		let contract = Self::token_contract(asset)?;
		self.call(&ContractCall::Approve {
			token: contract,
			spender: spender.to_string(),
			amount: MAX_ALLOWANCE.to_string(),
		})
		.await
	}
}

#[async_trait]
impl ChainClient for EthClient {
	fn chain(&self) -> Chain {
		Chain::Ethereum
	}

	fn wallet(&self) -> Option<ChainWallet> {
		self.core.wallet()
	}

	fn connect_keystore(&self, phrase: &str) -> ClientResult<ChainWallet> {
		let signer = KeystoreSigner::from_phrase(phrase, &paths::ETHEREUM)?;
		let resolved = address::eth_address(signer.public_key());
		let wallet = ChainWallet::new(Chain::Ethereum, WalletSource::Keystore, resolved);
		self.core
			.connect(SignerBackend::Keystore(signer), wallet.clone());
		debug!("ETH keystore connected: {}", wallet.address);
		Ok(wallet)
	}

	async fn connect_wallet_provider(
		&self,
		provider: Arc<dyn WalletProvider>,
	) -> ClientResult<ChainWallet> {
		let response = provider.request(ACCOUNTS_METHOD, json!([])).await?;
		let resolved = response
			.as_array()
			.and_then(|accounts| accounts.first())
			.and_then(|account| account.as_str())
			.filter(|account| !account.is_empty())
			.map(str::to_string)
			.ok_or_else(|| ClientError::InvalidResponse {
				reason: "no account returned by the injected provider".to_string(),
			})?;
		let wallet = ChainWallet::new(Chain::Ethereum, WalletSource::Metamask, resolved);
		self.core
			.connect(SignerBackend::Extension(provider), wallet.clone());
		Ok(wallet)
	}

	async fn load_balance(&self) -> ClientResult<Vec<AssetAmount>> {
		let resolved = self.core.address()?;
		let raw = self.provider.balances(&resolved).await?;

		let mut balances = Vec::with_capacity(raw.len());
		for entry in raw {
			let mut asset = Asset::new(Chain::Ethereum, entry.symbol);
			match entry.decimals {
				Some(decimals) => asset.set_decimal(decimals),
				None => {
					if let Some(contract) = asset.contract_address().map(str::to_string) {
						match self.erc20_decimals(&contract).await {
							Ok(decimals) => asset.set_decimal(decimals),
							Err(e) => {
								warn!("Skipping {}: decimals lookup failed: {}", asset, e);
								continue;
							},
						}
					}
				},
			}
			match AssetAmount::from_base_str(asset, &entry.amount) {
				Ok(balance) => balances.push(balance),
				Err(e) => warn!("Skipping unparseable ETH balance entry: {}", e),
			}
		}
		// ETH convention: zero balances are dropped
		balances.retain(|balance| !balance.is_zero());
		self.core.update_balances(balances.clone());
		Ok(balances)
	}

	async fn transfer(&self, params: &TxParams) -> ClientResult<TxHash> {
		let backend = self.core.backend()?;
		let from = self.core.address()?;
		if !address::is_valid_eth_address(&params.recipient) {
			return Err(ClientError::InvalidAddress {
				chain: Chain::Ethereum,
				address: params.recipient.clone(),
			});
		}

		if !params.asset.is_gas_asset() {
			let contract = Self::token_contract(&params.asset)?;
			return self
				.call(&ContractCall::TransferErc20 {
					token: contract,
					recipient: params.recipient.clone(),
					amount: params.amount.base_units_string(),
				})
				.await;
		}

		match backend {
			SignerBackend::Keystore(signer) => {
				let fee_rate = match params.fee_rate {
					Some(rate) => Some(rate),
					None => Some(self.provider.fee_rates().await?.rate(params.fee_option)),
				};
				let transfer = sign_transfer(&signer, Chain::Ethereum, &from, params, fee_rate)?;
				self.provider.broadcast(&transfer).await
			},
			SignerBackend::Extension(wallet_provider) => {
				let response = wallet_provider
					.request(
						SEND_TRANSACTION_METHOD,
						json!([{
							"from": from,
							"to": params.recipient,
							"value": Self::wei_hex(&params.amount.base_units_string())?,
						}]),
					)
					.await?;
				tx_hash_from_value(&response)
			},
		}
	}

	fn disconnect(&self) {
		self.core.disconnect();
	}
}
