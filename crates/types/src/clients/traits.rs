//! Core client traits
//!
//! [`ChainClient`] is the one contract every per-chain implementation
//! fulfills; the orchestrator never dispatches over an open-ended adapter
//! list, it owns one concrete client per supported chain. [`ChainProvider`]
//! models the per-chain node/indexer gateway the spec treats as an opaque
//! collaborator, and [`WalletProvider`] models an injected browser-extension
//! signer.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;

use crate::clients::errors::ClientResult;
use crate::models::{
	Asset, AssetAmount, Chain, ChainWallet, FeeRates, InboundAddress,
	LiquidityProviderDetail, Mimir, Pool, RawBalance, SignedTransfer, TxHash, TxParams,
};

/// Injected wallet extension: account lookup and signing happen out of
/// process behind a `request({method, params})` API
#[async_trait]
pub trait WalletProvider: Send + Sync + Debug {
	async fn request(&self, method: &str, params: Value) -> ClientResult<Value>;
}

/// Opaque per-chain node/indexer gateway
#[async_trait]
pub trait ChainProvider: Send + Sync + Debug {
	fn chain(&self) -> Chain;

	/// All balances held at an address, in base units
	async fn balances(&self, address: &str) -> ClientResult<Vec<RawBalance>>;

	/// Current fee-rate tiers
	async fn fee_rates(&self) -> ClientResult<FeeRates>;

	/// Submit a signed transfer; returns the transaction hash
	async fn broadcast(&self, transfer: &SignedTransfer) -> ClientResult<TxHash>;

	fn validate_address(&self, address: &str) -> bool;

	fn explorer_tx_url(&self, hash: &str) -> String;
}

/// Ethereum gateway extensions: read-only contract calls and transaction
/// submission with calldata
#[async_trait]
pub trait EthProvider: ChainProvider {
	/// `eth_call` against a contract; calldata and result are 0x-hex
	async fn eth_call(&self, to: &str, data: &str) -> ClientResult<String>;

	/// Submit a (possibly value-bearing) contract call
	async fn send_transaction(
		&self,
		request: &crate::models::EthCallRequest,
	) -> ClientResult<TxHash>;
}

/// One connected chain client
#[async_trait]
pub trait ChainClient: Send + Sync + Debug {
	fn chain(&self) -> Chain;

	/// The connected wallet record, if any
	fn wallet(&self) -> Option<ChainWallet>;

	/// Derive a signing key from a mnemonic phrase and resolve the address.
	/// Purely local; no network call.
	fn connect_keystore(&self, phrase: &str) -> ClientResult<ChainWallet>;

	/// Route address lookup and signing through an injected wallet provider
	async fn connect_wallet_provider(
		&self,
		provider: Arc<dyn WalletProvider>,
	) -> ClientResult<ChainWallet>;

	/// Reload all balances for the connected address and store them on the
	/// wallet record
	async fn load_balance(&self) -> ClientResult<Vec<AssetAmount>>;

	/// Reload balances, then check the wallet covers the requested amount.
	/// An absent asset is `false`, never an error.
	async fn has_amount_in_balance(&self, amount: &AssetAmount) -> ClientResult<bool> {
		let balances = self.load_balance().await?;
		Ok(balances
			.iter()
			.find(|entry| entry.asset == amount.asset)
			.map(|entry| entry.amount >= amount.amount)
			.unwrap_or(false))
	}

	/// Build, sign and submit a transfer via the active signing backend
	async fn transfer(&self, params: &TxParams) -> ClientResult<TxHash>;

	/// Drop wallet state and signing backend
	fn disconnect(&self);
}

/// Live protocol snapshot source (node API)
#[async_trait]
pub trait InboundSource: Send + Sync + Debug {
	async fn inbound_addresses(&self) -> ClientResult<Vec<InboundAddress>>;

	async fn mimir(&self) -> ClientResult<Mimir>;

	/// Liquidity-provider record for an address in a pool, if any
	async fn liquidity_provider(
		&self,
		asset: &Asset,
		address: &str,
	) -> ClientResult<Option<LiquidityProviderDetail>>;
}

/// Pool universe source (indexing API)
#[async_trait]
pub trait PoolSource: Send + Sync + Debug {
	async fn pools(&self) -> ClientResult<Vec<Pool>>;
}
