//! Multichain SDK
//!
//! A unified wallet/client layer over six independent blockchains with one
//! orchestrator for the protocol operations (swap, liquidity, withdraw,
//! upgrade) of a THORChain-style cross-chain AMM.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use mcs_clients::{
	BchClient, BinanceDexProvider, BnbClient, BtcClient, EthClient, EthRpcProvider,
	HaskoinProvider, LtcClient, MidgardClient, ThorClient, ThornodeProvider,
};
use mcs_types::{ChainProvider, EthProvider, InboundSource};

// Core domain types - the most commonly used types
pub use mcs_types::{
	// External dependencies for convenience
	bigdecimal,
	serde_json,
	// Primary domain entities
	Amount,
	AmountType,
	Asset,
	AssetAmount,
	Chain,
	ChainClient,
	ChainWallet,
	// Error types
	ClientError,
	ClientResult,
	ContractCall,
	FeeOption,
	FeeRates,
	InboundAddress,
	Liquidity,
	Memo,
	Percent,
	Pool,
	PoolDetail,
	PoolSource,
	Price,
	Swap,
	SwapError,
	TxHash,
	TxParams,
	WalletMap,
	WalletProvider,
	WalletSource,
};

// Service layer
pub use mcs_service::{
	Account, AddLiquidityParams, AddLiquidityTxns, AddLiquidityType, MultiChain,
	MultiChainError, PositionSide, TrackerStatus, TxTracker, UpgradeParams, WithdrawParams,
	WithdrawTarget,
};

// Config
pub use mcs_config::{init_tracing, load_config, log_sdk_info, NetworkProfile, Settings};

// Module aliases for direct access to each layer
pub mod models {
	pub use mcs_types::*;
}

pub mod clients {
	pub use mcs_clients::*;
}

pub mod service {
	pub use mcs_service::*;
}

pub mod config {
	pub use mcs_config::*;
}

pub mod mocks;

// Re-export external dependencies for integration tests and examples
pub use async_trait;

/// Builder wiring settings, gateway providers and clients into a
/// [`MultiChain`] instance
///
/// Hosts construct this once at startup and inject the result; the SDK
/// keeps no process-wide singleton.
#[derive(Default)]
pub struct MultiChainBuilder {
	settings: Settings,
	chain_providers: HashMap<Chain, Arc<dyn ChainProvider>>,
	eth_provider: Option<Arc<dyn EthProvider>>,
	inbound_source: Option<Arc<dyn InboundSource>>,
}

impl MultiChainBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = settings;
		self
	}

	/// Override the gateway provider for one non-ETH chain
	pub fn with_chain_provider(mut self, provider: Arc<dyn ChainProvider>) -> Self {
		self.chain_providers.insert(provider.chain(), provider);
		self
	}

	/// Override the Ethereum gateway provider
	pub fn with_eth_provider(mut self, provider: Arc<dyn EthProvider>) -> Self {
		self.eth_provider = Some(provider);
		self
	}

	/// Override the protocol snapshot source
	pub fn with_inbound_source(mut self, source: Arc<dyn InboundSource>) -> Self {
		self.inbound_source = Some(source);
		self
	}

	fn provider_or(
		&mut self,
		chain: Chain,
		default: impl FnOnce(&Settings) -> ClientResult<Arc<dyn ChainProvider>>,
	) -> ClientResult<Arc<dyn ChainProvider>> {
		match self.chain_providers.remove(&chain) {
			Some(provider) => Ok(provider),
			None => default(&self.settings),
		}
	}

	pub fn build(mut self) -> ClientResult<MultiChain> {
		let endpoints = self.settings.endpoints.clone();

		let btc = self.provider_or(Chain::Bitcoin, |s| {
			Ok(Arc::new(HaskoinProvider::bitcoin(&s.endpoints.bitcoin_url)?))
		})?;
		let bch = self.provider_or(Chain::BitcoinCash, |s| {
			Ok(Arc::new(HaskoinProvider::bitcoin_cash(
				&s.endpoints.bitcoin_cash_url,
			)?))
		})?;
		let ltc = self.provider_or(Chain::Litecoin, |s| {
			Ok(Arc::new(HaskoinProvider::litecoin(&s.endpoints.litecoin_url)?))
		})?;
		let bnb = self.provider_or(Chain::Binance, |s| {
			Ok(Arc::new(BinanceDexProvider::new(&s.endpoints.binance_url)?))
		})?;

		let thornode = Arc::new(ThornodeProvider::new(&endpoints.thornode_url)?);
		let thor = self
			.provider_or(Chain::Thorchain, |_| Ok(thornode.clone()))?;

		let eth = match self.eth_provider.take() {
			Some(provider) => provider,
			None => Arc::new(
				EthRpcProvider::new(&endpoints.ethereum_rpc_url)?
					.with_tokens(endpoints.ethereum_tokens.clone()),
			),
		};

		let inbound_source = match self.inbound_source.take() {
			Some(source) => source,
			None => thornode,
		};

		info!("Multichain SDK wired for {} chains", Chain::ALL.len());
		Ok(MultiChain::new(
			BtcClient::new(btc),
			BchClient::new(bch),
			LtcClient::new(ltc),
			BnbClient::new(bnb),
			EthClient::new(eth),
			ThorClient::new(thor),
			inbound_source,
		))
	}
}

/// The pool universe source for the configured indexing endpoint
pub fn midgard_client(settings: &Settings) -> ClientResult<MidgardClient> {
	MidgardClient::new(&settings.endpoints.midgard_url)
}
