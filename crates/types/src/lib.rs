//! Multichain SDK Types
//!
//! Shared entities and traits for the multichain swap SDK. This crate
//! contains all domain models organized by business entity, plus the client
//! traits the per-chain implementations fulfill.

pub mod clients;
pub mod constants;
pub mod models;

// Re-export bigdecimal and serde_json for convenience
pub use bigdecimal;
pub use serde_json;

// Re-export commonly used types for convenience
pub use models::{
	Amount, AmountType, Asset, AssetAmount, Chain, ChainWallet, ContractCall, EthCallRequest,
	FeeOption, FeeRates, InboundAddress, InboundAddressDetail, Liquidity,
	LiquidityProviderDetail, Memo, Mimir, Percent, Pool, PoolDetail, Price, RawBalance,
	SignedTransfer, Swap, TxHash, TxParams, WalletMap, WalletSource,
};

pub use models::errors::{
	AmountError, AssetError, ChainError, MemoError, PoolError, PriceError, SwapError,
	TrackerError,
};

pub use clients::{
	ChainClient, ChainProvider, ClientError, ClientResult, EthProvider, InboundSource,
	PoolSource, WalletProvider,
};

pub use constants::{rune_threshold_amount, MAX_ALLOWANCE, RUNE_THRESHOLD, THORCHAIN_DECIMAL};
