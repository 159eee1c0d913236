//! Error types for client and provider operations

use thiserror::Error;

use crate::models::errors::{AmountError, AssetError, ChainError, MemoError};
use crate::models::Chain;

pub type ClientResult<T> = Result<T, ClientError>;

/// Failures surfacing from a chain client or its gateway
///
/// Network failures are propagated unchanged: clients never retry, never
/// wrap beyond the typed conversions below. The caller owns retry policy.
#[derive(Error, Debug)]
pub enum ClientError {
	#[error("No wallet provider detected for {chain}")]
	ProviderNotDetected { chain: Chain },

	#[error("No wallet connected on {chain}")]
	NotConnected { chain: Chain },

	#[error("Invalid keystore phrase")]
	InvalidPhrase,

	#[error("Key derivation failed: {reason}")]
	KeyDerivation { reason: String },

	#[error("Invalid address for {chain}: {address}")]
	InvalidAddress { chain: Chain, address: String },

	#[error("Insufficient {asset} balance: requested {requested}, available {available}")]
	InsufficientBalance {
		asset: String,
		requested: String,
		available: String,
	},

	#[error(
		"Deposit would leave the wallet below the retained threshold: \
		 available {available}, required {required}"
	)]
	InsufficientThreshold { available: String, required: String },

	#[error("Unsupported operation {operation} on {chain}")]
	Unsupported { operation: String, chain: Chain },

	#[error("Configuration error: {reason}")]
	Configuration { reason: String },

	#[error("Provider request rejected: {code} - {message}")]
	Rpc { code: i64, message: String },

	#[error("Invalid provider response: {reason}")]
	InvalidResponse { reason: String },

	#[error("Broadcast rejected: {reason}")]
	Broadcast { reason: String },

	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error(transparent)]
	Chain(#[from] ChainError),

	#[error(transparent)]
	Asset(#[from] AssetError),

	#[error(transparent)]
	Amount(#[from] AmountError),

	#[error(transparent)]
	Memo(#[from] MemoError),
}
