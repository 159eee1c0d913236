//! Error types for the domain entities

use thiserror::Error;

/// Chain lookup/parse errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChainError {
	#[error("Unknown chain: {value}")]
	UnknownChain { value: String },
}

/// Amount construction and arithmetic errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
	#[error("Decimal mismatch: {left} vs {right}")]
	DecimalMismatch { left: u8, right: u8 },

	#[error("Asset mismatch: {left} vs {right}")]
	AssetMismatch { left: String, right: String },

	#[error("Invalid amount value: {value}")]
	InvalidValue { value: String },
}

/// Asset string parse errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
	#[error("Invalid asset string: {value}")]
	InvalidAssetString { value: String },

	#[error(transparent)]
	Chain(#[from] ChainError),
}

/// Memo build/parse errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MemoError {
	#[error("Invalid memo: {value}")]
	InvalidMemo { value: String },

	#[error("Unknown memo kind: {kind}")]
	UnknownKind { kind: String },

	#[error(transparent)]
	Asset(#[from] AssetError),
}

/// Pool construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoolError {
	#[error(transparent)]
	Asset(#[from] AssetError),

	#[error("Invalid pool depth for {asset}: {value}")]
	InvalidDepth { asset: String, value: String },
}

/// Price derivation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PriceError {
	#[error("No pool found for asset: {asset}")]
	PoolNotFound { asset: String },
}

/// Swap construction/validity errors
///
/// These double as the reason codes the caller surfaces when a swap
/// attempt is rejected before any network call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwapError {
	#[error("Input and output asset are the same: {asset}")]
	InvalidPair { asset: String },

	#[error("Insufficient liquidity for {asset}")]
	InvalidLiquidity { asset: String },

	#[error("Swap amount is zero")]
	InvalidAmount,

	#[error("Network fee exceeds swap output")]
	InsufficientFee,

	#[error("Fee asset {fee_asset} does not match output asset {output_asset}")]
	InvalidFeeAsset {
		fee_asset: String,
		output_asset: String,
	},

	#[error(transparent)]
	Amount(#[from] AmountError),
}

/// Transaction tracker transition errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
	#[error("Invalid tracker transition: {from} -> {to}")]
	InvalidTransition { from: String, to: String },

	#[error("Refund flag requires a successful transaction, current status: {status}")]
	RefundRequiresSuccess { status: String },
}
