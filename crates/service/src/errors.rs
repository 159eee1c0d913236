//! Orchestrator errors

use thiserror::Error;

use mcs_types::{AmountError, Chain, ClientError, SwapError};

use crate::params::AddLiquidityTxns;

#[derive(Error, Debug)]
pub enum MultiChainError {
	#[error(transparent)]
	Client(#[from] ClientError),

	#[error(transparent)]
	Swap(#[from] SwapError),

	#[error(transparent)]
	Amount(#[from] AmountError),

	#[error("No wallet connected on {chain}")]
	NoWalletConnected { chain: Chain },

	#[error("Could not resolve an output address on {chain}")]
	NoOutputAddress { chain: Chain },

	#[error("No inbound address known for {chain}")]
	NoInboundAddress { chain: Chain },

	#[error("No router contract known for {chain}")]
	NoRouter { chain: Chain },

	#[error("Trading is halted on {chain}")]
	ChainHalted { chain: Chain },

	#[error("Invalid parameters: {reason}")]
	InvalidParams { reason: String },

	#[error("Liquidity add interrupted after {} completed leg(s): {reason}", txns.count())]
	AddLiquidityInterrupted {
		txns: AddLiquidityTxns,
		reason: String,
	},
}
