//! Multichain SDK Service
//!
//! The orchestrator façade, account aggregation and transaction tracking.

pub mod account;
pub mod errors;
pub mod multichain;
pub mod params;
pub mod tracker;

pub use account::Account;
pub use errors::MultiChainError;
pub use multichain::MultiChain;
pub use params::{
	AddLiquidityParams, AddLiquidityTxns, AddLiquidityType, PositionSide, UpgradeParams,
	WithdrawParams, WithdrawTarget,
};
pub use tracker::{TrackerStatus, TxTracker};
