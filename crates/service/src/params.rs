//! Orchestrator operation parameters

use mcs_types::{Asset, AssetAmount, Percent, TxHash};

/// Liquidity-add mode
///
/// `SymRune` / `SymAsset` resume a previously interrupted symmetric add by
/// sending only the missing leg, paired against the address that already
/// deposited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddLiquidityType {
	Symmetric,
	AssetOnly,
	RuneOnly,
	SymRune,
	SymAsset,
}

#[derive(Debug, Clone)]
pub struct AddLiquidityParams {
	pub pool_asset: Asset,
	pub asset_amount: Option<AssetAmount>,
	pub rune_amount: Option<AssetAmount>,
}

/// Per-leg transaction hashes of a liquidity add
///
/// Symmetric adds are two independent transfers; when the second leg fails
/// the first hash stays observable here so the position can be completed
/// later with a resume mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddLiquidityTxns {
	pub asset_tx: Option<TxHash>,
	pub rune_tx: Option<TxHash>,
}

impl AddLiquidityTxns {
	pub fn count(&self) -> usize {
		usize::from(self.asset_tx.is_some()) + usize::from(self.rune_tx.is_some())
	}
}

/// How an existing liquidity position was entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionSide {
	Sym,
	RuneAsym,
	AssetAsym,
}

/// Which leg(s) a withdrawal should pay out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawTarget {
	Both,
	Rune,
	Asset,
}

#[derive(Debug, Clone)]
pub struct WithdrawParams {
	pub pool_asset: Asset,
	pub percent: Percent,
	pub from: PositionSide,
	pub to: WithdrawTarget,
}

/// Legacy-RUNE migration to the native chain
#[derive(Debug, Clone)]
pub struct UpgradeParams {
	/// Amount of BNB- or ETH-issued RUNE to migrate
	pub amount: AssetAmount,
	/// Native chain address receiving the migrated RUNE
	pub recipient: String,
}
