//! Transfer parameters and gateway wire types

use serde::{Deserialize, Serialize};

use crate::models::{Amount, Asset, Chain};

pub type TxHash = String;

/// Fee tier selector for a transfer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeeOption {
	Average,
	#[default]
	Fast,
	Fastest,
}

/// Fee rates per tier, in the chain's native rate unit (sat/vB, gwei, ...)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeeRates {
	pub average: f64,
	pub fast: f64,
	pub fastest: f64,
}

impl FeeRates {
	pub fn flat(rate: f64) -> Self {
		Self {
			average: rate,
			fast: rate,
			fastest: rate,
		}
	}

	pub fn rate(&self, option: FeeOption) -> f64 {
		match option {
			FeeOption::Average => self.average,
			FeeOption::Fast => self.fast,
			FeeOption::Fastest => self.fastest,
		}
	}
}

/// Parameters for a native transfer or protocol-memo deposit
#[derive(Debug, Clone)]
pub struct TxParams {
	pub asset: Asset,
	pub amount: Amount,
	pub recipient: String,
	pub memo: Option<String>,
	pub fee_option: FeeOption,
	/// Explicit rate override; wins over `fee_option` when set
	pub fee_rate: Option<f64>,
}

impl TxParams {
	pub fn new(asset: Asset, amount: Amount, recipient: impl Into<String>) -> Self {
		Self {
			asset,
			amount,
			recipient: recipient.into(),
			memo: None,
			fee_option: FeeOption::default(),
			fee_rate: None,
		}
	}

	pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
		self.memo = Some(memo.into());
		self
	}

	pub fn with_fee_option(mut self, option: FeeOption) -> Self {
		self.fee_option = option;
		self
	}

	pub fn with_fee_rate(mut self, rate: f64) -> Self {
		self.fee_rate = Some(rate);
		self
	}
}

/// A keystore-signed transfer in the form the chain gateways accept
///
/// The gateway owns the chain-specific wire serialization; the client signs
/// the canonical digest of these fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignedTransfer {
	pub chain: Chain,
	pub from_address: String,
	pub recipient: String,
	pub asset: String,
	/// Base-unit integer string
	pub amount: String,
	pub memo: Option<String>,
	pub fee_rate: Option<f64>,
	pub public_key: String,
	pub signature: String,
}

/// One balance entry as returned by a chain/indexer gateway
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawBalance {
	/// Chain-local symbol (`BTC`, `RUNE`, `USDT-0x...`)
	pub symbol: String,
	/// Base-unit integer string
	pub amount: String,
	/// On-chain precision when the gateway knows it
	#[serde(default)]
	pub decimals: Option<u8>,
}

/// Typed contract-call parameter shapes for the ETH router flow
#[derive(Debug, Clone, PartialEq)]
pub enum ContractCall {
	Approve {
		token: String,
		spender: String,
		/// Base-unit allowance, decimal string
		amount: String,
	},
	TransferErc20 {
		token: String,
		recipient: String,
		amount: String,
	},
	RouterDeposit {
		router: String,
		vault: String,
		/// Token contract; `None` deposits the chain's gas asset
		token: Option<String>,
		amount: String,
		memo: String,
	},
}

impl ContractCall {
	/// The contract the call is addressed to
	pub fn target(&self) -> &str {
		match self {
			ContractCall::Approve { token, .. } => token,
			ContractCall::TransferErc20 { token, .. } => token,
			ContractCall::RouterDeposit { router, .. } => router,
		}
	}
}

/// A contract call ready for the ETH gateway
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EthCallRequest {
	pub from: String,
	pub to: String,
	/// Wei value carried with the call, decimal string
	pub value: String,
	/// ABI-encoded calldata, 0x-prefixed hex
	pub data: String,
	pub public_key: Option<String>,
	pub signature: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fee_rates_selection() {
		let rates = FeeRates {
			average: 10.0,
			fast: 20.0,
			fastest: 50.0,
		};
		assert_eq!(rates.rate(FeeOption::Average), 10.0);
		assert_eq!(rates.rate(FeeOption::Fastest), 50.0);
		assert_eq!(FeeRates::flat(3.0).rate(FeeOption::Fast), 3.0);
	}

	#[test]
	fn test_tx_params_builders() {
		let params = TxParams::new(Asset::btc(), Amount::from_base_units(1_000, 8), "bc1q")
			.with_memo("SWAP:THOR.RUNE:thor1abc")
			.with_fee_rate(12.5);
		assert_eq!(params.memo.as_deref(), Some("SWAP:THOR.RUNE:thor1abc"));
		assert_eq!(params.fee_rate, Some(12.5));
		assert_eq!(params.fee_option, FeeOption::Fast);
	}

	#[test]
	fn test_contract_call_target() {
		let call = ContractCall::RouterDeposit {
			router: "0xrouter".to_string(),
			vault: "0xvault".to_string(),
			token: None,
			amount: "1".to_string(),
			memo: "SWITCH:thor1".to_string(),
		};
		assert_eq!(call.target(), "0xrouter");
	}
}
