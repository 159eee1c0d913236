//! Node API snapshot models: inbound addresses, governance params, pending LPs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::models::errors::ChainError;
use crate::models::Chain;

/// Raw inbound-address record as served by the node API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InboundAddressDetail {
	pub chain: String,
	pub address: String,
	#[serde(default)]
	pub pub_key: Option<String>,
	#[serde(default)]
	pub router: Option<String>,
	#[serde(default)]
	pub halted: bool,
	#[serde(default)]
	pub gas_rate: Option<String>,
}

/// Parsed inbound address for one chain
#[derive(Debug, Clone, PartialEq)]
pub struct InboundAddress {
	pub chain: Chain,
	pub address: String,
	pub router: Option<String>,
	pub halted: bool,
	pub gas_rate: Option<f64>,
}

impl TryFrom<InboundAddressDetail> for InboundAddress {
	type Error = ChainError;

	fn try_from(detail: InboundAddressDetail) -> Result<Self, Self::Error> {
		let chain = Chain::from_str(&detail.chain)?;
		let gas_rate = detail.gas_rate.as_deref().and_then(|raw| raw.parse().ok());
		Ok(Self {
			chain,
			address: detail.address,
			router: detail.router,
			halted: detail.halted,
			gas_rate,
		})
	}
}

impl InboundAddress {
	pub fn find(snapshot: &[InboundAddress], chain: Chain) -> Option<&InboundAddress> {
		snapshot.iter().find(|entry| entry.chain == chain)
	}
}

/// Governance parameter map ("mimir")
pub type Mimir = HashMap<String, i64>;

/// Per-address liquidity-provider record, including pending (asymmetric)
/// deposits awaiting their second leg
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiquidityProviderDetail {
	pub asset: String,
	#[serde(default)]
	pub rune_address: Option<String>,
	#[serde(default)]
	pub asset_address: Option<String>,
	#[serde(default)]
	pub units: Option<String>,
	#[serde(default)]
	pub pending_rune: Option<String>,
	#[serde(default)]
	pub pending_asset: Option<String>,
}

impl LiquidityProviderDetail {
	/// Whether a symmetric add is waiting for its other leg
	pub fn has_pending_leg(&self) -> bool {
		let pending = |value: &Option<String>| {
			value
				.as_deref()
				.map(|v| !v.is_empty() && v != "0")
				.unwrap_or(false)
		};
		pending(&self.pending_rune) || pending(&self.pending_asset)
	}
}
