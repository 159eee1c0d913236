//! State shared by every chain client implementation

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

use mcs_types::{
	Asset, AssetAmount, Chain, ChainWallet, ClientError, ClientResult, RawBalance,
	WalletProvider,
};

use crate::backend::SignerBackend;

/// Wallet and signing-backend state behind interior mutability
///
/// Per-chain loads from the orchestrator's fan-out touch disjoint cores;
/// concurrent loads for the same chain are last-write-wins by design.
#[derive(Debug)]
pub(crate) struct ClientCore {
	chain: Chain,
	backend: RwLock<Option<SignerBackend>>,
	wallet: RwLock<Option<ChainWallet>>,
}

impl ClientCore {
	pub fn new(chain: Chain) -> Self {
		Self {
			chain,
			backend: RwLock::new(None),
			wallet: RwLock::new(None),
		}
	}

	pub fn chain(&self) -> Chain {
		self.chain
	}

	fn read_wallet(&self) -> RwLockReadGuard<'_, Option<ChainWallet>> {
		self.wallet.read().unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	fn write_wallet(&self) -> RwLockWriteGuard<'_, Option<ChainWallet>> {
		self.wallet.write().unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	fn read_backend(&self) -> RwLockReadGuard<'_, Option<SignerBackend>> {
		self.backend.read().unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	fn write_backend(&self) -> RwLockWriteGuard<'_, Option<SignerBackend>> {
		self.backend.write().unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	pub fn wallet(&self) -> Option<ChainWallet> {
		self.read_wallet().clone()
	}

	pub fn connect(&self, backend: SignerBackend, wallet: ChainWallet) {
		*self.write_backend() = Some(backend);
		*self.write_wallet() = Some(wallet);
	}

	pub fn backend(&self) -> ClientResult<SignerBackend> {
		self.read_backend().clone().ok_or(ClientError::NotConnected {
			chain: self.chain,
		})
	}

	pub fn address(&self) -> ClientResult<String> {
		self.read_wallet()
			.as_ref()
			.map(|wallet| wallet.address.clone())
			.ok_or(ClientError::NotConnected { chain: self.chain })
	}

	/// Store freshly loaded balances on the wallet record
	pub fn update_balances(&self, balances: Vec<AssetAmount>) {
		if let Some(wallet) = self.write_wallet().as_mut() {
			wallet.balances = balances;
		}
	}

	pub fn disconnect(&self) {
		*self.write_backend() = None;
		*self.write_wallet() = None;
	}
}

/// Resolve the connected address through an extension provider
pub(crate) async fn extension_address(
	chain: Chain,
	provider: &Arc<dyn WalletProvider>,
	method: &str,
) -> ClientResult<String> {
	let response = provider
		.request(method, serde_json::json!({ "chain": chain }))
		.await?;
	let address = match &response {
		serde_json::Value::String(address) => Some(address.clone()),
		serde_json::Value::Array(values) => values
			.first()
			.and_then(|value| value.as_str())
			.map(str::to_string),
		_ => None,
	};
	address
		.filter(|a| !a.is_empty())
		.ok_or_else(|| ClientError::InvalidResponse {
			reason: format!("no account returned by wallet provider for {}", chain),
		})
}

/// Convert gateway balance entries into asset amounts at native precision,
/// skipping entries that fail to parse
pub(crate) fn parse_balances(
	chain: Chain,
	raw: Vec<RawBalance>,
	drop_zero: bool,
) -> Vec<AssetAmount> {
	raw.into_iter()
		.filter_map(|entry| {
			let mut asset = Asset::new(chain, entry.symbol);
			if let Some(decimals) = entry.decimals {
				asset.set_decimal(decimals);
			}
			match AssetAmount::from_base_str(asset, &entry.amount) {
				Ok(balance) => Some(balance),
				Err(e) => {
					warn!("Skipping unparseable {} balance entry: {}", chain, e);
					None
				},
			}
		})
		.filter(|balance| !drop_zero || !balance.is_zero())
		.collect()
}
