//! Shared implementation for the UTXO-family clients (BTC, BCH, LTC)
//!
//! The three chains differ only in address encoding, derivation path and
//! gateway endpoints; everything else — connect, balance load, transfer —
//! is identical and lives here.

use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use mcs_types::{
	AssetAmount, Chain, ChainProvider, ChainWallet, ClientError, ClientResult, TxHash,
	TxParams, WalletProvider, WalletSource,
};

use crate::address;
use crate::backend::{sign_transfer, SignerBackend};
use crate::core::{extension_address, parse_balances, ClientCore};
use crate::keys::KeystoreSigner;

pub(crate) const ACCOUNTS_METHOD: &str = "request_accounts";
pub(crate) const TRANSFER_METHOD: &str = "transfer";

/// Chain-specific knobs for a UTXO client
#[derive(Debug, Clone, Copy)]
pub(crate) struct UtxoParams {
	pub chain: Chain,
	/// Segwit HRP; `None` means legacy base58 addresses
	pub hrp: Option<&'static str>,
	pub base58_version: u8,
	pub derivation_path: [u32; 5],
}

#[derive(Debug)]
pub(crate) struct UtxoCore {
	params: UtxoParams,
	provider: Arc<dyn ChainProvider>,
	core: ClientCore,
}

impl UtxoCore {
	pub fn new(params: UtxoParams, provider: Arc<dyn ChainProvider>) -> Self {
		let core = ClientCore::new(params.chain);
		Self {
			params,
			provider,
			core,
		}
	}

	pub fn chain(&self) -> Chain {
		self.params.chain
	}

	pub fn wallet(&self) -> Option<ChainWallet> {
		self.core.wallet()
	}

	pub fn disconnect(&self) {
		self.core.disconnect();
	}

	fn derive_address(&self, signer: &KeystoreSigner) -> ClientResult<String> {
		match self.params.hrp {
			Some(hrp) => address::segwit_address(hrp, signer.public_key()),
			None => Ok(address::base58_address(
				self.params.base58_version,
				signer.public_key(),
			)),
		}
	}

	pub fn connect_keystore(&self, phrase: &str) -> ClientResult<ChainWallet> {
		let signer = KeystoreSigner::from_phrase(phrase, &self.params.derivation_path)?;
		let resolved = self.derive_address(&signer)?;
		let wallet = ChainWallet::new(self.params.chain, WalletSource::Keystore, resolved);
		self.core
			.connect(SignerBackend::Keystore(signer), wallet.clone());
		debug!("{} keystore connected: {}", self.params.chain, wallet.address);
		Ok(wallet)
	}

	pub async fn connect_wallet_provider(
		&self,
		provider: Arc<dyn WalletProvider>,
	) -> ClientResult<ChainWallet> {
		let resolved = extension_address(self.params.chain, &provider, ACCOUNTS_METHOD).await?;
		let wallet = ChainWallet::new(self.params.chain, WalletSource::Extension, resolved);
		self.core
			.connect(SignerBackend::Extension(provider), wallet.clone());
		Ok(wallet)
	}

	pub async fn load_balance(&self) -> ClientResult<Vec<AssetAmount>> {
		let address = self.core.address()?;
		let raw = self.provider.balances(&address).await?;
		// UTXO conventions keep zero entries; the native asset is the only one
		let balances = parse_balances(self.params.chain, raw, false);
		self.core.update_balances(balances.clone());
		Ok(balances)
	}

	pub async fn transfer(&self, params: &TxParams) -> ClientResult<TxHash> {
		let backend = self.core.backend()?;
		let from = self.core.address()?;
		if !self.provider.validate_address(&params.recipient) {
			return Err(ClientError::InvalidAddress {
				chain: self.params.chain,
				address: params.recipient.clone(),
			});
		}

		match backend {
			SignerBackend::Keystore(signer) => {
				let fee_rate = match params.fee_rate {
					Some(rate) => rate,
					None => self.provider.fee_rates().await?.rate(params.fee_option),
				};
				let transfer =
					sign_transfer(&signer, self.params.chain, &from, params, Some(fee_rate))?;
				self.provider.broadcast(&transfer).await
			},
			SignerBackend::Extension(wallet_provider) => {
				let response = wallet_provider
					.request(
						TRANSFER_METHOD,
						json!({
							"from": from,
							"recipient": params.recipient,
							"asset": params.asset.to_string(),
							"amount": params.amount.base_units_string(),
							"memo": params.memo,
						}),
					)
					.await?;
				tx_hash_from_value(&response)
			},
		}
	}
}

/// Accept both a bare hash string and a `{"hash": "..."}` object
pub(crate) fn tx_hash_from_value(value: &serde_json::Value) -> ClientResult<TxHash> {
	let hash = match value {
		serde_json::Value::String(hash) => Some(hash.clone()),
		serde_json::Value::Object(map) => map
			.get("hash")
			.or_else(|| map.get("txid"))
			.and_then(|v| v.as_str())
			.map(str::to_string),
		_ => None,
	};
	hash.filter(|h| !h.is_empty())
		.ok_or_else(|| ClientError::InvalidResponse {
			reason: "wallet provider returned no transaction hash".to_string(),
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tx_hash_from_value_shapes() {
		assert_eq!(
			tx_hash_from_value(&json!("abc123")).unwrap(),
			"abc123".to_string()
		);
		assert_eq!(
			tx_hash_from_value(&json!({ "hash": "def456" })).unwrap(),
			"def456".to_string()
		);
		assert_eq!(
			tx_hash_from_value(&json!({ "txid": "aaa" })).unwrap(),
			"aaa".to_string()
		);
		assert!(tx_hash_from_value(&json!(null)).is_err());
		assert!(tx_hash_from_value(&json!("")).is_err());
	}
}
