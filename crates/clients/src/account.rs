//! Shared implementation for the bech32 account chains (BNB, THOR)

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
use crate::utxo::{tx_hash_from_value, ACCOUNTS_METHOD, TRANSFER_METHOD};

#[derive(Debug)]
pub(crate) struct AccountCore {
	chain: Chain,
	hrp: &'static str,
	derivation_path: [u32; 5],
	provider: Arc<dyn ChainProvider>,
	core: ClientCore,
}

impl AccountCore {
	pub fn new(
		chain: Chain,
		hrp: &'static str,
		derivation_path: [u32; 5],
		provider: Arc<dyn ChainProvider>,
	) -> Self {
		Self {
			chain,
			hrp,
			derivation_path,
			provider,
			core: ClientCore::new(chain),
		}
	}

	pub fn chain(&self) -> Chain {
		self.chain
	}

	pub fn wallet(&self) -> Option<ChainWallet> {
		self.core.wallet()
	}

	pub fn disconnect(&self) {
		self.core.disconnect();
	}

	pub fn address(&self) -> ClientResult<String> {
		self.core.address()
	}

	pub fn backend(&self) -> ClientResult<SignerBackend> {
		self.core.backend()
	}

	pub fn connect_keystore(&self, phrase: &str) -> ClientResult<ChainWallet> {
		let signer = KeystoreSigner::from_phrase(phrase, &self.derivation_path)?;
		let resolved = address::bech32_address(self.hrp, signer.public_key())?;
		let wallet = ChainWallet::new(self.chain, WalletSource::Keystore, resolved);
		self.core
			.connect(SignerBackend::Keystore(signer), wallet.clone());
		debug!("{} keystore connected: {}", self.chain, wallet.address);
		Ok(wallet)
	}

	pub async fn connect_wallet_provider(
		&self,
		provider: Arc<dyn WalletProvider>,
	) -> ClientResult<ChainWallet> {
		let resolved = extension_address(self.chain, &provider, ACCOUNTS_METHOD).await?;
		let wallet = ChainWallet::new(self.chain, WalletSource::Extension, resolved);
		self.core
			.connect(SignerBackend::Extension(provider), wallet.clone());
		Ok(wallet)
	}

	pub async fn load_balance(&self) -> ClientResult<Vec<AssetAmount>> {
		let resolved = self.core.address()?;
		let raw = self.provider.balances(&resolved).await?;
		let balances = parse_balances(self.chain, raw, false);
		self.core.update_balances(balances.clone());
		Ok(balances)
	}

	pub async fn transfer(&self, params: &TxParams) -> ClientResult<TxHash> {
		let backend = self.core.backend()?;
		let from = self.core.address()?;
		if !self.provider.validate_address(&params.recipient) {
			return Err(ClientError::InvalidAddress {
				chain: self.chain,
				address: params.recipient.clone(),
			});
		}
		self.submit(backend, &from, params).await
	}

	/// Sign and submit without recipient validation; protocol deposits have
	/// an empty recipient
	pub async fn submit(
		&self,
		backend: SignerBackend,
		from: &str,
		params: &TxParams,
	) -> ClientResult<TxHash> {
		match backend {
			SignerBackend::Keystore(signer) => {
				let fee_rate = match params.fee_rate {
					Some(rate) => rate,
					None => self.provider.fee_rates().await?.rate(params.fee_option),
				};
				let transfer = sign_transfer(&signer, self.chain, from, params, Some(fee_rate))?;
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
