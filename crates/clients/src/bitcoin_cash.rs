//! Bitcoin Cash client
//!
//! Addresses are the legacy base58check form; the `bitcoincash:` display
//! prefix is stripped on intake.

use async_trait::async_trait;
use std::sync::Arc;

use mcs_types::{
	AssetAmount, Chain, ChainClient, ChainProvider, ChainWallet, ClientResult, TxHash,
	TxParams, WalletProvider,
};

use crate::keys::paths;
use crate::utxo::{UtxoCore, UtxoParams};

#[derive(Debug)]
pub struct BchClient {
	core: UtxoCore,
}

impl BchClient {
	pub fn new(provider: Arc<dyn ChainProvider>) -> Self {
		let params = UtxoParams {
			chain: Chain::BitcoinCash,
			hrp: None,
			base58_version: 0x00,
			derivation_path: paths::BITCOIN_CASH,
		};
		Self {
			core: UtxoCore::new(params, provider),
		}
	}
}

#[async_trait]
impl ChainClient for BchClient {
	fn chain(&self) -> Chain {
		Chain::BitcoinCash
	}

	fn wallet(&self) -> Option<ChainWallet> {
		self.core.wallet()
	}

	fn connect_keystore(&self, phrase: &str) -> ClientResult<ChainWallet> {
		self.core.connect_keystore(phrase)
	}

	async fn connect_wallet_provider(
		&self,
		provider: Arc<dyn WalletProvider>,
	) -> ClientResult<ChainWallet> {
		self.core.connect_wallet_provider(provider).await
	}

	async fn load_balance(&self) -> ClientResult<Vec<AssetAmount>> {
		self.core.load_balance().await
	}

	async fn transfer(&self, params: &TxParams) -> ClientResult<TxHash> {
		self.core.transfer(params).await
	}

	fn disconnect(&self) {
		self.core.disconnect();
	}
}
