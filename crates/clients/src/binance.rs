//! Binance Chain client

use async_trait::async_trait;
use std::sync::Arc;

use mcs_types::{
	AssetAmount, Chain, ChainClient, ChainProvider, ChainWallet, ClientResult, TxHash,
	TxParams, WalletProvider,
};

use crate::account::AccountCore;
use crate::keys::paths;

#[derive(Debug)]
pub struct BnbClient {
	core: AccountCore,
}

impl BnbClient {
	pub fn new(provider: Arc<dyn ChainProvider>) -> Self {
		Self {
			core: AccountCore::new(Chain::Binance, "bnb", paths::BINANCE, provider),
		}
	}
}

#[async_trait]
impl ChainClient for BnbClient {
	fn chain(&self) -> Chain {
		Chain::Binance
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
