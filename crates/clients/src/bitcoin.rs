//! Bitcoin client

use async_trait::async_trait;
use std::sync::Arc;

use mcs_types::{
	AssetAmount, Chain, ChainClient, ChainProvider, ChainWallet, ClientResult, TxHash,
	TxParams, WalletProvider,
};

use crate::keys::paths;
use crate::utxo::{UtxoCore, UtxoParams};

#[derive(Debug)]
pub struct BtcClient {
	core: UtxoCore,
}

impl BtcClient {
	pub fn new(provider: Arc<dyn ChainProvider>) -> Self {
		let params = UtxoParams {
			chain: Chain::Bitcoin,
			hrp: Some("bc"),
			base58_version: 0x00,
			derivation_path: paths::BITCOIN,
		};
		Self {
			core: UtxoCore::new(params, provider),
		}
	}
}

#[async_trait]
impl ChainClient for BtcClient {
	fn chain(&self) -> Chain {
		Chain::Bitcoin
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

#[cfg(test)]
mod tests {
	use super::*;
	use crate::providers::HaskoinProvider;

	const PHRASE: &str =
		"abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

	#[test]
	fn test_keystore_connect_resolves_segwit_address() {
		let provider = Arc::new(HaskoinProvider::bitcoin("https://haskoin.example/btc").unwrap());
		let client = BtcClient::new(provider);
		let wallet = client.connect_keystore(PHRASE).unwrap();
		assert_eq!(wallet.address, "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu");
		assert_eq!(client.wallet().unwrap(), wallet);

		client.disconnect();
		assert!(client.wallet().is_none());
	}
}
