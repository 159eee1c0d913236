//! THORChain client
//!
//! On top of the plain account-chain operations, THORChain has protocol
//! deposits: memo-bearing transactions with no recipient. A deposit is
//! refused outright when it would leave the wallet without the retained
//! RUNE needed to pay for later chain operations.

use async_trait::async_trait;
use std::sync::Arc;

use mcs_types::{
	rune_threshold_amount, Amount, AssetAmount, Chain, ChainClient, ChainProvider,
	ChainWallet, ClientError, ClientResult, TxHash, TxParams, WalletProvider,
	THORCHAIN_DECIMAL,
};

use crate::account::AccountCore;
use crate::keys::paths;

#[derive(Debug)]
pub struct ThorClient {
	core: AccountCore,
}

impl ThorClient {
	pub fn new(provider: Arc<dyn ChainProvider>) -> Self {
		Self {
			core: AccountCore::new(Chain::Thorchain, "thor", paths::THORCHAIN, provider),
		}
	}

	/// Submit a protocol-memo deposit (swap, add, withdraw)
	///
	/// Refuses with [`ClientError::InsufficientThreshold`], before any
	/// broadcast, when the wallet would retain less than the threshold RUNE.
	pub async fn deposit(&self, params: &TxParams) -> ClientResult<TxHash> {
		let backend = self.core.backend()?;
		let from = self.core.address()?;

		let balances = self.core.load_balance().await?;
		let rune_balance = balances
			.iter()
			.find(|entry| entry.asset.is_rune_native())
			.map(|entry| entry.amount.clone())
			.unwrap_or_else(|| Amount::zero(THORCHAIN_DECIMAL));

		let spend = if params.asset.is_rune_native() {
			params.amount.with_decimal(THORCHAIN_DECIMAL)
		} else {
			Amount::zero(THORCHAIN_DECIMAL)
		};
		let required = spend.add(&rune_threshold_amount().amount)?;
		if rune_balance < required {
			return Err(ClientError::InsufficientThreshold {
				available: rune_balance.to_string(),
				required: required.to_string(),
			});
		}

		let deposit_params = TxParams {
			recipient: String::new(),
			..params.clone()
		};
		self.core.submit(backend, &from, &deposit_params).await
	}
}

#[async_trait]
impl ChainClient for ThorClient {
	fn chain(&self) -> Chain {
		Chain::Thorchain
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
