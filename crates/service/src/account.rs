//! Cross-chain account aggregation
//!
//! One merged view over the wallet map: connection state, balance lookup,
//! and the input-asset universes computed against the current pool set.

use mcs_types::{Asset, AssetAmount, Chain, ChainWallet, Pool, WalletMap};

#[derive(Debug, Clone, Default)]
pub struct Account {
	wallets: WalletMap,
}

impl Account {
	pub fn new(wallets: WalletMap) -> Self {
		Self { wallets }
	}

	pub fn wallets(&self) -> &WalletMap {
		&self.wallets
	}

	pub fn is_connected(&self) -> bool {
		!self.wallets.is_empty()
	}

	pub fn wallet(&self, chain: Chain) -> Option<&ChainWallet> {
		self.wallets.get(chain)
	}

	/// Balance of an asset across the connected wallets
	pub fn balance(&self, asset: &Asset) -> Option<&AssetAmount> {
		self.wallets.get(asset.chain)?.balance_of(asset)
	}

	fn held_assets(&self) -> impl Iterator<Item = &AssetAmount> {
		self.wallets
			.connected()
			.flat_map(|wallet| wallet.balances.iter())
			.filter(|balance| !balance.is_zero())
	}

	fn push_unique(assets: &mut Vec<Asset>, asset: Asset) {
		if !assets.contains(&asset) {
			assets.push(asset);
		}
	}

	/// Assets usable as swap input: held balances with an active pool, plus
	/// the settlement asset, which is always swappable
	pub fn swap_input_assets(&self, pools: &[Pool]) -> Vec<Asset> {
		let mut assets = Vec::new();
		for balance in self.held_assets() {
			let asset = &balance.asset;
			if asset.is_rune_native() || Pool::find(pools, asset).is_some() {
				Self::push_unique(&mut assets, asset.clone());
			}
		}
		Self::push_unique(&mut assets, Asset::rune_native());
		assets
	}

	/// Assets usable as a deposit (add-liquidity) input: held balances whose
	/// pool exists; RUNE enters through the rune leg, not here
	pub fn deposit_input_assets(&self, pools: &[Pool]) -> Vec<Asset> {
		let mut assets = Vec::new();
		for balance in self.held_assets() {
			let asset = &balance.asset;
			if !asset.is_rune_native() && Pool::find(pools, asset).is_some() {
				Self::push_unique(&mut assets, asset.clone());
			}
		}
		assets
	}

	/// Assets eligible to bootstrap a brand-new pool
	pub fn create_input_assets(&self, pools: &[Pool]) -> Vec<Asset> {
		let mut assets = Vec::new();
		for balance in self.held_assets() {
			let asset = &balance.asset;
			if asset.chain != Chain::Thorchain && Pool::find(pools, asset).is_none() {
				Self::push_unique(&mut assets, asset.clone());
			}
		}
		assets
	}
}
