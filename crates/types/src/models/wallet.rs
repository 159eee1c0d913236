//! Connected-wallet records and the cross-chain wallet map

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Asset, AssetAmount, Chain};

/// Where a wallet's keys live
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WalletSource {
	Keystore,
	Extension,
	Metamask,
	Ledger,
	Trustwallet,
}

impl fmt::Display for WalletSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			WalletSource::Keystore => "keystore",
			WalletSource::Extension => "extension",
			WalletSource::Metamask => "metamask",
			WalletSource::Ledger => "ledger",
			WalletSource::Trustwallet => "trustwallet",
		};
		write!(f, "{}", label)
	}
}

/// A connected wallet on one chain
///
/// Equality is (source, address): the pair the UI uses to distinguish a
/// reconnection from a brand-new connection.
#[derive(Debug, Clone)]
pub struct ChainWallet {
	pub chain: Chain,
	pub source: WalletSource,
	pub address: String,
	pub balances: Vec<AssetAmount>,
}

impl ChainWallet {
	pub fn new(chain: Chain, source: WalletSource, address: impl Into<String>) -> Self {
		let address = address.into();
		let address = chain.strip_address_prefix(&address).to_string();
		Self {
			chain,
			source,
			address,
			balances: Vec::new(),
		}
	}

	pub fn balance_of(&self, asset: &Asset) -> Option<&AssetAmount> {
		self.balances.iter().find(|entry| &entry.asset == asset)
	}

	pub fn has_asset(&self, asset: &Asset) -> bool {
		self.balance_of(asset).is_some()
	}
}

impl PartialEq for ChainWallet {
	fn eq(&self, other: &Self) -> bool {
		self.source == other.source && self.address == other.address
	}
}

impl Eq for ChainWallet {}

/// Fixed-key record from every supported chain to its wallet, if connected
///
/// The key set is always exactly [`Chain::ALL`]; an unconnected chain is
/// `None`, never missing.
#[derive(Debug, Clone, Default)]
pub struct WalletMap {
	bitcoin: Option<ChainWallet>,
	bitcoin_cash: Option<ChainWallet>,
	litecoin: Option<ChainWallet>,
	binance: Option<ChainWallet>,
	ethereum: Option<ChainWallet>,
	thorchain: Option<ChainWallet>,
}

impl WalletMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, chain: Chain) -> Option<&ChainWallet> {
		match chain {
			Chain::Bitcoin => self.bitcoin.as_ref(),
			Chain::BitcoinCash => self.bitcoin_cash.as_ref(),
			Chain::Litecoin => self.litecoin.as_ref(),
			Chain::Binance => self.binance.as_ref(),
			Chain::Ethereum => self.ethereum.as_ref(),
			Chain::Thorchain => self.thorchain.as_ref(),
		}
	}

	pub fn set(&mut self, chain: Chain, wallet: Option<ChainWallet>) {
		match chain {
			Chain::Bitcoin => self.bitcoin = wallet,
			Chain::BitcoinCash => self.bitcoin_cash = wallet,
			Chain::Litecoin => self.litecoin = wallet,
			Chain::Binance => self.binance = wallet,
			Chain::Ethereum => self.ethereum = wallet,
			Chain::Thorchain => self.thorchain = wallet,
		}
	}

	pub fn clear(&mut self) {
		for chain in Chain::ALL {
			self.set(chain, None);
		}
	}

	/// Iterate every supported chain with its (possibly absent) wallet
	pub fn iter(&self) -> impl Iterator<Item = (Chain, Option<&ChainWallet>)> {
		Chain::ALL.into_iter().map(move |chain| (chain, self.get(chain)))
	}

	pub fn connected(&self) -> impl Iterator<Item = &ChainWallet> {
		Chain::ALL.into_iter().filter_map(move |chain| self.get(chain))
	}

	pub fn is_empty(&self) -> bool {
		self.connected().next().is_none()
	}
}
