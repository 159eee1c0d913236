//! Asset identity
//!
//! An asset is identified by chain + symbol; the ticker is cosmetic and the
//! decimal exponent may be enriched after construction (ERC-20 tokens only
//! reveal their precision through an on-chain lookup).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::models::errors::AssetError;
use crate::models::Chain;

#[derive(Debug, Clone)]
pub struct Asset {
	pub chain: Chain,
	pub symbol: String,
	pub ticker: String,
	decimal: Option<u8>,
}

impl Asset {
	pub fn new(chain: Chain, symbol: impl Into<String>) -> Self {
		let symbol = symbol.into();
		let ticker = symbol.split('-').next().unwrap_or_default().to_string();
		Self {
			chain,
			symbol,
			ticker,
			decimal: None,
		}
	}

	/// Parse a `CHAIN.SYMBOL` asset string
	pub fn from_string(value: &str) -> Result<Self, AssetError> {
		let (chain_str, symbol) = value.split_once('.').ok_or(AssetError::InvalidAssetString {
			value: value.to_string(),
		})?;
		if symbol.is_empty() {
			return Err(AssetError::InvalidAssetString {
				value: value.to_string(),
			});
		}
		let chain = Chain::from_str(chain_str)?;
		Ok(Self::new(chain, symbol))
	}

	/// The chain's native gas asset
	pub fn gas_asset(chain: Chain) -> Self {
		Self::new(chain, chain.gas_symbol())
	}

	pub fn btc() -> Self {
		Self::gas_asset(Chain::Bitcoin)
	}

	pub fn bch() -> Self {
		Self::gas_asset(Chain::BitcoinCash)
	}

	pub fn ltc() -> Self {
		Self::gas_asset(Chain::Litecoin)
	}

	pub fn bnb() -> Self {
		Self::gas_asset(Chain::Binance)
	}

	pub fn eth() -> Self {
		Self::gas_asset(Chain::Ethereum)
	}

	/// Native RUNE on THORChain, the protocol settlement asset
	pub fn rune_native() -> Self {
		Self::gas_asset(Chain::Thorchain)
	}

	/// Legacy RUNE issued on Binance Chain
	pub fn rune_b1a() -> Self {
		Self::new(Chain::Binance, "RUNE-B1A")
	}

	/// Legacy RUNE issued as an ERC-20
	pub fn rune_erc20() -> Self {
		Self::new(
			Chain::Ethereum,
			"RUNE-0x3155ba85d5f96b2d030a4966af206230e46849cb",
		)
	}

	/// Effective decimal exponent: the enriched value when known, the
	/// chain's native exponent otherwise
	pub fn decimal(&self) -> u8 {
		self.decimal.unwrap_or_else(|| self.chain.native_decimals())
	}

	pub fn known_decimal(&self) -> Option<u8> {
		self.decimal
	}

	/// Lazily record the asset's on-chain precision
	pub fn set_decimal(&mut self, decimal: u8) {
		self.decimal = Some(decimal);
	}

	pub fn with_decimal(mut self, decimal: u8) -> Self {
		self.decimal = Some(decimal);
		self
	}

	pub fn is_gas_asset(&self) -> bool {
		self.symbol == self.chain.gas_symbol()
	}

	pub fn is_rune_native(&self) -> bool {
		self.chain == Chain::Thorchain && self.symbol == "RUNE"
	}

	/// Token contract address embedded in the symbol, for ERC-20 style
	/// `TICKER-0x...` symbols
	pub fn contract_address(&self) -> Option<&str> {
		match self.symbol.split_once('-') {
			Some((_, address)) if address.starts_with("0x") || address.starts_with("0X") => {
				Some(address)
			},
			_ => None,
		}
	}

	/// Symbol in the shortened memo form: ERC-20 symbols are compressed to
	/// `TICKER-<last 3 chars>` to stay inside chain memo length limits
	pub fn memo_symbol(&self) -> String {
		if self.chain == Chain::Ethereum && !self.is_gas_asset() && self.symbol.len() > 3 {
			let tail = &self.symbol[self.symbol.len() - 3..];
			format!("{}-{}", self.ticker, tail)
		} else {
			self.symbol.clone()
		}
	}

	/// `CHAIN.SYMBOL` in the shortened memo form
	pub fn memo_string(&self) -> String {
		format!("{}.{}", self.chain, self.memo_symbol())
	}
}

impl PartialEq for Asset {
	fn eq(&self, other: &Self) -> bool {
		self.chain == other.chain && self.symbol == other.symbol
	}
}

impl Eq for Asset {}

impl Hash for Asset {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.chain.hash(state);
		self.symbol.hash(state);
	}
}

impl fmt::Display for Asset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.chain, self.symbol)
	}
}

impl FromStr for Asset {
	type Err = AssetError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_string(s)
	}
}
