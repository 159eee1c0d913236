//! Multichain SDK Clients
//!
//! Per-chain implementations of the [`mcs_types::ChainClient`] contract plus
//! the HTTP gateway providers they talk through. One concrete client per
//! supported chain; wallet sources are strategy variants chosen at connect
//! time.

pub mod address;
pub mod backend;
pub mod keys;
pub mod providers;

mod abi;
mod account;
mod core;
mod utxo;

pub mod binance;
pub mod bitcoin;
pub mod bitcoin_cash;
pub mod ethereum;
pub mod litecoin;
pub mod thorchain;

pub use backend::SignerBackend;
pub use binance::BnbClient;
pub use bitcoin::BtcClient;
pub use bitcoin_cash::BchClient;
pub use ethereum::EthClient;
pub use keys::KeystoreSigner;
pub use litecoin::LtcClient;
pub use providers::{
	BinanceDexProvider, EthRpcProvider, HaskoinProvider, MidgardClient, ThornodeProvider,
};
pub use thorchain::ThorClient;
