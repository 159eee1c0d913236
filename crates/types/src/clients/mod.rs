//! Client traits and errors

pub mod errors;
pub mod traits;

pub use errors::{ClientError, ClientResult};
pub use traits::{
	ChainClient, ChainProvider, EthProvider, InboundSource, PoolSource, WalletProvider,
};
