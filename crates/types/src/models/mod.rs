//! Shared domain models used across clients, the orchestrator and callers

pub mod amount;
pub mod asset;
pub mod asset_amount;
pub mod chain;
pub mod errors;
pub mod inbound;
pub mod liquidity;
pub mod memo;
pub mod percent;
pub mod pool;
pub mod price;
pub mod swap;
pub mod tx;
pub mod wallet;

pub use amount::{Amount, AmountType};
pub use asset::Asset;
pub use asset_amount::AssetAmount;
pub use chain::Chain;
pub use inbound::{InboundAddress, InboundAddressDetail, LiquidityProviderDetail, Mimir};
pub use liquidity::Liquidity;
pub use memo::Memo;
pub use percent::Percent;
pub use pool::{Pool, PoolDetail};
pub use price::Price;
pub use swap::Swap;
pub use tx::{
	ContractCall, EthCallRequest, FeeOption, FeeRates, RawBalance, SignedTransfer, TxHash,
	TxParams,
};
pub use wallet::{ChainWallet, WalletMap, WalletSource};
