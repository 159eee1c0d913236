//! Shared test harness: a fully mocked MultiChain instance

use std::sync::Arc;

use multichain_sdk::mocks::{MockChainProvider, MockEthProvider, MockInboundSource};
use multichain_sdk::{Chain, MultiChain, MultiChainBuilder, Pool, PoolDetail};

pub const PHRASE: &str =
	"abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

pub const ETH_VAULT: &str = "0x1c6a9783f812b3af3abbf7de64c3cd7cc7d1af44";
pub const ETH_ROUTER: &str = "0x42a5ed456650a09dc10ebc6361a7480fdd61f27b";

pub struct Harness {
	pub multichain: MultiChain,
	pub btc: Arc<MockChainProvider>,
	pub bnb: Arc<MockChainProvider>,
	pub thor: Arc<MockChainProvider>,
	pub eth: Arc<MockEthProvider>,
	pub inbound: Arc<MockInboundSource>,
}

pub fn harness() -> Harness {
	// 5 BTC, 10 RUNE, 1 BNB of legacy RUNE alongside some gas
	let btc = Arc::new(MockChainProvider::new(Chain::Bitcoin).with_balance("BTC", "500000000"));
	let bch = Arc::new(MockChainProvider::new(Chain::BitcoinCash));
	let ltc = Arc::new(MockChainProvider::new(Chain::Litecoin));
	let bnb = Arc::new(
		MockChainProvider::new(Chain::Binance)
			.with_balance("BNB", "100000000")
			.with_balance("RUNE-B1A", "500000000"),
	);
	let thor =
		Arc::new(MockChainProvider::new(Chain::Thorchain).with_balance("RUNE", "1000000000"));
	let eth = Arc::new(MockEthProvider::new().with_balance("ETH", "2000000000000000000"));

	let inbound = Arc::new(
		MockInboundSource::new()
			.with_inbound(Chain::Bitcoin, "bc1qpoolinbound", None)
			.with_inbound(Chain::Binance, "bnb1poolinbound", None)
			.with_inbound(Chain::Ethereum, ETH_VAULT, Some(ETH_ROUTER)),
	);

	let multichain = MultiChainBuilder::new()
		.with_chain_provider(btc.clone())
		.with_chain_provider(bch)
		.with_chain_provider(ltc)
		.with_chain_provider(bnb.clone())
		.with_chain_provider(thor.clone())
		.with_eth_provider(eth.clone())
		.with_inbound_source(inbound.clone())
		.build()
		.expect("mock harness should always build");

	Harness {
		multichain,
		btc,
		bnb,
		thor,
		eth,
		inbound,
	}
}

pub fn pool(asset: &str, asset_depth: &str, rune_depth: &str) -> Pool {
	Pool::from_detail(PoolDetail {
		asset: asset.to_string(),
		asset_depth: asset_depth.to_string(),
		rune_depth: rune_depth.to_string(),
		asset_price: None,
		asset_price_usd: None,
		liquidity_units: None,
		units: None,
		pool_apy: None,
		status: Some("available".to_string()),
		volume_24h: None,
	})
	.expect("static pool fixture")
}

/// The standard pool set used across the suites
pub fn pools() -> Vec<Pool> {
	vec![
		// 100 BTC / 1000 RUNE
		pool("BTC.BTC", "10000000000", "100000000000"),
		// 1000 ETH / 1000 RUNE
		pool("ETH.ETH", "100000000000", "100000000000"),
	]
}
