//! Liquidity add/withdraw/upgrade flows, including interrupted symmetric adds

mod common;

use common::{harness, PHRASE};
use multichain_sdk::{
	AddLiquidityParams, AddLiquidityType, Asset, AssetAmount, Chain, Memo, MultiChainError,
	Percent, PositionSide, UpgradeParams, WithdrawParams, WithdrawTarget,
};

fn btc_add_params() -> AddLiquidityParams {
	AddLiquidityParams {
		pool_asset: Asset::btc(),
		asset_amount: Some(AssetAmount::from_asset_str(Asset::btc(), "1").unwrap()),
		rune_amount: Some(AssetAmount::from_asset_str(Asset::rune_native(), "5").unwrap()),
	}
}

#[tokio::test]
async fn symmetric_add_sends_both_legs_with_cross_addresses() {
	let harness = harness();
	let wallets = harness
		.multichain
		.connect_keystore(PHRASE, &[Chain::Bitcoin, Chain::Thorchain])
		.unwrap();
	let btc_address = wallets.get(Chain::Bitcoin).unwrap().address.clone();
	let thor_address = wallets.get(Chain::Thorchain).unwrap().address.clone();

	let txns = harness
		.multichain
		.add_liquidity(&btc_add_params(), AddLiquidityType::Symmetric)
		.await
		.unwrap();
	assert!(txns.asset_tx.is_some());
	assert!(txns.rune_tx.is_some());

	// asset leg pairs the rune-side address, rune leg pairs the asset-side one
	let asset_leg = &harness.btc.broadcasts()[0];
	assert_eq!(
		asset_leg.memo.as_deref(),
		Some(format!("ADD:BTC.BTC:{}", thor_address).as_str())
	);
	assert_eq!(asset_leg.recipient, "bc1qpoolinbound");

	let rune_leg = &harness.thor.broadcasts()[0];
	assert_eq!(
		rune_leg.memo.as_deref(),
		Some(format!("ADD:BTC.BTC:{}", btc_address).as_str())
	);
	assert_eq!(rune_leg.recipient, "");
}

#[tokio::test]
async fn interrupted_symmetric_add_surfaces_the_partial_state() {
	let harness = harness();
	harness
		.multichain
		.connect_keystore(PHRASE, &[Chain::Bitcoin, Chain::Thorchain])
		.unwrap();
	harness.thor.fail_broadcast(true);

	let result = harness
		.multichain
		.add_liquidity(&btc_add_params(), AddLiquidityType::Symmetric)
		.await;

	// the rejection surfaces, and the partial result shows which leg landed
	match result {
		Err(MultiChainError::AddLiquidityInterrupted { txns, .. }) => {
			assert!(txns.asset_tx.is_some());
			assert!(txns.rune_tx.is_none());
		},
		other => panic!("expected interrupted add, got {:?}", other),
	}
	assert_eq!(harness.btc.broadcasts().len(), 1);
	assert!(harness.thor.broadcasts().is_empty());

	// recovery: complete the position with the missing rune leg
	harness.thor.fail_broadcast(false);
	let txns = harness
		.multichain
		.add_liquidity(&btc_add_params(), AddLiquidityType::SymRune)
		.await
		.unwrap();
	assert!(txns.rune_tx.is_some());
	assert!(txns.asset_tx.is_none());
	assert!(harness.thor.broadcasts()[0]
		.memo
		.as_deref()
		.unwrap()
		.starts_with("ADD:BTC.BTC:"));
}

#[tokio::test]
async fn asymmetric_adds_carry_no_paired_address() {
	let harness = harness();
	harness
		.multichain
		.connect_keystore(PHRASE, &[Chain::Bitcoin, Chain::Thorchain])
		.unwrap();

	harness
		.multichain
		.add_liquidity(&btc_add_params(), AddLiquidityType::AssetOnly)
		.await
		.unwrap();
	assert_eq!(
		harness.btc.broadcasts()[0].memo.as_deref(),
		Some("ADD:BTC.BTC")
	);

	harness
		.multichain
		.add_liquidity(&btc_add_params(), AddLiquidityType::RuneOnly)
		.await
		.unwrap();
	assert_eq!(
		harness.thor.broadcasts()[0].memo.as_deref(),
		Some("ADD:BTC.BTC")
	);
}

#[tokio::test]
async fn add_requires_the_relevant_amounts() {
	let harness = harness();
	harness
		.multichain
		.connect_keystore(PHRASE, &[Chain::Bitcoin, Chain::Thorchain])
		.unwrap();

	let params = AddLiquidityParams {
		pool_asset: Asset::btc(),
		asset_amount: None,
		rune_amount: None,
	};
	let result = harness
		.multichain
		.add_liquidity(&params, AddLiquidityType::Symmetric)
		.await;
	assert!(matches!(result, Err(MultiChainError::InvalidParams { .. })));
}

#[tokio::test]
async fn sym_withdraw_goes_through_a_protocol_deposit() {
	let harness = harness();
	harness
		.multichain
		.connect_keystore(PHRASE, &[Chain::Thorchain])
		.unwrap();

	harness
		.multichain
		.withdraw(&WithdrawParams {
			pool_asset: Asset::btc(),
			percent: Percent::from_percent(50),
			from: PositionSide::Sym,
			to: WithdrawTarget::Both,
		})
		.await
		.unwrap();

	let deposit = &harness.thor.broadcasts()[0];
	assert_eq!(deposit.memo.as_deref(), Some("WITHDRAW:BTC.BTC:5000"));
	assert_eq!(deposit.recipient, "");
	assert_eq!(deposit.amount, "0");
}

#[tokio::test]
async fn asset_asym_withdraw_sends_dust_on_the_asset_chain() {
	let harness = harness();
	harness
		.multichain
		.connect_keystore(PHRASE, &[Chain::Bitcoin])
		.unwrap();

	harness
		.multichain
		.withdraw(&WithdrawParams {
			pool_asset: Asset::btc(),
			percent: Percent::from_percent(100),
			from: PositionSide::AssetAsym,
			to: WithdrawTarget::Asset,
		})
		.await
		.unwrap();

	let dust = &harness.btc.broadcasts()[0];
	assert_eq!(dust.recipient, "bc1qpoolinbound");
	assert_eq!(dust.amount, "10000");
	let memo = Memo::parse(dust.memo.as_deref().unwrap()).unwrap();
	match memo {
		Memo::Withdraw {
			asset,
			basis_points,
			target,
		} => {
			assert_eq!(asset, Asset::btc());
			assert_eq!(basis_points, 10_000);
			assert_eq!(target, Some(Asset::btc()));
		},
		other => panic!("unexpected memo: {:?}", other),
	}
}

#[tokio::test]
async fn withdraw_to_one_leg_names_the_target_asset() {
	let harness = harness();
	harness
		.multichain
		.connect_keystore(PHRASE, &[Chain::Thorchain])
		.unwrap();

	harness
		.multichain
		.withdraw(&WithdrawParams {
			pool_asset: Asset::btc(),
			percent: Percent::from_percent(25),
			from: PositionSide::Sym,
			to: WithdrawTarget::Rune,
		})
		.await
		.unwrap();
	assert_eq!(
		harness.thor.broadcasts()[0].memo.as_deref(),
		Some("WITHDRAW:BTC.BTC:2500:THOR.RUNE")
	);
}

#[tokio::test]
async fn upgrade_routes_legacy_rune_by_source_chain() {
	let harness = harness();
	let wallets = harness
		.multichain
		.connect_keystore(PHRASE, &[Chain::Binance, Chain::Ethereum, Chain::Thorchain])
		.unwrap();
	let thor_address = wallets.get(Chain::Thorchain).unwrap().address.clone();

	// BNB-issued RUNE goes through a native send to the inbound address
	harness
		.multichain
		.upgrade(&UpgradeParams {
			amount: AssetAmount::from_asset_str(Asset::rune_b1a(), "5").unwrap(),
			recipient: thor_address.clone(),
		})
		.await
		.unwrap();
	let bnb_tx = &harness.bnb.broadcasts()[0];
	assert_eq!(bnb_tx.recipient, "bnb1poolinbound");
	assert_eq!(
		bnb_tx.memo.as_deref(),
		Some(format!("SWITCH:{}", thor_address).as_str())
	);

	// ETH-issued RUNE goes through the router deposit path
	harness
		.multichain
		.upgrade(&UpgradeParams {
			amount: AssetAmount::from_asset_str(Asset::rune_erc20().with_decimal(18), "5")
				.unwrap(),
			recipient: thor_address.clone(),
		})
		.await
		.unwrap();
	let eth_call = &harness.eth.sent_transactions()[0];
	assert_eq!(eth_call.to, common::ETH_ROUTER);
	assert!(eth_call.data.starts_with("0x1fece7b4"));
}

#[tokio::test]
async fn pending_liquidity_reports_the_interrupted_leg() {
	let harness = harness();
	harness
		.multichain
		.connect_keystore(PHRASE, &[Chain::Thorchain])
		.unwrap();

	assert!(harness
		.multichain
		.pending_liquidity(&Asset::btc())
		.await
		.unwrap()
		.is_none());

	harness
		.inbound
		.set_liquidity_provider(Some(multichain_sdk::models::LiquidityProviderDetail {
			asset: "BTC.BTC".to_string(),
			rune_address: None,
			asset_address: Some("bc1qlp".to_string()),
			units: Some("0".to_string()),
			pending_rune: None,
			pending_asset: Some("100000000".to_string()),
		}));

	let pending = harness
		.multichain
		.pending_liquidity(&Asset::btc())
		.await
		.unwrap()
		.expect("pending record");
	assert!(pending.has_pending_leg());
}

#[tokio::test]
async fn upgrade_rejects_non_legacy_chains() {
	let harness = harness();
	let result = harness
		.multichain
		.upgrade(&UpgradeParams {
			amount: AssetAmount::from_asset_str(Asset::btc(), "1").unwrap(),
			recipient: "thor1abc".to_string(),
		})
		.await;
	assert!(matches!(result, Err(MultiChainError::InvalidParams { .. })));
}
