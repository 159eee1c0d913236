//! MultiChain orchestrator
//!
//! The single façade the host application talks to. It owns one concrete
//! client per supported chain in a fixed struct — chain dispatch is a match,
//! never an open-ended adapter list — and routes protocol operations to the
//! right client using the memo conventions.

use futures::future::join_all;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

use mcs_clients::{BchClient, BnbClient, BtcClient, EthClient, LtcClient, ThorClient};
use mcs_types::{
	Amount, Asset, AssetAmount, Chain, ChainClient, ChainWallet, ClientError, ContractCall,
	InboundAddress, InboundSource, Memo, Swap, TxHash, TxParams, WalletMap, WalletProvider,
	THORCHAIN_DECIMAL,
};

use crate::errors::MultiChainError;
use crate::params::{
	AddLiquidityParams, AddLiquidityTxns, AddLiquidityType, PositionSide, UpgradeParams,
	WithdrawParams, WithdrawTarget,
};

type Result<T> = std::result::Result<T, MultiChainError>;

pub struct MultiChain {
	btc: BtcClient,
	bch: BchClient,
	ltc: LtcClient,
	bnb: BnbClient,
	eth: EthClient,
	thor: ThorClient,
	inbound_source: Arc<dyn InboundSource>,
	wallets: RwLock<WalletMap>,
}

impl MultiChain {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		btc: BtcClient,
		bch: BchClient,
		ltc: LtcClient,
		bnb: BnbClient,
		eth: EthClient,
		thor: ThorClient,
		inbound_source: Arc<dyn InboundSource>,
	) -> Self {
		Self {
			btc,
			bch,
			ltc,
			bnb,
			eth,
			thor,
			inbound_source,
			wallets: RwLock::new(WalletMap::new()),
		}
	}

	/// The client for a chain, behind the shared contract
	pub fn client(&self, chain: Chain) -> &dyn ChainClient {
		match chain {
			Chain::Bitcoin => &self.btc,
			Chain::BitcoinCash => &self.bch,
			Chain::Litecoin => &self.ltc,
			Chain::Binance => &self.bnb,
			Chain::Ethereum => &self.eth,
			Chain::Thorchain => &self.thor,
		}
	}

	pub fn eth_client(&self) -> &EthClient {
		&self.eth
	}

	pub fn thor_client(&self) -> &ThorClient {
		&self.thor
	}

	fn store_wallet(&self, chain: Chain, wallet: Option<ChainWallet>) {
		self.wallets
			.write()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.set(chain, wallet);
	}

	/// Snapshot of the current wallet map
	pub fn wallets(&self) -> WalletMap {
		self.wallets
			.read()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clone()
	}

	/// Connect the given chains from one keystore phrase
	pub fn connect_keystore(&self, phrase: &str, chains: &[Chain]) -> Result<WalletMap> {
		for &chain in chains {
			let wallet = self.client(chain).connect_keystore(phrase)?;
			self.store_wallet(chain, Some(wallet));
		}
		Ok(self.wallets())
	}

	/// Connect one chain through an injected wallet provider
	pub async fn connect_wallet_provider(
		&self,
		chain: Chain,
		provider: Arc<dyn WalletProvider>,
	) -> Result<ChainWallet> {
		let wallet = self.client(chain).connect_wallet_provider(provider).await?;
		self.store_wallet(chain, Some(wallet.clone()));
		Ok(wallet)
	}

	/// Connect through a browser-injected provider that may be absent;
	/// fails before any request when no extension is installed
	pub async fn connect_browser_wallet(
		&self,
		chain: Chain,
		provider: Option<Arc<dyn WalletProvider>>,
	) -> Result<ChainWallet> {
		let provider = provider.ok_or(MultiChainError::Client(
			ClientError::ProviderNotDetected { chain },
		))?;
		self.connect_wallet_provider(chain, provider).await
	}

	/// Reload one chain's wallet; `None` when the chain is not connected
	pub async fn get_wallet_by_chain(&self, chain: Chain) -> Result<Option<ChainWallet>> {
		let client = self.client(chain);
		if client.wallet().is_none() {
			self.store_wallet(chain, None);
			return Ok(None);
		}
		client.load_balance().await?;
		let wallet = client.wallet();
		self.store_wallet(chain, wallet.clone());
		Ok(wallet)
	}

	/// Reload every chain concurrently
	///
	/// Each chain's failure is caught independently: one rejection never
	/// cancels the rest, the failed chain just resolves to an absent wallet.
	/// Concurrent loads for the same chain are last-write-wins.
	pub async fn load_all_wallets(&self) -> WalletMap {
		let loads = Chain::ALL.map(|chain| async move {
			(chain, self.get_wallet_by_chain(chain).await)
		});
		for (chain, result) in join_all(loads).await {
			match result {
				Ok(wallet) => self.store_wallet(chain, wallet),
				Err(e) => {
					warn!("Wallet load failed for {}: {}", chain, e);
					self.store_wallet(chain, None);
				},
			}
		}
		let wallets = self.wallets();
		info!(
			"Wallet reload completed: {} of {} chains connected",
			wallets.connected().count(),
			Chain::ALL.len()
		);
		wallets
	}

	/// Reset every client and clear the wallet map
	pub fn disconnect(&self) {
		for chain in Chain::ALL {
			self.client(chain).disconnect();
		}
		self.wallets
			.write()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clear();
	}

	/// Current inbound address for a chain; refuses halted chains
	async fn inbound_for(&self, chain: Chain) -> Result<InboundAddress> {
		let snapshot = self.inbound_source.inbound_addresses().await?;
		let inbound = InboundAddress::find(&snapshot, chain)
			.cloned()
			.ok_or(MultiChainError::NoInboundAddress { chain })?;
		if inbound.halted {
			return Err(MultiChainError::ChainHalted { chain });
		}
		Ok(inbound)
	}

	/// Send an asset, routing by chain
	///
	/// THORChain memo-sends with an empty recipient are protocol deposits;
	/// non-native ETH sends go through the router contract's deposit method;
	/// everything else is a plain client transfer.
	pub async fn transfer(&self, params: &TxParams, native: bool) -> Result<TxHash> {
		let chain = params.asset.chain;

		if chain == Chain::Thorchain && params.memo.is_some() && params.recipient.is_empty() {
			return Ok(self.thor.deposit(params).await?);
		}

		if chain == Chain::Ethereum && !native {
			let inbound = self.inbound_for(Chain::Ethereum).await?;
			let router = inbound
				.router
				.clone()
				.ok_or(MultiChainError::NoRouter { chain })?;
			let call = ContractCall::RouterDeposit {
				router,
				vault: inbound.address,
				token: params.asset.contract_address().map(str::to_string),
				amount: params.amount.base_units_string(),
				memo: params.memo.clone().unwrap_or_default(),
			};
			return Ok(self.eth.call(&call).await?);
		}

		Ok(self.client(chain).transfer(params).await?)
	}

	/// Execute a prepared swap
	pub async fn swap(&self, swap: &Swap, recipient: Option<String>) -> Result<TxHash> {
		let input_chain = swap.input_asset.chain;
		if self.client(input_chain).wallet().is_none() {
			return Err(MultiChainError::NoWalletConnected { chain: input_chain });
		}

		let output_chain = swap.output_asset.chain;
		let recipient = match recipient {
			Some(recipient) => recipient,
			None => self
				.client(output_chain)
				.wallet()
				.map(|wallet| wallet.address)
				.ok_or(MultiChainError::NoOutputAddress {
					chain: output_chain,
				})?,
		};

		swap.validate()?;
		let memo = Memo::swap_memo(
			&swap.output_asset,
			&recipient,
			Some(&swap.min_output_base_units()),
		);
		debug!("Swap memo: {}", memo);

		if swap.input_asset.is_rune_native() {
			let params = TxParams::new(
				swap.input_asset.clone(),
				swap.input_amount.amount.clone(),
				"",
			)
			.with_memo(memo);
			return Ok(self.thor.deposit(&params).await?);
		}

		let inbound = self.inbound_for(input_chain).await?;
		let mut params = TxParams::new(
			swap.input_asset.clone(),
			swap.input_amount.amount.clone(),
			inbound.address.clone(),
		)
		.with_memo(memo);
		if let Some(rate) = inbound.gas_rate {
			params = params.with_fee_rate(rate);
		}
		self.transfer(&params, false).await
	}

	async fn send_asset_leg(
		&self,
		amount: &AssetAmount,
		paired_address: Option<&str>,
	) -> Result<TxHash> {
		let inbound = self.inbound_for(amount.asset.chain).await?;
		let memo = Memo::add_memo(&amount.asset, paired_address);
		let mut params = TxParams::new(
			amount.asset.clone(),
			amount.amount.clone(),
			inbound.address.clone(),
		)
		.with_memo(memo);
		if let Some(rate) = inbound.gas_rate {
			params = params.with_fee_rate(rate);
		}
		self.transfer(&params, false).await
	}

	async fn send_rune_leg(
		&self,
		pool_asset: &Asset,
		amount: &AssetAmount,
		paired_address: Option<&str>,
	) -> Result<TxHash> {
		let memo = Memo::add_memo(pool_asset, paired_address);
		let params = TxParams::new(amount.asset.clone(), amount.amount.clone(), "")
			.with_memo(memo);
		Ok(self.thor.deposit(&params).await?)
	}

	fn connected_address(&self, chain: Chain) -> Result<String> {
		self.client(chain)
			.wallet()
			.map(|wallet| wallet.address)
			.ok_or(MultiChainError::NoWalletConnected { chain })
	}

	fn require_amount<'a>(
		amount: &'a Option<AssetAmount>,
		label: &str,
	) -> Result<&'a AssetAmount> {
		amount.as_ref().ok_or_else(|| MultiChainError::InvalidParams {
			reason: format!("{} amount is required", label),
		})
	}

	/// Add liquidity to a pool
	///
	/// A symmetric add is two independent, non-atomic transfers. When the
	/// second leg fails the error carries the partial [`AddLiquidityTxns`]
	/// so the position can be completed later via `SymRune` / `SymAsset`.
	pub async fn add_liquidity(
		&self,
		params: &AddLiquidityParams,
		mode: AddLiquidityType,
	) -> Result<AddLiquidityTxns> {
		let pool_asset = &params.pool_asset;
		let mut txns = AddLiquidityTxns::default();

		let interrupted = |txns: &AddLiquidityTxns, e: MultiChainError| {
			MultiChainError::AddLiquidityInterrupted {
				txns: txns.clone(),
				reason: e.to_string(),
			}
		};

		match mode {
			AddLiquidityType::Symmetric => {
				let asset_amount = Self::require_amount(&params.asset_amount, "asset")?;
				let rune_amount = Self::require_amount(&params.rune_amount, "rune")?;
				let thor_address = self.connected_address(Chain::Thorchain)?;
				let asset_address = self.connected_address(pool_asset.chain)?;

				let asset_tx = self
					.send_asset_leg(asset_amount, Some(&thor_address))
					.await
					.map_err(|e| interrupted(&txns, e))?;
				txns.asset_tx = Some(asset_tx);

				let rune_tx = self
					.send_rune_leg(pool_asset, rune_amount, Some(&asset_address))
					.await
					.map_err(|e| interrupted(&txns, e))?;
				txns.rune_tx = Some(rune_tx);
			},
			AddLiquidityType::AssetOnly => {
				let asset_amount = Self::require_amount(&params.asset_amount, "asset")?;
				txns.asset_tx = Some(self.send_asset_leg(asset_amount, None).await?);
			},
			AddLiquidityType::RuneOnly => {
				let rune_amount = Self::require_amount(&params.rune_amount, "rune")?;
				txns.rune_tx = Some(self.send_rune_leg(pool_asset, rune_amount, None).await?);
			},
			AddLiquidityType::SymRune => {
				let rune_amount = Self::require_amount(&params.rune_amount, "rune")?;
				let asset_address = self.connected_address(pool_asset.chain)?;
				txns.rune_tx = Some(
					self.send_rune_leg(pool_asset, rune_amount, Some(&asset_address))
						.await?,
				);
			},
			AddLiquidityType::SymAsset => {
				let asset_amount = Self::require_amount(&params.asset_amount, "asset")?;
				let thor_address = self.connected_address(Chain::Thorchain)?;
				txns.asset_tx = Some(
					self.send_asset_leg(asset_amount, Some(&thor_address)).await?,
				);
			},
		}

		Ok(txns)
	}

	/// Withdraw a share of a liquidity position
	pub async fn withdraw(&self, params: &WithdrawParams) -> Result<TxHash> {
		let pool_asset = &params.pool_asset;
		let rune = Asset::rune_native();
		let target = match params.to {
			WithdrawTarget::Both => None,
			WithdrawTarget::Rune => Some(&rune),
			WithdrawTarget::Asset => Some(pool_asset),
		};
		let memo = Memo::withdraw_memo(pool_asset, &params.percent, target);
		debug!("Withdraw memo: {}", memo);

		match params.from {
			// an asset-side asymmetric position must be exited from the
			// asset chain; a dust send carries the memo
			PositionSide::AssetAsym => {
				let chain = pool_asset.chain;
				let inbound = self.inbound_for(chain).await?;
				let dust =
					Amount::from_base_units(chain.dust_base_units(), chain.native_decimals());
				let mut tx = TxParams::new(Asset::gas_asset(chain), dust, inbound.address.clone())
					.with_memo(memo);
				if let Some(rate) = inbound.gas_rate {
					tx = tx.with_fee_rate(rate);
				}
				self.transfer(&tx, false).await
			},
			PositionSide::Sym | PositionSide::RuneAsym => {
				let tx = TxParams::new(rune.clone(), Amount::zero(THORCHAIN_DECIMAL), "")
					.with_memo(memo);
				Ok(self.thor.deposit(&tx).await?)
			},
		}
	}

	/// Migrate legacy RUNE (BNB or ETH issue) to its native representation
	pub async fn upgrade(&self, params: &UpgradeParams) -> Result<TxHash> {
		let memo = Memo::switch_memo(&params.recipient);
		let asset = &params.amount.asset;
		match asset.chain {
			Chain::Binance => {
				let inbound = self.inbound_for(Chain::Binance).await?;
				let tx = TxParams::new(
					asset.clone(),
					params.amount.amount.clone(),
					inbound.address.clone(),
				)
				.with_memo(memo);
				Ok(self.bnb.transfer(&tx).await?)
			},
			Chain::Ethereum => {
				let tx = TxParams::new(asset.clone(), params.amount.amount.clone(), "")
					.with_memo(memo);
				self.transfer(&tx, false).await
			},
			other => Err(MultiChainError::InvalidParams {
				reason: format!("upgrade is not supported from {}", other),
			}),
		}
	}

	/// Governance parameter snapshot from the node API
	pub async fn mimir(&self) -> Result<mcs_types::Mimir> {
		Ok(self.inbound_source.mimir().await?)
	}

	/// The connected THOR address's liquidity-provider record for a pool,
	/// including pending one-legged deposits awaiting recovery
	pub async fn pending_liquidity(
		&self,
		pool_asset: &Asset,
	) -> Result<Option<mcs_types::LiquidityProviderDetail>> {
		let thor_address = self.connected_address(Chain::Thorchain)?;
		Ok(self
			.inbound_source
			.liquidity_provider(pool_asset, &thor_address)
			.await?)
	}

	/// Whether the router may spend the asset; trivially true outside ETH
	/// token assets
	pub async fn is_asset_approved(&self, asset: &Asset) -> Result<bool> {
		if asset.chain != Chain::Ethereum
			|| asset.is_gas_asset()
			|| asset.contract_address().is_none()
		{
			return Ok(true);
		}
		let inbound = self.inbound_for(Chain::Ethereum).await?;
		let router = inbound.router.ok_or(MultiChainError::NoRouter {
			chain: Chain::Ethereum,
		})?;
		Ok(self.eth.is_approved(asset, &router).await?)
	}

	/// Grant the router an allowance; `None` when no approval is needed
	pub async fn approve_asset(&self, asset: &Asset) -> Result<Option<TxHash>> {
		if asset.chain != Chain::Ethereum
			|| asset.is_gas_asset()
			|| asset.contract_address().is_none()
		{
			return Ok(None);
		}
		let inbound = self.inbound_for(Chain::Ethereum).await?;
		let router = inbound.router.ok_or(MultiChainError::NoRouter {
			chain: Chain::Ethereum,
		})?;
		Ok(Some(self.eth.approve(asset, &router).await?))
	}
}

impl std::fmt::Debug for MultiChain {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MultiChain")
			.field("wallets", &self.wallets())
			.finish_non_exhaustive()
	}
}
