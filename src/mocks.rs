//! Mock providers for examples and testing
//!
//! Simple, working provider implementations that can be used in examples
//! and integration tests without touching the network. Failure behavior is
//! configurable per operation so partial-failure paths can be exercised.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use mcs_types::{
	Asset, Chain, ChainProvider, ClientError, ClientResult, EthCallRequest, EthProvider,
	FeeRates, InboundAddress, InboundSource, LiquidityProviderDetail, Mimir, RawBalance,
	SignedTransfer, TxHash, WalletProvider,
};

fn mock_failure(what: &str) -> ClientError {
	ClientError::InvalidResponse {
		reason: format!("mock {} configured to fail", what),
	}
}

fn lock<'a, T>(mutex: &'a Mutex<T>) -> std::sync::MutexGuard<'a, T> {
	mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Chain gateway mock with configurable balances and recorded broadcasts
#[derive(Debug)]
pub struct MockChainProvider {
	chain: Chain,
	balances: Mutex<Vec<RawBalance>>,
	broadcasts: Mutex<Vec<SignedTransfer>>,
	fail_balances: AtomicBool,
	fail_broadcast: AtomicBool,
}

impl MockChainProvider {
	pub fn new(chain: Chain) -> Self {
		Self {
			chain,
			balances: Mutex::new(Vec::new()),
			broadcasts: Mutex::new(Vec::new()),
			fail_balances: AtomicBool::new(false),
			fail_broadcast: AtomicBool::new(false),
		}
	}

	pub fn with_balance(self, symbol: &str, base_amount: &str) -> Self {
		lock(&self.balances).push(RawBalance {
			symbol: symbol.to_string(),
			amount: base_amount.to_string(),
			decimals: None,
		});
		self
	}

	pub fn set_balances(&self, entries: Vec<RawBalance>) {
		*lock(&self.balances) = entries;
	}

	pub fn fail_balances(&self, fail: bool) {
		self.fail_balances.store(fail, Ordering::SeqCst);
	}

	pub fn fail_broadcast(&self, fail: bool) {
		self.fail_broadcast.store(fail, Ordering::SeqCst);
	}

	/// Every envelope broadcast through this gateway, in order
	pub fn broadcasts(&self) -> Vec<SignedTransfer> {
		lock(&self.broadcasts).clone()
	}
}

#[async_trait]
impl ChainProvider for MockChainProvider {
	fn chain(&self) -> Chain {
		self.chain
	}

	async fn balances(&self, _address: &str) -> ClientResult<Vec<RawBalance>> {
		if self.fail_balances.load(Ordering::SeqCst) {
			return Err(mock_failure("balance query"));
		}
		Ok(lock(&self.balances).clone())
	}

	async fn fee_rates(&self) -> ClientResult<FeeRates> {
		Ok(FeeRates {
			average: 5.0,
			fast: 10.0,
			fastest: 20.0,
		})
	}

	async fn broadcast(&self, transfer: &SignedTransfer) -> ClientResult<TxHash> {
		if self.fail_broadcast.load(Ordering::SeqCst) {
			return Err(mock_failure("broadcast"));
		}
		let mut broadcasts = lock(&self.broadcasts);
		broadcasts.push(transfer.clone());
		Ok(format!("{}-tx-{}", self.chain, broadcasts.len()))
	}

	fn validate_address(&self, address: &str) -> bool {
		!address.is_empty()
	}

	fn explorer_tx_url(&self, hash: &str) -> String {
		format!("https://explorer.example/{}/{}", self.chain, hash)
	}
}

/// Ethereum gateway mock: queued `eth_call` results plus recorded
/// transactions
#[derive(Debug)]
pub struct MockEthProvider {
	inner: MockChainProvider,
	call_results: Mutex<Vec<String>>,
	sent: Mutex<Vec<EthCallRequest>>,
}

impl MockEthProvider {
	pub fn new() -> Self {
		Self {
			inner: MockChainProvider::new(Chain::Ethereum),
			call_results: Mutex::new(Vec::new()),
			sent: Mutex::new(Vec::new()),
		}
	}

	pub fn with_balance(self, symbol: &str, base_amount: &str) -> Self {
		Self {
			inner: self.inner.with_balance(symbol, base_amount),
			..self
		}
	}

	/// Queue the next `eth_call` result (0x-hex)
	pub fn push_call_result(&self, result: &str) {
		lock(&self.call_results).push(result.to_string());
	}

	pub fn sent_transactions(&self) -> Vec<EthCallRequest> {
		lock(&self.sent).clone()
	}

	pub fn set_eth_balances(&self, entries: Vec<RawBalance>) {
		self.inner.set_balances(entries);
	}

	pub fn broadcasts(&self) -> Vec<SignedTransfer> {
		self.inner.broadcasts()
	}

	pub fn fail_balances(&self, fail: bool) {
		self.inner.fail_balances(fail);
	}
}

impl Default for MockEthProvider {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl ChainProvider for MockEthProvider {
	fn chain(&self) -> Chain {
		Chain::Ethereum
	}

	async fn balances(&self, address: &str) -> ClientResult<Vec<RawBalance>> {
		self.inner.balances(address).await
	}

	async fn fee_rates(&self) -> ClientResult<FeeRates> {
		self.inner.fee_rates().await
	}

	async fn broadcast(&self, transfer: &SignedTransfer) -> ClientResult<TxHash> {
		self.inner.broadcast(transfer).await
	}

	fn validate_address(&self, address: &str) -> bool {
		address.starts_with("0x") && address.len() == 42
	}

	fn explorer_tx_url(&self, hash: &str) -> String {
		self.inner.explorer_tx_url(hash)
	}
}

#[async_trait]
impl EthProvider for MockEthProvider {
	async fn eth_call(&self, _to: &str, _data: &str) -> ClientResult<String> {
		let mut results = lock(&self.call_results);
		if results.is_empty() {
			// a zero word: "no allowance" / zero balance
			return Ok(format!("0x{}", "00".repeat(32)));
		}
		Ok(results.remove(0))
	}

	async fn send_transaction(&self, request: &EthCallRequest) -> ClientResult<TxHash> {
		let mut sent = lock(&self.sent);
		sent.push(request.clone());
		Ok(format!("ETH-call-{}", sent.len()))
	}
}

/// Injected wallet extension mock
#[derive(Debug)]
pub struct MockWalletProvider {
	address: String,
	should_fail: AtomicBool,
	requests: Mutex<Vec<(String, Value)>>,
}

impl MockWalletProvider {
	pub fn new(address: &str) -> Self {
		Self {
			address: address.to_string(),
			should_fail: AtomicBool::new(false),
			requests: Mutex::new(Vec::new()),
		}
	}

	pub fn set_should_fail(&self, fail: bool) {
		self.should_fail.store(fail, Ordering::SeqCst);
	}

	pub fn requests(&self) -> Vec<(String, Value)> {
		lock(&self.requests).clone()
	}
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
	async fn request(&self, method: &str, params: Value) -> ClientResult<Value> {
		if self.should_fail.load(Ordering::SeqCst) {
			return Err(mock_failure("wallet provider"));
		}
		lock(&self.requests).push((method.to_string(), params));
		match method {
			"request_accounts" | "eth_requestAccounts" => Ok(json!([self.address])),
			_ => Ok(json!({ "hash": format!("ext-tx-{}", lock(&self.requests).len()) })),
		}
	}
}

/// Protocol snapshot mock
#[derive(Debug, Default)]
pub struct MockInboundSource {
	addresses: Mutex<Vec<InboundAddress>>,
	liquidity_provider: Mutex<Option<LiquidityProviderDetail>>,
	should_fail: AtomicBool,
}

impl MockInboundSource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_inbound(
		self,
		chain: Chain,
		address: &str,
		router: Option<&str>,
	) -> Self {
		lock(&self.addresses).push(InboundAddress {
			chain,
			address: address.to_string(),
			router: router.map(str::to_string),
			halted: false,
			gas_rate: Some(10.0),
		});
		self
	}

	pub fn set_halted(&self, chain: Chain, halted: bool) {
		for entry in lock(&self.addresses).iter_mut() {
			if entry.chain == chain {
				entry.halted = halted;
			}
		}
	}

	pub fn set_liquidity_provider(&self, detail: Option<LiquidityProviderDetail>) {
		*lock(&self.liquidity_provider) = detail;
	}

	pub fn set_should_fail(&self, fail: bool) {
		self.should_fail.store(fail, Ordering::SeqCst);
	}
}

#[async_trait]
impl InboundSource for MockInboundSource {
	async fn inbound_addresses(&self) -> ClientResult<Vec<InboundAddress>> {
		if self.should_fail.load(Ordering::SeqCst) {
			return Err(mock_failure("inbound source"));
		}
		Ok(lock(&self.addresses).clone())
	}

	async fn mimir(&self) -> ClientResult<Mimir> {
		Ok(Mimir::new())
	}

	async fn liquidity_provider(
		&self,
		_asset: &Asset,
		_address: &str,
	) -> ClientResult<Option<LiquidityProviderDetail>> {
		Ok(lock(&self.liquidity_provider).clone())
	}
}
