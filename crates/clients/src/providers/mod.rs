//! Gateway providers: HTTP-backed implementations of the provider traits
//!
//! Every provider is a thin typed wrapper over one external service; errors
//! are propagated unchanged, retries belong to the caller.

pub mod binance_dex;
pub mod eth_rpc;
pub mod haskoin;
pub mod midgard;
pub mod thornode;

pub use binance_dex::BinanceDexProvider;
pub use eth_rpc::EthRpcProvider;
pub use haskoin::HaskoinProvider;
pub use midgard::MidgardClient;
pub use thornode::ThornodeProvider;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use mcs_types::{ClientError, ClientResult};

pub(crate) const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Shared HTTP client setup for all gateways
pub(crate) fn http_client(timeout_ms: u64) -> ClientResult<Client> {
	let mut headers = HeaderMap::new();
	headers.insert("Content-Type", HeaderValue::from_static("application/json"));
	headers.insert("Accept", HeaderValue::from_static("application/json"));
	headers.insert("User-Agent", HeaderValue::from_static("multichain-sdk/0.1"));

	Client::builder()
		.default_headers(headers)
		.timeout(Duration::from_millis(timeout_ms))
		.build()
		.map_err(ClientError::Http)
}

/// Validate and normalize a gateway base URL (no trailing slash)
pub(crate) fn base_url(raw: &str) -> ClientResult<String> {
	Url::parse(raw).map_err(|e| ClientError::Configuration {
		reason: format!("invalid base url {}: {}", raw, e),
	})?;
	Ok(raw.trim_end_matches('/').to_string())
}
