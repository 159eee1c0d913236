//! Midgard indexing API gateway

use async_trait::async_trait;
use tracing::warn;

use mcs_types::{ClientResult, Pool, PoolDetail, PoolSource};

use crate::providers::{base_url, http_client, DEFAULT_TIMEOUT_MS};

#[derive(Debug)]
pub struct MidgardClient {
	base_url: String,
	client: reqwest::Client,
}

impl MidgardClient {
	pub fn new(raw_base: &str) -> ClientResult<Self> {
		Ok(Self {
			base_url: base_url(raw_base)?,
			client: http_client(DEFAULT_TIMEOUT_MS)?,
		})
	}
}

#[async_trait]
impl PoolSource for MidgardClient {
	async fn pools(&self) -> ClientResult<Vec<Pool>> {
		let url = format!("{}/v2/pools", self.base_url);
		let details: Vec<PoolDetail> = self
			.client
			.get(url)
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(details
			.into_iter()
			.filter_map(|detail| match Pool::from_detail(detail) {
				Ok(pool) => Some(pool),
				Err(e) => {
					warn!("Skipping unparseable pool: {}", e);
					None
				},
			})
			.collect())
	}
}
