//! SDK startup logging
//!
//! Logging setup and startup information for hosts embedding the SDK.

use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::Settings;

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins over the configured level. Safe to call more than once;
/// later calls are no-ops.
pub fn init_tracing(settings: &Settings) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));
	let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Logs SDK information at startup
pub fn log_sdk_info(settings: &Settings) {
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Multichain SDK Starting ===");
	info!("🚀 multichain-sdk v{}", service_version);
	info!("🌍 Network: {:?}", settings.network);
	info!("💻 Platform: {}", env::consts::OS);

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion with the chains being served
pub fn log_startup_complete(chains: &[String]) {
	info!("✅ Multichain SDK Ready");
	info!("⛓️ Chains: {}", chains.join(", "));
}
