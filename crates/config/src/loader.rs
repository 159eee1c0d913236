//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};

/// Load configuration from the config file and `MCS_`-prefixed environment
/// variables; anything missing falls back to the built-in defaults
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/multichain").required(false))
		.add_source(Environment::with_prefix("MCS").separator("__"))
		.build()?;

	s.try_deserialize()
}
