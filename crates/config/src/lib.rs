//! Multichain SDK Configuration
//!
//! Configuration management and startup utilities for the multichain SDK.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::load_config;
pub use settings::{EndpointSettings, LoggingSettings, NetworkProfile, Settings};
pub use startup_logger::{init_tracing, log_sdk_info, log_startup_complete};
