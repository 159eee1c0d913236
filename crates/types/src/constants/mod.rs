//! Protocol constants

pub mod limits;

pub use limits::{rune_threshold_amount, MAX_ALLOWANCE, RUNE_THRESHOLD, THORCHAIN_DECIMAL};
