//! Protocol memo wire formats
//!
//! Memos are consumed byte-for-byte by the external protocol; the builders
//! here are the single place the formats are written, and [`Memo::parse`] is
//! the reference decoder the tests round-trip against.

use std::fmt;
use std::str::FromStr;

use crate::models::errors::MemoError;
use crate::models::{Asset, Percent};

#[derive(Debug, Clone, PartialEq)]
pub enum Memo {
	/// `SWAP:CHAIN.SYMBOL:recipient[:limit]`
	Swap {
		asset: Asset,
		recipient: String,
		limit: Option<String>,
	},
	/// `ADD:CHAIN.SYMBOL[:paired-address]`
	Add {
		asset: Asset,
		paired_address: Option<String>,
	},
	/// `WITHDRAW:CHAIN.SYMBOL:basis-points[:TARGET.ASSET]`
	Withdraw {
		asset: Asset,
		basis_points: u32,
		target: Option<Asset>,
	},
	/// `SWITCH:recipient`
	Switch { recipient: String },
}

impl Memo {
	pub fn swap_memo(asset: &Asset, recipient: &str, limit: Option<&str>) -> String {
		match limit {
			Some(limit) => format!("SWAP:{}:{}:{}", asset.memo_string(), recipient, limit),
			None => format!("SWAP:{}:{}", asset.memo_string(), recipient),
		}
	}

	pub fn add_memo(asset: &Asset, paired_address: Option<&str>) -> String {
		match paired_address {
			Some(address) => format!("ADD:{}:{}", asset.memo_string(), address),
			None => format!("ADD:{}", asset.memo_string()),
		}
	}

	pub fn withdraw_memo(asset: &Asset, percent: &Percent, target: Option<&Asset>) -> String {
		match target {
			Some(target) => format!(
				"WITHDRAW:{}:{}:{}",
				asset.memo_string(),
				percent.basis_points(),
				target.memo_string()
			),
			None => format!("WITHDRAW:{}:{}", asset.memo_string(), percent.basis_points()),
		}
	}

	pub fn switch_memo(recipient: &str) -> String {
		format!("SWITCH:{}", recipient)
	}

	/// Decode a memo back into its structured form
	pub fn parse(value: &str) -> Result<Memo, MemoError> {
		let mut parts = value.split(':');
		let kind = parts.next().unwrap_or_default();
		if kind.is_empty() {
			return Err(MemoError::InvalidMemo {
				value: value.to_string(),
			});
		}

		let invalid = || MemoError::InvalidMemo {
			value: value.to_string(),
		};

		match kind.to_ascii_uppercase().as_str() {
			"SWAP" => {
				let asset = Asset::from_string(parts.next().ok_or_else(invalid)?)?;
				let recipient = parts.next().ok_or_else(invalid)?.to_string();
				let limit = parts.next().map(str::to_string);
				if let Some(limit) = &limit {
					if limit.is_empty() || !limit.chars().all(|c| c.is_ascii_digit()) {
						return Err(invalid());
					}
				}
				Ok(Memo::Swap {
					asset,
					recipient,
					limit,
				})
			},
			"ADD" => {
				let asset = Asset::from_string(parts.next().ok_or_else(invalid)?)?;
				let paired_address = parts.next().map(str::to_string);
				Ok(Memo::Add {
					asset,
					paired_address,
				})
			},
			"WITHDRAW" => {
				let asset = Asset::from_string(parts.next().ok_or_else(invalid)?)?;
				let basis_points = u32::from_str(parts.next().ok_or_else(invalid)?)
					.map_err(|_| invalid())?;
				let target = match parts.next() {
					Some(target) => Some(Asset::from_string(target)?),
					None => None,
				};
				Ok(Memo::Withdraw {
					asset,
					basis_points,
					target,
				})
			},
			"SWITCH" => {
				let recipient = parts.next().ok_or_else(invalid)?.to_string();
				if recipient.is_empty() {
					return Err(invalid());
				}
				Ok(Memo::Switch { recipient })
			},
			other => Err(MemoError::UnknownKind {
				kind: other.to_string(),
			}),
		}
	}
}

impl fmt::Display for Memo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let rendered = match self {
			Memo::Swap {
				asset,
				recipient,
				limit,
			} => Self::swap_memo(asset, recipient, limit.as_deref()),
			Memo::Add {
				asset,
				paired_address,
			} => Self::add_memo(asset, paired_address.as_deref()),
			Memo::Withdraw {
				asset,
				basis_points,
				target,
			} => Self::withdraw_memo(
				asset,
				&Percent::from_basis_points(*basis_points),
				target.as_ref(),
			),
			Memo::Switch { recipient } => Self::switch_memo(recipient),
		};
		write!(f, "{}", rendered)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::Chain;

	#[test]
	fn test_swap_memo_with_shortened_symbol() {
		let asset = Asset::new(Chain::Ethereum, "USDT-0xdAC17F958D2ee523a2206206994597C13D831ec7");
		let memo = Memo::swap_memo(&asset, "thor1xyz", Some("1000000"));
		assert_eq!(memo, "SWAP:ETH.USDT-ec7:thor1xyz:1000000");
	}

	#[test]
	fn test_swap_memo_parse() {
		let memo = Memo::parse("SWAP:BTC.BTC:bc1qabc:12345").unwrap();
		assert_eq!(
			memo,
			Memo::Swap {
				asset: Asset::btc(),
				recipient: "bc1qabc".to_string(),
				limit: Some("12345".to_string()),
			}
		);
	}

	#[test]
	fn test_withdraw_memo_round_trip() {
		let rendered = Memo::withdraw_memo(&Asset::btc(), &Percent::from_percent(50), None);
		assert_eq!(rendered, "WITHDRAW:BTC.BTC:5000");

		match Memo::parse(&rendered).unwrap() {
			Memo::Withdraw {
				asset,
				basis_points,
				target,
			} => {
				assert_eq!(asset.chain, Chain::Bitcoin);
				assert_eq!(asset.symbol, "BTC");
				assert_eq!(basis_points, 5_000);
				assert!(target.is_none());
			},
			other => panic!("unexpected memo: {:?}", other),
		}
	}

	#[test]
	fn test_withdraw_memo_with_target_leg() {
		let rendered = Memo::withdraw_memo(
			&Asset::btc(),
			&Percent::from_percent(100),
			Some(&Asset::rune_native()),
		);
		assert_eq!(rendered, "WITHDRAW:BTC.BTC:10000:THOR.RUNE");
	}

	#[test]
	fn test_add_memo_forms() {
		assert_eq!(
			Memo::add_memo(&Asset::bnb(), Some("thor1abc")),
			"ADD:BNB.BNB:thor1abc"
		);
		assert_eq!(Memo::add_memo(&Asset::bnb(), None), "ADD:BNB.BNB");
	}

	#[test]
	fn test_switch_memo() {
		assert_eq!(Memo::switch_memo("thor1abc"), "SWITCH:thor1abc");
		assert_eq!(
			Memo::parse("SWITCH:thor1abc").unwrap(),
			Memo::Switch {
				recipient: "thor1abc".to_string()
			}
		);
	}

	#[test]
	fn test_parse_rejects_garbage() {
		assert!(Memo::parse("").is_err());
		assert!(Memo::parse("HELLO:BTC.BTC").is_err());
		assert!(Memo::parse("SWAP:BTC.BTC").is_err());
		assert!(Memo::parse("WITHDRAW:BTC.BTC:notanumber").is_err());
		assert!(Memo::parse("SWAP:BTC.BTC:addr:limit-with-letters").is_err());
	}

	#[test]
	fn test_display_round_trip() {
		let memo = Memo::Withdraw {
			asset: Asset::btc(),
			basis_points: 2_500,
			target: Some(Asset::rune_native()),
		};
		assert_eq!(Memo::parse(&memo.to_string()).unwrap(), memo);
	}
}
