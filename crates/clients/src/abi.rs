//! Minimal ABI encoding for the contract calls the router flow needs
//!
//! Selectors are derived from the canonical signatures at call time, so
//! there are no magic constants to drift out of date.

use bigdecimal::num_bigint::{BigInt, Sign};
use sha3::{Digest, Keccak256};

use mcs_types::{ClientError, ClientResult, ContractCall};

pub(crate) const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

fn invalid(reason: impl Into<String>) -> ClientError {
	ClientError::InvalidResponse {
		reason: reason.into(),
	}
}

pub(crate) fn selector(signature: &str) -> [u8; 4] {
	let digest = Keccak256::digest(signature.as_bytes());
	let mut out = [0u8; 4];
	out.copy_from_slice(&digest[..4]);
	out
}

fn address_word(address: &str) -> ClientResult<[u8; 32]> {
	let stripped = address
		.strip_prefix("0x")
		.or_else(|| address.strip_prefix("0X"))
		.unwrap_or(address);
	let bytes =
		hex::decode(stripped).map_err(|_| invalid(format!("invalid address: {}", address)))?;
	if bytes.len() != 20 {
		return Err(invalid(format!("invalid address length: {}", address)));
	}
	let mut word = [0u8; 32];
	word[12..].copy_from_slice(&bytes);
	Ok(word)
}

fn uint_word(value: &str) -> ClientResult<[u8; 32]> {
	let int = BigInt::parse_bytes(value.as_bytes(), 10)
		.ok_or_else(|| invalid(format!("invalid uint: {}", value)))?;
	let (sign, bytes) = int.to_bytes_be();
	if sign == Sign::Minus || bytes.len() > 32 {
		return Err(invalid(format!("uint out of range: {}", value)));
	}
	let mut word = [0u8; 32];
	word[32 - bytes.len()..].copy_from_slice(&bytes);
	Ok(word)
}

fn string_tail(value: &str) -> Vec<u8> {
	let bytes = value.as_bytes();
	let mut tail = uint_word(&bytes.len().to_string()).unwrap_or([0u8; 32]).to_vec();
	tail.extend_from_slice(bytes);
	let padding = (32 - bytes.len() % 32) % 32;
	tail.extend(std::iter::repeat(0u8).take(padding));
	tail
}

/// ABI-encode one of the typed contract calls
pub(crate) fn encode(call: &ContractCall) -> ClientResult<Vec<u8>> {
	let mut data = Vec::new();
	match call {
		ContractCall::Approve {
			spender, amount, ..
		} => {
			data.extend_from_slice(&selector("approve(address,uint256)"));
			data.extend_from_slice(&address_word(spender)?);
			data.extend_from_slice(&uint_word(amount)?);
		},
		ContractCall::TransferErc20 {
			recipient, amount, ..
		} => {
			data.extend_from_slice(&selector("transfer(address,uint256)"));
			data.extend_from_slice(&address_word(recipient)?);
			data.extend_from_slice(&uint_word(amount)?);
		},
		ContractCall::RouterDeposit {
			vault,
			token,
			amount,
			memo,
			..
		} => {
			data.extend_from_slice(&selector("deposit(address,address,uint256,string)"));
			data.extend_from_slice(&address_word(vault)?);
			data.extend_from_slice(&address_word(token.as_deref().unwrap_or(ZERO_ADDRESS))?);
			data.extend_from_slice(&uint_word(amount)?);
			// dynamic string offset: four static words
			data.extend_from_slice(&uint_word("128")?);
			data.extend_from_slice(&string_tail(memo));
		},
	}
	Ok(data)
}

pub(crate) fn encode_hex(call: &ContractCall) -> ClientResult<String> {
	Ok(format!("0x{}", hex::encode(encode(call)?)))
}

pub(crate) fn balance_of_data(owner: &str) -> ClientResult<String> {
	let mut data = selector("balanceOf(address)").to_vec();
	data.extend_from_slice(&address_word(owner)?);
	Ok(format!("0x{}", hex::encode(data)))
}

pub(crate) fn decimals_data() -> String {
	format!("0x{}", hex::encode(selector("decimals()")))
}

pub(crate) fn allowance_data(owner: &str, spender: &str) -> ClientResult<String> {
	let mut data = selector("allowance(address,address)").to_vec();
	data.extend_from_slice(&address_word(owner)?);
	data.extend_from_slice(&address_word(spender)?);
	Ok(format!("0x{}", hex::encode(data)))
}

/// Decode a 0x-hex `eth_call` result as an unsigned integer
pub(crate) fn decode_uint(result: &str) -> ClientResult<BigInt> {
	let stripped = result
		.strip_prefix("0x")
		.or_else(|| result.strip_prefix("0X"))
		.unwrap_or(result);
	if stripped.is_empty() {
		return Ok(BigInt::from(0));
	}
	let bytes =
		hex::decode(stripped).map_err(|_| invalid(format!("invalid call result: {}", result)))?;
	Ok(BigInt::from_bytes_be(Sign::Plus, &bytes))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_known_selectors() {
		// the canonical ERC-20 selectors
		assert_eq!(hex::encode(selector("transfer(address,uint256)")), "a9059cbb");
		assert_eq!(hex::encode(selector("approve(address,uint256)")), "095ea7b3");
		assert_eq!(hex::encode(selector("balanceOf(address)")), "70a08231");
		assert_eq!(hex::encode(selector("decimals()")), "313ce567");
		assert_eq!(
			hex::encode(selector("allowance(address,address)")),
			"dd62ed3e"
		);
	}

	#[test]
	fn test_approve_encoding() {
		let call = ContractCall::Approve {
			token: "0x3155ba85d5f96b2d030a4966af206230e46849cb".to_string(),
			spender: "0x42A5Ed456650a09Dc10EBc6361A7480fDd61f27B".to_string(),
			amount: "1000".to_string(),
		};
		let data = encode(&call).unwrap();
		assert_eq!(data.len(), 4 + 32 + 32);
		assert_eq!(hex::encode(&data[..4]), "095ea7b3");
		// address is right-aligned in its word
		assert_eq!(data[4..16], [0u8; 12]);
		assert_eq!(data[67], 0xe8);
	}

	#[test]
	fn test_router_deposit_encoding_layout() {
		let memo = "SWITCH:thor1abc";
		let call = ContractCall::RouterDeposit {
			router: "0x42A5Ed456650a09Dc10EBc6361A7480fDd61f27B".to_string(),
			vault: "0x1c6a9783F812b3Af3aBbf7de64c3cD7CC7D1af44".to_string(),
			token: None,
			amount: "1000000000000000000".to_string(),
			memo: memo.to_string(),
		};
		let data = encode(&call).unwrap();
		// selector + 4 words + length word + one 32-byte padded chunk
		assert_eq!(data.len(), 4 + 4 * 32 + 32 + 32);
		// offset word points at the string tail
		assert_eq!(data[4 + 3 * 32 + 31], 128);
		// length word carries the memo length
		assert_eq!(data[4 + 4 * 32 + 31], memo.len() as u8);
	}

	#[test]
	fn test_decode_uint() {
		assert_eq!(decode_uint("0x").unwrap(), BigInt::from(0));
		assert_eq!(decode_uint("0x0000000000000000000000000000000000000000000000000000000000000012").unwrap(), BigInt::from(18));
		assert!(decode_uint("0xzz").is_err());
	}

	#[test]
	fn test_invalid_inputs_rejected() {
		assert!(address_word("0x1234").is_err());
		assert!(uint_word("-5").is_err());
		assert!(uint_word("12.5").is_err());
	}
}
