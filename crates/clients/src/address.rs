//! Per-chain address codecs and validation

use bech32::{ToBase32, Variant};
use ripemd::Ripemd160;
use secp256k1::PublicKey;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

use mcs_types::{ClientError, ClientResult};

/// `ripemd160(sha256(data))`
pub fn hash160(data: &[u8]) -> [u8; 20] {
	let sha = Sha256::digest(data);
	let mut out = [0u8; 20];
	out.copy_from_slice(&Ripemd160::digest(sha));
	out
}

fn encoding_error(reason: impl Into<String>) -> ClientError {
	ClientError::KeyDerivation {
		reason: reason.into(),
	}
}

/// Native segwit v0 (P2WPKH) address
pub fn segwit_address(hrp: &str, public_key: &PublicKey) -> ClientResult<String> {
	let program = hash160(&public_key.serialize());
	let mut data = vec![bech32::u5::try_from_u8(0).map_err(|e| encoding_error(e.to_string()))?];
	data.extend(program.to_base32());
	bech32::encode(hrp, data, Variant::Bech32).map_err(|e| encoding_error(e.to_string()))
}

/// Cosmos-style bech32 account address (BNB, THOR)
pub fn bech32_address(hrp: &str, public_key: &PublicKey) -> ClientResult<String> {
	let hash = hash160(&public_key.serialize());
	bech32::encode(hrp, hash.to_base32(), Variant::Bech32)
		.map_err(|e| encoding_error(e.to_string()))
}

/// Legacy base58check (P2PKH) address
pub fn base58_address(version: u8, public_key: &PublicKey) -> String {
	let hash = hash160(&public_key.serialize());
	bs58::encode(hash).with_check_version(version).into_string()
}

/// Ethereum address: keccak256 of the uncompressed public key, last 20 bytes
pub fn eth_address(public_key: &PublicKey) -> String {
	let uncompressed = public_key.serialize_uncompressed();
	let digest = Keccak256::digest(&uncompressed[1..]);
	format!("0x{}", hex::encode(&digest[12..]))
}

pub fn is_valid_bech32(address: &str, hrp: &str) -> bool {
	match bech32::decode(address) {
		Ok((decoded_hrp, _, _)) => decoded_hrp == hrp,
		Err(_) => false,
	}
}

pub fn is_valid_base58check(address: &str, version: u8) -> bool {
	bs58::decode(address)
		.with_check(Some(version))
		.into_vec()
		.is_ok()
}

pub fn is_valid_eth_address(address: &str) -> bool {
	let hex_part = match address.strip_prefix("0x").or_else(|| address.strip_prefix("0X")) {
		Some(part) => part,
		None => return false,
	};
	hex_part.len() == 40 && hex_part.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::keys::{paths, KeystoreSigner};

	const PHRASE: &str =
		"abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

	#[test]
	fn test_bip84_first_receive_address() {
		// BIP84 test vector for the reference mnemonic
		let signer = KeystoreSigner::from_phrase(PHRASE, &paths::BITCOIN).unwrap();
		let address = segwit_address("bc", signer.public_key()).unwrap();
		assert_eq!(address, "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu");
		assert!(is_valid_bech32(&address, "bc"));
		assert!(!is_valid_bech32(&address, "ltc"));
	}

	#[test]
	fn test_eth_address_from_reference_mnemonic() {
		// First account the common wallet implementations derive at m/44'/60'/0'/0/0
		let signer = KeystoreSigner::from_phrase(PHRASE, &paths::ETHEREUM).unwrap();
		let address = eth_address(signer.public_key());
		assert_eq!(
			address.to_ascii_lowercase(),
			"0x9858effd232b4033e47d90003d41ec34ecaeda94"
		);
		assert!(is_valid_eth_address(&address));
	}

	#[test]
	fn test_bech32_account_addresses_carry_their_hrp() {
		let signer = KeystoreSigner::from_phrase(PHRASE, &paths::THORCHAIN).unwrap();
		let thor = bech32_address("thor", signer.public_key()).unwrap();
		assert!(thor.starts_with("thor1"));
		assert!(is_valid_bech32(&thor, "thor"));

		let bnb_signer = KeystoreSigner::from_phrase(PHRASE, &paths::BINANCE).unwrap();
		let bnb = bech32_address("bnb", bnb_signer.public_key()).unwrap();
		assert!(bnb.starts_with("bnb1"));
	}

	#[test]
	fn test_base58_round_trip() {
		let signer = KeystoreSigner::from_phrase(PHRASE, &paths::BITCOIN_CASH).unwrap();
		let address = base58_address(0x00, signer.public_key());
		assert!(is_valid_base58check(&address, 0x00));
		assert!(!is_valid_base58check(&address, 0x30));
		assert!(!is_valid_base58check("garbage-address", 0x00));
	}

	#[test]
	fn test_eth_address_shape_validation() {
		assert!(is_valid_eth_address("0x9858EfFD232B4033E47d90003D41EC34EcaEda94"));
		assert!(!is_valid_eth_address("9858EfFD232B4033E47d90003D41EC34EcaEda94"));
		assert!(!is_valid_eth_address("0x123"));
		assert!(!is_valid_eth_address("0xZZ58EfFD232B4033E47d90003D41EC34EcaEda9Z"));
	}
}
