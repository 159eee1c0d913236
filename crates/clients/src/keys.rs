//! Keystore key derivation
//!
//! BIP39 phrase -> BIP32 hardened-path derivation -> secp256k1 keypair.
//! Seed material is zeroized as soon as the master key is derived.

use bip39::Mnemonic;
use hmac::{Hmac, Mac};
use secp256k1::{All, Message, PublicKey, Scalar, Secp256k1, SecretKey};
use sha2::Sha512;
use std::fmt;
use zeroize::Zeroizing;

use mcs_types::{ClientError, ClientResult};

type HmacSha512 = Hmac<Sha512>;

/// Hardened derivation marker
pub const HARDENED: u32 = 0x8000_0000;

struct ExtendedKey {
	secret: SecretKey,
	chain_code: [u8; 32],
}

fn hmac_sha512(key: &[u8], data: &[u8]) -> ClientResult<[u8; 64]> {
	let mut mac = HmacSha512::new_from_slice(key).map_err(|e| ClientError::KeyDerivation {
		reason: e.to_string(),
	})?;
	mac.update(data);
	let mut out = [0u8; 64];
	out.copy_from_slice(&mac.finalize().into_bytes());
	Ok(out)
}

fn master_key(seed: &[u8]) -> ClientResult<ExtendedKey> {
	let digest = hmac_sha512(b"Bitcoin seed", seed)?;
	let secret = SecretKey::from_slice(&digest[..32]).map_err(|e| ClientError::KeyDerivation {
		reason: e.to_string(),
	})?;
	let mut chain_code = [0u8; 32];
	chain_code.copy_from_slice(&digest[32..]);
	Ok(ExtendedKey { secret, chain_code })
}

fn child_key(secp: &Secp256k1<All>, parent: &ExtendedKey, index: u32) -> ClientResult<ExtendedKey> {
	let mut data = Vec::with_capacity(37);
	if index >= HARDENED {
		data.push(0);
		data.extend_from_slice(&parent.secret.secret_bytes());
	} else {
		let public = PublicKey::from_secret_key(secp, &parent.secret);
		data.extend_from_slice(&public.serialize());
	}
	data.extend_from_slice(&index.to_be_bytes());

	let digest = hmac_sha512(&parent.chain_code, &data)?;
	let mut tweak_bytes = [0u8; 32];
	tweak_bytes.copy_from_slice(&digest[..32]);
	let tweak = Scalar::from_be_bytes(tweak_bytes).map_err(|e| ClientError::KeyDerivation {
		reason: e.to_string(),
	})?;
	let secret = parent
		.secret
		.add_tweak(&tweak)
		.map_err(|e| ClientError::KeyDerivation {
			reason: e.to_string(),
		})?;
	let mut chain_code = [0u8; 32];
	chain_code.copy_from_slice(&digest[32..]);
	Ok(ExtendedKey { secret, chain_code })
}

/// A derived signing keypair
#[derive(Clone)]
pub struct KeystoreSigner {
	secp: Secp256k1<All>,
	secret: SecretKey,
	public: PublicKey,
}

impl KeystoreSigner {
	/// Derive the keypair at `path` from a BIP39 mnemonic (empty passphrase)
	pub fn from_phrase(phrase: &str, path: &[u32]) -> ClientResult<Self> {
		let mnemonic =
			Mnemonic::parse_normalized(phrase.trim()).map_err(|_| ClientError::InvalidPhrase)?;
		let seed = Zeroizing::new(mnemonic.to_seed(""));

		let secp = Secp256k1::new();
		let mut key = master_key(seed.as_ref())?;
		for &index in path {
			key = child_key(&secp, &key, index)?;
		}
		let public = PublicKey::from_secret_key(&secp, &key.secret);
		Ok(Self {
			secp,
			secret: key.secret,
			public,
		})
	}

	pub fn public_key(&self) -> &PublicKey {
		&self.public
	}

	/// Compressed public key, hex encoded
	pub fn public_key_hex(&self) -> String {
		hex::encode(self.public.serialize())
	}

	/// Sign a 32-byte digest; compact signature, hex encoded
	pub fn sign_digest(&self, digest: [u8; 32]) -> String {
		let message = Message::from_digest(digest);
		let signature = self.secp.sign_ecdsa(&message, &self.secret);
		hex::encode(signature.serialize_compact())
	}
}

impl fmt::Debug for KeystoreSigner {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("KeystoreSigner")
			.field("public", &self.public_key_hex())
			.finish_non_exhaustive()
	}
}

/// Standard derivation paths, one per supported chain
pub mod paths {
	use super::HARDENED;

	pub const BITCOIN: [u32; 5] = [84 | HARDENED, HARDENED, HARDENED, 0, 0];
	pub const LITECOIN: [u32; 5] = [84 | HARDENED, 2 | HARDENED, HARDENED, 0, 0];
	pub const BITCOIN_CASH: [u32; 5] = [44 | HARDENED, 145 | HARDENED, HARDENED, 0, 0];
	pub const BINANCE: [u32; 5] = [44 | HARDENED, 714 | HARDENED, HARDENED, 0, 0];
	pub const ETHEREUM: [u32; 5] = [44 | HARDENED, 60 | HARDENED, HARDENED, 0, 0];
	pub const THORCHAIN: [u32; 5] = [44 | HARDENED, 931 | HARDENED, HARDENED, 0, 0];
}

#[cfg(test)]
mod tests {
	use super::*;

	const PHRASE: &str =
		"abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

	#[test]
	fn test_derivation_is_deterministic() {
		let a = KeystoreSigner::from_phrase(PHRASE, &paths::THORCHAIN).unwrap();
		let b = KeystoreSigner::from_phrase(PHRASE, &paths::THORCHAIN).unwrap();
		assert_eq!(a.public_key_hex(), b.public_key_hex());
	}

	#[test]
	fn test_different_paths_give_different_keys() {
		let btc = KeystoreSigner::from_phrase(PHRASE, &paths::BITCOIN).unwrap();
		let eth = KeystoreSigner::from_phrase(PHRASE, &paths::ETHEREUM).unwrap();
		assert_ne!(btc.public_key_hex(), eth.public_key_hex());
	}

	#[test]
	fn test_invalid_phrase_rejected() {
		assert!(matches!(
			KeystoreSigner::from_phrase("not a valid phrase", &paths::BITCOIN),
			Err(ClientError::InvalidPhrase)
		));
	}

	#[test]
	fn test_bip84_first_account_public_key() {
		// BIP84 test vector: first receive keypair of the reference mnemonic
		let signer = KeystoreSigner::from_phrase(PHRASE, &paths::BITCOIN).unwrap();
		assert_eq!(
			signer.public_key_hex(),
			"0330d54fd0dd420a6e5f8d3624f5f3482cae350f79d5f0753bf5beef9c2d91af3c"
		);
	}

	#[test]
	fn test_signature_is_stable() {
		let signer = KeystoreSigner::from_phrase(PHRASE, &paths::BITCOIN).unwrap();
		let digest = [7u8; 32];
		assert_eq!(signer.sign_digest(digest), signer.sign_digest(digest));
	}
}
