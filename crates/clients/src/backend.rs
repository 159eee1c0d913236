//! Signing backend strategy
//!
//! A client's wallet source is a closed variant set chosen at connect time;
//! dispatch happens here, never by swapping function fields on a live client.

use serde_json::json;
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;

use mcs_types::{Chain, ClientResult, SignedTransfer, TxParams, WalletProvider};

use crate::keys::KeystoreSigner;

#[derive(Clone)]
pub enum SignerBackend {
	/// Locally derived key from a decrypted phrase
	Keystore(KeystoreSigner),
	/// Injected browser-extension provider; signing happens out of process
	Extension(Arc<dyn WalletProvider>),
}

impl fmt::Debug for SignerBackend {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SignerBackend::Keystore(signer) => f.debug_tuple("Keystore").field(signer).finish(),
			SignerBackend::Extension(_) => f.debug_tuple("Extension").finish(),
		}
	}
}

/// Canonical digest of a transfer's fields; what the keystore backend signs.
/// Field order is fixed by the serializer's sorted keys, so gateway and
/// client agree byte-for-byte.
fn transfer_digest(
	chain: Chain,
	from: &str,
	params: &TxParams,
	amount_base: &str,
	fee_rate: Option<f64>,
) -> [u8; 32] {
	let payload = json!({
		"amount": amount_base,
		"asset": params.asset.to_string(),
		"chain": chain,
		"fee_rate": fee_rate,
		"from": from,
		"memo": params.memo,
		"recipient": params.recipient,
	});
	Sha256::digest(payload.to_string().as_bytes()).into()
}

/// Build the signed gateway envelope for a keystore-backed transfer
pub fn sign_transfer(
	signer: &KeystoreSigner,
	chain: Chain,
	from: &str,
	params: &TxParams,
	fee_rate: Option<f64>,
) -> ClientResult<SignedTransfer> {
	let amount_base = params.amount.base_units_string();
	let digest = transfer_digest(chain, from, params, &amount_base, fee_rate);
	Ok(SignedTransfer {
		chain,
		from_address: from.to_string(),
		recipient: params.recipient.clone(),
		asset: params.asset.to_string(),
		amount: amount_base,
		memo: params.memo.clone(),
		fee_rate,
		public_key: signer.public_key_hex(),
		signature: signer.sign_digest(digest),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::keys::paths;
	use mcs_types::{Amount, Asset};

	const PHRASE: &str =
		"abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

	#[test]
	fn test_signed_transfer_envelope() {
		let signer = KeystoreSigner::from_phrase(PHRASE, &paths::BITCOIN).unwrap();
		let params = TxParams::new(
			Asset::btc(),
			Amount::from_asset_str("0.5", 8).unwrap(),
			"bc1qrecipient",
		)
		.with_memo("SWAP:THOR.RUNE:thor1abc:100");

		let transfer =
			sign_transfer(&signer, Chain::Bitcoin, "bc1qfrom", &params, Some(10.0)).unwrap();
		assert_eq!(transfer.amount, "50000000");
		assert_eq!(transfer.asset, "BTC.BTC");
		assert_eq!(transfer.public_key, signer.public_key_hex());
		// compact secp256k1 signature, hex encoded
		assert_eq!(transfer.signature.len(), 128);
	}

	#[test]
	fn test_signature_covers_the_memo() {
		let signer = KeystoreSigner::from_phrase(PHRASE, &paths::BITCOIN).unwrap();
		let base = TxParams::new(
			Asset::btc(),
			Amount::from_asset_str("0.5", 8).unwrap(),
			"bc1qrecipient",
		);
		let with_memo = base.clone().with_memo("ADD:BTC.BTC:thor1abc");

		let plain = sign_transfer(&signer, Chain::Bitcoin, "bc1qfrom", &base, None).unwrap();
		let memoed = sign_transfer(&signer, Chain::Bitcoin, "bc1qfrom", &with_memo, None).unwrap();
		assert_ne!(plain.signature, memoed.signature);
	}
}
