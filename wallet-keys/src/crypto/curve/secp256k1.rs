// wallet-keys/src/crypto/curve/secp256k1.rs
//
// secp256k1 provider - ECDSA (RFC6979) with recovery id, ECDH, public key recovery
//
// Message convention: `message` is the digest to sign (prehash); callers hash
// with the chain's own scheme (Keccak-256, SHA-256d, ...). Inputs shorter than
// 32 bytes are read as a big-endian integer, i.e. left-padded with zeros.

use super::{to_key_bytes, CurveProvider, CurveType, KeyPair};
use crate::error::{CryptoError, WalletError, WalletResult};
use std::borrow::Cow;
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use k256::{PublicKey, SecretKey};
use rand::rngs::OsRng;
use tracing::trace;
use zeroize::Zeroizing;

/// Length of a compact signature plus recovery byte
pub const RECOVERABLE_SIGNATURE_LEN: usize = 65;

const DIGEST_LEN: usize = 32;

pub struct Secp256k1Curve;

impl Secp256k1Curve {
    fn signing_key(private_key: &[u8]) -> WalletResult<SigningKey> {
        let bytes = to_key_bytes(private_key)?;
        SigningKey::from_slice(bytes.as_slice()).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidPrivateKey(format!(
                "Invalid secp256k1 scalar: {}",
                e
            )))
        })
    }

    fn pair_from_signing_key(signing_key: &SigningKey) -> KeyPair {
        let mut private_key = Zeroizing::new([0u8; 32]);
        private_key.copy_from_slice(&signing_key.to_bytes());
        let public_key = compress(signing_key.verifying_key());
        KeyPair::new(CurveType::Secp256k1, private_key, public_key, None)
    }

    fn parse_public_key(public_key: &[u8]) -> WalletResult<PublicKey> {
        PublicKey::from_sec1_bytes(public_key).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidPublicKey(format!(
                "Invalid secp256k1 point ({} bytes): {}",
                public_key.len(),
                e
            )))
        })
    }

    /// 65-byte uncompressed encoding (`0x04 ‖ x ‖ y`) of any SEC1 public key.
    ///
    /// Ethereum and Tron addresses hash the uncompressed point, while key pairs
    /// carry the compressed one.
    pub fn uncompressed_public_key(public_key: &[u8]) -> WalletResult<[u8; 65]> {
        let point = Self::parse_public_key(public_key)?;
        let vk = VerifyingKey::from(&point);
        let encoded = vk.to_encoded_point(false);
        let mut out = [0u8; 65];
        out.copy_from_slice(encoded.as_bytes());
        Ok(out)
    }

    /// 33-byte compressed encoding of any SEC1 public key.
    pub fn compressed_public_key(public_key: &[u8]) -> WalletResult<[u8; 33]> {
        let point = Self::parse_public_key(public_key)?;
        let mut out = [0u8; 33];
        out.copy_from_slice(&compress(&VerifyingKey::from(&point)));
        Ok(out)
    }
}

fn compress(vk: &VerifyingKey) -> Vec<u8> {
    vk.to_encoded_point(true).as_bytes().to_vec()
}

/// Message as a prehash of at least 32 bytes
fn prehash(message: &[u8]) -> Cow<'_, [u8]> {
    if message.len() >= DIGEST_LEN {
        return Cow::Borrowed(message);
    }
    let mut padded = vec![0u8; DIGEST_LEN];
    padded[DIGEST_LEN - message.len()..].copy_from_slice(message);
    Cow::Owned(padded)
}

impl CurveProvider for Secp256k1Curve {
    fn curve(&self) -> CurveType {
        CurveType::Secp256k1
    }

    fn generate_key_pair(&self) -> KeyPair {
        let signing_key = SigningKey::random(&mut OsRng);
        Self::pair_from_signing_key(&signing_key)
    }

    fn key_pair_from_private_key(&self, private_key: &[u8]) -> WalletResult<KeyPair> {
        let signing_key = Self::signing_key(private_key)?;
        Ok(Self::pair_from_signing_key(&signing_key))
    }

    fn shared_secret(
        &self,
        public_key: &[u8],
        private_key: &[u8],
    ) -> WalletResult<Zeroizing<[u8; 32]>> {
        let bytes = to_key_bytes(private_key)?;
        let secret = SecretKey::from_slice(bytes.as_slice()).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidPrivateKey(format!(
                "Invalid secp256k1 scalar: {}",
                e
            )))
        })?;
        let public = Self::parse_public_key(public_key)?;

        let shared = k256::ecdh::diffie_hellman(secret.to_nonzero_scalar(), public.as_affine());
        let mut out = Zeroizing::new([0u8; 32]);
        out.copy_from_slice(shared.raw_secret_bytes().as_slice());
        Ok(out)
    }

    /// `r ‖ s ‖ v` where `v` is the recovery id (0 or 1). `s` is low-S normalized.
    fn sign(&self, message: &[u8], private_key: &[u8]) -> WalletResult<Vec<u8>> {
        let signing_key = Self::signing_key(private_key)?;
        let (signature, recovery_id) = signing_key
            .sign_prehash_recoverable(&prehash(message))
            .map_err(|e| WalletError::Crypto(CryptoError::SigningFailed(e.to_string())))?;

        let mut out = Vec::with_capacity(RECOVERABLE_SIGNATURE_LEN);
        out.extend_from_slice(&signature.to_bytes());
        out.push(recovery_id.to_byte());
        trace!(len = message.len(), "secp256k1 message signed");
        Ok(out)
    }

    fn verify(&self, signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
        if signature.len() < 64 {
            return false;
        }
        let Ok(signature) = Signature::from_slice(&signature[..64]) else {
            return false;
        };
        let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(public_key) else {
            return false;
        };
        verifying_key
            .verify_prehash(&prehash(message), &signature)
            .is_ok()
    }

    /// Compressed (33-byte) public key of the signer
    fn recover_public_key(&self, signature: &[u8], message: &[u8]) -> WalletResult<Vec<u8>> {
        if signature.len() != RECOVERABLE_SIGNATURE_LEN {
            return Err(WalletError::Validation(format!(
                "recoverable signature must be {} bytes, got {}",
                RECOVERABLE_SIGNATURE_LEN,
                signature.len()
            )));
        }

        let sig = Signature::from_slice(&signature[..64]).map_err(|e| {
            WalletError::Validation(format!("Malformed signature: {}", e))
        })?;
        let recovery_id = RecoveryId::from_byte(signature[64]).ok_or_else(|| {
            WalletError::Validation(format!("Invalid recovery id: {}", signature[64]))
        })?;

        let verifying_key =
            VerifyingKey::recover_from_prehash(&prehash(message), &sig, recovery_id).map_err(
                |e| {
                    WalletError::Crypto(CryptoError::InvalidPublicKey(format!(
                        "Recovery failed: {}",
                        e
                    )))
                },
            )?;

        Ok(compress(&verifying_key))
    }
}

// =============================================================================
// TESTS
// =============================================================================
