// wallet-keys/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation - BIP-32 / BIP-44
//
// Used by: Bitcoin, Ethereum/EVM, Tron
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::crypto::curve::{CurveProvider, KeyPair, Secp256k1Curve};
use crate::crypto::paths::{ChildIndex, DerivationPath};
use crate::error::{AddressError, CryptoError, WalletError, WalletResult};
use bip32::{ChildNumber, Prefix, XPrv, XPub};
use std::str::FromStr;

/// secp256k1 Key Deriver - BIP-32 Standard
///
/// Private derivation walks an `XPrv`; public derivation walks an `XPub`
/// and can only follow non-hardened segments.
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Master extended private key from a BIP-39 seed
    pub fn master(seed: &[u8]) -> WalletResult<XPrv> {
        XPrv::new(seed).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Failed to create master key: {}",
                e
            )))
        })
    }

    pub fn derive_private(root: &XPrv, path: &DerivationPath) -> WalletResult<XPrv> {
        let mut child = root.clone();
        for segment in path.segments() {
            child = child.derive_child(child_number(*segment)?).map_err(|e| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Child derivation failed at {}: {}",
                    segment, e
                )))
            })?;
        }
        Ok(child)
    }

    /// Public-only derivation. A hardened segment is an `UnsupportedOperation`.
    pub fn derive_public(root: &XPub, path: &DerivationPath) -> WalletResult<XPub> {
        let mut child = root.clone();
        for segment in path.segments() {
            if segment.hardened {
                return Err(WalletError::Crypto(CryptoError::UnsupportedOperation(
                    format!(
                        "hardened segment {} cannot be derived from an extended public key",
                        segment
                    ),
                )));
            }
            child = child.derive_child(child_number(*segment)?).map_err(|e| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Child derivation failed at {}: {}",
                    segment, e
                )))
            })?;
        }
        Ok(child)
    }

    pub fn key_pair(xprv: &XPrv) -> WalletResult<KeyPair> {
        let mut key_bytes: [u8; 32] = xprv.private_key().to_bytes().into();
        let pair = Secp256k1Curve.key_pair_from_private_key(&key_bytes);
        zeroize::Zeroize::zeroize(&mut key_bytes);
        pair
    }

    /// Base58 `xpub...` serialization
    pub fn to_xpub_string(xpub: &XPub) -> String {
        xpub.to_string(Prefix::XPUB)
    }

    pub fn parse_xpub(encoded: &str) -> WalletResult<XPub> {
        XPub::from_str(encoded.trim()).map_err(|e| {
            WalletError::Address(AddressError::Decode(format!(
                "invalid extended public key: {}",
                e
            )))
        })
    }

    pub fn parse_xprv(encoded: &str) -> WalletResult<XPrv> {
        XPrv::from_str(encoded.trim()).map_err(|e| {
            WalletError::Address(AddressError::Decode(format!(
                "invalid extended private key: {}",
                e
            )))
        })
    }
}

fn child_number(index: ChildIndex) -> WalletResult<ChildNumber> {
    ChildNumber::new(index.index, index.hardened).map_err(|e| {
        WalletError::Crypto(CryptoError::InvalidPath(format!(
            "invalid index {}: {}",
            index, e
        )))
    })
}

// =============================================================================
// TESTS
// =============================================================================
