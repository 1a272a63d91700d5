// wallet-keys/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - Multi-Curve Support
//
// Layout:
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)  or xpub  │
// │                    │                            │
// │     ┌──────────────┴──────────────┐             │
// │     ▼                             ▼             │
// │  secp256k1 (BIP-32)        ed25519 (SLIP-0010)  │
// │  ├─ EVM (ETH...)           ├─ Solana            │
// │  ├─ Bitcoin                ├─ Aptos             │
// │  └─ Tron                   └─ Sui               │
// └─────────────────────────────────────────────────┘

pub mod ed25519;
pub mod secp256k1;

// Re-exports
pub use ed25519::Ed25519ExtendedKey;
pub use secp256k1::Secp256k1Deriver;

use crate::crypto::curve::{unsupported, CurveType, KeyPair};
use crate::crypto::paths::DerivationPath;
use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::{XPrv, XPub};
use tracing::debug;

// =============================================================================
// COMMON TYPES
// =============================================================================

/// Hierarchical key node: private or public, on either curve.
///
/// Ed25519 has no public-only form; SLIP-0010 defines no public derivation.
#[derive(Clone)]
pub enum ExtendedKey {
    Secp256k1Private(XPrv),
    Secp256k1Public(XPub),
    Ed25519Private(Ed25519ExtendedKey),
}

// Custom Debug - never prints key material
impl std::fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("curve", &self.curve())
            .field("private", &self.is_private())
            .field("depth", &self.depth())
            .finish()
    }
}

/// Result of a derivation: full key pair when a private key was available,
/// otherwise just the public key.
#[derive(Debug, Clone)]
pub enum Derived {
    KeyPair(KeyPair),
    PublicKey(Vec<u8>),
}

impl Derived {
    pub fn public_key(&self) -> &[u8] {
        match self {
            Derived::KeyPair(pair) => pair.public_key(),
            Derived::PublicKey(public_key) => public_key,
        }
    }

    pub fn key_pair(&self) -> Option<&KeyPair> {
        match self {
            Derived::KeyPair(pair) => Some(pair),
            Derived::PublicKey(_) => None,
        }
    }

    pub fn into_key_pair(self) -> Option<KeyPair> {
        match self {
            Derived::KeyPair(pair) => Some(pair),
            Derived::PublicKey(_) => None,
        }
    }
}

impl ExtendedKey {
    /// Master key from a BIP-39 seed
    pub fn from_seed(curve: CurveType, seed: &[u8]) -> WalletResult<Self> {
        validate_seed(seed)?;
        match curve {
            CurveType::Secp256k1 => Ok(Self::Secp256k1Private(Secp256k1Deriver::master(seed)?)),
            CurveType::Ed25519 => Ok(Self::Ed25519Private(Ed25519ExtendedKey::from_seed(seed)?)),
        }
    }

    /// Parse a Base58 `xpub`/`xprv` string (secp256k1 only)
    pub fn from_extended_str(encoded: &str) -> WalletResult<Self> {
        let encoded = encoded.trim();
        if encoded.starts_with("xprv") {
            return Ok(Self::Secp256k1Private(Secp256k1Deriver::parse_xprv(encoded)?));
        }
        Ok(Self::Secp256k1Public(Secp256k1Deriver::parse_xpub(encoded)?))
    }

    pub fn curve(&self) -> CurveType {
        match self {
            Self::Secp256k1Private(_) | Self::Secp256k1Public(_) => CurveType::Secp256k1,
            Self::Ed25519Private(_) => CurveType::Ed25519,
        }
    }

    pub fn is_private(&self) -> bool {
        !matches!(self, Self::Secp256k1Public(_))
    }

    pub fn depth(&self) -> u8 {
        match self {
            Self::Secp256k1Private(xprv) => xprv.attrs().depth,
            Self::Secp256k1Public(xpub) => xpub.attrs().depth,
            Self::Ed25519Private(key) => key.depth(),
        }
    }

    /// Derive a descendant along `path`, relative to this node.
    ///
    /// Ed25519 nodes treat every segment as hardened. Public secp256k1 nodes
    /// reject hardened segments with `UnsupportedOperation`.
    pub fn derive(&self, path: &DerivationPath) -> WalletResult<Self> {
        debug!(curve = self.curve().name(), path = %path, "deriving child key");
        match self {
            Self::Secp256k1Private(xprv) => Ok(Self::Secp256k1Private(
                Secp256k1Deriver::derive_private(xprv, path)?,
            )),
            Self::Secp256k1Public(xpub) => Ok(Self::Secp256k1Public(
                Secp256k1Deriver::derive_public(xpub, path)?,
            )),
            Self::Ed25519Private(key) => Ok(Self::Ed25519Private(key.derive_path(path)?)),
        }
    }

    /// Compressed 33-byte key (secp256k1) or 32-byte key (ed25519)
    pub fn public_key(&self) -> WalletResult<Vec<u8>> {
        match self {
            Self::Secp256k1Private(xprv) => Ok(xprv.public_key().to_bytes().to_vec()),
            Self::Secp256k1Public(xpub) => Ok(xpub.to_bytes().to_vec()),
            Self::Ed25519Private(key) => Ok(key.key_pair().public_key().to_vec()),
        }
    }

    pub fn key_pair(&self) -> WalletResult<KeyPair> {
        match self {
            Self::Secp256k1Private(xprv) => Secp256k1Deriver::key_pair(xprv),
            Self::Secp256k1Public(_) => Err(WalletError::Crypto(
                CryptoError::UnsupportedOperation(
                    "extended public key carries no private key".to_string(),
                ),
            )),
            Self::Ed25519Private(key) => Ok(key.key_pair()),
        }
    }

    /// Key pair when private, bare public key otherwise
    pub fn to_derived(&self) -> WalletResult<Derived> {
        if self.is_private() {
            Ok(Derived::KeyPair(self.key_pair()?))
        } else {
            Ok(Derived::PublicKey(self.public_key()?))
        }
    }

    /// Base58 `xpub...` string (secp256k1 only)
    pub fn to_xpub(&self) -> WalletResult<String> {
        match self {
            Self::Secp256k1Private(xprv) => Ok(Secp256k1Deriver::to_xpub_string(&xprv.public_key())),
            Self::Secp256k1Public(xpub) => Ok(Secp256k1Deriver::to_xpub_string(xpub)),
            Self::Ed25519Private(_) => Err(unsupported(
                CurveType::Ed25519,
                "extended public key serialization",
            )),
        }
    }
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================

/// Unified Key Deriver - seed + path + curve straight to a key pair
pub struct KeyDeriver;

impl KeyDeriver {
    /// # Arguments
    /// * `seed` - BIP-39 seed (64 bytes)
    /// * `path` - Derivation path (e.g., "m/44'/60'/0'/0/0")
    /// * `curve` - Curve type (secp256k1 or ed25519)
    pub fn derive(seed: &[u8], path: &DerivationPath, curve: CurveType) -> WalletResult<KeyPair> {
        ExtendedKey::from_seed(curve, seed)?.derive(path)?.key_pair()
    }
}

/// Validate seed length
#[inline]
fn validate_seed(seed: &[u8]) -> WalletResult<()> {
    if seed.len() != 64 {
        return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
            "Invalid seed length: expected 64 bytes, got {}",
            seed.len()
        ))));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::DerivationPaths;
    use std::str::FromStr;

    const TEST_SEED: &str = "2bbed6cfb9fa866227b0d421db6f7d09c03cfd4e02eb26b796b63005db37ea0cfe91884db5d57f09efbea9bbf00c7e4e1f62f1dcafd0fb58a3b2c9a6db0e979b";
    const TEST_XPUB: &str = "xpub6CNAT4esfWBaxJpYcxaVhpVebSeuTcYLqji5qAezsp32X6kZk7Eyk9dwW8tUaaxCkKQwbY1vGtiiAoQYybiPUsCxxxaes5xATeVjTPhrkH1";

    fn path(s: &str) -> DerivationPath {
        DerivationPath::from_str(s).unwrap()
    }

    #[test]
    fn test_unified_secp256k1() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let pair = KeyDeriver::derive(&seed, &path("m/44'/60'/0'/0/5"), CurveType::Secp256k1).unwrap();
        assert_eq!(pair.curve(), CurveType::Secp256k1);
        assert_eq!(
            hex::encode(pair.private_key()),
            "d688b49ecda9d44249bb757bb000d2105b17dc9c764619985481eab6f7100fb7"
        );
    }

    #[test]
    fn test_unified_ed25519() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let pair = KeyDeriver::derive(&seed, &path("m/44'/637'/0'/0'/5'"), CurveType::Ed25519).unwrap();
        assert_eq!(pair.curve(), CurveType::Ed25519);
        assert_eq!(
            hex::encode(pair.private_key()),
            "087ee9e7dd9f09524596d991583205afc39d47540a7ae53062c4635010d97744"
        );
        assert_eq!(pair.public_key().len(), 32);
    }

    #[test]
    fn test_invalid_seed() {
        let bad_seed = [0u8; 32];
        let result = KeyDeriver::derive(&bad_seed, &path(DerivationPaths::EVM_0), CurveType::Secp256k1);
        assert!(matches!(
            result,
            Err(WalletError::Crypto(CryptoError::DerivationFailed(_)))
        ));
    }

    #[test]
    fn test_xpub_round_trip_through_extended_key() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let account = ExtendedKey::from_seed(CurveType::Secp256k1, &seed)
            .unwrap()
            .derive(&path("m/44'/60'/0'"))
            .unwrap();
        assert_eq!(account.depth(), 3);
        assert_eq!(account.to_xpub().unwrap(), TEST_XPUB);

        let public = ExtendedKey::from_extended_str(TEST_XPUB).unwrap();
        assert!(!public.is_private());
        assert_eq!(public.depth(), 3);

        let child = public.derive(&path("m/0/5")).unwrap();
        match child.to_derived().unwrap() {
            Derived::PublicKey(pk) => assert_eq!(
                hex::encode(pk),
                "028446d75100b646e1c96d72400d4eed961176cfa939451de8204a256255392324"
            ),
            Derived::KeyPair(_) => panic!("public node must not yield a private key"),
        }
    }

    #[test]
    fn test_public_node_has_no_key_pair() {
        let public = ExtendedKey::from_extended_str(TEST_XPUB).unwrap();
        let err = public.key_pair().unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_ed25519_has_no_xpub() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let root = ExtendedKey::from_seed(CurveType::Ed25519, &seed).unwrap();
        assert!(root.to_xpub().unwrap_err().is_unsupported());
    }

    #[test]
    fn test_derived_public_key_matches_key_pair() {
        let seed = hex::decode(TEST_SEED).unwrap();
        for curve in [CurveType::Secp256k1, CurveType::Ed25519] {
            let node = ExtendedKey::from_seed(curve, &seed)
                .unwrap()
                .derive(&path("m/44'/1'/0'"))
                .unwrap();
            let derived = node.to_derived().unwrap();
            assert_eq!(derived.public_key(), node.public_key().unwrap().as_slice());
            assert!(derived.key_pair().is_some());
        }
    }

    #[test]
    fn test_different_curves_produce_different_keys() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let secp = KeyDeriver::derive(&seed, &path("m/44'/60'/0'/0'"), CurveType::Secp256k1).unwrap();
        let ed = KeyDeriver::derive(&seed, &path("m/44'/60'/0'/0'"), CurveType::Ed25519).unwrap();
        assert_ne!(secp.private_key(), ed.private_key());
    }

    #[test]
    fn test_debug_hides_key_material() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let root = ExtendedKey::from_seed(CurveType::Secp256k1, &seed).unwrap();
        let debug = format!("{:?}", root);
        assert!(debug.contains("Secp256k1"));
        assert!(!debug.contains("xprv"));
    }
}
