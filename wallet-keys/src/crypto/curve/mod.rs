// wallet-keys/src/crypto/curve/mod.rs
//
// Curve Providers - one contract, two curve families
//
// ┌──────────────────────────┬──────────────────────────────┐
// │ Secp256k1Curve (ECDSA)   │ Ed25519Curve (EdDSA/X25519)  │
// ├──────────────────────────┼──────────────────────────────┤
// │ pubkey: 33B compressed   │ pubkey: 32B + 32B x25519     │
// │ ECDH: secp256k1 x-coord  │ ECDH: X25519                 │
// │ sig: 64B + 1B recovery   │ sig: 64B                     │
// │ recover pubkey: yes      │ recover pubkey: unsupported  │
// └──────────────────────────┴──────────────────────────────┘

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::Ed25519Curve;
pub use secp256k1::Secp256k1Curve;

use crate::error::{CryptoError, WalletError, WalletResult};
use zeroize::Zeroizing;

/// Curve family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    /// secp256k1 - Bitcoin, Ethereum, Tron
    Secp256k1,
    /// Ed25519 - Solana, Aptos, Sui
    Ed25519,
}

impl CurveType {
    /// Provider implementing this curve's operations
    pub fn provider(self) -> &'static dyn CurveProvider {
        match self {
            CurveType::Secp256k1 => &Secp256k1Curve,
            CurveType::Ed25519 => &Ed25519Curve,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CurveType::Secp256k1 => "secp256k1",
            CurveType::Ed25519 => "ed25519",
        }
    }
}

/// Capability contract shared by every curve family.
///
/// Operations a family does not define keep the default body, which returns
/// [`CryptoError::UnsupportedOperation`].
pub trait CurveProvider: Send + Sync {
    fn curve(&self) -> CurveType;

    /// Fresh key pair from the OS CSPRNG
    fn generate_key_pair(&self) -> KeyPair;

    /// Rebuild a key pair from raw private key bytes.
    ///
    /// Fails with `InvalidPrivateKey` for a wrong length or an out-of-range scalar.
    fn key_pair_from_private_key(&self, private_key: &[u8]) -> WalletResult<KeyPair>;

    /// Diffie-Hellman x-coordinate of `private_key * public_key`
    fn shared_secret(
        &self,
        public_key: &[u8],
        private_key: &[u8],
    ) -> WalletResult<Zeroizing<[u8; 32]>>;

    fn sign(&self, message: &[u8], private_key: &[u8]) -> WalletResult<Vec<u8>>;

    /// Never errors: any malformed input is simply `false`.
    fn verify(&self, signature: &[u8], message: &[u8], public_key: &[u8]) -> bool;

    fn recover_public_key(&self, _signature: &[u8], _message: &[u8]) -> WalletResult<Vec<u8>> {
        Err(unsupported(self.curve(), "public key recovery"))
    }
}

pub(crate) fn unsupported(curve: CurveType, what: &str) -> WalletError {
    WalletError::Crypto(CryptoError::UnsupportedOperation(format!(
        "{} is not defined for {}",
        what,
        curve.name()
    )))
}

pub(crate) fn to_key_bytes(private_key: &[u8]) -> WalletResult<Zeroizing<[u8; 32]>> {
    if private_key.len() != 32 {
        return Err(WalletError::Crypto(CryptoError::InvalidPrivateKey(format!(
            "expected 32 bytes, got {}",
            private_key.len()
        ))));
    }
    let mut bytes = Zeroizing::new([0u8; 32]);
    bytes.copy_from_slice(private_key);
    Ok(bytes)
}

// =============================================================================
// KEY PAIR
// =============================================================================

/// Private key plus the public key(s) computed from it.
///
/// Only the curve providers construct this, so the public half always
/// matches the private half.
#[derive(Clone)]
pub struct KeyPair {
    curve: CurveType,
    private_key: Zeroizing<[u8; 32]>,
    public_key: Vec<u8>,
    x25519_public_key: Option<[u8; 32]>,
}

// Custom Debug - never prints the private key
impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("curve", &self.curve)
            .field("private_key", &"[REDACTED]")
            .field("public_key", &hex::encode(&self.public_key))
            .field("x25519_public_key", &self.x25519_public_key.map(hex::encode))
            .finish()
    }
}

impl KeyPair {
    pub(crate) fn new(
        curve: CurveType,
        private_key: Zeroizing<[u8; 32]>,
        public_key: Vec<u8>,
        x25519_public_key: Option<[u8; 32]>,
    ) -> Self {
        Self {
            curve,
            private_key,
            public_key,
            x25519_public_key,
        }
    }

    #[inline]
    pub fn curve(&self) -> CurveType {
        self.curve
    }

    #[inline]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// 33-byte compressed point (secp256k1) or 32-byte point (ed25519)
    #[inline]
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// X25519 companion key, ed25519 only
    #[inline]
    pub fn x25519_public_key(&self) -> Option<&[u8; 32]> {
        self.x25519_public_key.as_ref()
    }
}
