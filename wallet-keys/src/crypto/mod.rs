// wallet-keys/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic**: BIP-39 phrases and seeds via [`WalletMnemonic`].
//! - **Curves**: key pairs, ECDH, signatures for secp256k1 and ed25519 via [`CurveProvider`].
//! - **Key Derivation**: BIP-32 and SLIP-0010 trees via [`ExtendedKey`].
//! - **Derivation Paths**: parsing and presets via [`DerivationPath`] / [`DerivationPaths`].

pub mod curve;
pub mod hash;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use curve::{CurveProvider, CurveType, KeyPair};
pub use key_deriver::{Derived, ExtendedKey, KeyDeriver};
pub use mnemonic::{WalletMnemonic, WordCount};
pub use paths::{ChildIndex, DerivationPath, DerivationPaths};

use k256::elliptic_curve::subtle::ConstantTimeEq;

/// Constant-time byte comparison. Different lengths compare unequal.
pub fn secure_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}
