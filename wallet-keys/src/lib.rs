// wallet-keys/src/lib.rs

//! Multi-chain HD key derivation and address encoding.
//!
//! - [`crypto`]: BIP-39 mnemonics, curve providers, BIP-32 / SLIP-0010 derivation
//! - [`chains`]: public key → address for EVM, Tron, Bitcoin, Solana
//! - [`api`]: the stable free-function surface
//! - [`config`]: network parameters

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;

pub use chains::{AddressType, Chain};
pub use config::{BitcoinParams, EngineConfig, TronParams};
pub use crypto::{
    secure_eq, CurveProvider, CurveType, DerivationPath, Derived, ExtendedKey, KeyPair,
    WalletMnemonic,
};
pub use error::{AddressError, CryptoError, MnemonicError, WalletError, WalletResult};
