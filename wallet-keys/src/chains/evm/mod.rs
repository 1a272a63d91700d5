// wallet-keys/src/chains/evm/mod.rs

//! Ethereum Virtual Machine (EVM) Chain Support
//!
//! - **Address Encoding**: uncompressed public key → `0x` address via [`EvmAddress`].
//! - **Utilities**: EIP-55 checksum, validation, comparison.
//! - **Signing**: message, typed-data and transaction signing are not implemented yet.

pub mod address;

// Re-exports for cleaner API access
pub use address::EvmAddress;

use crate::error::{WalletError, WalletResult};

pub fn sign_message(_message: &[u8], _private_key: &[u8]) -> WalletResult<Vec<u8>> {
    Err(WalletError::NotImplemented("evm message signing"))
}

pub fn sign_typed_data(_typed_data: &str, _private_key: &[u8]) -> WalletResult<Vec<u8>> {
    Err(WalletError::NotImplemented("evm typed data signing"))
}

pub fn sign_transaction(_transaction: &[u8], _private_key: &[u8]) -> WalletResult<Vec<u8>> {
    Err(WalletError::NotImplemented("evm transaction signing"))
}
