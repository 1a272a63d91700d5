// wallet-keys/src/chains/tron/mod.rs

//! Tron Chain Support
//!
//! Addresses share the EVM keccak hash; only the `0x41` prefix and Base58Check
//! framing differ. See [`TronAddress`].

pub mod address;

pub use address::TronAddress;

use crate::error::{WalletError, WalletResult};

pub fn sign_message(_message: &[u8], _private_key: &[u8]) -> WalletResult<Vec<u8>> {
    Err(WalletError::NotImplemented("tron message signing"))
}

pub fn sign_typed_data(_typed_data: &str, _private_key: &[u8]) -> WalletResult<Vec<u8>> {
    Err(WalletError::NotImplemented("tron typed data signing"))
}

pub fn sign_transaction(_transaction: &[u8], _private_key: &[u8]) -> WalletResult<Vec<u8>> {
    Err(WalletError::NotImplemented("tron transaction signing"))
}
