// wallet-keys/src/chains/bitcoin/mod.rs

//! Bitcoin Chain Support
//!
//! Legacy, native segwit and wrapped segwit addresses from compressed keys,
//! plus WIF export. Network parameters come from [`crate::config::BitcoinParams`].

pub mod address;

pub use address::BitcoinAddress;

use crate::error::{WalletError, WalletResult};

pub fn sign_transaction(_transaction: &[u8], _private_key: &[u8]) -> WalletResult<Vec<u8>> {
    Err(WalletError::NotImplemented("bitcoin transaction signing"))
}
