// wallet-keys/src/chains/sui.rs

use crate::error::{WalletError, WalletResult};

pub struct SuiAddress;

impl SuiAddress {
    pub fn from_public_key(_public_key: &[u8]) -> WalletResult<String> {
        Err(WalletError::NotImplemented("sui address"))
    }
}

pub fn sign_transaction(_transaction: &[u8], _private_key: &[u8]) -> WalletResult<Vec<u8>> {
    Err(WalletError::NotImplemented("sui transaction signing"))
}
