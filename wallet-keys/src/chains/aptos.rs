// wallet-keys/src/chains/aptos.rs
//
// Aptos: the account address is the single-key ed25519 authentication key,
// SHA3-256(public_key ‖ 0x00).

use crate::crypto::hash::sha3_256;
use crate::error::{CryptoError, WalletError, WalletResult};

/// Authentication scheme byte for a single ed25519 signer
const ED25519_SCHEME: u8 = 0x00;

pub struct AptosAddress;

impl AptosAddress {
    /// `0x` + 64 hex chars
    pub fn from_public_key(public_key: &[u8]) -> WalletResult<String> {
        if public_key.len() != 32 {
            return Err(WalletError::Crypto(CryptoError::InvalidPublicKey(format!(
                "expected 32 byte ed25519 key, got {} bytes",
                public_key.len()
            ))));
        }

        let mut preimage = [0u8; 33];
        preimage[..32].copy_from_slice(public_key);
        preimage[32] = ED25519_SCHEME;
        Ok(format!("0x{}", hex::encode(sha3_256(&preimage))))
    }

    /// `0x` + hex
    pub fn export_private_key(private_key: &[u8; 32]) -> String {
        format!("0x{}", hex::encode(private_key))
    }
}

pub fn sign_transaction(_transaction: &[u8], _private_key: &[u8]) -> WalletResult<Vec<u8>> {
    Err(WalletError::NotImplemented("aptos transaction signing"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PUBLIC_KEY: &str = "34c8584768a39ee2c6e4b3cdd8f20e2db811385ca9c076d58dcb99fc32927c6b";

    #[test]
    fn test_address_vector() {
        let public_key = hex::decode(TEST_PUBLIC_KEY).unwrap();
        assert_eq!(
            AptosAddress::from_public_key(&public_key).unwrap(),
            "0xa547c5e4f85513bd6f35199e20cf0f9217816d56781d69a8d72aed79482a7713"
        );
    }

    #[test]
    fn test_address_rejects_wrong_length() {
        for len in [0usize, 31, 33] {
            assert!(matches!(
                AptosAddress::from_public_key(&vec![1u8; len]),
                Err(WalletError::Crypto(CryptoError::InvalidPublicKey(_)))
            ));
        }
    }

    #[test]
    fn test_export_private_key() {
        let key: [u8; 32] = hex::decode(
            "8a3b96eb2b13515cc005d6aa21014ff97388eda07c34df8c47fe2c2e389514dc",
        )
        .unwrap()
        .try_into()
        .unwrap();
        assert_eq!(
            AptosAddress::export_private_key(&key),
            "0x8a3b96eb2b13515cc005d6aa21014ff97388eda07c34df8c47fe2c2e389514dc"
        );
    }
}
