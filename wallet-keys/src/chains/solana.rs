// wallet-keys/src/chains/solana.rs
//
// Solana: the address is the Base58 ed25519 public key itself.

use crate::crypto::curve::Ed25519Curve;
use crate::error::{CryptoError, WalletError, WalletResult};
use zeroize::Zeroizing;

pub struct SolanaAddress;

impl SolanaAddress {
    pub fn from_public_key(public_key: &[u8]) -> WalletResult<String> {
        if public_key.len() != 32 {
            return Err(WalletError::Crypto(CryptoError::InvalidPublicKey(format!(
                "expected 32 byte ed25519 key, got {} bytes",
                public_key.len()
            ))));
        }
        Ok(bs58::encode(public_key).into_string())
    }

    /// Base58 of the 64-byte `secret ‖ public` keypair, the format wallets import.
    pub fn export_private_key(private_key: &[u8; 32]) -> String {
        let pair = Ed25519Curve::pair_from_secret(Zeroizing::new(*private_key));
        let mut keypair = Zeroizing::new([0u8; 64]);
        keypair[..32].copy_from_slice(private_key);
        keypair[32..].copy_from_slice(pair.public_key());
        bs58::encode(&keypair[..]).into_string()
    }
}

pub fn sign_transaction(_transaction: &[u8], _private_key: &[u8]) -> WalletResult<Vec<u8>> {
    Err(WalletError::NotImplemented("solana transaction signing"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_public_key() {
        let public_key =
            hex::decode("e98b0f6403f4695d73525734c4806e763d4209da32337cef10a7d337e3a4e8e4").unwrap();
        assert_eq!(
            SolanaAddress::from_public_key(&public_key).unwrap(),
            "GieynY44ruznz3JgRte2PsbA3oV24TLJGtAKMjbMXwRm"
        );
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(SolanaAddress::from_public_key(&[1u8; 33]).is_err());
    }

    #[test]
    fn test_export_private_key() {
        let key: [u8; 32] = hex::decode(
            "25836c9c445aa98a16ea4dfcbc9229634c123841c36a7c6c3247aa72fdb9cc39",
        )
        .unwrap()
        .try_into()
        .unwrap();
        assert_eq!(
            SolanaAddress::export_private_key(&key),
            "kW3SuswccnXVaxU9muMj9AFHSqg71qfpesyJqNKMNReAHiNwtuWnQPvJ8p6YoS9JiGnVDLWY75DukxBX3T1CgDy"
        );
    }

    #[test]
    fn test_sign_transaction_not_implemented() {
        assert!(sign_transaction(&[], &[0u8; 32]).unwrap_err().is_unsupported());
    }
}
