// wallet-keys/src/chains/evm/address.rs
//
// EVM Address Module - public key → address, EIP-55 checksum utilities
// Keccak-256, secp256k1 uncompressed points

use crate::crypto::hash::keccak256;
use crate::error::{AddressError, CryptoError, WalletError, WalletResult};
use tracing::trace;

/// EVM Address Encoder
///
/// # Flow:  Public Key (64B raw or 65B with 0x04) → Keccak256 → Address (20B)
pub struct EvmAddress;

impl EvmAddress {
    // =========================================================================
    // CORE: Public Key → Address Bytes (20 bytes)
    // =========================================================================

    /// # Algorithm (Ethereum Yellow Paper)
    /// 1. `pub_key` 65B → drop the `0x04` prefix → `pub_key_raw` (64B); 64B is used as is
    /// 2. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 3. `hash[12..32]` → `address` (20B)
    pub fn address_bytes(public_key: &[u8]) -> WalletResult<[u8; 20]> {
        let raw = match public_key.len() {
            65 => &public_key[1..],
            64 => public_key,
            other => {
                return Err(WalletError::Crypto(CryptoError::InvalidPublicKey(format!(
                    "expected 64 or 65 byte uncompressed key, got {} bytes",
                    other
                ))))
            }
        };

        let hash = keccak256(raw);
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        Ok(address)
    }

    /// Lowercase `0x`-prefixed address
    ///
    /// # Returns
    /// `"0xd3a13dfc223cb67c8f1882f1fa17ea9daa776959"`
    pub fn from_public_key(public_key: &[u8]) -> WalletResult<String> {
        let bytes = Self::address_bytes(public_key)?;
        trace!("encoded evm address");
        Ok(format!("0x{}", hex::encode(bytes)))
    }

    /// Private key export: `0x` + hex
    pub fn export_private_key(private_key: &[u8; 32]) -> String {
        format!("0x{}", hex::encode(private_key))
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// Whether `address` is a well-formed Ethereum address
    ///
    /// Checks: `0x` prefix + 40 hex chars + EIP-55 checksum (when mixed case)
    pub fn is_valid(address: &str) -> bool {
        let Ok(bytes) = Self::parse(address) else {
            return false;
        };
        let body = &address[2..];
        let all_lower = !body.bytes().any(|b| b.is_ascii_uppercase());
        let all_upper = !body.bytes().any(|b| b.is_ascii_lowercase());
        all_lower || all_upper || Self::checksum_bytes(&bytes) == address
    }

    /// Normalize to EIP-55 checksum format
    ///
    /// `"0xabcd..."` → `"0xAbCd..."` (mixed case per checksum)
    pub fn to_checksum(address: &str) -> WalletResult<String> {
        Ok(Self::checksum_bytes(&Self::parse(address)?))
    }

    /// Compare two addresses (case-insensitive)
    pub fn equals(addr1: &str, addr2: &str) -> bool {
        match (Self::parse(addr1), Self::parse(addr2)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    fn parse(address: &str) -> WalletResult<[u8; 20]> {
        let body = address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .ok_or_else(|| decode_error("missing 0x prefix"))?;
        if body.len() != 40 {
            return Err(decode_error("expected 40 hex characters"));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(body, &mut bytes).map_err(|e| decode_error(&e.to_string()))?;
        Ok(bytes)
    }

    fn checksum_bytes(bytes: &[u8; 20]) -> String {
        let lower = hex::encode(bytes);
        let hash = keccak256(lower.as_bytes());

        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

fn decode_error(msg: &str) -> WalletError {
    WalletError::Address(AddressError::Decode(format!(
        "Invalid Ethereum address: {}",
        msg
    )))
}

// =============================================================================
// TESTS
// =============================================================================
