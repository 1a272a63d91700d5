// wallet-keys/src/chains/tron/address.rs
//
// Tron Address Module
// EVM 20-byte hash → 0x41 prefix → Base58Check
//
//   pubkey ─► Keccak256[12..] ─► 41 ‖ hash20 ─► ‖ sha256d[..4] ─► Base58

use crate::chains::evm::EvmAddress;
use crate::config::TronParams;
use crate::error::{AddressError, WalletError, WalletResult};
use tracing::trace;

pub struct TronAddress;

impl TronAddress {
    /// Base58 `T...` address from a 64/65-byte uncompressed public key
    pub fn from_public_key(public_key: &[u8]) -> WalletResult<String> {
        Self::from_public_key_with_params(public_key, &TronParams::default())
    }

    pub fn from_public_key_with_params(
        public_key: &[u8],
        params: &TronParams,
    ) -> WalletResult<String> {
        let hash = EvmAddress::address_bytes(public_key)?;
        trace!("encoded tron address");
        Ok(encode(&hash, params.address_prefix))
    }

    /// `0x`-prefixed 20-byte hex → Base58 Tron address
    pub fn from_hex(hex_address: &str) -> WalletResult<String> {
        Self::from_hex_with_params(hex_address, &TronParams::default())
    }

    pub fn from_hex_with_params(hex_address: &str, params: &TronParams) -> WalletResult<String> {
        let body = hex_address
            .strip_prefix("0x")
            .or_else(|| hex_address.strip_prefix("0X"))
            .unwrap_or(hex_address);

        let mut hash = [0u8; 20];
        hex::decode_to_slice(body, &mut hash).map_err(|e| {
            decode_error(format!("expected 20 bytes of hex, got '{}': {}", hex_address, e))
        })?;
        Ok(encode(&hash, params.address_prefix))
    }

    /// Base58 → `0x` + hex of the 20-byte hash.
    ///
    /// Neither the checksum nor the version byte is verified; use
    /// [`TronAddress::to_hex_checked`] for that.
    pub fn to_hex(address: &str) -> WalletResult<String> {
        let bytes = bs58::decode(address.trim())
            .into_vec()
            .map_err(|e| decode_error(format!("invalid base58: {}", e)))?;
        if bytes.len() < 21 {
            return Err(decode_error(format!(
                "decoded address too short: {} bytes",
                bytes.len()
            )));
        }
        Ok(format!("0x{}", hex::encode(&bytes[1..21])))
    }

    /// Like [`TronAddress::to_hex`] but verifies checksum, version and length.
    pub fn to_hex_checked(address: &str) -> WalletResult<String> {
        Self::to_hex_checked_with_params(address, &TronParams::default())
    }

    pub fn to_hex_checked_with_params(address: &str, params: &TronParams) -> WalletResult<String> {
        let bytes = bs58::decode(address.trim())
            .with_check(Some(params.address_prefix))
            .into_vec()
            .map_err(|e| decode_error(format!("invalid base58check: {}", e)))?;
        if bytes.len() != 21 {
            return Err(decode_error(format!(
                "expected 21 byte payload, got {}",
                bytes.len()
            )));
        }
        Ok(format!("0x{}", hex::encode(&bytes[1..])))
    }

    pub fn is_valid(address: &str) -> bool {
        Self::to_hex_checked(address).is_ok()
    }

    /// Private key export: bare hex, no prefix
    pub fn export_private_key(private_key: &[u8; 32]) -> String {
        hex::encode(private_key)
    }
}

fn encode(hash: &[u8; 20], prefix: u8) -> String {
    let mut payload = [0u8; 21];
    payload[0] = prefix;
    payload[1..].copy_from_slice(hash);
    bs58::encode(payload).with_check().into_string()
}

fn decode_error(msg: String) -> WalletError {
    WalletError::Address(AddressError::Decode(msg))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_UNCOMPRESSED: &str = "048446d75100b646e1c96d72400d4eed961176cfa939451de8204a2562553923248ea663bebeea6f423a875253a383c036d324f5dee0ed2df0332797abd7e25db4";
    const TEST_HEX: &str = "0xd3a13dfc223cb67c8f1882f1fa17ea9daa776959";
    const TEST_ADDRESS: &str = "TVGCjqNEHhu2WHk5YS48r4A5x3tfEzKGac";

    #[test]
    fn test_from_public_key() {
        let public_key = hex::decode(TEST_UNCOMPRESSED).unwrap();
        assert_eq!(TronAddress::from_public_key(&public_key).unwrap(), TEST_ADDRESS);
        assert_eq!(
            TronAddress::from_public_key(&public_key[1..]).unwrap(),
            TEST_ADDRESS
        );
    }

    #[test]
    fn test_from_public_key_rejects_compressed() {
        assert!(TronAddress::from_public_key(&[2u8; 33]).is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(TronAddress::from_hex(TEST_HEX).unwrap(), TEST_ADDRESS);
        assert_eq!(TronAddress::to_hex(TEST_ADDRESS).unwrap(), TEST_HEX);
        assert_eq!(TronAddress::to_hex_checked(TEST_ADDRESS).unwrap(), TEST_HEX);

        let other = "0x0000000000000000000000000000000000000001";
        let tron = TronAddress::from_hex(other).unwrap();
        assert!(tron.starts_with('T'));
        assert_eq!(TronAddress::to_hex(&tron).unwrap(), other);
    }

    #[test]
    fn test_from_hex_without_prefix() {
        assert_eq!(
            TronAddress::from_hex(&TEST_HEX[2..]).unwrap(),
            TEST_ADDRESS
        );
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(TronAddress::from_hex("0x1234").is_err());
        assert!(TronAddress::from_hex("0xzz").is_err());
    }

    #[test]
    fn test_to_hex_ignores_checksum() {
        // last character altered: checksum no longer matches
        let tampered = "TVGCjqNEHhu2WHk5YS48r4A5x3tfEzKGab";
        assert_eq!(TronAddress::to_hex(tampered).unwrap(), TEST_HEX);
        assert!(matches!(
            TronAddress::to_hex_checked(tampered),
            Err(WalletError::Address(AddressError::Decode(_)))
        ));
        assert!(!TronAddress::is_valid(tampered));
        assert!(TronAddress::is_valid(TEST_ADDRESS));
    }

    #[test]
    fn test_to_hex_rejects_bad_base58() {
        // '0' and 'l' are outside the base58 alphabet
        assert!(TronAddress::to_hex("T0l").is_err());
        assert!(TronAddress::to_hex("T1").is_err());
    }

    #[test]
    fn test_export_private_key() {
        assert_eq!(TronAddress::export_private_key(&[0xab; 32]), "ab".repeat(32));
    }
}
