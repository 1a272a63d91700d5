// wallet-keys/src/chains/bitcoin/address.rs
//
// Bitcoin Address Module
//
// ┌──────────────┬────────────────────────────────────────────┐
// │ P2PKH        │ Base58Check(p2pkh_version ‖ hash160(pk))   │
// │ P2WPKH       │ Bech32(hrp, [0] ‖ base32(hash160(pk)))     │
// │ P2SH-P2WPKH  │ Base58Check(p2sh_version ‖ hash160(        │
// │              │   0x00 0x14 ‖ hash160(pk)))                │
// └──────────────┴────────────────────────────────────────────┘

use crate::chains::AddressType;
use crate::config::BitcoinParams;
use crate::crypto::hash::hash160;
use crate::error::{CryptoError, WalletError, WalletResult};
use bech32::{u5, ToBase32, Variant};
use tracing::trace;
use zeroize::Zeroizing;

pub struct BitcoinAddress;

impl BitcoinAddress {
    /// Mainnet address for a 33-byte compressed public key
    pub fn from_public_key(public_key: &[u8], address_type: AddressType) -> WalletResult<String> {
        Self::from_public_key_with_params(public_key, address_type, &BitcoinParams::mainnet())
    }

    pub fn from_public_key_with_params(
        public_key: &[u8],
        address_type: AddressType,
        params: &BitcoinParams,
    ) -> WalletResult<String> {
        if public_key.len() != 33 {
            return Err(WalletError::Crypto(CryptoError::InvalidPublicKey(format!(
                "expected 33 byte compressed key, got {} bytes",
                public_key.len()
            ))));
        }

        let key_hash = hash160(public_key);
        trace!(address_type = %address_type, "encoding bitcoin address");
        match address_type {
            AddressType::P2pkh => Ok(base58_check(params.p2pkh_version, &key_hash)),
            AddressType::P2wpkh => segwit_v0(&params.bech32_hrp, &key_hash),
            AddressType::P2shP2wpkh => {
                let mut redeem_script = [0u8; 22];
                redeem_script[0] = 0x00;
                redeem_script[1] = 0x14;
                redeem_script[2..].copy_from_slice(&key_hash);
                Ok(base58_check(params.p2sh_version, &hash160(&redeem_script)))
            }
        }
    }

    /// Compressed WIF: Base58Check(wif_version ‖ key ‖ 0x01)
    pub fn export_private_key(private_key: &[u8; 32]) -> String {
        Self::export_private_key_with_params(private_key, &BitcoinParams::mainnet())
    }

    pub fn export_private_key_with_params(private_key: &[u8; 32], params: &BitcoinParams) -> String {
        let mut payload = Zeroizing::new([0u8; 34]);
        payload[0] = params.wif_version;
        payload[1..33].copy_from_slice(private_key);
        payload[33] = 0x01;
        bs58::encode(&payload[..]).with_check().into_string()
    }
}

fn base58_check(version: u8, hash: &[u8; 20]) -> String {
    let mut payload = [0u8; 21];
    payload[0] = version;
    payload[1..].copy_from_slice(hash);
    bs58::encode(payload).with_check().into_string()
}

fn segwit_v0(hrp: &str, program: &[u8; 20]) -> WalletResult<String> {
    let bech32_error =
        |e: bech32::Error| WalletError::Validation(format!("bech32 encoding failed: {}", e));

    let mut data = vec![u5::try_from_u8(0).map_err(bech32_error)?];
    data.extend(program.to_base32());
    bech32::encode(hrp, data, Variant::Bech32).map_err(bech32_error)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PUBKEY_1: &str = "0214aa3a21f733978af468af3801e6eac13473037173b119181018943e67d650b7";
    const TEST_PUBKEY_2: &str = "02b413ea43751961dd76d2171e92dad41a72fdf96f3d9f01763a2b38a8e8382512";
    const TEST_PUBKEY_3: &str = "023fb3d8f5751371e9cf3a1e92be143ddd4b0bb71f14b12515902a04e299b95291";

    fn encode(pubkey: &str, address_type: AddressType) -> String {
        BitcoinAddress::from_public_key(&hex::decode(pubkey).unwrap(), address_type).unwrap()
    }

    fn encode_testnet(pubkey: &str, address_type: AddressType) -> String {
        BitcoinAddress::from_public_key_with_params(
            &hex::decode(pubkey).unwrap(),
            address_type,
            &BitcoinParams::testnet(),
        )
        .unwrap()
    }

    #[test]
    fn test_p2pkh() {
        assert_eq!(
            encode(TEST_PUBKEY_1, AddressType::P2pkh),
            "13Rqm5AyPqs3KhpGYWACNfeYtq8D4Ak63e"
        );
        assert_eq!(
            encode(TEST_PUBKEY_2, AddressType::P2pkh),
            "1PvSuRvaqBPnzKg39qCGzPVXKx6CHFZ29H"
        );
    }

    #[test]
    fn test_p2wpkh() {
        assert_eq!(
            encode(TEST_PUBKEY_1, AddressType::P2wpkh),
            "bc1qr23wlag8q5k2hcd5q9vhxyctddmclt2rsue87l"
        );
        assert_eq!(
            encode(TEST_PUBKEY_2, AddressType::P2wpkh),
            "bc1qldhxlnen3xqyw25k3vtcrjne2gph5anm4mptl9"
        );
    }

    #[test]
    fn test_p2sh_p2wpkh() {
        assert_eq!(
            encode(TEST_PUBKEY_1, AddressType::P2shP2wpkh),
            "3AVT852THuqPN7nubTdUpLuLLYdGCR34zL"
        );
        assert_eq!(
            encode(TEST_PUBKEY_2, AddressType::P2shP2wpkh),
            "38pVaiGCcX5ccWhyPjTsibCXx2MCb1TPDq"
        );
        assert_eq!(
            encode(TEST_PUBKEY_3, AddressType::P2shP2wpkh),
            "3CMGKR3hepw4CsrxEunQh351jYvwhRCUkX"
        );
    }

    #[test]
    fn test_testnet_params() {
        assert_eq!(
            encode_testnet(TEST_PUBKEY_1, AddressType::P2wpkh),
            "tb1qr23wlag8q5k2hcd5q9vhxyctddmclt2r66z59v"
        );
        assert_eq!(
            encode_testnet(TEST_PUBKEY_2, AddressType::P2wpkh),
            "tb1qldhxlnen3xqyw25k3vtcrjne2gph5anmla6cyk"
        );
        assert_eq!(
            encode_testnet(TEST_PUBKEY_2, AddressType::P2pkh),
            "n4SQCV1ZeCq3mS9esQAepJhrBwguFTvuYU"
        );
        assert_eq!(
            encode_testnet(TEST_PUBKEY_2, AddressType::P2shP2wpkh),
            "2MzNheTCEDyaxpJLX4s5kLYBoANZNTByZTs"
        );
    }

    #[test]
    fn test_rejects_uncompressed_key() {
        for len in [0usize, 32, 64, 65] {
            let result = BitcoinAddress::from_public_key(&vec![2u8; len], AddressType::P2pkh);
            assert!(matches!(
                result,
                Err(WalletError::Crypto(CryptoError::InvalidPublicKey(_)))
            ));
        }
    }

    #[test]
    fn test_export_private_key() {
        let key: [u8; 32] = hex::decode(
            "0200780e6fbfd9f0da695764a627f7fb1ac3f97d11844682bbcd0fb8f1fa6e4a",
        )
        .unwrap()
        .try_into()
        .unwrap();
        assert_eq!(
            BitcoinAddress::export_private_key(&key),
            "KwHbszP8MiLRCuq7D1yT7sDKxFnS4X2nzUDEWayBh3KzTSBgAChH"
        );
        assert_eq!(
            BitcoinAddress::export_private_key_with_params(&key, &BitcoinParams::testnet()),
            "cMebLuNynn2gNMJNbRnaVBiPaV5qiy8V4WMhd1RhC9yziBLoANty"
        );
    }
}
