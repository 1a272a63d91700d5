// wallet-keys/src/chains/mod.rs
//
// Chain dispatch: public key → address, private key → export string

pub mod aptos;
pub mod bitcoin;
pub mod evm;
pub mod solana;
pub mod sui;
pub mod tron;

use crate::config::EngineConfig;
use crate::crypto::curve::CurveType;
use crate::error::{AddressError, WalletError, WalletResult};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use aptos::AptosAddress;
use bitcoin::BitcoinAddress;
use evm::EvmAddress;
use solana::SolanaAddress;
use sui::SuiAddress;
use tron::TronAddress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    Ethereum,
    Tron,
    Bitcoin,
    Aptos,
    Solana,
    Sui,
}

impl Chain {
    /// Curve whose public keys this chain encodes
    pub fn curve(self) -> CurveType {
        match self {
            Chain::Ethereum | Chain::Tron | Chain::Bitcoin => CurveType::Secp256k1,
            Chain::Aptos | Chain::Solana | Chain::Sui => CurveType::Ed25519,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Chain::Ethereum => "ETH",
            Chain::Tron => "TRX",
            Chain::Bitcoin => "BTC",
            Chain::Aptos => "APT",
            Chain::Solana => "SOL",
            Chain::Sui => "SUI",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Bitcoin script type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// Legacy, `1...`
    P2pkh,
    /// Native segwit, `bc1q...`
    P2wpkh,
    /// Wrapped segwit, `3...`
    P2shP2wpkh,
}

impl AddressType {
    pub fn as_str(self) -> &'static str {
        match self {
            AddressType::P2pkh => "P2PKH",
            AddressType::P2wpkh => "P2WPKH",
            AddressType::P2shP2wpkh => "P2SH-P2WPKH",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressType {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P2PKH" => Ok(AddressType::P2pkh),
            "P2WPKH" => Ok(AddressType::P2wpkh),
            "P2SH-P2WPKH" => Ok(AddressType::P2shP2wpkh),
            other => Err(WalletError::Address(AddressError::UnsupportedAddressType(
                other.to_string(),
            ))),
        }
    }
}

/// Address for `public_key` on `chain`, mainnet parameters.
///
/// Bitcoin requires an `address_type`; other chains ignore it.
pub fn to_chain_address(
    public_key: &[u8],
    chain: Chain,
    address_type: Option<AddressType>,
) -> WalletResult<String> {
    to_chain_address_with_config(public_key, chain, address_type, &EngineConfig::default())
}

pub fn to_chain_address_with_config(
    public_key: &[u8],
    chain: Chain,
    address_type: Option<AddressType>,
    config: &EngineConfig,
) -> WalletResult<String> {
    debug!(chain = %chain, address_type = ?address_type, "encoding address");
    match chain {
        Chain::Ethereum => EvmAddress::from_public_key(public_key),
        Chain::Tron => TronAddress::from_public_key_with_params(public_key, &config.tron),
        Chain::Bitcoin => {
            let address_type = address_type.ok_or_else(|| {
                WalletError::Address(AddressError::UnsupportedAddressType(
                    "bitcoin needs an address type".to_string(),
                ))
            })?;
            BitcoinAddress::from_public_key_with_params(public_key, address_type, &config.bitcoin)
        }
        Chain::Solana => SolanaAddress::from_public_key(public_key),
        Chain::Aptos => AptosAddress::from_public_key(public_key),
        Chain::Sui => SuiAddress::from_public_key(public_key),
    }
}

/// Tron Base58 address → `0x` hex. Does not verify the checksum.
pub fn chain_address_to_hex(address: &str) -> WalletResult<String> {
    TronAddress::to_hex(address)
}

/// Chain-native private key export (WIF for Bitcoin)
pub fn export_private_key(chain: Chain, private_key: &[u8; 32]) -> WalletResult<String> {
    export_private_key_with_config(chain, private_key, &EngineConfig::default())
}

pub fn export_private_key_with_config(
    chain: Chain,
    private_key: &[u8; 32],
    config: &EngineConfig,
) -> WalletResult<String> {
    match chain {
        Chain::Bitcoin => Ok(BitcoinAddress::export_private_key_with_params(
            private_key,
            &config.bitcoin,
        )),
        Chain::Ethereum => Ok(EvmAddress::export_private_key(private_key)),
        Chain::Tron => Ok(TronAddress::export_private_key(private_key)),
        Chain::Aptos => Ok(AptosAddress::export_private_key(private_key)),
        Chain::Solana => Ok(SolanaAddress::export_private_key(private_key)),
        Chain::Sui => Err(WalletError::NotImplemented("sui private key export")),
    }
}

// =============================================================================
// TESTS
// =============================================================================
