// wallet-keys/src/config.rs
//
// Network parameters for the address encoders.
// Defaults are mainnet; a file or the environment can override them.

use crate::error::WalletResult;
use ::config::{Config, Environment, File};
use serde::Deserialize;

/// Bitcoin version bytes and Bech32 prefix
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BitcoinParams {
    pub p2pkh_version: u8,
    pub p2sh_version: u8,
    pub bech32_hrp: String,
    pub wif_version: u8,
}

impl Default for BitcoinParams {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl BitcoinParams {
    pub fn mainnet() -> Self {
        Self {
            p2pkh_version: 0x00,
            p2sh_version: 0x05,
            bech32_hrp: "bc".to_string(),
            wif_version: 0x80,
        }
    }

    pub fn testnet() -> Self {
        Self {
            p2pkh_version: 0x6f,
            p2sh_version: 0xc4,
            bech32_hrp: "tb".to_string(),
            wif_version: 0xef,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TronParams {
    pub address_prefix: u8,
}

impl Default for TronParams {
    fn default() -> Self {
        Self {
            address_prefix: 0x41,
        }
    }
}

/// Root engine configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    pub bitcoin: BitcoinParams,
    pub tron: TronParams,
}

impl EngineConfig {
    pub fn testnet() -> Self {
        Self {
            bitcoin: BitcoinParams::testnet(),
            tron: TronParams::default(),
        }
    }

    /// Load configuration from files and environment variables
    pub fn load() -> WalletResult<Self> {
        let config = Config::builder()
            .add_source(File::with_name("config/wallet-keys").required(false))
            // e.g., WALLET_KEYS_BITCOIN__BECH32_HRP=tb
            .add_source(
                Environment::with_prefix("WALLET_KEYS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
