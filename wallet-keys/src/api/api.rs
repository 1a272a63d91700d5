// wallet-keys/src/api/api.rs
//
// Stable public surface: free functions over the curve providers,
// the derivation engine and the chain encoders.

use crate::chains::{self, tron::TronAddress, AddressType, Chain};
use crate::config::EngineConfig;
use crate::crypto::curve::{unsupported, CurveType, KeyPair};
use crate::crypto::key_deriver::{Derived, ExtendedKey, KeyDeriver};
use crate::crypto::mnemonic::{WalletMnemonic, WordCount};
use crate::crypto::paths::DerivationPath;
use crate::error::WalletResult;
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zeroize::Zeroizing;

// --- Initialization ---

/// Install a fmt subscriber filtered by `RUST_LOG` (default `wallet_keys=info`).
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_logging() {
    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wallet_keys=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if installed {
        info!("wallet-keys v{} logging initialized", env!("CARGO_PKG_VERSION"));
    }
}

// --- Mnemonic ---

/// Fresh random phrase: 24 words for `24`, 12 words for anything else.
pub fn generate_mnemonic(word_count: usize) -> WalletResult<String> {
    let mnemonic = if word_count == 24 {
        WalletMnemonic::new_24_words()?
    } else {
        WalletMnemonic::new()?
    };
    Ok(mnemonic.phrase().to_string())
}

/// Deterministic phrase from a passphrase: SHA-256 entropy for `24`,
/// MD5 entropy (12 words) for anything else.
pub fn mnemonic_from_passphrase(passphrase: &str, word_count: usize) -> WalletResult<String> {
    let count = if word_count == 24 {
        WordCount::TwentyFour
    } else {
        WordCount::Twelve
    };
    let mnemonic = WalletMnemonic::from_passphrase(passphrase, count)?;
    Ok(mnemonic.phrase().to_string())
}

pub fn mnemonic_to_seed(phrase: &str) -> WalletResult<Zeroizing<[u8; 64]>> {
    WalletMnemonic::from_phrase(phrase)?.to_seed(None)
}

pub fn validate_mnemonic(phrase: &str) -> bool {
    WalletMnemonic::validate(phrase)
}

// --- Curve operations ---

pub fn generate_key_pair(curve: CurveType) -> KeyPair {
    curve.provider().generate_key_pair()
}

pub fn key_pair_from_private_key(curve: CurveType, private_key: &[u8]) -> WalletResult<KeyPair> {
    curve.provider().key_pair_from_private_key(private_key)
}

pub fn shared_secret(
    curve: CurveType,
    public_key: &[u8],
    private_key: &[u8],
) -> WalletResult<Zeroizing<[u8; 32]>> {
    curve.provider().shared_secret(public_key, private_key)
}

pub fn sign(curve: CurveType, message: &[u8], private_key: &[u8]) -> WalletResult<Vec<u8>> {
    curve.provider().sign(message, private_key)
}

pub fn verify(curve: CurveType, signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
    curve.provider().verify(signature, message, public_key)
}

pub fn recover_public_key(
    curve: CurveType,
    signature: &[u8],
    message: &[u8],
) -> WalletResult<Vec<u8>> {
    curve.provider().recover_public_key(signature, message)
}

// --- HD keys ---

/// Root node from a mnemonic, or a public node from an `xpub` string.
///
/// Text containing whitespace is read as a mnemonic. Anything else is an
/// extended public key, which only secp256k1 supports.
pub fn hd_key_from_seed_or_xpub(curve: CurveType, source: &str) -> WalletResult<ExtendedKey> {
    let source = source.trim();
    if source.contains(char::is_whitespace) {
        debug!(curve = curve.name(), "hd key from mnemonic");
        let seed = mnemonic_to_seed(source)?;
        return ExtendedKey::from_seed(curve, &*seed);
    }

    debug!(curve = curve.name(), "hd key from extended key");
    match curve {
        CurveType::Secp256k1 => ExtendedKey::from_extended_str(source),
        CurveType::Ed25519 => Err(unsupported(curve, "extended public key import")),
    }
}

pub fn derive_from_seed(curve: CurveType, mnemonic: &str, path: &str) -> WalletResult<KeyPair> {
    let path = DerivationPath::from_str(path)?;
    let seed = mnemonic_to_seed(mnemonic)?;
    debug!(curve = curve.name(), path = %path, "derive from seed");
    KeyDeriver::derive(&*seed, &path, curve)
}

/// Key pair for private nodes, public key only for `xpub` nodes.
pub fn derive_from_extended_key(key: &ExtendedKey, path: &str) -> WalletResult<Derived> {
    let path = DerivationPath::from_str(path)?;
    key.derive(&path)?.to_derived()
}

/// `xpub...` of the secp256k1 node at `path`
pub fn extended_public_key_for_path(mnemonic: &str, path: &str) -> WalletResult<String> {
    let path = DerivationPath::from_str(path)?;
    let seed = mnemonic_to_seed(mnemonic)?;
    ExtendedKey::from_seed(CurveType::Secp256k1, &*seed)?
        .derive(&path)?
        .to_xpub()
}

// --- Addresses ---

pub fn to_chain_address(
    public_key: &[u8],
    chain: Chain,
    address_type: Option<AddressType>,
) -> WalletResult<String> {
    chains::to_chain_address(public_key, chain, address_type)
}

/// Same as [`to_chain_address`], with network parameters from `config`
/// (e.g. `EngineConfig::load()?` or `EngineConfig::testnet()`).
pub fn to_chain_address_with_config(
    public_key: &[u8],
    chain: Chain,
    address_type: Option<AddressType>,
    config: &EngineConfig,
) -> WalletResult<String> {
    chains::to_chain_address_with_config(public_key, chain, address_type, config)
}

/// Tron Base58 → `0x` hex, without checksum verification
pub fn chain_address_to_hex(address: &str) -> WalletResult<String> {
    chains::chain_address_to_hex(address)
}

pub fn tron_address_to_hex_checked(address: &str) -> WalletResult<String> {
    TronAddress::to_hex_checked(address)
}

pub fn hex_to_tron_address(hex_address: &str) -> WalletResult<String> {
    TronAddress::from_hex(hex_address)
}

pub fn export_private_key(chain: Chain, private_key: &[u8; 32]) -> WalletResult<String> {
    chains::export_private_key(chain, private_key)
}

pub fn export_private_key_with_config(
    chain: Chain,
    private_key: &[u8; 32],
    config: &EngineConfig,
) -> WalletResult<String> {
    chains::export_private_key_with_config(chain, private_key, config)
}

// =============================================================================
// TESTS
// =============================================================================
