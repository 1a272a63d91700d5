// wallet-keys/src/crypto/paths.rs
//
// Derivation Paths Module - parser + multi-chain presets
// BIP-32 path syntax, BIP-44 (Purpose), SLIP-44 (Coin Types), BIP-84/49 (Bitcoin SegWit)

use crate::error::{CryptoError, WalletError, WalletResult};
use std::fmt;
use std::str::FromStr;

/// Offset added to an index by a hardened (`'`) segment.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

// =============================================================================
// PATH PARSER
// =============================================================================

/// One segment of a derivation path.
///
/// `index` is always the un-offset value (`< 2^31`); `hardened` carries the
/// offset separately so each curve can apply its own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildIndex {
    pub index: u32,
    pub hardened: bool,
}

impl ChildIndex {
    pub fn normal(index: u32) -> WalletResult<Self> {
        Self::new(index, false)
    }

    pub fn hardened(index: u32) -> WalletResult<Self> {
        Self::new(index, true)
    }

    pub fn new(index: u32, hardened: bool) -> WalletResult<Self> {
        if index >= HARDENED_OFFSET {
            return Err(invalid_path(format!("index {} out of range", index)));
        }
        Ok(Self { index, hardened })
    }

    /// The 32-bit value that goes into the HMAC input (`ser32(i)`).
    #[inline]
    pub fn raw(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

/// Parsed derivation path, e.g. `m/44'/60'/0'/0/5`.
///
/// The leading `m` is optional, so relative paths such as `0/5` (used when
/// deriving below an imported xpub) parse to the same segments as `m/0/5`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    segments: Vec<ChildIndex>,
}

impl DerivationPath {
    pub fn new(segments: Vec<ChildIndex>) -> Self {
        Self { segments }
    }

    #[inline]
    pub fn segments(&self) -> &[ChildIndex] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromStr for DerivationPath {
    type Err = WalletError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let path = path.trim();
        if path.is_empty() {
            return Err(invalid_path("empty derivation path"));
        }

        let mut parts = path.split('/').peekable();
        if matches!(parts.peek(), Some(&"m") | Some(&"M")) {
            parts.next();
        }

        let mut segments = Vec::new();
        for segment in parts {
            segments.push(parse_segment(segment)?);
        }

        Ok(Self { segments })
    }
}

fn parse_segment(segment: &str) -> WalletResult<ChildIndex> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Err(invalid_path("empty path segment"));
    }

    let (digits, hardened) = match segment.strip_suffix(|c| c == '\'' || c == 'h' || c == 'H') {
        Some(rest) => (rest, true),
        None => (segment, false),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_path(format!("invalid segment '{}'", segment)));
    }

    let index: u32 = digits
        .parse()
        .map_err(|e| invalid_path(format!("invalid index '{}': {}", digits, e)))?;

    ChildIndex::new(index, hardened)
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

fn invalid_path(msg: impl Into<String>) -> WalletError {
    WalletError::Crypto(CryptoError::InvalidPath(msg.into()))
}

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    // ---- secp256k1 chains ----
    pub const BITCOIN: u32 = 0;
    pub const ETHEREUM: u32 = 60;
    pub const TRON: u32 = 195;

    // ---- ed25519 chains ----
    pub const SOLANA: u32 = 501;
    pub const APTOS: u32 = 637;
    pub const SUI: u32 = 784;
}

// =============================================================================
// PRESETS
// =============================================================================
/// Pre-built derivation paths for the supported chains
///
/// # Conventions
/// - BIP-44: `m/44'/coin'/account'/change/index` (secp256k1)
/// - BIP-84: `m/84'/0'/account'/change/index` (Bitcoin Native SegWit)
/// - BIP-49: `m/49'/0'/account'/change/index` (Bitcoin Nested SegWit)
/// - SLIP-0010: `m/44'/coin'/account'/...'` (ed25519, all hardened)
pub struct DerivationPaths;

impl DerivationPaths {
    // EVM (coin type 60)
    pub const EVM_0: &'static str = "m/44'/60'/0'/0/0";

    #[inline]
    pub fn evm(index: u32) -> String {
        format!("m/44'/60'/0'/0/{}", index)
    }

    #[inline]
    pub fn evm_account(account: u32, index: u32) -> String {
        format!("m/44'/60'/{}'/0/{}", account, index)
    }

    // Bitcoin
    /// BIP-84: Native SegWit (bc1q...)
    pub const BTC_NATIVE_SEGWIT_0: &'static str = "m/84'/0'/0'/0/0";

    /// BIP-49: Nested SegWit (3...)
    pub const BTC_NESTED_SEGWIT_0: &'static str = "m/49'/0'/0'/0/0";

    /// BIP-44: Legacy (1...)
    pub const BTC_LEGACY_0: &'static str = "m/44'/0'/0'/0/0";

    #[inline]
    pub fn btc_native_segwit(account: u32, index: u32) -> String {
        format!("m/84'/0'/{}'/0/{}", account, index)
    }

    #[inline]
    pub fn btc_nested_segwit(account: u32, index: u32) -> String {
        format!("m/49'/0'/{}'/0/{}", account, index)
    }

    #[inline]
    pub fn btc_legacy(account: u32, index: u32) -> String {
        format!("m/44'/0'/{}'/0/{}", account, index)
    }

    // Tron (coin type 195)
    pub const TRON_0: &'static str = "m/44'/195'/0'/0/0";

    #[inline]
    pub fn tron(index: u32) -> String {
        format!("m/44'/195'/0'/0/{}", index)
    }

    // ed25519 chains
    pub const SOLANA_0: &'static str = "m/44'/501'/0'/0'";
    pub const APTOS_0: &'static str = "m/44'/637'/0'/0'/0'";
    pub const SUI_0: &'static str = "m/44'/784'/0'/0'/0'";

    #[inline]
    pub fn solana(account: u32) -> String {
        Self::ed25519_path(coin_type::SOLANA, account, &[0])
    }

    #[inline]
    pub fn aptos(account: u32, index: u32) -> String {
        Self::ed25519_path(coin_type::APTOS, account, &[0, index])
    }

    #[inline]
    pub fn sui(account: u32, index: u32) -> String {
        Self::ed25519_path(coin_type::SUI, account, &[0, index])
    }

    /// BIP-44 path for secp256k1 chains
    ///
    /// # Arguments
    /// * `purpose` - 44 (BIP-44), 49 (BIP-49), 84 (BIP-84)
    /// * `coin_type` - SLIP-44 coin type (see [`coin_type`])
    /// * `account` - Account index
    /// * `change` - 0 = external, 1 = internal
    /// * `index` - Address index
    #[inline]
    pub fn bip44(purpose: u32, coin_type: u32, account: u32, change: u32, index: u32) -> String {
        format!(
            "m/{}'/{}'/{}'/{}/{}",
            purpose, coin_type, account, change, index
        )
    }

    /// SLIP-0010 path for ed25519 chains, every level hardened
    ///
    /// - Solana: `ed25519_path(501, 0, &[0])` -> m/44'/501'/0'/0'
    /// - Aptos:  `ed25519_path(637, 0, &[0, 0])` -> m/44'/637'/0'/0'/0'
    pub fn ed25519_path(coin_type: u32, account: u32, sub_paths: &[u32]) -> String {
        let mut path = format!("m/44'/{}'/{}'", coin_type, account);
        for &idx in sub_paths {
            path.push_str(&format!("/{}'", idx));
        }
        path
    }
}

// =============================================================================
// TESTS
// =============================================================================
