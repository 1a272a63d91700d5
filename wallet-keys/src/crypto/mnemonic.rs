// wallet-keys/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 phrases and seed derivation
// Standards: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation)

use crate::crypto::hash;
use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Supported phrase lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }
}

/// BIP-39 mnemonic wrapper
///
/// # Security
/// - **ZeroizeOnDrop**: the phrase is wiped when the struct is dropped
/// - **CSPRNG**: fresh phrases draw entropy from `OsRng`
/// - **No Debug Leak**: custom Debug never shows the phrase
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

// Custom Debug - never prints the phrase
impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// New random 12-word mnemonic (128-bit entropy)
    pub fn new() -> WalletResult<Self> {
        Self::with_word_count(WordCount::Twelve)
    }

    /// New random 24-word mnemonic (256-bit entropy)
    pub fn new_24_words() -> WalletResult<Self> {
        Self::with_word_count(WordCount::TwentyFour)
    }

    pub fn with_word_count(word_count: WordCount) -> WalletResult<Self> {
        let entropy_size = word_count.entropy_bytes();

        // Stack-allocated entropy buffer (max 32 bytes)
        let mut entropy = [0u8; 32];
        OsRng.fill_bytes(&mut entropy[..entropy_size]);

        let result = Self::from_entropy(&entropy[..entropy_size]);
        entropy.zeroize();
        result
    }

    /// Deterministic phrase from a passphrase.
    ///
    /// The trimmed passphrase is hashed and the digest used directly as entropy:
    /// SHA-256 for 24 words, MD5 for 12 words. Anyone who knows the passphrase
    /// can rebuild the phrase, so this is only as strong as the passphrase.
    pub fn from_passphrase(passphrase: &str, word_count: WordCount) -> WalletResult<Self> {
        let trimmed = passphrase.trim();
        match word_count {
            WordCount::TwentyFour => {
                let mut entropy = hash::sha256(trimmed.as_bytes());
                let result = Self::from_entropy(&entropy);
                entropy.zeroize();
                result
            }
            WordCount::Twelve => {
                let mut entropy = hash::md5(trimmed.as_bytes());
                let result = Self::from_entropy(&entropy);
                entropy.zeroize();
                result
            }
            other => Err(WalletError::Validation(format!(
                "passphrase mnemonics support 12 or 24 words, got {}",
                other as usize
            ))),
        }
    }

    fn from_entropy(entropy: &[u8]) -> WalletResult<Self> {
        let mnemonic = Mnemonic::from_entropy(entropy)
            .map_err(|e| WalletError::Mnemonic(MnemonicError::from(e)))?;
        let phrase = mnemonic.to_string();
        let word_count = phrase.split_whitespace().count();
        Ok(Self { phrase, word_count })
    }

    /// Restore from an existing phrase
    ///
    /// # Validation
    /// - word count (12, 15, 18, 21, 24)
    /// - every word in the English wordlist
    /// - checksum
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let normalized = phrase.split_whitespace().collect::<Vec<_>>();
        let count = normalized.len();

        if !matches!(count, 12 | 15 | 18 | 21 | 24) {
            return Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(
                count,
            )));
        }

        let normalized_phrase = normalized.join(" ");
        Mnemonic::parse_in_normalized(Language::English, &normalized_phrase)
            .map_err(|e| WalletError::Mnemonic(MnemonicError::from(e)))?;

        Ok(Self {
            phrase: normalized_phrase,
            word_count: count,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The phrase itself. Never log this.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// 64-byte BIP-39 seed (PBKDF2-HMAC-SHA512, 2048 rounds)
    ///
    /// # Arguments
    /// * `passphrase` - Optional BIP-39 passphrase ("25th word")
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Zeroizing<[u8; 64]>> {
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, &self.phrase)
            .map_err(|e| WalletError::Mnemonic(MnemonicError::from(e)))?;
        Ok(Zeroizing::new(mnemonic.to_seed(passphrase.unwrap_or(""))))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Full validation: word count, wordlist, checksum
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }

    pub fn is_valid_word(word: &str) -> bool {
        Language::English.word_list().contains(&word)
    }

    pub fn strength_bits(&self) -> usize {
        match self.word_count {
            12 => 128,
            15 => 160,
            18 => 192,
            21 => 224,
            24 => 256,
            _ => 0,
        }
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
