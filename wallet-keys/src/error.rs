use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Address Error: {0}")]
    Address(#[from] AddressError),

    /// Operation exists in the public surface but has no implementation yet.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Validation Error: {0}")]
    Validation(String),
}

impl WalletError {
    /// `true` when the failure means "not available for this curve/chain"
    /// rather than "the input was bad".
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            WalletError::NotImplemented(_)
                | WalletError::Crypto(CryptoError::UnsupportedOperation(_))
                | WalletError::Address(AddressError::UnsupportedAddressType(_))
        )
    }
}

impl From<::config::ConfigError> for WalletError {
    fn from(e: ::config::ConfigError) -> Self {
        WalletError::Config(e.to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word at position {0} not found in the BIP39 wordlist.")]
    UnknownWord(usize),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

impl From<bip39::Error> for MnemonicError {
    fn from(e: bip39::Error) -> Self {
        match e {
            bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
            bip39::Error::UnknownWord(index) => MnemonicError::UnknownWord(index),
            bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
            other => MnemonicError::Bip39Error(other.to_string()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Unsupported address type: {0}")]
    UnsupportedAddressType(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_classification() {
        assert!(WalletError::NotImplemented("sui address").is_unsupported());
        assert!(WalletError::Crypto(CryptoError::UnsupportedOperation("x".into())).is_unsupported());
        assert!(
            WalletError::Address(AddressError::UnsupportedAddressType("P2TR".into()))
                .is_unsupported()
        );

        assert!(!WalletError::Crypto(CryptoError::InvalidPath("x".into())).is_unsupported());
        assert!(!WalletError::Address(AddressError::Decode("x".into())).is_unsupported());
    }

    #[test]
    fn test_bip39_error_mapping() {
        assert_eq!(
            MnemonicError::from(bip39::Error::BadWordCount(3)),
            MnemonicError::InvalidWordCount(3)
        );
        assert_eq!(
            MnemonicError::from(bip39::Error::InvalidChecksum),
            MnemonicError::ChecksumFailed
        );
    }
}
