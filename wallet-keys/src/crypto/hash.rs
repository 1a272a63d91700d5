// wallet-keys/src/crypto/hash.rs
//
// Hash helpers shared by the address encoders.
// SHA-256, double SHA-256, HASH160 (SHA-256 → RIPEMD-160), Keccak-256, SHA3-256, MD5

use md5::Md5;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use sha3::Sha3_256;
use tiny_keccak::{Hasher, Keccak};

#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256(SHA-256(data)), used for Base58Check checksums
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD-160(SHA-256(data))
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// Keccak-256 (the pre-NIST variant Ethereum uses, not SHA3-256)
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut hash = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut hash);
    hash
}

/// NIST SHA3-256, used by Aptos authentication keys
#[inline]
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    Sha3_256::digest(data).into()
}

#[inline]
pub fn md5(data: &[u8]) -> [u8; 16] {
    Md5::digest(data).into()
}
