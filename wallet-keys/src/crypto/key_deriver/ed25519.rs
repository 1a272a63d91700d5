// wallet-keys/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation - SLIP-0010
//
// Used by: Solana, Aptos, Sui
// Algorithm: HMAC-SHA512, hardened-only child derivation
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// SLIP-0010 only defines hardened derivation for ed25519, so every index in
// the path is forced hardened:
//   m/44'/60'/0'/0/5  ≡  m/44'/60'/0'/0'/5'

use crate::crypto::curve::{Ed25519Curve, KeyPair};
use crate::crypto::paths::{ChildIndex, DerivationPath};
use crate::error::{CryptoError, WalletError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// SLIP-0010 master key seed constant
const MASTER_SECRET: &[u8] = b"ed25519 seed";

/// Ed25519 extended private key (key + chain code)
///
/// # Differences from secp256k1 (BIP-32)
/// - Master key seed: "ed25519 seed" (instead of "Bitcoin seed")
/// - Hardened derivation only, no extended public key
/// - No key range check (any 32 bytes is an ed25519 key)
#[derive(Clone)]
pub struct Ed25519ExtendedKey {
    private_key: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
    depth: u8,
    child_number: u32,
}

impl std::fmt::Debug for Ed25519ExtendedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519ExtendedKey")
            .field("depth", &self.depth)
            .field("child_number", &self.child_number)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl Ed25519ExtendedKey {
    /// Master key
    ///
    /// I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
    /// IL (32 bytes) = private key
    /// IR (32 bytes) = chain code
    pub fn from_seed(seed: &[u8]) -> WalletResult<Self> {
        let (private_key, chain_code) = hmac_split(MASTER_SECRET, &[seed])?;
        Ok(Self {
            private_key,
            chain_code,
            depth: 0,
            child_number: 0,
        })
    }

    /// Child key, always hardened.
    ///
    /// Data = 0x00 || parent_key || ser32(index | 0x80000000)
    /// I = HMAC-SHA512(Key = parent_chain_code, Data = Data)
    pub fn derive_child(&self, index: ChildIndex) -> WalletResult<Self> {
        let hardened_index = ChildIndex {
            hardened: true,
            ..index
        }
        .raw();
        let (private_key, chain_code) = hmac_split(
            &*self.chain_code,
            &[&[0x00u8], &*self.private_key, &hardened_index.to_be_bytes()],
        )?;

        let depth = self.depth.checked_add(1).ok_or_else(|| {
            WalletError::Crypto(CryptoError::DerivationFailed(
                "maximum derivation depth exceeded".to_string(),
            ))
        })?;

        Ok(Self {
            private_key,
            chain_code,
            depth,
            child_number: hardened_index,
        })
    }

    pub fn derive_path(&self, path: &DerivationPath) -> WalletResult<Self> {
        let mut key = self.clone();
        for segment in path.segments() {
            key = key.derive_child(*segment)?;
        }
        Ok(key)
    }

    #[inline]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    #[inline]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Raw child number, hardened bit included
    #[inline]
    pub fn child_number(&self) -> u32 {
        self.child_number
    }

    pub fn key_pair(&self) -> KeyPair {
        Ed25519Curve::pair_from_secret(self.private_key.clone())
    }
}

fn hmac_split(
    key: &[u8],
    data: &[&[u8]],
) -> WalletResult<(Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>)> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|e| {
        WalletError::Crypto(CryptoError::DerivationFailed(format!(
            "HMAC init failed: {}",
            e
        )))
    })?;
    for part in data {
        mac.update(part);
    }
    let result = mac.finalize().into_bytes();

    // Copy into stack buffer we fully control, then zeroize
    let mut buf = [0u8; 64];
    buf.copy_from_slice(&result);

    let mut left = Zeroizing::new([0u8; 32]);
    let mut right = Zeroizing::new([0u8; 32]);
    left.copy_from_slice(&buf[..32]);
    right.copy_from_slice(&buf[32..]);

    buf.zeroize();
    Ok((left, right))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::HARDENED_OFFSET;
    use std::str::FromStr;

    const TEST_SEED: &str = "2bbed6cfb9fa866227b0d421db6f7d09c03cfd4e02eb26b796b63005db37ea0cfe91884db5d57f09efbea9bbf00c7e4e1f62f1dcafd0fb58a3b2c9a6db0e979b";

    // SLIP-0010 test vector 1
    const SLIP10_SEED: &str = "000102030405060708090a0b0c0d0e0f";

    fn derive(seed_hex: &str, path: &str) -> Ed25519ExtendedKey {
        let seed = hex::decode(seed_hex).unwrap();
        Ed25519ExtendedKey::from_seed(&seed)
            .unwrap()
            .derive_path(&DerivationPath::from_str(path).unwrap())
            .unwrap()
    }

    #[test]
    fn test_slip10_master_vector() {
        let master = derive(SLIP10_SEED, "m");
        assert_eq!(
            hex::encode(master.private_key()),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
        assert_eq!(
            hex::encode(master.chain_code()),
            "90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"
        );
        assert_eq!(master.depth(), 0);
    }

    #[test]
    fn test_slip10_child_vector() {
        let child = derive(SLIP10_SEED, "m/0'");
        assert_eq!(
            hex::encode(child.private_key()),
            "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
        );
        assert_eq!(
            hex::encode(child.key_pair().public_key()),
            "8c8a13df77a28f3445213a0f432fde644acaa215fc72dcdf300d5efaa85d350c"
        );
        assert_eq!(child.depth(), 1);
        assert_eq!(child.child_number(), HARDENED_OFFSET);
    }

    #[test]
    fn test_aptos_path_vector() {
        let key = derive(TEST_SEED, "m/44'/637'/0'/0'/5'");
        assert_eq!(
            hex::encode(key.private_key()),
            "087ee9e7dd9f09524596d991583205afc39d47540a7ae53062c4635010d97744"
        );
    }

    #[test]
    fn test_non_hardened_segments_are_forced_hardened() {
        let forced = derive(TEST_SEED, "m/44'/60'/0'/0/5");
        let explicit = derive(TEST_SEED, "m/44'/60'/0'/0'/5'");
        assert_eq!(forced.private_key(), explicit.private_key());
        assert_eq!(
            hex::encode(forced.private_key()),
            "fa5097c778348974b681b2908f302b96a969069c61c71465f3b6a256f6340ab3"
        );
    }

    #[test]
    fn test_consistency() {
        let k1 = derive(TEST_SEED, "m/44'/501'/0'/0'");
        let k2 = derive(TEST_SEED, "m/44'/501'/0'/0'");
        assert_eq!(k1.private_key(), k2.private_key());

        let other = derive(TEST_SEED, "m/44'/501'/1'/0'");
        assert_ne!(k1.private_key(), other.private_key());
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = derive(TEST_SEED, "m/44'/501'/0'/0'");
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(&hex::encode(key.private_key())));
    }
}
