// wallet-keys/src/crypto/curve/ed25519.rs
//
// Ed25519 provider - EdDSA signatures + X25519 key agreement
//
// Each key pair carries two public keys computed from the same 32-byte secret:
//   - ed25519 public key  (signing / addresses)
//   - x25519 public key   (Diffie-Hellman, clamped secret as Montgomery scalar)
// shared_secret() expects the peer's x25519 key, never the edwards one.

use super::{to_key_bytes, unsupported, CurveProvider, CurveType, KeyPair};
use crate::error::{CryptoError, WalletError, WalletResult};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::Zeroizing;

pub const SIGNATURE_LEN: usize = 64;

pub struct Ed25519Curve;

impl Ed25519Curve {
    pub(crate) fn pair_from_secret(secret: Zeroizing<[u8; 32]>) -> KeyPair {
        let signing_key = SigningKey::from_bytes(&secret);
        let public_key = signing_key.verifying_key().to_bytes().to_vec();
        let x25519_public = X25519PublicKey::from(&StaticSecret::from(*secret)).to_bytes();
        KeyPair::new(CurveType::Ed25519, secret, public_key, Some(x25519_public))
    }

    fn public_key_array(public_key: &[u8]) -> WalletResult<[u8; 32]> {
        public_key.try_into().map_err(|_| {
            WalletError::Crypto(CryptoError::InvalidPublicKey(format!(
                "expected 32 bytes, got {}",
                public_key.len()
            )))
        })
    }
}

impl CurveProvider for Ed25519Curve {
    fn curve(&self) -> CurveType {
        CurveType::Ed25519
    }

    fn generate_key_pair(&self) -> KeyPair {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self::pair_from_secret(Zeroizing::new(signing_key.to_bytes()))
    }

    /// Any 32 bytes are a valid ed25519 seed; only the length is checked.
    fn key_pair_from_private_key(&self, private_key: &[u8]) -> WalletResult<KeyPair> {
        Ok(Self::pair_from_secret(to_key_bytes(private_key)?))
    }

    fn shared_secret(
        &self,
        public_key: &[u8],
        private_key: &[u8],
    ) -> WalletResult<Zeroizing<[u8; 32]>> {
        let secret = StaticSecret::from(*to_key_bytes(private_key)?);
        let peer = X25519PublicKey::from(Self::public_key_array(public_key)?);
        let shared = secret.diffie_hellman(&peer);

        if !shared.was_contributory() {
            return Err(WalletError::Crypto(CryptoError::InvalidPublicKey(
                "x25519 public key is a low-order point".to_string(),
            )));
        }
        Ok(Zeroizing::new(shared.to_bytes()))
    }

    fn sign(&self, message: &[u8], private_key: &[u8]) -> WalletResult<Vec<u8>> {
        let signing_key = SigningKey::from_bytes(&*to_key_bytes(private_key)?);
        Ok(signing_key.sign(message).to_bytes().to_vec())
    }

    fn verify(&self, signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
        let Ok(signature) = Signature::from_slice(signature) else {
            return false;
        };
        let Ok(bytes) = <[u8; 32]>::try_from(public_key) else {
            return false;
        };
        let Ok(verifying_key) = VerifyingKey::from_bytes(&bytes) else {
            return false;
        };
        verifying_key.verify(message, &signature).is_ok()
    }

    fn recover_public_key(&self, _signature: &[u8], _message: &[u8]) -> WalletResult<Vec<u8>> {
        Err(unsupported(CurveType::Ed25519, "public key recovery"))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PRIV_1: &str = "b0e8fa753a15a585cc7e30344dfd991573090c5420482ccacecf563fa232574d";
    const X25519_PUB_1: &str = "0ef787b7ee988c70942ec09ba4eb581189b9bfcd68f024ac017c1b26fbcbb800";
    const PRIV_2: &str = "5867827f79e90946b4c1f82e73f5d620263b46d7f8892bf9957a68c52de9629a";
    const PUB_2: &str = "93f88d7bf7f9ef21084c09e2f7b4b6d932091fa3f7d8441979b4278f8715bf4d";
    const X25519_PUB_2: &str = "7c8e59b961002282a0059df2eb9e7830031d5ff74e6ce058d31644668130c30c";

    #[test]
    fn test_generate_key_pair() {
        let pair = Ed25519Curve.generate_key_pair();
        assert_eq!(pair.public_key().len(), 32);
        assert!(pair.x25519_public_key().is_some());

        let rebuilt = Ed25519Curve
            .key_pair_from_private_key(pair.private_key())
            .unwrap();
        assert_eq!(rebuilt.public_key(), pair.public_key());
        assert_eq!(rebuilt.x25519_public_key(), pair.x25519_public_key());
    }

    #[test]
    fn test_key_pair_from_private_key() {
        let pair = Ed25519Curve
            .key_pair_from_private_key(&hex::decode(PRIV_2).unwrap())
            .unwrap();
        assert_eq!(hex::encode(pair.public_key()), PUB_2);
        assert_eq!(hex::encode(pair.x25519_public_key().unwrap()), X25519_PUB_2);
    }

    #[test]
    fn test_invalid_private_key_length() {
        assert!(matches!(
            Ed25519Curve.key_pair_from_private_key(&[7u8; 33]),
            Err(WalletError::Crypto(CryptoError::InvalidPrivateKey(_)))
        ));
    }

    #[test]
    fn test_shared_secret_vector() {
        let s1 = Ed25519Curve
            .shared_secret(
                &hex::decode(X25519_PUB_2).unwrap(),
                &hex::decode(PRIV_1).unwrap(),
            )
            .unwrap();
        let s2 = Ed25519Curve
            .shared_secret(
                &hex::decode(X25519_PUB_1).unwrap(),
                &hex::decode(PRIV_2).unwrap(),
            )
            .unwrap();
        assert_eq!(*s1, *s2);
        assert_eq!(
            hex::encode(*s1),
            "32c6ac454e216d07a3a7767334acfb278769a7d7b572cd0639b71041ee736220"
        );
    }

    #[test]
    fn test_shared_secret_random_pairs() {
        let a = Ed25519Curve.generate_key_pair();
        let b = Ed25519Curve.generate_key_pair();
        let s1 = Ed25519Curve
            .shared_secret(b.x25519_public_key().unwrap(), a.private_key())
            .unwrap();
        let s2 = Ed25519Curve
            .shared_secret(a.x25519_public_key().unwrap(), b.private_key())
            .unwrap();
        assert_eq!(*s1, *s2);
    }

    #[test]
    fn test_shared_secret_rejects_low_order_point() {
        let priv1 = hex::decode(PRIV_1).unwrap();
        assert!(Ed25519Curve.shared_secret(&[0u8; 32], &priv1).is_err());
        assert!(Ed25519Curve.shared_secret(&[9u8; 31], &priv1).is_err());
    }

    #[test]
    fn test_sign_verify() {
        let message = [1u8; 32];
        let priv2 = hex::decode(PRIV_2).unwrap();
        let pub2 = hex::decode(PUB_2).unwrap();

        let signature = Ed25519Curve.sign(&message, &priv2).unwrap();
        assert_eq!(signature.len(), SIGNATURE_LEN);
        assert!(Ed25519Curve.verify(&signature, &message, &pub2));
    }

    #[test]
    fn test_verify_rejects_tampering() {
        let message = b"arbitrary length message".to_vec();
        let pair = Ed25519Curve.generate_key_pair();
        let signature = Ed25519Curve.sign(&message, pair.private_key()).unwrap();
        assert!(Ed25519Curve.verify(&signature, &message, pair.public_key()));

        let mut bad_message = message.clone();
        bad_message[3] ^= 0x01;
        assert!(!Ed25519Curve.verify(&signature, &bad_message, pair.public_key()));

        let mut bad_sig = signature.clone();
        bad_sig[0] ^= 0x01;
        assert!(!Ed25519Curve.verify(&bad_sig, &message, pair.public_key()));

        assert!(!Ed25519Curve.verify(&signature[..63], &message, pair.public_key()));
        assert!(!Ed25519Curve.verify(&signature, &message, &[1u8; 16]));
    }

    #[test]
    fn test_recover_unsupported() {
        let result = Ed25519Curve.recover_public_key(&[0u8; 64], &[1u8; 32]);
        assert!(matches!(
            result,
            Err(WalletError::Crypto(CryptoError::UnsupportedOperation(_)))
        ));
    }
}
