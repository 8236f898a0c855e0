//! A [`Secp256k1Provider`] backed by the pure-Rust `k256` crate.

use k256::{
    ecdsa::{
        signature::hazmat::{PrehashSigner, PrehashVerifier},
        Signature, SigningKey, VerifyingKey,
    },
    elliptic_curve::sec1::ToEncodedPoint,
    PublicKey as ParsedPubkey, SecretKey,
};

use crate::{curve::Secp256k1Provider, KeyError, KeyResult};

/// A provider handle over `k256`. The pure-Rust backend carries no
/// library context, so the handle is trivially cheap; it exists so the
/// hosting application constructs one provider and passes it by
/// reference, matching backends that do own context state.
#[derive(Debug, Default, Clone, Copy)]
pub struct K256Provider;

impl K256Provider {
    /// Construct a provider handle.
    pub fn new() -> Self {
        Self
    }
}

impl Secp256k1Provider for K256Provider {
    type Pubkey = ParsedPubkey;

    fn create_pubkey(&self, secret: &[u8; 32], compressed: bool) -> KeyResult<Vec<u8>> {
        let key = SecretKey::from_slice(secret)?;
        let point = key.public_key().to_encoded_point(compressed);
        Ok(point.as_bytes().to_vec())
    }

    fn parse_pubkey(&self, raw: &[u8]) -> KeyResult<Self::Pubkey> {
        ParsedPubkey::from_sec1_bytes(raw).map_err(|_| {
            tracing::debug!(len = raw.len(), "sec1 pubkey parse failed");
            KeyError::ParseFailed
        })
    }

    fn sign(&self, secret: &[u8; 32], digest: &[u8; 32]) -> KeyResult<Vec<u8>> {
        let key = SigningKey::from_slice(secret)?;
        let sig: Signature = key.sign_prehash(digest)?;
        Ok(sig.to_der().as_bytes().to_vec())
    }

    fn verify(&self, raw_pubkey: &[u8], digest: &[u8; 32], der_sig: &[u8]) -> bool {
        let Ok(key) = VerifyingKey::from_sec1_bytes(raw_pubkey) else {
            return false;
        };
        let Ok(sig) = Signature::from_der(der_sig) else {
            return false;
        };
        key.verify_prehash(digest, &sig).is_ok()
    }

    fn check_low_s(&self, der_sig: &[u8]) -> bool {
        match Signature::from_der(der_sig) {
            Ok(sig) => sig.normalize_s().is_none(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn secret(n: u8) -> [u8; 32] {
        let mut s = [0u8; 32];
        s[31] = n;
        s
    }

    #[test]
    fn it_derives_the_generator_from_secret_one() {
        let provider = K256Provider::new();
        assert_eq!(
            hex::encode(provider.create_pubkey(&secret(1), false).unwrap()),
            "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
             483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        );
        assert_eq!(
            hex::encode(provider.create_pubkey(&secret(1), true).unwrap()),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn it_rejects_out_of_range_secrets() {
        let provider = K256Provider::new();
        assert!(provider.create_pubkey(&[0u8; 32], true).is_err());
    }

    #[test]
    fn it_rejects_malformed_pubkey_bytes() {
        let provider = K256Provider::new();
        for raw in [&[][..], &[0x05; 33][..], &[0x02; 12][..]] {
            assert!(matches!(
                provider.parse_pubkey(raw),
                Err(KeyError::ParseFailed)
            ));
        }
    }

    #[test]
    fn signatures_are_deterministic_and_verify() {
        let provider = K256Provider::new();
        let digest = coinkit_core::hashes::hash256(b"message");
        let sig = provider.sign(&secret(1), &digest).unwrap();
        assert_eq!(sig, provider.sign(&secret(1), &digest).unwrap());
        assert!(provider.check_low_s(&sig));

        let pubkey = provider.create_pubkey(&secret(1), true).unwrap();
        assert!(provider.verify(&pubkey, &digest, &sig));

        let mut wrong = digest;
        wrong[0] ^= 0x01;
        assert!(!provider.verify(&pubkey, &wrong, &sig));
        assert!(!provider.verify(&pubkey, &digest, &[0x30, 0x00]));
    }
}
