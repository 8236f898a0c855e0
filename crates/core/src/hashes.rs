//! Bitcoin-style digest wrappers: `hash256` (double-sha2) and `hash160`
//! (`ripemd160(sha2(x))`), the compact key/script identifier.

use digest::Digest;
use ripemd::Ripemd160;
use sha2::Sha256;

/// The output of Bitcoin's double-sha2.
pub type Hash256Digest = [u8; 32];

/// The output of `ripemd160(sha2(x))`.
pub type Hash160Digest = [u8; 20];

/// Hash data with two applications of sha2-256.
pub fn hash256(preimage: &[u8]) -> Hash256Digest {
    Sha256::digest(Sha256::digest(preimage)).into()
}

/// Hash data with sha2-256, then ripemd160.
pub fn hash160(preimage: &[u8]) -> Hash160Digest {
    Ripemd160::digest(Sha256::digest(preimage)).into()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_computes_hash256_vectors() {
        let cases: &[(&[u8], &str)] = &[
            (
                &[],
                "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456",
            ),
            (
                &[0x00],
                "1406e05881e299367766d313e26c05564ec91bf721d31726bd6e46e60689539a",
            ),
        ];
        for (preimage, expected) in cases {
            assert_eq!(hex::encode(hash256(preimage)), *expected);
        }
    }

    #[test]
    fn it_computes_the_hash160_of_an_uncompressed_pubkey() {
        let pubkey = hex::decode(
            "0450863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352\
             2cd470243453a299fa9e77237716103abc11a1df38855ed6f2ee187e9c582ba6",
        )
        .unwrap();
        assert_eq!(
            hex::encode(hash160(&pubkey)),
            "010966776006953d5567439e5e39f86a0d273bee"
        );
    }
}
