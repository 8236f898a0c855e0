//! A format view over opaque SEC1 public key bytes.
//!
//! The view classifies bytes by their leading byte and length; it never
//! validates that the bytes name a real curve point. Validity belongs to
//! the curve provider.

use std::fmt;

use coinkit_core::hashes::{hash160, Hash160Digest};

use crate::{curve::Secp256k1Provider, KeyResult};

/// Length of a compressed SEC1 public key.
pub const COMPRESSED_LEN: usize = 33;
/// Length of an uncompressed SEC1 public key.
pub const UNCOMPRESSED_LEN: usize = 65;

/// Opaque public key bytes as produced by the curve provider. Immutable;
/// every byte-returning accessor hands back an independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    raw: Vec<u8>,
}

impl PublicKey {
    /// Wrap raw provider-produced bytes.
    pub fn new(raw: Vec<u8>) -> Self {
        Self { raw }
    }

    /// Wrap raw bytes given as hex.
    pub fn from_hex(s: &str) -> KeyResult<Self> {
        Ok(Self::new(hex::decode(s)?))
    }

    /// The length this key's leading byte declares: 33 for the
    /// compressed form, 65 for the uncompressed (or hybrid) forms, and 0
    /// for anything unrecognized. A declared length of 0 means the bytes
    /// are not a known key format, not that the key is empty; callers
    /// must treat it as invalid.
    pub fn declared_len(&self) -> usize {
        match self.raw.first().copied() {
            Some(0x02 | 0x03) => COMPRESSED_LEN,
            Some(0x04 | 0x06 | 0x07) => UNCOMPRESSED_LEN,
            _ => 0,
        }
    }

    /// Whether these bytes are a compressed public key. Computed from
    /// the observed length and leading byte on every call, so it can
    /// never desynchronize from the underlying bytes.
    pub fn is_compressed(&self) -> bool {
        self.raw.len() == COMPRESSED_LEN && matches!(self.raw[0], 0x02 | 0x03)
    }

    /// A copy of the raw SEC1 bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.raw.clone()
    }

    /// The raw bytes as a hex string.
    pub fn hex(&self) -> String {
        hex::encode(&self.raw)
    }

    /// The compact address identifier: `hash160` of the raw bytes.
    pub fn address_id(&self) -> Hash160Digest {
        hash160(&self.raw)
    }

    /// Verify a DER signature over a digest against this key, through
    /// the curve provider.
    pub fn verify<P: Secp256k1Provider>(
        &self,
        provider: &P,
        digest: &[u8; 32],
        der_sig: &[u8],
    ) -> bool {
        provider.verify(&self.raw, digest, der_sig)
    }

    /// Parse into the provider's opaque key handle, failing on bytes
    /// that don't name a curve point.
    pub fn parse<P: Secp256k1Provider>(&self, provider: &P) -> KeyResult<P::Pubkey> {
        provider.parse_pubkey(&self.raw)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}
