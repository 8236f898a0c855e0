//! The WIF private key record and its layout codec.
//!
//! Layout, in order: 1-byte network version, 32-byte secret, an optional
//! `0x01` marker present iff the derived pubkey is compressed, and a
//! 4-byte checksum over everything before it. 37 bytes total
//! uncompressed, 38 compressed.

use std::fmt;

use rand::{CryptoRng, RngCore};

use coinkit_core::enc::{append_checksum, decode_base58, encode_base58, verify_checksum};

use crate::{
    curve::Secp256k1Provider, nets::Network, pubkey::PublicKey, KeyError, KeyResult,
};

/// Layout length without the compression marker.
const UNCOMPRESSED_LEN: usize = 37;
/// Layout length with the compression marker.
const COMPRESSED_LEN: usize = 38;
/// The compression marker byte.
const COMPRESSION_MARKER: u8 = 0x01;

/// A private key record: network, 32-byte secret scalar, and whether the
/// derived public key uses the compressed encoding. Immutable once
/// constructed; every accessor returns an independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    network: Network,
    secret: [u8; 32],
    compressed: bool,
}

impl PrivateKey {
    /// Construct from an explicit (network, secret, compressed) tuple.
    /// The secret is taken as-is; whether it is a valid curve scalar is
    /// the provider's concern at use time.
    pub fn new(network: Network, secret: [u8; 32], compressed: bool) -> Self {
        Self {
            network,
            secret,
            compressed,
        }
    }

    /// Construct from a fresh 32-byte secret drawn from the caller's
    /// cryptographically secure RNG. This codec never generates
    /// randomness itself.
    pub fn from_rng<R: RngCore + CryptoRng>(
        network: Network,
        compressed: bool,
        rng: &mut R,
    ) -> Self {
        let mut secret = [0u8; 32];
        rng.fill_bytes(&mut secret);
        Self::new(network, secret, compressed)
    }

    /// Parse the raw WIF layout.
    pub fn from_bytes(data: &[u8]) -> KeyResult<Self> {
        let compressed = match data.len() {
            UNCOMPRESSED_LEN => false,
            COMPRESSED_LEN => true,
            _ => return Err(KeyError::BadFormat),
        };

        if compressed && data[COMPRESSED_LEN - 5] != COMPRESSION_MARKER {
            return Err(KeyError::BadFormat);
        }

        let body = verify_checksum(data).map_err(|e| {
            tracing::warn!(len = data.len(), "WIF payload failed checksum");
            e
        })?;
        let network = Network::from_wif_version(body[0])?;

        let mut secret = [0u8; 32];
        secret.copy_from_slice(&body[1..33]);

        Ok(Self {
            network,
            secret,
            compressed,
        })
    }

    /// Parse the raw WIF layout from a hex string.
    pub fn from_hex(s: &str) -> KeyResult<Self> {
        Self::from_bytes(&hex::decode(s)?)
    }

    /// Parse a base-58 WIF string.
    pub fn from_wif(s: &str) -> KeyResult<Self> {
        Self::from_bytes(&decode_base58(s)?)
    }

    /// The network this key belongs to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// A copy of the 32-byte secret scalar.
    pub fn secret(&self) -> [u8; 32] {
        self.secret
    }

    /// Whether the derived public key uses the compressed encoding.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// The full checksummed binary layout.
    pub fn layout(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(COMPRESSED_LEN);
        body.push(self.network.wif_version());
        body.extend_from_slice(&self.secret);
        if self.compressed {
            body.push(COMPRESSION_MARKER);
        }
        append_checksum(&body)
    }

    /// The layout as raw bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.layout()
    }

    /// The layout as a hex string.
    pub fn hex(&self) -> String {
        hex::encode(self.layout())
    }

    /// The layout as a base-58 WIF string.
    pub fn wif(&self) -> String {
        encode_base58(&self.layout())
    }

    /// Derive the public key through the curve provider, honoring this
    /// record's compression flag.
    pub fn derive_pubkey<P: Secp256k1Provider>(&self, provider: &P) -> KeyResult<PublicKey> {
        Ok(PublicKey::new(
            provider.create_pubkey(&self.secret, self.compressed)?,
        ))
    }

    /// Sign a 32-byte digest through the curve provider, returning DER
    /// signature bytes.
    pub fn sign<P: Secp256k1Provider>(
        &self,
        provider: &P,
        digest: &[u8; 32],
    ) -> KeyResult<Vec<u8>> {
        provider.sign(&self.secret, digest)
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}
