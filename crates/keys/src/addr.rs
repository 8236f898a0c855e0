//! The Base58Check address record and codec.
//!
//! Layout: 1-byte version, 20-byte hash160, 4-byte checksum; 25 bytes
//! total, rendered through base-58.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use coinkit_core::enc::{append_checksum, decode_base58, encode_base58, verify_checksum};
use coinkit_core::hashes::Hash160Digest;

use crate::{
    nets::{address_version, parse_address_version, AddressKind, Network},
    pubkey::PublicKey,
    KeyError, KeyResult,
};

/// Decoded address layout length: version, hash160, checksum.
const LAYOUT_LEN: usize = 25;

/// An address record: kind, network, and the 20-byte hash it pays to.
/// The version byte is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    kind: AddressKind,
    network: Network,
    hash: Hash160Digest,
}

impl Address {
    /// Construct from parts.
    pub fn new(kind: AddressKind, network: Network, hash: Hash160Digest) -> Self {
        Self {
            kind,
            network,
            hash,
        }
    }

    /// The pay-to-pubkey-hash address of a public key: hash160 of its
    /// raw bytes under the P2PKH version byte.
    pub fn p2pkh(network: Network, pubkey: &PublicKey) -> Self {
        Self::new(AddressKind::P2pkh, network, pubkey.address_id())
    }

    /// Decode a base-58 address string.
    pub fn decode(s: &str) -> KeyResult<Self> {
        let data = decode_base58(s)?;
        if data.len() != LAYOUT_LEN {
            return Err(KeyError::BadFormat);
        }
        let body = verify_checksum(&data)?;
        let (kind, network) = parse_address_version(body[0])?;

        let mut hash = [0u8; 20];
        hash.copy_from_slice(&body[1..]);
        Ok(Self::new(kind, network, hash))
    }

    /// The address kind.
    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    /// The network this address belongs to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// A copy of the 20-byte hash.
    pub fn hash160(&self) -> Hash160Digest {
        self.hash
    }

    /// The version byte, a pure function of (kind, network).
    pub fn version_byte(&self) -> u8 {
        address_version(self.kind, self.network)
    }

    /// The full checksummed binary layout.
    pub fn layout(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(LAYOUT_LEN);
        body.push(self.version_byte());
        body.extend_from_slice(&self.hash);
        append_checksum(&body)
    }

    /// The base-58 text form.
    pub fn encode(&self) -> String {
        encode_base58(&self.layout())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Address {
    type Err = KeyError;

    fn from_str(s: &str) -> KeyResult<Self> {
        Self::decode(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::decode(&s).map_err(de::Error::custom)
    }
}
