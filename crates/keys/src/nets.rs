//! Network definitions and the version-byte tables. Version bytes are
//! pure functions of their inputs; the inverse lookups are the only
//! places a byte is mapped back to a domain value.

use serde::{Deserialize, Serialize};

use crate::{KeyError, KeyResult};

/// A Bitcoin-style network. Every encoded artifact carries its network
/// in its leading version byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// The production network.
    Main,
    /// The test network.
    Test,
}

impl Network {
    /// The WIF version byte for private keys on this network.
    pub const fn wif_version(self) -> u8 {
        match self {
            Network::Main => 0x80,
            Network::Test => 0xef,
        }
    }

    /// Inverse of [`Network::wif_version`]. Any unmapped byte is
    /// `BadNetwork`.
    pub fn from_wif_version(byte: u8) -> KeyResult<Self> {
        match byte {
            0x80 => Ok(Network::Main),
            0xef => Ok(Network::Test),
            other => Err(KeyError::BadNetwork(other)),
        }
    }
}

/// The supported address kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressKind {
    /// Pay to pubkey hash.
    P2pkh,
    /// Pay to script hash.
    P2sh,
}

/// The address version byte for a (kind, network) pair.
pub const fn address_version(kind: AddressKind, network: Network) -> u8 {
    match (kind, network) {
        (AddressKind::P2pkh, Network::Main) => 0x00,
        (AddressKind::P2pkh, Network::Test) => 0x6f,
        (AddressKind::P2sh, Network::Main) => 0x05,
        (AddressKind::P2sh, Network::Test) => 0xc4,
    }
}

/// Inverse of [`address_version`]. Any unmapped byte is `UnknownVersion`.
pub fn parse_address_version(byte: u8) -> KeyResult<(AddressKind, Network)> {
    match byte {
        0x00 => Ok((AddressKind::P2pkh, Network::Main)),
        0x6f => Ok((AddressKind::P2pkh, Network::Test)),
        0x05 => Ok((AddressKind::P2sh, Network::Main)),
        0xc4 => Ok((AddressKind::P2sh, Network::Test)),
        other => Err(KeyError::UnknownVersion(other)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wif_versions_round_trip() {
        for network in [Network::Main, Network::Test] {
            assert_eq!(
                Network::from_wif_version(network.wif_version()).unwrap(),
                network
            );
        }
        assert_eq!(Network::Main.wif_version(), 0x80);
        assert_eq!(Network::Test.wif_version(), 0xef);
    }

    #[test]
    fn the_alternate_testnet_byte_is_not_a_network() {
        // 0x81 shows up in the wild as a (wrong) testnet WIF version.
        assert!(matches!(
            Network::from_wif_version(0x81),
            Err(KeyError::BadNetwork(0x81))
        ));
    }

    #[test]
    fn address_versions_round_trip() {
        let cases = [
            (AddressKind::P2pkh, Network::Main, 0x00),
            (AddressKind::P2pkh, Network::Test, 0x6f),
            (AddressKind::P2sh, Network::Main, 0x05),
            (AddressKind::P2sh, Network::Test, 0xc4),
        ];
        for (kind, network, byte) in cases {
            assert_eq!(address_version(kind, network), byte);
            assert_eq!(parse_address_version(byte).unwrap(), (kind, network));
        }
        assert!(matches!(
            parse_address_version(0x42),
            Err(KeyError::UnknownVersion(0x42))
        ));
    }
}
