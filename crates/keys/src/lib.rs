//! # Coinkit Keys
//!
//! Structured key and address records over the `coinkit-core` codec:
//! WIF-encoded private keys, a format view over opaque public key bytes,
//! and Base58Check addresses, plus the adapter boundary to the external
//! secp256k1 curve provider.
//!
//! Curve math is never implemented here. The [`curve::Secp256k1Provider`]
//! trait is the whole surface this crate consumes; [`curve::K256Provider`]
//! wraps the `k256` crate behind it. Randomness is likewise always
//! injected by the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod addr;
pub mod curve;
pub mod nets;
pub mod pubkey;
pub mod wif;

pub use addr::Address;
pub use nets::{AddressKind, Network};
pub use pubkey::PublicKey;
pub use wif::PrivateKey;

use thiserror::Error;

/// Errors for this library. All are local, non-retryable validation
/// failures surfaced to the caller; nothing is silently recovered.
#[derive(Debug, Error)]
pub enum KeyError {
    /// A decoded payload had the wrong length or an invalid flag byte.
    #[error("Bad key or address layout")]
    BadFormat,

    /// A WIF version byte did not match any known network.
    #[error("Version byte 0x{0:02x} doesn't match any network WIF version")]
    BadNetwork(u8),

    /// An address version byte did not match any (kind, network) pair.
    #[error("Version byte 0x{0:02x} doesn't match any address version")]
    UnknownVersion(u8),

    /// The provider could not parse opaque key or signature bytes.
    #[error("Provider failed to parse key or signature bytes")]
    ParseFailed,

    /// The curve provider rejected key material, e.g. an out-of-range
    /// secret scalar.
    #[error("Curve provider rejected the operation")]
    Provider(#[from] k256::elliptic_curve::Error),

    /// The curve provider failed to produce a signature.
    #[error("Curve provider signature operation failed")]
    ProviderSignature(#[from] k256::ecdsa::Error),

    /// Bubbled up error from the base-58 codec.
    #[error(transparent)]
    Encoding(#[from] coinkit_core::enc::EncodingError),

    /// Bubbled up error from hex parsing.
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}

/// A simple result type alias
pub type KeyResult<T> = Result<T, KeyError>;
