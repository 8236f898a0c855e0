//! The curve-math provider boundary. This crate consumes secp256k1
//! operations through the [`Secp256k1Provider`] trait and never touches
//! point arithmetic itself.
//!
//! The provider handle is constructed once by the hosting application and
//! passed by reference into every call; there is no ambient global
//! context. Provider failures come back as explicit error values at this
//! boundary, never as panics.

/// The default provider, backed by the pure-Rust `k256` crate.
pub mod rust_k256;

pub use rust_k256::K256Provider;

use crate::KeyResult;

/// A minimal secp256k1 provider interface.
///
/// `create_pubkey` and `sign` consume a raw 32-byte secret scalar;
/// rejecting out-of-range scalars is the provider's job. Signatures are
/// produced and consumed as DER bytes with deterministic (RFC6979)
/// nonces.
pub trait Secp256k1Provider {
    /// An opaque parsed public key handle.
    type Pubkey;

    /// Derive the SEC1-encoded public key for a secret, compressed or
    /// uncompressed per the flag.
    fn create_pubkey(&self, secret: &[u8; 32], compressed: bool) -> KeyResult<Vec<u8>>;

    /// Parse SEC1 public key bytes into an opaque handle.
    fn parse_pubkey(&self, raw: &[u8]) -> KeyResult<Self::Pubkey>;

    /// Sign a 32-byte digest, returning the DER-encoded signature.
    fn sign(&self, secret: &[u8; 32], digest: &[u8; 32]) -> KeyResult<Vec<u8>>;

    /// Verify a DER signature over a 32-byte digest against SEC1 public
    /// key bytes. Malformed keys or signatures verify as false.
    fn verify(&self, raw_pubkey: &[u8], digest: &[u8; 32], der_sig: &[u8]) -> bool;

    /// Whether a DER signature's `s` component is already in low-S form.
    /// Malformed signatures report false.
    fn check_low_s(&self, der_sig: &[u8]) -> bool;
}
