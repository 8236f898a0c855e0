//! # Coinkit Core
//!
//! `coinkit-core` contains the codec primitives used by the `coinkit-keys`
//! crate: the base-58 text codec, the Base58Check checksum layer, and the
//! Bitcoin-style digest wrappers.
//!
//! ## Crate Layout
//!
//! ### Enc
//!
//! The enc module provides base-58 encoding and decoding, and the 4-byte
//! double-sha2 checksum scheme layered on top of it. The base-58 codec
//! deliberately ships two independently derived conversion strategies that
//! are cross-checked against each other in the test suite.
//!
//! ### Hashes
//!
//! The hashes module provides `hash256` (Bitcoin's double-sha2) and
//! `hash160` (`ripemd160(sha2(x))`), built on the RustCrypto `digest`
//! stack.
//!
//! All operations here are pure functions over immutable inputs. The only
//! process-wide state is the read-only base-58 decode table, initialized
//! once on first use.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod enc;
pub mod hashes;

pub use enc::*;
pub use hashes::*;
