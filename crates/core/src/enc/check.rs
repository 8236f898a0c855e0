//! The Base58Check layer: a 4-byte double-sha2 checksum appended to a
//! payload before base-58 rendering, verified and stripped on the way
//! back in.

use crate::enc::bases::{decode_base58, encode_base58, EncodingError, EncodingResult};
use crate::hashes::hash256;

/// The number of checksum bytes appended to a checked payload.
pub const CHECKSUM_LEN: usize = 4;

/// Compute the 4-byte checksum of `payload`: the first 4 bytes of
/// `hash256(payload)`.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = hash256(payload);
    let mut check = [0u8; CHECKSUM_LEN];
    check.copy_from_slice(&digest[..CHECKSUM_LEN]);
    check
}

/// Return `payload || checksum(payload)` as a new vector.
pub fn append_checksum(payload: &[u8]) -> Vec<u8> {
    let mut data = payload.to_vec();
    data.extend_from_slice(&checksum(payload));
    data
}

/// Split `data` into body and 4-byte tail, recompute the checksum over
/// the body, and return the body slice iff the tail matches.
pub fn verify_checksum(data: &[u8]) -> EncodingResult<&[u8]> {
    if data.len() < CHECKSUM_LEN {
        return Err(EncodingError::TooShort);
    }
    let (body, tail) = data.split_at(data.len() - CHECKSUM_LEN);
    if checksum(body) != tail[..] {
        return Err(EncodingError::BadChecksum);
    }
    Ok(body)
}

/// Encode a payload into a base58check string.
pub fn encode_base58_check(payload: &[u8]) -> String {
    encode_base58(&append_checksum(payload))
}

/// Decode a base58check string, verifying and stripping the checksum.
pub fn decode_base58_check(s: &str) -> EncodingResult<Vec<u8>> {
    let data = decode_base58(s)?;
    let body = verify_checksum(&data)?;
    Ok(body.to_vec())
}
