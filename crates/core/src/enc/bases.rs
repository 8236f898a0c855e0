//! Base-58 encoder/decoder with the Bitcoin alphabet. Defines the common
//! encoder errors.
//!
//! Two independently derived conversion strategies live here: [`bigint`]
//! (repeated divide-by-58 long division) and [`schoolbook`] (in-place
//! fixed-width multiply with carry propagation). Each is a correctness
//! oracle for the other; the test suite asserts their outputs are
//! byte-identical on arbitrary input rather than trusting either one
//! alone. The top-level [`encode_base58`] and [`decode_base58`] delegate
//! to one of them.

use once_cell::sync::Lazy;
use thiserror::Error;

/// The base-58 alphabet. Order-significant. Excludes `0`, `O`, `I`, and
/// `l`, which are easily confused in transcription.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const INVALID_DIGIT: u8 = 0xff;

/// Reverse lookup from an ASCII byte to its alphabet index. Built once
/// before the first decode and read-only thereafter.
static DIGIT_TABLE: Lazy<[u8; 128]> = Lazy::new(|| {
    let mut table = [INVALID_DIGIT; 128];
    let mut i = 0u8;
    while (i as usize) < ALPHABET.len() {
        table[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    table
});

/// Errors that can be returned by the base-58 and Base58Check codecs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// A character outside the 58-symbol alphabet appeared in the input
    /// text.
    #[error("Invalid base58 character {0:?}")]
    InvalidCharacter(char),

    /// The trailing 4 bytes did not match the recomputed checksum.
    #[error("Checksum mismatch on base58check payload")]
    BadChecksum,

    /// A checked payload was too short to contain a 4-byte checksum.
    #[error("Payload too short to carry a checksum")]
    TooShort,
}

/// A simple result type alias
pub type EncodingResult<T> = Result<T, EncodingError>;

/// Look up the alphabet index of `c`, rejecting anything outside the
/// alphabet.
fn digit_value(c: char) -> EncodingResult<u8> {
    let index = c as usize;
    if index < 128 {
        let value = DIGIT_TABLE[index];
        if value != INVALID_DIGIT {
            return Ok(value);
        }
    }
    Err(EncodingError::InvalidCharacter(c))
}

/// Encode a byte slice to base-58 text. Leading zero bytes carry no
/// magnitude and are preserved positionally as leading `'1'` characters.
/// The empty slice encodes to the empty string.
pub fn encode_base58(data: &[u8]) -> String {
    bigint::encode(data)
}

/// Decode base-58 text to bytes. Leading `'1'` characters become leading
/// zero bytes; the empty string decodes to the empty byte sequence.
pub fn decode_base58(s: &str) -> EncodingResult<Vec<u8>> {
    bigint::decode(s)
}

/// Conversion by big-integer arithmetic over a big-endian byte-vector
/// magnitude. Encoding repeatedly divides the whole magnitude by 58 and
/// collects remainders; decoding is Horner accumulation, multiplying the
/// running value by 58 per digit.
pub mod bigint {
    use super::{digit_value, EncodingResult, ALPHABET};

    /// Divide a big-endian base-256 magnitude by 58 in place, returning
    /// the remainder. The quotient keeps no leading zero bytes.
    fn div_mod_58(magnitude: &[u8]) -> (Vec<u8>, u8) {
        let mut quotient = Vec::with_capacity(magnitude.len());
        let mut rem = 0u32;
        for &byte in magnitude {
            let acc = (rem << 8) | u32::from(byte);
            let q = (acc / 58) as u8;
            rem = acc % 58;
            if q != 0 || !quotient.is_empty() {
                quotient.push(q);
            }
        }
        (quotient, rem as u8)
    }

    /// Base-58 encode by repeated divide-by-58.
    pub fn encode(data: &[u8]) -> String {
        let zeros = data.iter().take_while(|&&b| b == 0).count();

        let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 137 / 100 + 1);
        let mut magnitude = data[zeros..].to_vec();
        while !magnitude.is_empty() {
            let (quotient, rem) = div_mod_58(&magnitude);
            digits.push(ALPHABET[usize::from(rem)]);
            magnitude = quotient;
        }

        // Remainders come out least-significant first. Zero markers sort
        // above everything, then the whole run is reversed.
        digits.extend(std::iter::repeat(ALPHABET[0]).take(zeros));
        digits.iter().rev().map(|&b| char::from(b)).collect()
    }

    /// Base-58 decode by Horner accumulation over a big-endian magnitude.
    pub fn decode(s: &str) -> EncodingResult<Vec<u8>> {
        let zcount = s.bytes().take_while(|&b| b == ALPHABET[0]).count();

        let mut num: Vec<u8> = Vec::with_capacity(s.len() * 733 / 1000 + 1);
        for c in s[zcount..].chars() {
            let mut carry = u32::from(digit_value(c)?);
            for byte in num.iter_mut().rev() {
                carry += u32::from(*byte) * 58;
                *byte = (carry & 0xff) as u8;
                carry >>= 8;
            }
            while carry > 0 {
                num.insert(0, (carry & 0xff) as u8);
                carry >>= 8;
            }
        }

        let mut out = vec![0u8; zcount];
        out.extend_from_slice(&num);
        Ok(out)
    }
}

/// Conversion over a fixed-width working buffer sized up front from the
/// 256↔58 radix ratio, processing one input unit at a time with carry
/// propagation. No division of the full magnitude ever happens; the
/// buffer never reallocates.
pub mod schoolbook {
    use super::{digit_value, EncodingResult, ALPHABET};

    /// Base-58 encode by in-place multiply-by-256-and-add per input byte.
    pub fn encode(data: &[u8]) -> String {
        let zeros = data.iter().take_while(|&&b| b == 0).count();

        // log(256) / log(58), rounded up.
        let mut digits = vec![0u8; (data.len() - zeros) * 137 / 100 + 1];
        let mut length = 0usize;

        for &byte in &data[zeros..] {
            let mut carry = u32::from(byte);
            for digit in digits[..length].iter_mut() {
                carry += u32::from(*digit) << 8;
                *digit = (carry % 58) as u8;
                carry /= 58;
            }
            while carry > 0 {
                digits[length] = (carry % 58) as u8;
                length += 1;
                carry /= 58;
            }
        }

        let mut out = String::with_capacity(zeros + length);
        for _ in 0..zeros {
            out.push(char::from(ALPHABET[0]));
        }
        // digits[..length] is least-significant first.
        for &digit in digits[..length].iter().rev() {
            out.push(char::from(ALPHABET[usize::from(digit)]));
        }
        out
    }

    /// Base-58 decode by in-place multiply-by-58-and-add per digit.
    pub fn decode(s: &str) -> EncodingResult<Vec<u8>> {
        let zcount = s.bytes().take_while(|&b| b == ALPHABET[0]).count();
        let rest = &s[zcount..];

        // log(58) / log(256), rounded up.
        let mut bytes = vec![0u8; rest.len() * 733 / 1000 + 1];
        let mut length = 0usize;

        for c in rest.chars() {
            let mut carry = u32::from(digit_value(c)?);
            for byte in bytes[..length].iter_mut() {
                carry += u32::from(*byte) * 58;
                *byte = (carry & 0xff) as u8;
                carry >>= 8;
            }
            while carry > 0 {
                bytes[length] = (carry & 0xff) as u8;
                length += 1;
                carry >>= 8;
            }
        }

        let mut out = vec![0u8; zcount];
        out.extend(bytes[..length].iter().rev());
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, RngCore, SeedableRng};

    const VECTORS: &[(&[u8], &str)] = &[
        (&[], ""),
        (&[32], "Z"),
        (&[45], "n"),
        (&[48], "q"),
        (&[49], "r"),
        (&[57], "z"),
        (&[45, 49], "4SU"),
        (&[49, 49], "4k8"),
        (&[0], "1"),
        (&[0, 0, 45, 49], "114SU"),
    ];

    #[test]
    fn it_encodes_known_vectors_with_both_strategies() {
        for (input, expected) in VECTORS {
            assert_eq!(bigint::encode(input), *expected);
            assert_eq!(schoolbook::encode(input), *expected);
        }
    }

    #[test]
    fn it_decodes_known_vectors_with_both_strategies() {
        for (expected, input) in VECTORS {
            assert_eq!(bigint::decode(input).unwrap(), *expected);
            assert_eq!(schoolbook::decode(input).unwrap(), *expected);
        }
    }

    #[test]
    fn it_rejects_characters_outside_the_alphabet() {
        for s in ["0", "O", "I", "l", "hello!", "4S U", "Zé"] {
            assert!(matches!(
                decode_base58(s),
                Err(EncodingError::InvalidCharacter(_))
            ));
            assert!(matches!(
                schoolbook::decode(s),
                Err(EncodingError::InvalidCharacter(_))
            ));
        }
    }

    #[test]
    fn it_round_trips_random_buffers() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
        let mut buf = [0u8; 128];
        for _ in 0..128 {
            rng.fill_bytes(&mut buf);
            assert_eq!(decode_base58(&encode_base58(&buf)).unwrap(), buf);
        }

        // Same loop with a zero prefix, which must survive the trip.
        let mut zerobuf = [0u8; 128];
        for _ in 0..128 {
            rng.fill_bytes(&mut zerobuf[8..]);
            assert_eq!(decode_base58(&encode_base58(&zerobuf)).unwrap(), zerobuf);
        }
    }

    #[test]
    fn strategies_agree_on_arbitrary_input() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0xba5e58);
        for _ in 0..256 {
            let len = rng.gen_range(0..64);
            let zeros = rng.gen_range(0..4).min(len);
            let mut buf = vec![0u8; len];
            rng.fill_bytes(&mut buf[zeros..]);

            let encoded = bigint::encode(&buf);
            assert_eq!(encoded, schoolbook::encode(&buf));
            assert_eq!(
                bigint::decode(&encoded).unwrap(),
                schoolbook::decode(&encoded).unwrap()
            );
        }
    }

    #[test]
    fn it_preserves_leading_zeros_exactly() {
        for k in 0..16 {
            let mut buf = vec![0u8; k];
            buf.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
            let encoded = encode_base58(&buf);
            let ones = encoded.bytes().take_while(|&b| b == b'1').count();
            assert_eq!(ones, k);
            assert_eq!(decode_base58(&encoded).unwrap(), buf);
        }
    }

    #[test]
    fn empty_text_is_empty_bytes() {
        assert_eq!(encode_base58(&[]), "");
        assert_eq!(decode_base58("").unwrap(), Vec::<u8>::new());
    }
}
