//! Eight digits at a time, using plain `u64` arithmetic. Nothing here
//! validates its input; use [`crate::parse_checked`] for untrusted text.

/// `'0'` repeated in all eight byte lanes.
const ASCII_ZEROS: u64 = 0x3030_3030_3030_3030;

const TWO_DIGIT_MASK: u64 = 0x00FF_00FF_00FF_00FF;
const FOUR_DIGIT_MASK: u64 = 0x0000_FFFF_0000_FFFF;
const EIGHT_DIGIT_MASK: u64 = 0x0000_0000_FFFF_FFFF;

pub const CHUNK_LEN: usize = 8;
const CHUNK_SCALE: u64 = 100_000_000;

/// Collapses exactly eight ASCII digits into their value.
#[inline]
pub fn collapse_chunk(chunk: [u8; CHUNK_LEN]) -> u32 {
    let mut word = u64::from_le_bytes(chunk).wrapping_sub(ASCII_ZEROS);
    word = word.wrapping_mul(10).wrapping_add(word >> 8) & TWO_DIGIT_MASK;
    word = word.wrapping_mul(100).wrapping_add(word >> 16) & FOUR_DIGIT_MASK;
    word = word.wrapping_mul(10_000).wrapping_add(word >> 32) & EIGHT_DIGIT_MASK;
    word as u32
}

/// `input` must be ASCII digits only. Anything else gives an unspecified
/// value, and values of `2^64` or more wrap.
#[inline]
pub fn parse_fast_u64(input: &[u8]) -> u64 {
    let mut acc = 0u64;
    let mut rest = input;

    while let Some((chunk, tail)) = rest.split_first_chunk::<CHUNK_LEN>() {
        acc = acc
            .wrapping_mul(CHUNK_SCALE)
            .wrapping_add(u64::from(collapse_chunk(*chunk)));
        rest = tail;
    }

    for &byte in rest {
        acc = acc
            .wrapping_mul(10)
            .wrapping_add(u64::from(byte.wrapping_sub(b'0')));
    }

    acc
}

/// Parses a digit-only slice into a `u32`.
///
/// Same precondition as [`parse_fast_u64`]. The 64-bit accumulator is
/// truncated on return, so inputs worth `2^32` or more wrap silently.
///
/// ```
/// assert_eq!(swar_stoi::parse_fast(b"123456789"), 123_456_789);
/// ```
#[inline]
pub fn parse_fast(input: &[u8]) -> u32 {
    parse_fast_u64(input) as u32
}
