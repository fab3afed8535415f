use crate::ParseError;

pub trait Unsigned: Copy + Ord + Default {
    /// `MAX / 10`: the largest value that can still take another digit.
    const MAX_DIV_10: Self;
    /// `MAX % 10`: the largest digit accepted when the value is `MAX_DIV_10`.
    const MAX_MOD_10: Self;

    fn from_digit(digit: u8) -> Self;

    /// `self * 10 + digit`. Callers must have ruled out overflow.
    fn push_digit(self, digit: Self) -> Self;
}

macro_rules! impl_unsigned {
    ($($t:ty)*) => ($(impl Unsigned for $t {
        const MAX_DIV_10: $t = <$t>::MAX / 10;
        const MAX_MOD_10: $t = <$t>::MAX % 10;

        #[inline]
        fn from_digit(digit: u8) -> Self {
            digit as $t
        }

        #[inline]
        fn push_digit(self, digit: Self) -> Self {
            self * 10 + digit
        }
    })*)
}
impl_unsigned! { u8 u16 u32 u64 u128 usize }

/// Parses unsigned decimal text, failing on the first non-digit or on the
/// digit that would overflow `U`. Empty input parses to `0`.
///
/// ```
/// use swar_stoi::{parse_checked, ParseError};
///
/// assert_eq!(parse_checked::<u32>(b"4294967295"), Ok(u32::MAX));
/// assert_eq!(parse_checked::<u32>(b"4294967296"), Err(ParseError::Overflow));
/// assert_eq!(parse_checked::<u64>(b"007"), Ok(7));
/// ```
#[inline]
pub fn parse_checked<U: Unsigned>(input: &[u8]) -> Result<U, ParseError> {
    let mut result = U::default();

    for &byte in input {
        if !byte.is_ascii_digit() {
            return Err(ParseError::InvalidCharacter);
        }

        let digit = U::from_digit(byte - b'0');

        if result < U::MAX_DIV_10 || (result == U::MAX_DIV_10 && digit <= U::MAX_MOD_10) {
            result = result.push_digit(digit);
        } else {
            return Err(ParseError::Overflow);
        }
    }

    Ok(result)
}
