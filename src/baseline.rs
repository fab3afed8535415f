use std::{
    num::{IntErrorKind, ParseIntError},
    str::FromStr,
};

use crate::ParseError;

/// The reference strategy: `str::parse` with its errors folded into
/// [`ParseError`].
///
/// Differs from [`crate::parse_checked`] at the edges: empty input is an
/// error here, and a single leading `+` is accepted.
#[inline]
pub fn parse_std<U>(input: &[u8]) -> Result<U, ParseError>
where
    U: FromStr<Err = ParseIntError>,
{
    let text = std::str::from_utf8(input).map_err(|_| ParseError::InvalidCharacter)?;

    text.parse::<U>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => ParseError::Overflow,
        _ => ParseError::InvalidCharacter,
    })
}
