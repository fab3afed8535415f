use thiserror::Error;

/// Why a checked parse rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// A byte outside `'0'..='9'` was encountered.
    #[error("invalid character in decimal input")]
    InvalidCharacter,
    /// The value would not fit in the target integer type.
    #[error("decimal value overflows the target integer type")]
    Overflow,
}
