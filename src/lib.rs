//! Three ways to turn unsigned decimal text into integers: the standard
//! library, a checked scalar loop that detects overflow before it happens,
//! and an unchecked SWAR routine that collapses eight digits per step.

mod baseline;
mod checked;
mod error;
pub mod swar;
pub mod validate;

pub use baseline::parse_std;
pub use checked::{parse_checked, Unsigned};
pub use error::ParseError;
pub use swar::{parse_fast, parse_fast_u64};

/// Selects one of the parsing strategies behind a common signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Std,
    Predictable,
    /// Never fails, and expects digit-only input.
    Swar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Std, Strategy::Predictable, Strategy::Swar];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Std => "std",
            Strategy::Predictable => "predictable",
            Strategy::Swar => "swar",
        }
    }

    #[inline]
    pub fn parse_u32(self, input: &[u8]) -> Result<u32, ParseError> {
        match self {
            Strategy::Std => parse_std(input),
            Strategy::Predictable => parse_checked(input),
            Strategy::Swar => Ok(parse_fast(input)),
        }
    }

    #[inline]
    pub fn parse_u64(self, input: &[u8]) -> Result<u64, ParseError> {
        match self {
            Strategy::Std => parse_std(input),
            Strategy::Predictable => parse_checked(input),
            Strategy::Swar => Ok(parse_fast_u64(input)),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
