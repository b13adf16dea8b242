use std::{error, fmt};

/// Largest integer a conversion may pass through, `2^53 - 1`.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// An alphabet was never supplied.
    UnsafeSymbolsType,
    /// A base was never supplied, or lies outside `(0, 2^53 - 1)`.
    UnsafeBaseType,
    UnsafeSymbolLength { symbols: usize, required: u64 },
    DupeSymbolValues { symbol: char, first: usize, second: usize },
    NoPreset { name: String },
    InvalidInput { symbol: char, index: usize },
    InputTooLarge,
    /// Returned by strict decoding only.
    InvalidPadding,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsafeSymbolsType => write!(f, "Symbols must be set to a string value"),
            Self::UnsafeBaseType => write!(
                f,
                "Base must be an integer greater than zero and less than {}",
                MAX_SAFE_INTEGER
            ),
            Self::UnsafeSymbolLength { symbols, required } => write!(
                f,
                "Length of symbols must be equal to or greater than base ({} symbols, {} required)",
                symbols, required
            ),
            Self::DupeSymbolValues { symbol, first, second } => {
                write!(f, "Symbols must not be repeated ('{}' at indexes {} and {})", symbol, first, second)
            }
            Self::NoPreset { name } => write!(f, "Preset \"{}\" does not exist", name),
            Self::InvalidInput { symbol, index } => write!(f, "Unknown symbol '{}' in input at index {}", symbol, index),
            Self::InputTooLarge => write!(f, "Input value too large to convert"),
            Self::InvalidPadding => write!(f, "Input is not canonically encoded"),
        }
    }
}
