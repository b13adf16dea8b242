pub mod alphabet;
pub mod preset;

pub use alphabet::Alphabet;
pub use preset::Preset;

use crate::{error::MAX_SAFE_INTEGER, Error};

/// An `(alphabet, base)` pair as supplied by a caller, not yet validated.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RadixSpec {
    symbols: Option<String>,
    base: Option<u64>,
}

impl RadixSpec {
    pub fn new(symbols: impl Into<String>, base: u64) -> Self {
        Self {
            symbols: Some(symbols.into()),
            base: Some(base),
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        preset.radix()
    }

    /// Uses every symbol of the alphabet, so the base is the symbol count.
    pub fn symbols_only(symbols: impl Into<String>) -> Self {
        let symbols = symbols.into();
        let base = symbols.chars().count() as u64;
        Self::new(symbols, base)
    }

    pub fn with_symbols(self, symbols: impl Into<String>) -> Self {
        Self {
            symbols: Some(symbols.into()),
            ..self
        }
    }

    pub fn with_base(self, base: u64) -> Self {
        Self { base: Some(base), ..self }
    }

    pub fn symbols(&self) -> Option<&str> {
        self.symbols.as_deref()
    }

    pub fn base(&self) -> Option<u64> {
        self.base
    }
}

impl From<Preset> for RadixSpec {
    fn from(preset: Preset) -> Self {
        preset.radix()
    }
}

/// A validated `(alphabet, base)` pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Radix {
    alphabet: Alphabet,
    base: u64,
}

impl Radix {
    pub fn new(spec: &RadixSpec) -> Result<Self, Error> {
        let mut radixes = validate(&[spec])?;
        radixes.pop().ok_or(Error::UnsafeSymbolsType)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn base(&self) -> u64 {
        self.base
    }
}

impl TryFrom<Preset> for Radix {
    type Error = Error;

    fn try_from(preset: Preset) -> Result<Self, Self::Error> {
        Self::new(&preset.radix())
    }
}

/// Validates every spec, one rule at a time across all of them, so the first
/// rule that any spec violates is the one reported.
pub fn validate(specs: &[&RadixSpec]) -> Result<Vec<Radix>, Error> {
    let symbols = specs
        .iter()
        .map(|spec| spec.symbols())
        .collect::<Option<Vec<_>>>()
        .ok_or(Error::UnsafeSymbolsType)?;

    let bases = specs
        .iter()
        .map(|spec| spec.base().filter(|&base| base > 0 && base < MAX_SAFE_INTEGER))
        .collect::<Option<Vec<_>>>()
        .ok_or(Error::UnsafeBaseType)?;

    for (symbols, &base) in symbols.iter().zip(&bases) {
        let count = symbols.chars().count();
        if (count as u64) < base {
            return Err(Error::UnsafeSymbolLength {
                symbols: count,
                required: base,
            });
        }
    }

    symbols
        .iter()
        .zip(bases)
        .map(|(symbols, base)| Ok(Radix { alphabet: Alphabet::new(symbols)?, base }))
        .collect()
}
