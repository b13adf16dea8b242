pub mod emit;
pub mod parse;

pub use emit::emit;
pub use parse::parse;

use crate::{radix, Error, Radix, RadixSpec};

/// Validated input and output radixes for one numeral conversion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConversionSpec {
    input: Radix,
    output: Radix,
}

impl ConversionSpec {
    pub fn new(input: &RadixSpec, output: &RadixSpec) -> Result<Self, Error> {
        let mut radixes = radix::validate(&[input, output])?.into_iter();
        match (radixes.next(), radixes.next()) {
            (Some(input), Some(output)) => Ok(Self { input, output }),
            _ => Err(Error::UnsafeSymbolsType),
        }
    }

    /// Fails on the first symbol of `value` missing from the input alphabet.
    pub fn check_value(&self, value: &str) -> Result<(), Error> {
        let alphabet = self.input.alphabet();
        match value.chars().enumerate().find(|&(_, symbol)| !alphabet.contains(symbol)) {
            Some((index, symbol)) => Err(Error::InvalidInput { symbol, index }),
            None => Ok(()),
        }
    }

    pub fn input(&self) -> &Radix {
        &self.input
    }

    pub fn output(&self) -> &Radix {
        &self.output
    }
}

/// Reusable numeral converter bound to one [`ConversionSpec`].
#[derive(Clone, Debug)]
pub struct Converter {
    spec: ConversionSpec,
}

impl Converter {
    pub const fn new(spec: ConversionSpec) -> Self {
        Self { spec }
    }

    pub fn from_specs(input: &RadixSpec, output: &RadixSpec) -> Result<Self, Error> {
        Ok(Self::new(ConversionSpec::new(input, output)?))
    }

    pub fn spec(&self) -> &ConversionSpec {
        &self.spec
    }

    pub fn convert(&self, value: &str) -> Result<String, Error> {
        self.spec.check_value(value)?;
        let value = parse(self.spec.input(), value)?;
        Ok(emit(self.spec.output(), value))
    }
}

/// Validates both radixes and `value`, then converts `value` from `input` to `output`.
pub fn convert(input: &RadixSpec, output: &RadixSpec, value: &str) -> Result<String, Error> {
    Converter::from_specs(input, output)?.convert(value)
}

/// Runs the validation [`convert`] performs without converting anything.
pub fn validate(input: &RadixSpec, output: &RadixSpec, value: Option<&str>) -> Result<ConversionSpec, Error> {
    let spec = ConversionSpec::new(input, output)?;
    if let Some(value) = value {
        spec.check_value(value)?;
    }
    Ok(spec)
}
