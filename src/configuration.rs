use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use std::{env, error, fmt};
use universal_encoder::{Padding, Preset, RadixSpec};

#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Reads a preset name, or `SYMBOLS:BASE` for a custom alphabet. The split is
/// on the last `:` so the symbols themselves may contain one.
pub fn parse_radix(descriptor: &str) -> Result<RadixSpec, universal_encoder::Error> {
    let regex = Regex::new(r"^(.+):([^:]*)$").map_err(|_| universal_encoder::Error::UnsafeSymbolsType)?;
    match regex.captures(descriptor) {
        Some(captures) => {
            let base = captures[2].parse::<u64>().map_err(|_| universal_encoder::Error::UnsafeBaseType)?;
            Ok(RadixSpec::new(&captures[1], base))
        }
        None => Ok(descriptor.parse::<Preset>()?.radix()),
    }
}

fn parse_pad(value: &str) -> Result<char, Error> {
    value.chars().next().ok_or_else(|| Error::new("Pad character must not be empty"))
}

/// Parses a lowercase name into one of the serde-named option enums.
fn parse_named<T: DeserializeOwned>(value: &str) -> Result<T, serde_json::Error> {
    serde_json::from_value(json!(value))
}

struct Variables<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> Variables<F> {
    fn var(&self, key: &str, default: Option<String>) -> Result<String, Error> {
        match (self.lookup)(key) {
            Some(value) => Ok(value),
            None => default.ok_or_else(|| Error::new(format!("Missing {}", key))),
        }
    }

    fn var_map<T, E: error::Error>(&self, key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, Error> {
        match self.var(key, None) {
            Ok(value) => f(&value).map_err(|error| Error::new(format!("Invalid {} {:?}: {}", key, value, error))),
            Err(err) => default.ok_or(err),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    input: String,
    input_radix: RadixSpec,
    output: String,
    output_radix: RadixSpec,
    pad: char,
    padding: Padding,
    strict: bool,
    format: Format,
    verbose: bool,
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let variables = Variables { lookup };
        let input = variables.var("INPUT", Some(Preset::Decimal.to_string()))?;
        let input_radix = variables.var_map("INPUT", parse_radix, Some(Preset::Decimal.radix()))?;
        let output = variables.var("OUTPUT", Some(Preset::Base64.to_string()))?;
        let output_radix = variables.var_map("OUTPUT", parse_radix, Some(Preset::Base64.radix()))?;
        let pad = match variables.var("PAD_CHAR", None) {
            Ok(value) => parse_pad(&value)?,
            Err(_) => universal_encoder::bit_codec::DEFAULT_PAD,
        };
        let padding = variables.var_map("PADDING", parse_named, Some(Padding::default()))?;
        let strict = variables.var_map("STRICT", |strict| strict.parse(), Some(false))?;
        let format = variables.var_map("FORMAT", parse_named, Some(Format::default()))?;
        let verbose = variables.var_map("VERBOSE", |verbose| verbose.parse(), Some(false))?;
        Ok(Self {
            input,
            input_radix,
            output,
            output_radix,
            pad,
            padding,
            strict,
            format,
            verbose,
        })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_radix(&self) -> &RadixSpec {
        &self.input_radix
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn output_radix(&self) -> &RadixSpec {
        &self.output_radix
    }

    pub fn pad(&self) -> char {
        self.pad
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_radix, Configuration, Format};
    use std::collections::HashMap;
    use universal_encoder::{Error, Padding, Preset, RadixSpec};

    fn configuration(variables: &[(&str, &str)]) -> Result<Configuration, super::Error> {
        let variables: HashMap<String, String> = variables.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        Configuration::from_lookup(|key| variables.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let configuration = configuration(&[]).unwrap();
        assert_eq!(configuration.input(), "decimal");
        assert_eq!(configuration.input_radix(), &Preset::Decimal.radix());
        assert_eq!(configuration.output_radix(), &Preset::Base64.radix());
        assert_eq!(configuration.pad(), '=');
        assert_eq!(configuration.padding(), Padding::Remainder);
        assert!(!configuration.strict());
        assert_eq!(configuration.format(), Format::Text);
        assert!(!configuration.verbose());
    }

    #[test]
    fn overrides() {
        let configuration = configuration(&[
            ("INPUT", "01234:5"),
            ("OUTPUT", "base32hex"),
            ("PAD_CHAR", "*#"),
            ("PADDING", "complement"),
            ("STRICT", "true"),
            ("FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(configuration.input_radix(), &RadixSpec::new("01234", 5));
        assert_eq!(configuration.output_radix(), &Preset::Base32Hex.radix());
        assert_eq!(configuration.pad(), '*');
        assert_eq!(configuration.padding(), Padding::Complement);
        assert!(configuration.strict());
        assert_eq!(configuration.format(), Format::Json);
    }

    #[test]
    fn invalid_values() {
        assert!(configuration(&[("OUTPUT", "base58")]).is_err());
        assert!(configuration(&[("PADDING", "some")]).is_err());
        assert!(configuration(&[("STRICT", "yes")]).is_err());
        assert!(configuration(&[("PAD_CHAR", "")]).is_err());
        let error = configuration(&[("FORMAT", "xml")]).unwrap_err();
        assert!(error.message().starts_with("Invalid FORMAT"));
    }

    #[test]
    fn radix_descriptors() {
        assert_eq!(parse_radix("base64url"), Ok(Preset::Base64Url.radix()));
        assert_eq!(parse_radix("ab:c:3"), Ok(RadixSpec::new("ab:c", 3)));
        assert_eq!(parse_radix("0123456789:ten"), Err(Error::UnsafeBaseType));
        assert_eq!(parse_radix("base58"), Err(Error::NoPreset { name: String::from("base58") }));
    }
}
