use super::RadixSpec;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Named alphabets, RFC 4648 where one applies.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Binary,
    Decimal,
    Base16,
    Base32,
    Base32Hex,
    Base64,
    Base64Url,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Binary,
        Preset::Decimal,
        Preset::Base16,
        Preset::Base32,
        Preset::Base32Hex,
        Preset::Base64,
        Preset::Base64Url,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Decimal => "decimal",
            Self::Base16 => "base16",
            Self::Base32 => "base32",
            Self::Base32Hex => "base32hex",
            Self::Base64 => "base64",
            Self::Base64Url => "base64url",
        }
    }

    pub const fn symbols(self) -> &'static str {
        match self {
            Self::Binary => "01",
            Self::Decimal => "0123456789",
            Self::Base16 => "0123456789ABCDEF",
            Self::Base32 => "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567",
            Self::Base32Hex => "0123456789ABCDEFGHIJKLMNOPQRSTUV",
            Self::Base64 => "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
            Self::Base64Url => "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
        }
    }

    pub const fn base(self) -> u64 {
        match self {
            Self::Binary => 2,
            Self::Decimal => 10,
            Self::Base16 => 16,
            Self::Base32 | Self::Base32Hex => 32,
            Self::Base64 | Self::Base64Url => 64,
        }
    }

    pub fn radix(self) -> RadixSpec {
        RadixSpec::new(self.symbols(), self.base())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| Error::NoPreset { name: name.to_string() })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Preset;
    use crate::Error;

    #[test]
    fn from_str() {
        assert_eq!("base32hex".parse(), Ok(Preset::Base32Hex));
        assert_eq!("base64url".parse(), Ok(Preset::Base64Url));
        assert_eq!(
            "base58".parse::<Preset>(),
            Err(Error::NoPreset { name: String::from("base58") })
        );
    }

    #[test]
    fn symbols_cover_base() {
        for preset in Preset::ALL {
            assert_eq!(preset.symbols().chars().count() as u64, preset.base(), "{}", preset);
            assert_eq!(preset.to_string().parse(), Ok(preset));
        }
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&Preset::Base64Url).unwrap(), r#""base64url""#);
        assert_eq!(serde_json::from_str::<Preset>(r#""base32hex""#).unwrap(), Preset::Base32Hex);
    }
}
