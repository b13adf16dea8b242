//! Conversion between numeral systems defined by arbitrary symbol alphabets,
//! and a bit-regrouping byte codec producing RFC 4648 style encodings.
//!
//! ```
//! use universal_encoder::{convert, encode, decode, Preset};
//!
//! assert_eq!(convert(&Preset::Decimal.radix(), &Preset::Base16.radix(), "255").unwrap(), "FF");
//! assert_eq!(encode(&Preset::Base64.radix(), b"M", '=').unwrap(), "TQ==");
//! assert_eq!(decode(&Preset::Base64.radix(), "TQ==", '=').unwrap(), b"M");
//! ```

pub mod bit_codec;
pub mod error;
pub mod numeral;
pub mod radix;

pub use self::{
    bit_codec::{decode, encode, Codec, Padding},
    error::{Error, MAX_SAFE_INTEGER},
    numeral::{convert, validate, ConversionSpec, Converter},
    radix::{Alphabet, Preset, Radix, RadixSpec},
};
