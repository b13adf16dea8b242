//! Byte codec that regroups the bits of its input into fixed-width symbols.
//!
//! Each output symbol carries `bits_per_symbol(base)` bits. Output is padded
//! towards a group boundary of `lcm(bits_per_symbol, 8)` bits, which for the
//! RFC 4648 alphabets is 8 bits (base16), 40 bits (base32) and 24 bits (base64).

pub mod decode;
pub mod encode;

use crate::{Error, Radix, RadixSpec};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAD: char = '=';

/// How many pad characters follow an encoding of `n` symbols.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    /// `(n * bits mod group) / bits` pad characters.
    #[default]
    Remainder,
    /// Pad characters up to the next group boundary, as RFC 4648 does.
    Complement,
    None,
}

/// Number of bits needed to write `base - 1` in binary; never less than one.
pub fn bits_per_symbol(base: u64) -> u32 {
    (u64::BITS - base.saturating_sub(1).leading_zeros()).max(1)
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn lcm(a: u32, b: u32) -> u32 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Bit length of one padding-aligned block.
pub fn group_bits(bits_per_symbol: u32) -> u32 {
    lcm(bits_per_symbol, 8)
}

#[derive(Clone, Debug)]
pub struct Codec {
    radix: Radix,
    bits: u32,
    group: u32,
    pad: char,
    padding: Padding,
}

impl Codec {
    /// Every `bits`-wide chunk must name a symbol, so the alphabet needs at
    /// least `2^bits` symbols even when the base is smaller.
    pub fn new(radix: Radix) -> Result<Self, Error> {
        let bits = bits_per_symbol(radix.base());
        let required = 1u64 << bits;
        let symbols = radix.alphabet().len();
        if (symbols as u64) < required {
            return Err(Error::UnsafeSymbolLength { symbols, required });
        }
        Ok(Self {
            radix,
            bits,
            group: group_bits(bits),
            pad: DEFAULT_PAD,
            padding: Padding::default(),
        })
    }

    pub fn from_spec(spec: &RadixSpec) -> Result<Self, Error> {
        Self::new(Radix::new(spec)?)
    }

    pub fn with_pad(self, pad: char) -> Self {
        Self { pad, ..self }
    }

    pub fn with_padding(self, padding: Padding) -> Self {
        Self { padding, ..self }
    }

    pub fn radix(&self) -> &Radix {
        &self.radix
    }

    pub fn bits_per_symbol(&self) -> u32 {
        self.bits
    }

    pub fn group_bits(&self) -> u32 {
        self.group
    }

    pub fn pad(&self) -> char {
        self.pad
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn pad_len(&self, symbols: usize) -> usize {
        let bits = u64::from(self.bits);
        let group = u64::from(self.group);
        let remainder = (symbols as u64 * bits) % group;
        let pad = match self.padding {
            Padding::Remainder => remainder / bits,
            Padding::Complement => ((group - remainder) % group) / bits,
            Padding::None => 0,
        };
        pad as usize
    }
}

/// Encodes `input` with the alphabet of `output`, padding with `pad`.
pub fn encode(output: &RadixSpec, input: impl AsRef<[u8]>, pad: char) -> Result<String, Error> {
    Ok(Codec::from_spec(output)?.with_pad(pad).encode(input))
}

/// Decodes `input` written in the alphabet of `output`, skipping every `pad`.
pub fn decode(output: &RadixSpec, input: &str, pad: char) -> Result<Vec<u8>, Error> {
    Codec::from_spec(output)?.with_pad(pad).decode(input)
}
