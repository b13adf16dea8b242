use super::Codec;

impl Codec {
    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let bits = self.bits;
        let alphabet = self.radix.alphabet();

        let mut output = String::with_capacity((input.len() * 8).div_ceil(bits as usize) + 8);
        let mut accumulator: u64 = 0;
        let mut pending: u32 = 0;
        let mut symbols = 0;

        let mut push = |output: &mut String, value: u64| {
            // construction guarantees a symbol for every `bits`-wide value
            if let Some(symbol) = alphabet.symbol(value as usize) {
                output.push(symbol);
            }
            symbols += 1;
        };

        for &value in input {
            accumulator = (accumulator << 8) | u64::from(value);
            pending += 8;
            while pending >= bits {
                pending -= bits;
                push(&mut output, accumulator >> pending);
                accumulator &= (1 << pending) - 1;
            }
        }
        if pending > 0 {
            push(&mut output, accumulator << (bits - pending));
        }

        for _ in 0..self.pad_len(symbols) {
            output.push(self.pad);
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use crate::{bit_codec::Padding, Codec, Preset, RadixSpec};

    fn codec(preset: Preset) -> Codec {
        Codec::from_spec(&preset.radix()).unwrap()
    }

    #[test]
    fn encode() {
        let base64 = codec(Preset::Base64);
        assert_eq!(base64.encode(b"Man"), "TWFu");
        assert_eq!(base64.encode(b"M"), "TQ==");
        assert_eq!(base64.encode(b"Ma"), "TWE===");
        assert_eq!(base64.encode(b""), "");
        assert_eq!(base64.encode([0x14, 0xfb, 0x9c, 0x03, 0xd9, 0x7e]), "FPucA9l+");
        assert_eq!(codec(Preset::Base64Url).encode([0x14, 0xfb, 0x9c, 0x03, 0xd9, 0x7e]), "FPucA9l-");
        assert_eq!(codec(Preset::Base16).encode(b"foobar"), "666F6F626172");
        assert_eq!(codec(Preset::Base32).encode(b"foobar"), "MZXW6YTBOI==");
        assert_eq!(codec(Preset::Binary).encode([0xa5]), "10100101");
    }

    #[test]
    fn encode_complement() {
        let base64 = codec(Preset::Base64).with_padding(Padding::Complement);
        assert_eq!(base64.encode(b"f"), "Zg==");
        assert_eq!(base64.encode(b"fo"), "Zm8=");
        assert_eq!(base64.encode(b"foo"), "Zm9v");
        assert_eq!(base64.encode(b"foob"), "Zm9vYg==");
        assert_eq!(base64.encode(b"fooba"), "Zm9vYmE=");
        assert_eq!(base64.encode(b"foobar"), "Zm9vYmFy");

        let base32 = codec(Preset::Base32).with_padding(Padding::Complement);
        assert_eq!(base32.encode(b"f"), "MY======");
        assert_eq!(base32.encode(b"fo"), "MZXQ====");
        assert_eq!(base32.encode(b"foo"), "MZXW6===");
        assert_eq!(base32.encode(b"foob"), "MZXW6YQ=");
        assert_eq!(base32.encode(b"fooba"), "MZXW6YTB");
        assert_eq!(base32.encode(b"foobar"), "MZXW6YTBOI======");

        let base32hex = codec(Preset::Base32Hex).with_padding(Padding::Complement);
        assert_eq!(base32hex.encode(b"f"), "CO======");
        assert_eq!(base32hex.encode(b"foobar"), "CPNMUOJ1E8======");
    }

    #[test]
    fn encode_custom() {
        let dna = Codec::from_spec(&RadixSpec::symbols_only("ACGT")).unwrap();
        assert_eq!(dna.encode([0b0001_1011]), "ACGT");
        let base64 = codec(Preset::Base64).with_pad('.');
        assert_eq!(base64.encode(b"M"), "TQ..");
        let unpadded = codec(Preset::Base64).with_padding(Padding::None);
        assert_eq!(unpadded.encode(b"M"), "TQ");
    }
}
