use super::Codec;
use crate::Error;

impl Codec {
    /// Pad characters are skipped wherever they appear and trailing bits that
    /// do not fill a byte are dropped, so malformed padding is not an error.
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, Error> {
        let bits = self.bits;
        let alphabet = self.radix.alphabet();

        let mut output = Vec::with_capacity(input.len() * bits as usize / 8);
        let mut accumulator: u64 = 0;
        let mut pending: u32 = 0;

        for (index, symbol) in input.chars().enumerate() {
            if symbol == self.pad {
                continue;
            }
            let value = alphabet.decode(symbol, index)? as u64;
            if value >> bits != 0 {
                return Err(Error::InvalidInput { symbol, index });
            }
            accumulator = (accumulator << bits) | value;
            pending += bits;
            while pending >= 8 {
                pending -= 8;
                output.push((accumulator >> pending) as u8);
                accumulator &= (1 << pending) - 1;
            }
        }

        Ok(output)
    }

    /// Accepts only the exact text [`Codec::encode`] produces for the decoded bytes.
    pub fn decode_strict(&self, input: &str) -> Result<Vec<u8>, Error> {
        let output = self.decode(input)?;
        if self.encode(&output) != input {
            return Err(Error::InvalidPadding);
        }
        Ok(output)
    }
}
