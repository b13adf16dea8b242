use crate::{error::MAX_SAFE_INTEGER, Error, Radix};

/// Reads `value` as a big-endian numeral in `radix`.
///
/// Digits are weighted from the rightmost one (`base^0`) leftwards. The result
/// may not exceed `2^53 - 1`; leading zero digits are free no matter how long
/// the numeral is. An empty numeral reads as zero.
pub fn parse(radix: &Radix, value: &str) -> Result<u64, Error> {
    let alphabet = radix.alphabet();
    let base = radix.base();
    let length = value.chars().count();

    let mut total: u64 = 0;
    let mut weight = Some(1u64);

    for (offset, symbol) in value.chars().rev().enumerate() {
        let digit = alphabet.decode(symbol, length - 1 - offset)? as u64;
        if digit != 0 {
            let term = weight
                .and_then(|weight| weight.checked_mul(digit))
                .ok_or(Error::InputTooLarge)?;
            total = total
                .checked_add(term)
                .filter(|&total| total <= MAX_SAFE_INTEGER)
                .ok_or(Error::InputTooLarge)?;
        }
        // once the weight passes the ceiling any nonzero digit overflows
        weight = weight
            .and_then(|weight| weight.checked_mul(base))
            .filter(|&weight| weight <= MAX_SAFE_INTEGER);
    }

    Ok(total)
}
