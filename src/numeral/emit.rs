use crate::Radix;

/// Writes `value` in `radix` by repeated division. Zero has no digits and
/// produces the empty string.
pub fn emit(radix: &Radix, mut value: u64) -> String {
    let alphabet = radix.alphabet();
    let base = radix.base();
    let mut digits = Vec::new();
    while value > 0 {
        // the alphabet holds at least `base` symbols, so the lookup always hits
        if let Some(symbol) = alphabet.symbol((value % base) as usize) {
            digits.push(symbol);
        }
        value /= base;
    }
    digits.iter().rev().collect()
}
