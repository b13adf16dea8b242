use crate::Error;
use std::collections::HashMap;

/// Ordered set of unique symbols; a symbol's position is its digit value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet {
    encode: Vec<char>,
    decode: HashMap<char, usize>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self, Error> {
        let mut encode = Vec::new();
        let mut decode = HashMap::new();

        for (index, symbol) in symbols.chars().enumerate() {
            if let Some(&first) = decode.get(&symbol) {
                return Err(Error::DupeSymbolValues {
                    symbol,
                    first,
                    second: index,
                });
            }
            encode.push(symbol);
            decode.insert(symbol, index);
        }

        Ok(Self { encode, decode })
    }

    pub fn symbol(&self, position: usize) -> Option<char> {
        self.encode.get(position).copied()
    }

    pub fn position(&self, symbol: char) -> Option<usize> {
        self.decode.get(&symbol).copied()
    }

    /// Like [`Alphabet::position`], reporting `index` (the symbol's place in the input) on failure.
    pub fn decode(&self, symbol: char, index: usize) -> Result<usize, Error> {
        self.position(symbol).ok_or(Error::InvalidInput { symbol, index })
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.decode.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.encode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encode.is_empty()
    }

    pub fn symbols(&self) -> String {
        self.encode.iter().collect()
    }
}
