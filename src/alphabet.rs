//! Custom alphabet orderings.
//!
//! An [`Alphabet`] is a permutation of some symbol set, given as a
//! string of distinct characters. It defines the order in which
//! [`Trie::alphabetize`] walks children, so words come out sorted by
//! the permuted order instead of the standard one.
//!
//! [`Trie::alphabetize`]: crate::trie::Trie::alphabetize

use std::collections::HashMap;

use thiserror::Error;

/// The alphabet line was not a valid permutation.
#[derive(Debug, Error)]
pub enum AlphabetError {
    #[error("symbol {0:?} appears multiple times in the alphabet")]
    DuplicateSymbol(char),

    #[error("the alphabet is empty")]
    Empty,
}

/// An ordered set of distinct symbols.
pub struct Alphabet {
    symbols: Vec<char>,
    rank: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from its symbols in order. Fails on an empty
    /// string or a repeated symbol.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }

        let mut rank = HashMap::with_capacity(symbols.len());
        for (position, symbol) in symbols.iter().enumerate() {
            if rank.insert(*symbol, position).is_some() {
                return Err(AlphabetError::DuplicateSymbol(*symbol));
            }
        }

        Ok(Alphabet { symbols, rank })
    }

    /// The symbols in alphabet order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The position of a symbol, or `None` if it is not part of the
    /// alphabet.
    pub fn rank(&self, symbol: char) -> Option<usize> {
        self.rank.get(&symbol).copied()
    }

    /// Whether the symbol belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.rank.contains_key(&symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, AlphabetError};

    #[test]
    fn ranks_follow_the_given_order() {
        let alphabet = Alphabet::new("zyx").unwrap();

        assert_eq!(alphabet.rank('z'), Some(0));
        assert_eq!(alphabet.rank('y'), Some(1));
        assert_eq!(alphabet.rank('x'), Some(2));
        assert_eq!(alphabet.rank('a'), None);
        assert!(alphabet.contains('x'));
        assert!(!alphabet.contains('w'));
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        assert!(matches!(
            Alphabet::new("abca"),
            Err(AlphabetError::DuplicateSymbol('a'))
        ));
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        assert!(matches!(Alphabet::new(""), Err(AlphabetError::Empty)));
    }
}
