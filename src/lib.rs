//! Weighted prefix autocomplete over a static dictionary.
//!
//! The dictionary is a set of unique `(term, weight)` pairs loaded once
//! at construction. A query asks for the k highest-weighted terms
//! starting with a prefix, and gets them back in descending weight
//! order without a scan of the whole dictionary: the terms live in a
//! ternary search tree whose nodes cache the best weight reachable
//! below them, and the top-k traversal uses that bound to skip every
//! subtree that cannot beat the answers it already holds.
//!
//! [`Autocomplete`] is the entry point. The tree itself lives in
//! [`tst`], the dictionary file loader in [`dictionary`], and a plain
//! membership trie with custom-alphabet ordering (used by the
//! `alphasort` binary) in [`trie`] and [`alphabet`].

pub mod alphabet;
pub mod autocomplete;
pub mod dictionary;
pub mod trie;
pub mod tst;

pub use autocomplete::{Autocomplete, BuildError};

use core::cmp::Ordering;

/// A dictionary term together with its weight.
///
/// This type carries the one ordering the whole crate ranks results
/// by: heavier first, equal weights broken by the lexicographically
/// smaller term. "Less" means "ranks earlier", so sorting a slice
/// ascending yields the emission order. Every structure that orders
/// candidates (the bounded top-k set, its eviction, the final output,
/// the facade's global ranking) goes through this single `Ord` so that
/// tied weights can never be kept under one rule and emitted under
/// another.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    /// The full term as inserted.
    pub word: String,
    /// The weight associated with the term. Always finite and
    /// non-negative once past construction validation.
    pub weight: f64,
}

impl Eq for ScoredWord {}

impl PartialOrd for ScoredWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredWord {
    fn cmp(&self, other: &Self) -> Ordering {
        // Order by weight (decreasing) then by word (lexicographic).
        // total_cmp keeps this a strict total order over any f64.
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| self.word.cmp(&other.word))
    }
}
