//! Autocomplete facade over the weighted tree.
//!
//! Construction takes the parallel term/weight collections, validates
//! them eagerly and builds three read-only structures: the tree for
//! prefix queries, a hash map for exact weight lookup, and the global
//! descending ranking that answers the empty prefix without touching
//! the tree at all. After that every query is pure and the instance
//! can be shared freely.

use std::collections::HashMap;

use thiserror::Error;

use crate::tst::WeightedTst;
use crate::ScoredWord;

/// A construction precondition was violated. Each variant corresponds
/// to one precondition; the first violation encountered aborts the
/// whole construction.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("terms and weights differ in length ({terms} terms, {weights} weights)")]
    LengthMismatch { terms: usize, weights: usize },

    #[error("empty terms cannot be indexed")]
    EmptyTerm,

    #[error("term {term:?} has a negative weight ({weight})")]
    NegativeWeight { term: String, weight: f64 },

    #[error("term {term:?} has a non-finite weight")]
    NonFiniteWeight { term: String },

    #[error("duplicate term {0:?}")]
    DuplicateTerm(String),
}

/// Prefix autocomplete over a fixed dictionary of weighted terms.
#[derive(Debug)]
pub struct Autocomplete {
    tree: WeightedTst,
    weights: HashMap<String, f64>,
    /// Every entry, ranked best first. Serves the empty prefix, which
    /// matches the whole dictionary.
    ranking: Vec<ScoredWord>,
}

impl Autocomplete {
    /// Build the autocomplete structures from parallel collections.
    ///
    /// Fails if the collections differ in length, if any term is empty
    /// or repeated, or if any weight is negative or non-finite. No
    /// partially built instance survives a failure.
    pub fn new(terms: Vec<String>, weights: Vec<f64>) -> Result<Self, BuildError> {
        if terms.len() != weights.len() {
            return Err(BuildError::LengthMismatch {
                terms: terms.len(),
                weights: weights.len(),
            });
        }

        let mut tree = WeightedTst::new();
        let mut weight_map = HashMap::with_capacity(terms.len());
        let mut ranking = Vec::with_capacity(terms.len());

        for (term, weight) in terms.into_iter().zip(weights) {
            if term.is_empty() {
                return Err(BuildError::EmptyTerm);
            }
            if !weight.is_finite() {
                return Err(BuildError::NonFiniteWeight { term });
            }
            if weight < 0.0 {
                return Err(BuildError::NegativeWeight { term, weight });
            }
            if weight_map.contains_key(&term) {
                return Err(BuildError::DuplicateTerm(term));
            }

            tree.insert(&term, weight);
            weight_map.insert(term.clone(), weight);
            ranking.push(ScoredWord { word: term, weight });
        }

        ranking.sort();

        Ok(Autocomplete {
            tree,
            weights: weight_map,
            ranking,
        })
    }

    /// The weight of `term`, or `0.0` if it is not in the dictionary.
    pub fn weight_of(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// The single best match for `prefix`, or `None` when nothing
    /// starts with it.
    pub fn top_match(&self, prefix: &str) -> Option<String> {
        self.top_matches(prefix, 1).into_iter().next()
    }

    /// The at most `k` heaviest terms starting with `prefix`, in
    /// descending weight order, tied weights lexicographic.
    ///
    /// The empty prefix matches every term, so it is answered from the
    /// precomputed ranking instead of the tree.
    pub fn top_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        if prefix.is_empty() {
            return self
                .ranking
                .iter()
                .take(k)
                .map(|entry| entry.word.clone())
                .collect();
        }

        self.tree
            .top_matches(prefix, k)
            .into_iter()
            .map(|entry| entry.word)
            .collect()
    }

    /// Number of terms in the dictionary.
    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}
