//! Plain membership trie.
//!
//! No weights here: this structure only answers whether a string was
//! inserted as a full word or occurs as a prefix of one, and can list
//! its words in the order of a custom [`Alphabet`]. The weighted
//! autocomplete tree lives in [`tst`]; this one backs the `alphasort`
//! binary and simple membership checks.
//!
//! [`tst`]: crate::tst

use std::collections::HashMap;

use thiserror::Error;

use crate::alphabet::Alphabet;

/// Empty words have no path in a trie and are rejected at insertion.
#[derive(Debug, Error)]
#[error("empty words cannot be added to a trie")]
pub struct EmptyWord;

#[derive(Default)]
struct Node {
    exists: bool,
    links: HashMap<char, Node>,
}

/// Character trie over inserted words.
#[derive(Default)]
pub struct Trie {
    root: Node,
    words: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Trie::default()
    }

    /// Insert a word. Re-inserting an existing word is a no-op.
    pub fn insert(&mut self, word: &str) -> Result<(), EmptyWord> {
        if word.is_empty() {
            return Err(EmptyWord);
        }

        let mut node = &mut self.root;
        for letter in word.chars() {
            node = node.links.entry(letter).or_default();
        }

        if !node.exists {
            node.exists = true;
            self.words += 1;
        }

        Ok(())
    }

    /// Whether the exact word was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.descend(word).map_or(false, |node| node.exists)
    }

    /// Whether some inserted word starts with `prefix`. The empty
    /// prefix is a prefix of every word.
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.descend(prefix).is_some()
    }

    /// Number of distinct words inserted.
    pub fn words(&self) -> usize {
        self.words
    }

    fn descend(&self, path: &str) -> Option<&Node> {
        let mut node = &self.root;
        for letter in path.chars() {
            node = node.links.get(&letter)?;
        }
        Some(node)
    }

    /// All words reachable through the alphabet's symbols, in the
    /// alphabet's order. Words using a character outside the alphabet
    /// have no position in that order and are left out.
    pub fn alphabetize(&self, alphabet: &Alphabet) -> Vec<String> {
        let mut words = Vec::with_capacity(self.words);
        let mut current = String::new();
        Self::collect(&self.root, alphabet, &mut current, &mut words);
        words
    }

    fn collect(node: &Node, alphabet: &Alphabet, current: &mut String, words: &mut Vec<String>) {
        if node.exists {
            words.push(current.clone());
        }

        for symbol in alphabet.symbols() {
            if let Some(child) = node.links.get(symbol) {
                current.push(*symbol);
                Self::collect(child, alphabet, current, words);
                current.pop();
            }
        }
    }
}
