//! The weighted ternary search tree holding the dictionary.
//!
//! Each node carries one character and three owned branches: `left`
//! and `right` partition by character comparison at the same position,
//! `mid` continues to the next character of the same term. A node at
//! which a term ends stores the full term and its weight.
//!
//! On top of that every node caches `max_weight`: the heaviest weight
//! of any terminal in the whole subtree rooted at it. Every inserted
//! term passes through all its subtree ancestors during the descent,
//! so raising the cache on each visited node keeps the invariant. The
//! top-k traversal in [`searcher`] leans entirely on this bound to
//! prune subtrees.

use core::fmt;

use crate::ScoredWord;

pub mod searcher;

/// A single node of the tree.
///
/// Branches are lazily created and never removed; the tree is built
/// once and then only read.
#[derive(Debug)]
pub(crate) struct Node {
    /// The character this node stands for.
    letter: char,
    /// The complete term ending at this node, if any.
    entry: Option<ScoredWord>,
    /// Heaviest weight of any terminal in this node's subtree.
    max_weight: f64,
    left: Option<Box<Node>>,
    mid: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(letter: char, weight: f64) -> Self {
        Node {
            letter,
            entry: None,
            max_weight: weight,
            left: None,
            mid: None,
            right: None,
        }
    }

    pub(crate) fn entry(&self) -> Option<&ScoredWord> {
        self.entry.as_ref()
    }

    pub(crate) fn mid(&self) -> Option<&Node> {
        self.mid.as_deref()
    }

    pub(crate) fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// The three branches, for traversal.
    pub(crate) fn children(&self) -> [Option<&Node>; 3] {
        [self.left.as_deref(), self.mid.as_deref(), self.right.as_deref()]
    }
}

/// Ternary search tree over `(term, weight)` pairs.
///
/// The tree itself does not validate: the [`Autocomplete`] facade
/// guarantees that terms are non-empty and unique and weights finite
/// and non-negative before they get here.
///
/// [`Autocomplete`]: crate::Autocomplete
#[derive(Debug, Default)]
pub struct WeightedTst {
    root: Option<Box<Node>>,
    words: usize,
}

impl WeightedTst {
    /// Create an empty tree.
    pub fn new() -> Self {
        WeightedTst::default()
    }

    /// Insert a term with its weight, creating nodes on demand and
    /// raising `max_weight` on every node along the descent.
    pub fn insert(&mut self, word: &str, weight: f64) {
        let letters: Vec<char> = word.chars().collect();
        debug_assert!(!letters.is_empty(), "terms are validated as non-empty");

        Self::insert_rec(&mut self.root, &letters, word, weight);
        self.words += 1;
    }

    fn insert_rec(slot: &mut Option<Box<Node>>, letters: &[char], word: &str, weight: f64) {
        let letter = letters[0];
        let node = slot.get_or_insert_with(|| Box::new(Node::new(letter, weight)));

        if node.max_weight < weight {
            node.max_weight = weight;
        }

        if letter < node.letter {
            Self::insert_rec(&mut node.left, letters, word, weight);
        } else if letter > node.letter {
            Self::insert_rec(&mut node.right, letters, word, weight);
        } else if letters.len() > 1 {
            Self::insert_rec(&mut node.mid, &letters[1..], word, weight);
        } else {
            node.entry = Some(ScoredWord {
                word: word.to_string(),
                weight,
            });
        }
    }

    /// Descend to the node whose mid-chain spells exactly `prefix`.
    ///
    /// Returns `None` for the empty prefix and for prefixes absent
    /// from the tree; absence is a valid outcome, not an error.
    pub(crate) fn prefix_node(&self, prefix: &str) -> Option<&Node> {
        let letters: Vec<char> = prefix.chars().collect();
        if letters.is_empty() {
            return None;
        }

        Self::descend(self.root.as_deref(), &letters)
    }

    fn descend<'a>(node: Option<&'a Node>, letters: &[char]) -> Option<&'a Node> {
        let node = node?;
        let letter = letters[0];

        if letter < node.letter {
            Self::descend(node.left.as_deref(), letters)
        } else if letter > node.letter {
            Self::descend(node.right.as_deref(), letters)
        } else if letters.len() > 1 {
            Self::descend(node.mid.as_deref(), &letters[1..])
        } else {
            Some(node)
        }
    }

    /// The k heaviest terms starting with `prefix`, best first, tied
    /// weights in lexicographic order. Fewer than k exist means all of
    /// them; an absent prefix or `k == 0` means none.
    pub fn top_matches(&self, prefix: &str, k: usize) -> Vec<ScoredWord> {
        match self.prefix_node(prefix) {
            Some(node) => searcher::top_matches(node, k),
            None => Vec::new(),
        }
    }

    /// Number of terms inserted.
    pub fn words(&self) -> usize {
        self.words
    }

    /// Number of nodes used to represent the terms.
    pub fn node_count(&self) -> usize {
        fn count(node: Option<&Node>) -> usize {
            node.map_or(0, |node| {
                1 + node.children().into_iter().map(count).sum::<usize>()
            })
        }

        count(self.root.as_deref())
    }

    /// Height of the tree, counting all three branch kinds.
    pub fn height(&self) -> usize {
        fn depth(node: Option<&Node>) -> usize {
            node.map_or(0, |node| {
                1 + node
                    .children()
                    .into_iter()
                    .map(depth)
                    .max()
                    .unwrap_or(0)
            })
        }

        depth(self.root.as_deref())
    }
}

/// Display the tree in the graphviz format so that it can be easily
/// viewed by the user. Terminal nodes are marked with a star.
impl fmt::Display for WeightedTst {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "digraph G {{")?;

        if let Some(root) = self.root.as_deref() {
            let mut next_id = 0;
            Self::fmt_rec(f, root, 0, &mut next_id)?;
        }

        writeln!(f, "}}")
    }
}

impl WeightedTst {
    fn fmt_rec(f: &mut fmt::Formatter, node: &Node, id: usize, next_id: &mut usize) -> fmt::Result {
        let marker = if node.entry.is_some() { "*" } else { "" };
        writeln!(f, "    {} [label=\"{}{}\"];", id, node.letter, marker)?;

        for child in node.children().into_iter().flatten() {
            *next_id += 1;
            let child_id = *next_id;
            writeln!(f, "    {} -> {};", id, child_id)?;
            Self::fmt_rec(f, child, child_id, next_id)?;
        }

        Ok(())
    }
}
