//! Bounded top-k retrieval over the weighted tree.
//!
//! The traversal keeps a candidate set of at most k entries and walks
//! the prefix's subtree best-bound-first. A full set turns every
//! node's cached `max_weight` into a pruning test: a subtree whose
//! bound is strictly below the worst kept weight cannot place any term
//! in the answer and is skipped whole. A subtree whose bound merely
//! ties the worst kept weight is still visited, because an
//! equal-weight term can win on the lexicographic tie-break.

use std::collections::BinaryHeap;

use super::Node;
use crate::ScoredWord;

/// Candidate set of at most `capacity` entries.
///
/// `ScoredWord`'s ordering ranks better entries as smaller, so the
/// heap's maximum is the worst kept candidate: `peek` is the eviction
/// victim and the pruning floor in one.
struct TopSet {
    capacity: usize,
    heap: BinaryHeap<ScoredWord>,
}

impl TopSet {
    fn new(capacity: usize) -> Self {
        TopSet {
            capacity,
            heap: BinaryHeap::new(),
        }
    }

    /// Insert the candidate if it belongs in the set, evicting the
    /// current worst when full. One atomic operation, one comparator.
    fn offer(&mut self, candidate: &ScoredWord) {
        if self.heap.len() < self.capacity {
            self.heap.push(candidate.clone());
        } else if let Some(worst) = self.heap.peek() {
            if candidate < worst {
                self.heap.pop();
                self.heap.push(candidate.clone());
            }
        }
    }

    /// The weight no candidate may rank below, once the set is full.
    /// An unfilled set has no floor: nothing can be pruned yet.
    fn floor(&self) -> Option<f64> {
        if self.heap.len() < self.capacity {
            None
        } else {
            self.heap.peek().map(|worst| worst.weight)
        }
    }

    /// Emit best first; ties come out in lexicographic order because
    /// the same `Ord` that kept the set also sorts it.
    fn into_sorted(self) -> Vec<ScoredWord> {
        self.heap.into_sorted_vec()
    }
}

/// The at most k heaviest terms in the subtree hanging off `node`
/// (itself included if a term ends there), best first.
pub(crate) fn top_matches(node: &Node, k: usize) -> Vec<ScoredWord> {
    if k == 0 {
        return Vec::new();
    }

    let mut best = TopSet::new(k);

    if let Some(entry) = node.entry() {
        best.offer(entry);
    }
    visit(node.mid(), &mut best);

    best.into_sorted()
}

fn visit(node: Option<&Node>, best: &mut TopSet) {
    let Some(node) = node else {
        return;
    };

    if let Some(entry) = node.entry() {
        best.offer(entry);
    }

    // Heaviest bound first: fills the set quickly and tightens the
    // floor before the lighter subtrees are considered.
    let mut children = node.children();
    children.sort_by(|a, b| {
        let bound = |child: &Option<&Node>| child.map_or(f64::NEG_INFINITY, Node::max_weight);
        bound(b).total_cmp(&bound(a))
    });

    for child in children.into_iter().flatten() {
        if let Some(floor) = best.floor() {
            if child.max_weight() < floor {
                continue;
            }
        }

        visit(Some(child), best);
    }
}

#[cfg(test)]
mod tests {
    use crate::tst::WeightedTst;

    fn tree(entries: &[(&str, f64)]) -> WeightedTst {
        let mut tree = WeightedTst::new();
        for (word, weight) in entries {
            tree.insert(word, *weight);
        }
        tree
    }

    fn matches(tree: &WeightedTst, prefix: &str, k: usize) -> Vec<String> {
        tree.top_matches(prefix, k)
            .into_iter()
            .map(|entry| entry.word)
            .collect()
    }

    #[test]
    fn tied_weights_beat_a_lighter_word() {
        let tree = tree(&[("cat", 5.0), ("car", 10.0), ("cart", 10.0), ("dog", 1.0)]);

        // Both weight-10 words must come back; "cat" never displaces one.
        assert_eq!(matches(&tree, "ca", 2), ["car", "cart"]);
        assert_eq!(matches(&tree, "ca", 3), ["car", "cart", "cat"]);
        assert_eq!(matches(&tree, "d", 5), ["dog"]);
    }

    #[test]
    fn k_zero_and_absent_prefix_are_empty() {
        let tree = tree(&[("cat", 5.0), ("car", 10.0)]);

        assert!(matches(&tree, "ca", 0).is_empty());
        assert!(matches(&tree, "xyz", 3).is_empty());
    }

    #[test]
    fn prefix_that_is_itself_a_term_is_included() {
        let tree = tree(&[("car", 10.0), ("cart", 2.0), ("carton", 7.0)]);

        assert_eq!(matches(&tree, "car", 2), ["car", "carton"]);
        assert_eq!(matches(&tree, "car", 10), ["car", "carton", "cart"]);
    }

    #[test]
    fn results_are_sorted_by_descending_weight() {
        let tree = tree(&[
            ("sad", 1.0),
            ("same", 8.0),
            ("sap", 3.0),
            ("saturn", 21.0),
            ("save", 13.0),
            ("saw", 2.0),
        ]);

        assert_eq!(matches(&tree, "sa", 4), ["saturn", "save", "same", "sap"]);
    }

    #[test]
    fn fewer_matches_than_k_returns_all() {
        let tree = tree(&[("alpha", 4.0), ("beta", 2.0)]);

        assert_eq!(matches(&tree, "al", 10), ["alpha"]);
    }

    #[test]
    fn all_equal_weights_come_out_lexicographically() {
        let tree = tree(&[
            ("peach", 3.0),
            ("pear", 3.0),
            ("pea", 3.0),
            ("peak", 3.0),
            ("peat", 3.0),
        ]);

        assert_eq!(matches(&tree, "pea", 3), ["pea", "peach", "peak"]);
        assert_eq!(
            matches(&tree, "pea", 10),
            ["pea", "peach", "peak", "pear", "peat"]
        );
    }

    #[test]
    fn repeated_queries_are_identical() {
        let tree = tree(&[
            ("node", 7.0),
            ("note", 7.0),
            ("nose", 7.0),
            ("north", 7.0),
            ("nothing", 1.0),
        ]);

        let first = matches(&tree, "no", 3);
        for _ in 0..10 {
            assert_eq!(matches(&tree, "no", 3), first);
        }
    }

    #[test]
    fn zero_weight_words_are_retrievable() {
        let tree = tree(&[("ghost", 0.0), ("gold", 5.0)]);

        assert_eq!(matches(&tree, "g", 2), ["gold", "ghost"]);
        assert_eq!(matches(&tree, "gh", 1), ["ghost"]);
    }

    #[test]
    fn pruning_never_drops_a_deep_heavy_word() {
        // A light chain of prefix terms leading to the heaviest word:
        // every intermediate subtree must stay open until the bound
        // proves otherwise.
        let tree = tree(&[
            ("a", 1.0),
            ("ab", 1.0),
            ("abc", 1.0),
            ("abcd", 1.0),
            ("abcde", 100.0),
            ("ax", 50.0),
            ("ay", 60.0),
        ]);

        assert_eq!(matches(&tree, "a", 3), ["abcde", "ay", "ax"]);
    }

    #[test]
    fn larger_dictionary_agrees_with_exhaustive_ranking() {
        let entries: Vec<(String, f64)> = (0..26)
            .flat_map(|a| (0..26).map(move |b| (a, b)))
            .map(|(a, b)| {
                let word = format!(
                    "{}{}",
                    char::from(b'a' + a as u8),
                    char::from(b'a' + b as u8)
                );
                // Collides on purpose so ties are exercised.
                let weight = f64::from((a * b) % 17);
                (word, weight)
            })
            .collect();

        let mut tree = WeightedTst::new();
        for (word, weight) in &entries {
            tree.insert(word, *weight);
        }

        for prefix in ["a", "m", "z"] {
            let mut expected: Vec<crate::ScoredWord> = entries
                .iter()
                .filter(|(word, _)| word.starts_with(prefix))
                .map(|(word, weight)| crate::ScoredWord {
                    word: word.clone(),
                    weight: *weight,
                })
                .collect();
            expected.sort();
            let expected: Vec<String> =
                expected.into_iter().take(5).map(|entry| entry.word).collect();

            assert_eq!(matches(&tree, prefix, 5), expected, "prefix {:?}", prefix);
        }
    }
}
