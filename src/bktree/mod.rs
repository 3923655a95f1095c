//! BK-tree indexes over strings under edit distance.
//!
//! [`BkTree`] answers fuzzy membership ("is there a term within `f` edits of
//! this one?") and round-trips to a JSON array of terms. [`ContentBkTree`]
//! attaches a payload to every term and returns the payloads of all matches.
//!
//! Deletion is a tombstone: nodes are never removed, because children hang
//! off their parent by exact distance and removing a parent would orphan them.

mod codec;
mod node;

use std::hash::Hash;

use crate::edit_distance::Scorer;
use crate::set::Set;

use node::{BkNode, LiveNodes, Placement};

/// Fuzziness used by a fresh [`BkTree`] and after decoding one from JSON.
pub const DEFAULT_FUZZINESS: usize = 2;

/// Fuzzy membership index over strings.
#[derive(Debug, Clone)]
pub struct BkTree {
    root: Option<BkNode<()>>,
    fuzziness: usize,
    len: usize,
}

impl BkTree {
    pub fn new() -> Self {
        Self::with_fuzziness(DEFAULT_FUZZINESS)
    }

    pub fn with_fuzziness(fuzziness: usize) -> Self {
        Self {
            root: None,
            fuzziness,
            len: 0,
        }
    }

    /// Maximum edit distance at which [`has`](Self::has) reports a hit.
    pub fn fuzziness(&self) -> usize {
        self.fuzziness
    }

    pub fn set_fuzziness(&mut self, fuzziness: usize) {
        self.fuzziness = fuzziness;
    }

    /// Number of live terms.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add `term`. Returns `true` if the term became live, `false` if it was
    /// already present. Adding a deleted term brings it back.
    pub fn add(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        match BkNode::place(&mut self.root, term, (), &mut Scorer::new()) {
            Placement::New => {
                self.len += 1;
                true
            }
            Placement::Revived => {
                tracing::debug!(len = self.len + 1, "revived tombstoned term");
                self.len += 1;
                true
            }
            Placement::Present => false,
        }
    }

    /// True if a live term lies within the tree's fuzziness of `term`.
    pub fn has(&self, term: &str) -> bool {
        self.has_within(term, self.fuzziness)
    }

    /// True if a live term lies within `fuzziness` edits of `term`.
    pub fn has_within(&self, term: &str, fuzziness: usize) -> bool {
        match &self.root {
            Some(root) => root.contains(term, fuzziness, &mut Scorer::new()),
            None => false,
        }
    }

    /// Delete the exact term. Returns `true` only if it was live before the
    /// call; deleting an absent or already deleted term is a no-op.
    pub fn del(&mut self, term: &str) -> bool {
        let removed = match &mut self.root {
            Some(root) => root.tombstone(term, &mut Scorer::new()),
            None => false,
        };
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Iterate over live terms, breadth first.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        LiveNodes::new(self.root.as_ref()).map(|node| node.term.as_str())
    }
}

impl Default for BkTree {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>> Extend<S> for BkTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for term in iter {
            self.add(term);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for BkTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = BkTree::new();
        tree.extend(iter);
        tree
    }
}

/// BK-tree mapping each term to a payload.
///
/// Inserting a term that is already live drops the new payload: exact
/// duplicates collapse onto the first insertion.
#[derive(Debug, Clone)]
pub struct ContentBkTree<P> {
    root: Option<BkNode<P>>,
    len: usize,
}

impl<P> ContentBkTree<P> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `term` with `payload`. Returns `false` (and drops `payload`) if
    /// the term is already live.
    pub fn insert(&mut self, term: impl Into<String>, payload: P) -> bool {
        match BkNode::place(&mut self.root, term.into(), payload, &mut Scorer::new()) {
            Placement::New | Placement::Revived => {
                self.len += 1;
                true
            }
            Placement::Present => false,
        }
    }

    /// Delete the exact term, hiding its payload from later searches.
    pub fn del(&mut self, term: &str) -> bool {
        let removed = match &mut self.root {
            Some(root) => root.tombstone(term, &mut Scorer::new()),
            None => false,
        };
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Iterate over live `(term, payload)` pairs, breadth first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &P)> {
        LiveNodes::new(self.root.as_ref()).map(|node| (node.term.as_str(), &node.payload))
    }
}

impl<P: Clone + Eq + Hash> ContentBkTree<P> {
    /// Payloads of every live term within `fuzziness` edits of `term`.
    pub fn search(&self, term: &str, fuzziness: usize) -> Set<P> {
        let mut matches = Set::new();
        if let Some(root) = &self.root {
            root.collect(term, fuzziness, &mut Scorer::new(), &mut matches);
        }
        matches
    }
}

impl<P> Default for ContentBkTree<P> {
    fn default() -> Self {
        Self::new()
    }
}
