//! BK-tree node and the traversals shared by both tree variants.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::edit_distance::Scorer;
use crate::set::Set;

/// Outcome of placing a term in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// A new leaf was attached (or the tree was empty).
    New,
    /// The term existed but was tombstoned; it is live again.
    Revived,
    /// The term is already live; the insertion was dropped.
    Present,
}

/// A tree node. Each child is keyed by its exact edit distance to `term`,
/// so a parent holds at most one child per distance.
#[derive(Debug, Clone)]
pub(crate) struct BkNode<P> {
    pub(crate) term: String,
    pub(crate) payload: P,
    pub(crate) children: HashMap<usize, BkNode<P>>,
    pub(crate) deleted: bool,
}

impl<P> BkNode<P> {
    fn new(term: String, payload: P) -> Self {
        Self {
            term,
            payload,
            children: HashMap::new(),
            deleted: false,
        }
    }

    /// Walk the distance-keyed path for `term` and attach it where the path
    /// ends. An exact match keeps its existing payload unless it was
    /// tombstoned.
    pub(crate) fn place(
        root: &mut Option<BkNode<P>>,
        term: String,
        payload: P,
        scorer: &mut Scorer,
    ) -> Placement {
        let mut curr = match root {
            Some(node) => node,
            None => {
                *root = Some(BkNode::new(term, payload));
                return Placement::New;
            }
        };

        loop {
            let k = scorer.score(&curr.term, &term);
            if k == 0 {
                if curr.deleted {
                    curr.deleted = false;
                    curr.payload = payload;
                    return Placement::Revived;
                }
                return Placement::Present;
            }
            match curr.children.entry(k) {
                Entry::Occupied(e) => curr = e.into_mut(),
                Entry::Vacant(e) => {
                    e.insert(BkNode::new(term, payload));
                    return Placement::New;
                }
            }
        }
    }

    /// True if a live node lies within `fuzziness` of `term`.
    pub(crate) fn contains(&self, term: &str, fuzziness: usize, scorer: &mut Scorer) -> bool {
        let d0 = scorer.score(&self.term, term);
        if d0 <= fuzziness && !self.deleted {
            return true;
        }
        let (low, high) = band(d0, fuzziness);
        self.children
            .iter()
            .any(|(&k, child)| k >= low && k <= high && child.contains(term, fuzziness, scorer))
    }

    /// Add the payload of every live node within `fuzziness` of `term` to
    /// `matches`. The accumulator is shared by the whole recursion.
    pub(crate) fn collect(
        &self,
        term: &str,
        fuzziness: usize,
        scorer: &mut Scorer,
        matches: &mut Set<P>,
    ) where
        P: Clone + Eq + Hash,
    {
        let d0 = scorer.score(&self.term, term);
        if d0 <= fuzziness && !self.deleted {
            matches.add(self.payload.clone());
        }
        let (low, high) = band(d0, fuzziness);
        for (&k, child) in &self.children {
            if k >= low && k <= high {
                child.collect(term, fuzziness, scorer, matches);
            }
        }
    }

    /// Tombstone the exact match for `term`, following the insertion path.
    /// Returns `false` if the term is absent or already tombstoned.
    pub(crate) fn tombstone(&mut self, term: &str, scorer: &mut Scorer) -> bool {
        let mut curr = self;
        loop {
            let k = scorer.score(&curr.term, term);
            if k == 0 {
                if curr.deleted {
                    return false;
                }
                curr.deleted = true;
                tracing::debug!(term, "tombstoned term");
                return true;
            }
            match curr.children.get_mut(&k) {
                Some(child) => curr = child,
                None => return false,
            }
        }
    }
}

/// Children outside `[d0 - f, d0 + f]` cannot hold a match, by the triangle
/// inequality.
fn band(d0: usize, fuzziness: usize) -> (usize, usize) {
    (d0.saturating_sub(fuzziness), d0.saturating_add(fuzziness))
}

/// Breadth-first iterator over the live nodes of a tree.
pub(crate) struct LiveNodes<'a, P> {
    queue: VecDeque<&'a BkNode<P>>,
}

impl<'a, P> LiveNodes<'a, P> {
    pub(crate) fn new(root: Option<&'a BkNode<P>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, P> Iterator for LiveNodes<'a, P> {
    type Item = &'a BkNode<P>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.queue.pop_front() {
            self.queue.extend(node.children.values());
            if !node.deleted {
                return Some(node);
            }
        }
        None
    }
}
