//! Index trait for pluggable vector search backends

use crate::error::Result;
use crate::vector::Embedding;

/// One hit of a k-NN query.
#[derive(Debug, PartialEq)]
pub struct SearchResult<'a, P> {
    /// Internal ID assigned at insertion.
    pub id: usize,
    pub distance: f32,
    pub payload: &'a P,
}

/// A vector index that supports insertion and k-NN search.
///
/// IDs are dense `usize` values handed out in insertion order.
pub trait VectorIndex<V: Embedding, P> {
    /// Add a vector with its payload, returning the assigned ID.
    fn add(&mut self, vector: V, payload: P) -> Result<usize>;

    /// Search for the `k` nearest neighbors of `query`, sorted by distance ascending.
    fn search(&self, query: &V, k: usize) -> Result<Vec<SearchResult<'_, P>>>;

    /// Dimension fixed by the first insertion.
    fn dimension(&self) -> Option<usize>;

    /// The number of vectors in this index.
    fn len(&self) -> usize;

    /// Whether the index is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
