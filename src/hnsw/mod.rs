//! HNSW (Hierarchical Navigable Small World) index module.

pub mod graph;
pub mod neighbor_queue;
pub mod params;

pub use graph::HnswGraph;
pub use params::HnswParams;

use crate::error::Result;
use crate::index::{SearchResult, VectorIndex};
use crate::vector::Embedding;

impl<V: Embedding, P> VectorIndex<V, P> for HnswGraph<V, P> {
    fn add(&mut self, vector: V, payload: P) -> Result<usize> {
        self.insert(vector, payload)
    }

    fn search(&self, query: &V, k: usize) -> Result<Vec<SearchResult<'_, P>>> {
        HnswGraph::search(self, query, k)
    }

    fn dimension(&self) -> Option<usize> {
        HnswGraph::dimension(self)
    }

    fn len(&self) -> usize {
        HnswGraph::len(self)
    }
}
