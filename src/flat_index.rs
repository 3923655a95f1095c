//! Brute-force flat index — exact O(n) k-NN search

use crate::error::{IndexError, Result};
use crate::index::{SearchResult, VectorIndex};
use crate::vector::Embedding;

/// A flat (brute-force) index that computes distance to every stored vector.
///
/// Uses the same cosine distance as [`HnswGraph`](crate::hnsw::HnswGraph), so
/// it serves as ground truth when measuring HNSW recall.
#[derive(Debug)]
pub struct FlatIndex<V, P> {
    entries: Vec<(V, P)>,
    dimension: Option<usize>,
}

impl<V: Embedding, P> FlatIndex<V, P> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            dimension: None,
        }
    }

    /// Vector and payload stored under `id`.
    pub fn get(&self, id: usize) -> Option<(&V, &P)> {
        self.entries.get(id).map(|(v, p)| (v, p))
    }

    fn check_dimension(&self, vector: &V) -> Result<()> {
        match self.dimension {
            Some(expected) if vector.dimension() != expected => Err(IndexError::DimensionMismatch {
                expected,
                actual: vector.dimension(),
            }),
            _ => Ok(()),
        }
    }
}

impl<V: Embedding, P> Default for FlatIndex<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Embedding, P> VectorIndex<V, P> for FlatIndex<V, P> {
    fn add(&mut self, vector: V, payload: P) -> Result<usize> {
        self.check_dimension(&vector)?;
        self.dimension.get_or_insert(vector.dimension());
        self.entries.push((vector, payload));
        Ok(self.entries.len() - 1)
    }

    fn search(&self, query: &V, k: usize) -> Result<Vec<SearchResult<'_, P>>> {
        if self.entries.is_empty() {
            return Ok(Vec::new());
        }
        self.check_dimension(query)?;

        let mut scored = self
            .entries
            .iter()
            .enumerate()
            .map(|(id, (vector, _))| Ok((id, query.distance(vector)?)))
            .collect::<Result<Vec<(usize, f32)>>>()?;

        scored.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(k);
        Ok(scored
            .into_iter()
            .map(|(id, distance)| SearchResult {
                id,
                distance,
                payload: &self.entries[id].1,
            })
            .collect())
    }

    fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;

    #[test]
    fn test_flat_index_basic() {
        let mut index = FlatIndex::new();
        index.add(Vector::new(vec![1.0, 0.0, 0.0]), "a").unwrap();
        index.add(Vector::new(vec![0.0, 1.0, 0.0]), "b").unwrap();
        index.add(Vector::new(vec![1.0, 1.0, 0.0]), "c").unwrap();

        let results = index.search(&Vector::new(vec![1.0, 0.0, 0.0]), 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 0); // exact match
        assert!(results[0].distance < 1e-6);
        assert_eq!(*results[1].payload, "c");
    }

    #[test]
    fn test_flat_index_get() {
        let mut index = FlatIndex::new();
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        index.add(v.clone(), 7).unwrap();

        assert_eq!(index.get(0), Some((&v, &7)));
        assert_eq!(index.get(99), None);
    }

    #[test]
    fn test_flat_index_dimension_mismatch() {
        let mut index = FlatIndex::new();
        index.add(Vector::new(vec![1.0, 0.0]), ()).unwrap();
        assert!(index.add(Vector::new(vec![1.0]), ()).is_err());
        assert!(index.search(&Vector::new(vec![1.0, 0.0, 0.0]), 1).is_err());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_flat_index_empty() {
        let index: FlatIndex<[f32; 4], ()> = FlatIndex::new();
        assert!(index.search(&[1.0, 0.0, 0.0, 0.0], 3).unwrap().is_empty());
        assert!(index.is_empty());
    }
}
