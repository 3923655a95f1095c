//! HNSW graph — core data structures and algorithms.
//!
//! Implements the Hierarchical Navigable Small World graph from:
//! "Efficient and robust approximate nearest neighbor search using
//!  Hierarchical Navigable Small World graphs" (Malkov & Yashunin, 2016/2018).
//!
//! Neighbor selection and pruning keep the closest candidates by distance;
//! the diversity heuristic from the paper is not used.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::{IndexError, Result};
use crate::index::SearchResult;
use crate::vector::Embedding;

use super::neighbor_queue::{Candidates, Neighbor, Results};
use super::params::HnswParams;

/// A node in the HNSW graph.
#[derive(Debug, Clone)]
struct HnswNode<V, P> {
    vector: V,
    payload: P,
    /// neighbors[l] holds the IDs of this node's neighbors at layer l.
    neighbors: Vec<Vec<usize>>,
    /// The highest layer this node lives in.
    level: usize,
}

/// The HNSW graph structure.
///
/// Nodes live in an arena and refer to each other by index. Edges are kept
/// bidirectional: whenever pruning drops `v` from `u`'s list, `u` is dropped
/// from `v`'s list as well.
#[derive(Debug)]
pub struct HnswGraph<V, P> {
    nodes: Vec<HnswNode<V, P>>,
    /// Entry point node ID (highest-level node).
    entry_point: Option<usize>,
    /// Current maximum level in the graph.
    max_level: usize,
    /// Fixed by the first insertion.
    dimension: Option<usize>,
    params: HnswParams,
    /// RNG for level generation.
    rng: StdRng,
}

impl<V: Embedding, P> HnswGraph<V, P> {
    pub fn new(params: HnswParams) -> Result<Self> {
        params.validate()?;
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            nodes: Vec::new(),
            entry_point: None,
            max_level: 0,
            dimension: None,
            params,
            rng,
        })
    }

    pub fn params(&self) -> &HnswParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    pub fn entry_point(&self) -> Option<usize> {
        self.entry_point
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Vector and payload stored under `id`.
    pub fn get(&self, id: usize) -> Option<(&V, &P)> {
        self.nodes.get(id).map(|n| (&n.vector, &n.payload))
    }

    /// Level of the node stored under `id`.
    pub fn level(&self, id: usize) -> Option<usize> {
        self.nodes.get(id).map(|n| n.level)
    }

    /// Neighbor IDs of `id` at `layer`, if the node reaches that layer.
    pub fn neighbors(&self, id: usize, layer: usize) -> Option<&[usize]> {
        self.nodes
            .get(id)
            .and_then(|n| n.neighbors.get(layer))
            .map(Vec::as_slice)
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

    /// Generate a random level for a new node: floor(-ln(U) * ml), U in (0, 1].
    fn random_level(&mut self) -> usize {
        let u: f64 = 1.0 - self.rng.gen::<f64>();
        let level = (-u.ln() * self.params.ml).floor() as usize;
        level.min(self.params.max_layers - 1)
    }

    fn distance(&self, query: &V, id: usize) -> Result<f32> {
        query.distance(&self.nodes[id].vector)
    }

    /// SEARCH-LAYER: Algorithm 2 from the HNSW paper.
    ///
    /// Beam search of width `ef` over a single layer, starting from `ep`.
    /// Returns the closest nodes found, sorted by ascending distance.
    fn search_layer(
        &self,
        query: &V,
        ep: &[usize],
        ef: usize,
        layer: usize,
    ) -> Result<Vec<Neighbor>> {
        let mut visited = HashSet::new();
        let mut candidates = Candidates::new();
        let mut results = Results::new(ef);

        for &id in ep {
            if visited.insert(id) {
                let n = Neighbor::new(id, self.distance(query, id)?);
                candidates.push(n);
                results.push(n);
            }
        }

        while let Some(c) = candidates.pop_nearest() {
            // Nothing left in the frontier can improve the result
            if let Some(farthest) = results.farthest() {
                if c.distance > farthest.distance {
                    break;
                }
            }

            let Some(adjacent) = self.nodes[c.id].neighbors.get(layer) else {
                continue;
            };
            for &e in adjacent {
                if !visited.insert(e) {
                    continue;
                }
                let dist = self.distance(query, e)?;
                let closer = results.farthest().map_or(true, |f| dist < f.distance);
                // Below ef results, farther nodes are admitted too
                if closer || !results.is_full() {
                    let n = Neighbor::new(e, dist);
                    candidates.push(n);
                    results.push(n);
                }
            }
        }

        Ok(results.into_sorted_vec())
    }

    /// Greedy width-1 descent from the entry point through layers
    /// `top..=bottom`, returning the closest node found at `bottom`.
    fn descend(&self, query: &V, entry: usize, top: usize, bottom: usize) -> Result<usize> {
        let mut ep = entry;
        for layer in (bottom..=top).rev() {
            if let Some(n) = self.search_layer(query, &[ep], 1, layer)?.first() {
                ep = n.id;
            }
        }
        Ok(ep)
    }

    fn connect(&mut self, a: usize, b: usize, layer: usize) {
        for (from, to) in [(a, b), (b, a)] {
            let list = &mut self.nodes[from].neighbors[layer];
            if !list.contains(&to) {
                list.push(to);
            }
        }
    }

    /// Shrink `id`'s neighbor list at `layer` to its `m_max` nearest,
    /// dropping the reverse edges of the neighbors that were cut.
    fn prune(&mut self, id: usize, layer: usize) -> Result<()> {
        let node = &self.nodes[id];
        let mut scored = node.neighbors[layer]
            .iter()
            .map(|&nid| -> Result<Neighbor> {
                Ok(Neighbor::new(nid, node.vector.distance(&self.nodes[nid].vector)?))
            })
            .collect::<Result<Vec<_>>>()?;
        scored.sort();

        let dropped = scored.split_off(self.params.m_max.min(scored.len()));
        self.nodes[id].neighbors[layer] = scored.into_iter().map(|n| n.id).collect();
        for n in &dropped {
            self.nodes[n.id].neighbors[layer].retain(|&x| x != id);
        }
        tracing::trace!(node = id, layer, dropped = dropped.len(), "pruned neighbor list");
        Ok(())
    }

    /// INSERT: Algorithm 1 from the HNSW paper. Returns the new node's ID.
    pub fn insert(&mut self, vector: V, payload: P) -> Result<usize> {
        self.check_dimension(&vector)?;
        let id = self.nodes.len();

        let entry_point = match self.entry_point {
            Some(ep) => ep,
            None => {
                self.dimension = Some(vector.dimension());
                self.nodes.push(HnswNode {
                    vector,
                    payload,
                    neighbors: vec![Vec::new()],
                    level: 0,
                });
                self.entry_point = Some(id);
                self.max_level = 0;
                return Ok(id);
            }
        };

        let level = self.random_level();
        let top = self.max_level;
        let query = vector.clone();

        // Phase 1: greedy descent from the top layer down to level + 1
        let mut ep = vec![entry_point];
        if top > level {
            ep = vec![self.descend(&query, entry_point, top, level + 1)?];
        }

        self.nodes.push(HnswNode {
            vector,
            payload,
            neighbors: vec![Vec::new(); level + 1],
            level,
        });

        // Phase 2: connect at layers min(level, top) down to 0
        for layer in (0..=level.min(top)).rev() {
            let nearest = self.search_layer(&query, &ep, self.params.ef_construction, layer)?;
            let selected: Vec<usize> = nearest.iter().take(self.params.m).map(|n| n.id).collect();

            for &neighbor in &selected {
                self.connect(id, neighbor, layer);
            }
            for &neighbor in &selected {
                if self.nodes[neighbor].neighbors[layer].len() > self.params.m_max {
                    self.prune(neighbor, layer)?;
                }
            }

            ep = nearest.into_iter().map(|n| n.id).collect();
        }

        if level > self.max_level {
            tracing::debug!(node = id, level, previous = self.max_level, "new entry point");
            self.entry_point = Some(id);
            self.max_level = level;
        }

        Ok(id)
    }

    /// Insert a batch of vectors in order, returning their IDs.
    pub fn build_batch(&mut self, items: impl IntoIterator<Item = (V, P)>) -> Result<Vec<usize>> {
        items
            .into_iter()
            .map(|(vector, payload)| self.insert(vector, payload))
            .collect()
    }

    /// SEARCH: Algorithm 5 from the HNSW paper.
    ///
    /// Search for the k nearest neighbors, using a beam of max(ef, k) at layer 0.
    /// An empty graph yields no results.
    pub fn search_knn(
        &self,
        query: &V,
        k: usize,
        ef: usize,
    ) -> Result<Vec<SearchResult<'_, P>>> {
        let Some(entry_point) = self.entry_point else {
            return Ok(Vec::new());
        };
        self.check_dimension(query)?;
        if k == 0 {
            return Ok(Vec::new());
        }

        let ep = if self.max_level > 0 {
            self.descend(query, entry_point, self.max_level, 1)?
        } else {
            entry_point
        };

        let mut nearest = self.search_layer(query, &[ep], ef.max(k), 0)?;
        nearest.truncate(k);
        Ok(nearest
            .into_iter()
            .map(|n| SearchResult {
                id: n.id,
                distance: n.distance,
                payload: &self.nodes[n.id].payload,
            })
            .collect())
    }

    /// Search with the configured `ef_search`.
    pub fn search(&self, query: &V, k: usize) -> Result<Vec<SearchResult<'_, P>>> {
        self.search_knn(query, k, self.params.ef_search)
    }
}

impl<V, P> HnswGraph<V, P>
where
    V: Embedding + Sync,
    P: Sync,
{
    /// Run independent queries in parallel. Queries only read the graph.
    pub fn search_batch(
        &self,
        queries: &[V],
        k: usize,
    ) -> Result<Vec<Vec<SearchResult<'_, P>>>> {
        queries.par_iter().map(|q| self.search(q, k)).collect()
    }
}

impl<V: Embedding, P> Default for HnswGraph<V, P> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            entry_point: None,
            max_level: 0,
            dimension: None,
            params: HnswParams::default(),
            rng: StdRng::from_entropy(),
        }
    }
}
