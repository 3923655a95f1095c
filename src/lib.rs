//! # simindex
//!
//! Similarity-search indexes built from scratch in Rust.
//!
//! This library provides:
//! - Edit distance over strings and cosine distance over vectors
//! - BK-trees for fuzzy string membership and fuzzy payload lookup
//! - An HNSW graph for approximate k-nearest-neighbor search
//! - A brute-force flat index for exact search
//!
//! None of the indexes lock internally. Mutation takes `&mut self`; wrap an
//! index in a `RwLock` to share it between a writer and concurrent readers.
//!
//! ## Example
//!
//! ```rust
//! use simindex::{BkTree, HnswGraph, HnswParams};
//!
//! let mut words = BkTree::with_fuzziness(1);
//! words.extend(["kitten", "sitten", "bitten"]);
//! assert!(words.has("mitten"));
//!
//! let mut graph = HnswGraph::new(HnswParams::default().with_seed(7)).unwrap();
//! graph.insert([1.0f32, 0.0, 0.0], "x").unwrap();
//! graph.insert([0.0f32, 1.0, 0.0], "y").unwrap();
//! let results = graph.search(&[0.9, 0.1, 0.0], 1).unwrap();
//! assert_eq!(*results[0].payload, "x");
//! ```

pub mod bktree;
pub mod boolean_index;
pub mod distance;
pub mod edit_distance;
pub mod error;
pub mod flat_index;
pub mod hnsw;
pub mod index;
pub mod set;
pub mod vector;

pub use bktree::{BkTree, ContentBkTree, DEFAULT_FUZZINESS};
pub use boolean_index::BooleanIndex;
pub use error::{IndexError, Result};
pub use flat_index::FlatIndex;
pub use hnsw::{HnswGraph, HnswParams};
pub use index::{SearchResult, VectorIndex};
pub use set::Set;
pub use vector::{Embedding, Vector};
