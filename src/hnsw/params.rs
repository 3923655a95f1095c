//! Tuning parameters for the HNSW graph.

use serde::{Deserialize, Serialize};

use crate::error::{IndexError, Result};

pub const DEFAULT_M: usize = 16;
pub const DEFAULT_EF_CONSTRUCTION: usize = 200;
pub const DEFAULT_EF_SEARCH: usize = 50;
pub const DEFAULT_MAX_LAYERS: usize = 16;

/// Configuration parameters for the HNSW index.
///
/// Every field has a default, so a JSON document only needs the fields it
/// wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HnswParams {
    /// Neighbors selected for a new node at each of its layers.
    pub m: usize,
    /// Neighbor-list size above which a node is pruned back to its nearest.
    pub m_max: usize,
    /// Beam width while inserting.
    pub ef_construction: usize,
    /// Default beam width while searching.
    pub ef_search: usize,
    /// Level generation factor, usually 1 / ln(m).
    pub ml: f64,
    /// Maximum number of layers.
    pub max_layers: usize,
    /// Seed for level generation. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for HnswParams {
    fn default() -> Self {
        Self::new(DEFAULT_M, DEFAULT_EF_CONSTRUCTION, DEFAULT_EF_SEARCH)
    }
}

impl HnswParams {
    pub fn new(m: usize, ef_construction: usize, ef_search: usize) -> Self {
        Self {
            m,
            m_max: 2 * m,
            ef_construction,
            ef_search,
            ml: 1.0 / (m.max(2) as f64).ln(),
            max_layers: DEFAULT_MAX_LAYERS,
            seed: None,
        }
    }

    pub fn with_m_max(mut self, m_max: usize) -> Self {
        self.m_max = m_max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.m == 0 {
            return Err(IndexError::InvalidParams("m must be at least 1".to_string()));
        }
        if self.m_max < self.m {
            return Err(IndexError::InvalidParams(format!(
                "m_max ({}) must not be smaller than m ({})",
                self.m_max, self.m
            )));
        }
        if self.ef_construction == 0 {
            return Err(IndexError::InvalidParams(
                "ef_construction must be at least 1".to_string(),
            ));
        }
        if self.max_layers == 0 {
            return Err(IndexError::InvalidParams(
                "max_layers must be at least 1".to_string(),
            ));
        }
        if !(self.ml.is_finite() && self.ml > 0.0) {
            return Err(IndexError::InvalidParams(format!(
                "ml must be a positive finite number, got {}",
                self.ml
            )));
        }
        Ok(())
    }

    /// Parse and validate parameters from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| IndexError::SerializationError(e.to_string()))?;
        // Derived deserializers also accept arrays, filling fields by position
        if !value.is_object() {
            return Err(IndexError::SerializationError(
                "HnswParams: JSON object expected".to_string(),
            ));
        }
        let params: HnswParams = serde_json::from_value(value)
            .map_err(|e| IndexError::SerializationError(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }
}
