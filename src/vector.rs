//! Vector types and the distance capability shared by the vector indexes

use crate::distance::cosine_distance;
use crate::error::{IndexError, Result};
use serde::{Deserialize, Serialize};

/// Something that can be placed in a vector index.
///
/// Implementors expose their components as a slice; the provided
/// [`distance`](Embedding::distance) checks dimensions before computing the
/// cosine distance, so mismatched vectors fail instead of producing a
/// plausible-looking number.
pub trait Embedding: Clone {
    /// Number of components.
    fn dimension(&self) -> usize;

    /// Components as a slice.
    fn as_slice(&self) -> &[f32];

    /// Cosine distance to `other`, `1 - cos(self, other)`.
    fn distance(&self, other: &Self) -> Result<f32> {
        if self.dimension() != other.dimension() {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }
        Ok(cosine_distance(self.as_slice(), other.as_slice()))
    }
}

// Fixed-width arrays can never disagree on dimension.
impl<const N: usize> Embedding for [f32; N] {
    fn dimension(&self) -> usize {
        N
    }

    fn as_slice(&self) -> &[f32] {
        self
    }

    fn distance(&self, other: &Self) -> Result<f32> {
        Ok(cosine_distance(self, other))
    }
}

/// A vector in n-dimensional space, dimension known only at runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    /// Create a new vector from a Vec<f32>
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }
}

impl Embedding for Vector {
    fn dimension(&self) -> usize {
        self.data.len()
    }

    fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_creation() {
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.dimension(), 3);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_vector_distance() {
        let v1 = Vector::new(vec![1.0, 0.0]);
        let v2 = Vector::new(vec![0.0, 1.0]);
        assert_relative_eq!(v1.distance(&v2).unwrap(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_dimension_mismatch() {
        let v1 = Vector::new(vec![1.0, 2.0]);
        let v2 = Vector::new(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            v1.distance(&v2),
            Err(IndexError::DimensionMismatch { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn test_fixed_width_array() {
        let a = [1.0f32, 0.0, 0.0, 0.0];
        let b = [0.0f32, 0.0, 0.0, 2.0];
        assert_eq!(a.dimension(), 4);
        assert_relative_eq!(a.distance(&b).unwrap(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(a.distance(&a).unwrap(), 0.0, epsilon = 1e-6);
    }
}
