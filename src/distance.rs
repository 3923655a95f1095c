//! Cosine distance over raw `f32` slices.
//!
//! The slices are assumed to have the same length; dimension checks
//! happen one level up, in [`Embedding::distance`](crate::vector::Embedding::distance).

/// Compute cosine distance (1 - cosine similarity).
///
/// If either side has zero norm the distance is defined as `0.0`: a zero
/// vector is treated as close to everything. The result lies in `[0, 2]`.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    let (mut dot, mut n1, mut n2) = (0.0f32, 0.0f32, 0.0f32);
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        n1 += x * x;
        n2 += y * y;
    }

    let den = n1.sqrt() * n2.sqrt();
    if den == 0.0 {
        return 0.0;
    }

    // Clamp to [-1, 1] to handle floating point errors
    let similarity = (dot / den).clamp(-1.0, 1.0);
    1.0 - similarity
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cosine_same_direction() {
        let d = cosine_distance(&[1.0, 0.0, 0.0], &[1.0, 0.0, 0.0]);
        assert_relative_eq!(d, 0.0, epsilon = 1e-6);
        assert_relative_eq!(cosine_distance(&[1.0, 2.0], &[2.0, 4.0]), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let d = cosine_distance(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
        assert_relative_eq!(d, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cosine_opposite() {
        let d = cosine_distance(&[1.0, 0.0, 0.0], &[-1.0, 0.0, 0.0]);
        assert_relative_eq!(d, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cosine_zero_norm_is_zero() {
        // Degenerate case: zero vectors are at distance 0 from everything,
        // including vectors pointing in opposite directions to each other.
        assert_eq!(cosine_distance(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_distance(&[0.0, 0.0], &[-1.0, 0.0]), 0.0);
        assert_eq!(cosine_distance(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_cosine_symmetric() {
        let a = [0.3, -1.2, 4.0];
        let b = [2.0, 0.5, -0.7];
        assert_relative_eq!(cosine_distance(&a, &b), cosine_distance(&b, &a), epsilon = 1e-6);
    }
}
