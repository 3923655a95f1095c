//! Edit distance (global alignment) between strings.
//!
//! Costs are unit for substitution, insertion and deletion, which makes this
//! the Levenshtein distance. It is a true metric, so the BK-tree may prune
//! with the triangle inequality.

/// Cost of aligning two equal characters.
pub const MATCH: usize = 0;
/// Cost of an insertion or deletion.
pub const GAP: usize = 1;
/// Cost of a substitution.
pub const MISMATCH: usize = 1;

/// Reusable scratch space for edit distance computations.
///
/// The recurrence only ever reads the previous row of the alignment table,
/// so two rows are kept instead of the full `(n + 1) x (m + 1)` matrix.
/// Hold on to a `Scorer` when scoring many pairs to avoid reallocating.
#[derive(Debug, Default, Clone)]
pub struct Scorer {
    prev: Vec<usize>,
    curr: Vec<usize>,
    rhs: Vec<char>,
}

impl Scorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the edit distance between `a` and `b`.
    pub fn score(&mut self, a: &str, b: &str) -> usize {
        self.rhs.clear();
        self.rhs.extend(b.chars());
        let m = self.rhs.len();

        self.prev.clear();
        self.prev.extend((0..=m).map(|j| GAP * j));
        self.curr.clear();
        self.curr.resize(m + 1, 0);

        for (i, ca) in a.chars().enumerate() {
            self.curr[0] = GAP * (i + 1);
            for j in 1..=m {
                let hor = self.prev[j] + GAP;
                let ver = self.curr[j - 1] + GAP;
                let diag = self.prev[j - 1]
                    + if ca == self.rhs[j - 1] { MATCH } else { MISMATCH };
                self.curr[j] = hor.min(ver).min(diag);
            }
            std::mem::swap(&mut self.prev, &mut self.curr);
        }

        self.prev[m]
    }
}

/// Compute the edit distance between `a` and `b` with a fresh buffer.
pub fn score(a: &str, b: &str) -> usize {
    Scorer::new().score(a, b)
}
