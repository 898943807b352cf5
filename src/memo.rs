//! Interval memo table used by the solver.
//!
//! Each entry holds the optimal differential `D(i, j)` for a subrange
//! `[i, j]` once it has been computed. Presence is tracked explicitly with
//! `Option` rather than a magic sentinel value, so no legitimate result can
//! collide with "uncomputed".

/// Dense upper-triangular table of computed differentials.
///
/// Addressed by `(i, j)` with `i <= j < n`. Entries start out `None` and are
/// written at most once; a computed entry is the true optimal differential
/// for its subrange and subsequent lookups return it unchanged.
#[derive(Clone, Debug)]
pub struct MemoTable {
    n: usize,
    entries: Vec<Option<i64>>,
}

impl MemoTable {
    /// Create an empty table for a row of `n` elements.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            entries: vec![None; n * n],
        }
    }

    /// Row length this table was sized for.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Look up `D(i, j)`, or `None` if not yet computed.
    ///
    /// # Panics
    /// Panics if `i > j` or `j >= n`.
    pub fn get(&self, i: usize, j: usize) -> Option<i64> {
        self.entries[self.index(i, j)]
    }

    /// Record `D(i, j)`.
    ///
    /// # Panics
    /// Panics if the subrange is out of bounds, or if the entry was already
    /// computed with a different value.
    pub fn set(&mut self, i: usize, j: usize, value: i64) {
        let idx = self.index(i, j);
        match self.entries[idx] {
            None => self.entries[idx] = Some(value),
            Some(existing) => assert_eq!(
                existing, value,
                "memo entry ({i},{j}) rewritten with a different value"
            ),
        }
    }

    /// Number of computed entries.
    pub fn computed(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Returns true if every valid subrange `[i, j]` has been computed.
    pub fn is_full(&self) -> bool {
        self.computed() == self.n * (self.n + 1) / 2
    }

    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i <= j && j < self.n,
            "subrange ({i},{j}) out of bounds for n={}",
            self.n
        );
        i * self.n + j
    }
}
