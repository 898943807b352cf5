//! Game instance: the immutable row of values.
//!
//! A `TakeEndsGame` corresponds to a *fixed* instance: the sequence is read
//! once and never mutated during solving. Subranges `[i, j]` of this row are
//! the states of the dynamic program.

/// One instance of the two-ended take-away game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TakeEndsGame {
    values: Vec<i64>,
}

impl TakeEndsGame {
    /// Wrap a row of values. Empty rows are allowed and solve to a draw.
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// Number of elements in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The underlying row.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// The game with every value negated.
    ///
    /// Under the optimal-differential recurrence this negates `D(i, j)` for
    /// every subrange, which swaps the win verdicts and fixes draws.
    pub fn negated(&self) -> Self {
        Self {
            values: self.values.iter().map(|v| -v).collect(),
        }
    }
}

impl From<Vec<i64>> for TakeEndsGame {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}
