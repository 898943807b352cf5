//! Optimal-differential solver for the two-ended take-away game.
//!
//! The dynamic program is over subranges `[i, j]` of the row:
//! - `D(i, i)   = a[i]` (the sole mover takes the last element),
//! - `D(i, i+1) = |a[i] - a[i+1]|` (the mover takes the larger of the pair),
//! - `D(i, j)   = max(a[i] - D(i+1, j), a[j] - D(i, j-1))` otherwise.
//!
//! `D(i, j)` is the best achievable "my total minus opponent's total" for
//! whoever moves on `[i, j]`, assuming optimal play from both sides. Each
//! subrange is referenced by at most two larger subranges, so one pass over
//! the O(n²) states suffices.
//!
//! Two evaluation orders are provided and produce identical tables:
//! - [`Strategy::BottomUp`] (default): iterate by increasing subrange
//!   length. No recursion, so no stack-depth concern for long rows.
//! - [`Strategy::TopDown`]: memoized recursion in the shape of the original
//!   formulation; recursion depth is bounded by the row length.
//!
//! Values are `i64` throughout; overflow on adversarially large inputs is
//! not guarded.

use crate::game::TakeEndsGame;
use crate::memo::MemoTable;
use crate::verdict::Verdict;

/// Evaluation order for filling the interval table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Iterate subranges by increasing length.
    #[default]
    BottomUp,
    /// Memoized recursion from the full range down.
    TopDown,
}

/// Solver for a fixed [`TakeEndsGame`] instance.
///
/// Typical usage:
/// ```
/// use take_ends::{GameSolver, TakeEndsGame, Verdict};
///
/// let game = TakeEndsGame::new(vec![3, 7]);
/// let solver = GameSolver::new(game);
/// let (differential, verdict) = solver.run();
/// assert_eq!(differential, 4);
/// assert_eq!(verdict, Verdict::FirstPlayerWins);
/// ```
pub struct GameSolver {
    game: TakeEndsGame,
    strategy: Strategy,
}

impl GameSolver {
    /// Create a solver with the default bottom-up strategy.
    pub fn new(game: TakeEndsGame) -> Self {
        Self::with_strategy(game, Strategy::default())
    }

    /// Create a solver with an explicit evaluation strategy.
    pub fn with_strategy(game: TakeEndsGame, strategy: Strategy) -> Self {
        Self { game, strategy }
    }

    /// Expose immutable reference to the underlying game.
    pub fn game(&self) -> &TakeEndsGame {
        &self.game
    }

    /// Return the configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Solve the full range and map the differential to its verdict.
    ///
    /// An empty row has differential 0 and is reported as a draw.
    pub fn run(&self) -> (i64, Verdict) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("solve", n = self.game.len(), strategy = ?self.strategy);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let differential = self.differential();
        (differential, Verdict::from_differential(differential))
    }

    /// Optimal differential `D(0, n-1)` for the full row (0 when empty).
    pub fn differential(&self) -> i64 {
        if self.game.is_empty() {
            return 0;
        }
        let table = self.table();
        table
            .get(0, self.game.len() - 1)
            .expect("full range must be computed")
    }

    /// Fill and return the complete interval table.
    ///
    /// Both strategies compute every valid subrange: the bottom-up order by
    /// construction, the top-down order because `(0, n-1)` transitively
    /// references the whole triangle.
    pub fn table(&self) -> MemoTable {
        let n = self.game.len();
        let mut table = MemoTable::new(n);
        if n == 0 {
            return table;
        }
        match self.strategy {
            Strategy::BottomUp => self.fill_bottom_up(&mut table),
            Strategy::TopDown => {
                self.fill_top_down(&mut table, 0, n - 1);
            }
        }
        debug_assert!(table.is_full());
        table
    }

    fn fill_bottom_up(&self, table: &mut MemoTable) {
        let a = self.game.values();
        let n = a.len();

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill_bottom_up", n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        for (i, &value) in a.iter().enumerate() {
            table.set(i, i, value);
        }
        for i in 0..n.saturating_sub(1) {
            table.set(i, i + 1, (a[i] - a[i + 1]).abs());
        }
        for len in 3..=n {
            for i in 0..=n - len {
                let j = i + len - 1;
                let inner_left = table
                    .get(i + 1, j)
                    .expect("shorter subrange must precede longer one");
                let inner_right = table
                    .get(i, j - 1)
                    .expect("shorter subrange must precede longer one");
                table.set(i, j, (a[i] - inner_left).max(a[j] - inner_right));
            }
        }
    }

    fn fill_top_down(&self, table: &mut MemoTable, i: usize, j: usize) -> i64 {
        if let Some(value) = table.get(i, j) {
            return value;
        }
        let a = self.game.values();
        let value = if i == j {
            a[i]
        } else if j - i == 1 {
            (a[i] - a[j]).abs()
        } else {
            let left = a[i] - self.fill_top_down(table, i + 1, j);
            let right = a[j] - self.fill_top_down(table, i, j - 1);
            left.max(right)
        };
        table.set(i, j, value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{GameSolver, Strategy};
    use crate::game::TakeEndsGame;
    use crate::verdict::Verdict;

    fn solve(values: Vec<i64>) -> i64 {
        GameSolver::new(TakeEndsGame::new(values)).differential()
    }

    #[test]
    fn singleton_differential_is_the_element() {
        assert_eq!(solve(vec![5]), 5);
        assert_eq!(solve(vec![-5]), -5);
        assert_eq!(solve(vec![0]), 0);
    }

    #[test]
    fn pair_differential_is_absolute_gap() {
        assert_eq!(solve(vec![3, 7]), 4);
        assert_eq!(solve(vec![7, 3]), 4);
        assert_eq!(solve(vec![-2, -9]), 7);
    }

    #[test]
    fn empty_row_is_a_draw() {
        let (differential, verdict) = GameSolver::new(TakeEndsGame::new(Vec::new())).run();
        assert_eq!(differential, 0);
        assert_eq!(verdict, Verdict::Draw);
    }

    #[test]
    fn strategies_fill_identical_tables() {
        let values = vec![4, 1, 2, 10, -3, 6];
        let n = values.len();
        let bottom_up = GameSolver::with_strategy(
            TakeEndsGame::new(values.clone()),
            Strategy::BottomUp,
        )
        .table();
        let top_down =
            GameSolver::with_strategy(TakeEndsGame::new(values), Strategy::TopDown).table();
        for i in 0..n {
            for j in i..n {
                assert_eq!(bottom_up.get(i, j), top_down.get(i, j), "at ({i},{j})");
            }
        }
    }

    #[test]
    fn top_down_visits_the_whole_triangle() {
        let solver = GameSolver::with_strategy(
            TakeEndsGame::new(vec![1, 2, 3, 4, 5]),
            Strategy::TopDown,
        );
        assert!(solver.table().is_full());
    }

    #[test]
    fn taking_the_larger_end_is_not_always_optimal() {
        // Greedy takes the larger end 8 first and ends up down 3; optimal
        // play takes 7, conceding 8 but collecting 15 on the return move:
        // D = (7 + 15) - (8 + 3) = 11.
        assert_eq!(solve(vec![8, 15, 3, 7]), 11);
    }
}
