//! Exact solver for the two-ended take-away game.
//!
//! Two players face a row of integers. On each turn the mover removes one
//! element from either end of the remaining row and adds it to their score.
//! Both play optimally, each maximizing their own total minus the opponent's.
//! This crate computes the optimal score *differential* for the first mover
//! and maps its sign to a three-way verdict.
//!
//! ## Core idea
//! 1. Wrap the input row in a [`TakeEndsGame`] instance.
//! 2. Let [`GameSolver`] fill the interval table `D(i, j)` — the optimal
//!    differential for the mover on subrange `[i, j]` — either bottom-up by
//!    increasing subrange length (default) or by memoized recursion.
//! 3. Read off `D(0, n-1)` and its [`Verdict`].
//!
//! Both evaluation orders visit O(n²) subranges with O(1) work each.
//!
//! ## Quick start
//! ```
//! use take_ends::{GameSolver, TakeEndsGame};
//!
//! let game = TakeEndsGame::new(vec![4, 1, 2, 10]);
//! let (differential, verdict) = GameSolver::new(game).run();
//! assert_eq!(differential, 7);
//! assert_eq!(verdict.to_string(), "Player 1 wins");
//! ```

pub mod builder;
pub mod game;
pub mod input;
pub mod memo;
pub mod solver;
pub mod verdict;

pub use crate::builder::SolverBuilder;
pub use crate::game::TakeEndsGame;
pub use crate::memo::MemoTable;
pub use crate::solver::{GameSolver, Strategy};
pub use crate::verdict::Verdict;
