//! Three-way outcome of a solved game.

use std::fmt;

/// Outcome for the full row under optimal play by both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The first mover finishes with the strictly larger total.
    FirstPlayerWins,
    /// The second mover finishes with the strictly larger total.
    SecondPlayerWins,
    /// Both totals are equal.
    Draw,
}

impl Verdict {
    /// Map the sign of the full-range differential to a verdict.
    pub fn from_differential(differential: i64) -> Self {
        match differential.cmp(&0) {
            std::cmp::Ordering::Greater => Verdict::FirstPlayerWins,
            std::cmp::Ordering::Less => Verdict::SecondPlayerWins,
            std::cmp::Ordering::Equal => Verdict::Draw,
        }
    }

    /// The verdict seen from the opponent's side: wins swap, a draw stays.
    pub fn flipped(self) -> Self {
        match self {
            Verdict::FirstPlayerWins => Verdict::SecondPlayerWins,
            Verdict::SecondPlayerWins => Verdict::FirstPlayerWins,
            Verdict::Draw => Verdict::Draw,
        }
    }
}

impl fmt::Display for Verdict {
    /// Emits the exact report lines, including the original's "Its a draw"
    /// spelling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Verdict::FirstPlayerWins => "Player 1 wins",
            Verdict::SecondPlayerWins => "Player 2 wins",
            Verdict::Draw => "Its a draw",
        };
        f.write_str(text)
    }
}
