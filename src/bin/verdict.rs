//! Driver: read one instance from stdin, print the verdict line.
//!
//! Input: a count `n` followed by `n` whitespace-separated integers.
//! Output: exactly one of "Player 1 wins", "Player 2 wins", "Its a draw".

use std::io;

use take_ends::{input::read_instance, GameSolver};

fn main() {
    let game = match read_instance(io::stdin().lock()) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("verdict: {err}");
            std::process::exit(2);
        }
    };

    let (_differential, verdict) = GameSolver::new(game).run();
    println!("{verdict}");
}
