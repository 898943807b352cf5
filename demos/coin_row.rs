//! Example: solve a small coin row and show the interval table.
//!
//! Run with:
//! `cargo run --example coin_row`

use take_ends::{GameSolver, TakeEndsGame};

fn main() {
    let values = vec![4, 1, 2, 10];
    let game = TakeEndsGame::new(values.clone());
    let solver = GameSolver::new(game);

    let table = solver.table();
    println!("Row: {values:?}");
    println!("Optimal differentials D(i, j):");
    for i in 0..values.len() {
        for j in i..values.len() {
            if let Some(d) = table.get(i, j) {
                println!("  D({i}, {j}) = {d}");
            }
        }
    }

    let (differential, verdict) = solver.run();
    println!("Full-range differential: {differential}");
    println!("{verdict}");
}
