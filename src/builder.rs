use crate::{GameSolver, Strategy, TakeEndsGame};

pub struct SolverBuilder {
    game: TakeEndsGame,
    strategy: Option<Strategy>,
}

impl SolverBuilder {
    pub fn new(game: TakeEndsGame) -> Self {
        Self {
            game,
            strategy: None,
        }
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn build(self) -> GameSolver {
        match self.strategy {
            Some(strategy) => GameSolver::with_strategy(self.game, strategy),
            None => GameSolver::new(self.game),
        }
    }
}
