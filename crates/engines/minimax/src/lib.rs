//! Minimax Chess Opponent
//!
//! Picks the move an automated opponent plays: a uniformly random legal
//! move on the lowest tier, alpha-beta minimax over material on the others.
//! Everything goes through the `Rules` contract, so any rules engine that
//! can apply and take back moves can be searched.

pub mod config;
pub mod error;
mod eval;
pub mod policy;
mod search;
pub mod worker;

use chess_core::{Engine, Game, Move, Rules, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

pub use config::EngineConfig;
pub use error::{ConfigError, ParseDifficultyError, WorkerLost};
pub use eval::{evaluate, value_of};
pub use policy::{Difficulty, SearchPlan, HIGH_DEPTH, MEDIUM_DEPTH};
pub use search::{minimax, pick_best_move, INFINITY};
pub use worker::{spawn_best_move, MoveTicket};

/// Chooses a move for the side to move, or `None` if it has none.
///
/// The position is searched in place and is identical afterwards.
pub fn best_move<R: Rules + ?Sized>(rules: &mut R, difficulty: Difficulty) -> Option<Move> {
    best_move_with_rng(rules, difficulty, &mut rand::thread_rng())
}

/// Like [`best_move`], drawing the random tier's choice from `rng`.
pub fn best_move_with_rng<R, G>(rules: &mut R, difficulty: Difficulty, rng: &mut G) -> Option<Move>
where
    R: Rules + ?Sized,
    G: Rng + ?Sized,
{
    select_move(rules, difficulty, rng).best_move
}

/// Runs the plan for `difficulty` and reports what it found.
pub fn select_move<R, G>(rules: &mut R, difficulty: Difficulty, rng: &mut G) -> SearchResult
where
    R: Rules + ?Sized,
    G: Rng + ?Sized,
{
    let result = match difficulty.plan() {
        SearchPlan::Random => {
            let moves = rules.legal_moves();
            SearchResult {
                best_move: moves.choose(rng).copied(),
                score: None,
                depth: 0,
                nodes: 0,
            }
        }
        SearchPlan::SearchToDepth(depth) => {
            let mut nodes = 0;
            let found = pick_best_move(rules, depth, &mut nodes);
            SearchResult {
                best_move: found.map(|(mv, _)| mv),
                score: found.map(|(_, score)| score),
                depth,
                nodes,
            }
        }
    };

    match (result.best_move, result.score) {
        (Some(mv), Some(score)) => info!(
            "{difficulty}: {mv} (score {score}, depth {}, {} nodes)",
            result.depth, result.nodes
        ),
        (Some(mv), None) => info!("{difficulty}: {mv} (random)"),
        (None, _) => info!("{difficulty}: no legal move"),
    }
    result
}

/// Minimax opponent with a fixed difficulty.
///
/// The random tier draws from its own `StdRng`; with a seed, a fresh game
/// replays the same random choices.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    difficulty: Difficulty,
    seed: Option<u64>,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_seed(difficulty, None)
    }

    pub fn with_seed(difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self {
            difficulty,
            seed,
            rng: make_rng(seed),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_seed(config.difficulty, config.seed)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl Engine for MinimaxEngine {
    fn choose_move(&mut self, game: &mut Game) -> SearchResult {
        select_move(game, self.difficulty, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.rng = make_rng(self.seed);
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if !name.eq_ignore_ascii_case("difficulty") {
            return false;
        }
        match value.parse() {
            Ok(difficulty) => {
                self.difficulty = difficulty;
                true
            }
            Err(_) => false,
        }
    }
}
