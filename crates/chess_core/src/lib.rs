pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod uci;
pub mod zobrist;

pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;
pub use uci::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Rules contract: what a move-selection engine may ask of the game
// =============================================================================

/// The rules engine as seen by a search.
///
/// Implementors own a single mutable position. `apply` and `unapply` must
/// nest strictly: every `unapply` reverses the most recent `apply`, and the
/// position after a balanced sequence is identical to the one before it.
/// Misuse is a programming error and panics.
pub trait Rules {
    /// All legal moves for the side to move, in a deterministic order.
    fn legal_moves(&mut self) -> Vec<Move>;

    /// Plays `mv` in place.
    fn apply(&mut self, mv: Move);

    /// Takes back the most recently applied move.
    fn unapply(&mut self);

    /// Checkmate, stalemate, or any draw.
    fn is_game_over(&mut self) -> bool;

    fn side_to_move(&self) -> Color;

    /// Occupant of square `sq` (0 = a1 .. 63 = h8).
    fn piece_at(&self, sq: u8) -> Option<Piece>;
}

// =============================================================================
// Engine trait: the single entry point UIs and protocol front ends call
// =============================================================================

/// Result of a move selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score of the chosen move from White's perspective; None when no search ran
    pub score: Option<i32>,
    /// Search depth in plies, 0 for a random pick
    pub depth: u8,
    /// Number of positions visited
    pub nodes: u64,
}

impl SearchResult {
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: None,
            depth: 0,
            nodes: 0,
        }
    }
}

/// Trait that move-selection engines implement.
///
/// The engine borrows the live game for the duration of one call and must
/// hand it back unchanged.
pub trait Engine: Send {
    fn choose_move(&mut self, game: &mut Game) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "tiered-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Set a UCI option. Returns true if the option was recognized and accepted.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
