//! A live game: one position mutated in place, plus the undo stack and
//! hash history that make/unmake and draw detection need.

use std::fmt;

use crate::Rules;
use crate::board::{Position, Undo};
use crate::error::FenError;
use crate::movegen::{has_legal_move, legal_moves_into};
use crate::types::{Color, Move, Piece};
use crate::zobrist::key_after_move;

/// Why a game has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
    ThreefoldRepetition,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameOutcome::Stalemate => f.write_str("stalemate"),
            GameOutcome::FiftyMoveRule => f.write_str("draw by fifty-move rule"),
            GameOutcome::InsufficientMaterial => f.write_str("draw by insufficient material"),
            GameOutcome::ThreefoldRepetition => f.write_str("draw by threefold repetition"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    pos: Position,
    undo_stack: Vec<(Move, Undo)>,
    /// One hash per position reached, starting with the initial one.
    history: Vec<u64>,
    buf: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Position::startpos())
    }
}

impl Game {
    pub fn new(pos: Position) -> Self {
        let history = vec![pos.position_hash()];
        Self {
            pos,
            undo_stack: Vec::new(),
            history,
            buf: Vec::with_capacity(64),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::new)
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Number of moves currently applied on top of the initial position.
    pub fn applied_moves(&self) -> usize {
        self.undo_stack.len()
    }

    /// Plays a move for good. It stays on the undo stack, so repetition
    /// history survives and `unapply` can still take it back.
    pub fn play(&mut self, mv: Move) {
        self.apply(mv);
    }

    /// How many times the current position has occurred in this game.
    pub fn repetition_count(&self) -> usize {
        match self.history.last() {
            Some(&key) => self.history.iter().filter(|&&k| k == key).count(),
            None => 0,
        }
    }

    pub fn outcome(&mut self) -> Option<GameOutcome> {
        if !has_legal_move(&mut self.pos) {
            let mover = self.pos.side_to_move;
            return Some(if self.pos.in_check(mover) {
                GameOutcome::Checkmate {
                    winner: mover.other(),
                }
            } else {
                GameOutcome::Stalemate
            });
        }
        if self.pos.is_fifty_move_draw() {
            return Some(GameOutcome::FiftyMoveRule);
        }
        if self.pos.is_insufficient_material() {
            return Some(GameOutcome::InsufficientMaterial);
        }
        if self.repetition_count() >= 3 {
            return Some(GameOutcome::ThreefoldRepetition);
        }
        None
    }

    pub fn to_fen(&self) -> String {
        self.pos.to_fen()
    }
}

impl Rules for Game {
    fn legal_moves(&mut self) -> Vec<Move> {
        legal_moves_into(&mut self.pos, &mut self.buf);
        self.buf.clone()
    }

    fn apply(&mut self, mv: Move) {
        match self.pos.piece_at(mv.from) {
            Some(pc) if pc.color == self.pos.side_to_move => {}
            other => panic!(
                "apply({mv}): origin holds {other:?} but {} is to move in {}",
                self.pos.side_to_move,
                self.pos.to_fen()
            ),
        }
        let before = match self.history.last() {
            Some(&key) => key,
            None => self.pos.position_hash(),
        };
        let undo = self.pos.make_move(mv);
        self.history.push(key_after_move(before, &self.pos, mv, &undo));
        self.undo_stack.push((mv, undo));
    }

    fn unapply(&mut self) {
        let (mv, undo) = self
            .undo_stack
            .pop()
            .expect("unapply called with no applied move");
        self.pos.unmake_move(mv, undo);
        self.history.pop();
    }

    fn is_game_over(&mut self) -> bool {
        self.outcome().is_some()
    }

    fn side_to_move(&self) -> Color {
        self.pos.side_to_move
    }

    fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.pos.piece_at(sq)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
