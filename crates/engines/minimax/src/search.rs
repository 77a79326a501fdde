//! Minimax search with alpha-beta pruning over the `Rules` contract.
//!
//! White maximizes, Black minimizes. Scores are always from White's
//! perspective, so there is no negation between plies.

use std::ops::{Deref, DerefMut};

use chess_core::{Color, Move, Rules};
use tracing::debug;

use crate::eval::evaluate;

/// Search window bound; `-INFINITY` is `i32::MIN + 1`.
pub const INFINITY: i32 = i32::MAX;

/// A move applied to the rules engine; dropping it takes the move back,
/// so pruning, early returns and unwinding all leave the position intact.
struct Applied<'a, R: Rules + ?Sized> {
    rules: &'a mut R,
}

impl<'a, R: Rules + ?Sized> Applied<'a, R> {
    fn new(rules: &'a mut R, mv: Move) -> Self {
        rules.apply(mv);
        Self { rules }
    }
}

impl<R: Rules + ?Sized> Deref for Applied<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.rules
    }
}

impl<R: Rules + ?Sized> DerefMut for Applied<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.rules
    }
}

impl<R: Rules + ?Sized> Drop for Applied<'_, R> {
    fn drop(&mut self) {
        self.rules.unapply();
    }
}

/// Searches the root position for `depth` plies and returns the best move
/// for the side to move, with its score.
///
/// Every root move gets a fresh `(-INFINITY, INFINITY)` window. Only a
/// strictly better score replaces the current choice, so ties resolve to
/// the earliest move in generation order. Returns `None` when there is no
/// legal move.
///
/// Depth 0 looks at no move at all: the first legal move comes back with
/// the evaluation of the current position.
pub fn pick_best_move<R: Rules + ?Sized>(
    rules: &mut R,
    depth: u8,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let moves = rules.legal_moves();
    let first = *moves.first()?;
    if depth == 0 {
        return Some((first, evaluate(rules)));
    }

    let maximizing = rules.side_to_move() == Color::White;
    let mut best: Option<(Move, i32)> = None;
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };

    for mv in moves {
        let score = {
            let mut child = Applied::new(rules, mv);
            minimax(
                &mut *child,
                depth - 1,
                -INFINITY,
                INFINITY,
                !maximizing,
                nodes,
            )
        };
        debug!("depth {depth} root {mv}: {score}");

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best = Some((mv, score));
        }
    }

    Some(best.unwrap_or((first, best_score)))
}

/// Alpha-beta minimax. Game-over positions and the depth horizon are scored
/// by the evaluator alone. Moves are searched in generation order and the
/// loop stops as soon as `beta <= alpha`.
pub fn minimax<R: Rules + ?Sized>(
    rules: &mut R,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 || rules.is_game_over() {
        return evaluate(rules);
    }

    let moves = rules.legal_moves();
    if moves.is_empty() {
        return evaluate(rules);
    }

    if maximizing {
        let mut best = -INFINITY;
        for mv in moves {
            let score = {
                let mut child = Applied::new(rules, mv);
                minimax(&mut *child, depth - 1, alpha, beta, false, nodes)
            };
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for mv in moves {
            let score = {
                let mut child = Applied::new(rules, mv);
                minimax(&mut *child, depth - 1, alpha, beta, true, nodes)
            };
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
