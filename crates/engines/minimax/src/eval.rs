//! Material-only evaluation over the mailbox board.

use chess_core::{Color, PieceKind, Rules};

/// Material weights, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [10, 30, 30, 50, 90, 900];

/// Material score from White's perspective.
///
/// Positive favors White, negative favors Black. Both kings are always
/// counted, so they cancel in any legal position.
pub fn evaluate<R: Rules + ?Sized>(rules: &R) -> i32 {
    let mut score = 0i32;
    for sq in 0..64u8 {
        if let Some(pc) = rules.piece_at(sq) {
            let value = value_of(pc.kind);
            match pc.color {
                Color::White => score += value,
                Color::Black => score -= value,
            }
        }
    }
    score
}

pub fn value_of(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
