//! Position keys for repetition detection.
//!
//! A key is the XOR of one random word per feature present: each piece on
//! its square, Black to move, each castling right, the en-passant file.
//! Making a move therefore only XORs out what it removed and XORs in what
//! it added, which is what `key_after_move` does for the game history.

use crate::board::{CastlingRights, Position, Undo};
use crate::types::{Move, Piece};

const PIECE_KEYS: usize = 0;
const SIDE_KEY: usize = PIECE_KEYS + 2 * 6 * 64;
const CASTLING_KEYS: usize = SIDE_KEY + 1;
const EP_KEYS: usize = CASTLING_KEYS + 4;
const KEY_COUNT: usize = EP_KEYS + 8;

/// Flat key table, filled at compile time from a splitmix64 stream.
pub struct ZobristKeys {
    keys: [u64; KEY_COUNT],
}

/// Returns the advanced state and the next output word.
const fn splitmix64(state: u64) -> (u64, u64) {
    let state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    (state, z ^ (z >> 31))
}

impl ZobristKeys {
    const fn generate(seed: u64) -> Self {
        let mut keys = [0u64; KEY_COUNT];
        let mut state = seed;
        let mut i = 0;
        while i < KEY_COUNT {
            let (next, key) = splitmix64(state);
            state = next;
            keys[i] = key;
            i += 1;
        }
        Self { keys }
    }

    #[inline]
    pub fn piece(&self, piece: Piece, sq: u8) -> u64 {
        let plane = piece.color.idx() * 6 + piece.kind.idx();
        self.keys[PIECE_KEYS + plane * 64 + sq as usize]
    }

    #[inline]
    pub fn black_to_move(&self) -> u64 {
        self.keys[SIDE_KEY]
    }

    /// Combined key of every right that is still held.
    pub fn castling(&self, rights: &CastlingRights) -> u64 {
        [rights.wk, rights.wq, rights.bk, rights.bq]
            .into_iter()
            .enumerate()
            .filter(|&(_, held)| held)
            .fold(0, |acc, (i, _)| acc ^ self.keys[CASTLING_KEYS + i])
    }

    /// Keyed by file only; zero when there is no en-passant square.
    #[inline]
    pub fn en_passant(&self, ep: Option<u8>) -> u64 {
        ep.map_or(0, |s| self.keys[EP_KEYS + (s % 8) as usize])
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::generate(0x00C0_FFEE_5EED_F00D);

/// Key of `after`, the position reached by playing `mv` from a position
/// whose key was `before`. `undo` is what `make_move` returned for it.
pub fn key_after_move(before: u64, after: &Position, mv: Move, undo: &Undo) -> u64 {
    let z = &ZOBRIST;
    let mut key = before ^ z.black_to_move();

    key ^= z.piece(undo.moved_piece, mv.from);
    // Promotions land as the new piece.
    if let Some(placed) = after.piece_at(mv.to) {
        key ^= z.piece(placed, mv.to);
    }
    if let Some(captured) = undo.captured {
        key ^= z.piece(captured, undo.ep_captured_sq.unwrap_or(mv.to));
    }
    if let Some((rook_from, rook_to)) = undo.rook_move
        && let Some(rook) = after.piece_at(rook_to)
    {
        key ^= z.piece(rook, rook_from) ^ z.piece(rook, rook_to);
    }

    key ^= z.castling(&undo.castling) ^ z.castling(&after.castling);
    key ^= z.en_passant(undo.en_passant) ^ z.en_passant(after.en_passant);
    key
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
