//! Error types for the fallible edges of the rules engine.
//!
//! Move generation and make/unmake never fail; only text input does.

use thiserror::Error;

/// Failure to parse a Forsyth-Edwards Notation string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    MissingFields(usize),
    #[error("expected 8 ranks in board section, found {0}")]
    RankCount(usize),
    #[error("rank {rank} describes {files} files")]
    FileCount { rank: usize, files: usize },
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),
    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),
    #[error("castling right '{0}' without king and rook on their home squares")]
    CastlingWithoutPieces(char),
    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
}

/// Failure to interpret a UCI `position` command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UciError {
    #[error("expected 'startpos' or 'fen', found '{0}'")]
    UnknownPositionKind(String),
    #[error(transparent)]
    Fen(#[from] FenError),
    #[error("illegal or malformed move '{0}'")]
    IllegalMove(String),
}
