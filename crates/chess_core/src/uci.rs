use crate::{Rules, board::Position, error::UciError, game::Game, movegen::legal_moves, types::*};

pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

/// Looks up the legal move going from `from` to `to`. Promotions are
/// resolved to a queen, the only promotion a caller ever asks for by square.
pub fn resolve_move(pos: &Position, from: u8, to: u8) -> Option<Move> {
    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && matches!(m.promo, None | Some(PieceKind::Queen)))
}

/// Parses long algebraic notation (`e2e4`, `a7a8n`) against the legal moves,
/// so castling and en-passant flags come out right. Without a promotion
/// letter a pawn reaching the last rank becomes a queen.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    if txt.len() < 4 || !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    match txt[4..].chars().next() {
        None => resolve_move(pos, from, to),
        Some(ch) => {
            let promo = match PieceKind::from_char(ch)? {
                PieceKind::Pawn | PieceKind::King => return None,
                kind => kind,
            };
            legal_moves(pos)
                .into_iter()
                .find(|m| m.from == from && m.to == to && m.promo == Some(promo))
        }
    }
}

/// Builds a game from the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fields> [moves ...]`.
pub fn set_position_from_uci(args: &[&str]) -> Result<Game, UciError> {
    let moves_at = args.iter().position(|&a| a == "moves").unwrap_or(args.len());
    let (setup, moves) = args.split_at(moves_at);

    let mut game = match setup.first().copied() {
        None | Some("startpos") => Game::default(),
        Some("fen") => Game::from_fen(&setup[1..].join(" "))?,
        Some(other) => return Err(UciError::UnknownPositionKind(other.to_string())),
    };

    for txt in moves.iter().skip(1) {
        let mv = parse_uci_move(game.position(), txt)
            .ok_or_else(|| UciError::IllegalMove(txt.to_string()))?;
        game.apply(mv);
    }
    Ok(game)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
