use super::*;
use crate::error::FenError;

#[test]
fn test_move_to_uci() {
    assert_eq!(move_to_uci(Move::new(12, 28)), "e2e4");
    assert_eq!(move_to_uci(Move::promotion(48, 56, PieceKind::Knight)), "a7a8n");
}

#[test]
fn test_parse_round_trips_every_legal_move() {
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    for mv in legal_moves(&pos) {
        assert_eq!(parse_uci_move(&pos, &move_to_uci(mv)), Some(mv));
    }
}

#[test]
fn test_parse_flags_castling() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "e1g1").unwrap();
    assert!(mv.is_castle);
}

#[test]
fn test_missing_promotion_letter_promotes_to_queen() {
    let pos = Position::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "a7a8").unwrap();
    assert_eq!(mv.promo, Some(PieceKind::Queen));
    assert_eq!(resolve_move(&pos, 48, 56), Some(mv));
    assert_eq!(
        parse_uci_move(&pos, "a7a8r").unwrap().promo,
        Some(PieceKind::Rook)
    );
    assert_eq!(parse_uci_move(&pos, "a7a8k"), None);
}

#[test]
fn test_parse_rejects_illegal_and_malformed() {
    let pos = Position::startpos();
    assert_eq!(parse_uci_move(&pos, "e2e5"), None);
    assert_eq!(parse_uci_move(&pos, "e2"), None);
    assert_eq!(parse_uci_move(&pos, "z9e4"), None);
}

#[test]
fn test_set_position_startpos_with_moves() {
    let game = set_position_from_uci(&["startpos", "moves", "e2e4", "e7e5", "g1f3"]).unwrap();
    assert_eq!(
        game.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
    assert_eq!(game.applied_moves(), 3);
}

#[test]
fn test_set_position_from_fen() {
    let args = "fen 4k3/8/8/8/8/8/4P3/4K3 w - - 0 1 moves e2e4".split_whitespace();
    let args: Vec<&str> = args.collect();
    let game = set_position_from_uci(&args).unwrap();
    assert_eq!(game.to_fen(), "4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1");
}

#[test]
fn test_set_position_errors() {
    assert_eq!(
        set_position_from_uci(&["nowhere"]).unwrap_err(),
        UciError::UnknownPositionKind("nowhere".to_string())
    );
    assert_eq!(
        set_position_from_uci(&["startpos", "moves", "e2e5"]).unwrap_err(),
        UciError::IllegalMove("e2e5".to_string())
    );
    assert_eq!(
        set_position_from_uci(&["fen", "8/8", "w"]).unwrap_err(),
        UciError::Fen(FenError::MissingFields(2))
    );
    assert_eq!(
        set_position_from_uci(&["fen", "4k3/8/8/8/8/8/8/4K3", "w", "K", "-", "0", "1"])
            .unwrap_err(),
        UciError::Fen(FenError::CastlingWithoutPieces('K'))
    );
}
