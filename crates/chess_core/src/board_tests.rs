use super::*;
use crate::movegen::legal_moves;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

#[test]
fn test_startpos_matches_start_fen() {
    let parsed = Position::from_fen(START_FEN).unwrap();
    assert_eq!(parsed, Position::startpos());
    assert_eq!(Position::startpos().to_fen(), START_FEN);
}

#[test]
fn test_fen_round_trip() {
    for fen in [
        KIWIPETE,
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        "4k3/8/8/8/8/8/8/4K3 b - - 37 80",
    ] {
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(pos.to_fen(), fen);
    }
}

#[test]
fn test_fen_counters_are_optional() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
    assert_eq!(pos.halfmove_clock, 0);
    assert_eq!(pos.fullmove_number, 1);
}

#[test]
fn test_fen_errors() {
    assert_eq!(
        Position::from_fen("8/8/8 w"),
        Err(FenError::MissingFields(2))
    );
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8 w - -"),
        Err(FenError::RankCount(7))
    );
    assert_eq!(
        Position::from_fen("4x3/8/8/8/8/8/8/4K3 w - -"),
        Err(FenError::InvalidPiece('x'))
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 x - -"),
        Err(FenError::InvalidSideToMove("x".to_string()))
    );
    assert!(matches!(
        Position::from_fen("4k4/8/8/8/8/8/8/4K3 w - -"),
        Err(FenError::FileCount { rank: 8, .. })
    ));
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - z9"),
        Err(FenError::InvalidEnPassant("z9".to_string()))
    );
}

#[test]
fn test_fen_castling_rights_need_king_and_rook() {
    for (fen, right) in [
        ("4k3/8/8/8/8/8/8/4K3 w K - 0 1", 'K'),
        ("4k3/8/8/8/8/8/8/R3K3 w K - 0 1", 'K'),
        ("4k3/8/8/8/8/8/8/4K2r w K - 0 1", 'K'),
        ("r3k3/8/8/8/8/8/8/R3K3 w Qk - 0 1", 'k'),
        ("r6k/8/8/8/8/8/8/4K3 b q - 0 1", 'q'),
    ] {
        assert_eq!(
            Position::from_fen(fen),
            Err(FenError::CastlingWithoutPieces(right)),
            "{fen}"
        );
    }
    assert!(Position::from_fen("r3k3/8/8/8/8/8/8/R3K3 w Qq - 0 1").is_ok());
}

#[test]
fn test_fen_en_passant_rank_must_match_side_to_move() {
    assert_eq!(
        Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - e3 0 1"),
        Err(FenError::InvalidEnPassant("e3".to_string()))
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/3p4/8/8/8/4K3 b - d6 0 1"),
        Err(FenError::InvalidEnPassant("d6".to_string()))
    );
    assert!(Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").is_ok());
}

#[test]
fn test_make_unmake_restores_every_legal_move() {
    for fen in [
        START_FEN,
        KIWIPETE,
        // en passant, promotion with capture, both castles
        "r3k2r/1P6/8/3pP3/8/8/6p1/R3K2R w KQkq d6 0 1",
        "r3k2r/1P6/8/8/3pP3/8/6p1/R3K2R b KQkq e3 0 1",
    ] {
        let mut pos = Position::from_fen(fen).unwrap();
        let before = pos.clone();
        for mv in legal_moves(&pos) {
            let undo = pos.make_move(mv);
            assert_ne!(pos, before, "{mv} left the position unchanged");
            pos.unmake_move(mv, undo);
            assert_eq!(pos, before, "{mv} was not undone in {fen}");
            assert_eq!(pos.to_fen(), before.to_fen());
        }
    }
}

#[test]
fn test_promotion_and_castling_effects() {
    let mut pos = Position::from_fen("r3k2r/1P6/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();

    let mut castle = Move::new(4, 6);
    castle.is_castle = true;
    let undo = pos.make_move(castle);
    assert_eq!(pos.piece_at(5), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert!(!pos.castling.wk && !pos.castling.wq);
    pos.unmake_move(castle, undo);

    // b7xa8=N also strips black's queen-side right
    let promo = Move::promotion(49, 56, PieceKind::Knight);
    pos.make_move(promo);
    assert_eq!(pos.piece_at(56), Some(Piece::new(Color::White, PieceKind::Knight)));
    assert!(!pos.castling.bq);
    assert!(pos.castling.bk);
}

#[test]
fn test_insufficient_material() {
    let cases = [
        ("4k3/8/8/8/8/8/8/4K3 w - -", true),
        ("4k3/8/8/8/8/8/8/4KN2 w - -", true),
        ("4k3/8/8/8/8/8/8/4KB2 w - -", true),
        // f1 and c8 are both light squares
        ("2b1k3/8/8/8/8/8/8/4KB2 w - -", true),
        // f1 light, f8 dark
        ("4kb2/8/8/8/8/8/8/4KB2 w - -", false),
        ("4k3/8/8/8/8/8/8/3NKN2 w - -", false),
        ("4k3/8/8/8/8/8/4P3/4K3 w - -", false),
        ("4k3/8/8/8/8/8/8/4K2R w - -", false),
    ];
    for (fen, expected) in cases {
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(pos.is_insufficient_material(), expected, "{fen}");
    }
}

#[test]
fn test_fifty_move_threshold() {
    let at_99 = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 99 60").unwrap();
    let at_100 = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 100 60").unwrap();
    assert!(!at_99.is_fifty_move_draw());
    assert!(at_100.is_fifty_move_draw());
}

#[test]
fn test_position_hash_tracks_state() {
    let start = Position::startpos();
    let mut pos = start.clone();
    let mv = Move::new(12, 28); // e2e4
    let undo = pos.make_move(mv);
    assert_ne!(pos.position_hash(), start.position_hash());
    pos.unmake_move(mv, undo);
    assert_eq!(pos.position_hash(), start.position_hash());

    let mut black = start.clone();
    black.side_to_move = Color::Black;
    assert_ne!(black.position_hash(), start.position_hash());
}

#[test]
fn test_color_flipped_mirrors_startpos() {
    let flipped = Position::startpos().color_flipped();
    assert_eq!(flipped.side_to_move, Color::Black);
    flipped
        .board
        .iter()
        .zip(Position::startpos().board.iter())
        .for_each(|(a, b)| assert_eq!(*a, *b));
    assert_eq!(flipped.color_flipped(), Position::startpos());
}
