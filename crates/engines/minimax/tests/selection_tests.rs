//! End-to-end behaviour of move selection against the real rules engine.

use chess_core::{Color, Engine, Game, Position, Rules};
use minimax_engine::{best_move, best_move_with_rng, Difficulty, MinimaxEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Applies and takes back every legal move down to `depth`, checking the
/// position comes back identical each time.
fn assert_make_unmake_is_identity(game: &mut Game, depth: u8) {
    if depth == 0 {
        return;
    }
    for mv in game.legal_moves() {
        let before = game.position().clone();
        let fen = game.to_fen();
        game.apply(mv);
        assert_make_unmake_is_identity(game, depth - 1);
        game.unapply();
        assert_eq!(game.position(), &before, "after {mv}");
        assert_eq!(game.to_fen(), fen, "after {mv}");
    }
}

#[test]
fn apply_then_unapply_restores_every_position() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ] {
        let mut game = Game::from_fen(fen).unwrap();
        assert_make_unmake_is_identity(&mut game, 2);
    }
}

/// Plays tier against tier, asserting every chosen move is legal in the
/// live game before it is played.
fn play_out(white: Difficulty, black: Difficulty, plies: usize, seed: u64) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::default();
    for _ in 0..plies {
        if game.is_game_over() {
            break;
        }
        let difficulty = match game.side_to_move() {
            Color::White => white,
            Color::Black => black,
        };
        let legal = game.legal_moves();
        let before = game.position().clone();

        let mv = best_move_with_rng(&mut game, difficulty, &mut rng)
            .expect("a live game always has a move");
        assert_eq!(game.position(), &before, "selection mutated the game");
        assert!(legal.contains(&mv), "{difficulty} chose illegal {mv}");

        game.play(mv);
    }
    game
}

#[test]
fn tiers_play_legal_games() {
    let game = play_out(Difficulty::Low, Difficulty::Medium, 24, 1);
    assert!(game.applied_moves() > 0);
    let game = play_out(Difficulty::Medium, Difficulty::Low, 24, 2);
    assert!(game.applied_moves() > 0);
}

#[test]
fn high_tier_game_stays_consistent() {
    let game = play_out(Difficulty::High, Difficulty::Low, 8, 3);
    // Replaying the same seed gives the same game.
    assert_eq!(play_out(Difficulty::High, Difficulty::Low, 8, 3).to_fen(), game.to_fen());
}

#[test]
fn engine_trait_object_selects_moves() {
    let mut engines: Vec<Box<dyn Engine>> = Difficulty::ALL
        .into_iter()
        .map(|d| Box::new(MinimaxEngine::with_seed(d, Some(8))) as Box<dyn Engine>)
        .collect();
    let mut game = Game::default();
    for engine in engines.iter_mut() {
        let result = engine.choose_move(&mut game);
        let mv = result.best_move.unwrap();
        assert!(game.legal_moves().contains(&mv));
        assert_eq!(game.position(), &Position::startpos());
    }
}

#[test]
fn mate_in_one_is_seen_through_material() {
    // Qxf7 wins the pawn and mates; the material gain is what the search sees.
    let mut game =
        Game::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4")
            .unwrap();
    let mv = best_move(&mut game, Difficulty::Medium).unwrap();
    assert_eq!(mv.to_string(), "h5f7");
    game.play(mv);
    assert!(game.is_game_over());
}
