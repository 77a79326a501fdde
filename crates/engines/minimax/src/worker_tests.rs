use super::*;
use chess_core::Rules;

#[test]
fn test_wait_delivers_a_legal_move() {
    let mut game = Game::default();
    let legal = game.legal_moves();
    let ticket = spawn_best_move(game.clone(), Difficulty::Medium, None);

    let result = ticket.wait().unwrap();
    assert!(legal.contains(&result.best_move.unwrap()));
    assert_eq!(result.depth, 2);
}

#[test]
fn test_try_take_polls_until_ready() {
    let game = Game::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();
    let mut ticket = spawn_best_move(game, Difficulty::High, None);

    let result = loop {
        match ticket.try_take() {
            Ok(Some(result)) => break result,
            Ok(None) => std::thread::yield_now(),
            Err(lost) => panic!("{lost}"),
        }
    };
    assert_eq!(result.best_move.unwrap().to_string(), "d2d5");
}

#[test]
fn test_no_move_is_delivered_as_none() {
    let game = Game::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    let result = spawn_best_move(game, Difficulty::Low, Some(4)).wait().unwrap();
    assert_eq!(result, SearchResult::no_move());
}

#[test]
fn test_seeded_random_tier_matches_across_workers() {
    let a = spawn_best_move(Game::default(), Difficulty::Low, Some(21));
    let b = spawn_best_move(Game::default(), Difficulty::Low, Some(21));
    assert_eq!(a.wait().unwrap(), b.wait().unwrap());
}
