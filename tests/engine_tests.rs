//! Engine integration tests: moves, spawning and terminal states.

use proptest::prelude::*;
use rust_2048::rules::{evaluate, is_loss};
use rust_2048::{consolidate, Board, Direction, Game, GameConfig, GameStatus, MoveOutcome, SpawnPolicy};

fn no_spawn(width: usize, height: usize) -> GameConfig {
    GameConfig::new(width, height).with_tiles_per_move(0)
}

// =============================================================================
// Consolidation
// =============================================================================

#[test]
fn test_consolidate_pairs_once() {
    let (line, delta) = consolidate(&[2, 2, 2, 2], 4);
    assert_eq!(line.as_slice(), &[4, 4, 0, 0]);
    assert_eq!(delta, 8);

    let (line, delta) = consolidate(&[4, 4, 4], 3);
    assert_eq!(line.as_slice(), &[8, 4, 0]);
    assert_eq!(delta, 8);
}

#[test]
fn test_consolidate_mixed_lines() {
    let (line, delta) = consolidate(&[2, 2, 4], 4);
    assert_eq!(line.as_slice(), &[4, 4, 0, 0]);
    assert_eq!(delta, 4);

    let (line, delta) = consolidate(&[2, 2, 2], 3);
    assert_eq!(line.as_slice(), &[4, 2, 0]);
    assert_eq!(delta, 4);

    let (line, delta) = consolidate(&[], 5);
    assert_eq!(line.as_slice(), &[0, 0, 0, 0, 0]);
    assert_eq!(delta, 0);
}

fn tiles() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(1u32..=10, 0..8).prop_map(|powers| powers.into_iter().map(|p| 1u64 << p).collect())
}

proptest! {
    #[test]
    fn prop_consolidate_pads_and_conserves(input in tiles(), extra in 0usize..4) {
        let pad = input.len() + extra;
        let (line, delta) = consolidate(&input, pad);

        prop_assert_eq!(line.len(), pad);
        prop_assert_eq!(delta % 2, 0);
        prop_assert!(line.iter().filter(|&&v| v != 0).count() <= input.len());
        prop_assert_eq!(line.iter().sum::<u64>(), input.iter().sum::<u64>());
        // Non-zero values are packed at the front.
        let first_zero = line.iter().position(|&v| v == 0).unwrap_or(pad);
        prop_assert!(line[first_zero..].iter().all(|&v| v == 0));
    }

    #[test]
    fn prop_score_never_decreases(seed in any::<u64>(), dirs in prop::collection::vec(0usize..4, 1..60)) {
        let mut game = Game::with_seed(GameConfig::default(), seed);

        for index in dirs {
            let before_score = game.score();
            let before_moves = game.total_moves();
            let before_board = game.board().clone();

            let outcome = game.apply_move(Direction::ALL[index]);

            prop_assert_eq!(game.score(), before_score + outcome.score_delta);
            prop_assert_eq!(outcome.score_delta % 2, 0);
            if outcome.changed {
                prop_assert_eq!(game.total_moves(), before_moves + 1);
            } else {
                prop_assert_eq!(game.total_moves(), before_moves);
                prop_assert_eq!(game.board(), &before_board);
            }
            prop_assert!(game.board().cells().iter().all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())));
        }
    }
}

// =============================================================================
// Moves
// =============================================================================

#[test]
fn test_forced_sequence_is_exact() {
    let rows = [[2u64, 2, 4, 8], [0, 2, 2, 0], [4, 0, 0, 4], [2, 0, 2, 2]];
    let mut game = Game::from_rows(no_spawn(4, 4), &rows, 0).unwrap();

    game.apply_move(Direction::Left);
    assert_eq!(game.score(), 20);
    assert_eq!(
        game.board().to_rows(),
        vec![vec![4, 4, 8, 0], vec![4, 0, 0, 0], vec![8, 0, 0, 0], vec![4, 2, 0, 0]]
    );

    game.apply_move(Direction::Up);
    assert_eq!(game.score(), 28);
    assert_eq!(
        game.board().to_rows(),
        vec![vec![8, 4, 8, 0], vec![8, 2, 0, 0], vec![4, 0, 0, 0], vec![0, 0, 0, 0]]
    );

    game.apply_move(Direction::Right);
    assert_eq!(
        game.board().to_rows(),
        vec![vec![0, 8, 4, 8], vec![0, 0, 8, 2], vec![0, 0, 0, 4], vec![0, 0, 0, 0]]
    );

    game.apply_move(Direction::Down);
    assert_eq!(
        game.board().to_rows(),
        vec![vec![0, 0, 0, 0], vec![0, 0, 0, 8], vec![0, 0, 4, 2], vec![0, 8, 8, 4]]
    );

    game.apply_move(Direction::Left);
    assert_eq!(game.score(), 44);
    assert_eq!(game.total_moves(), 5);
    assert_eq!(
        game.board().to_rows(),
        vec![vec![0, 0, 0, 0], vec![8, 0, 0, 0], vec![4, 2, 0, 0], vec![16, 4, 0, 0]]
    );
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_move_into_wall_is_noop() {
    let rows = [[2u64, 4, 0, 0], [8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
    let mut game = Game::from_rows(GameConfig::default(), &rows, 3).unwrap();
    let before = game.board().clone();

    for _ in 0..3 {
        let outcome = game.apply_move(Direction::Left);
        assert!(!outcome.changed);
        assert_eq!(outcome.score_delta, 0);
    }

    assert_eq!(game.total_moves(), 0);
    assert_eq!(game.board(), &before);
}

#[test]
fn test_changing_move_spawns_tiles_per_move() {
    let config = GameConfig::default().with_tiles_per_move(3);
    let rows = [[2u64, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 4]];

    for seed in 0..20 {
        let mut game = Game::from_rows(config, &rows, seed).unwrap();
        let outcome = game.apply_move(Direction::Right);

        assert!(outcome.changed);
        assert_eq!(game.board().tile_count(), 5);
        assert_eq!(game.board().get(0, 3), 2);
        assert!(game.board().cells().iter().all(|&v| matches!(v, 0 | 2 | 4)));
    }
}

#[test]
fn test_start_only_policy() {
    let config = GameConfig::default()
        .with_tiles_per_move(3)
        .with_spawn_policy(SpawnPolicy::StartOnly);

    let game = Game::with_seed(config, 11);
    assert_eq!(game.board().tile_count(), 5);

    let rows = [[2u64, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 4]];
    let mut game = Game::from_rows(config, &rows, 11).unwrap();
    game.apply_move(Direction::Right);
    assert_eq!(game.board().tile_count(), 3);
}

#[test]
fn test_new_game_has_two_small_tiles() {
    for seed in 0..50 {
        let game = Game::with_seed(GameConfig::new(5, 3), seed);
        let board = game.board();

        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 3);
        assert_eq!(board.tile_count(), 2);
        assert!(board.cells().iter().all(|&v| matches!(v, 0 | 2 | 4)));
        assert_eq!(game.score(), 0);
        assert_eq!(game.total_moves(), 0);
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Game::with_seed(GameConfig::default(), 99);
    let mut b = Game::with_seed(GameConfig::default(), 99);

    for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down].repeat(10) {
        assert_eq!(a.apply_move(dir), b.apply_move(dir));
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.score(), b.score());
}

#[test]
#[should_panic(expected = "Limit powers greater than 13 are not supported")]
fn test_win_power_limit_panics() {
    let _ = GameConfig::default().with_win_power(14);
}

// =============================================================================
// Terminal states
// =============================================================================

#[test]
fn test_two_by_two_loss_examples() {
    let lost = Game::from_rows(GameConfig::new(2, 2), &[[2u64, 4], [4, 2]], 0).unwrap();
    assert_eq!(lost.status(), GameStatus::Lost);

    let open = Game::from_rows(GameConfig::new(2, 2), &[[2u64, 2], [4, 4]], 0).unwrap();
    assert_eq!(open.status(), GameStatus::Playing);
}

#[test]
fn test_loss_check_covers_first_row_and_column() {
    let row_pair = Board::from_rows(&[[2u64, 2, 4], [4, 8, 16], [32, 64, 128]]).unwrap();
    assert!(!is_loss(&row_pair));

    let col_pair = Board::from_rows(&[[2u64, 4, 8], [2, 16, 32], [64, 128, 256]]).unwrap();
    assert!(!is_loss(&col_pair));

    let stuck = Board::from_rows(&[[2u64, 4, 8], [16, 32, 64], [128, 256, 512]]).unwrap();
    assert!(is_loss(&stuck));
}

#[test]
fn test_win_beats_loss() {
    let board = Board::from_rows(&[[8u64, 2], [2, 8]]).unwrap();
    assert!(is_loss(&board));
    assert_eq!(evaluate(&board, 8), GameStatus::Won);

    let game = Game::from_rows(GameConfig::new(2, 2).with_win_power(3), &[[8u64, 2], [2, 8]], 0).unwrap();
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_win_fires_on_merge() {
    let config = GameConfig::default().with_win_power(4);
    let rows = [[8u64, 8, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
    let mut game = Game::from_rows(config, &rows, 5).unwrap();

    let outcome = game.apply_move(Direction::Left);

    assert_eq!(outcome.score_delta, 16);
    assert_eq!(game.status(), GameStatus::Won);
    // No spawn once the game is over.
    assert_eq!(game.board().tile_count(), 1);
}

#[test]
fn test_terminal_game_ignores_moves() {
    let mut lost = Game::from_rows(GameConfig::new(2, 2), &[[2u64, 4], [4, 2]], 0).unwrap();
    let mut won = Game::from_rows(GameConfig::new(2, 2).with_win_power(3), &[[8u64, 0], [0, 4]], 0).unwrap();
    assert_eq!(won.status(), GameStatus::Won);

    for game in [&mut lost, &mut won] {
        let board = game.board().clone();
        let status = game.status();
        for dir in Direction::ALL {
            assert_eq!(game.apply_move(dir), MoveOutcome::default());
        }
        assert_eq!(game.board(), &board);
        assert_eq!(game.status(), status);
        assert_eq!(game.score(), 0);
        assert_eq!(game.total_moves(), 0);
    }
}

#[test]
fn test_win_power_one_wins_at_start() {
    let config = GameConfig::default().with_win_power(1);

    for seed in 0..50 {
        let game = Game::with_seed(config, seed);
        let expected = if game.board().contains(2) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };
        assert_eq!(game.status(), expected);
    }
}

#[test]
fn test_one_by_one_board() {
    let game = Game::with_seed(GameConfig::new(1, 1), 4);
    // A single cell fills on the first placement; the second is a no-op.
    assert_eq!(game.board().tile_count(), 1);
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.to_string(), format!("╔════╗\n║{:>4}║\n╚════╝\n", game.board().get(0, 0)));
}

#[test]
fn test_layout_must_match_config() {
    let result = Game::from_rows(GameConfig::new(3, 3), &[[2u64, 0], [0, 0]], 0);
    assert!(matches!(result, Err(rust_2048::Error::InvalidBoard(_))));

    let result = Game::from_rows(GameConfig::new(2, 2), &[[3u64, 0], [0, 0]], 0);
    assert!(result.is_err());
}
