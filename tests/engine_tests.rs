use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use tictactoe::rules::winner_at;
use tictactoe::search::{Locality, MovePolicy, SearchParams, Searcher};
use tictactoe::{Board, Engine, Error, GameConfig, Mark, Pos, SearchConfig, SearchType};

/// Play random moves from an empty board, stopping early on a win.
/// Returns the board, the side to move and the last move.
fn random_position(size: usize, k: usize, plies: usize, seed: u64) -> (Board, Mark, Option<Pos>) {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut board = Board::new(size);
    let mut to_move = Mark::X;
    let mut last = None;
    for _ in 0..plies {
        let empty: Vec<Pos> = board.empty_cells().collect();
        if empty.is_empty() {
            break;
        }
        let pos = empty[rng.random_range(0..empty.len())];
        board.place_stone(pos, to_move);
        last = Some(pos);
        to_move = to_move.opponent();
        if winner_at(&board, pos, k).is_some() {
            break;
        }
    }
    (board, to_move, last)
}

fn search(
    params: &SearchParams,
    board: &mut Board,
    to_move: Mark,
    anchor: Option<Pos>,
    seed: u64,
) -> (Option<Pos>, f64, u64) {
    let mut rng = Pcg64::seed_from_u64(seed);
    let result = Searcher::new(params, &mut rng).search(board, to_move, anchor);
    (result.best_move, result.score, result.nodes)
}

/// Alternate two engines until the game ends.
fn play_out(x: &mut Engine, o: &mut Engine) -> Option<Mark> {
    let (mut mover, mut waiter) = (x, o);
    loop {
        if let Some(winner) = mover.winner() {
            return Some(winner);
        }
        if mover.board().is_full() {
            return None;
        }
        let pos = mover.compute_next_move().unwrap();
        waiter.apply_opponent_move(pos).unwrap();
        std::mem::swap(&mut mover, &mut waiter);
    }
}

#[test]
fn pruning_preserves_full_search_value() {
    for seed in 0..20 {
        let (mut board, to_move, last) = random_position(3, 3, 1 + (seed as usize % 5), seed);
        let before = board.clone();

        let plain = SearchParams::full(3);
        let pruned = SearchParams::full(3).with_pruning(true);
        let (_, plain_score, plain_nodes) = search(&plain, &mut board, to_move, last, seed);
        let (_, pruned_score, pruned_nodes) = search(&pruned, &mut board, to_move, last, seed);

        assert_eq!(plain_score, pruned_score, "seed {seed}:\n{board}");
        assert!(pruned_nodes <= plain_nodes);
        assert_eq!(board, before, "search must restore the board");
    }
}

#[test]
fn pruning_preserves_depth_limited_value() {
    for seed in 0..10 {
        let (mut board, to_move, last) = random_position(4, 3, 2 + (seed as usize % 4), seed);

        let plain = SearchParams::full(3).with_depth(3);
        let pruned = SearchParams::full(3).with_depth(3).with_pruning(true);
        let (_, plain_score, _) = search(&plain, &mut board, to_move, last, seed);
        let (_, pruned_score, _) = search(&pruned, &mut board, to_move, last, seed);

        assert_eq!(plain_score, pruned_score, "seed {seed}:\n{board}");
    }
}

#[test]
fn randomized_order_preserves_value() {
    let (mut board, to_move, last) = random_position(3, 3, 2, 11);
    let ordered = SearchParams::full(3).with_pruning(true);
    let shuffled = SearchParams::full(3).with_pruning(true).with_policy(MovePolicy {
        locality: None,
        randomize: true,
    });

    let (_, expected, _) = search(&ordered, &mut board, to_move, last, 0);
    for seed in 0..5 {
        let (_, score, _) = search(&shuffled, &mut board, to_move, last, seed);
        assert_eq!(score, expected);
    }
}

#[test]
fn corner_opening_is_a_draw() {
    let mut board = Board::new(3);
    board.place_stone(Pos::new(0, 0), Mark::X);

    let (best, score, _) = search(&SearchParams::full(3), &mut board, Mark::O, Some(Pos::new(0, 0)), 0);
    assert_eq!(score, 0.0);
    // The only non-losing reply to a corner is the center
    assert_eq!(best, Some(Pos::new(1, 1)));
}

#[test]
fn empty_board_full_search_is_a_draw() {
    let mut board = Board::new(3);
    let params = SearchParams::full(3).with_pruning(true);
    let (best, score, _) = search(&params, &mut board, Mark::X, None, 0);
    assert_eq!(score, 0.0);
    assert!(best.is_some());
}

#[test]
fn optimal_self_play_draws() {
    for pruning in [false, true] {
        let config = SearchConfig::new(0, pruning, false, false);
        let game = GameConfig::new(3, 3).unwrap();
        let mut x = Engine::with_config(game, Mark::X, config.clone()).unwrap();
        let mut o = Engine::with_config(game, Mark::O, config).unwrap();

        assert_eq!(play_out(&mut x, &mut o), None);
        assert!(x.board().is_full());
        assert_eq!(x.board(), o.board());
    }
}

#[test]
fn randomized_self_play_draws() {
    for seed in 0..3 {
        let config = SearchConfig::new(0, true, false, true).with_seed(seed);
        let game = GameConfig::new(3, 3).unwrap();
        let mut x = Engine::with_config(game, Mark::X, config.clone().with_seed(seed + 100)).unwrap();
        let mut o = Engine::with_config(game, Mark::O, config).unwrap();

        assert_eq!(play_out(&mut x, &mut o), None);
    }
}

#[test]
fn reset_reproduces_opening_move() {
    let config = SearchConfig::new(3, true, true, true).with_seed(5);
    let game = GameConfig::new(7, 4).unwrap();

    let mut engine = Engine::with_config(game, Mark::X, config.clone()).unwrap();
    let first = engine.compute_next_move_with_stats().unwrap();
    assert_eq!(first.search_type, SearchType::Opening);
    engine.apply_opponent_move(Pos::new(0, 0)).unwrap();
    let _ = engine.compute_next_move().unwrap();

    engine.reset();
    let again = engine.compute_next_move().unwrap();

    let mut fresh = Engine::with_config(game, Mark::X, config).unwrap();
    assert_eq!(again, first.best_move);
    assert_eq!(fresh.compute_next_move().unwrap(), first.best_move);
    assert_eq!(first.best_move, Pos::new(3, 3));
}

#[test]
fn seeded_engines_play_identically() {
    let config = SearchConfig::new(3, true, false, true).with_seed(9);
    let game = GameConfig::new(5, 4).unwrap();

    let mut a = Engine::with_config(game, Mark::O, config.clone()).unwrap();
    let mut b = Engine::with_config(game, Mark::O, config).unwrap();
    let script = [Pos::new(2, 2), Pos::new(0, 4), Pos::new(4, 0), Pos::new(0, 0), Pos::new(4, 4)];
    for _ in 0..3 {
        let pos = script.iter().copied().find(|&p| a.board().is_empty(p)).unwrap();
        a.apply_opponent_move(pos).unwrap();
        b.apply_opponent_move(pos).unwrap();
        assert_eq!(a.compute_next_move().unwrap(), b.compute_next_move().unwrap());
    }
}

#[test]
fn locality_never_leaves_radius() {
    // X can win at (6, 2), far from O's last move at (0, 6)
    let mut board = Board::new(7);
    board.place_stone(Pos::new(6, 0), Mark::X);
    board.place_stone(Pos::new(6, 1), Mark::X);
    board.place_stone(Pos::new(3, 3), Mark::O);
    board.place_stone(Pos::new(0, 6), Mark::O);
    let last = Some(Pos::new(0, 6));

    let unfiltered = SearchParams::full(3).with_depth(1).with_pruning(true);
    let (best, _, _) = search(&unfiltered, &mut board, Mark::X, last, 0);
    assert_eq!(best, Some(Pos::new(6, 2)));

    let locality = Locality {
        center: Pos::new(0, 6),
        radius: 2.0,
    };
    let filtered = unfiltered.clone().with_policy(MovePolicy {
        locality: Some(locality),
        randomize: false,
    });
    let (best, _, _) = search(&filtered, &mut board, Mark::X, last, 0);
    let best = best.unwrap();
    assert!(locality.allows(best), "{best} is outside the radius");
    assert_ne!(best, Pos::new(6, 2));
}

#[test]
fn engine_locality_stays_near_opponent_move() {
    let config = SearchConfig::new(1, true, true, false);
    let game = GameConfig::new(7, 3).unwrap();
    let mut engine = Engine::with_config(game, Mark::X, config).unwrap();

    assert_eq!(engine.compute_next_move().unwrap(), Pos::new(3, 3));
    for opponent in [Pos::new(0, 0), Pos::new(6, 6), Pos::new(0, 6)] {
        engine.apply_opponent_move(opponent).unwrap();
        let reply = engine.compute_next_move().unwrap();
        // Depth-limited alpha-beta uses radius min(k, depth + 1) = 2
        assert!(reply.distance(opponent) < 2.0, "{reply} too far from {opponent}");
    }
}

#[test]
fn occupied_cell_is_a_precondition_violation() {
    let mut engine = Engine::new(3, 3, Mark::O).unwrap();
    engine.apply_opponent_move(Pos::new(1, 1)).unwrap();

    assert_eq!(
        engine.apply_opponent_move(Pos::new(1, 1)),
        Err(Error::Occupied { pos: Pos::new(1, 1) })
    );
    let reply = engine.compute_next_move().unwrap();
    assert_eq!(
        engine.apply_opponent_move(reply),
        Err(Error::Occupied { pos: reply })
    );
    assert_eq!(engine.board().get(reply), Mark::O);
}

#[test]
fn win_length_longer_than_board_rejected() {
    assert_eq!(
        Engine::new(4, 5, Mark::X).err(),
        Some(Error::InvalidWinLength {
            win_length: 5,
            size: 4
        })
    );
}
