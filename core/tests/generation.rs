use std::collections::BTreeMap;

use hexalchemy_core::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

fn tile_census(board: &Board) -> BTreeMap<Tile, usize> {
    let mut census = BTreeMap::new();
    for (_, tile) in board.iter_tiles() {
        *census.entry(tile).or_insert(0) += 1;
    }
    census
}

#[test]
fn generated_boards_pair_up_exactly() {
    let mut generator = RandomPuzzleGenerator::new(2024);

    for _ in 0..25 {
        let board = generator.generate().unwrap();
        let census = tile_census(&board);
        let count = |tile: Tile| census.get(&tile).copied().unwrap_or(0);

        assert_eq!(count(Tile::GOLD), 1);
        assert_eq!(board[CENTER], Tile::GOLD);
        for metal in Metal::ALL {
            assert_eq!(count(Tile::Metal(metal)), 1, "{metal:?}\n{board}");
        }
        assert_eq!(count(Tile::Quicksilver), 5, "\n{board}");
        assert_eq!(count(Tile::Vitae), 4, "\n{board}");
        assert_eq!(count(Tile::Mors), 4, "\n{board}");
        assert_eq!(count(Tile::RestartMarker), 0);

        // salt + element pairs borrow their element from a plain element pair
        for element in Element::ALL {
            assert_eq!(count(Tile::Element(element)), 8, "{element:?}\n{board}");
        }
        assert_eq!(count(Tile::Salt), 2 * SALT_PAIRS, "\n{board}");
        assert_eq!(board.iter_tiles().count(), 2 * SLOT_PAIRS + 1);
    }
}

#[test]
fn generated_boards_start_at_lead_with_the_capstone_locked() {
    let mut generator = RandomPuzzleGenerator::new(8);

    for _ in 0..10 {
        let board = generator.generate().unwrap();

        assert_eq!(board.next_metal(), Metal::Lead);
        assert!(!board.tile_is_unlocked(CENTER));
        assert!(!board.unlocked_tiles().is_empty());
        assert!(!board.is_cleared());
    }
}

#[test]
fn metal_progress_tracks_quicksilver_matches() {
    let mut generator = RandomPuzzleGenerator::new(31);
    let mut rng = SmallRng::seed_from_u64(31);

    for _ in 0..20 {
        let mut board = generator.generate().unwrap();
        let mut metal_matches = 0;

        loop {
            let moves = board.legal_moves();
            let Some(&(a, b)) = moves.choose(&mut rng) else {
                break;
            };
            let claims_metal =
                board.tile(a) == Tile::Quicksilver || board.tile(b) == Tile::Quicksilver;
            assert!(board.try_match(a, b));
            if claims_metal {
                metal_matches += 1;
            }

            let expected = Metal::ALL[metal_matches];
            assert_eq!(board.next_metal(), expected);
            for lower in Metal::ALL.iter().filter(|&&metal| metal < expected) {
                assert_eq!(board.count_tiles(Tile::Metal(*lower)), 0);
            }
        }
    }
}

#[test]
fn playouts_never_touch_the_source_board() {
    let board = RandomPuzzleGenerator::new(5).generate().unwrap();
    let before = board.clone();
    let mut rng = SmallRng::seed_from_u64(5);

    let stats = sample_playouts(&board, 50, &mut rng);

    assert_eq!(stats.games, 50);
    assert_eq!(board, before);
}

#[test]
fn difficulty_estimates_are_stable() {
    let board = RandomPuzzleGenerator::new(77).generate().unwrap();
    let mut rng = SmallRng::seed_from_u64(77);

    let first = estimate_difficulty(&board, 1500, &mut rng);
    let second = estimate_difficulty(&board, 1500, &mut rng);

    assert!((0.0..=1.0).contains(&first));
    assert!((first - second).abs() < 0.1, "{first} vs {second}");
}

#[test]
fn hard_boards_stay_hard_for_random_players() {
    let mut generator = HardPuzzleGenerator::new(123, GeneratorConfig::default());
    let mut rng = SmallRng::seed_from_u64(321);
    let mut total = PlayoutStats::default();

    for _ in 0..10 {
        let accepted = generator.generate_hard().unwrap();
        assert_eq!(accepted.difficulty, 1.0);

        let stats = sample_playouts(&accepted.board, 500, &mut rng);
        total.games += stats.games;
        total.wins += stats.wins;
    }

    assert!(total.win_rate() < 0.1, "{total:?}");
}

#[test]
fn stuck_board_offers_restart() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut generator = RandomPuzzleGenerator::new(9);

    let mut board = loop {
        let mut board = generator.generate().unwrap();
        if random_playout(&mut board, &mut rng) == PlayoutOutcome::Stuck {
            break board;
        }
    };

    assert!(board.is_stuck());
    board.place_restart_marker();
    assert!(!board.is_stuck());
    assert!(board.unlocked_tiles().contains(&CENTER));
}
