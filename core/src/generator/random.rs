use alloc::vec::Vec;
use core::iter;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::{IndexedRandom, SliceRandom};

use super::*;

/// Stand-in tile marking silhouette cells before symbols are dealt.
const PLACEHOLDER: Tile = Tile::Salt;

/// Two cells that receive one matching pair of symbols.
pub type SlotPair = [Coord2; 2];

/// A generated board together with the order its pairs were carved in.
///
/// Playing the pairs in that order, then claiming the capstone, always clears the board.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedPuzzle {
    pub board: Board,
    pub solution: Vec<SlotPair>,
}

/// Deals symbol pairs onto a random silhouette, restarting from scratch on a dead end.
#[derive(Clone, Debug)]
pub struct RandomPuzzleGenerator {
    rng: SmallRng,
    max_fill_retries: Option<u32>,
}

impl RandomPuzzleGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            max_fill_retries: GeneratorConfig::default().max_fill_retries,
        }
    }

    /// Caps dead-end restarts within one board, `None` retries forever.
    pub fn with_max_fill_retries(mut self, max_fill_retries: Option<u32>) -> Self {
        self.max_fill_retries = max_fill_retries;
        self
    }

    pub fn generate_with_solution(&mut self) -> Result<GeneratedPuzzle> {
        let mut board = Board::new();
        let mut restarts = 0;

        let slot_pairs = loop {
            let silhouette = SILHOUETTES
                .choose(&mut self.rng)
                .ok_or(GameError::InvalidSilhouette)?;
            let mirrored = self.rng.random_bool(0.5);

            if let Some(slot_pairs) =
                carve_slot_pairs(&mut board, silhouette, mirrored, &mut self.rng)?
            {
                break slot_pairs;
            }

            restarts += 1;
            log::trace!(
                "Dead end carving {} (mirrored: {}), restart #{}",
                silhouette.slug,
                mirrored,
                restarts
            );
            if let Some(max) = self.max_fill_retries
                && restarts >= max
            {
                log::warn!("Gave up carving a board after {} restarts", restarts);
                return Err(GameError::AttemptsExhausted { attempts: restarts });
            }
        };

        deal_symbols(&mut board, &slot_pairs, &mut self.rng)?;
        Ok(GeneratedPuzzle {
            board,
            solution: slot_pairs,
        })
    }
}

impl PuzzleGenerator for RandomPuzzleGenerator {
    fn generate(&mut self) -> Result<Board> {
        self.generate_with_solution().map(|puzzle| puzzle.board)
    }
}

/// Fills `silhouette` with placeholders and removes random unlocked pairs until
/// only the capstone is left.
///
/// Returns `None` when fewer than two cells are free before all pairs are
/// carved. The pairs come out in an order that can be played back as is.
fn carve_slot_pairs<R: Rng + ?Sized>(
    board: &mut Board,
    silhouette: &Silhouette,
    mirrored: bool,
    rng: &mut R,
) -> Result<Option<Vec<SlotPair>>> {
    board.clear();
    board.set_tile(CENTER, Tile::GOLD)?;

    let cells = silhouette.cells(mirrored)?;
    if cells.len() != 2 * SLOT_PAIRS + 1 || !cells.contains(&CENTER) {
        return Err(GameError::InvalidSilhouette);
    }
    for &coords in cells.iter().filter(|&&coords| coords != CENTER) {
        board.set_tile(coords, PLACEHOLDER)?;
    }

    let mut slot_pairs = Vec::with_capacity(SLOT_PAIRS);
    for _ in 0..SLOT_PAIRS {
        let mut unlocked = board.unlocked_tiles();
        unlocked.retain(|&coords| coords != CENTER);
        if unlocked.len() < 2 {
            return Ok(None);
        }

        unlocked.shuffle(rng);
        let pair = [unlocked[0], unlocked[1]];
        for coords in pair {
            board.set_tile(coords, Tile::Empty)?;
        }
        slot_pairs.push(pair);
    }

    Ok(Some(slot_pairs))
}

/// Assigns a matching pair of symbols to every slot pair, drawing kinds from the budget.
fn deal_symbols<R: Rng + ?Sized>(
    board: &mut Board,
    slot_pairs: &[SlotPair],
    rng: &mut R,
) -> Result<()> {
    let mut budget = Budget::standard();

    // some salt pairs turn into salt + element, taken from that element's pairs
    let salt_matches = rng.random_range(0..=SALT_PAIRS);
    let mut salt_partners = Vec::with_capacity(SALT_PAIRS + salt_matches);
    for _ in 0..salt_matches {
        let element = Element::ALL[rng.random_range(0..Element::ALL.len())];
        budget.take(PairKind::Element(element));
        budget.add(PairKind::Salt, 1);
        salt_partners.extend([Tile::Element(element); 2]);
    }
    salt_partners.extend(iter::repeat_n(Tile::Salt, SALT_PAIRS - salt_matches));
    salt_partners.shuffle(rng);

    let mut metal = Metal::Lead;
    for mut slot_pair in slot_pairs.iter().copied() {
        slot_pair.shuffle(rng);
        let [first, second] = slot_pair;

        let kind = budget.draw(rng)?;
        let (first_tile, second_tile) = match kind {
            PairKind::Element(element) => (Tile::Element(element), Tile::Element(element)),
            PairKind::Salt => (Tile::Salt, salt_partners.pop().unwrap_or(Tile::Salt)),
            PairKind::LifeDeath => (Tile::Mors, Tile::Vitae),
            PairKind::Metal => (Tile::Quicksilver, Tile::Metal(metal)),
        };
        board.set_tile(first, first_tile)?;
        board.set_tile(second, second_tile)?;

        if kind == PairKind::Metal {
            // the metal weight stays put until only Gold, the capstone, is left
            match metal.next() {
                Some(next) if next != Metal::Gold => metal = next,
                _ => budget.set(PairKind::Metal, 0),
            }
        } else {
            budget.take(kind);
        }
    }

    board.set_next_metal(Metal::Lead);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_board_has_every_metal_once() {
        let mut generator = RandomPuzzleGenerator::new(3);

        for _ in 0..10 {
            let board = generator.generate().unwrap();

            assert_eq!(board[CENTER], Tile::GOLD);
            for metal in Metal::ALL {
                assert_eq!(board.count_tiles(Tile::Metal(metal)), 1, "{metal:?}");
            }
            assert_eq!(board.count_tiles(Tile::Quicksilver), 5);
            assert_eq!(board.next_metal(), Metal::Lead);
            assert_eq!(board.iter_tiles().count(), 2 * SLOT_PAIRS + 1);
        }
    }

    #[test]
    fn same_seed_same_board() {
        let a = RandomPuzzleGenerator::new(99).generate().unwrap();
        let b = RandomPuzzleGenerator::new(99).generate().unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn solution_replays_to_a_cleared_board() {
        let mut generator = RandomPuzzleGenerator::new(11);

        for _ in 0..10 {
            let GeneratedPuzzle {
                mut board,
                solution,
            } = generator.generate_with_solution().unwrap();
            assert_eq!(solution.len(), SLOT_PAIRS);

            for [a, b] in solution {
                assert!(board.tile_is_unlocked(a), "{a:?} locked\n{board}");
                assert!(board.tile_is_unlocked(b), "{b:?} locked\n{board}");
                assert!(board.try_match(a, b), "{a:?} {b:?} do not match\n{board}");
            }
            assert_eq!(board.next_metal(), Metal::Gold);
            assert!(board.try_claim_capstone());
            assert!(board.is_cleared());
        }
    }

    #[test]
    fn carving_stops_with_only_the_capstone_left() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut board = Board::new();
        let silhouette = silhouette_by_slug("halo").unwrap();

        let carved = loop {
            let carved = carve_slot_pairs(&mut board, silhouette, false, &mut rng).unwrap();
            if let Some(pairs) = carved {
                break pairs;
            }
        };

        assert_eq!(carved.len(), SLOT_PAIRS);
        assert_eq!(board.iter_tiles().collect::<Vec<_>>(), [(CENTER, Tile::GOLD)]);
    }

    #[test]
    fn fill_retry_cap_is_reported() {
        let mut generator = RandomPuzzleGenerator::new(1).with_max_fill_retries(Some(0));

        // a cap of zero gives up on the first dead end, or succeeds first try
        match generator.generate() {
            Ok(board) => assert_eq!(board.count_tiles(Tile::GOLD), 1),
            Err(err) => assert_eq!(err, GameError::AttemptsExhausted { attempts: 1 }),
        }
    }
}
