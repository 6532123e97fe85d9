use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

const PLAYOUT_SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seed for playouts on boards generated from `seed`, so they do not replay the candidate stream.
pub const fn playout_seed(seed: u64) -> u64 {
    seed ^ PLAYOUT_SEED_MIX
}

/// A board that passed the difficulty gate.
#[derive(Clone, Debug, PartialEq)]
pub struct AcceptedPuzzle {
    pub board: Board,
    /// Measured difficulty when it was accepted.
    pub difficulty: f64,
    /// Candidates generated, this one included.
    pub attempts: u32,
}

/// Generates random candidates until one is hard enough for a random player.
///
/// Candidates are sampled on copies, the accepted board is handed out untouched.
#[derive(Clone, Debug)]
pub struct HardPuzzleGenerator {
    candidates: RandomPuzzleGenerator,
    playout_rng: SmallRng,
    config: GeneratorConfig,
}

impl HardPuzzleGenerator {
    pub fn new(seed: u64, config: GeneratorConfig) -> Self {
        Self {
            candidates: RandomPuzzleGenerator::new(seed)
                .with_max_fill_retries(config.max_fill_retries),
            playout_rng: SmallRng::seed_from_u64(playout_seed(seed)),
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate_hard(&mut self) -> Result<AcceptedPuzzle> {
        let mut attempts = 0;
        loop {
            if let Some(max) = self.config.max_attempts
                && attempts >= max
            {
                log::warn!(
                    "No candidate reached difficulty {} in {} attempts",
                    self.config.threshold,
                    attempts
                );
                return Err(GameError::AttemptsExhausted { attempts });
            }
            attempts += 1;

            let board = self.candidates.generate()?;
            let difficulty =
                estimate_difficulty(&board, self.config.trials, &mut self.playout_rng);
            if difficulty >= self.config.threshold {
                log::debug!(
                    "Accepted candidate #{} with difficulty {:.3}",
                    attempts,
                    difficulty
                );
                return Ok(AcceptedPuzzle {
                    board,
                    difficulty,
                    attempts,
                });
            }

            log::debug!(
                "Rejected candidate #{} with difficulty {:.3}",
                attempts,
                difficulty
            );
        }
    }
}

impl PuzzleGenerator for HardPuzzleGenerator {
    fn generate(&mut self) -> Result<Board> {
        self.generate_hard().map(|accepted| accepted.board)
    }
}

/// One-shot hard board for `seed`.
pub fn generate_hard(seed: u64, config: GeneratorConfig) -> Result<Board> {
    HardPuzzleGenerator::new(seed, config).generate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_board_meets_threshold() {
        let config = GeneratorConfig::new(10, 0.9);
        let mut generator = HardPuzzleGenerator::new(17, config);

        let accepted = generator.generate_hard().unwrap();

        assert!(accepted.difficulty >= 0.9);
        assert!(accepted.attempts >= 1);
        assert_eq!(accepted.board.count_tiles(Tile::GOLD), 1);
    }

    #[test]
    fn zero_threshold_takes_the_first_candidate() {
        let config = GeneratorConfig::new(1, 0.0);
        let accepted = HardPuzzleGenerator::new(4, config).generate_hard().unwrap();

        assert_eq!(accepted.attempts, 1);
        assert_eq!(
            accepted.board,
            RandomPuzzleGenerator::new(4).generate().unwrap()
        );
    }

    #[test]
    fn playout_seed_differs_from_candidate_seed() {
        for seed in [0, 1, 4, 17, u64::MAX] {
            assert_ne!(playout_seed(seed), seed);
        }
        assert_eq!(playout_seed(playout_seed(42)), 42);
    }

    #[test]
    fn attempt_cap_fails_hard() {
        let config = GeneratorConfig {
            max_attempts: Some(0),
            ..GeneratorConfig::default()
        };

        assert_eq!(
            generate_hard(1, config),
            Err(GameError::AttemptsExhausted { attempts: 0 })
        );
    }
}
