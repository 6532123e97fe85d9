use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayoutOutcome {
    Won,
    Stuck,
}

impl PlayoutOutcome {
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Tally of independent random playouts on one board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutStats {
    pub games: u32,
    pub wins: u32,
}

impl PlayoutStats {
    /// Fraction of games won, zero when nothing was played.
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games)
        }
    }

    /// How often a random player fails, in `[0, 1]`.
    pub fn difficulty(&self) -> f64 {
        1.0 - self.win_rate()
    }
}

/// Plays `board` to the end by picking uniformly among the legal moves.
///
/// Once no pair is left the capstone is claimed if it can be, which counts as a win.
pub fn random_playout<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> PlayoutOutcome {
    loop {
        let moves = board.legal_moves();
        let Some(&(a, b)) = moves.choose(rng) else {
            return if board.try_claim_capstone() {
                PlayoutOutcome::Won
            } else {
                PlayoutOutcome::Stuck
            };
        };
        board.try_match(a, b);
    }
}

pub fn sample_playouts<R: Rng + ?Sized>(board: &Board, games: u32, rng: &mut R) -> PlayoutStats {
    let wins = (0..games)
        .filter(|_| random_playout(&mut board.clone(), rng).is_win())
        .count();

    PlayoutStats {
        games,
        wins: wins as u32,
    }
}

/// Share of `trials` random playouts that get stuck.
///
/// Zero trials gives zero, so an unsampled board never passes a difficulty gate.
pub fn estimate_difficulty<R: Rng + ?Sized>(board: &Board, trials: u32, rng: &mut R) -> f64 {
    if trials == 0 {
        return 0.0;
    }
    sample_playouts(board, trials, rng).difficulty()
}
