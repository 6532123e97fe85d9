use crate::*;
pub use budget::*;
pub use hard::*;
pub use random::*;

mod budget;
mod hard;
mod random;

/// Number of symbol pairs dealt onto every board, the capstone aside.
pub const SLOT_PAIRS: usize = 27;

/// Salt pairs in the standard budget, some of which may become salt + element pairs.
pub const SALT_PAIRS: usize = 2;

pub trait PuzzleGenerator {
    /// Builds a complete board ready for play.
    fn generate(&mut self) -> Result<Board>;
}
