pub use difficulty::*;

mod difficulty;
