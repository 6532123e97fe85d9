use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Malformed board layout")]
    InvalidLayout,
    #[error("Board shape does not match the hexagon")]
    InvalidBoardShape,
    #[error("Silhouette does not fit the slot pairs")]
    InvalidSilhouette,
    #[error("Symbol budget exhausted before every slot pair was dealt")]
    EmptyBudget,
    #[error("Gave up after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },
}

pub type Result<T> = core::result::Result<T, GameError>;
