use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration, need positive size and at least one safe cell")]
    InvalidConfiguration,
    #[error("Coordinates are outside of the board")]
    OutOfBounds,
    #[error("Cell is already open")]
    AlreadyOpen,
    #[error("Open cells cannot be flagged")]
    InvalidTransition,
    #[error("Not enough free cells to place the requested mines")]
    InsufficientSpace,
}

pub type Result<T> = core::result::Result<T, GameError>;
