use thiserror::Error;

/// Reasons an operation is refused. A refused operation never changes the game.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cell is occupied! Choose an empty spot.")]
    CellOccupied,
    #[error("Player 2 must choose a wind direction first")]
    NotPlantersTurn,
    #[error("Player 1 must place a dandelion first")]
    NotWindsTurn,
    #[error("That wind direction was already used")]
    DirectionUsed,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Nothing to undo")]
    NothingToUndo,
}

pub type Result<T> = core::result::Result<T, GameError>;
