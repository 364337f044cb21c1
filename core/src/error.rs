use thiserror::Error;

use crate::CellCount;

/// Construction-time failures. Player actions never produce these.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board needs at least one row and one column")]
    InvalidDimensions,
    #[error("Board needs at least one mine")]
    NoMines,
    #[error("Too many mines, requested {mines} but a board of {cells} cells needs a safe cell")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, BoardError>;
