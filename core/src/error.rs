use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Puzzle data is not a 9x9 grid")]
    InvalidDimensions,
    #[error("Puzzle data could not be parsed")]
    MalformedPuzzle,
    #[error("Cell is not editable")]
    CellNotEditable,
    #[error("The solution has already been revealed")]
    AlreadyRevealed,
}

pub type Result<T> = core::result::Result<T, GameError>;
