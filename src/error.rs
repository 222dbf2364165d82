use thiserror::Error;

/// Errors raised by the board, the search engine and the game controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cell ({row}, {column}) is outside the grid")]
    IndexOutOfRange { row: usize, column: usize },

    #[error("Invalid move, column {column} out of range")]
    ColumnOutOfRange { column: usize },

    #[error("Invalid move, column {column} full")]
    InvalidMove { column: usize },

    #[error("no legal move, every column is full")]
    NoLegalMove,

    #[error("the game is already over")]
    GameOver,

    #[error("waiting for the engine to move")]
    NotHumanTurn,

    #[error("waiting for a human to move")]
    NotEngineTurn,

    #[error("could not parse '{character}' as a valid move")]
    Parse { character: char },
}

pub type Result<T> = std::result::Result<T, Error>;
