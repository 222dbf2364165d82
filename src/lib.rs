//! A depth-limited minimax opponent for the board game 'Connect 4'
//!
//! The computer player exhaustively searches every line of play six
//! plies deep and scores the leaves with a static threat-counting
//! heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::{Board, Piece}, search::SearchEngine};
//!
//!# fn main() -> connect4_minimax::Result<()> {
//! let mut board = Board::new();
//! board.drop_piece(3, Piece::A)?;
//!
//! let column = SearchEngine::new(&mut board, Piece::B, Piece::A).compute_move()?;
//! board.drop_piece(column, Piece::B)?;
//!
//! assert!(column < connect4_minimax::WIDTH);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod error;

pub mod board;

pub mod search;

pub mod game;


pub use error::{Error, Result};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// a four-in-a-row has to fit in every direction
const_assert!(WIDTH >= 4 && HEIGHT >= 4);
