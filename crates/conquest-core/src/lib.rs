//! Core types for placement chess.
//!
//! This crate provides the fundamental types shared by the engine and the
//! terminal front-end:
//! - [`Player`] for the two seats at the board
//! - [`PieceKind`] and [`Piece`] for piece representation
//! - [`GameMode`] for the two rule variants
//! - [`Square`] for board coordinates and algebraic notation
//! - [`Tile`] for the contents of one board cell
//! - Save record parsing and serialization

mod mode;
mod piece;
mod player;
mod save;
mod square;
mod tile;

pub use mode::GameMode;
pub use piece::{Piece, PieceKind};
pub use player::Player;
pub use save::{SaveError, SaveRecord};
pub use square::{column_letter, Square, SquareError, MAX_DIM, MIN_DIM};
pub use tile::Tile;
