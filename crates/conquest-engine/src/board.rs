//! Square grid of tiles.

use conquest_core::{Player, Square, Tile, MAX_DIM, MIN_DIM};
use thiserror::Error;

/// Errors that can occur when creating a board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board dimension {0}: expected {min}..={max}", min = MIN_DIM, max = MAX_DIM)]
    InvalidDimension(u8),

    #[error("expected {expected} tiles, got {got}")]
    TileCount { expected: usize, got: usize },
}

/// A `dim × dim` grid of tiles.
///
/// Tiles live in one contiguous buffer indexed by `y * dim + x`. Accessors
/// treat an off-board square as a caller bug and panic; use
/// [`contains`](Board::contains) or [`Square::offset`] to stay in bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dim: u8,
    tiles: Vec<Tile>,
}

impl Board {
    /// Creates an empty board with no captured tiles.
    pub fn new(dim: u8) -> Result<Self, BoardError> {
        if !(MIN_DIM..=MAX_DIM).contains(&dim) {
            return Err(BoardError::InvalidDimension(dim));
        }
        Ok(Board {
            dim,
            tiles: vec![Tile::EMPTY; dim as usize * dim as usize],
        })
    }

    /// Creates a board from row-major tiles.
    pub fn from_tiles(dim: u8, tiles: Vec<Tile>) -> Result<Self, BoardError> {
        if !(MIN_DIM..=MAX_DIM).contains(&dim) {
            return Err(BoardError::InvalidDimension(dim));
        }
        let expected = dim as usize * dim as usize;
        if tiles.len() != expected {
            return Err(BoardError::TileCount {
                expected,
                got: tiles.len(),
            });
        }
        Ok(Board { dim, tiles })
    }

    /// Returns the side length of the board.
    #[inline]
    pub fn dim(&self) -> u8 {
        self.dim
    }

    /// Returns true if `sq` lies on the board.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        sq.x() < self.dim && sq.y() < self.dim
    }

    #[inline]
    fn index(&self, sq: Square) -> usize {
        assert!(self.contains(sq), "{:?} is off a {}x{} board", sq, self.dim, self.dim);
        sq.y() as usize * self.dim as usize + sq.x() as usize
    }

    /// Returns the tile at `sq`.
    #[inline]
    pub fn get(&self, sq: Square) -> &Tile {
        &self.tiles[self.index(sq)]
    }

    /// Returns the tile at `sq` mutably.
    #[inline]
    pub fn get_mut(&mut self, sq: Square) -> &mut Tile {
        let index = self.index(sq);
        &mut self.tiles[index]
    }

    /// Replaces the tile at `sq`.
    #[inline]
    pub fn set(&mut self, sq: Square, tile: Tile) {
        *self.get_mut(sq) = tile;
    }

    /// Returns the row-major tiles.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterates over every square, row 0 first.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let dim = self.dim;
        (0..dim).flat_map(move |y| (0..dim).map(move |x| Square::new(x, y)))
    }

    /// Iterates over every square together with its tile.
    pub fn iter(&self) -> impl Iterator<Item = (Square, &Tile)> {
        self.squares().zip(self.tiles.iter())
    }

    /// Counts the tiles captured by `player`, occupied or not.
    pub fn captured_count(&self, player: Player) -> usize {
        self.tiles.iter().filter(|t| t.is_captured_by(player)).count()
    }

    /// Counts the pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_vacant()).count()
    }
}
