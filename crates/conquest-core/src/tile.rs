//! Contents of a single board cell.

use crate::{Piece, Player};

/// One board cell.
///
/// A tile may hold a piece and may be captured by a player; the two are
/// independent. A freshly placed piece captures its own tile for its owner,
/// but a later capture by the other player can overwrite that mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    pub piece: Option<Piece>,
    pub captured_by: Option<Player>,
}

impl Tile {
    /// An empty, uncaptured tile.
    pub const EMPTY: Tile = Tile {
        piece: None,
        captured_by: None,
    };

    /// Returns true if no piece stands on this tile.
    #[inline]
    pub const fn is_vacant(&self) -> bool {
        self.piece.is_none()
    }

    /// Returns true if a piece owned by `player` stands on this tile.
    #[inline]
    pub fn is_occupied_by(&self, player: Player) -> bool {
        matches!(self.piece, Some(p) if p.owner == player)
    }

    /// Returns true if this tile is captured by `player`.
    #[inline]
    pub fn is_captured_by(&self, player: Player) -> bool {
        self.captured_by == Some(player)
    }
}
