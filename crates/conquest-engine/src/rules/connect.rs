//! Connect mode rules.

use super::{PlacementError, PlacementRules};
use crate::capture::is_tile_captured_by_piece_kind;
use crate::Board;
use conquest_core::{GameMode, PieceKind, Player, Square};

/// Connect mode: placements climb the Pawn→Knight→Bishop→Rook→Queen→King
/// chain.
///
/// A Pawn may go on any empty tile. Any other kind must go on a tile the
/// mover holds and that one of the mover's pieces of the previous kind
/// reaches. Placing the King ends the game.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectRules;

impl PlacementRules for ConnectRules {
    fn mode(&self) -> GameMode {
        GameMode::Connect
    }

    fn check_target(
        &self,
        board: &Board,
        mover: Player,
        kind: PieceKind,
        target: Square,
    ) -> Result<(), PlacementError> {
        let Some(required) = kind.previous() else {
            return Ok(());
        };
        if board.get(target).is_captured_by(mover)
            && is_tile_captured_by_piece_kind(board, mover, target, required)
        {
            Ok(())
        } else {
            Err(PlacementError::HierarchyViolation { kind, required })
        }
    }

    fn ends_game(&self, kind: PieceKind) -> bool {
        kind == PieceKind::King
    }
}
