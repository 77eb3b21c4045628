//! Conquest mode rules.

use super::{PlacementError, PlacementRules};
use crate::Board;
use conquest_core::{GameMode, PieceKind, Player, Square};

/// Conquest mode: any empty tile is a legal target.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConquestRules;

impl PlacementRules for ConquestRules {
    fn mode(&self) -> GameMode {
        GameMode::Conquest
    }

    fn check_target(
        &self,
        _board: &Board,
        _mover: Player,
        _kind: PieceKind,
        _target: Square,
    ) -> Result<(), PlacementError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceBudget;

    #[test]
    fn every_empty_tile_is_legal() {
        let board = Board::new(6).unwrap();
        let budget = PieceBudget::new();
        for kind in PieceKind::ALL {
            let targets = ConquestRules.legal_targets(&board, &budget, Player::Opponent, kind);
            assert_eq!(targets.len(), 36);
        }
    }

    #[test]
    fn king_does_not_end_game() {
        assert!(!ConquestRules.ends_game(PieceKind::King));
    }
}
