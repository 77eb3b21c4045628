//! Placement rules for the game modes.
//!
//! This module provides the [`PlacementRules`] trait, which abstracts over the
//! two modes. The turn engine picks an implementation once, when the game is
//! created, and delegates every mode-specific legality question to it.

mod conquest;
mod connect;

pub use connect::ConnectRules;
pub use conquest::ConquestRules;

use std::fmt;

use conquest_core::{GameMode, PieceKind, Player, Square};
use thiserror::Error;

use crate::{Board, PieceBudget};

/// Reasons a placement is refused.
///
/// All of them are recoverable: the turn does not advance and the same
/// player may try again.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("square {0} is off the board")]
    OutOfBounds(Square),

    #[error("square {0} already holds a piece")]
    TileOccupied(Square),

    #[error("a {kind} must go on a tile you captured with a {required}")]
    HierarchyViolation { kind: PieceKind, required: PieceKind },

    #[error("no {0} left to place")]
    BudgetExhausted(PieceKind),
}

/// Mode-specific placement legality.
///
/// # Example
///
/// ```
/// use conquest_core::{GameMode, PieceKind, Player, Square};
/// use conquest_engine::rules::{rules_for, PlacementRules};
/// use conquest_engine::{Board, PieceBudget};
///
/// let board = Board::new(8).unwrap();
/// let rules = rules_for(GameMode::Connect);
/// let budget = PieceBudget::new();
/// assert!(rules
///     .validate(&board, &budget, Player::User, PieceKind::Pawn, Square::new(3, 3))
///     .is_ok());
/// ```
pub trait PlacementRules: fmt::Debug + Send + Sync {
    /// Returns the mode these rules implement.
    fn mode(&self) -> GameMode;

    /// Checks the mode-specific constraint for placing `kind` on `target`.
    ///
    /// Called only for on-board, unoccupied targets.
    fn check_target(
        &self,
        board: &Board,
        mover: Player,
        kind: PieceKind,
        target: Square,
    ) -> Result<(), PlacementError>;

    /// Returns true if placing `kind` ends the game on the spot.
    fn ends_game(&self, _kind: PieceKind) -> bool {
        false
    }

    /// Runs every placement check in order: bounds, occupancy, the mode rule,
    /// then the mover's budget. Nothing is mutated.
    fn validate(
        &self,
        board: &Board,
        budget: &PieceBudget,
        mover: Player,
        kind: PieceKind,
        target: Square,
    ) -> Result<(), PlacementError> {
        if !board.contains(target) {
            return Err(PlacementError::OutOfBounds(target));
        }
        if !board.get(target).is_vacant() {
            return Err(PlacementError::TileOccupied(target));
        }
        self.check_target(board, mover, kind, target)?;
        if !budget.can_take(kind) {
            return Err(PlacementError::BudgetExhausted(kind));
        }
        Ok(())
    }

    /// Returns every square where `mover` could place `kind` right now.
    fn legal_targets(
        &self,
        board: &Board,
        budget: &PieceBudget,
        mover: Player,
        kind: PieceKind,
    ) -> Vec<Square> {
        board
            .squares()
            .filter(|&sq| self.validate(board, budget, mover, kind, sq).is_ok())
            .collect()
    }

    /// Returns the kinds `mover` can place somewhere, in hierarchy order.
    fn playable_kinds(&self, board: &Board, budget: &PieceBudget, mover: Player) -> Vec<PieceKind> {
        budget
            .available()
            .filter(|&kind| {
                board
                    .squares()
                    .any(|sq| self.validate(board, budget, mover, kind, sq).is_ok())
            })
            .collect()
    }

    /// Returns true if `mover` has at least one legal placement.
    fn can_place_any(&self, board: &Board, budget: &PieceBudget, mover: Player) -> bool {
        budget.available().any(|kind| {
            board
                .squares()
                .any(|sq| self.validate(board, budget, mover, kind, sq).is_ok())
        })
    }
}

/// Returns the rules for `mode`.
pub fn rules_for(mode: GameMode) -> &'static dyn PlacementRules {
    match mode {
        GameMode::Conquest => &ConquestRules,
        GameMode::Connect => &ConnectRules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conquest_core::{Piece, Tile};

    #[test]
    fn rules_for_mode() {
        assert_eq!(rules_for(GameMode::Conquest).mode(), GameMode::Conquest);
        assert_eq!(rules_for(GameMode::Connect).mode(), GameMode::Connect);
    }

    #[test]
    fn validate_checks_bounds_first() {
        let board = Board::new(6).unwrap();
        let mut budget = PieceBudget::new();
        budget.clear();
        let target = Square::new(6, 0);
        for mode in GameMode::ALL {
            assert_eq!(
                rules_for(mode).validate(&board, &budget, Player::User, PieceKind::Pawn, target),
                Err(PlacementError::OutOfBounds(target))
            );
        }
    }

    #[test]
    fn validate_rejects_occupied_tiles() {
        let mut board = Board::new(6).unwrap();
        let target = Square::new(1, 1);
        board.set(
            target,
            Tile {
                piece: Some(Piece::new(PieceKind::Pawn, Player::User)),
                captured_by: Some(Player::User),
            },
        );
        let budget = PieceBudget::new();
        for mode in GameMode::ALL {
            assert_eq!(
                rules_for(mode).validate(&board, &budget, Player::Opponent, PieceKind::Pawn, target),
                Err(PlacementError::TileOccupied(target))
            );
        }
    }

    #[test]
    fn validate_checks_budget_last() {
        let board = Board::new(6).unwrap();
        let mut budget = PieceBudget::new();
        budget.take(PieceKind::Queen);
        assert_eq!(
            rules_for(GameMode::Conquest).validate(
                &board,
                &budget,
                Player::User,
                PieceKind::Queen,
                Square::new(0, 0)
            ),
            Err(PlacementError::BudgetExhausted(PieceKind::Queen))
        );
    }

    #[test]
    fn playable_kinds_follow_budget() {
        let board = Board::new(6).unwrap();
        let mut budget = PieceBudget::new();
        while budget.take(PieceKind::Pawn) {}
        let kinds = rules_for(GameMode::Conquest).playable_kinds(&board, &budget, Player::User);
        assert_eq!(kinds.first(), Some(&PieceKind::Knight));
        assert_eq!(kinds.len(), 5);
    }
}
