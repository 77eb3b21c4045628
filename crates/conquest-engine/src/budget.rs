//! Per-player placement budget.

use conquest_core::PieceKind;

/// How many pieces of each kind a player may still place.
///
/// Starts at the per-kind maxima (8 pawns, 2 knights, 2 bishops, 2 rooks,
/// 1 queen, 1 king) and only ever goes down; placed pieces are never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceBudget {
    remaining: [u8; 6],
}

impl Default for PieceBudget {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceBudget {
    /// Creates a full budget.
    pub fn new() -> Self {
        let mut remaining = [0; 6];
        for kind in PieceKind::ALL {
            remaining[kind.index()] = kind.max_count();
        }
        PieceBudget { remaining }
    }

    /// Returns how many pieces of `kind` are left.
    #[inline]
    pub fn remaining(&self, kind: PieceKind) -> u8 {
        self.remaining[kind.index()]
    }

    /// Returns how many pieces are left across all kinds.
    pub fn total(&self) -> u32 {
        self.remaining.iter().map(|&n| n as u32).sum()
    }

    /// Returns true if a piece of `kind` can still be placed.
    #[inline]
    pub fn can_take(&self, kind: PieceKind) -> bool {
        self.remaining(kind) > 0
    }

    /// Consumes one piece of `kind`.
    ///
    /// Returns false, leaving the budget untouched, if none are left.
    pub fn take(&mut self, kind: PieceKind) -> bool {
        let slot = &mut self.remaining[kind.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Drops every remaining piece.
    pub fn clear(&mut self) {
        self.remaining = [0; 6];
    }

    /// Returns true if nothing is left to place.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.iter().all(|&n| n == 0)
    }

    /// Iterates over the kinds that still have pieces left, in hierarchy order.
    pub fn available(&self) -> impl Iterator<Item = PieceKind> + '_ {
        PieceKind::ALL.into_iter().filter(|&kind| self.can_take(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_budget() {
        let budget = PieceBudget::new();
        assert_eq!(budget.total(), 16);
        assert_eq!(budget.remaining(PieceKind::Pawn), 8);
        assert_eq!(budget.remaining(PieceKind::Knight), 2);
        assert_eq!(budget.remaining(PieceKind::Bishop), 2);
        assert_eq!(budget.remaining(PieceKind::Rook), 2);
        assert_eq!(budget.remaining(PieceKind::Queen), 1);
        assert_eq!(budget.remaining(PieceKind::King), 1);
        assert!(!budget.is_exhausted());
    }

    #[test]
    fn take_until_empty() {
        let mut budget = PieceBudget::new();
        assert!(budget.take(PieceKind::Queen));
        assert_eq!(budget.remaining(PieceKind::Queen), 0);
        assert!(!budget.take(PieceKind::Queen));
        assert_eq!(budget.remaining(PieceKind::Queen), 0);
        assert_eq!(budget.total(), 15);
    }

    #[test]
    fn take_every_piece() {
        let mut budget = PieceBudget::new();
        let mut placed = 0;
        for kind in PieceKind::ALL {
            while budget.take(kind) {
                placed += 1;
            }
        }
        assert_eq!(placed, 16);
        assert!(budget.is_exhausted());
        assert_eq!(budget.available().count(), 0);
    }

    #[test]
    fn clear_exhausts() {
        let mut budget = PieceBudget::new();
        budget.clear();
        assert!(budget.is_exhausted());
        assert_eq!(budget.total(), 0);
        assert!(!budget.take(PieceKind::Pawn));
    }

    #[test]
    fn available_kinds() {
        let mut budget = PieceBudget::new();
        budget.take(PieceKind::King);
        let kinds: Vec<PieceKind> = budget.available().collect();
        assert_eq!(
            kinds,
            vec![
                PieceKind::Pawn,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen
            ]
        );
    }
}
