//! Capture patterns for all piece kinds.
//!
//! A placed piece captures its own tile plus every tile its pattern reaches:
//!
//! - King and Knight reach their fixed offsets.
//! - Pawn reaches the single tile straight ahead of its owner.
//! - Rook, Bishop and Queen slide until the board edge or a piece. A tile
//!   holding an opposing piece stops the slide and stays untouched; a tile
//!   holding a friendly piece is captured and then stops the slide.
//!
//! Fixed-offset targets are only captured when empty or friendly.

use conquest_core::{Piece, PieceKind, Player, Square, Tile};
use tracing::trace;

use crate::Board;

/// King offsets `(dx, dy)`.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Knight jumps `(dx, dy)`.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
fn claimable(tile: &Tile, capturer: Player) -> bool {
    tile.is_vacant() || tile.is_occupied_by(capturer)
}

fn step_targets(
    board: &Board,
    origin: Square,
    offsets: &[(i8, i8)],
    capturer: Player,
    out: &mut Vec<Square>,
) {
    for &(dx, dy) in offsets {
        if let Some(sq) = origin.offset(dx, dy, board.dim()) {
            if claimable(board.get(sq), capturer) {
                out.push(sq);
            }
        }
    }
}

fn slide_targets(
    board: &Board,
    origin: Square,
    directions: &[(i8, i8)],
    capturer: Player,
    out: &mut Vec<Square>,
) {
    for &(dx, dy) in directions {
        let mut current = origin;
        while let Some(sq) = current.offset(dx, dy, board.dim()) {
            let tile = board.get(sq);
            if tile.is_occupied_by(capturer.opposite()) {
                break;
            }
            out.push(sq);
            if !tile.is_vacant() {
                break;
            }
            current = sq;
        }
    }
}

/// Returns the tiles a piece of `kind` owned by `capturer` standing on
/// `origin` captures, not counting `origin` itself.
///
/// The board is read as it is now; whatever stands on `origin` is ignored.
pub fn capture_targets(
    board: &Board,
    origin: Square,
    kind: PieceKind,
    capturer: Player,
) -> Vec<Square> {
    let mut targets = Vec::new();
    if kind.is_slider() {
        if matches!(kind, PieceKind::Rook | PieceKind::Queen) {
            slide_targets(board, origin, &ROOK_DIRECTIONS, capturer, &mut targets);
        }
        if matches!(kind, PieceKind::Bishop | PieceKind::Queen) {
            slide_targets(board, origin, &BISHOP_DIRECTIONS, capturer, &mut targets);
        }
    } else {
        let pawn_step = [(0, capturer.forward())];
        let offsets: &[(i8, i8)] = match kind {
            PieceKind::King => &KING_OFFSETS,
            PieceKind::Knight => &KNIGHT_OFFSETS,
            _ => &pawn_step,
        };
        step_targets(board, origin, offsets, capturer, &mut targets);
    }
    targets
}

/// Marks `origin` and every tile reached from it as captured by `capturer`.
///
/// Existing marks are overwritten; the last capturer to reach a tile owns it.
/// Returns the number of tiles marked, `origin` included.
pub fn apply_capture(
    board: &mut Board,
    origin: Square,
    kind: PieceKind,
    capturer: Player,
) -> usize {
    let targets = capture_targets(board, origin, kind, capturer);
    board.get_mut(origin).captured_by = Some(capturer);
    for &sq in &targets {
        board.get_mut(sq).captured_by = Some(capturer);
    }
    trace!(?origin, %kind, %capturer, captured = targets.len(), "applied capture");
    targets.len() + 1
}

/// Returns true if a piece of `kind` owned by `owner` standing on `origin`
/// would capture `target`.
pub fn captures_tile(
    board: &Board,
    origin: Square,
    kind: PieceKind,
    owner: Player,
    target: Square,
) -> bool {
    origin == target || capture_targets(board, origin, kind, owner).contains(&target)
}

/// Returns true if any piece of `kind` owned by `player` captures `target`
/// on the current board.
///
/// Reach is recomputed with the same blocking rules used at placement time,
/// so a slide that has since been cut off by a newer piece no longer counts.
pub fn is_tile_captured_by_piece_kind(
    board: &Board,
    player: Player,
    target: Square,
    kind: PieceKind,
) -> bool {
    let wanted = Some(Piece::new(kind, player));
    board
        .iter()
        .filter(|(_, tile)| tile.piece == wanted)
        .any(|(origin, _)| captures_tile(board, origin, kind, player, target))
}
