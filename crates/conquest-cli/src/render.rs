//! ASCII board rendering.

use std::fmt::{self, Write};

use conquest_core::{column_letter, PieceKind, Player, Tile};
use conquest_engine::{Board, GameState};

/// Three lines of five columns each.
type Glyph = [&'static str; 3];

const UNCAPTURED: Glyph = ["·····", "·····", "·····"];
const USER_CAPTURED: Glyph = ["░░░░░", "░░░░░", "░░░░░"];
const OPPONENT_CAPTURED: Glyph = ["▓▓▓▓▓", "▓▓▓▓▓", "▓▓▓▓▓"];

fn light_glyph(kind: PieceKind) -> Glyph {
    match kind {
        PieceKind::King => [" \\+/ ", " ) ( ", "/___\\"],
        PieceKind::Queen => [" \\^/ ", " ) ( ", "/___\\"],
        PieceKind::Rook => [" (V) ", " ) ( ", "/___\\"],
        PieceKind::Bishop => [" (\"\\ ", " ) ' ", "/___\\"],
        PieceKind::Knight => [" [-] ", " | | ", "/___\\"],
        PieceKind::Pawn => ["  _  ", " |#| ", "/___\\"],
    }
}

fn dark_glyph(kind: PieceKind) -> Glyph {
    match kind {
        PieceKind::King => [" \\+/ ", " )#( ", "/###\\"],
        PieceKind::Queen => [" \\^/ ", " )#( ", "/###\\"],
        PieceKind::Rook => [" (V) ", " )#( ", "/###\\"],
        PieceKind::Bishop => [" (\"\\ ", " )#' ", "/###\\"],
        PieceKind::Knight => [" [-] ", " |#| ", "/###\\"],
        PieceKind::Pawn => ["  _  ", " (#) ", "/###\\"],
    }
}

fn glyph(tile: &Tile) -> Glyph {
    match (tile.piece, tile.captured_by) {
        (Some(piece), _) => match piece.owner {
            Player::User => light_glyph(piece.kind),
            Player::Opponent => dark_glyph(piece.kind),
        },
        (None, Some(Player::User)) => USER_CAPTURED,
        (None, Some(Player::Opponent)) => OPPONENT_CAPTURED,
        (None, None) => UNCAPTURED,
    }
}

fn write_column_labels(out: &mut impl Write, dim: u8) -> fmt::Result {
    out.write_str("     ")?;
    for x in 0..dim {
        write!(out, "   {}  ", column_letter(x))?;
    }
    writeln!(out)
}

fn write_row(out: &mut impl Write, row: &[Tile], label: usize) -> fmt::Result {
    for line in 0..3 {
        if line == 1 {
            write!(out, " {:>2}  ", label)?;
        } else {
            out.write_str("     ")?;
        }
        for tile in row {
            write!(out, " {}", glyph(tile)[line])?;
        }
        if line == 1 {
            write!(out, "   {:>2}", label)?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Display adapter drawing a whole board.
struct BoardView<'a>(&'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dim = self.0.dim();
        write_column_labels(f, dim)?;
        writeln!(f)?;
        for (y, row) in self.0.tiles().chunks(dim as usize).enumerate() {
            write_row(f, row, dim as usize - y)?;
        }
        write_column_labels(f, dim)
    }
}

/// Renders the board with column letters above and below and row numbers on
/// both sides. User pieces are drawn light, opponent pieces dark.
pub fn render_board(board: &Board) -> String {
    BoardView(board).to_string()
}

/// Summarizes whose turn it is, what they have left, and the score.
pub fn status_line(game: &GameState) -> String {
    let mover = game.turn();
    let colour = if mover == game.white() { "white" } else { "black" };
    let budget = game.budget(mover);
    let left: Vec<String> = budget
        .available()
        .map(|kind| format!("{} x{}", kind, budget.remaining(kind)))
        .collect();
    let score = game.score();
    format!(
        "{} mode | {} ({}) to play | left: {} | score: User {} - Opponent {}",
        game.mode(),
        mover,
        colour,
        if left.is_empty() {
            "nothing".to_string()
        } else {
            left.join(", ")
        },
        score.user,
        score.opponent
    )
}
