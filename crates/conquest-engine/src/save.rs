//! Rebuilding games from save records.

use conquest_core::{GameMode, PieceKind, Player, SaveError, SaveRecord};
use thiserror::Error;
use tracing::debug;

use crate::board::{Board, BoardError};
use crate::budget::PieceBudget;
use crate::game::{EndReason, GameState, GameStatus};
use crate::rules::rules_for;

/// Errors that can occur when loading a saved game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("malformed save: {0}")]
    Format(#[from] SaveError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("{player} has more {kind} pieces on the board than allowed")]
    InvalidPieceCount { player: Player, kind: PieceKind },
}

impl GameState {
    /// Parses and rebuilds a saved game.
    pub fn from_save(text: &str) -> Result<Self, LoadError> {
        let record = SaveRecord::parse(text)?;
        Self::from_record(record)
    }

    /// Rebuilds a game from a parsed record.
    ///
    /// Budgets are recomputed by replaying every piece on the board. End
    /// conditions are then checked again, so a record of a finished game
    /// loads as finished.
    pub fn from_record(record: SaveRecord) -> Result<Self, LoadError> {
        let board = Board::from_tiles(record.dim, record.tiles)?;

        let mut budgets = [PieceBudget::new(); 2];
        for (_, tile) in board.iter() {
            if let Some(piece) = tile.piece {
                if !budgets[piece.owner.index()].take(piece.kind) {
                    return Err(LoadError::InvalidPieceCount {
                        player: piece.owner,
                        kind: piece.kind,
                    });
                }
            }
        }

        let mut game = GameState {
            mode: record.mode,
            rules: rules_for(record.mode),
            board,
            turn: record.turn,
            white: record.white,
            budgets,
            status: GameStatus::AwaitingMove,
        };
        debug!(mode = %game.mode, dim = game.dim(), turn = %game.turn, "loaded game");

        let king_owner = game.board.iter().find_map(|(_, tile)| {
            tile.piece
                .filter(|p| p.kind == PieceKind::King)
                .map(|p| p.owner)
        });
        match (game.mode, king_owner) {
            (GameMode::Connect, Some(owner)) => {
                for budget in &mut game.budgets {
                    budget.clear();
                }
                game.finish(EndReason::KingPlaced(owner));
            }
            _ => game.check_game_end(),
        }
        Ok(game)
    }

    /// Captures the game as a save record.
    pub fn to_record(&self) -> SaveRecord {
        SaveRecord {
            mode: self.mode,
            white: self.white,
            turn: self.turn,
            dim: self.board.dim(),
            tiles: self.board.tiles().to_vec(),
        }
    }

    /// Serializes the game to save-file text.
    pub fn to_save(&self) -> String {
        self.to_record().to_save_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conquest_core::{Piece, Square, Tile};

    fn record_with_pieces(mode: GameMode, dim: u8, pieces: &[(Square, Piece)]) -> SaveRecord {
        let mut board = Board::new(dim).unwrap();
        for &(sq, piece) in pieces {
            board.set(
                sq,
                Tile {
                    piece: Some(piece),
                    captured_by: Some(piece.owner),
                },
            );
        }
        SaveRecord {
            mode,
            white: Player::User,
            turn: Player::User,
            dim,
            tiles: board.tiles().to_vec(),
        }
    }

    #[test]
    fn round_trip_after_a_few_turns() {
        let mut game = GameState::with_starting_player(GameMode::Conquest, 7, Player::Opponent).unwrap();
        game.play_turn(PieceKind::Rook, Square::new(3, 3)).unwrap();
        game.play_turn(PieceKind::Bishop, Square::new(0, 0)).unwrap();
        game.play_turn(PieceKind::Pawn, Square::new(6, 6)).unwrap();

        let text = game.to_save();
        assert!(text.starts_with("mode=Conquest\nwhite=Opponent\nturn=User\ndim=7\n"));
        assert_eq!(GameState::from_save(&text).unwrap(), game);
    }

    #[test]
    fn replay_recomputes_budgets() {
        let pieces = [
            (Square::new(0, 0), Piece::new(PieceKind::Pawn, Player::User)),
            (Square::new(1, 0), Piece::new(PieceKind::Pawn, Player::User)),
            (Square::new(2, 0), Piece::new(PieceKind::Queen, Player::Opponent)),
        ];
        let game = GameState::from_record(record_with_pieces(GameMode::Conquest, 6, &pieces)).unwrap();
        assert_eq!(game.budget(Player::User).remaining(PieceKind::Pawn), 6);
        assert_eq!(game.budget(Player::User).total(), 14);
        assert_eq!(game.budget(Player::Opponent).remaining(PieceKind::Queen), 0);
        assert_eq!(game.status(), GameStatus::AwaitingMove);
    }

    #[test]
    fn too_many_pieces_is_rejected() {
        let pieces = [
            (Square::new(0, 0), Piece::new(PieceKind::Queen, Player::Opponent)),
            (Square::new(5, 5), Piece::new(PieceKind::Queen, Player::Opponent)),
        ];
        assert_eq!(
            GameState::from_record(record_with_pieces(GameMode::Conquest, 6, &pieces)),
            Err(LoadError::InvalidPieceCount {
                player: Player::Opponent,
                kind: PieceKind::Queen
            })
        );
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert_eq!(
            GameState::from_save("mode=Conquest\nwhite=User\nturn=User\ntiles=\n"),
            Err(LoadError::Format(SaveError::MissingField("dim")))
        );
    }

    #[test]
    fn inconsistent_record_is_rejected() {
        let mut record = record_with_pieces(GameMode::Conquest, 6, &[]);
        record.tiles.pop();
        assert_eq!(
            GameState::from_record(record),
            Err(LoadError::Board(BoardError::TileCount {
                expected: 36,
                got: 35
            }))
        );
    }

    #[test]
    fn connect_king_loads_as_finished() {
        let pieces = [(Square::new(2, 2), Piece::new(PieceKind::King, Player::Opponent))];
        let game = GameState::from_record(record_with_pieces(GameMode::Connect, 6, &pieces)).unwrap();
        assert_eq!(
            game.status(),
            GameStatus::Ended(EndReason::KingPlaced(Player::Opponent))
        );
        assert!(game.budget(Player::User).is_exhausted());
    }

    #[test]
    fn stuck_player_loads_as_finished() {
        // Eight user pawns on the top row reach nothing, so no Knight can follow.
        let pieces: Vec<(Square, Piece)> = (0..8)
            .map(|x| (Square::new(x, 0), Piece::new(PieceKind::Pawn, Player::User)))
            .collect();
        let game = GameState::from_record(record_with_pieces(GameMode::Connect, 8, &pieces)).unwrap();
        assert_eq!(
            game.status(),
            GameStatus::Ended(EndReason::NoLegalPlacement(Player::User))
        );
    }
}
