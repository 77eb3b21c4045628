//! Capture and placement rule engine for Conquest and Connect placement chess.
//!
//! This crate provides:
//! - [`Board`] - a `dim × dim` grid of tiles
//! - [`PieceBudget`] - how many pieces of each kind a player may still place
//! - the capture engine, which marks the tiles a placed piece reaches
//! - [`PlacementRules`] - mode-specific legality, implemented by
//!   [`ConquestRules`] and [`ConnectRules`]
//! - [`GameState`] - the turn engine, including save/load
//!
//! # Example
//!
//! ```
//! use conquest_core::{GameMode, PieceKind, Player, Square};
//! use conquest_engine::{GameState, GameStatus};
//!
//! let mut game = GameState::with_starting_player(GameMode::Conquest, 8, Player::User).unwrap();
//! let placement = game.play_turn(PieceKind::Knight, Square::new(3, 3)).unwrap();
//! assert_eq!(placement.captured, 9);
//! assert_eq!(game.turn(), Player::Opponent);
//! assert_eq!(game.status(), GameStatus::AwaitingMove);
//!
//! let restored = GameState::from_save(&game.to_save()).unwrap();
//! assert_eq!(restored, game);
//! ```

mod board;
mod budget;
pub mod capture;
mod game;
pub mod rules;
mod save;

pub use board::{Board, BoardError};
pub use budget::PieceBudget;
pub use capture::{apply_capture, capture_targets, captures_tile, is_tile_captured_by_piece_kind};
pub use game::{EndReason, GameError, GameState, GameStatus, Outcome, Placement, Score};
pub use rules::{rules_for, ConnectRules, ConquestRules, PlacementError, PlacementRules};
pub use save::LoadError;
