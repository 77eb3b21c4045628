//! Turn engine.
//!
//! [`GameState`] owns everything a running game needs: the board, whose turn
//! it is, both budgets and the status. Placements go through
//! [`GameState::play_turn`], which either applies the whole turn or leaves
//! the state untouched.

use std::fmt;

use conquest_core::{GameMode, Piece, PieceKind, Player, Square, Tile};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, BoardError};
use crate::budget::PieceBudget;
use crate::capture::apply_capture;
use crate::rules::{rules_for, PlacementError, PlacementRules};

/// Error type for turn operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("the game has already ended")]
    GameAlreadyOver,
}

/// Why a game ended, and who triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// A King was placed in Connect mode.
    KingPlaced(Player),
    /// The player gave up.
    Resignation(Player),
    /// The player had nothing left to place on their turn.
    OutOfPieces(Player),
    /// The player still had pieces but no legal tile for any of them.
    NoLegalPlacement(Player),
}

impl EndReason {
    /// Returns the player the reason is about.
    pub fn player(self) -> Player {
        match self {
            EndReason::KingPlaced(p)
            | EndReason::Resignation(p)
            | EndReason::OutOfPieces(p)
            | EndReason::NoLegalPlacement(p) => p,
        }
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::KingPlaced(p) => write!(f, "{} placed their King", p),
            EndReason::Resignation(p) => write!(f, "{} gave up", p),
            EndReason::OutOfPieces(p) => write!(f, "{} has no pieces left", p),
            EndReason::NoLegalPlacement(p) => write!(f, "{} has no legal placement left", p),
        }
    }
}

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    AwaitingMove,
    Ended(EndReason),
}

/// Captured tile counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub user: usize,
    pub opponent: usize,
}

impl Score {
    /// Returns the count for `player`.
    pub fn of(self, player: Player) -> usize {
        match player {
            Player::User => self.user,
            Player::Opponent => self.opponent,
        }
    }

    /// Returns the player with more captured tiles, or `None` on a tie.
    pub fn leader(self) -> Option<Player> {
        match self.user.cmp(&self.opponent) {
            std::cmp::Ordering::Greater => Some(Player::User),
            std::cmp::Ordering::Less => Some(Player::Opponent),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Final result of an ended game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub reason: EndReason,
    pub score: Score,
    /// `None` on a tie.
    pub winner: Option<Player>,
}

/// A placement that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub piece: Piece,
    pub target: Square,
    /// Tiles marked by the placement, the target included.
    pub captured: usize,
}

/// A game in progress or finished.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) mode: GameMode,
    pub(crate) rules: &'static dyn PlacementRules,
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) white: Player,
    pub(crate) budgets: [PieceBudget; 2],
    pub(crate) status: GameStatus,
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        // The rules follow from the mode.
        self.mode == other.mode
            && self.board == other.board
            && self.turn == other.turn
            && self.white == other.white
            && self.budgets == other.budgets
            && self.status == other.status
    }
}

impl Eq for GameState {}

impl GameState {
    /// Creates a new game with a randomly drawn starting player.
    pub fn new<R: Rng + ?Sized>(mode: GameMode, dim: u8, rng: &mut R) -> Result<Self, BoardError> {
        let starter = if rng.gen_bool(0.5) {
            Player::User
        } else {
            Player::Opponent
        };
        Self::with_starting_player(mode, dim, starter)
    }

    /// Creates a new game where `starter` moves first.
    pub fn with_starting_player(mode: GameMode, dim: u8, starter: Player) -> Result<Self, BoardError> {
        let board = Board::new(dim)?;
        info!(%mode, dim, %starter, "new game");
        Ok(GameState {
            mode,
            rules: rules_for(mode),
            board,
            turn: starter,
            white: starter,
            budgets: [PieceBudget::new(); 2],
            status: GameStatus::AwaitingMove,
        })
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the placement rules in force.
    pub fn rules(&self) -> &'static dyn PlacementRules {
        self.rules
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dim(&self) -> u8 {
        self.board.dim()
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the player who moved first.
    pub fn white(&self) -> Player {
        self.white
    }

    /// Returns the remaining budget of `player`.
    pub fn budget(&self, player: Player) -> &PieceBudget {
        &self.budgets[player.index()]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Ended(_))
    }

    /// Checks whether the player to move may place `kind` on `target`.
    pub fn validate_placement(&self, kind: PieceKind, target: Square) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        self.rules
            .validate(&self.board, self.budget(self.turn), self.turn, kind, target)?;
        Ok(())
    }

    /// Returns the squares where the player to move may place `kind`.
    pub fn legal_targets(&self, kind: PieceKind) -> Vec<Square> {
        if self.is_over() {
            return Vec::new();
        }
        self.rules
            .legal_targets(&self.board, self.budget(self.turn), self.turn, kind)
    }

    /// Returns the kinds the player to move can place somewhere.
    pub fn playable_kinds(&self) -> Vec<PieceKind> {
        if self.is_over() {
            return Vec::new();
        }
        self.rules
            .playable_kinds(&self.board, self.budget(self.turn), self.turn)
    }

    /// Places a piece of `kind` for the player to move on `target`.
    ///
    /// On success the tile and everything the piece reaches are captured by
    /// the mover, then the turn passes and end conditions are checked. On
    /// error nothing changes.
    pub fn play_turn(&mut self, kind: PieceKind, target: Square) -> Result<Placement, GameError> {
        self.validate_placement(kind, target)?;

        let mover = self.turn;
        self.budgets[mover.index()].take(kind);
        let piece = Piece::new(kind, mover);
        self.board.set(
            target,
            Tile {
                piece: Some(piece),
                captured_by: Some(mover),
            },
        );
        let captured = apply_capture(&mut self.board, target, kind, mover);
        debug!(%piece, square = %target.to_algebraic(self.dim()), captured, "placed");

        if self.rules.ends_game(kind) {
            for budget in &mut self.budgets {
                budget.clear();
            }
            self.finish(EndReason::KingPlaced(mover));
        } else {
            self.turn = mover.opposite();
            self.check_game_end();
        }

        Ok(Placement {
            piece,
            target,
            captured,
        })
    }

    /// Ends the game with the player to move giving up.
    pub fn give_up(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        self.finish(EndReason::Resignation(self.turn));
        Ok(())
    }

    /// Counts captured tiles for both players across the whole board.
    pub fn score(&self) -> Score {
        Score {
            user: self.board.captured_count(Player::User),
            opponent: self.board.captured_count(Player::Opponent),
        }
    }

    /// Returns the final result, or `None` while the game is running.
    pub fn outcome(&self) -> Option<Outcome> {
        let GameStatus::Ended(reason) = self.status else {
            return None;
        };
        let score = self.score();
        Some(Outcome {
            reason,
            score,
            winner: score.leader(),
        })
    }

    /// Ends the game if the player to move cannot go on.
    pub(crate) fn check_game_end(&mut self) {
        let mover = self.turn;
        let budget = self.budget(mover);
        if budget.is_exhausted() {
            self.finish(EndReason::OutOfPieces(mover));
        } else if !self.rules.can_place_any(&self.board, budget, mover) {
            self.finish(EndReason::NoLegalPlacement(mover));
        }
    }

    pub(crate) fn finish(&mut self, reason: EndReason) {
        let score = self.score();
        info!(%reason, user = score.user, opponent = score.opponent, "game over");
        self.status = GameStatus::Ended(reason);
    }
}
