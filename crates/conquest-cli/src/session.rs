//! The interactive session: start menu, round loop and final result.

use std::io::{BufRead, Write};

use conquest_core::{GameMode, PieceKind, Player, Square, MAX_DIM, MIN_DIM};
use conquest_engine::{GameError, GameState, Outcome, PlacementError};
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::prompt::{PromptError, Prompter};
use crate::render::{render_board, status_line};
use crate::storage::SaveStore;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player chose to leave from the start menu.
    Left,
    /// The game was saved and the session stopped.
    Saved,
    /// The game was played to its end.
    Finished(Outcome),
}

/// Drives one game from the start menu to its end.
pub struct Session<R: BufRead, W: Write> {
    prompter: Prompter<R, W>,
    store: SaveStore,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(prompter: Prompter<R, W>, store: SaveStore, rng: StdRng) -> Self {
        Self {
            prompter,
            store,
            rng,
        }
    }

    /// Runs the start menu, then the chosen game.
    pub fn run(&mut self) -> Result<SessionEnd, PromptError> {
        loop {
            self.prompter.clear()?;
            let choice = self.prompter.menu(
                "Main menu",
                &["Start a new game", "Restart the saved game", "Leave"],
            )?;
            let game = match choice {
                1 => self.new_game()?,
                2 => match self.store.load() {
                    Ok(game) => {
                        self.prompter.say("Game loaded!")?;
                        game
                    }
                    Err(e) => {
                        warn!(path = %self.store.path().display(), error = %e, "restart failed");
                        self.prompter.say(format_args!("Cannot restart: {}", e))?;
                        continue;
                    }
                },
                _ => {
                    self.prompter.say("Bye!")?;
                    return Ok(SessionEnd::Left);
                }
            };
            return self.play(game);
        }
    }

    /// Consumes the session and returns its prompter.
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    fn new_game(&mut self) -> Result<GameState, PromptError> {
        self.prompter.clear()?;
        let mode = match self.prompter.menu("Choose a mode", &["Conquest", "Connect"])? {
            1 => GameMode::Conquest,
            _ => GameMode::Connect,
        };

        let question = format!("Board size ({}-{}):", MIN_DIM, MAX_DIM);
        let rng = &mut self.rng;
        self.prompter.ask_with(&question, |answer| {
            let dim: u8 = answer
                .parse()
                .map_err(|_| format!("'{}' is not a board size.", answer))?;
            GameState::new(mode, dim, &mut *rng).map_err(|e| format!("Cannot use that size: {}.", e))
        })
    }

    fn play(&mut self, mut game: GameState) -> Result<SessionEnd, PromptError> {
        let colour = if game.white() == Player::User {
            "white"
        } else {
            "black"
        };
        self.prompter.say(format_args!("You are {}!", colour))?;

        loop {
            if let Some(outcome) = game.outcome() {
                self.announce(&game, outcome)?;
                return Ok(SessionEnd::Finished(outcome));
            }

            self.prompter.clear()?;
            self.prompter.show(render_board(game.board()))?;
            self.prompter.show(status_line(&game))?;

            let title = format!("{} to play", game.turn());
            match self
                .prompter
                .menu(&title, &["Play", "Give up", "Save and quit"])?
            {
                1 => self.play_turn(&mut game)?,
                2 => {
                    if let Err(e) = game.give_up() {
                        self.prompter.say(e)?;
                    }
                }
                _ => match self.store.save(&game) {
                    Ok(()) => {
                        self.prompter.say("The game has been saved.")?;
                        return Ok(SessionEnd::Saved);
                    }
                    Err(e) => {
                        warn!(path = %self.store.path().display(), error = %e, "save failed");
                        self.prompter
                            .say(format_args!("Could not save the game: {}", e))?;
                    }
                },
            }
        }
    }

    fn play_turn(&mut self, game: &mut GameState) -> Result<(), PromptError> {
        let playable = game.playable_kinds();
        let kind = loop {
            let kind = self.prompter.ask_with("Which piece?", |answer| {
                PieceKind::from_user_input(answer).ok_or_else(|| format!("Unknown piece '{}'.", answer))
            })?;
            if playable.contains(&kind) {
                break kind;
            }
            if game.budget(game.turn()).can_take(kind) {
                self.prompter
                    .say(format_args!("No tile accepts a {} right now.", kind))?;
            } else {
                self.prompter.say(format_args!("You have no {} left.", kind))?;
            }
        };

        if game.mode() == GameMode::Connect && kind.previous().is_some() {
            let dim = game.dim();
            let tiles: Vec<String> = game
                .legal_targets(kind)
                .into_iter()
                .map(|sq| sq.to_algebraic(dim))
                .collect();
            self.prompter
                .say(format_args!("Allowed tiles: {}", tiles.join(", ")))?;
        }

        let dim = game.dim();
        loop {
            let target = self
                .prompter
                .ask_with("Where? (e.g. B3)", |answer| Square::from_algebraic(answer, dim))?;
            match game.play_turn(kind, target) {
                Ok(placement) => {
                    self.prompter.say(format_args!(
                        "{} placed on {}, {} tiles captured.",
                        placement.piece,
                        target.to_algebraic(dim),
                        placement.captured
                    ))?;
                    return Ok(());
                }
                Err(GameError::Placement(PlacementError::TileOccupied(_))) => self
                    .prompter
                    .say(format_args!("{} is already taken.", target.to_algebraic(dim)))?,
                Err(e) => self.prompter.say(format_args!("{}.", e))?,
            }
        }
    }

    fn announce(&mut self, game: &GameState, outcome: Outcome) -> Result<(), PromptError> {
        self.prompter.clear()?;
        self.prompter.show(render_board(game.board()))?;
        self.prompter
            .say(format_args!("The game is over: {}.", outcome.reason))?;
        self.prompter.say(format_args!(
            "Captured tiles: User {} - Opponent {}",
            outcome.score.user, outcome.score.opponent
        ))?;
        match outcome.winner {
            Some(winner) => self.prompter.say(format_args!("{} wins!", winner))?,
            None => self.prompter.say("It's a tie!")?,
        }
        info!(reason = %outcome.reason, winner = ?outcome.winner, "session finished");
        Ok(())
    }
}
