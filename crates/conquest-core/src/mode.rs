//! Game mode representation.

/// The two rule variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Any empty tile is a legal target.
    Conquest,
    /// Placements are gated by the Pawn→King hierarchy; placing a King ends the game.
    Connect,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Conquest, GameMode::Connect];

    /// Returns the canonical name used in save files.
    pub const fn name(self) -> &'static str {
        match self {
            GameMode::Conquest => "Conquest",
            GameMode::Connect => "Connect",
        }
    }

    /// Parses a canonical mode name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "Conquest" => Some(GameMode::Conquest),
            "Connect" => Some(GameMode::Connect),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
