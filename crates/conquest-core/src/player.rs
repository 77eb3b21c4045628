//! Player representation.

/// The two seats at the board.
///
/// `User` sits at the bottom of the rendered board and advances toward row 0;
/// `Opponent` sits at the top and advances toward the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    User = 0,
    Opponent = 1,
}

impl Player {
    /// Both players, in index order.
    pub const ALL: [Player; 2] = [Player::User, Player::Opponent];

    /// Returns the other player.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::User => Player::Opponent,
            Player::Opponent => Player::User,
        }
    }

    /// Returns the index (0 for User, 1 for Opponent).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row delta of a step "forward" for this player.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::User => -1,
            Player::Opponent => 1,
        }
    }

    /// Returns the canonical name used in save files.
    pub const fn name(self) -> &'static str {
        match self {
            Player::User => "User",
            Player::Opponent => "Opponent",
        }
    }

    /// Parses a canonical player name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "User" => Some(Player::User),
            "Opponent" => Some(Player::Opponent),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_player() {
        assert_eq!(Player::User.opposite(), Player::Opponent);
        assert_eq!(Player::Opponent.opposite(), Player::User);
    }

    #[test]
    fn player_index() {
        assert_eq!(Player::User.index(), 0);
        assert_eq!(Player::Opponent.index(), 1);
    }

    #[test]
    fn forward_direction() {
        assert_eq!(Player::User.forward(), -1);
        assert_eq!(Player::Opponent.forward(), 1);
    }

    #[test]
    fn name_round_trip() {
        for player in Player::ALL {
            assert_eq!(Player::from_name(player.name()), Some(player));
        }
        assert_eq!(Player::from_name("AI"), None);
        assert_eq!(Player::from_name("user"), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Player::User), "User");
        assert_eq!(format!("{}", Player::Opponent), "Opponent");
    }
}
