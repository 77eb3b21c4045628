//! Piece representation.

use crate::Player;

/// The six kinds of pieces.
///
/// Variants are declared in hierarchy order: in Connect mode each kind is
/// unlocked by the one declared before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in hierarchy order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the index of this kind (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns how many pieces of this kind a player may place in one game.
    pub const fn max_count(self) -> u8 {
        match self {
            PieceKind::Pawn => 8,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => 2,
            PieceKind::Queen | PieceKind::King => 1,
        }
    }

    /// Returns the kind that unlocks this one in the Connect hierarchy.
    pub const fn previous(self) -> Option<PieceKind> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some(PieceKind::Pawn),
            PieceKind::Bishop => Some(PieceKind::Knight),
            PieceKind::Rook => Some(PieceKind::Bishop),
            PieceKind::Queen => Some(PieceKind::Rook),
            PieceKind::King => Some(PieceKind::Queen),
        }
    }

    /// Returns true if this kind slides (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns the canonical English name used in save files.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// Returns the French name.
    pub const fn french_name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pion",
            PieceKind::Knight => "Cavalier",
            PieceKind::Bishop => "Fou",
            PieceKind::Rook => "Tour",
            PieceKind::Queen => "Reine",
            PieceKind::King => "Roi",
        }
    }

    /// Parses a canonical (save file) name. Case-sensitive.
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == s)
    }

    /// Parses a name typed by a player.
    ///
    /// English and French names are accepted. Input is trimmed and normalized
    /// to a leading capital followed by lowercase before matching.
    pub fn from_user_input(s: &str) -> Option<Self> {
        let normalized = normalize_name(s.trim());
        if normalized == "Dame" {
            return Some(PieceKind::Queen);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized || kind.french_name() == normalized)
    }
}

fn normalize_name(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A piece on the board: a kind and the player who placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, owner: Player) -> Self {
        Piece { kind, owner }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.owner, self.kind)
    }
}
