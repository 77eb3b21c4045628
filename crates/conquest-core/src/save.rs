//! Save record parsing and serialization.
//!
//! A save record is line oriented:
//!
//! ```text
//! mode=Conquest
//! white=User
//! turn=Opponent
//! dim=6
//! tiles=Pawn:User:User _:_:User _:_:_ ...
//! ```
//!
//! `tiles` holds `dim * dim` space-separated `Kind:Owner:CapturedBy` tokens in
//! row-major order, row 0 first, with `_` standing for "none".

use thiserror::Error;

use crate::{GameMode, Piece, PieceKind, Player, Tile, MAX_DIM, MIN_DIM};

/// Errors that can occur when parsing a save record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SaveError {
    #[error("missing '{0}' field")]
    MissingField(&'static str),

    #[error("invalid game mode: '{0}'")]
    InvalidMode(String),

    #[error("invalid player: '{0}'")]
    InvalidPlayer(String),

    #[error("invalid dimension '{0}': expected a number between 6 and 12")]
    InvalidDimension(String),

    #[error("missing 'tiles' section")]
    MissingTiles,

    #[error("invalid tile '{0}'")]
    InvalidTile(String),

    #[error("expected {expected} tiles, got {got}")]
    TileCount { expected: usize, got: usize },
}

/// Parsed save data.
///
/// This struct only checks that the record is well formed. Rebuilding a
/// playable game (and checking piece counts) is the engine's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRecord {
    pub mode: GameMode,
    /// The player who moved first.
    pub white: Player,
    /// The player to move.
    pub turn: Player,
    pub dim: u8,
    /// Row-major tiles, `dim * dim` of them.
    pub tiles: Vec<Tile>,
}

impl SaveRecord {
    /// Parses a save record.
    pub fn parse(text: &str) -> Result<Self, SaveError> {
        let mut mode = None;
        let mut white = None;
        let mut turn = None;
        let mut dim = None;
        let mut tiles = None;

        for line in text.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "mode" => {
                    mode = Some(
                        GameMode::from_name(value)
                            .ok_or_else(|| SaveError::InvalidMode(value.to_string()))?,
                    )
                }
                "white" => white = Some(parse_player(value)?),
                "turn" => turn = Some(parse_player(value)?),
                "dim" => dim = Some(parse_dim(value)?),
                "tiles" => {
                    tiles = Some(value);
                    break;
                }
                _ => {}
            }
        }

        let mode = mode.ok_or(SaveError::MissingField("mode"))?;
        let white = white.ok_or(SaveError::MissingField("white"))?;
        let turn = turn.ok_or(SaveError::MissingField("turn"))?;
        let dim = dim.ok_or(SaveError::MissingField("dim"))?;
        let tiles = parse_tiles(tiles.ok_or(SaveError::MissingTiles)?, dim)?;

        Ok(SaveRecord {
            mode,
            white,
            turn,
            dim,
            tiles,
        })
    }

    /// Converts the record back to its text form.
    pub fn to_save_string(&self) -> String {
        let tiles: Vec<String> = self.tiles.iter().map(tile_token).collect();
        format!(
            "mode={}\nwhite={}\nturn={}\ndim={}\ntiles={}\n",
            self.mode,
            self.white,
            self.turn,
            self.dim,
            tiles.join(" ")
        )
    }
}

fn parse_player(value: &str) -> Result<Player, SaveError> {
    Player::from_name(value).ok_or_else(|| SaveError::InvalidPlayer(value.to_string()))
}

fn parse_dim(value: &str) -> Result<u8, SaveError> {
    match value.parse::<u8>() {
        Ok(dim) if (MIN_DIM..=MAX_DIM).contains(&dim) => Ok(dim),
        _ => Err(SaveError::InvalidDimension(value.to_string())),
    }
}

fn parse_tiles(section: &str, dim: u8) -> Result<Vec<Tile>, SaveError> {
    let expected = dim as usize * dim as usize;
    let tokens: Vec<&str> = section.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(SaveError::TileCount {
            expected,
            got: tokens.len(),
        });
    }
    tokens.into_iter().map(parse_tile).collect()
}

fn parse_tile(token: &str) -> Result<Tile, SaveError> {
    let invalid = || SaveError::InvalidTile(token.to_string());

    let parts: Vec<&str> = token.split(':').collect();
    let [kind, owner, captured] = parts.as_slice() else {
        return Err(invalid());
    };

    let piece = match (*kind, *owner) {
        ("_", "_") => None,
        ("_", _) | (_, "_") => return Err(invalid()),
        (kind, owner) => {
            let kind = PieceKind::from_name(kind).ok_or_else(invalid)?;
            let owner = Player::from_name(owner).ok_or_else(invalid)?;
            Some(Piece::new(kind, owner))
        }
    };

    let captured_by = match *captured {
        "_" => None,
        name => Some(Player::from_name(name).ok_or_else(invalid)?),
    };

    Ok(Tile { piece, captured_by })
}

fn tile_token(tile: &Tile) -> String {
    let (kind, owner) = match tile.piece {
        Some(piece) => (piece.kind.name(), piece.owner.name()),
        None => ("_", "_"),
    };
    let captured = tile.captured_by.map_or("_", Player::name);
    format!("{}:{}:{}", kind, owner, captured)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_tiles(dim: u8) -> String {
        vec!["_:_:_"; dim as usize * dim as usize].join(" ")
    }

    fn sample(dim: u8) -> String {
        format!(
            "mode=Connect\nwhite=User\nturn=Opponent\ndim={}\ntiles={}\n",
            dim,
            empty_tiles(dim)
        )
    }

    #[test]
    fn parse_empty_board() {
        let record = SaveRecord::parse(&sample(6)).unwrap();
        assert_eq!(record.mode, GameMode::Connect);
        assert_eq!(record.white, Player::User);
        assert_eq!(record.turn, Player::Opponent);
        assert_eq!(record.dim, 6);
        assert_eq!(record.tiles.len(), 36);
        assert!(record.tiles.iter().all(|t| *t == Tile::EMPTY));
    }

    #[test]
    fn parse_tiles_with_pieces_and_captures() {
        let mut tokens = vec!["_:_:_"; 36];
        tokens[0] = "Pawn:User:User";
        tokens[1] = "_:_:Opponent";
        tokens[2] = "Queen:Opponent:User";
        let text = format!(
            "mode=Conquest\nwhite=Opponent\nturn=User\ndim=6\ntiles={}\n",
            tokens.join(" ")
        );

        let record = SaveRecord::parse(&text).unwrap();
        assert_eq!(
            record.tiles[0],
            Tile {
                piece: Some(Piece::new(PieceKind::Pawn, Player::User)),
                captured_by: Some(Player::User),
            }
        );
        assert_eq!(
            record.tiles[1],
            Tile {
                piece: None,
                captured_by: Some(Player::Opponent),
            }
        );
        assert_eq!(
            record.tiles[2].piece,
            Some(Piece::new(PieceKind::Queen, Player::Opponent))
        );
        assert_eq!(record.tiles[2].captured_by, Some(Player::User));
    }

    #[test]
    fn header_order_does_not_matter() {
        let text = format!(
            "dim=6\nturn=User\nmode=Conquest\nwhite=Opponent\ntiles= {}\n",
            empty_tiles(6)
        );
        let record = SaveRecord::parse(&text).unwrap();
        assert_eq!(record.mode, GameMode::Conquest);
        assert_eq!(record.turn, Player::User);
    }

    #[test]
    fn to_save_string_round_trip() {
        let text = sample(7);
        let record = SaveRecord::parse(&text).unwrap();
        assert_eq!(record.to_save_string(), text);
        assert_eq!(SaveRecord::parse(&record.to_save_string()).unwrap(), record);
    }

    #[test]
    fn missing_fields() {
        let text = format!("mode=Conquest\nwhite=User\ndim=6\ntiles={}\n", empty_tiles(6));
        assert_eq!(SaveRecord::parse(&text), Err(SaveError::MissingField("turn")));

        let text = "mode=Conquest\nwhite=User\nturn=User\ndim=6\n";
        assert_eq!(SaveRecord::parse(text), Err(SaveError::MissingTiles));

        assert_eq!(SaveRecord::parse(""), Err(SaveError::MissingField("mode")));
    }

    #[test]
    fn invalid_header_values() {
        let text = sample(6).replace("mode=Connect", "mode=Blitz");
        assert_eq!(
            SaveRecord::parse(&text),
            Err(SaveError::InvalidMode("Blitz".to_string()))
        );

        let text = sample(6).replace("white=User", "white=AI");
        assert_eq!(
            SaveRecord::parse(&text),
            Err(SaveError::InvalidPlayer("AI".to_string()))
        );

        let text = sample(6).replace("dim=6", "dim=13");
        assert_eq!(
            SaveRecord::parse(&text),
            Err(SaveError::InvalidDimension("13".to_string()))
        );

        let text = sample(6).replace("dim=6", "dim=six");
        assert!(matches!(
            SaveRecord::parse(&text),
            Err(SaveError::InvalidDimension(_))
        ));
    }

    #[test]
    fn wrong_tile_count() {
        let text = sample(6).replace("dim=6", "dim=7");
        assert_eq!(
            SaveRecord::parse(&text),
            Err(SaveError::TileCount {
                expected: 49,
                got: 36
            })
        );
    }

    #[test]
    fn malformed_tiles() {
        for bad in ["Pawn:User", "Pawn:_:_", "_:User:_", "Dragon:User:_", "Pawn:AI:_", "_:_:AI", "a:b:c:d"] {
            let mut tokens = vec!["_:_:_"; 36];
            tokens[5] = bad;
            let text = format!(
                "mode=Conquest\nwhite=User\nturn=User\ndim=6\ntiles={}\n",
                tokens.join(" ")
            );
            assert_eq!(
                SaveRecord::parse(&text),
                Err(SaveError::InvalidTile(bad.to_string())),
                "token {bad} should be rejected"
            );
        }
    }
}
