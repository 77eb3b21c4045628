//! Board coordinates and algebraic notation.

use std::fmt;
use thiserror::Error;

/// Smallest supported board dimension.
pub const MIN_DIM: u8 = 6;

/// Largest supported board dimension.
pub const MAX_DIM: u8 = 12;

/// Errors that can occur when parsing a square typed by a player.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("invalid square '{0}': expected a column letter followed by a row number")]
    InvalidFormat(String),

    #[error("column '{column}' is off the board (A-{last})")]
    ColumnOutOfRange { column: char, last: char },

    #[error("row {row} is off the board (1-{dim})")]
    RowOutOfRange { row: u32, dim: u8 },
}

/// A tile coordinate.
///
/// `x` is the column (A = 0) and `y` the row index, with row 0 at the top
/// of the rendered board. A `Square` does not know the board dimension;
/// the board is the authority on whether it is in bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    /// Creates a square from column and row index.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Square { x, y }
    }

    /// Returns the column index.
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row index (0 = top row).
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the square shifted by `(dx, dy)`, or `None` if it leaves
    /// a `dim × dim` board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8, dim: u8) -> Option<Square> {
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        let dim = dim as i16;
        if (0..dim).contains(&x) && (0..dim).contains(&y) {
            Some(Square::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Parses algebraic notation (e.g. "B3") relative to a board dimension.
    ///
    /// The letter selects the column and is case-insensitive; the number is
    /// the displayed row, where row 1 is the bottom of the board.
    pub fn from_algebraic(s: &str, dim: u8) -> Result<Self, SquareError> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
            _ => return Err(SquareError::InvalidFormat(s.to_string())),
        };
        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(SquareError::InvalidFormat(s.to_string()));
        }
        let row: u32 = digits
            .parse()
            .map_err(|_| SquareError::InvalidFormat(s.to_string()))?;

        let x = letter as u32 - 'A' as u32;
        if x >= dim as u32 {
            return Err(SquareError::ColumnOutOfRange {
                column: letter,
                last: column_letter(dim.saturating_sub(1)),
            });
        }
        if row == 0 || row > dim as u32 {
            return Err(SquareError::RowOutOfRange { row, dim });
        }

        Ok(Square::new(x as u8, dim - row as u8))
    }

    /// Returns the algebraic notation for this square on a `dim × dim` board.
    pub fn to_algebraic(self, dim: u8) -> String {
        format!("{}{}", column_letter(self.x), dim - self.y)
    }
}

/// Returns the letter labelling a column index.
#[inline]
pub fn column_letter(x: u8) -> char {
    (b'A' + x) as char
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_algebraic_corners() {
        assert_eq!(Square::from_algebraic("A8", 8), Ok(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("A1", 8), Ok(Square::new(0, 7)));
        assert_eq!(Square::from_algebraic("h1", 8), Ok(Square::new(7, 7)));
        assert_eq!(Square::from_algebraic("L12", 12), Ok(Square::new(11, 0)));
    }

    #[test]
    fn from_algebraic_trims_whitespace() {
        assert_eq!(Square::from_algebraic(" c3\n", 6), Ok(Square::new(2, 3)));
    }

    #[test]
    fn from_algebraic_rejects_garbage() {
        assert!(matches!(
            Square::from_algebraic("", 8),
            Err(SquareError::InvalidFormat(_))
        ));
        assert!(matches!(
            Square::from_algebraic("3c", 8),
            Err(SquareError::InvalidFormat(_))
        ));
        assert!(matches!(
            Square::from_algebraic("c", 8),
            Err(SquareError::InvalidFormat(_))
        ));
        assert!(matches!(
            Square::from_algebraic("c3x", 8),
            Err(SquareError::InvalidFormat(_))
        ));
    }

    #[test]
    fn from_algebraic_rejects_off_board() {
        assert_eq!(
            Square::from_algebraic("G1", 6),
            Err(SquareError::ColumnOutOfRange {
                column: 'G',
                last: 'F'
            })
        );
        assert_eq!(
            Square::from_algebraic("A7", 6),
            Err(SquareError::RowOutOfRange { row: 7, dim: 6 })
        );
        assert_eq!(
            Square::from_algebraic("A0", 6),
            Err(SquareError::RowOutOfRange { row: 0, dim: 6 })
        );
    }

    #[test]
    fn offset_stays_on_board() {
        let sq = Square::new(0, 0);
        assert_eq!(sq.offset(-1, 0, 8), None);
        assert_eq!(sq.offset(0, -1, 8), None);
        assert_eq!(sq.offset(1, 2, 8), Some(Square::new(1, 2)));
        assert_eq!(Square::new(7, 7).offset(1, 0, 8), None);
    }

    #[test]
    fn display() {
        assert_eq!(Square::new(2, 5).to_string(), "(2, 5)");
        assert_eq!(Square::new(2, 5).to_algebraic(8), "C3");
    }

    proptest! {
        #[test]
        fn algebraic_round_trip(dim in MIN_DIM..=MAX_DIM, x in 0u8..MAX_DIM, y in 0u8..MAX_DIM) {
            prop_assume!(x < dim && y < dim);
            let sq = Square::new(x, y);
            prop_assert_eq!(Square::from_algebraic(&sq.to_algebraic(dim), dim), Ok(sq));
        }
    }
}
