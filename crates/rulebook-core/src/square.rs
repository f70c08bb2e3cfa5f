//! Board squares addressed by (row, column).
//!
//! Row 0 is the eighth rank (Black's home) and row 7 the first rank (White's home).
//! Column 0 is the a-file and column 7 the h-file.

use std::fmt;

/// A square on the 8x8 board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Number of rows and columns on the board.
    pub const SIZE: u8 = 8;

    /// Create a square from a row and column.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both coordinates are below 8. Out-of-range coordinates are a
    /// caller error; board access with such a square panics.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < Self::SIZE && col < Self::SIZE);
        Square { row, col }
    }

    /// Create a square from a row and column, returning `None` if either is off the board.
    #[inline]
    pub const fn from_coords(row: u8, col: u8) -> Option<Square> {
        if row < Self::SIZE && col < Self::SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Some(Square::new(b'8' - rank_byte, file_byte - b'a'))
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the square displaced by `(d_row, d_col)`, or `None` past the board edge.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Square::from_coords(row, col)
    }

    /// File letter, `a` through `h`.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank digit, `1` through `8`.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Iterate over all 64 squares row by row, starting at a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {} = {})", self.row, self.col, self)
    }
}
