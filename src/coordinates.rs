use std::fmt::Display;

use thiserror::Error;

/// Errors that can occur when parsing a square from its algebraic notation.
#[derive(Error, Debug, PartialEq)]
pub enum CoordinatesError {
    #[error("Invalid square notation: {0}")]
    InvalidSquareNotation(String),
}

/// Represents a square on a chess board as a (file, rank) pair.
///
/// Files and ranks range from 1 to 8 when the square is on the board, with file 1 being the
/// a-file and rank 1 being the rank closest to White. Coordinates outside that range are
/// representable on purpose: stepping along a ray or applying a knight offset can leave the
/// board, and callers gate every board access with [`Square::is_on_board`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    file: i8,
    rank: i8,
}

#[allow(dead_code)]
#[rustfmt::skip]
impl Square {
    // Constants for all squares on the board
    pub const A1: Square = Square::new(1, 1); pub const B1: Square = Square::new(2, 1);
    pub const C1: Square = Square::new(3, 1); pub const D1: Square = Square::new(4, 1);
    pub const E1: Square = Square::new(5, 1); pub const F1: Square = Square::new(6, 1);
    pub const G1: Square = Square::new(7, 1); pub const H1: Square = Square::new(8, 1);
    pub const A2: Square = Square::new(1, 2); pub const B2: Square = Square::new(2, 2);
    pub const C2: Square = Square::new(3, 2); pub const D2: Square = Square::new(4, 2);
    pub const E2: Square = Square::new(5, 2); pub const F2: Square = Square::new(6, 2);
    pub const G2: Square = Square::new(7, 2); pub const H2: Square = Square::new(8, 2);
    pub const A3: Square = Square::new(1, 3); pub const B3: Square = Square::new(2, 3);
    pub const C3: Square = Square::new(3, 3); pub const D3: Square = Square::new(4, 3);
    pub const E3: Square = Square::new(5, 3); pub const F3: Square = Square::new(6, 3);
    pub const G3: Square = Square::new(7, 3); pub const H3: Square = Square::new(8, 3);
    pub const A4: Square = Square::new(1, 4); pub const B4: Square = Square::new(2, 4);
    pub const C4: Square = Square::new(3, 4); pub const D4: Square = Square::new(4, 4);
    pub const E4: Square = Square::new(5, 4); pub const F4: Square = Square::new(6, 4);
    pub const G4: Square = Square::new(7, 4); pub const H4: Square = Square::new(8, 4);
    pub const A5: Square = Square::new(1, 5); pub const B5: Square = Square::new(2, 5);
    pub const C5: Square = Square::new(3, 5); pub const D5: Square = Square::new(4, 5);
    pub const E5: Square = Square::new(5, 5); pub const F5: Square = Square::new(6, 5);
    pub const G5: Square = Square::new(7, 5); pub const H5: Square = Square::new(8, 5);
    pub const A6: Square = Square::new(1, 6); pub const B6: Square = Square::new(2, 6);
    pub const C6: Square = Square::new(3, 6); pub const D6: Square = Square::new(4, 6);
    pub const E6: Square = Square::new(5, 6); pub const F6: Square = Square::new(6, 6);
    pub const G6: Square = Square::new(7, 6); pub const H6: Square = Square::new(8, 6);
    pub const A7: Square = Square::new(1, 7); pub const B7: Square = Square::new(2, 7);
    pub const C7: Square = Square::new(3, 7); pub const D7: Square = Square::new(4, 7);
    pub const E7: Square = Square::new(5, 7); pub const F7: Square = Square::new(6, 7);
    pub const G7: Square = Square::new(7, 7); pub const H7: Square = Square::new(8, 7);
    pub const A8: Square = Square::new(1, 8); pub const B8: Square = Square::new(2, 8);
    pub const C8: Square = Square::new(3, 8); pub const D8: Square = Square::new(4, 8);
    pub const E8: Square = Square::new(5, 8); pub const F8: Square = Square::new(6, 8);
    pub const G8: Square = Square::new(7, 8); pub const H8: Square = Square::new(8, 8);
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Represents all on-board squares, rank by rank starting from A1.
    #[rustfmt::skip]
    pub const ALL_SQUARES: [Square; Square::COUNT] = [
        Square::A1,Square::B1,Square::C1,Square::D1,Square::E1,Square::F1,Square::G1,Square::H1,
        Square::A2,Square::B2,Square::C2,Square::D2,Square::E2,Square::F2,Square::G2,Square::H2,
        Square::A3,Square::B3,Square::C3,Square::D3,Square::E3,Square::F3,Square::G3,Square::H3,
        Square::A4,Square::B4,Square::C4,Square::D4,Square::E4,Square::F4,Square::G4,Square::H4,
        Square::A5,Square::B5,Square::C5,Square::D5,Square::E5,Square::F5,Square::G5,Square::H5,
        Square::A6,Square::B6,Square::C6,Square::D6,Square::E6,Square::F6,Square::G6,Square::H6,
        Square::A7,Square::B7,Square::C7,Square::D7,Square::E7,Square::F7,Square::G7,Square::H7,
        Square::A8,Square::B8,Square::C8,Square::D8,Square::E8,Square::F8,Square::G8,Square::H8,
    ];

    /// Creates a new square from a file and a rank, both 1-based.
    pub const fn new(file: i8, rank: i8) -> Square {
        Square { file, rank }
    }

    /// Returns the file of the square (1 = a-file).
    pub const fn file(&self) -> i8 {
        self.file
    }

    /// Returns the rank of the square (1 = White's back rank).
    pub const fn rank(&self) -> i8 {
        self.rank
    }

    /// Returns true if both coordinates lie in 1..=8.
    pub const fn is_on_board(&self) -> bool {
        1 <= self.file && self.file <= 8 && 1 <= self.rank && self.rank <= 8
    }

    /// Returns the square offset from this one by the given file and rank deltas.
    ///
    /// The result may be off the board; check it with [`Square::is_on_board`] before using it
    /// for a board lookup.
    pub const fn offset(&self, file_delta: i8, rank_delta: i8) -> Square {
        Square::new(self.file + file_delta, self.rank + rank_delta)
    }
}

impl Display for Square {
    /// Formats the square in algebraic notation, e.g. "e4".
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        debug_assert!(self.is_on_board());
        write!(
            f,
            "{}{}",
            (b'a' + (self.file - 1) as u8) as char,
            (b'1' + (self.rank - 1) as u8) as char
        )
    }
}

impl TryFrom<&str> for Square {
    type Error = CoordinatesError;

    /// Parses a square from algebraic notation, e.g. "e4".
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(CoordinatesError::InvalidSquareNotation(value.to_string()));
        };

        if !('a'..='h').contains(&file_char) || !('1'..='8').contains(&rank_char) {
            return Err(CoordinatesError::InvalidSquareNotation(value.to_string()));
        }

        let file = (file_char as u8 - b'a') as i8 + 1;
        let rank = (rank_char as u8 - b'1') as i8 + 1;
        Ok(Square::new(file, rank))
    }
}
