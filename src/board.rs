use std::fmt::Display;
use std::ops::Index;

use thiserror::Error;

use crate::coordinates::Square;
use crate::piece::{Color, Piece, PieceType};

/// Errors that can occur when parsing the piece-placement field of a FEN string.
#[derive(Error, Debug, PartialEq)]
pub enum FenError {
    #[error("Invalid character in piece placement: {0}")]
    InvalidPiece(char),

    #[error("Invalid piece placement: {0}")]
    InvalidPiecePlacement(String),
}

/// An 8x8 chess board holding at most one piece per square.
///
/// The board is pure storage: it knows nothing about the rules of the game. Squares are
/// either empty or hold a single [`Piece`] value, and placing a piece overwrites whatever
/// was there. Equality is structural over all 64 squares.
///
/// Every square passed to a board operation must be on the board; this is a caller
/// precondition, checked in debug builds only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

/// Back-rank piece types in file order, used by [`Board::reset`].
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Board { squares: [None; Square::COUNT] }
    }

    fn index_of(square: Square) -> usize {
        debug_assert!(square.is_on_board());
        (square.rank() as usize - 1) * 8 + (square.file() as usize - 1)
    }

    /// Places a piece on the given square, overwriting any prior occupant.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[Self::index_of(square)] = Some(piece);
    }

    /// Returns the piece on the given square, or `None` if the square is empty.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[Self::index_of(square)]
    }

    /// Overwrites the 32 starting squares with the standard opening layout.
    ///
    /// Back ranks get rook, knight, bishop, queen, king, bishop, knight, rook for both
    /// colors, and ranks 2 and 7 get the pawns. Squares outside the starting layout are
    /// left untouched; on a fresh board there is nothing on them.
    pub fn reset(&mut self) {
        for (file_index, piece_type) in BACK_RANK.into_iter().enumerate() {
            let file = file_index as i8 + 1;
            self.place(Square::new(file, 1), Piece::new(Color::White, piece_type));
            self.place(Square::new(file, 8), Piece::new(Color::Black, piece_type));
            self.place(Square::new(file, 2), Piece::WHITE_PAWN);
            self.place(Square::new(file, 7), Piece::BLACK_PAWN);
        }
    }

    /// Returns the piece-placement field of the board's FEN representation.
    pub fn fen(&self) -> String {
        let mut fen = String::new();
        for rank in (1..=8).rev() {
            let mut empty_count = 0;
            for file in 1..=8 {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push(char::from(b'0' + empty_count));
                            empty_count = 0;
                        }
                        fen.push(char::from(piece));
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push(char::from(b'0' + empty_count));
            }
            if rank > 1 {
                fen.push('/');
            }
        }
        fen
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.squares[Self::index_of(square)]
    }
}

impl TryFrom<&str> for Board {
    type Error = FenError;

    /// Parses a board from the piece-placement field of a FEN string, e.g.
    /// "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        let ranks: Vec<&str> = value.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(value.to_string()));
        }

        for (rank_index, rank_text) in ranks.iter().enumerate() {
            let rank = 8 - rank_index as i8;
            let mut file = 1;
            for c in rank_text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as i8;
                } else {
                    let piece = Piece::try_from(c).map_err(|_| FenError::InvalidPiece(c))?;
                    if file > 8 {
                        return Err(FenError::InvalidPiecePlacement(value.to_string()));
                    }
                    board.place(Square::new(file, rank), piece);
                    file += 1;
                }
            }
            if file != 9 {
                return Err(FenError::InvalidPiecePlacement(value.to_string()));
            }
        }
        Ok(board)
    }
}

impl Display for Board {
    /// Formats the board as an 8-rank diagram, rank 8 first, with '.' for empty squares.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in (1..=8).rev() {
            for file in 1..=8 {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => write!(f, "{}", char::from(piece))?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    mod board_tests {
        use super::*;

        #[test]
        fn test_new_board_is_empty() {
            let board = Board::new();
            for square in Square::ALL_SQUARES {
                assert_eq!(board.piece_at(square), None);
            }
        }

        #[test]
        fn test_place_and_read_back() {
            let mut board = Board::new();
            board.place(Square::E4, Piece::WHITE_KNIGHT);
            assert_eq!(board.piece_at(Square::E4), Some(Piece::WHITE_KNIGHT));
            assert_eq!(board[Square::E4], Some(Piece::WHITE_KNIGHT));
            assert_eq!(board.piece_at(Square::E5), None);
        }

        #[test]
        fn test_place_overwrites() {
            let mut board = Board::new();
            board.place(Square::E4, Piece::WHITE_KNIGHT);
            board.place(Square::E4, Piece::BLACK_QUEEN);
            assert_eq!(board.piece_at(Square::E4), Some(Piece::BLACK_QUEEN));
        }

        #[test]
        fn test_structural_equality() {
            let mut first = Board::new();
            let mut second = Board::new();
            assert_eq!(first, second);

            first.place(Square::D4, Piece::WHITE_BISHOP);
            assert_ne!(first, second);

            second.place(Square::D4, Piece::WHITE_BISHOP);
            assert_eq!(first, second);
        }

        #[test]
        fn test_reset_matches_standard_opening() {
            let mut board = Board::new();
            board.reset();

            for (file, piece_type) in BACK_RANK.into_iter().enumerate() {
                let file = file as i8 + 1;
                assert_eq!(
                    board.piece_at(Square::new(file, 1)),
                    Some(Piece::new(Color::White, piece_type))
                );
                assert_eq!(
                    board.piece_at(Square::new(file, 8)),
                    Some(Piece::new(Color::Black, piece_type))
                );
                assert_eq!(board.piece_at(Square::new(file, 2)), Some(Piece::WHITE_PAWN));
                assert_eq!(board.piece_at(Square::new(file, 7)), Some(Piece::BLACK_PAWN));
            }

            for square in Square::ALL_SQUARES {
                if (3..=6).contains(&square.rank()) {
                    assert_eq!(board.piece_at(square), None);
                }
            }
        }

        #[test]
        fn test_reset_leaves_middle_squares_alone() {
            let mut board = Board::new();
            board.place(Square::E5, Piece::WHITE_QUEEN);
            board.reset();
            // Only the 32 starting squares are overwritten.
            assert_eq!(board.piece_at(Square::E5), Some(Piece::WHITE_QUEEN));
        }
    }

    mod fen_tests {
        use super::*;

        #[test]
        fn test_fen_of_starting_position() {
            let mut board = Board::new();
            board.reset();
            assert_eq!(board.fen(), STARTING_FEN);
        }

        #[test]
        fn test_parse_starting_position() {
            let parsed = Board::try_from(STARTING_FEN).unwrap();
            let mut reset = Board::new();
            reset.reset();
            assert_eq!(parsed, reset);
        }

        #[test]
        fn test_fen_round_trip() {
            let fen = "8/3P4/8/4p3/3K4/8/8/7q";
            let board = Board::try_from(fen).unwrap();
            assert_eq!(board.fen(), fen);
            assert_eq!(board.piece_at(Square::D7), Some(Piece::WHITE_PAWN));
            assert_eq!(board.piece_at(Square::E5), Some(Piece::BLACK_PAWN));
            assert_eq!(board.piece_at(Square::D4), Some(Piece::WHITE_KING));
            assert_eq!(board.piece_at(Square::H1), Some(Piece::BLACK_QUEEN));
        }

        #[test]
        fn test_parse_invalid_placement() {
            assert!(Board::try_from("8/8/8").is_err());
            assert!(Board::try_from("9/8/8/8/8/8/8/8").is_err());
            assert!(Board::try_from("7/8/8/8/8/8/8/8").is_err());
            assert_eq!(
                Board::try_from("x7/8/8/8/8/8/8/8"),
                Err(FenError::InvalidPiece('x'))
            );
        }

        #[test]
        fn test_display() {
            let mut board = Board::new();
            board.place(Square::A8, Piece::BLACK_ROOK);
            board.place(Square::E1, Piece::WHITE_KING);
            let diagram = format!("{}", board);
            let lines: Vec<&str> = diagram.lines().collect();
            assert_eq!(lines.len(), 8);
            assert_eq!(lines[0], "r.......");
            assert_eq!(lines[7], "....K...");
        }
    }
}
