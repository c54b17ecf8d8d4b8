use std::fmt::Display;

use thiserror::Error;

/// Errors that can occur when parsing a piece from its FEN letter.
#[derive(Error, Debug, PartialEq)]
pub enum PieceError {
    #[error("Invalid piece character: {0}")]
    InvalidCharacter(char),
}

/// Represents the color of a chess piece.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Number of colors.
    pub const COUNT: usize = 2;

    /// Represents all colors of chess pieces.
    pub const ALL_COLORS: [Color; Color::COUNT] = [Color::White, Color::Black];

    /// Returns the opposite color.
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the rank delta of a forward pawn step for this color.
    pub fn pawn_direction(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Returns the rank this color's pawns start on.
    pub fn pawn_start_rank(&self) -> i8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Returns the rank where this color's pawns promote.
    pub fn promotion_rank(&self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Represents the kind of a chess piece, without its color.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
    King = 4,
    Pawn = 5,
}

impl PieceType {
    /// Represents all piece types.
    pub const ALL_PIECE_TYPES: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// The piece types a pawn can promote to.
    pub const PROMOTION_TARGETS: [PieceType; 4] =
        [PieceType::Queen, PieceType::Rook, PieceType::Knight, PieceType::Bishop];
}

impl From<PieceType> for char {
    fn from(piece_type: PieceType) -> Self {
        match piece_type {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

impl TryFrom<char> for PieceType {
    type Error = PieceError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase() {
            'p' => Ok(PieceType::Pawn),
            'n' => Ok(PieceType::Knight),
            'b' => Ok(PieceType::Bishop),
            'r' => Ok(PieceType::Rook),
            'q' => Ok(PieceType::Queen),
            'k' => Ok(PieceType::King),
            _ => Err(PieceError::InvalidCharacter(value)),
        }
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "Pawn"),
            PieceType::Knight => write!(f, "Knight"),
            PieceType::Bishop => write!(f, "Bishop"),
            PieceType::Rook => write!(f, "Rook"),
            PieceType::Queen => write!(f, "Queen"),
            PieceType::King => write!(f, "King"),
        }
    }
}

/// Represents a chess piece.
///
/// A `Piece` is a combination of a `Color` and a `PieceType`, packed into a single byte with
/// the color in the low bit and the piece type in the higher bits. Two pieces of the same
/// color and type are interchangeable: equality and hashing are structural, and a piece
/// carries no reference to the square it occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece(u8);

#[allow(dead_code)]
impl Piece {
    pub const WHITE_KNIGHT: Piece = Piece(0);
    pub const BLACK_KNIGHT: Piece = Piece(1);
    pub const WHITE_BISHOP: Piece = Piece(2);
    pub const BLACK_BISHOP: Piece = Piece(3);
    pub const WHITE_ROOK: Piece = Piece(4);
    pub const BLACK_ROOK: Piece = Piece(5);
    pub const WHITE_QUEEN: Piece = Piece(6);
    pub const BLACK_QUEEN: Piece = Piece(7);
    pub const WHITE_KING: Piece = Piece(8);
    pub const BLACK_KING: Piece = Piece(9);
    pub const WHITE_PAWN: Piece = Piece(10);
    pub const BLACK_PAWN: Piece = Piece(11);

    /// Represents all possible chess pieces.
    pub const ALL_PIECES: [Piece; 12] = [
        Piece::WHITE_PAWN,
        Piece::WHITE_KNIGHT,
        Piece::WHITE_BISHOP,
        Piece::WHITE_ROOK,
        Piece::WHITE_QUEEN,
        Piece::WHITE_KING,
        Piece::BLACK_PAWN,
        Piece::BLACK_KNIGHT,
        Piece::BLACK_BISHOP,
        Piece::BLACK_ROOK,
        Piece::BLACK_QUEEN,
        Piece::BLACK_KING,
    ];

    /// Creates a new `Piece` with the given `Color` and `PieceType`.
    pub fn new(color: Color, piece_type: PieceType) -> Self {
        Piece((piece_type as u8) << 1 | color as u8)
    }

    /// Returns the color of the piece.
    pub fn color(&self) -> Color {
        match self.0 & 1 {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    /// Returns the type of the piece.
    pub fn piece_type(&self) -> PieceType {
        match self.0 >> 1 {
            0 => PieceType::Knight,
            1 => PieceType::Bishop,
            2 => PieceType::Rook,
            3 => PieceType::Queen,
            4 => PieceType::King,
            _ => PieceType::Pawn,
        }
    }
}

impl From<Piece> for char {
    /// Converts a `Piece` to its FEN letter, uppercase for White and lowercase for Black.
    fn from(piece: Piece) -> Self {
        match piece.color() {
            Color::White => char::from(piece.piece_type()).to_ascii_uppercase(),
            Color::Black => char::from(piece.piece_type()).to_ascii_lowercase(),
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = PieceError;

    /// Converts a FEN letter to a `Piece`.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        let color = match value.is_uppercase() {
            true => Color::White,
            false => Color::Black,
        };
        let piece_type = PieceType::try_from(value)?;
        Ok(Piece::new(color, piece_type))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color(), self.piece_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod color_tests {
        use super::*;

        #[test]
        fn test_opposite() {
            assert_eq!(Color::White.opposite(), Color::Black);
            assert_eq!(Color::Black.opposite(), Color::White);
        }

        #[test]
        fn test_pawn_geometry() {
            assert_eq!(Color::White.pawn_direction(), 1);
            assert_eq!(Color::Black.pawn_direction(), -1);
            assert_eq!(Color::White.pawn_start_rank(), 2);
            assert_eq!(Color::Black.pawn_start_rank(), 7);
            assert_eq!(Color::White.promotion_rank(), 8);
            assert_eq!(Color::Black.promotion_rank(), 1);
        }

        #[test]
        fn test_color_display() {
            assert_eq!(format!("{}", Color::White), "White");
            assert_eq!(format!("{}", Color::Black), "Black");
        }
    }

    mod piece_type_tests {
        use super::*;

        #[test]
        fn test_piece_type_from_character() {
            assert_eq!(PieceType::try_from('p'), Ok(PieceType::Pawn));
            assert_eq!(PieceType::try_from('P'), Ok(PieceType::Pawn));
            assert_eq!(PieceType::try_from('n'), Ok(PieceType::Knight));
            assert_eq!(PieceType::try_from('b'), Ok(PieceType::Bishop));
            assert_eq!(PieceType::try_from('r'), Ok(PieceType::Rook));
            assert_eq!(PieceType::try_from('q'), Ok(PieceType::Queen));
            assert_eq!(PieceType::try_from('k'), Ok(PieceType::King));
            assert_eq!(PieceType::try_from('x'), Err(PieceError::InvalidCharacter('x')));
        }

        #[test]
        fn test_character_from_piece_type() {
            assert_eq!(char::from(PieceType::Pawn), 'P');
            assert_eq!(char::from(PieceType::Knight), 'N');
            assert_eq!(char::from(PieceType::Bishop), 'B');
            assert_eq!(char::from(PieceType::Rook), 'R');
            assert_eq!(char::from(PieceType::Queen), 'Q');
            assert_eq!(char::from(PieceType::King), 'K');
        }

        #[test]
        fn test_promotion_targets() {
            assert_eq!(PieceType::PROMOTION_TARGETS.len(), 4);
            assert!(!PieceType::PROMOTION_TARGETS.contains(&PieceType::Pawn));
            assert!(!PieceType::PROMOTION_TARGETS.contains(&PieceType::King));
        }
    }

    mod piece_tests {
        use super::*;

        #[test]
        fn test_piece_creation() {
            for color in Color::ALL_COLORS {
                for piece_type in PieceType::ALL_PIECE_TYPES {
                    let piece = Piece::new(color, piece_type);
                    assert_eq!(piece.color(), color);
                    assert_eq!(piece.piece_type(), piece_type);
                }
            }
        }

        #[test]
        fn test_structural_equality() {
            // Two pieces of the same color and type are interchangeable values.
            assert_eq!(Piece::new(Color::White, PieceType::Rook), Piece::WHITE_ROOK);
            assert_ne!(Piece::WHITE_ROOK, Piece::BLACK_ROOK);
            assert_ne!(Piece::WHITE_ROOK, Piece::WHITE_QUEEN);
        }

        #[test]
        fn test_piece_char_round_trip() {
            for piece in Piece::ALL_PIECES {
                assert_eq!(Piece::try_from(char::from(piece)), Ok(piece));
            }
            assert_eq!(char::from(Piece::WHITE_KING), 'K');
            assert_eq!(char::from(Piece::BLACK_PAWN), 'p');
            assert!(Piece::try_from('x').is_err());
        }

        #[test]
        fn test_display_for_piece() {
            assert_eq!(format!("{}", Piece::WHITE_PAWN), "White Pawn");
            assert_eq!(format!("{}", Piece::BLACK_QUEEN), "Black Queen");
        }
    }
}
