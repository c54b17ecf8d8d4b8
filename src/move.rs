use std::fmt::Display;

use thiserror::Error;

use crate::coordinates::{CoordinatesError, Square};
use crate::piece::{PieceError, PieceType};

/// Errors that can occur when parsing a move from UCI coordinate notation.
#[derive(Error, Debug, PartialEq)]
pub enum MoveParseError {
    #[error("Invalid square in move notation: {0}")]
    InvalidSquare(#[from] CoordinatesError),

    #[error("Invalid promotion piece in move notation: {0}")]
    InvalidPromotion(#[from] PieceError),

    #[error("Pawns cannot promote to {0}")]
    IllegalPromotionTarget(PieceType),

    #[error("Invalid move notation: {0}")]
    InvalidNotation(String),
}

/// A move from one square to another, with an optional promotion.
///
/// The promotion kind is present only for a pawn move that reaches the last rank; promotion
/// to each of the four promotable kinds is a distinct move. Equality and hashing are
/// structural over all three fields, so a promoting and a non-promoting move between the
/// same squares are different moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    from_square: Square,
    to_square: Square,
    promotion: Option<PieceType>,
}

impl Move {
    /// Creates a new non-promoting move.
    pub fn new(from_square: Square, to_square: Square) -> Self {
        Self { from_square, to_square, promotion: None }
    }

    /// Creates a new move that promotes the moving pawn to the given piece type.
    pub fn new_promotion(from_square: Square, to_square: Square, promotion: PieceType) -> Self {
        Self { from_square, to_square, promotion: Some(promotion) }
    }

    /// Returns the source square of the move.
    pub fn from_square(&self) -> Square {
        self.from_square
    }

    /// Returns the destination square of the move.
    pub fn to_square(&self) -> Square {
        self.to_square
    }

    /// Returns the promotion piece type, if any.
    pub fn promotion(&self) -> Option<PieceType> {
        self.promotion
    }
}

impl Display for Move {
    /// Formats the move in UCI coordinate notation, e.g. "e2e4" or "e7e8q".
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from_square, self.to_square)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", char::from(promotion).to_ascii_lowercase())?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Move {
    type Error = MoveParseError;

    /// Parses a move from UCI coordinate notation, e.g. "e2e4" or "e7e8q".
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !value.is_ascii() || (value.len() != 4 && value.len() != 5) {
            return Err(MoveParseError::InvalidNotation(value.to_string()));
        }

        let from_square = Square::try_from(&value[0..2])?;
        let to_square = Square::try_from(&value[2..4])?;

        let promotion = match value[4..].chars().next() {
            Some(c) => {
                let piece_type = PieceType::try_from(c)?;
                if !PieceType::PROMOTION_TARGETS.contains(&piece_type) {
                    return Err(MoveParseError::IllegalPromotionTarget(piece_type));
                }
                Some(piece_type)
            }
            None => None,
        };

        Ok(Self { from_square, to_square, promotion })
    }
}
