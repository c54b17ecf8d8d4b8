//! Pseudo-legal move generation.
//!
//! [`generate_moves`] computes every square a piece could move to given only its movement
//! geometry and the occupancy of the board. Moves that would leave the mover's own king in
//! check are not filtered out here; that, along with castling and en passant, belongs to a
//! game layer built on top of this one.

use std::collections::HashSet;

use crate::board::Board;
use crate::coordinates::Square;
use crate::piece::{Color, Piece, PieceType};
use crate::r#move::Move;

/// The four orthogonal directions, as (file delta, rank delta) steps.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal directions.
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight directions: the union of the rook and bishop direction sets.
const QUEEN_DIRECTIONS: [(i8, i8); 8] =
    [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight king steps, one square in every direction.
const KING_STEPS: [(i8, i8); 8] =
    [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight L-shaped knight jumps.
const KNIGHT_STEPS: [(i8, i8); 8] =
    [(1, 2), (2, 1), (-1, 2), (-2, 1), (1, -2), (2, -1), (-1, -2), (-2, -1)];

/// Generates the set of pseudo-legal moves for the given piece standing on the given square.
///
/// The board is only read, never mutated, and the result depends on nothing but the three
/// arguments: the same inputs always produce the same set. The piece's color decides which
/// occupants block and which can be captured; the square the piece stands on must be on the
/// board (caller precondition). Whether `board` actually holds `piece` at `square` is not
/// checked; the caller usually fetches the piece with [`Board::piece_at`] first.
pub fn generate_moves(board: &Board, piece: Piece, square: Square) -> HashSet<Move> {
    debug_assert!(square.is_on_board());

    let mut moves = HashSet::new();
    let color = piece.color();
    match piece.piece_type() {
        PieceType::King => step_moves(board, color, square, &KING_STEPS, &mut moves),
        PieceType::Knight => step_moves(board, color, square, &KNIGHT_STEPS, &mut moves),
        PieceType::Bishop => sliding_moves(board, color, square, &BISHOP_DIRECTIONS, &mut moves),
        PieceType::Rook => sliding_moves(board, color, square, &ROOK_DIRECTIONS, &mut moves),
        PieceType::Queen => sliding_moves(board, color, square, &QUEEN_DIRECTIONS, &mut moves),
        PieceType::Pawn => pawn_moves(board, color, square, &mut moves),
    }
    moves
}

/// Walks a ray outward from `from` in each given direction.
///
/// Each ray emits a move per empty square and terminates at the board edge, at a friendly
/// piece (excluded), or at an opposing piece (included as a capture).
fn sliding_moves(
    board: &Board,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    moves: &mut HashSet<Move>,
) {
    for (file_delta, rank_delta) in directions {
        let mut to = from.offset(*file_delta, *rank_delta);
        while to.is_on_board() {
            match board.piece_at(to) {
                None => {
                    moves.insert(Move::new(from, to));
                }
                Some(occupant) => {
                    if occupant.color() != color {
                        moves.insert(Move::new(from, to));
                    }
                    break;
                }
            }
            to = to.offset(*file_delta, *rank_delta);
        }
    }
}

/// Emits a move for each offset destination that is on the board and not friendly-occupied.
fn step_moves(
    board: &Board,
    color: Color,
    from: Square,
    steps: &[(i8, i8)],
    moves: &mut HashSet<Move>,
) {
    for (file_delta, rank_delta) in steps {
        let to = from.offset(*file_delta, *rank_delta);
        if !to.is_on_board() {
            continue;
        }
        match board.piece_at(to) {
            Some(occupant) if occupant.color() == color => {}
            _ => {
                moves.insert(Move::new(from, to));
            }
        }
    }
}

/// Generates pawn pushes and captures, expanding promotions.
///
/// The forward direction, the starting rank and the promotion rank all derive from the
/// pawn's color. The double push is only considered when the single-push square is empty
/// and the pawn still stands on its starting rank.
fn pawn_moves(board: &Board, color: Color, from: Square, moves: &mut HashSet<Move>) {
    let ahead = color.pawn_direction();

    let single_push = from.offset(0, ahead);
    if single_push.is_on_board() && board.piece_at(single_push).is_none() {
        push_pawn_move(color, from, single_push, moves);

        if from.rank() == color.pawn_start_rank() {
            let double_push = from.offset(0, 2 * ahead);
            if double_push.is_on_board() && board.piece_at(double_push).is_none() {
                // A double push can never reach the last rank, so no promotion expansion.
                moves.insert(Move::new(from, double_push));
            }
        }
    }

    for file_delta in [-1, 1] {
        let capture = from.offset(file_delta, ahead);
        if !capture.is_on_board() {
            continue;
        }
        if let Some(occupant) = board.piece_at(capture) {
            if occupant.color() != color {
                push_pawn_move(color, from, capture, moves);
            }
        }
    }
}

/// Inserts a pawn move, expanded into the four promotion moves when it reaches the last rank.
fn push_pawn_move(color: Color, from: Square, to: Square, moves: &mut HashSet<Move>) {
    if to.rank() == color.promotion_rank() {
        for promotion in PieceType::PROMOTION_TARGETS {
            moves.insert(Move::new_promotion(from, to, promotion));
        }
    } else {
        moves.insert(Move::new(from, to));
    }
}
