//! A pseudo-legal chess move generation core.
//!
//! Given a [`board::Board`], a [`piece::Piece`] and the [`coordinates::Square`] it stands
//! on, [`move_gen::generate_moves`] produces every move that piece's geometry and the
//! board's occupancy allow, without considering whether the move would leave the mover's
//! own king in check. Legality filtering, castling, en passant and move execution belong
//! to a game layer built on top of this crate.

pub mod board;
pub mod coordinates;
pub mod r#move;
pub mod move_gen;
pub mod piece;
