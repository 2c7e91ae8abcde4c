//! Helpers shared by the per-kind generators.
//!
//! Every generator takes the generating side explicitly so the attack scan can
//! ask for the opponent's moves without touching the turn flag.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

#[inline]
pub fn is_ally_on(game_state: &GameState, side: Color, location: Location) -> bool {
    matches!(game_state.piece_at(location), Some(piece) if piece.color == side)
}

#[inline]
pub fn is_enemy_on(game_state: &GameState, side: Color, location: Location) -> bool {
    matches!(game_state.piece_at(location), Some(piece) if piece.color != side)
}

/// Single-step pieces: accept each in-bounds offset not held by an ally.
pub fn push_offset_moves(
    game_state: &GameState,
    piece: Piece,
    from: Location,
    offsets: &[(isize, isize)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = offset_location(from, d_row, d_col, 1) else {
            continue;
        };
        if !is_ally_on(game_state, piece.color, to) {
            out.push(Move::with_piece(from, to, piece, game_state.board()));
        }
    }
}

/// Sliding pieces: walk each ray through empty squares, include the first
/// enemy and stop, stop short of the first ally.
pub fn push_ray_moves(
    game_state: &GameState,
    piece: Piece,
    from: Location,
    directions: &[(isize, isize)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        for step in 1..=crate::game_state::chess_rules::MAX_RAY_STEPS {
            let Some(to) = offset_location(from, d_row, d_col, step) else {
                break;
            };
            match game_state.piece_at(to) {
                None => out.push(Move::with_piece(from, to, piece, game_state.board())),
                Some(blocker) if blocker.color != piece.color => {
                    out.push(Move::with_piece(from, to, piece, game_state.board()));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
