//! Pawn pushes and diagonal captures. No en passant and no promotion: a pawn
//! that reaches the far rank simply has no further moves.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::is_enemy_on;
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(game_state: &GameState, piece: Piece, from: Location, out: &mut Vec<Move>) {
    let side = piece.color;
    let forward = side.pawn_direction();

    if let Some(one_step) = offset_location(from, forward, 0, 1) {
        if game_state.piece_at(one_step).is_none() {
            out.push(Move::with_piece(from, one_step, piece, game_state.board()));

            if from.0 == side.pawn_home_row() {
                if let Some(two_step) = offset_location(from, forward, 0, 2) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(Move::with_piece(from, two_step, piece, game_state.board()));
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = offset_location(from, forward, d_col, 1) {
            if is_enemy_on(game_state, side, target) {
                out.push(Move::with_piece(from, target, piece, game_state.board()));
            }
        }
    }
}
