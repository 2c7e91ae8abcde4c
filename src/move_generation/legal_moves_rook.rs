//! Rook moves along ranks and files.

use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(game_state: &GameState, piece: Piece, from: Location, out: &mut Vec<Move>) {
    push_ray_moves(game_state, piece, from, &ROOK_DIRECTIONS, out);
}
