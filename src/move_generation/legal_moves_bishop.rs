//! Bishop moves along the four diagonals.

use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(game_state: &GameState, piece: Piece, from: Location, out: &mut Vec<Move>) {
    push_ray_moves(game_state, piece, from, &BISHOP_DIRECTIONS, out);
}
