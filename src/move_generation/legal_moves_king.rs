//! King steps. Castling is not part of these rules.

use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_offset_moves;
use crate::moves::chess_move::Move;

pub fn generate_king_moves(game_state: &GameState, piece: Piece, from: Location, out: &mut Vec<Move>) {
    push_offset_moves(game_state, piece, from, &KING_OFFSETS, out);
}
