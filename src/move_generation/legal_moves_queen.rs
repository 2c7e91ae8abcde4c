//! Queen moves are the union of rook and bishop rays.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(game_state: &GameState, piece: Piece, from: Location, out: &mut Vec<Move>) {
    generate_rook_moves(game_state, piece, from, out);
    generate_bishop_moves(game_state, piece, from, out);
}
