//! Seam between the engine and whoever picks moves.
//!
//! A player receives the current position, reads the legal set from it and
//! answers with one of those moves, or `None` when there is nothing to play.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub trait Player {
    fn name(&self) -> &str;

    fn choose_move(&mut self, game_state: &mut GameState) -> Option<Move>;
}
