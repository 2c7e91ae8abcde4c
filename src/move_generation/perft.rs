//! Perft node counting over the legal move tree.
//!
//! Walks the tree with make/undo on a single `GameState` and leaves the
//! position, history and terminal flags as it found them.

use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &mut GameState, depth: u8) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let flags = (game_state.checkmate, game_state.stalemate);
    let result = perft_recurse(game_state, depth);
    (game_state.checkmate, game_state.stalemate) = flags;
    result
}

fn perft_recurse(game_state: &mut GameState, depth: u8) -> MoveGenResult<PerftCounts> {
    let mut total = PerftCounts::default();

    for mv in game_state.get_valid_moves() {
        game_state.make_move(mv)?;
        let child = if depth == 1 {
            Ok(leaf_counts(game_state, mv.is_capture()))
        } else {
            perft_recurse(game_state, depth - 1)
        };
        game_state.undo_move();
        total.merge(child?);
    }

    Ok(total)
}

fn leaf_counts(game_state: &mut GameState, is_capture: bool) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        captures: usize::from(is_capture),
        ..PerftCounts::default()
    };
    if game_state.in_check() {
        counts.checks = 1;
        if game_state.get_valid_moves().is_empty() {
            counts.checkmates = 1;
        }
    }
    counts
}
