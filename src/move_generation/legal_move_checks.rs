//! Check detection by attack scan.
//!
//! A square counts as attacked when any pseudo-legal move of the opponent
//! ends on it. The opponent's moves are generated by passing the opposite
//! color to the generators, so the turn flag is never flipped and no caller
//! can observe a half-swapped position.

use crate::game_state::{chess_types::*, game_state::GameState};

impl GameState {
    /// True when the opponent of the side to move has a pseudo-legal move
    /// ending on `(row, col)`.
    ///
    /// Pawn pushes count as reaching their destination, so the answer is only
    /// a true attack map for occupied squares such as a king's.
    pub fn is_under_attack(&self, row: usize, col: usize) -> bool {
        self.is_attacked_by((row, col), self.side_to_move().opposite())
    }

    /// True when the side to move has its king under attack.
    pub fn in_check(&self) -> bool {
        let (row, col) = self.king_location(self.side_to_move());
        self.is_under_attack(row, col)
    }

    pub(crate) fn is_attacked_by(&self, target: Location, attacker: Color) -> bool {
        self.pseudo_legal_moves_for(attacker)
            .iter()
            .any(|mv| mv.end() == target)
    }
}
