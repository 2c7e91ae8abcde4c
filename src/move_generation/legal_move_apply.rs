//! The only two mutators of the board: `make_move` and `undo_move`.
//!
//! `undo_move` is the exact inverse of `make_move`, restoring the board, the
//! turn flag and the king location from the move's own snapshot.

use tracing::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::moves::chess_move::Move;

impl GameState {
    /// Apply `mv`. Legality is the caller's business (draw moves from
    /// `get_valid_moves`); this only checks that the move still describes the
    /// current board and leaves the state untouched when it does not.
    pub fn make_move(&mut self, mv: Move) -> MoveGenResult<()> {
        self.check_move_matches_board(&mv)?;
        self.apply_move_unchecked(mv);
        trace!(notation = %mv, move_id = mv.move_id(), ply = self.move_log.len(), "make_move");
        Ok(())
    }

    /// Revert the last applied move and return it. Empty history is a no-op.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.revert_last_move()?;
        trace!(notation = %mv, move_id = mv.move_id(), ply = self.move_log.len(), "undo_move");
        Some(mv)
    }

    /// Board mutation shared by `make_move` and the legality filter's trial
    /// moves, which come straight from the generator. `revert_last_move` is
    /// its inverse.
    pub(crate) fn apply_move_unchecked(&mut self, mv: Move) {
        let ((start_row, start_col), (end_row, end_col)) = (mv.start(), mv.end());
        self.board[start_row][start_col] = None;
        self.board[end_row][end_col] = Some(mv.piece_moved());
        self.move_log.push(mv);
        self.white_to_move = !self.white_to_move;

        if mv.piece_moved().kind == PieceKind::King {
            self.set_king_location(mv.piece_moved().color, mv.end());
        }
    }

    pub(crate) fn revert_last_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        let ((start_row, start_col), (end_row, end_col)) = (mv.start(), mv.end());
        self.board[start_row][start_col] = Some(mv.piece_moved());
        self.board[end_row][end_col] = mv.piece_captured();
        self.white_to_move = !self.white_to_move;

        if mv.piece_moved().kind == PieceKind::King {
            self.set_king_location(mv.piece_moved().color, mv.start());
        }
        Some(mv)
    }

    fn check_move_matches_board(&self, mv: &Move) -> MoveGenResult<()> {
        let (start, end) = (mv.start(), mv.end());
        for location in [start, end] {
            if !is_on_board(location) {
                return Err(MoveGenerationError::OutOfBounds(location));
            }
        }
        if start == end {
            return Err(MoveGenerationError::InvalidState(format!(
                "move {} starts and ends on the same square",
                mv.move_id()
            )));
        }

        let Some(occupant) = self.piece_at(start) else {
            return Err(MoveGenerationError::EmptyStartSquare(start));
        };
        if occupant != mv.piece_moved() {
            return Err(MoveGenerationError::StaleMove(format!(
                "expected {} on ({}, {}), found {occupant}",
                mv.piece_moved(), start.0, start.1
            )));
        }
        if occupant.color != self.side_to_move() {
            return Err(MoveGenerationError::WrongSideToMove(start));
        }
        if self.piece_at(end) != mv.piece_captured() {
            return Err(MoveGenerationError::StaleMove(format!(
                "destination ({}, {}) no longer matches the captured piece",
                end.0, end.1
            )));
        }
        Ok(())
    }
}
