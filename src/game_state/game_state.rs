//! Mutable board state for a two-player game.
//!
//! `GameState` owns the board matrix, the turn flag, the move history used
//! for undo, both king locations and the checkmate/stalemate flags. The board
//! only changes through `make_move`/`undo_move`; the terminal flags are
//! recomputed by every `get_valid_moves` call.

use crate::game_state::chess_rules::{BLACK_KING_START, STARTING_BOARD, WHITE_KING_START};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::moves::chess_move::Move;

/// Outcome derived from the flags of the last `get_valid_moves` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) white_to_move: bool,
    pub(crate) move_log: Vec<Move>,
    pub(crate) white_king_loc: Location,
    pub(crate) black_king_loc: Location,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: STARTING_BOARD,
            white_to_move: true,
            move_log: Vec::new(),
            white_king_loc: WHITE_KING_START,
            black_king_loc: BLACK_KING_START,
            checkmate: false,
            stalemate: false,
        }
    }
}

impl GameState {
    /// Standard initial position, white to move.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set up an arbitrary position. The board must hold exactly one king of
    /// each color, and the side not on move must not be in check.
    pub fn from_board(board: Board, white_to_move: bool) -> MoveGenResult<Self> {
        let white_king_loc = find_single_king(&board, Color::White)?;
        let black_king_loc = find_single_king(&board, Color::Black)?;

        let state = Self {
            board,
            white_to_move,
            move_log: Vec::new(),
            white_king_loc,
            black_king_loc,
            checkmate: false,
            stalemate: false,
        };

        let mover = state.side_to_move();
        let waiting = mover.opposite();
        if state.is_attacked_by(state.king_location(waiting), mover) {
            return Err(MoveGenerationError::InvalidState(format!(
                "{waiting} king is in check with {mover} to move"
            )));
        }
        Ok(state)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Occupant of `location`; `None` for empty and off-board squares alike.
    #[inline]
    pub fn piece_at(&self, location: Location) -> SquareValue {
        self.board
            .get(location.0)
            .and_then(|row| row.get(location.1))
            .copied()
            .flatten()
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Applied moves, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Location {
        match color {
            Color::White => self.white_king_loc,
            Color::Black => self.black_king_loc,
        }
    }

    #[inline]
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    pub fn game_status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate {
                winner: self.side_to_move().opposite(),
            }
        } else if self.stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::Ongoing
        }
    }

    #[inline]
    pub(crate) fn set_king_location(&mut self, color: Color, location: Location) {
        match color {
            Color::White => self.white_king_loc = location,
            Color::Black => self.black_king_loc = location,
        }
    }
}

fn find_single_king(board: &Board, color: Color) -> MoveGenResult<Location> {
    let king = Piece::new(color, PieceKind::King);
    let mut found = None;

    for (row, squares) in board.iter().enumerate() {
        for (col, square) in squares.iter().enumerate() {
            if *square == Some(king) {
                if found.is_some() {
                    return Err(MoveGenerationError::InvalidState(format!(
                        "more than one {color} king on the board"
                    )));
                }
                found = Some((row, col));
            }
        }
    }

    found.ok_or_else(|| MoveGenerationError::InvalidState(format!("no {color} king on the board")))
}

#[cfg(test)]
mod tests {
    use super::{GameState, GameStatus};
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_generator::MoveGenerationError;
    use crate::utils::board_layout::parse_board_rows;

    #[test]
    fn new_game_has_kings_on_the_e_file() {
        let game = GameState::new();
        assert!(game.white_to_move());
        assert_eq!(game.king_location(Color::White), (7, 4));
        assert_eq!(game.king_location(Color::Black), (0, 4));
        assert_eq!(
            game.piece_at((0, 3)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert!(game.move_log().is_empty());
        assert_eq!(game.game_status(), GameStatus::Ongoing);
    }

    #[test]
    fn from_board_locates_kings() {
        let board = parse_board_rows([
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- bK --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- wK -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
        ])
        .expect("layout should parse");
        let game = GameState::from_board(board, false).expect("two kings present");
        assert_eq!(game.king_location(Color::White), (6, 1));
        assert_eq!(game.king_location(Color::Black), (1, 6));
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn from_board_rejects_missing_or_extra_kings() {
        let mut board = [[None; BOARD_SIZE]; BOARD_SIZE];
        board[0][0] = Some(Piece::new(Color::Black, PieceKind::King));
        assert!(matches!(
            GameState::from_board(board, true),
            Err(MoveGenerationError::InvalidState(_))
        ));

        board[7][7] = Some(Piece::new(Color::White, PieceKind::King));
        board[7][0] = Some(Piece::new(Color::White, PieceKind::King));
        assert!(GameState::from_board(board, true).is_err());
    }

    #[test]
    fn from_board_rejects_a_capturable_king() {
        let board = parse_board_rows([
            "-- -- -- -- bK -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wR -- -- --",
            "wK -- -- -- -- -- -- --",
        ])
        .expect("layout should parse");
        assert!(matches!(
            GameState::from_board(board, true),
            Err(MoveGenerationError::InvalidState(_))
        ));

        let game = GameState::from_board(board, false).expect("black to move answers the check");
        assert!(game.in_check());
    }

    #[test]
    fn piece_at_is_empty_off_the_board() {
        let game = GameState::new();
        assert_eq!(game.piece_at((8, 0)), None);
        assert_eq!(game.piece_at((0, 8)), None);
        assert_eq!(game.piece_at((usize::MAX, usize::MAX)), None);
        assert_eq!(game.piece_at((7, 4)), Some(Piece::new(Color::White, PieceKind::King)));
    }
}
