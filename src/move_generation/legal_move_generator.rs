//! Pseudo-legal generation and the legality filter.
//!
//! `get_all_moves` dispatches every piece of the side to move to its kind's
//! generator. `get_valid_moves` tries each candidate on the board, keeps the
//! ones that leave the mover's king safe and refreshes the checkmate and
//! stalemate flags.

use std::ops::Deref;

use tracing::debug;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

impl GameState {
    /// Pseudo-legal moves for the side to move, in board-scan order.
    pub fn get_all_moves(&self) -> Vec<Move> {
        self.pseudo_legal_moves_for(self.side_to_move())
    }

    pub(crate) fn pseudo_legal_moves_for(&self, side: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let Some(piece) = self.board[row][col] else {
                    continue;
                };
                if piece.color != side {
                    continue;
                }

                let from = (row, col);
                match piece.kind {
                    PieceKind::Pawn => generate_pawn_moves(self, piece, from, &mut moves),
                    PieceKind::Rook => generate_rook_moves(self, piece, from, &mut moves),
                    PieceKind::Knight => generate_knight_moves(self, piece, from, &mut moves),
                    PieceKind::Bishop => generate_bishop_moves(self, piece, from, &mut moves),
                    PieceKind::King => generate_king_moves(self, piece, from, &mut moves),
                    PieceKind::Queen => generate_queen_moves(self, piece, from, &mut moves),
                }
            }
        }

        moves
    }

    /// Legal moves for the side to move. Also sets `checkmate` or `stalemate`
    /// when there are none and clears both otherwise.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let candidates = self.get_all_moves();
        let valid: Vec<Move> = candidates
            .into_iter()
            .filter(|&mv| !self.leaves_own_king_attacked(mv))
            .collect();

        if valid.is_empty() {
            let in_check = self.in_check();
            self.checkmate = in_check;
            self.stalemate = !in_check;
            debug!(
                side = %self.side_to_move(),
                checkmate = self.checkmate,
                stalemate = self.stalemate,
                "no legal moves"
            );
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        valid
    }

    /// Match a start/end selection against the legal set.
    pub fn find_valid_move(&mut self, start: Location, end: Location) -> Option<Move> {
        self.get_valid_moves()
            .into_iter()
            .find(|mv| mv.start() == start && mv.end() == end)
    }

    fn leaves_own_king_attacked(&mut self, mv: Move) -> bool {
        let mover = mv.piece_moved().color;
        let trial = TrialMove::apply(self, mv);
        trial.is_attacked_by(trial.king_location(mover), mover.opposite())
    }
}

/// A move applied for inspection and reverted when dropped.
struct TrialMove<'a> {
    game_state: &'a mut GameState,
}

impl<'a> TrialMove<'a> {
    fn apply(game_state: &'a mut GameState, mv: Move) -> Self {
        game_state.apply_move_unchecked(mv);
        Self { game_state }
    }
}

impl Deref for TrialMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.game_state.revert_last_move();
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::{chess_types::*, game_state::GameState, game_state::GameStatus};
    use crate::utils::algebraic::algebraic_to_location;
    use crate::utils::board_layout::parse_board_rows;

    fn play(game: &mut GameState, start: &str, end: &str) {
        let start = algebraic_to_location(start).expect("start square");
        let end = algebraic_to_location(end).expect("end square");
        let mv = game.find_valid_move(start, end).expect("move should be legal");
        game.make_move(mv).expect("legal move applies");
    }

    #[test]
    fn start_position_has_twenty_moves() {
        let mut game = GameState::new();
        let before = game.clone();
        let moves = game.get_valid_moves();
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().any(|mv| mv.move_id() == 6444));
        assert_eq!(
            moves.iter().filter(|mv| mv.piece_moved().kind == PieceKind::Pawn).count(),
            16
        );
        assert_eq!(
            moves.iter().filter(|mv| mv.piece_moved().kind == PieceKind::Knight).count(),
            4
        );
        assert_eq!(game, before);
    }

    #[test]
    fn black_replies_mirror_white() {
        let mut game = GameState::new();
        play(&mut game, "e2", "e4");
        let replies = game.get_valid_moves();
        assert_eq!(replies.len(), 20);
        assert!(replies.iter().all(|mv| mv.piece_moved().color == Color::Black));
        assert!(replies.iter().any(|mv| mv.notation() == "e5"));
    }

    #[test]
    fn pinned_rook_stays_on_the_file() {
        let board = parse_board_rows([
            "bK -- -- -- bR -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wR -- -- --",
            "-- -- -- -- wK -- -- --",
        ])
        .expect("layout should parse");
        let mut game = GameState::from_board(board, true).expect("valid position");
        assert_eq!(game.get_all_moves().len(), 17);

        let moves = game.get_valid_moves();
        assert_eq!(moves.len(), 10);
        assert!(moves
            .iter()
            .filter(|mv| mv.piece_moved().kind == PieceKind::Rook)
            .all(|mv| mv.end().1 == 4));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board = parse_board_rows([
            "-- -- -- -- bK -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "bR -- -- -- -- -- -- --",
            "-- -- -- -- wK -- -- --",
        ])
        .expect("layout should parse");
        let mut game = GameState::from_board(board, true).expect("valid position");
        let mut targets: Vec<Location> = game.get_valid_moves().iter().map(|mv| mv.end()).collect();
        targets.sort();
        assert_eq!(targets, vec![(7, 3), (7, 5)]);
    }

    #[test]
    fn fools_mate_sets_checkmate() {
        let mut game = GameState::new();
        play(&mut game, "f2", "f3");
        play(&mut game, "e7", "e5");
        play(&mut game, "g2", "g4");
        play(&mut game, "d8", "h4");

        assert!(game.in_check());
        assert!(game.get_valid_moves().is_empty());
        assert!(game.checkmate());
        assert!(!game.stalemate());
        assert_eq!(game.game_status(), GameStatus::Checkmate { winner: Color::Black });

        game.undo_move();
        assert!(!game.get_valid_moves().is_empty());
        assert!(!game.checkmate());
        assert_eq!(game.game_status(), GameStatus::Ongoing);
    }

    #[test]
    fn cornered_king_without_check_is_stalemate() {
        let board = parse_board_rows([
            "bK -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- wQ -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- wK",
        ])
        .expect("layout should parse");
        let mut game = GameState::from_board(board, false).expect("valid position");
        assert!(!game.in_check());
        assert!(game.get_valid_moves().is_empty());
        assert!(game.stalemate());
        assert!(!game.checkmate());
        assert_eq!(game.game_status(), GameStatus::Stalemate);
    }

    #[test]
    fn check_must_be_answered() {
        let board = parse_board_rows([
            "-- -- -- -- bK -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "wP wP -- -- -- -- -- --",
            "bQ -- -- -- wK -- -- wR",
        ])
        .expect("layout should parse");
        let mut game = GameState::from_board(board, true).expect("valid position");
        assert!(game.in_check());
        let moves = game.get_valid_moves();
        // Nothing can block or capture on a1, and f1 stays on the queen's rank.
        let mut notations: Vec<String> = moves.iter().map(|mv| mv.notation()).collect();
        notations.sort();
        assert_eq!(notations, vec!["Kd2", "Ke2", "Kf2"]);
    }
}
