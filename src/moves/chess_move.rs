//! A single piece relocation captured from a board snapshot.
//!
//! `Move` records the piece that moved and whatever stood on the destination
//! at construction time, so later board changes never alter it. Identity is the
//! coordinate key `start_row*1000 + start_col*100 + end_row*10 + end_col`,
//! which names a coordinate transition rather than a piece. Extending the rules
//! with promotion or castling would need a wider key.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::utils::algebraic::{location_to_algebraic, COLS_TO_FILES};

#[derive(Debug, Clone, Copy)]
pub struct Move {
    start_row: usize,
    start_col: usize,
    end_row: usize,
    end_col: usize,
    piece_moved: Piece,
    piece_captured: SquareValue,
}

impl Move {
    /// Build a move from a start/end selection on `board`.
    ///
    /// Fails when either square is off the board or the start square is empty.
    pub fn new(start: Location, end: Location, board: &Board) -> MoveGenResult<Self> {
        for location in [start, end] {
            if !is_on_board(location) {
                return Err(MoveGenerationError::OutOfBounds(location));
            }
        }
        let piece_moved =
            board[start.0][start.1].ok_or(MoveGenerationError::EmptyStartSquare(start))?;
        Ok(Self::with_piece(start, end, piece_moved, board))
    }

    /// Generator fast path: both squares are on the board and `piece_moved`
    /// is what stands on `start`.
    #[inline]
    pub(crate) fn with_piece(start: Location, end: Location, piece_moved: Piece, board: &Board) -> Self {
        Self {
            start_row: start.0,
            start_col: start.1,
            end_row: end.0,
            end_col: end.1,
            piece_moved,
            piece_captured: board[end.0][end.1],
        }
    }

    /// Coordinate key in `0..=7777`.
    #[inline]
    pub fn move_id(&self) -> u16 {
        (self.start_row * 1000 + self.start_col * 100 + self.end_row * 10 + self.end_col) as u16
    }

    #[inline]
    pub fn start(&self) -> Location {
        (self.start_row, self.start_col)
    }

    #[inline]
    pub fn end(&self) -> Location {
        (self.end_row, self.end_col)
    }

    #[inline]
    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    /// Destination occupant when the move was built.
    #[inline]
    pub fn piece_captured(&self) -> SquareValue {
        self.piece_captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Simplified algebraic notation: `e4`, `exd5`, `Nf3`, `Bxc6`.
    ///
    /// No disambiguation and no check, mate, castling or promotion marks.
    pub fn notation(&self) -> String {
        let destination = location_to_algebraic(self.end());
        match (self.piece_moved.kind, self.is_capture()) {
            (PieceKind::Pawn, false) => destination,
            (PieceKind::Pawn, true) => format!("{}x{destination}", COLS_TO_FILES[self.start_col]),
            (kind, false) => format!("{}{destination}", kind.letter()),
            (kind, true) => format!("{}x{destination}", kind.letter()),
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::game_state::chess_rules::STARTING_BOARD;
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_generator::MoveGenerationError;
    use crate::utils::board_layout::parse_board_rows;

    #[test]
    fn coordinate_key_and_snapshot_from_start_position() {
        let mut board = STARTING_BOARD;
        let mv = Move::new((6, 4), (4, 4), &board).expect("e2e4 should build");
        assert_eq!(mv.move_id(), 6444);
        assert_eq!(mv.piece_moved(), Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(mv.piece_captured(), None);

        board[6][4] = Some(Piece::new(Color::White, PieceKind::Rook));
        board[4][4] = Some(Piece::new(Color::Black, PieceKind::Queen));
        let rebuilt = Move::new((6, 4), (4, 4), &board).expect("rook on e2");
        assert_eq!(rebuilt.piece_moved().kind, PieceKind::Rook);
        assert!(rebuilt.is_capture());

        assert_eq!(mv.piece_moved().kind, PieceKind::Pawn);
        assert_eq!(mv.piece_captured(), None);
        assert_eq!(mv, rebuilt);
    }

    #[test]
    fn equality_ignores_piece_identity() {
        let board = STARTING_BOARD;
        let a = Move::new((7, 1), (5, 2), &board).expect("knight move");
        let mut other = STARTING_BOARD;
        other[7][1] = Some(Piece::new(Color::Black, PieceKind::Rook));
        let b = Move::new((7, 1), (5, 2), &other).expect("rook placed on b1");
        assert_eq!(a, b);
        assert_ne!(a, Move::new((7, 1), (5, 0), &board).expect("Na3"));
    }

    #[test]
    fn equality_follows_both_coordinate_pairs() {
        let board = STARTING_BOARD;
        let e3 = Move::new((6, 4), (5, 4), &board).expect("e3");
        let e4 = Move::new((6, 4), (4, 4), &board).expect("e4");
        let d3 = Move::new((6, 3), (5, 3), &board).expect("d3");
        assert_ne!(e3, e4);
        assert_ne!(e3, d3);
        assert_eq!(e3, Move::new(e3.start(), e3.end(), &board).expect("e3 again"));
        assert_eq!((e4.start(), e4.end()), ((6, 4), (4, 4)));
        assert_eq!(e3.move_id(), 6454);

        let mut seen = std::collections::HashSet::new();
        assert!(seen.insert(e3));
        assert!(seen.insert(e4));
        assert!(!seen.insert(Move::new((6, 4), (5, 4), &board).expect("e3 again")));
    }

    #[test]
    fn construction_rejects_bad_selections() {
        let board = STARTING_BOARD;
        assert_eq!(
            Move::new((4, 4), (3, 4), &board),
            Err(MoveGenerationError::EmptyStartSquare((4, 4)))
        );
        assert_eq!(
            Move::new((6, 4), (8, 4), &board),
            Err(MoveGenerationError::OutOfBounds((8, 4)))
        );
    }

    #[test]
    fn notation_for_quiet_moves_and_captures() {
        let board = STARTING_BOARD;
        assert_eq!(Move::new((6, 4), (4, 4), &board).unwrap().notation(), "e4");
        assert_eq!(Move::new((1, 4), (3, 4), &board).unwrap().notation(), "e5");
        assert_eq!(Move::new((7, 6), (5, 5), &board).unwrap().notation(), "Nf3");

        let board = parse_board_rows([
            "bR bN bB bQ bK bB bN bR",
            "bP bP bP bP -- bP bP bP",
            "-- -- -- -- bP -- -- --",
            "-- -- -- wP -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- bB -- -- -- -- --",
            "wP wP wP -- wP wP wP wP",
            "wR wN wB wQ wK wB wN wR",
        ])
        .expect("layout should parse");
        let pawn_capture = Move::new((3, 3), (2, 4), &board).unwrap();
        assert_eq!(pawn_capture.notation(), "dxe6");
        assert_eq!(pawn_capture.to_string(), "dxe6");
        assert_eq!(Move::new((6, 1), (5, 2), &board).unwrap().notation(), "bxc3");
        assert_eq!(Move::new((7, 1), (5, 2), &board).unwrap().notation(), "Nxc3");
        assert_eq!(Move::new((5, 2), (6, 3), &board).unwrap().notation(), "Bd2");
    }
}
