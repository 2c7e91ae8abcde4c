//! Canonical chess-rule constants.
//!
//! Stores the standard starting layout and the fixed offset tables the piece
//! generators walk.

use crate::game_state::chess_types::*;

const fn back_rank(color: Color) -> [SquareValue; BOARD_SIZE] {
    [
        Some(Piece::new(color, PieceKind::Rook)),
        Some(Piece::new(color, PieceKind::Knight)),
        Some(Piece::new(color, PieceKind::Bishop)),
        Some(Piece::new(color, PieceKind::Queen)),
        Some(Piece::new(color, PieceKind::King)),
        Some(Piece::new(color, PieceKind::Bishop)),
        Some(Piece::new(color, PieceKind::Knight)),
        Some(Piece::new(color, PieceKind::Rook)),
    ]
}

const fn pawn_rank(color: Color) -> [SquareValue; BOARD_SIZE] {
    [Some(Piece::new(color, PieceKind::Pawn)); BOARD_SIZE]
}

const EMPTY_RANK: [SquareValue; BOARD_SIZE] = [None; BOARD_SIZE];

/// Standard chess starting position, black on row 0.
pub const STARTING_BOARD: Board = [
    back_rank(Color::Black),
    pawn_rank(Color::Black),
    EMPTY_RANK,
    EMPTY_RANK,
    EMPTY_RANK,
    EMPTY_RANK,
    pawn_rank(Color::White),
    back_rank(Color::White),
];

pub const WHITE_KING_START: Location = (7, 4);
pub const BLACK_KING_START: Location = (0, 4);

pub const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

pub const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Longest ray a sliding piece can travel.
pub const MAX_RAY_STEPS: isize = 7;
