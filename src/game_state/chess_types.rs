//! Core value types shared by the board, move generation and notation.
//!
//! The board is a plain 8x8 matrix of optional pieces. Row 0 is black's back
//! rank and row 7 is white's; columns run from the a-file (0) to the h-file (7).

use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// A square value: `None` is the empty marker.
pub type SquareValue = Option<Piece>;

/// The full board matrix indexed as `board[row][col]`.
pub type Board = [[SquareValue; BOARD_SIZE]; BOARD_SIZE];

/// A `(row, col)` pair inside the board.
pub type Location = (usize, usize);

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// First character of a piece code.
    #[inline]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    #[inline]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    /// Row delta of a single pawn push.
    #[inline]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns of this color start on.
    #[inline]
    pub const fn pawn_home_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    King,
    Queen,
}

impl PieceKind {
    /// Second character of a piece code, also the notation letter.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
        }
    }

    #[inline]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'P' => Some(PieceKind::Pawn),
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'K' => Some(PieceKind::King),
            'Q' => Some(PieceKind::Queen),
            _ => None,
        }
    }
}

/// A colored piece, written as a two-character code such as `wP` or `bK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Parse a two-character code (`"wN"`). Returns `None` for anything else,
    /// including the empty marker.
    pub fn from_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let color = Color::from_code(chars.next()?)?;
        let kind = PieceKind::from_letter(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self { color, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.code(), self.kind.letter())
    }
}

/// Two-character rendering of the empty marker.
pub const EMPTY_CODE: &str = "--";

/// Step `distance` times along `(d_row, d_col)` from `from`, or `None` if the
/// result leaves the board.
#[inline]
pub fn offset_location(from: Location, d_row: isize, d_col: isize, distance: isize) -> Option<Location> {
    let row = from.0 as isize + d_row * distance;
    let col = from.1 as isize + d_col * distance;
    if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
        Some((row as usize, col as usize))
    } else {
        None
    }
}

#[inline]
pub fn is_on_board(location: Location) -> bool {
    location.0 < BOARD_SIZE && location.1 < BOARD_SIZE
}
