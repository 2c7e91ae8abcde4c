//! Terminal-oriented Unicode board dump.
//!
//! Used by the self-play binary's verbose mode and in test failure messages.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::{COLS_TO_FILES, ROWS_TO_RANKS};

/// Render the board to a Unicode string, row 0 (rank 8) first.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();
    let files: String = COLS_TO_FILES.iter().flat_map(|&f| [' ', f]).collect();

    out.push(' ');
    out.push_str(&files);
    out.push('\n');

    for (row, squares) in game_state.board().iter().enumerate() {
        out.push(ROWS_TO_RANKS[row]);
        out.push(' ');

        for (col, square) in squares.iter().enumerate() {
            match square {
                Some(piece) => out.push(piece_to_unicode(*piece)),
                None => out.push('·'),
            }

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(ROWS_TO_RANKS[row]);
        out.push('\n');
    }

    out.push(' ');
    out.push_str(&files);

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
