//! Board literals written as rows of two-character square codes.
//!
//! Each row is eight whitespace-separated tokens, `--` for an empty square and
//! codes such as `wP` or `bK` for pieces, listed from row 0 (rank 8) down.

use crate::game_state::chess_types::*;

pub fn parse_board_rows(rows: [&str; BOARD_SIZE]) -> Result<Board, String> {
    let mut board: Board = [[None; BOARD_SIZE]; BOARD_SIZE];

    for (row, line) in rows.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != BOARD_SIZE {
            return Err(format!(
                "Row {row} must contain {BOARD_SIZE} squares, got {}",
                tokens.len()
            ));
        }

        for (col, token) in tokens.into_iter().enumerate() {
            board[row][col] = parse_square_value(token)
                .ok_or_else(|| format!("Invalid square code '{token}' at ({row}, {col})"))?;
        }
    }

    Ok(board)
}

/// `Some(None)` for the empty marker, `Some(Some(piece))` for a piece code.
fn parse_square_value(token: &str) -> Option<SquareValue> {
    if token == EMPTY_CODE {
        Some(None)
    } else {
        Piece::from_code(token).map(Some)
    }
}

/// Inverse of [`parse_board_rows`].
pub fn board_to_rows(board: &Board) -> Vec<String> {
    board
        .iter()
        .map(|row| {
            row.iter()
                .map(|square| match square {
                    Some(piece) => piece.to_string(),
                    None => EMPTY_CODE.to_owned(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
