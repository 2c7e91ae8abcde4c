//! Row/column conversions for algebraic coordinates.
//!
//! Rows count down from black's back rank, so the rank table is reversed
//! relative to the row index: row 0 is rank `8` and row 7 is rank `1`.

use crate::game_state::chess_types::{Location, BOARD_SIZE};

/// Rank character for each row index.
pub const ROWS_TO_RANKS: [char; BOARD_SIZE] = ['8', '7', '6', '5', '4', '3', '2', '1'];

/// File character for each column index.
pub const COLS_TO_FILES: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

#[inline]
pub fn rank_to_row(rank: char) -> Option<usize> {
    ROWS_TO_RANKS.iter().position(|&r| r == rank)
}

#[inline]
pub fn file_to_col(file: char) -> Option<usize> {
    COLS_TO_FILES.iter().position(|&f| f == file)
}

/// Convert a location to algebraic notation (for example: `(4, 4)` -> "e4").
///
/// Callers pass on-board locations; anything else is a programming error.
#[inline]
pub fn location_to_algebraic(location: Location) -> String {
    let (row, col) = location;
    format!("{}{}", COLS_TO_FILES[col], ROWS_TO_RANKS[row])
}

/// Convert algebraic notation (for example: "e4") to a location.
pub fn algebraic_to_location(square: &str) -> Result<Location, String> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(format!("Invalid algebraic square: {square}"));
    };

    let col = file_to_col(file).ok_or_else(|| format!("Invalid algebraic file: {file}"))?;
    let row = rank_to_row(rank).ok_or_else(|| format!("Invalid algebraic rank: {rank}"))?;
    Ok((row, col))
}
