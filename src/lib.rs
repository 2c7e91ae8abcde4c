//! Crate root module declarations for the square_chess engine.
//!
//! Exposes the board state, the move value, pseudo-legal and legal move
//! generation, random self-play and the notation/layout helpers so the
//! binary, benches and any presentation layer can import stable paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
    pub mod random_playout;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_layout;
    pub mod render_game_state;
}
