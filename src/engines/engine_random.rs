//! Random-move player.
//!
//! Selects uniformly from legal moves. Seeded runs are reproducible, which
//! makes it the driver for self-play diagnostics and property tests.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::engines::engine_trait::Player;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Player for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> Option<Move> {
        let legal_moves = game_state.get_valid_moves();
        legal_moves.as_slice().choose(&mut self.rng).copied()
    }
}
