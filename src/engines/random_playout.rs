//! Self-play between two players until the game ends or a ply cap is hit.

use tracing::{debug, info};

use crate::engines::engine_random::RandomAgent;
use crate::engines::engine_trait::Player;
use crate::game_state::game_state::{GameState, GameStatus};
use crate::move_generation::move_generator::MoveGenResult;

#[derive(Debug, Clone, Copy)]
pub struct PlayoutConfig {
    pub seed: u64,
    pub max_plies: usize,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_plies: 200,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub plies: usize,
    pub notation: Vec<String>,
    pub status: GameStatus,
    pub final_state: GameState,
}

/// Play `white` against `black` from the starting position.
pub fn play_game(
    white: &mut dyn Player,
    black: &mut dyn Player,
    max_plies: usize,
) -> MoveGenResult<PlayoutReport> {
    let mut game_state = GameState::new();
    let mut notation = Vec::new();

    while notation.len() < max_plies {
        let player: &mut dyn Player = if game_state.white_to_move() {
            &mut *white
        } else {
            &mut *black
        };
        let Some(mv) = player.choose_move(&mut game_state) else {
            break;
        };
        debug!(player = player.name(), ply = notation.len(), notation = %mv, "chosen");
        game_state.make_move(mv)?;
        notation.push(mv.notation());
    }

    // Refresh the terminal flags for the final position.
    game_state.get_valid_moves();
    let status = game_state.game_status();
    info!(plies = notation.len(), ?status, "playout finished");

    Ok(PlayoutReport {
        plies: notation.len(),
        notation,
        status,
        final_state: game_state,
    })
}

/// Two seeded random agents; black's seed is derived from white's.
pub fn play_random_game(config: &PlayoutConfig) -> MoveGenResult<PlayoutReport> {
    let mut white = RandomAgent::new(config.seed);
    let mut black = RandomAgent::new(config.seed.wrapping_add(1));
    play_game(&mut white, &mut black, config.max_plies)
}
