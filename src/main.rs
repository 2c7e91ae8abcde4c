//! Self-play driver: two seeded random agents play one game and the move
//! list and result are printed.
//!
//! `cargo run --release -- --seed 7 --max-plies 120 --verbose`
//! Log detail follows `RUST_LOG` (default `info`).

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use square_chess::engines::random_playout::{play_random_game, PlayoutConfig};
use square_chess::game_state::game_state::GameStatus;
use square_chess::move_generation::move_generator::MoveGenerationError;
use square_chess::utils::board_layout::board_to_rows;
use square_chess::utils::render_game_state::render_game_state;

#[derive(Debug, Parser)]
#[command(about = "Play a random self-play game with the square_chess move generator")]
struct Args {
    /// Seed for white's agent; black uses seed + 1.
    #[arg(long, default_value_t = PlayoutConfig::default().seed)]
    seed: u64,

    /// Stop after this many half-moves.
    #[arg(long, default_value_t = PlayoutConfig::default().max_plies)]
    max_plies: usize,

    /// Print the final board, drawn and as piece-code rows.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), MoveGenerationError> {
    install_tracing();
    let args = Args::parse();

    let report = play_random_game(&PlayoutConfig {
        seed: args.seed,
        max_plies: args.max_plies,
    })?;

    for (index, pair) in report.notation.chunks(2).enumerate() {
        println!("{}. {}", index + 1, pair.join(" "));
    }

    match report.status {
        GameStatus::Checkmate { winner } => println!("checkmate, {winner} wins"),
        GameStatus::Stalemate => println!("stalemate"),
        GameStatus::Ongoing => println!("stopped after {} plies", report.plies),
    }

    if args.verbose {
        println!("{}", render_game_state(&report.final_state));
        for row in board_to_rows(report.final_state.board()) {
            println!("{row}");
        }
    }

    Ok(())
}

fn install_tracing() {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
