//! Demo CLI: plays out a full automatic game from a seed, logging phase
//! transitions and printing the compact notation after every hand. This is
//! the only binary in the workspace that logs or parses CLI args — the
//! core library itself never does either.

use clap::Parser;
use tracing::info;

use pidro_core::action::Action;
use pidro_core::state::{GameConfig, Position};
use pidro_core::{engine, notation};

#[derive(Parser, Debug)]
#[command(about = "Play out a deterministic, fully-automatic Finnish Pidro game")]
struct Args {
    /// Root RNG seed for the game.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Winning score threshold.
    #[arg(long, default_value_t = 62)]
    winning_score: i32,

    /// Cap on how many manual actions the bot will submit before giving up.
    #[arg(long, default_value_t = 10_000)]
    max_actions: usize,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = GameConfig { winning_score: args.winning_score, ..GameConfig::default() };
    let mut state = engine::new_game(args.seed, config);
    info!(phase = state.phase.name(), hand = state.hand_number, "game started");

    let mut steps = 0;
    while !engine::game_over(&state) && steps < args.max_actions {
        steps += 1;
        let position = match state.current_turn {
            Some(p) => p,
            None => break,
        };
        let action = match pick_action(&state, position) {
            Some(a) => a,
            None => break,
        };
        match engine::apply_action(&state, position, action) {
            Ok(next) => {
                if next.phase != state.phase {
                    info!(phase = next.phase.name(), hand = next.hand_number, "phase transition");
                }
                state = next;
            }
            Err(e) => {
                info!(error = %e, "rejected action, stopping");
                break;
            }
        }
    }

    println!("{}", notation::encode(&state));
    for position in Position::ALL {
        println!("{position:?}: {:?}", state.player(position).hand);
    }
}

/// Picks the first legal action. The bot isn't trying to play well, just to
/// drive the state machine forward deterministically for demonstration.
fn pick_action(state: &pidro_core::GameState, position: Position) -> Option<Action> {
    let mut actions = engine::legal_actions(state, position);
    if actions.is_empty() {
        return None;
    }
    Some(actions.remove(0))
}
