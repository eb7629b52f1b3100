//! The bounded automatic-phase-advance loop: after any action or at game
//! start, automatic phases run to completion without waiting for input,
//! stopping as soon as the game reaches a phase that needs one.

use crate::phase::{dealer_selection, dealing, discard, hand_complete, scoring, second_deal};
use crate::state::{GameState, Phase};

/// Backstop against an unbounded loop from a malformed config; no real game
/// needs anywhere near this many automatic steps between manual actions.
const MAX_ITERATIONS: usize = 64;

pub fn advance(state: &GameState) -> GameState {
    let mut current = state.clone();
    for _ in 0..MAX_ITERATIONS {
        let next = match current.phase {
            Phase::DealerSelection => dealer_selection::run(&current),
            Phase::Dealing => dealing::run(&current),
            Phase::Discarding => discard::run(&current),
            Phase::SecondDeal if current.config.auto_dealer_rob => second_deal::run(&current),
            Phase::Scoring => scoring::run(&current),
            Phase::HandComplete => hand_complete::run(&current),
            _ => return current,
        };
        if next.phase == current.phase {
            return next;
        }
        current = next;
    }
    current
}
