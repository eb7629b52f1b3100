//! Automatic: resets per-hand state and loops back into dealer selection
//! for the next hand, reshuffling from a seed derived from the root seed.

use crate::state::{GameState, Phase, Position};

pub fn run(state: &GameState) -> GameState {
    let mut next = state.clone();
    let hand_number = state.hand_number + 1;
    let seed = crate::seed::derive_seed(state.rng_seed, hand_number);

    next.hand_number = hand_number;
    next.trick_number = 0;
    next.deck = crate::cards::new_deck(seed);
    next.discarded_cards.clear();
    next.killed_cards = Default::default();
    next.cards_requested = [0; 4];
    next.dealer_pool_size = 0;
    next.bids.clear();
    next.highest_bid = None;
    next.bidding_team = None;
    next.trump_suit = None;
    next.current_trick = None;
    next.tricks.clear();
    next.hand_points = [0, 0];
    next.current_turn = None;
    for pos in Position::ALL {
        next.player_mut(pos).hand.clear();
        next.player_mut(pos).eliminated = false;
    }
    next.phase = Phase::DealerSelection;
    next
}
