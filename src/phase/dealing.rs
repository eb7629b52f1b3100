//! Automatic: deals `config.initial_deal` cards to each active player,
//! starting left of the dealer and proceeding clockwise, off the front of
//! the already-shuffled deck.

use crate::event::{Event, EventKind};
use crate::state::{GameState, Phase};

pub fn run(state: &GameState) -> GameState {
    let mut next = state.clone();
    let dealer = match state.current_dealer {
        Some(d) => d,
        None => return next,
    };
    let mut deck = state.deck.clone();
    let mut deals = Vec::with_capacity(4);
    let mut pos = dealer.next();
    for _ in 0..4 {
        if !next.player(pos).eliminated {
            let n = state.config.initial_deal as usize;
            let dealt: Vec<_> = deck.drain(0..n.min(deck.len())).collect();
            next.player_mut(pos).hand = dealt.clone();
            deals.push((pos, dealt));
        }
        pos = pos.next();
    }
    next.deck = deck;
    let seq = next.next_sequence();
    next.events.push(Event::new(EventKind::CardsDealt { deals }, next.hand_number, seq));
    next.phase = Phase::Bidding;
    next.current_turn = Some(dealer.next());
    next
}
