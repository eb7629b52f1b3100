//! The second deal tops each active non-dealer player back up to a full
//! hand (`need = hand_size - current hand length`, not the number they
//! discarded: a player can have fewer trumps left than they discarded
//! non-trumps); the dealer instead robs the pool (their own hand plus
//! whatever's left in the deck after everyone else is topped up). Robbing
//! is automatic unless `config.auto_dealer_rob` is false, in which case the
//! engine stops here awaiting a `select_cards` action.

use crate::event::{Event, EventKind};
use crate::phase::{dealer_rob, kill};
use crate::state::{GameState, Phase, Position};

fn redeal(state: &GameState) -> GameState {
    let mut next = state.clone();
    let dealer = match state.current_dealer {
        Some(d) => d,
        None => return next,
    };
    let mut deck = next.deck.clone();
    let mut dealt = Vec::new();
    let mut pos = dealer.next();
    for _ in 0..4 {
        if pos != dealer && !next.player(pos).eliminated {
            let need = (next.config.hand_size as usize).saturating_sub(next.player(pos).hand.len());
            next.cards_requested[pos.index()] = need as u8;
            let got: Vec<_> = deck.drain(0..need.min(deck.len())).collect();
            if !got.is_empty() {
                next.player_mut(pos).hand.extend(got.iter().cloned());
                dealt.push((pos, got));
            }
        }
        pos = pos.next();
    }
    next.deck = deck;
    next.dealer_pool_size = next.player(dealer).hand.len() + next.deck.len();
    let seq = next.next_sequence();
    next.events.push(Event::new(EventKind::SecondDealComplete { dealt }, next.hand_number, seq));
    next
}

/// Transitions from a completed rob into `playing`, running the kill rule
/// first (kill is unconditionally automatic, unlike robbing).
pub fn finish(state: &GameState) -> GameState {
    let mut next = kill::run(state);
    let dealer = next.current_dealer;
    let leader = dealer.map(Position::next);
    next.phase = Phase::Playing;
    next.current_turn = leader;
    next.current_trick = leader.map(|p| crate::state::Trick::new(0, p));
    next
}

/// Automatic entry point: redeals, then robs automatically if configured to.
/// If manual robbing is required, stops in `SecondDeal` with `current_turn`
/// set to the dealer, awaiting `Action::SelectCards`.
pub fn run(state: &GameState) -> GameState {
    let redealt = redeal(state);
    let dealer = match redealt.current_dealer {
        Some(d) => d,
        None => return redealt,
    };
    if !redealt.config.auto_dealer_rob {
        let mut waiting = redealt;
        waiting.current_turn = Some(dealer);
        return waiting;
    }
    let taken_count = redealt.deck.len();
    let (kept, _) = dealer_rob::auto_select(&redealt, dealer);
    let robbed = dealer_rob::apply(&redealt, dealer, kept, taken_count);
    finish(&robbed)
}
