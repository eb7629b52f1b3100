//! The dealer robs the leftover deck: their hand plus whatever wasn't
//! redealt becomes one pool, and they keep exactly `config.hand_size`
//! cards from it, discarding the rest. Automatic mode scores the pool and
//! keeps the strongest trumps; manual mode takes the player's explicit
//! selection.

use crate::cards::{is_trump, point_value, trump_rank, Card};
use crate::errors::DomainError;
use crate::event::{Event, EventKind};
use crate::state::{GameState, Position};

fn pool(state: &GameState, dealer: Position) -> Vec<Card> {
    let mut pool = state.player(dealer).hand.clone();
    pool.extend(state.deck.iter().cloned());
    pool
}

fn score(card: Card, trump: crate::cards::Suit) -> i32 {
    if is_trump(card, trump) {
        point_value(card, trump) * 100 + trump_rank(card, trump) as i32
    } else {
        0
    }
}

pub fn auto_select(state: &GameState, dealer: Position) -> (Vec<Card>, Vec<Card>) {
    let trump = state.trump_suit;
    let mut candidates = pool(state, dealer);
    candidates.sort_by_key(|c| std::cmp::Reverse(trump.map(|t| score(*c, t)).unwrap_or(0)));
    let keep_n = (state.config.hand_size as usize).min(candidates.len());
    let kept = candidates[..keep_n].to_vec();
    let discarded = candidates[keep_n..].to_vec();
    (kept, discarded)
}

/// Applies a dealer-rob outcome to `state`, assuming `state.phase ==
/// SecondDeal` and the redeal has already happened. `kept` must be a
/// `config.hand_size`-sized subset of the dealer's pool (hand + leftover
/// deck); the remainder is discarded.
pub fn apply(state: &GameState, dealer: Position, kept: Vec<Card>, taken_count: usize) -> GameState {
    let mut next = state.clone();
    let full_pool = pool(state, dealer);
    let mut remaining = full_pool.clone();
    for c in &kept {
        if let Some(idx) = remaining.iter().position(|x| x == c) {
            remaining.remove(idx);
        }
    }
    next.player_mut(dealer).hand = kept.clone();
    next.discarded_cards.extend(remaining.iter().cloned());
    next.deck.clear();
    let seq = next.next_sequence();
    next.events.push(Event::new(
        EventKind::DealerRobbedPack { position: dealer, taken_count, kept, discarded: remaining },
        next.hand_number,
        seq,
    ));
    next
}

/// Validates a manual selection against the dealer's pool.
pub fn validate_selection(state: &GameState, dealer: Position, selected: &[Card]) -> Result<(), DomainError> {
    if selected.len() != state.config.hand_size as usize {
        return Err(DomainError::InvalidCardCount { expected: state.config.hand_size, got: selected.len() as u8 });
    }
    let available = pool(state, dealer);
    for c in selected {
        if !available.contains(c) {
            return Err(DomainError::CardNotInHand(*c));
        }
    }
    Ok(())
}
