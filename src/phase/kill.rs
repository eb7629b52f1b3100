//! Automatic: a hand larger than `config.hand_size` after the second deal
//! must shed its excess. Only non-point trumps may be killed (cheapest
//! first), and they're laid face up in removal order; the top of that pile
//! must be led on the player's first trick of the hand. A player holding
//! enough point trumps that there aren't enough non-point trumps to shed
//! keeps the whole oversized hand instead: no partial kill, no event.

use crate::cards::{is_trump, point_value, trump_rank};
use crate::event::{Event, EventKind};
use crate::state::{GameState, Position};

pub fn run(state: &GameState) -> GameState {
    let mut next = state.clone();
    let trump = match state.trump_suit {
        Some(t) => t,
        None => return next,
    };
    for pos in Position::ALL {
        if next.player(pos).eliminated {
            continue;
        }
        let hand = next.player(pos).hand.clone();
        let excess = hand.len().saturating_sub(next.config.hand_size as usize);
        if excess == 0 {
            continue;
        }
        let mut killable: Vec<_> =
            hand.iter().cloned().filter(|c| is_trump(*c, trump) && point_value(*c, trump) == 0).collect();
        if killable.len() < excess {
            continue;
        }
        killable.sort_by_key(|c| trump_rank(*c, trump));
        let killed: Vec<_> = killable.into_iter().take(excess).collect();
        let remaining: Vec<_> = hand.into_iter().filter(|c| !killed.contains(c)).collect();
        next.player_mut(pos).hand = remaining;
        next.killed_cards[pos.index()] = killed.clone();
        let seq = next.next_sequence();
        next.events.push(Event::new(EventKind::CardsKilled { position: pos, cards: killed }, next.hand_number, seq));
    }
    next
}
