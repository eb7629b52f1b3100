//! Automatic: every active player discards every non-trump card from their
//! hand face down. How many cards they're owed back is computed later, at
//! second-deal time, off the resulting hand size (`second_deal::redeal`),
//! not off how many were discarded here; a kept trump count and a discard
//! count aren't the same thing once hand sizes vary.

use crate::cards::is_trump;
use crate::event::{Event, EventKind};
use crate::state::{GameState, Phase, Position};

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
        let (keep, discarded): (Vec<_>, Vec<_>) = hand.into_iter().partition(|c| is_trump(*c, trump));
        next.player_mut(pos).hand = keep;
        next.discarded_cards.extend(discarded.iter().cloned());
        let seq = next.next_sequence();
        next.events.push(Event::new(EventKind::CardsDiscarded { position: pos, cards: discarded }, next.hand_number, seq));
    }
    next.phase = Phase::SecondDeal;
    next
}
