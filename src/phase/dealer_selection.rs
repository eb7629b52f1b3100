//! Automatic: the first hand's dealer is decided by a simulated cut of the
//! seeded deck (highest rank wins, ties re-cut); every later hand just
//! rotates the previous dealer clockwise.

use crate::cards::Card;
use crate::event::{Event, EventKind};
use crate::state::{GameState, Phase, Position};

fn cut_round(deck: &[Card], idx: usize, candidates: &[Position]) -> (Vec<(Position, Card)>, crate::cards::Rank, usize) {
    let mut scored = Vec::with_capacity(candidates.len());
    let mut best = deck[idx].rank;
    for (i, pos) in candidates.iter().enumerate() {
        let card = deck[idx + i];
        if card.rank > best {
            best = card.rank;
        }
        scored.push((*pos, card));
    }
    (scored, best, idx + candidates.len())
}

/// Cuts from the front of `deck` until a single winner emerges. Does not
/// mutate or permanently consume `deck`: the cut is a simulation used only
/// to rank the players, the real deck is dealt fresh afterwards.
fn cut_winner(deck: &[Card]) -> (Position, Card) {
    let mut idx = 0;
    let mut candidates = Position::ALL.to_vec();
    loop {
        let (scored, best, next_idx) = cut_round(deck, idx, &candidates);
        idx = next_idx;
        let tied: Vec<(Position, Card)> = scored.into_iter().filter(|(_, c)| c.rank == best).collect();
        if tied.len() == 1 {
            return tied[0];
        }
        candidates = tied.into_iter().map(|(p, _)| p).collect();
    }
}

pub fn run(state: &GameState) -> GameState {
    let mut next = state.clone();
    if state.hand_number == 1 {
        let (winner, card) = cut_winner(&state.deck);
        next.current_dealer = Some(winner);
        let seq = next.next_sequence();
        next.events.push(Event::new(
            EventKind::DealerSelected { position: winner, card },
            next.hand_number,
            seq,
        ));
    } else if let Some(prev) = state.current_dealer {
        next.current_dealer = Some(prev.next());
    }
    next.phase = Phase::Dealing;
    next
}
