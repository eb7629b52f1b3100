//! Manual: one card per active player per trick. Must follow suit, and if
//! trump is led, must play trump when holding one; the top of a player's
//! killed pile is a forced lead on their first trick.

use crate::cards::{compare, is_trump, point_value, Card, Comparison, Rank};
use crate::errors::DomainError;
use crate::event::{Event, EventKind};
use crate::state::{GameState, Phase, Position, Trick};

fn non_trump_suit_cards(hand: &[Card], suit: crate::cards::Suit, trump: crate::cards::Suit) -> Vec<Card> {
    hand.iter().cloned().filter(|c| c.suit == suit && !is_trump(*c, trump)).collect()
}

fn legal_for(state: &GameState, position: Position) -> Vec<Card> {
    let trump = match state.trump_suit {
        Some(t) => t,
        None => return Vec::new(),
    };
    let hand = &state.player(position).hand;

    if state.trick_number == 0 {
        if let Some(top) = state.killed_cards[position.index()].first() {
            return vec![*top];
        }
    }

    let trick = match &state.current_trick {
        Some(t) if !t.plays.is_empty() => t,
        _ => return hand.clone(),
    };
    let (_, lead) = trick.plays[0];
    if is_trump(lead, trump) {
        let trumps: Vec<Card> = hand.iter().cloned().filter(|c| is_trump(*c, trump)).collect();
        if !trumps.is_empty() {
            return trumps;
        }
        return hand.clone();
    }
    let following = non_trump_suit_cards(hand, lead.suit, trump);
    if !following.is_empty() {
        return following;
    }
    hand.clone()
}

pub fn play(state: &GameState, position: Position, card: Card) -> Result<GameState, DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::InvalidPhase { expected: "playing", got: state.phase.name() });
    }
    let expected = state.current_turn.ok_or(DomainError::NoDealer)?;
    if position != expected {
        return Err(DomainError::NotYourTurn { expected, got: position });
    }
    if !state.player(position).hand.contains(&card) {
        return Err(DomainError::CardNotInHand(card));
    }

    let trump = state.trump_suit.ok_or(DomainError::NoDealer)?;
    if state.trick_number == 0 {
        if let Some(top) = state.killed_cards[position.index()].first() {
            if *top != card {
                return Err(DomainError::MustPlayTopKilledCardFirst(*top));
            }
        }
    } else {
        let legal = legal_for(state, position);
        if !legal.contains(&card) {
            let trick_has_trump_lead = state
                .current_trick
                .as_ref()
                .and_then(|t| t.plays.first())
                .map(|(_, lead)| is_trump(*lead, trump))
                .unwrap_or(false);
            if trick_has_trump_lead {
                return Err(DomainError::MustPlayTrump);
            }
            return Err(DomainError::CardNotInHand(card));
        }
    }

    let mut next = state.clone();
    next.player_mut(position).hand.retain(|c| *c != card);
    let trick = next.current_trick.get_or_insert_with(|| Trick::new(state.trick_number, position));
    trick.plays.push((position, card));
    let seq = next.next_sequence();
    next.events.push(Event::new(EventKind::CardPlayed { position, card }, next.hand_number, seq));

    let expected_plays = next.active_positions().count();
    if next.current_trick.as_ref().map(|t| t.plays.len()).unwrap_or(0) >= expected_plays {
        next = resolve_trick(next, trump);
    } else {
        next.current_turn = next_player(&next, position);
    }
    Ok(next)
}

pub(crate) fn next_player(state: &GameState, from: Position) -> Option<Position> {
    let mut pos = from.next();
    for _ in 0..4 {
        if !state.player(pos).eliminated {
            return Some(pos);
        }
        pos = pos.next();
    }
    None
}

fn resolve_trick(mut state: GameState, trump: crate::cards::Suit) -> GameState {
    let trick = match state.current_trick.take() {
        Some(t) => t,
        None => return state,
    };
    let trumps: Vec<(Position, Card)> = trick.plays.iter().cloned().filter(|(_, c)| is_trump(*c, trump)).collect();
    let winner = if !trumps.is_empty() {
        let mut best = trumps[0];
        for &(pos, card) in &trumps[1..] {
            if compare(card, best.1, trump) == Comparison::Gt {
                best = (pos, card);
            }
        }
        best.0
    } else {
        let lead_suit = trick.plays[0].1.suit;
        let mut best = trick.plays[0];
        for &(pos, card) in &trick.plays[1..] {
            if card.suit == lead_suit && card.rank.value() > best.1.rank.value() {
                best = (pos, card);
            }
        }
        best.0
    };

    let points: i32 = trick.plays.iter().map(|(_, c)| point_value(*c, trump)).sum();
    // The 2 of trump always banks 1 point for whoever played it, regardless
    // of who wins the trick; the winner's team takes the rest.
    let two_of_trump = trick.plays.iter().cloned().find(|(_, c)| c.rank == Rank::Two && c.suit == trump);
    match two_of_trump {
        Some((pos, _)) => {
            state.hand_points[pos.team().index()] += 1;
            state.hand_points[winner.team().index()] += points - 1;
        }
        None => state.hand_points[winner.team().index()] += points,
    }
    let mut finished = trick;
    finished.winner = Some(winner);
    state.tricks.push(finished);

    let seq = state.next_sequence();
    state.events.push(Event::new(EventKind::TrickWon { position: winner, points }, state.hand_number, seq));

    for pos in state.active_positions().collect::<Vec<_>>() {
        if state.player(pos).hand.is_empty() {
            state.player_mut(pos).eliminated = true;
            let seq = state.next_sequence();
            state.events.push(Event::new(EventKind::PlayerWentCold { position: pos }, state.hand_number, seq));
        }
    }

    let hand_done = state.active_positions().count() == 0;
    if hand_done {
        state.phase = Phase::Scoring;
        state.current_turn = None;
        state.current_trick = None;
    } else {
        let leader = if !state.player(winner).eliminated { Some(winner) } else { next_player(&state, winner) };
        state.trick_number += 1;
        state.current_turn = leader;
        state.current_trick = leader.map(|p| Trick::new(state.trick_number, p));
    }
    state
}

pub fn legal_actions(state: &GameState, position: Position) -> Vec<Card> {
    if state.phase != Phase::Playing || state.current_turn != Some(position) {
        return Vec::new();
    }
    legal_for(state, position)
}
