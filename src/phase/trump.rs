//! Manual: the bid winner declares the trump suit.

use crate::cards::Suit;
use crate::errors::DomainError;
use crate::event::{Event, EventKind};
use crate::state::{GameState, Phase, Position};

pub fn declare(state: &GameState, position: Position, suit: Suit) -> Result<GameState, DomainError> {
    if state.phase != Phase::Declaring {
        return Err(DomainError::InvalidPhase { expected: "declaring", got: state.phase.name() });
    }
    let (winner, _) = state.highest_bid.ok_or(DomainError::NoDealer)?;
    if position != winner {
        return Err(DomainError::NotYourTurn { expected: winner, got: position });
    }

    let mut next = state.clone();
    next.trump_suit = Some(suit);
    let seq = next.next_sequence();
    next.events.push(Event::new(EventKind::TrumpDeclared { position, suit }, next.hand_number, seq));
    next.phase = Phase::Discarding;
    next.current_turn = None;
    Ok(next)
}
