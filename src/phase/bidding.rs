//! Manual: one round of bidding, left of the dealer through the dealer. The
//! dealer cannot pass if nobody has bid yet ("stuck" dealer).

use crate::errors::DomainError;
use crate::event::{Event, EventKind};
use crate::state::{Bid, BidValue, GameState, Phase, Position};

/// Turn order for a single bidding round: dealer's left through the dealer.
pub fn bidding_order(dealer: Position) -> [Position; 4] {
    let mut order = [dealer; 4];
    let mut pos = dealer.next();
    for slot in order.iter_mut() {
        *slot = pos;
        pos = pos.next();
    }
    order
}

fn expected_bidder(state: &GameState, order: [Position; 4]) -> Position {
    order[state.bids.len() % 4]
}

pub fn bid(state: &GameState, position: Position, amount: u8) -> Result<GameState, DomainError> {
    if state.phase != Phase::Bidding {
        return Err(DomainError::InvalidPhase { expected: "bidding", got: state.phase.name() });
    }
    let dealer = state.current_dealer.ok_or(DomainError::NoDealer)?;
    let order = bidding_order(dealer);
    let expected = expected_bidder(state, order);
    if position != expected {
        return Err(DomainError::NotYourTurn { expected, got: position });
    }
    if amount < state.config.min_bid || amount > state.config.max_bid {
        return Err(DomainError::BidOutOfRange { min: state.config.min_bid, max: state.config.max_bid, got: amount });
    }
    if let Some((incumbent, high)) = state.highest_bid {
        // A tying bid is only legal as the max-bid-tops-max-bid carve-out,
        // and only for a different player than the current incumbent.
        let tops_incumbent = amount == high && amount == state.config.max_bid && position != incumbent;
        if amount < high || (amount == high && !tops_incumbent) {
            return Err(DomainError::BidTooLow { current: high });
        }
    }

    let mut next = state.clone();
    let seq = next.next_sequence();
    let sequence_index = next.bids.len();
    next.bids.push(Bid { position, value: BidValue::Amount(amount), sequence_index });
    next.highest_bid = Some((position, amount));
    next.events.push(Event::new(EventKind::BidMade { position, amount }, next.hand_number, seq));
    Ok(finish_if_complete(next, order))
}

pub fn pass(state: &GameState, position: Position) -> Result<GameState, DomainError> {
    if state.phase != Phase::Bidding {
        return Err(DomainError::InvalidPhase { expected: "bidding", got: state.phase.name() });
    }
    let dealer = state.current_dealer.ok_or(DomainError::NoDealer)?;
    let order = bidding_order(dealer);
    let expected = expected_bidder(state, order);
    if position != expected {
        return Err(DomainError::NotYourTurn { expected, got: position });
    }
    if position == dealer && state.highest_bid.is_none() {
        return Err(DomainError::DealerMustBid);
    }

    let mut next = state.clone();
    let seq = next.next_sequence();
    let sequence_index = next.bids.len();
    next.bids.push(Bid { position, value: BidValue::Pass, sequence_index });
    next.events.push(Event::new(EventKind::BidPassed { position }, next.hand_number, seq));
    Ok(finish_if_complete(next, order))
}

fn finish_if_complete(mut state: GameState, order: [Position; 4]) -> GameState {
    if state.bids.len() < 4 {
        state.current_turn = Some(order[state.bids.len() % 4]);
        return state;
    }
    if let Some((winner, amount)) = state.highest_bid {
        state.bidding_team = Some(winner.team());
        let seq = state.next_sequence();
        state.events.push(Event::new(
            EventKind::BiddingComplete { position: winner, amount },
            state.hand_number,
            seq,
        ));
        state.phase = Phase::Declaring;
        state.current_turn = Some(winner);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_starts_left_of_dealer_and_ends_at_dealer() {
        let order = bidding_order(Position::South);
        assert_eq!(order, [Position::West, Position::North, Position::East, Position::South]);
    }
}
