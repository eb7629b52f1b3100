//! Automatic: settles the hand. The bidding team must match or beat their
//! bid or they're set back by the bid amount; the defending team simply
//! banks whatever trump points they took. A team reaching the winning
//! score ends the game outright; if both teams reach it in the same hand
//! the bidding team wins regardless of whose raw total is higher.

use crate::event::{Event, EventKind};
use crate::state::{GameState, Phase, Position, Team};

pub fn run(state: &GameState) -> GameState {
    let mut next = state.clone();
    let (bid_pos, bid_amount) = state.highest_bid.unwrap_or((Position::North, 0));
    let bidding_team = state.bidding_team.unwrap_or(bid_pos.team());
    let bidx = bidding_team.index();

    let mut taken = state.hand_points;
    if taken[bidx] < bid_amount as i32 {
        taken[bidx] = -(bid_amount as i32);
    }

    let mut cumulative = state.cumulative_scores;
    cumulative[0] += taken[0];
    cumulative[1] += taken[1];
    next.cumulative_scores = cumulative;

    let seq = next.next_sequence();
    next.events.push(Event::new(EventKind::HandScored { taken, cumulative }, next.hand_number, seq));

    let target = state.config.winning_score;
    let north_south_reached = cumulative[0] >= target;
    let east_west_reached = cumulative[1] >= target;
    let winner = if north_south_reached && east_west_reached {
        // Both teams crossed the line in the same hand: the bidding team
        // wins outright, even if the defenders' raw total is higher.
        Some(bidding_team)
    } else if north_south_reached {
        Some(Team::NorthSouth)
    } else if east_west_reached {
        Some(Team::EastWest)
    } else {
        None
    };
    if let Some(winner) = winner {
        let seq2 = next.next_sequence();
        next.events.push(Event::new(EventKind::GameWon { team: winner }, next.hand_number, seq2));
        next.phase = Phase::Complete;
        return next;
    }
    next.phase = Phase::HandComplete;
    next
}
