//! The engine facade: the only place external callers need to know about.
//! `apply_action` and `legal_actions` always go through the same phase
//! predicates, so neither can drift out of sync with the other.

use crate::action::Action;
use crate::cards::{Card, Suit};
use crate::errors::DomainError;
use crate::event::{Event, EventKind};
use crate::machine;
use crate::notation;
use crate::phase::{bidding, dealer_rob, play, second_deal, trump};
use crate::state::{GameConfig, GameState, Phase, Position, Team};

pub fn new_game(seed: u64, config: GameConfig) -> GameState {
    machine::advance(&GameState::new(seed, config))
}

pub fn apply_action(state: &GameState, position: Position, action: Action) -> Result<GameState, DomainError> {
    let result = match (state.phase, &action) {
        (Phase::Bidding, Action::Bid(amount)) => bidding::bid(state, position, *amount),
        (Phase::Bidding, Action::Pass) => bidding::pass(state, position),
        (Phase::Declaring, Action::DeclareTrump(suit)) => trump::declare(state, position, *suit),
        (Phase::SecondDeal, Action::SelectCards(cards)) => apply_manual_rob(state, position, cards),
        (Phase::Playing, Action::PlayCard(card)) => play::play(state, position, *card),
        (Phase::Playing, Action::Resign) => resign(state, position),
        (_, Action::SelectDealer) => Ok(state.clone()),
        _ => Err(DomainError::WrongActionForPhase),
    }?;
    Ok(machine::advance(&result))
}

pub fn legal_actions(state: &GameState, position: Position) -> Vec<Action> {
    if state.current_turn != Some(position) {
        return Vec::new();
    }
    match state.phase {
        Phase::Bidding => {
            let must_bid = state.current_dealer == Some(position) && state.highest_bid.is_none();
            let max_bid = state.config.max_bid;
            let mut actions: Vec<Action> = (state.config.min_bid..=max_bid)
                .filter(|amount| match state.highest_bid {
                    None => true,
                    Some((incumbent, high)) => {
                        *amount > high || (*amount == high && *amount == max_bid && position != incumbent)
                    }
                })
                .map(Action::Bid)
                .collect();
            if !must_bid {
                actions.push(Action::Pass);
            }
            actions
        }
        Phase::Declaring => Suit::ALL.iter().copied().map(Action::DeclareTrump).collect(),
        Phase::Playing => play::legal_actions(state, position).into_iter().map(Action::PlayCard).collect(),
        _ => Vec::new(),
    }
}

pub fn game_over(state: &GameState) -> bool {
    state.phase == Phase::Complete
}

pub fn winner(state: &GameState) -> Option<Team> {
    if !game_over(state) {
        return None;
    }
    match state.cumulative_scores[0].cmp(&state.cumulative_scores[1]) {
        std::cmp::Ordering::Greater => Some(Team::NorthSouth),
        std::cmp::Ordering::Less => Some(Team::EastWest),
        std::cmp::Ordering::Equal => None,
    }
}

fn apply_manual_rob(state: &GameState, position: Position, cards: &[Card]) -> Result<GameState, DomainError> {
    let dealer = state.current_dealer.ok_or(DomainError::NoDealer)?;
    if position != dealer {
        return Err(DomainError::NotDealerTurn { expected: dealer, got: position });
    }
    if state.config.auto_dealer_rob {
        return Err(DomainError::WrongActionForPhase);
    }
    dealer_rob::validate_selection(state, dealer, cards)?;
    let taken_count = state.deck.len();
    let robbed = dealer_rob::apply(state, dealer, cards.to_vec(), taken_count);
    Ok(second_deal::finish(&robbed))
}

fn resign(state: &GameState, position: Position) -> Result<GameState, DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::InvalidPhase { expected: "playing", got: state.phase.name() });
    }
    let mut next = state.clone();
    next.player_mut(position).eliminated = true;
    let seq = next.next_sequence();
    next.events.push(Event::new(EventKind::PlayerWentCold { position }, next.hand_number, seq));
    if next.current_turn == Some(position) {
        next.current_turn = play::next_player(&next, position);
    }
    if next.active_positions().count() == 0 {
        next.phase = Phase::Scoring;
        next.current_turn = None;
        next.current_trick = None;
    }
    Ok(next)
}

/// Replays `events` from `initial` (normally `new_game`'s raw pre-advance
/// state) by re-submitting the manual actions they imply through the same
/// `apply_action` path used during live play; automatically-generated
/// events are regenerated as a side effect rather than replayed directly.
pub fn replay_events(initial: &GameState, events: &[Event]) -> Result<GameState, DomainError> {
    let mut state = machine::advance(initial);
    for event in events {
        state = match &event.kind {
            EventKind::BidMade { position, amount } => apply_action(&state, *position, Action::Bid(*amount))?,
            EventKind::BidPassed { position } => apply_action(&state, *position, Action::Pass)?,
            EventKind::TrumpDeclared { position, suit } => {
                apply_action(&state, *position, Action::DeclareTrump(*suit))?
            }
            EventKind::DealerRobbedPack { position, kept, .. } if !state.config.auto_dealer_rob => {
                apply_action(&state, *position, Action::SelectCards(kept.clone()))?
            }
            EventKind::CardPlayed { position, card } => apply_action(&state, *position, Action::PlayCard(*card))?,
            _ => state,
        };
    }
    Ok(state)
}

/// Replays everything but the last event, per the external interface's
/// definition of undo.
pub fn undo(state: &GameState) -> Result<GameState, DomainError> {
    if state.events.is_empty() {
        return Err(DomainError::NoHistory);
    }
    let initial = GameState::new(state.rng_seed, state.config);
    replay_events(&initial, &state.events[..state.events.len() - 1])
}

pub fn to_notation(state: &GameState) -> String {
    notation::encode(state)
}

pub fn from_notation(s: &str) -> Result<notation::Snapshot, DomainError> {
    notation::decode(s)
}
