//! The canonical, full-fidelity event log and its public (redacted) view.
//!
//! `GameState::events` is the internal record the engine uses for replay and
//! undo (`replay_events`, `Engine::undo`) and therefore keeps complete card
//! identities even where the external wire format must not: a caller that
//! wants to broadcast a hand's history to players other than its owner
//! should run each entry through [`Event::to_public`] first, which drops
//! private identities down to counts per the information-hiding rule.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::state::{Position, Team};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub hand_number: u32,
    pub sequence: u64,
    /// Logical clock, not wall-clock time: equal to `sequence`. Keeping this
    /// a pure function of state preserves the core's determinism invariant
    /// while still satisfying the data model's "event has a time" shape.
    pub logical_time: u64,
}

impl Event {
    pub fn new(kind: EventKind, hand_number: u32, sequence: u64) -> Self {
        Event { kind, hand_number, sequence, logical_time: sequence }
    }

    /// Redact this event for a viewer who is not necessarily the owner of
    /// any private information it carries. `viewer = None` means "public
    /// broadcast, no privileged owner" (e.g. a spectator or persisted log
    /// meant for nobody in particular).
    pub fn to_public(&self, viewer: Option<Position>) -> PublicEvent {
        PublicEvent {
            kind: self.kind.redact(viewer),
            hand_number: self.hand_number,
            sequence: self.sequence,
            logical_time: self.logical_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    DealerSelected { position: Position, card: Card },
    CardsDealt { deals: Vec<(Position, Vec<Card>)> },
    BidMade { position: Position, amount: u8 },
    BidPassed { position: Position },
    BiddingComplete { position: Position, amount: u8 },
    TrumpDeclared { position: Position, suit: Suit },
    CardsDiscarded { position: Position, cards: Vec<Card> },
    SecondDealComplete { dealt: Vec<(Position, Vec<Card>)> },
    DealerRobbedPack { position: Position, taken_count: usize, kept: Vec<Card>, discarded: Vec<Card> },
    CardsKilled { position: Position, cards: Vec<Card> },
    CardPlayed { position: Position, card: Card },
    TrickWon { position: Position, points: i32 },
    PlayerWentCold { position: Position },
    HandScored { taken: [i32; 2], cumulative: [i32; 2] },
    GameWon { team: Team },
}

impl EventKind {
    fn redact(&self, viewer: Option<Position>) -> PublicEventKind {
        match self {
            EventKind::DealerSelected { position, card } => {
                PublicEventKind::DealerSelected { position: *position, card: *card }
            }
            EventKind::CardsDealt { deals } => PublicEventKind::CardsDealt {
                entries: deals
                    .iter()
                    .map(|(pos, cards)| {
                        let view = if Some(*pos) == viewer {
                            DealtView::Full(cards.clone())
                        } else {
                            DealtView::Count(cards.len() as u8)
                        };
                        (*pos, view)
                    })
                    .collect(),
            },
            EventKind::BidMade { position, amount } => {
                PublicEventKind::BidMade { position: *position, amount: *amount }
            }
            EventKind::BidPassed { position } => PublicEventKind::BidPassed { position: *position },
            EventKind::BiddingComplete { position, amount } => {
                PublicEventKind::BiddingComplete { position: *position, amount: *amount }
            }
            EventKind::TrumpDeclared { position, suit } => {
                PublicEventKind::TrumpDeclared { position: *position, suit: *suit }
            }
            EventKind::CardsDiscarded { position, cards } => {
                PublicEventKind::CardsDiscarded { position: *position, count: cards.len() as u8 }
            }
            EventKind::SecondDealComplete { dealt } => PublicEventKind::SecondDealComplete {
                counts: dealt.iter().map(|(pos, cards)| (*pos, cards.len() as u8)).collect(),
            },
            EventKind::DealerRobbedPack { position, taken_count, kept, .. } => {
                PublicEventKind::DealerRobbedPack {
                    position: *position,
                    taken_count: *taken_count,
                    kept_count: kept.len(),
                }
            }
            EventKind::CardsKilled { position, cards } => {
                PublicEventKind::CardsKilled { position: *position, count: cards.len() as u8 }
            }
            EventKind::CardPlayed { position, card } => {
                PublicEventKind::CardPlayed { position: *position, card: *card }
            }
            EventKind::TrickWon { position, points } => {
                PublicEventKind::TrickWon { position: *position, points: *points }
            }
            EventKind::PlayerWentCold { position } => PublicEventKind::PlayerWentCold { position: *position },
            EventKind::HandScored { taken, cumulative } => {
                PublicEventKind::HandScored { taken: *taken, cumulative: *cumulative }
            }
            EventKind::GameWon { team } => PublicEventKind::GameWon { team: *team },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DealtView {
    Full(Vec<Card>),
    Count(u8),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicEvent {
    pub kind: PublicEventKind,
    pub hand_number: u32,
    pub sequence: u64,
    pub logical_time: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PublicEventKind {
    DealerSelected { position: Position, card: Card },
    CardsDealt { entries: Vec<(Position, DealtView)> },
    BidMade { position: Position, amount: u8 },
    BidPassed { position: Position },
    BiddingComplete { position: Position, amount: u8 },
    TrumpDeclared { position: Position, suit: Suit },
    CardsDiscarded { position: Position, count: u8 },
    SecondDealComplete { counts: Vec<(Position, u8)> },
    DealerRobbedPack { position: Position, taken_count: usize, kept_count: usize },
    CardsKilled { position: Position, count: u8 },
    CardPlayed { position: Position, card: Card },
    TrickWon { position: Position, points: i32 },
    PlayerWentCold { position: Position },
    HandScored { taken: [i32; 2], cumulative: [i32; 2] },
    GameWon { team: Team },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    #[test]
    fn cards_dealt_is_redacted_for_non_owners() {
        let event = Event::new(
            EventKind::CardsDealt {
                deals: vec![
                    (Position::North, vec![card(Rank::Ace, Suit::Hearts)]),
                    (Position::East, vec![card(Rank::Two, Suit::Clubs)]),
                ],
            },
            1,
            0,
        );
        let public = event.to_public(Some(Position::North));
        match public.kind {
            PublicEventKind::CardsDealt { entries } => {
                assert_eq!(entries[0].1, DealtView::Full(vec![card(Rank::Ace, Suit::Hearts)]));
                assert_eq!(entries[1].1, DealtView::Count(1));
            }
            _ => panic!("wrong kind"),
        }
    }

    #[test]
    fn dealer_robbed_pack_is_always_counts_only_in_public_view() {
        let event = Event::new(
            EventKind::DealerRobbedPack {
                position: Position::South,
                taken_count: 11,
                kept: vec![card(Rank::Ace, Suit::Hearts)],
                discarded: vec![card(Rank::Two, Suit::Clubs)],
            },
            1,
            4,
        );
        let public = event.to_public(Some(Position::South));
        match public.kind {
            PublicEventKind::DealerRobbedPack { taken_count, kept_count, .. } => {
                assert_eq!(taken_count, 11);
                assert_eq!(kept_count, 1);
            }
            _ => panic!("wrong kind"),
        }
    }
}
