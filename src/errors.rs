//! Core error taxonomy. Errors are values: `apply_action` never panics on a
//! malformed-but-well-typed request, and never mutates state before
//! returning one of these.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::cards::Card;
use crate::state::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    // Turn errors
    NotYourTurn { expected: Position, got: Position },
    NotDealerTurn { expected: Position, got: Position },

    // Validation errors
    BidTooLow { current: u8 },
    BidOutOfRange { min: u8, max: u8, got: u8 },
    DealerMustBid,
    AlreadyActed(Position),
    CardNotInHand(Card),
    InvalidCardCount { expected: u8, got: u8 },
    MustPlayTrump,
    MustPlayTopKilledCardFirst(Card),
    CannotKillPointCards,

    // Phase errors
    InvalidPhase { expected: &'static str, got: &'static str },
    WrongActionForPhase,

    // Structural errors
    NoDealer,
    NoHistory,

    // Notation errors
    Notation(String),

    // Card parsing
    ParseCard(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotYourTurn { expected, got } => {
                write!(f, "not your turn: expected {expected:?}, got {got:?}")
            }
            DomainError::NotDealerTurn { expected, got } => {
                write!(f, "not dealer's turn: expected {expected:?}, got {got:?}")
            }
            DomainError::BidTooLow { current } => write!(f, "bid too low: current high bid is {current}"),
            DomainError::BidOutOfRange { min, max, got } => {
                write!(f, "bid {got} out of range [{min}, {max}]")
            }
            DomainError::DealerMustBid => write!(f, "dealer must bid, cannot pass"),
            DomainError::AlreadyActed(pos) => write!(f, "{pos:?} has already acted this hand"),
            DomainError::CardNotInHand(card) => write!(f, "card not in hand: {card}"),
            DomainError::InvalidCardCount { expected, got } => {
                write!(f, "invalid card count: expected {expected}, got {got}")
            }
            DomainError::MustPlayTrump => write!(f, "must play a trump card"),
            DomainError::MustPlayTopKilledCardFirst(card) => {
                write!(f, "must play top killed card first: {card}")
            }
            DomainError::CannotKillPointCards => write!(f, "cannot kill point cards"),
            DomainError::InvalidPhase { expected, got } => {
                write!(f, "invalid phase: expected {expected}, got {got}")
            }
            DomainError::WrongActionForPhase => write!(f, "wrong action for current phase"),
            DomainError::NoDealer => write!(f, "no dealer set"),
            DomainError::NoHistory => write!(f, "no history to undo"),
            DomainError::Notation(s) => write!(f, "notation error: {s}"),
            DomainError::ParseCard(s) => write!(f, "parse card: {s}"),
        }
    }
}

impl Error for DomainError {}
