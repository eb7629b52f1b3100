//! A deterministic, purely-functional Finnish Pidro engine: every operation
//! takes a `&GameState` plus an action and returns a new `GameState` or a
//! `DomainError`, never mutating in place and never touching the outside
//! world (no I/O, no logging, no randomness beyond the seed it was given).

#![cfg_attr(
    not(test),
    deny(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::todo, clippy::unimplemented)
)]

pub mod action;
pub mod cards;
pub mod engine;
pub mod errors;
pub mod event;
pub mod machine;
pub mod notation;
pub mod phase;
pub mod seed;
pub mod state;

pub use action::Action;
pub use cards::{Card, Rank, Suit};
pub use errors::DomainError;
pub use event::{Event, EventKind, PublicEvent, PublicEventKind};
pub use state::{GameConfig, GameState, Phase, Position, Team};
