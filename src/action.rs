//! The action taxonomy a caller may submit to `apply_action`.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Bid(u8),
    Pass,
    DeclareTrump(Suit),
    /// Manual-mode dealer robbing: the dealer's chosen final 6 cards.
    SelectCards(Vec<Card>),
    PlayCard(Card),
    /// Meta: force the engine through any pending automatic phases without
    /// otherwise acting. Idempotent.
    SelectDealer,
    /// Meta: the acting player resigns from the hand (optional per the
    /// external interface; only legal during `playing`).
    Resign,
}
