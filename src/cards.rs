//! Card, suit, rank, and trump semantics.
//!
//! Trump ranking and point values follow the Finnish Pidro "wrong-5" rule:
//! the 5 of the suit that shares the trump suit's color is itself a trump,
//! ranked just below the 5 of the trump suit proper.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// The suit that shares this suit's color (hearts<->diamonds, clubs<->spades).
    pub fn same_color(self) -> Suit {
        match self {
            Suit::Hearts => Suit::Diamonds,
            Suit::Diamonds => Suit::Hearts,
            Suit::Clubs => Suit::Spades,
            Suit::Spades => Suit::Clubs,
        }
    }

    fn code(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    fn from_code(c: char) -> Option<Suit> {
        match c {
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Card rank, 2..=14 (11=J, 12=Q, 13=K, 14=A).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }

    fn code(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    fn from_code(c: char) -> Option<Rank> {
        Some(match c {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

// Note: Ord on Card is for stable sorting only (rank then suit). It must
// never be used for trick resolution or bidding/trump comparisons — those
// go through `is_trump`/`point_value`/`compare`, which apply the wrong-5
// exception that a plain field-order derive cannot express.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.rank.cmp(&other.rank) {
            std::cmp::Ordering::Equal => self.suit.cmp(&other.suit),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.code(), self.suit.code())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (rank_ch, suit_ch, rest) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => (r, su, ()),
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        let _ = rest;
        let rank = Rank::from_code(rank_ch).ok_or_else(|| DomainError::ParseCard(s.to_string()))?;
        let suit = Suit::from_code(suit_ch).ok_or_else(|| DomainError::ParseCard(s.to_string()))?;
        Ok(Card { rank, suit })
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|e: DomainError| serde::de::Error::custom(e.to_string()))
    }
}

/// True iff `card` is a trump given `trump_suit`: either it matches the
/// trump suit, or it is the "wrong-5" (5 of the same-color non-trump suit).
pub fn is_trump(card: Card, trump_suit: Suit) -> bool {
    card.suit == trump_suit || (card.rank == Rank::Five && card.suit == trump_suit.same_color())
}

/// True iff `card` is the wrong-5 for `trump_suit`.
pub fn is_wrong_five(card: Card, trump_suit: Suit) -> bool {
    card.rank == Rank::Five && card.suit == trump_suit.same_color()
}

/// True iff `card` is the right-5 (5 of the trump suit itself).
pub fn is_right_five(card: Card, trump_suit: Suit) -> bool {
    card.rank == Rank::Five && card.suit == trump_suit
}

/// Point value of `card` given `trump_suit`. Non-trump cards are worth 0.
/// The 14 trumps sum to exactly 14 points.
pub fn point_value(card: Card, trump_suit: Suit) -> i32 {
    if !is_trump(card, trump_suit) {
        return 0;
    }
    if is_right_five(card, trump_suit) || is_wrong_five(card, trump_suit) {
        return 5;
    }
    match card.rank {
        Rank::Ace | Rank::Jack | Rank::Ten | Rank::Two => 1,
        _ => 0,
    }
}

/// Strength of a trump card within the 14-card trump ranking, highest = 14.
/// Order (high to low): A K Q J 10 9 8 7 6 right-5 wrong-5 4 3 2.
/// Only meaningful when `is_trump(card, trump_suit)` is true.
fn trump_strength(card: Card, trump_suit: Suit) -> u8 {
    if is_right_five(card, trump_suit) {
        return 5;
    }
    if is_wrong_five(card, trump_suit) {
        return 4;
    }
    match card.rank {
        Rank::Ace => 14,
        Rank::King => 13,
        Rank::Queen => 12,
        Rank::Jack => 11,
        Rank::Ten => 10,
        Rank::Nine => 9,
        Rank::Eight => 8,
        Rank::Seven => 7,
        Rank::Six => 6,
        Rank::Four => 3,
        Rank::Three => 2,
        Rank::Two => 1,
        Rank::Five => unreachable!("five is always right-5 or wrong-5 when trump"),
    }
}

/// Public accessor for a trump card's strength (14=highest). Only
/// meaningful when `is_trump(card, trump_suit)` is true.
pub fn trump_rank(card: Card, trump_suit: Suit) -> u8 {
    trump_strength(card, trump_suit)
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Comparison {
    Gt,
    Lt,
    Eq,
}

/// Compare two trump cards under `trump_suit`. Only defined for trump cards;
/// callers must never invoke this for non-trump comparisons during play.
pub fn compare(a: Card, b: Card, trump_suit: Suit) -> Comparison {
    debug_assert!(is_trump(a, trump_suit) && is_trump(b, trump_suit));
    match trump_strength(a, trump_suit).cmp(&trump_strength(b, trump_suit)) {
        std::cmp::Ordering::Greater => Comparison::Gt,
        std::cmp::Ordering::Less => Comparison::Lt,
        std::cmp::Ordering::Equal => Comparison::Eq,
    }
}

/// Deterministic SplitMix64 generator, seeded once, used only for shuffling.
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z ^= z >> 30;
        z = z.wrapping_mul(0xBF58476D1CE4E5B9);
        z ^= z >> 27;
        z = z.wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_below(&mut self, bound: usize) -> usize {
        let m = bound as u64;
        let limit = u64::MAX - (u64::MAX % m);
        loop {
            let x = self.next();
            if x < limit {
                return (x % m) as usize;
            }
        }
    }
}

/// The 52 cards in a fixed canonical order (suit-major, rank-minor).
fn ordered_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { rank, suit });
        }
    }
    deck
}

/// Deterministic Fisher-Yates shuffle of the full 52-card deck, given `seed`.
/// Same seed always yields the same ordering.
pub fn new_deck(seed: u64) -> Vec<Card> {
    let mut deck = ordered_deck();
    let mut rng = SplitMix64::new(seed);
    for i in (1..deck.len()).rev() {
        let j = rng.next_below(i + 1);
        deck.swap(i, j);
    }
    deck
}

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}
