//! The root game-state aggregate and its immediate value types.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::event::Event;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Position {
    North,
    East,
    South,
    West,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::North, Position::East, Position::South, Position::West];

    pub fn index(self) -> usize {
        match self {
            Position::North => 0,
            Position::East => 1,
            Position::South => 2,
            Position::West => 3,
        }
    }

    /// Next position clockwise: north -> east -> south -> west -> north.
    pub fn next(self) -> Position {
        Position::ALL[(self.index() + 1) % 4]
    }

    pub fn team(self) -> Team {
        match self {
            Position::North | Position::South => Team::NorthSouth,
            Position::East | Position::West => Team::EastWest,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    NorthSouth,
    EastWest,
}

impl Team {
    pub fn index(self) -> usize {
        match self {
            Team::NorthSouth => 0,
            Team::EastWest => 1,
        }
    }

    pub fn other(self) -> Team {
        match self {
            Team::NorthSouth => Team::EastWest,
            Team::EastWest => Team::NorthSouth,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub team: Team,
    pub hand: Vec<Card>,
    pub eliminated: bool,
}

impl Player {
    fn new(position: Position) -> Self {
        Player { position, team: position.team(), hand: Vec::new(), eliminated: false }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BidValue {
    Amount(u8),
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub position: Position,
    pub value: BidValue,
    pub sequence_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    pub number: u8,
    pub leader: Position,
    pub plays: Vec<(Position, Card)>,
    pub winner: Option<Position>,
}

impl Trick {
    pub fn new(number: u8, leader: Position) -> Self {
        Trick { number, leader, plays: Vec::new(), winner: None }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    DealerSelection,
    Dealing,
    Bidding,
    Declaring,
    Discarding,
    SecondDeal,
    Playing,
    Scoring,
    HandComplete,
    Complete,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::DealerSelection => "dealer_selection",
            Phase::Dealing => "dealing",
            Phase::Bidding => "bidding",
            Phase::Declaring => "declaring",
            Phase::Discarding => "discarding",
            Phase::SecondDeal => "second_deal",
            Phase::Playing => "playing",
            Phase::Scoring => "scoring",
            Phase::HandComplete => "hand_complete",
            Phase::Complete => "complete",
        }
    }

    /// Automatic phases are advanced by the engine immediately on entry,
    /// without waiting for a player action (`second_deal` is automatic only
    /// when `config.auto_dealer_rob` is set; see `machine::advance`).
    pub fn is_automatic(self) -> bool {
        matches!(
            self,
            Phase::DealerSelection | Phase::Dealing | Phase::Discarding | Phase::Scoring | Phase::HandComplete
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub auto_dealer_rob: bool,
    pub winning_score: i32,
    pub min_bid: u8,
    pub max_bid: u8,
    pub hand_size: u8,
    pub initial_deal: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            auto_dealer_rob: true,
            winning_score: 62,
            min_bid: 6,
            max_bid: 14,
            hand_size: 6,
            initial_deal: 9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    pub hand_number: u32,
    pub trick_number: u8,
    pub players: [Player; 4],
    pub current_dealer: Option<Position>,
    pub current_turn: Option<Position>,
    pub deck: Vec<Card>,
    pub discarded_cards: Vec<Card>,
    pub killed_cards: [Vec<Card>; 4],
    pub cards_requested: [u8; 4],
    pub dealer_pool_size: usize,
    pub bids: Vec<Bid>,
    pub highest_bid: Option<(Position, u8)>,
    pub bidding_team: Option<Team>,
    pub trump_suit: Option<Suit>,
    pub current_trick: Option<Trick>,
    pub tricks: Vec<Trick>,
    pub hand_points: [i32; 2],
    pub cumulative_scores: [i32; 2],
    pub events: Vec<Event>,
    pub config: GameConfig,
    pub rng_seed: u64,
}

impl GameState {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        GameState {
            phase: Phase::DealerSelection,
            hand_number: 1,
            trick_number: 0,
            players: Position::ALL.map(Player::new),
            current_dealer: None,
            current_turn: None,
            deck: crate::cards::new_deck(seed),
            discarded_cards: Vec::new(),
            killed_cards: Default::default(),
            cards_requested: [0; 4],
            dealer_pool_size: 0,
            bids: Vec::new(),
            highest_bid: None,
            bidding_team: None,
            trump_suit: None,
            current_trick: None,
            tricks: Vec::new(),
            hand_points: [0, 0],
            cumulative_scores: [0, 0],
            events: Vec::new(),
            config,
            rng_seed: seed,
        }
    }

    pub fn player(&self, pos: Position) -> &Player {
        &self.players[pos.index()]
    }

    pub fn player_mut(&mut self, pos: Position) -> &mut Player {
        &mut self.players[pos.index()]
    }

    pub fn active_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|p| !self.player(*p).eliminated)
    }

    pub fn active_teams(&self) -> std::collections::HashSet<Team> {
        self.active_positions().map(|p| p.team()).collect()
    }

    /// Next sequence number to assign to an appended event.
    pub fn next_sequence(&self) -> u64 {
        self.events.len() as u64
    }
}
