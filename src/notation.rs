//! Compact external notation: a single `/`-separated line summarizing the
//! public shape of a `GameState`, for logging or quick diffing. It is
//! intentionally lossy (no hands, no event log) and is not used for replay;
//! `GameState` itself (via serde) is the full-fidelity serialization.

use std::fmt;
use std::str::FromStr;

use crate::cards::Suit;
use crate::errors::DomainError;
use crate::state::{GameState, Phase, Position};

const FIELD_COUNT: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub phase: String,
    pub dealer: Option<Position>,
    pub turn: Option<Position>,
    pub trump: Option<Suit>,
    pub bid: Option<(Position, u8)>,
    pub scores: [i32; 2],
    pub hand_number: u32,
    pub trick_number: u8,
    pub awaiting_manual_rob: bool,
}

fn position_code(p: Position) -> char {
    match p {
        Position::North => 'N',
        Position::East => 'E',
        Position::South => 'S',
        Position::West => 'W',
    }
}

fn position_from_code(c: char) -> Result<Position, DomainError> {
    match c {
        'N' => Ok(Position::North),
        'E' => Ok(Position::East),
        'S' => Ok(Position::South),
        'W' => Ok(Position::West),
        _ => Err(DomainError::Notation(format!("bad position code: {c}"))),
    }
}

fn phase_from_name(s: &str) -> Result<Phase, DomainError> {
    Ok(match s {
        "dealer_selection" => Phase::DealerSelection,
        "dealing" => Phase::Dealing,
        "bidding" => Phase::Bidding,
        "declaring" => Phase::Declaring,
        "discarding" => Phase::Discarding,
        "second_deal" => Phase::SecondDeal,
        "playing" => Phase::Playing,
        "scoring" => Phase::Scoring,
        "hand_complete" => Phase::HandComplete,
        "complete" => Phase::Complete,
        other => return Err(DomainError::Notation(format!("unknown phase: {other}"))),
    })
}

pub fn encode(state: &GameState) -> String {
    Snapshot::from(state).to_string()
}

pub fn decode(s: &str) -> Result<Snapshot, DomainError> {
    s.parse()
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Snapshot {
            phase: state.phase.name().to_string(),
            dealer: state.current_dealer,
            turn: state.current_turn,
            trump: state.trump_suit,
            bid: state.highest_bid,
            scores: state.cumulative_scores,
            hand_number: state.hand_number,
            trick_number: state.trick_number,
            awaiting_manual_rob: state.phase == Phase::SecondDeal && !state.config.auto_dealer_rob,
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dealer = self.dealer.map(position_code).map(String::from).unwrap_or_else(|| "-".into());
        let turn = self.turn.map(position_code).map(String::from).unwrap_or_else(|| "-".into());
        let trump = self.trump.map(|s| s.to_string()).unwrap_or_else(|| "-".into());
        let bid = self.bid.map(|(p, a)| format!("{}:{a}", position_code(p))).unwrap_or_else(|| "-".into());
        write!(
            f,
            "{}/{}/{}/{}/{}/{}-{}/{}/{}/{}",
            self.phase,
            dealer,
            turn,
            trump,
            bid,
            self.scores[0],
            self.scores[1],
            self.hand_number,
            self.trick_number,
            if self.awaiting_manual_rob { 1 } else { 0 },
        )
    }
}

impl FromStr for Snapshot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != FIELD_COUNT {
            return Err(DomainError::Notation(format!("expected {FIELD_COUNT} fields, got {}", parts.len())));
        }
        let phase = phase_from_name(parts[0])?;
        let dealer = match parts[1] {
            "-" => None,
            c if c.len() == 1 => Some(position_from_code(c.chars().next().unwrap_or('?'))?),
            other => return Err(DomainError::Notation(format!("bad dealer field: {other}"))),
        };
        let turn = match parts[2] {
            "-" => None,
            c if c.len() == 1 => Some(position_from_code(c.chars().next().unwrap_or('?'))?),
            other => return Err(DomainError::Notation(format!("bad turn field: {other}"))),
        };
        let trump = match parts[3] {
            "-" => None,
            "h" => Some(Suit::Hearts),
            "d" => Some(Suit::Diamonds),
            "c" => Some(Suit::Clubs),
            "s" => Some(Suit::Spades),
            other => return Err(DomainError::Notation(format!("bad trump field: {other}"))),
        };
        let bid = match parts[4] {
            "-" => None,
            field => {
                let (pos_s, amount_s) =
                    field.split_once(':').ok_or_else(|| DomainError::Notation(format!("bad bid field: {field}")))?;
                let pos_c = pos_s.chars().next().ok_or_else(|| DomainError::Notation("empty bid position".into()))?;
                let pos = position_from_code(pos_c)?;
                let amount: u8 =
                    amount_s.parse().map_err(|_| DomainError::Notation(format!("bad bid amount: {amount_s}")))?;
                Some((pos, amount))
            }
        };
        let (s0, s1) = parts[5]
            .split_once('-')
            .ok_or_else(|| DomainError::Notation(format!("bad scores field: {}", parts[5])))?;
        let scores = [
            s0.parse().map_err(|_| DomainError::Notation(format!("bad score: {s0}")))?,
            s1.parse().map_err(|_| DomainError::Notation(format!("bad score: {s1}")))?,
        ];
        let hand_number: u32 =
            parts[6].parse().map_err(|_| DomainError::Notation(format!("bad hand_number: {}", parts[6])))?;
        let trick_number: u8 =
            parts[7].parse().map_err(|_| DomainError::Notation(format!("bad trick_number: {}", parts[7])))?;
        let awaiting_manual_rob = match parts[8] {
            "0" => false,
            "1" => true,
            other => return Err(DomainError::Notation(format!("bad redeal flag: {other}"))),
        };

        Ok(Snapshot {
            phase: phase.name().to_string(),
            dealer,
            turn,
            trump,
            bid,
            scores,
            hand_number,
            trick_number,
            awaiting_manual_rob,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameConfig;

    #[test]
    fn round_trips_through_a_fresh_game() {
        let state = GameState::new(7, GameConfig::default());
        let advanced = crate::machine::advance(&state);
        let encoded = encode(&advanced);
        let decoded: Snapshot = encoded.parse().unwrap();
        assert_eq!(decoded, Snapshot::from(&advanced));
    }

    #[test]
    fn encoding_is_deterministic() {
        let state = crate::machine::advance(&GameState::new(99, GameConfig::default()));
        assert_eq!(encode(&state), encode(&state));
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!("a/b/c".parse::<Snapshot>().is_err());
    }
}
