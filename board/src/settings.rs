use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Player;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown algorithm {0:?} (expected mcts or ab)")]
    UnknownAlgorithm(String),
    #[error("difficulty {0} is out of range ({min}-{max})", min = Difficulty::MIN, max = Difficulty::MAX)]
    DifficultyOutOfRange(i64),
    #[error("unknown player {0:?} (expected one, two or none)")]
    UnknownPlayer(String),
}

/// Search the remote engine should run.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "mcts")]
    Mcts,
    #[serde(rename = "ab")]
    AlphaBeta,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Mcts => "mcts",
            Algorithm::AlphaBeta => "ab",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Mcts => "Monte Carlo Tree Search",
            Algorithm::AlphaBeta => "Minimax with alpha-beta pruning",
        }
    }

    pub fn toggled(self) -> Algorithm {
        match self {
            Algorithm::Mcts => Algorithm::AlphaBeta,
            Algorithm::AlphaBeta => Algorithm::Mcts,
        }
    }
}

impl FromStr for Algorithm {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mcts" => Ok(Algorithm::Mcts),
            "ab" => Ok(Algorithm::AlphaBeta),
            other => Err(SettingsError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine strength, 1 (weakest) to 5.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: i64) -> Result<Self, SettingsError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(SettingsError::DifficultyOutOfRange(level))
        }
    }

    /// Slider semantics: out-of-range input sticks to the nearest end.
    pub fn clamped(level: i64) -> Self {
        Self(level.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn raised(self) -> Self {
        Self::clamped(i64::from(self.0) + 1)
    }

    pub fn lowered(self) -> Self {
        Self::clamped(i64::from(self.0) - 1)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = SettingsError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.0
    }
}

/// Choices exposed by the control panel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub algorithm: Algorithm,
    pub difficulty: Difficulty,
    /// Side played by the remote engine; `None` means two humans share the board.
    #[serde(with = "engine_side")]
    pub ai_player: Option<Player>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Mcts,
            difficulty: Difficulty::default(),
            ai_player: Some(Player::Two),
        }
    }
}

impl MatchSettings {
    /// Player 2 -> Player 1 -> nobody -> Player 2.
    pub fn cycle_ai_player(&mut self) {
        self.ai_player = match self.ai_player {
            Some(Player::Two) => Some(Player::One),
            Some(Player::One) => None,
            None => Some(Player::Two),
        };
    }

    pub fn is_engine(&self, player: Player) -> bool {
        self.ai_player == Some(player)
    }
}

pub fn parse_side(s: &str) -> Result<Option<Player>, SettingsError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "one" | "1" => Ok(Some(Player::One)),
        "two" | "2" | "-1" => Ok(Some(Player::Two)),
        "none" => Ok(None),
        other => Err(SettingsError::UnknownPlayer(other.to_string())),
    }
}

pub fn side_name(side: Option<Player>) -> &'static str {
    match side {
        Some(Player::One) => "one",
        Some(Player::Two) => "two",
        None => "none",
    }
}

mod engine_side {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::Player;

    pub fn serialize<S: Serializer>(side: &Option<Player>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(super::side_name(*side))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Player>, D::Error> {
        let raw = String::deserialize(de)?;
        super::parse_side(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_is_clamped_like_a_slider() {
        assert_eq!(Difficulty::clamped(0).level(), 1);
        assert_eq!(Difficulty::clamped(9).level(), 5);
        assert_eq!(Difficulty::clamped(5).raised().level(), 5);
        assert_eq!(Difficulty::default().lowered().level(), 1);
        assert_eq!(Difficulty::clamped(2).raised().level(), 3);
    }

    #[test]
    fn strict_difficulty_rejects_out_of_range() {
        assert_eq!(Difficulty::new(6), Err(SettingsError::DifficultyOutOfRange(6)));
        assert_eq!(Difficulty::new(3).map(Difficulty::level), Ok(3));
    }

    #[test]
    fn algorithm_parses_wire_names() {
        assert_eq!("mcts".parse::<Algorithm>(), Ok(Algorithm::Mcts));
        assert_eq!("AB".parse::<Algorithm>(), Ok(Algorithm::AlphaBeta));
        assert!("minimax".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::Mcts.toggled(), Algorithm::AlphaBeta);
    }

    #[test]
    fn engine_side_cycles_through_nobody() {
        let mut settings = MatchSettings::default();
        assert_eq!(settings.ai_player, Some(Player::Two));
        settings.cycle_ai_player();
        assert_eq!(settings.ai_player, Some(Player::One));
        settings.cycle_ai_player();
        assert_eq!(settings.ai_player, None);
        settings.cycle_ai_player();
        assert!(settings.is_engine(Player::Two));
    }

    #[test]
    fn settings_serialize_side_as_name() {
        let settings = MatchSettings {
            ai_player: None,
            ..MatchSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"algorithm":"mcts","difficulty":1,"ai_player":"none"}"#);
        let back: MatchSettings =
            serde_json::from_str(r#"{"algorithm":"ab","difficulty":3,"ai_player":"one"}"#).unwrap();
        assert_eq!(back.algorithm, Algorithm::AlphaBeta);
        assert_eq!(back.difficulty.level(), 3);
        assert_eq!(back.ai_player, Some(Player::One));
    }

    #[test]
    fn settings_reject_bad_difficulty() {
        let res = serde_json::from_str::<MatchSettings>(r#"{"difficulty":7}"#);
        assert!(res.is_err());
    }
}
