//! Game configuration.
//!
//! A [`GameConfig`] holds the settings a front-end exposes to the user: who plays
//! against whom and how strong the computer is. The orchestrator reads both fields
//! at the start of every computer turn, so changing them mid-game takes effect from
//! the next computer move.

use std::str::FromStr;

use thiserror::Error;

use crate::agent::ai::Difficulty;
use crate::game_repr::Color;

/// Environment variable selecting the play mode
pub const MODE_VAR: &str = "OTHELLO_MODE";
/// Environment variable selecting the computer difficulty
pub const DIFFICULTY_VAR: &str = "OTHELLO_DIFFICULTY";

/// Who controls the two colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayMode {
    /// Two humans on the same device
    HumanVsHuman,
    /// Human against the computer
    #[default]
    HumanVsComputer,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseConfigError {
    #[error("unknown play mode {0:?} (expected hvh or hvc)")]
    PlayMode(String),
    #[error("unknown difficulty {0:?} (expected basic or advanced)")]
    Difficulty(String),
}

impl FromStr for PlayMode {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hvh" | "pvp" | "human" | "human-vs-human" => Ok(PlayMode::HumanVsHuman),
            "hvc" | "pvai" | "computer" | "human-vs-computer" => Ok(PlayMode::HumanVsComputer),
            _ => Err(ParseConfigError::PlayMode(s.to_string())),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "easy" => Ok(Difficulty::Basic),
            "advanced" | "hard" => Ok(Difficulty::Advanced),
            _ => Err(ParseConfigError::Difficulty(s.to_string())),
        }
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub play_mode: PlayMode,
    pub difficulty: Difficulty,
    /// Color played by the computer in [`PlayMode::HumanVsComputer`]
    pub computer_color: Color,
}

impl Default for GameConfig {
    /// Human (Black) against a Basic computer (White)
    fn default() -> Self {
        Self {
            play_mode: PlayMode::default(),
            difficulty: Difficulty::default(),
            computer_color: Color::White,
        }
    }
}

impl GameConfig {
    /// Create a human-vs-human configuration.
    pub fn human_vs_human() -> Self {
        Self {
            play_mode: PlayMode::HumanVsHuman,
            ..Self::default()
        }
    }

    /// Create a human-vs-computer configuration with the computer on `computer_color`.
    pub fn human_vs_computer(computer_color: Color, difficulty: Difficulty) -> Self {
        Self {
            play_mode: PlayMode::HumanVsComputer,
            difficulty,
            computer_color,
        }
    }

    /// Whether `color` is played by the computer under this configuration
    pub fn is_computer(&self, color: Color) -> bool {
        self.play_mode == PlayMode::HumanVsComputer && color == self.computer_color
    }

    /// Defaults overridden by `OTHELLO_MODE` / `OTHELLO_DIFFICULTY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    /// Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(MODE_VAR) {
            match raw.parse() {
                Ok(mode) => config.play_mode = mode,
                Err(e) => log::warn!("{MODE_VAR}: {e}, using {:?}", config.play_mode),
            }
        }
        if let Some(raw) = lookup(DIFFICULTY_VAR) {
            match raw.parse() {
                Ok(difficulty) => config.difficulty = difficulty,
                Err(e) => log::warn!("{DIFFICULTY_VAR}: {e}, using {:?}", config.difficulty),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.play_mode, PlayMode::HumanVsComputer);
        assert_eq!(config.difficulty, Difficulty::Basic);
        assert!(config.is_computer(Color::White));
        assert!(!config.is_computer(Color::Black));
    }

    #[test]
    fn test_human_vs_human_has_no_computer() {
        let config = GameConfig::human_vs_human();
        assert!(!config.is_computer(Color::White));
        assert!(!config.is_computer(Color::Black));
    }

    #[test]
    fn test_parse_values() {
        assert_eq!("hvh".parse(), Ok(PlayMode::HumanVsHuman));
        assert_eq!(" Human-vs-Computer ".parse(), Ok(PlayMode::HumanVsComputer));
        assert_eq!("ADVANCED".parse(), Ok(Difficulty::Advanced));
        assert_eq!("basic".parse(), Ok(Difficulty::Basic));
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(ParseConfigError::Difficulty("expert".to_string()))
        );
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = GameConfig::from_lookup(|key| match key {
            MODE_VAR => Some("hvh".to_string()),
            DIFFICULTY_VAR => Some("advanced".to_string()),
            _ => None,
        });
        assert_eq!(config.play_mode, PlayMode::HumanVsHuman);
        assert_eq!(config.difficulty, Difficulty::Advanced);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = GameConfig::from_lookup(|key| match key {
            DIFFICULTY_VAR => Some("grandmaster".to_string()),
            _ => None,
        });
        assert_eq!(config, GameConfig::default());
    }
}
