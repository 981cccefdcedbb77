//! Game configuration types.
//!
//! A new game is described by:
//! - `SizeClass`: which board to play on
//! - `GameConfig`: the size class plus the number of seated players
//!
//! Validation happens once, when a session is (re)started. A config that
//! passed `validate()` can be turned into a board and a turn manager
//! without further checks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can seat.
pub const MAX_PLAYERS: usize = 8;

/// Smallest allowed board side for custom sizes.
pub const MIN_DIMENSION: usize = 3;

/// Largest allowed board side for custom sizes.
pub const MAX_DIMENSION: usize = 64;

/// Supported board sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    /// 6 columns by 11 rows.
    #[default]
    Compact,
    /// 10 columns by 18 rows.
    Extended,
    /// Arbitrary rectangle, mostly for tests and small variants.
    Custom { width: usize, height: usize },
}

impl SizeClass {
    /// Board width (number of columns).
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            SizeClass::Compact => 6,
            SizeClass::Extended => 10,
            SizeClass::Custom { width, .. } => width,
        }
    }

    /// Board height (number of rows).
    #[must_use]
    pub const fn height(self) -> usize {
        match self {
            SizeClass::Compact => 11,
            SizeClass::Extended => 18,
            SizeClass::Custom { height, .. } => height,
        }
    }

    /// Check that the dimensions are playable.
    pub fn validate(self) -> Result<(), ConfigError> {
        let (width, height) = (self.width(), self.height());
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if range.contains(&width) && range.contains(&height) {
            Ok(())
        } else {
            Err(ConfigError::Dimensions { width, height })
        }
    }
}

impl FromStr for SizeClass {
    type Err = ConfigError;

    /// Parse `compact`/`small` or `extended`/`large`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" | "small" => Ok(SizeClass::Compact),
            "extended" | "large" => Ok(SizeClass::Extended),
            _ => Err(ConfigError::UnknownSizeClass(s.to_string())),
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeClass::Compact => write!(f, "compact"),
            SizeClass::Extended => write!(f, "extended"),
            SizeClass::Custom { width, height } => write!(f, "{width}x{height}"),
        }
    }
}

/// Parameters for starting a new game.
///
/// ## Example
///
/// ```
/// use chain_reaction::core::{GameConfig, SizeClass};
///
/// let config = GameConfig::new(SizeClass::Extended).with_players(4);
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::new(SizeClass::Compact).with_players(9).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board size.
    pub size: SizeClass,

    /// Number of seated players, in turn order.
    pub player_count: usize,
}

impl GameConfig {
    /// Create a two-player config on the given board.
    #[must_use]
    pub fn new(size: SizeClass) -> Self {
        Self {
            size,
            player_count: MIN_PLAYERS,
        }
    }

    /// Config for a custom `width` x `height` board.
    #[must_use]
    pub fn custom(width: usize, height: usize) -> Self {
        Self::new(SizeClass::Custom { width, height })
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: SizeClass) -> Self {
        self.size = size;
        self
    }

    /// Parse a size class name and pair it with a player count.
    pub fn parse(size: &str, player_count: usize) -> Result<Self, ConfigError> {
        let config = Self::new(size.parse()?).with_players(player_count);
        config.validate()?;
        Ok(config)
    }

    /// Check player count and board dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        self.size.validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(SizeClass::default())
    }
}
