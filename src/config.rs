//! Game configuration.

use crate::board::NODE_COUNT;
use crate::error::{ConfigError, Result};

pub const DEFAULT_CLOCK_SECONDS: u32 = 300;
pub const DEFAULT_TITANS_PER_PLAYER: u8 = 4;
pub const DEFAULT_BOARD_SIZE: f32 = 600.0;
pub const DEFAULT_NODE_RADIUS: f32 = 10.0;

/// Both players' titans must fit on the board
pub const MAX_TITANS_PER_PLAYER: u8 = (NODE_COUNT / 2) as u8;

pub const ENV_CLOCK_SECONDS: &str = "TITAN_CRASH_CLOCK_SECONDS";
pub const ENV_TITANS: &str = "TITAN_CRASH_TITANS";
pub const ENV_BOARD_SIZE: &str = "TITAN_CRASH_BOARD_SIZE";
pub const ENV_NODE_RADIUS: &str = "TITAN_CRASH_NODE_RADIUS";

/// Configuration for a game.
///
/// # Examples
///
/// ```
/// use titan_crash::GameConfig;
///
/// let config = GameConfig::default()
///     .with_clock_seconds(60)
///     .with_board_size(480.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Countdown per player, in seconds
    pub clock_seconds: u32,
    /// Titans each player places before movement begins
    pub titans_per_player: u8,
    /// Side of the square drawing area, in logical pixels
    pub board_size: f32,
    /// Click tolerance and drawn node radius
    pub node_radius: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            clock_seconds: DEFAULT_CLOCK_SECONDS,
            titans_per_player: DEFAULT_TITANS_PER_PLAYER,
            board_size: DEFAULT_BOARD_SIZE,
            node_radius: DEFAULT_NODE_RADIUS,
        }
    }
}

impl GameConfig {
    pub fn with_clock_seconds(mut self, seconds: u32) -> Self {
        self.clock_seconds = seconds;
        self
    }

    pub fn with_titans_per_player(mut self, titans: u8) -> Self {
        self.titans_per_player = titans;
        self
    }

    pub fn with_board_size(mut self, size: f32) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_node_radius(mut self, radius: f32) -> Self {
        self.node_radius = radius;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.clock_seconds == 0 {
            return Err(ConfigError::ZeroClock);
        }
        if self.titans_per_player == 0 || self.titans_per_player > MAX_TITANS_PER_PLAYER {
            return Err(ConfigError::TitanCapOutOfRange {
                got: self.titans_per_player,
                max: MAX_TITANS_PER_PLAYER,
            });
        }
        check_geometry("board_size", self.board_size)?;
        check_geometry("node_radius", self.node_radius)?;
        Ok(())
    }

    /// Defaults overridden by `TITAN_CRASH_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env) but reading from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup(ENV_CLOCK_SECONDS) {
            config.clock_seconds = parse_var(ENV_CLOCK_SECONDS, &v, "a whole number of seconds")?;
        }
        if let Some(v) = lookup(ENV_TITANS) {
            config.titans_per_player = parse_var(ENV_TITANS, &v, "a small whole number")?;
        }
        if let Some(v) = lookup(ENV_BOARD_SIZE) {
            config.board_size = parse_var(ENV_BOARD_SIZE, &v, "a number of pixels")?;
        }
        if let Some(v) = lookup(ENV_NODE_RADIUS) {
            config.node_radius = parse_var(ENV_NODE_RADIUS, &v, "a number of pixels")?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str, expected: &'static str) -> Result<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var,
        value: value.to_string(),
        expected,
    })
}

fn check_geometry(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidGeometry { field, value })
    }
}
