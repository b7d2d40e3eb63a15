//! Game configuration with environment overrides.

use std::env;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{FRAME_DELAY_MS, GRAVITY_INTERVAL_MS, LINE_CLEAR_SCORE};

/// Runtime-tunable game parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Time between gravity steps
    pub gravity_interval: Duration,
    /// Sleep between frames of the polling loop
    pub frame_delay: Duration,
    /// Points per cleared row
    pub line_clear_score: u32,
    /// Piece sequence seed; `None` seeds from the wall clock
    pub seed: Option<u32>,
    /// File receiving tracing output; `None` disables logging
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity_interval: Duration::from_millis(GRAVITY_INTERVAL_MS as u64),
            frame_delay: Duration::from_millis(FRAME_DELAY_MS as u64),
            line_clear_score: LINE_CLEAR_SCORE,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// - `TETRIS_GRAVITY_MS`: gravity interval in ms (must be > 0)
    /// - `TETRIS_FRAME_MS`: frame delay in ms
    /// - `TETRIS_LINE_SCORE`: points per cleared row
    /// - `TETRIS_SEED`: fixed piece seed
    /// - `TETRIS_LOG_PATH`: log file path
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse_u64 = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let gravity_interval = parse_u64("TETRIS_GRAVITY_MS")
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.gravity_interval);

        let frame_delay = parse_u64("TETRIS_FRAME_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.frame_delay);

        let line_clear_score = lookup("TETRIS_LINE_SCORE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.line_clear_score);

        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            gravity_interval,
            frame_delay,
            line_clear_score,
            seed,
            log_path,
        }
    }

    /// The configured seed, or one derived from the current time
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }
}
