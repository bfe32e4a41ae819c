//! Startup configuration from environment variables.
//!
//! | variable                 | default |
//! |--------------------------|---------|
//! | `TETRIS_SEED`            | derived from the system clock |
//! | `TETRIS_HIGH_SCORE_PATH` | `$HOME/.classic-tetris/high_score.json` |
//! | `TETRIS_LOG_PATH`        | unset (logging disabled) |
//! | `TETRIS_FRAME_MS`        | `16` |
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

pub const SEED_VAR: &str = "TETRIS_SEED";
pub const HIGH_SCORE_PATH_VAR: &str = "TETRIS_HIGH_SCORE_PATH";
pub const LOG_PATH_VAR: &str = "TETRIS_LOG_PATH";
pub const FRAME_MS_VAR: &str = "TETRIS_FRAME_MS";

/// High score file used when `HOME` is not set
pub const FALLBACK_HIGH_SCORE_FILE: &str = "classic-tetris-high-score.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub high_score_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub frame_ms: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var(SEED_VAR)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let high_score_path = var(HIGH_SCORE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_high_score_path(var("HOME")));

        let log_path = var(LOG_PATH_VAR).map(PathBuf::from);

        let frame_ms = var(FRAME_MS_VAR)
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(TICK_MS);

        Self {
            seed,
            high_score_path,
            log_path,
            frame_ms,
        }
    }
}

fn default_high_score_path(home: Option<String>) -> PathBuf {
    match home {
        Some(home) => PathBuf::from(home)
            .join(".classic-tetris")
            .join("high_score.json"),
        None => PathBuf::from(FALLBACK_HIGH_SCORE_FILE),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn explicit_values() {
        let cfg = AppConfig::from_lookup(lookup(&[
            (SEED_VAR, "42"),
            (HIGH_SCORE_PATH_VAR, "/tmp/hs.json"),
            (LOG_PATH_VAR, " /tmp/tetris.log "),
            (FRAME_MS_VAR, "33"),
        ]));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.high_score_path, PathBuf::from("/tmp/hs.json"));
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/tetris.log")));
        assert_eq!(cfg.frame_ms, 33);
    }

    #[test]
    fn defaults_with_home() {
        let cfg = AppConfig::from_lookup(lookup(&[("HOME", "/home/player")]));
        assert_eq!(
            cfg.high_score_path,
            PathBuf::from("/home/player/.classic-tetris/high_score.json")
        );
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.frame_ms, 16);
    }

    #[test]
    fn defaults_without_home() {
        let cfg = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.high_score_path, PathBuf::from(FALLBACK_HIGH_SCORE_FILE));
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = AppConfig::from_lookup(lookup(&[
            (SEED_VAR, "not-a-number"),
            (FRAME_MS_VAR, "0"),
            (LOG_PATH_VAR, "   "),
        ]));
        assert_eq!(cfg.frame_ms, 16);
        assert_eq!(cfg.log_path, None);
    }
}
