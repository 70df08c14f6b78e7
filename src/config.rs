//! Runtime configuration read from the environment.
//!
//! | Variable                | Default          |
//! |-------------------------|------------------|
//! | `STACKFALL_SCORE_PATH`  | `highscore.json` |
//! | `STACKFALL_SEED`        | wall clock       |
//! | `STACKFALL_START_LEVEL` | `1`              |
//!
//! Bad values fall back to the default and leave a warning in
//! [`AppConfig::warnings`]. The terminal is in raw mode while the game runs,
//! so the caller prints them once it has been restored.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::scoring::clamp_start_level;
use crate::store::DEFAULT_SCORE_PATH;

pub const ENV_SCORE_PATH: &str = "STACKFALL_SCORE_PATH";
pub const ENV_SEED: &str = "STACKFALL_SEED";
pub const ENV_START_LEVEL: &str = "STACKFALL_START_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub score_path: PathBuf,
    pub seed: u32,
    /// Level preselected on the level-select screen
    pub start_level: u32,
    pub warnings: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();

        let score_path = lookup(ENV_SCORE_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORE_PATH));

        let seed = match lookup(ENV_SEED) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(seed) => seed,
                Err(_) => {
                    warnings.push(format!("[Config] Ignoring {}={:?}: not a u32", ENV_SEED, raw));
                    clock_seed()
                }
            },
            None => clock_seed(),
        };

        let start_level = match lookup(ENV_START_LEVEL) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(level) => {
                    let clamped = clamp_start_level(level);
                    if clamped != level {
                        warnings.push(format!(
                            "[Config] {}={} out of range, using {}",
                            ENV_START_LEVEL, level, clamped
                        ));
                    }
                    clamped
                }
                Err(_) => {
                    warnings.push(format!(
                        "[Config] Ignoring {}={:?}: not a number",
                        ENV_START_LEVEL, raw
                    ));
                    1
                }
            },
            None => 1,
        };

        Self {
            score_path,
            seed,
            start_level,
            warnings,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.score_path, PathBuf::from("highscore.json"));
        assert_eq!(config.start_level, 1);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_explicit_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_SCORE_PATH, " /tmp/scores.json "),
            (ENV_SEED, "42"),
            (ENV_START_LEVEL, "3"),
        ]));
        assert_eq!(config.score_path, PathBuf::from("/tmp/scores.json"));
        assert_eq!(config.seed, 42);
        assert_eq!(config.start_level, 3);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_blank_score_path_uses_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_SCORE_PATH, "   ")]));
        assert_eq!(config.score_path, PathBuf::from(DEFAULT_SCORE_PATH));
    }

    #[test]
    fn test_start_level_is_clamped_with_warning() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_START_LEVEL, "9")]));
        assert_eq!(config.start_level, 5);
        assert_eq!(config.warnings.len(), 1);

        let config = AppConfig::from_lookup(lookup_from(&[(ENV_START_LEVEL, "0")]));
        assert_eq!(config.start_level, 1);
        assert_eq!(config.warnings.len(), 1);
    }

    #[test]
    fn test_garbage_values_fall_back_with_warnings() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_SEED, "abc"),
            (ENV_START_LEVEL, "fast"),
        ]));
        assert_eq!(config.start_level, 1);
        assert_eq!(config.warnings.len(), 2);
        assert!(config.warnings.iter().all(|w| w.starts_with("[Config]")));
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = AppConfig::from_env();
    }
}
