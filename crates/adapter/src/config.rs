//! Adapter configuration.

use std::env;
use std::time::Duration;

use crate::core::SessionOptions;
use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, DROPS_PER_SECOND, REPAINTS_PER_SECOND};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    pub rows: usize,
    pub cols: usize,
    pub drops_per_second: u32,
    pub repaints_per_second: u32,
    /// `None` seeds from the clock.
    pub seed: Option<u32>,
    pub prefill: bool,
    pub require_adjacent: bool,
    pub max_pending_commands: usize,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            drops_per_second: DROPS_PER_SECOND,
            repaints_per_second: REPAINTS_PER_SECOND,
            seed: None,
            prefill: false,
            require_adjacent: false,
            max_pending_commands: 32,
        }
    }
}

impl AdapterConfig {
    /// Create from `MATCH_GEMS_*` environment variables.
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AdapterConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).map(|s| s.trim().to_string());

        let rows = parsed("MATCH_GEMS_ROWS")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.rows);
        let cols = parsed("MATCH_GEMS_COLS")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.cols);
        let drops_per_second = parsed("MATCH_GEMS_DROPS_PER_SECOND")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &u32| n > 0)
            .unwrap_or(defaults.drops_per_second);
        let repaints_per_second = parsed("MATCH_GEMS_REPAINTS_PER_SECOND")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &u32| n > 0)
            .unwrap_or(defaults.repaints_per_second);
        let seed = parsed("MATCH_GEMS_SEED").and_then(|s| s.parse().ok());
        let prefill = parsed("MATCH_GEMS_PREFILL")
            .map(|s| parse_flag(&s))
            .unwrap_or(defaults.prefill);
        let require_adjacent = parsed("MATCH_GEMS_REQUIRE_ADJACENT")
            .map(|s| parse_flag(&s))
            .unwrap_or(defaults.require_adjacent);

        Self {
            rows,
            cols,
            drops_per_second,
            repaints_per_second,
            seed,
            prefill,
            require_adjacent,
            max_pending_commands: defaults.max_pending_commands,
        }
    }

    pub fn drop_period(&self) -> Duration {
        Duration::from_millis(1000 / self.drops_per_second.max(1) as u64)
    }

    pub fn repaint_period(&self) -> Duration {
        Duration::from_millis(1000 / self.repaints_per_second.max(1) as u64)
    }

    /// Session options; an unset seed is resolved once here from the clock.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            rows: self.rows,
            cols: self.cols,
            seed: self
                .seed
                .unwrap_or_else(|| crate::core::SimpleRng::from_time().state()),
            prefill: self.prefill,
            require_adjacent: self.require_adjacent,
        }
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
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
    fn empty_environment_gives_defaults() {
        assert_eq!(AdapterConfig::from_lookup(|_| None), AdapterConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let cfg = AdapterConfig::from_lookup(lookup(&[
            ("MATCH_GEMS_ROWS", "8"),
            ("MATCH_GEMS_COLS", " 6 "),
            ("MATCH_GEMS_DROPS_PER_SECOND", "10"),
            ("MATCH_GEMS_SEED", "42"),
            ("MATCH_GEMS_PREFILL", "true"),
            ("MATCH_GEMS_REQUIRE_ADJACENT", "1"),
        ]));
        assert_eq!(cfg.rows, 8);
        assert_eq!(cfg.cols, 6);
        assert_eq!(cfg.drop_period(), Duration::from_millis(100));
        assert_eq!(cfg.seed, Some(42));
        assert!(cfg.prefill);
        assert!(cfg.require_adjacent);
        assert_eq!(cfg.session_options().seed, 42);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = AdapterConfig::from_lookup(lookup(&[
            ("MATCH_GEMS_ROWS", "0"),
            ("MATCH_GEMS_COLS", "wide"),
            ("MATCH_GEMS_REPAINTS_PER_SECOND", "-3"),
        ]));
        assert_eq!(cfg.rows, DEFAULT_ROWS);
        assert_eq!(cfg.cols, DEFAULT_COLS);
        assert_eq!(cfg.repaints_per_second, REPAINTS_PER_SECOND);
    }
}
