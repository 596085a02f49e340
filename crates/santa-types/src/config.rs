//! Configuration types for draws and the draw ledger.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Search bounds handed to the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DrawLimits {
    /// Maximum number of candidates the search may examine. `None` lets the
    /// search run until it finds a draw or proves none exists.
    pub max_steps: Option<u64>,
}

impl DrawLimits {
    #[must_use]
    pub fn unbounded() -> Self {
        Self { max_steps: None }
    }

    #[must_use]
    pub fn with_max_steps(max_steps: u64) -> Self {
        Self {
            max_steps: Some(max_steps),
        }
    }
}

/// How a single draw is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Step budget; see [`DrawLimits::max_steps`].
    pub max_steps: Option<u64>,
    /// Fixed RNG seed for reproducible draws. Production leaves this unset
    /// so every run is independently random.
    pub seed: Option<u64>,
}

impl DrawConfig {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn limits(&self) -> DrawLimits {
        DrawLimits {
            max_steps: self.max_steps,
        }
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            max_steps: constants::DEFAULT_MAX_STEPS,
            seed: None,
        }
    }
}

/// Configuration of the draw ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub draw: DrawConfig,
    /// Re-check each matcher result against the sealed roster before it is
    /// committed.
    pub verify_before_commit: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            draw: DrawConfig::default(),
            verify_before_commit: constants::DEFAULT_VERIFY_BEFORE_COMMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_config_defaults() {
        let cfg = DrawConfig::default();
        assert_eq!(cfg.max_steps, None);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.limits(), DrawLimits::unbounded());
    }

    #[test]
    fn seeded_config_keeps_default_budget() {
        let cfg = DrawConfig::seeded(7);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.max_steps, constants::DEFAULT_MAX_STEPS);
    }

    #[test]
    fn limits_carry_step_budget() {
        let cfg = DrawConfig {
            max_steps: Some(500),
            seed: None,
        };
        assert_eq!(cfg.limits(), DrawLimits::with_max_steps(500));
    }

    #[test]
    fn ledger_config_from_partial_json() {
        let cfg: LedgerConfig = serde_json::from_str(r#"{"draw":{"seed":3}}"#).unwrap();
        assert_eq!(cfg.draw.seed, Some(3));
        assert_eq!(cfg.draw.max_steps, None);
        assert!(cfg.verify_before_commit);
    }

    #[test]
    fn ledger_config_serde_roundtrip() {
        let cfg = LedgerConfig {
            draw: DrawConfig {
                max_steps: Some(10_000),
                seed: Some(99),
            },
            verify_before_commit: false,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: LedgerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
