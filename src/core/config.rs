//! Draw policy configuration.
//!
//! The reversal probability and the results delay are presentation policy,
//! not properties of the cards. Both are named here instead of being
//! scattered through the engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Chance that a drawn card comes up reversed when reversals are enabled.
pub const DEFAULT_REVERSAL_PROBABILITY: f64 = 0.3;

/// Delay between the final reveal and the results view, in milliseconds.
/// Long enough for the last flip animation to finish.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1500;

/// Draw engine and session policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Probability in `[0, 1]` that a card is reversed (reversals enabled only).
    pub reversal_probability: f64,

    /// Milliseconds from the completing reveal to the results view.
    pub reveal_delay_ms: u64,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            reversal_probability: DEFAULT_REVERSAL_PROBABILITY,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}

impl DrawConfig {
    /// Set the reversal probability.
    #[must_use]
    pub fn with_reversal_probability(mut self, p: f64) -> Self {
        self.reversal_probability = p;
        self
    }

    /// Set the results delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// The results delay as a `Duration`.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.reversal_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::ReversalProbability(p));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
