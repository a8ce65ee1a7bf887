use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{FREE_FALL_TOLERANCE, STANDARD_GRAVITY};
use crate::errors::ObjectiveError;
use crate::free_fall::TrailingIntervalPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeFallConfig {
    /// Reference acceleration in m/s², negative when the axis points up.
    pub gravity: f64,
    /// Relative width of the band around `gravity`, in `[0, 1)`.
    pub tolerance: f64,
    pub trailing_policy: TrailingIntervalPolicy,
}

impl Default for FreeFallConfig {
    fn default() -> Self {
        FreeFallConfig {
            gravity: STANDARD_GRAVITY,
            tolerance: FREE_FALL_TOLERANCE,
            trailing_policy: TrailingIntervalPolicy::default(),
        }
    }
}

impl FreeFallConfig {
    pub fn new(gravity: f64, tolerance: f64) -> Self {
        FreeFallConfig {
            gravity,
            tolerance,
            ..Default::default()
        }
    }

    pub fn with_trailing_policy(mut self, policy: TrailingIntervalPolicy) -> Self {
        self.trailing_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ObjectiveError> {
        if !self.gravity.is_finite() {
            return Err(ObjectiveError::Configuration(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 || self.tolerance >= 1.0 {
            return Err(ObjectiveError::Configuration(format!(
                "tolerance must lie in [0, 1), got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Inclusive acceleration interval `[low, high]` counted as free fall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdBand {
    low: f64,
    high: f64,
}

impl ThresholdBand {
    /// For negative gravity `g * (1 + t)` is the lower bound; the bounds are
    /// ordered so a positive-up convention works as well.
    pub fn new(gravity: f64, tolerance: f64) -> Result<Self, ObjectiveError> {
        FreeFallConfig::new(gravity, tolerance).validate()?;

        let narrow = gravity * (1.0 - tolerance);
        let wide = gravity * (1.0 + tolerance);
        let band = ThresholdBand {
            low: narrow.min(wide),
            high: narrow.max(wide),
        };
        debug!(low = band.low, high = band.high, "free-fall band");
        Ok(band)
    }

    pub fn from_config(config: &FreeFallConfig) -> Result<Self, ObjectiveError> {
        Self::new(config.gravity, config.tolerance)
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// NaN never compares, so it is always outside the band.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl Default for ThresholdBand {
    fn default() -> Self {
        let config = FreeFallConfig::default();
        ThresholdBand {
            low: config.gravity * (1.0 + config.tolerance),
            high: config.gravity * (1.0 - config.tolerance),
        }
    }
}
