use tracing::debug;

use crate::errors::ObjectiveError;
use crate::flight_data::{FlightDataSource, FlightDataType};
use crate::free_fall::{longest_free_fall, FreeFallConfig, ThresholdBand, TrailingIntervalPolicy};
use crate::parameters::{primary_branch, required_series, OptimizableParameter, UnitFamily};

/// Longest stretch of the primary trajectory during which vertical
/// acceleration stays within the free-fall band.
#[derive(Debug, Clone)]
pub struct FreeFallTimeParameter {
    band: ThresholdBand,
    trailing_policy: TrailingIntervalPolicy,
}

impl FreeFallTimeParameter {
    pub fn new() -> Self {
        FreeFallTimeParameter {
            band: ThresholdBand::default(),
            trailing_policy: TrailingIntervalPolicy::default(),
        }
    }

    pub fn with_config(config: &FreeFallConfig) -> Result<Self, ObjectiveError> {
        Ok(FreeFallTimeParameter {
            band: ThresholdBand::from_config(config)?,
            trailing_policy: config.trailing_policy,
        })
    }

    pub fn band(&self) -> &ThresholdBand {
        &self.band
    }

    pub fn trailing_policy(&self) -> TrailingIntervalPolicy {
        self.trailing_policy
    }

    /// Scores raw series directly, bypassing branch lookup.
    pub fn evaluate_series(
        &self,
        times: &[f64],
        accelerations: &[f64],
    ) -> Result<f64, ObjectiveError> {
        longest_free_fall(times, accelerations, &self.band, self.trailing_policy)
    }
}

impl Default for FreeFallTimeParameter {
    fn default() -> Self {
        Self::new()
    }
}

impl OptimizableParameter for FreeFallTimeParameter {
    fn name(&self) -> &str {
        "Free Fall Time"
    }

    fn unit_family(&self) -> UnitFamily {
        UnitFamily::FlightTime
    }

    fn evaluate(&self, data: &dyn FlightDataSource) -> Result<f64, ObjectiveError> {
        let branch = primary_branch(data)?;
        let times = required_series(branch, FlightDataType::Time)?;
        let accelerations = required_series(branch, FlightDataType::AccelerationZ)?;

        let value = self.evaluate_series(times, accelerations)?;
        debug!(branch = %branch.name, samples = times.len(), value, "free fall time");
        Ok(value)
    }
}
