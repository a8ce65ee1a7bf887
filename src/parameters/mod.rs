pub mod free_fall_time;
pub mod maximum_altitude;
pub mod total_flight_time;

use std::fmt;

use tracing::warn;

use crate::constants::PRIMARY_BRANCH;
use crate::errors::ObjectiveError;
use crate::flight_data::{FlightDataBranch, FlightDataSource, FlightDataType};

pub use free_fall_time::FreeFallTimeParameter;
pub use maximum_altitude::MaximumAltitudeParameter;
pub use total_flight_time::TotalFlightTimeParameter;

/// Measurement category of a parameter's value, for downstream formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitFamily {
    FlightTime,
    Distance,
    Velocity,
    Acceleration,
}

impl UnitFamily {
    pub fn si_unit(&self) -> &'static str {
        match self {
            UnitFamily::FlightTime => "s",
            UnitFamily::Distance => "m",
            UnitFamily::Velocity => "m/s",
            UnitFamily::Acceleration => "m/s²",
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitFamily::FlightTime => "flight time",
            UnitFamily::Distance => "distance",
            UnitFamily::Velocity => "velocity",
            UnitFamily::Acceleration => "acceleration",
        };
        f.write_str(name)
    }
}

/// A named scalar derived from one simulation run, used as an optimizer
/// objective.
///
/// Implementations hold only immutable configuration, so a single instance
/// can be shared across worker threads and evaluated concurrently.
pub trait OptimizableParameter: Send + Sync {
    fn name(&self) -> &str;

    fn unit_family(&self) -> UnitFamily;

    fn evaluate(&self, data: &dyn FlightDataSource) -> Result<f64, ObjectiveError>;

    /// Like `evaluate`, but reports any failure as `NaN`, the value the
    /// optimizer treats as an infeasible design.
    fn evaluate_or_nan(&self, data: &dyn FlightDataSource) -> f64 {
        match self.evaluate(data) {
            Ok(value) => value,
            Err(e) => {
                warn!(parameter = self.name(), error = %e, "parameter evaluation failed");
                f64::NAN
            }
        }
    }
}

/// The primary trajectory of a successful simulation.
pub fn primary_branch(data: &dyn FlightDataSource) -> Result<&FlightDataBranch, ObjectiveError> {
    if let Some(reason) = data.failure() {
        return Err(ObjectiveError::SimulationFailed(reason.to_string()));
    }
    data.branch(PRIMARY_BRANCH)
        .ok_or(ObjectiveError::MissingBranch(PRIMARY_BRANCH))
}

pub fn required_series(
    branch: &FlightDataBranch,
    series: FlightDataType,
) -> Result<&[f64], ObjectiveError> {
    branch.get(series).ok_or(ObjectiveError::MissingSeries {
        branch: PRIMARY_BRANCH,
        series,
    })
}
