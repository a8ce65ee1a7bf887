use crate::errors::ObjectiveError;
use crate::flight_data::{FlightDataSource, FlightDataType};
use crate::parameters::{primary_branch, required_series, OptimizableParameter, UnitFamily};

/// Time of the last sample of the primary trajectory.
#[derive(Debug, Clone, Default)]
pub struct TotalFlightTimeParameter;

impl OptimizableParameter for TotalFlightTimeParameter {
    fn name(&self) -> &str {
        "Flight Time"
    }

    fn unit_family(&self) -> UnitFamily {
        UnitFamily::FlightTime
    }

    fn evaluate(&self, data: &dyn FlightDataSource) -> Result<f64, ObjectiveError> {
        let branch = primary_branch(data)?;
        let times = required_series(branch, FlightDataType::Time)?;

        Ok(times.last().copied().unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_data::{FlightData, FlightDataBranch};

    #[test]
    fn test_last_sample_time() {
        let data = FlightData::new(vec![FlightDataBranch::new("Sustainer")
            .with_series(FlightDataType::Time, vec![0.0, 0.5, 42.25])]);

        assert_eq!(TotalFlightTimeParameter.evaluate(&data).unwrap(), 42.25);
    }

    #[test]
    fn test_empty_branch_is_zero() {
        let data = FlightData::new(vec![
            FlightDataBranch::new("Sustainer").with_series(FlightDataType::Time, Vec::new())
        ]);

        assert_eq!(TotalFlightTimeParameter.evaluate(&data).unwrap(), 0.0);
    }
}
