use crate::errors::ObjectiveError;
use crate::flight_data::{FlightDataSource, FlightDataType};
use crate::parameters::{primary_branch, required_series, OptimizableParameter, UnitFamily};

/// Apogee of the primary trajectory. A flight with no altitude samples
/// scores zero.
#[derive(Debug, Clone, Default)]
pub struct MaximumAltitudeParameter;

impl OptimizableParameter for MaximumAltitudeParameter {
    fn name(&self) -> &str {
        "Maximum Altitude"
    }

    fn unit_family(&self) -> UnitFamily {
        UnitFamily::Distance
    }

    fn evaluate(&self, data: &dyn FlightDataSource) -> Result<f64, ObjectiveError> {
        let branch = primary_branch(data)?;
        let altitudes = required_series(branch, FlightDataType::Altitude)?;

        Ok(altitudes
            .iter()
            .copied()
            .filter(|altitude| altitude.is_finite())
            .fold(0.0, f64::max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_data::{FlightData, FlightDataBranch};

    #[test]
    fn test_apogee() {
        let data = FlightData::new(vec![FlightDataBranch::new("Sustainer")
            .with_series(FlightDataType::Time, vec![0.0, 1.0, 2.0, 3.0])
            .with_series(FlightDataType::Altitude, vec![0.0, 120.0, f64::NAN, 80.0])]);

        let parameter = MaximumAltitudeParameter;
        assert_eq!(parameter.evaluate(&data).unwrap(), 120.0);
        assert_eq!(parameter.unit_family(), UnitFamily::Distance);
    }

    #[test]
    fn test_missing_branch() {
        let result = MaximumAltitudeParameter.evaluate(&FlightData::default());
        assert!(matches!(result, Err(ObjectiveError::MissingBranch(0))));
    }
}
