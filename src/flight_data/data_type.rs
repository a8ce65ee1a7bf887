use std::fmt;

use serde::{Deserialize, Serialize};

/// Named series a simulated branch can carry. All values are SI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightDataType {
    Time,
    Altitude,
    VelocityZ,
    AccelerationZ,
    TotalVelocity,
    TotalAcceleration,
}

impl FlightDataType {
    pub fn label(&self) -> &'static str {
        match self {
            FlightDataType::Time => "time",
            FlightDataType::Altitude => "altitude",
            FlightDataType::VelocityZ => "vertical velocity",
            FlightDataType::AccelerationZ => "vertical acceleration",
            FlightDataType::TotalVelocity => "total velocity",
            FlightDataType::TotalAcceleration => "total acceleration",
        }
    }
}

impl fmt::Display for FlightDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
