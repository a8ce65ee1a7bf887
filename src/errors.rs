use thiserror::Error;

use crate::flight_data::FlightDataType;

#[derive(Debug, Error)]
pub enum ObjectiveError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Flight data has no branch {0}")]
    MissingBranch(usize),

    #[error("Branch {branch} has no {series} series")]
    MissingSeries {
        branch: usize,
        series: FlightDataType,
    },

    #[error("Simulation failed: {0}")]
    SimulationFailed(String),
}
