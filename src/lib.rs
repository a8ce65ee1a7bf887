pub mod constants;
pub mod errors;
pub mod flight_data;
pub mod free_fall;
pub mod parameters;
pub mod utils;

pub use constants::*;
pub use errors::ObjectiveError;
pub use flight_data::synthetic::SyntheticProfile;
pub use flight_data::{FlightData, FlightDataBranch, FlightDataSource, FlightDataType};

// Re-export the free-fall core
pub use free_fall::{
    extract_durations, longest_duration, longest_free_fall, FreeFallConfig, IntervalScanner,
    ScanState, ThresholdBand, TrailingIntervalPolicy,
};

// Re-export the optimizer-facing parameters
pub use parameters::{
    FreeFallTimeParameter, MaximumAltitudeParameter, OptimizableParameter,
    TotalFlightTimeParameter, UnitFamily,
};
