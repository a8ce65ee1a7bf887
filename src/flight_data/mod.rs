pub mod branch;
pub mod data_type;
pub mod synthetic;

pub use branch::{FlightData, FlightDataBranch, FlightDataSource};
pub use data_type::FlightDataType;
