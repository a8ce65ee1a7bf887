use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::errors::ObjectiveError;
use crate::flight_data::FlightDataType;

/// Read access to the output of one simulation run.
///
/// Branch 0 is the primary (sustainer) trajectory and must exist whenever
/// the simulation succeeded.
pub trait FlightDataSource {
    fn branch(&self, index: usize) -> Option<&FlightDataBranch>;

    /// Reason the upstream simulation aborted, if it did.
    fn failure(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightDataBranch {
    pub name: String,
    #[serde(default)]
    pub series: BTreeMap<FlightDataType, Vec<f64>>,
}

impl FlightDataBranch {
    pub fn new(name: impl Into<String>) -> Self {
        FlightDataBranch {
            name: name.into(),
            series: BTreeMap::new(),
        }
    }

    pub fn with_series(mut self, data_type: FlightDataType, values: Vec<f64>) -> Self {
        self.series.insert(data_type, values);
        self
    }

    pub fn get(&self, data_type: FlightDataType) -> Option<&[f64]> {
        self.series.get(&data_type).map(Vec::as_slice)
    }

    /// Number of samples in the time series, or 0 if there is none.
    pub fn len(&self) -> usize {
        self.get(FlightDataType::Time).map_or(0, <[f64]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every series of a branch shares the sample alignment of its time series.
    pub fn validate(&self) -> Result<(), ObjectiveError> {
        let expected = self.len();
        for (data_type, values) in &self.series {
            if values.len() != expected {
                return Err(ObjectiveError::InvalidInput(format!(
                    "branch '{}': {} has {} samples, time has {}",
                    self.name,
                    data_type,
                    values.len(),
                    expected
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightData {
    #[serde(default)]
    pub branches: Vec<FlightDataBranch>,
    #[serde(default)]
    pub failure: Option<String>,
}

impl FlightData {
    pub fn new(branches: Vec<FlightDataBranch>) -> Self {
        FlightData {
            branches,
            failure: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        FlightData {
            branches: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ObjectiveError> {
        let data: FlightData = serde_json::from_str(json)
            .map_err(|e| ObjectiveError::InvalidInput(format!("malformed flight data: {}", e)))?;
        data.validate()?;
        Ok(data)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ObjectiveError> {
        let data: FlightData = serde_json::from_reader(reader)
            .map_err(|e| ObjectiveError::InvalidInput(format!("malformed flight data: {}", e)))?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), ObjectiveError> {
        self.branches.iter().try_for_each(FlightDataBranch::validate)
    }
}

impl FlightDataSource for FlightData {
    fn branch(&self, index: usize) -> Option<&FlightDataBranch> {
        self.branches.get(index)
    }

    fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}
