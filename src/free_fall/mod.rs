pub mod band;
pub mod extractor;
pub mod reducer;

pub use band::{FreeFallConfig, ThresholdBand};
pub use extractor::{extract_durations, IntervalScanner, ScanState, TrailingIntervalPolicy};
pub use reducer::longest_duration;

use crate::errors::ObjectiveError;

/// Longest free-fall window in one aligned time/acceleration series.
pub fn longest_free_fall(
    times: &[f64],
    accelerations: &[f64],
    band: &ThresholdBand,
    policy: TrailingIntervalPolicy,
) -> Result<f64, ObjectiveError> {
    let durations = extract_durations(times, accelerations, band, policy)?;
    Ok(longest_duration(&durations))
}
