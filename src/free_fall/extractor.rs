use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::ObjectiveError;
use crate::free_fall::ThresholdBand;

/// What to do with a run that is still inside the band when the series ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingIntervalPolicy {
    /// Discard the open run. A flight that never leaves the band scores zero.
    #[default]
    Drop,
    /// Close the open run at the time of the last sample.
    Flush,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanState {
    Searching,
    InBand { entrance: f64 },
}

/// Single-pass accumulator over (time, acceleration) samples.
///
/// Samples must be pushed in time order. Only durations leave the scanner;
/// the intervals themselves are not kept.
#[derive(Debug, Clone)]
pub struct IntervalScanner {
    band: ThresholdBand,
    state: ScanState,
    last_time: Option<f64>,
}

impl IntervalScanner {
    pub fn new(band: ThresholdBand) -> Self {
        IntervalScanner {
            band,
            state: ScanState::Searching,
            last_time: None,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Feeds one sample. Returns the duration of the interval this sample
    /// closes, if any.
    pub fn push(&mut self, time: f64, acceleration: f64) -> Option<f64> {
        self.last_time = Some(time);

        match (self.state, self.band.contains(acceleration)) {
            (ScanState::Searching, true) => {
                self.state = ScanState::InBand { entrance: time };
                None
            }
            (ScanState::InBand { entrance }, false) => {
                self.state = ScanState::Searching;
                let duration = time - entrance;
                trace!(entrance, exit = time, duration, "free-fall interval closed");
                Some(duration)
            }
            (ScanState::InBand { .. }, true) | (ScanState::Searching, false) => None,
        }
    }

    /// Ends the scan. With `Flush`, an open run is closed at the last pushed
    /// sample's time; with `Drop` it is discarded.
    pub fn finish(self, policy: TrailingIntervalPolicy) -> Option<f64> {
        let ScanState::InBand { entrance } = self.state else {
            return None;
        };

        match (policy, self.last_time) {
            (TrailingIntervalPolicy::Flush, Some(last)) => Some(last - entrance),
            _ => {
                debug!(entrance, "series ended inside the band, trailing interval dropped");
                None
            }
        }
    }
}

/// Durations of all maximal in-band runs, in time order.
pub fn extract_durations(
    times: &[f64],
    accelerations: &[f64],
    band: &ThresholdBand,
    policy: TrailingIntervalPolicy,
) -> Result<Vec<f64>, ObjectiveError> {
    if times.len() != accelerations.len() {
        return Err(ObjectiveError::InvalidInput(format!(
            "time series has {} samples but acceleration series has {}",
            times.len(),
            accelerations.len()
        )));
    }

    let mut scanner = IntervalScanner::new(*band);
    let mut durations: Vec<f64> = times
        .iter()
        .zip(accelerations)
        .filter_map(|(&time, &acceleration)| scanner.push(time, acceleration))
        .collect();

    if let Some(trailing) = scanner.finish(policy) {
        durations.push(trailing);
    }

    Ok(durations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const G: f64 = -9.81;
    const OUT: f64 = -20.0;

    fn band() -> ThresholdBand {
        ThresholdBand::new(G, 0.05).unwrap()
    }

    fn scan(times: &[f64], accelerations: &[f64]) -> Vec<f64> {
        extract_durations(times, accelerations, &band(), TrailingIntervalPolicy::Drop).unwrap()
    }

    #[test]
    fn test_single_interior_run() {
        let times = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let accelerations = [OUT, G, G, G, OUT, OUT];

        assert_eq!(scan(&times, &accelerations), vec![3.0]);
    }

    #[test]
    fn test_two_disjoint_runs_in_order() {
        let times = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let accelerations = [OUT, G, OUT, OUT, G, G, G, OUT, OUT];

        assert_eq!(scan(&times, &accelerations), vec![1.0, 3.0]);
    }

    #[test]
    fn test_empty_series_has_no_intervals() {
        assert!(scan(&[], &[]).is_empty());

        let flushed = extract_durations(&[], &[], &band(), TrailingIntervalPolicy::Flush).unwrap();
        assert!(flushed.is_empty());
    }

    #[test]
    fn test_series_outside_band_has_no_intervals() {
        let times = [0.0, 1.0, 2.0, 3.0];
        let accelerations = [0.0, 15.0, OUT, -9.0];

        assert!(scan(&times, &accelerations).is_empty());
    }

    #[test]
    fn test_trailing_run_is_dropped_by_default() {
        let times = [0.0, 1.0, 2.0];
        let accelerations = [G, G, G];

        assert!(scan(&times, &accelerations).is_empty());

        let times = [0.0, 1.0, 2.0, 3.0, 4.0];
        let accelerations = [G, OUT, OUT, G, G];
        assert_eq!(scan(&times, &accelerations), vec![1.0]);
    }

    #[test]
    fn test_trailing_run_is_closed_when_flushing() {
        let times = [0.0, 1.0, 2.0, 3.0, 4.0];
        let accelerations = [G, OUT, OUT, G, G];

        let durations =
            extract_durations(&times, &accelerations, &band(), TrailingIntervalPolicy::Flush)
                .unwrap();
        assert_eq!(durations, vec![1.0, 1.0]);
    }

    #[test]
    fn test_flush_of_single_in_band_sample_is_zero() {
        let durations =
            extract_durations(&[2.5], &[G], &band(), TrailingIntervalPolicy::Flush).unwrap();
        assert_eq!(durations, vec![0.0]);
    }

    #[test]
    fn test_run_starting_at_first_sample() {
        let times = [0.0, 0.5, 1.0, 1.5];
        let accelerations = [G, G, OUT, G];

        assert_eq!(scan(&times, &accelerations), vec![1.0]);
    }

    #[test]
    fn test_boundary_samples_count_as_in_band() {
        let band = band();
        let times = [0.0, 1.0, 2.0, 3.0];
        let accelerations = [OUT, band.low(), band.high(), OUT];

        let durations =
            extract_durations(&times, &accelerations, &band, TrailingIntervalPolicy::Drop)
                .unwrap();
        assert_eq!(durations, vec![2.0]);
    }

    #[test]
    fn test_non_finite_samples_break_a_run() {
        let times = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let accelerations = [G, G, f64::NAN, G, f64::NEG_INFINITY, G, f64::INFINITY];

        assert_eq!(scan(&times, &accelerations), vec![2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_uneven_sampling() {
        let times = [0.0, 0.13, 0.2, 0.71, 1.05];
        let accelerations = [OUT, -9.7, -9.9, -10.1, OUT];

        let durations = scan(&times, &accelerations);
        assert_eq!(durations.len(), 1);
        assert_abs_diff_eq!(durations[0], 0.92, epsilon = 1e-12);
    }

    #[test]
    fn test_mismatched_lengths_fail() {
        let result = extract_durations(
            &[0.0, 1.0, 2.0],
            &[G, G],
            &band(),
            TrailingIntervalPolicy::Drop,
        );
        assert!(matches!(result, Err(ObjectiveError::InvalidInput(_))));
    }

    #[test]
    fn test_scanner_state_transitions() {
        let mut scanner = IntervalScanner::new(band());
        assert_eq!(scanner.state(), ScanState::Searching);

        assert_eq!(scanner.push(0.0, OUT), None);
        assert_eq!(scanner.state(), ScanState::Searching);

        assert_eq!(scanner.push(1.0, G), None);
        assert_eq!(scanner.state(), ScanState::InBand { entrance: 1.0 });

        assert_eq!(scanner.push(2.0, -9.5), None);
        assert_eq!(scanner.state(), ScanState::InBand { entrance: 1.0 });

        assert_eq!(scanner.push(3.5, OUT), Some(2.5));
        assert_eq!(scanner.state(), ScanState::Searching);

        assert_eq!(scanner.finish(TrailingIntervalPolicy::Flush), None);
    }

    #[test]
    fn test_entrance_time_of_minus_one_is_not_special() {
        let times = [-2.0, -1.0, 0.0, 1.0];
        let accelerations = [OUT, G, G, OUT];

        assert_eq!(scan(&times, &accelerations), vec![2.0]);
    }
}
