/// Longest of the detected durations, `0.0` when there are none.
pub fn longest_duration(durations: &[f64]) -> f64 {
    durations.iter().copied().fold(0.0, f64::max)
}
